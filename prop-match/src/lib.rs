//! Argument matchers that compare named properties of an object.
//!
//! Instead of requiring full equality of a call argument, a
//! [`PropertyMatcher`] only checks the properties a test cares about. The
//! expected values are passed as a single name/value pair, as a map of names
//! to values, or are read from a reference object.
//!
//! ```
//! use prop_match::{matcher::properties_like_except, Matcher, Properties};
//!
//! #[derive(Properties)]
//! #[properties(rename_all = "camelCase")]
//! struct Order {
//!     id: u64,
//!     customer: String,
//!     int_value: i32,
//! }
//!
//! let reference = Order { id: 0, customer: "alice".into(), int_value: 5 };
//! let matcher = properties_like_except(&reference, ["id"]).unwrap();
//!
//! assert!(matcher.matches(&Order { id: 42, customer: "alice".into(), int_value: 5 }));
//! assert!(!matcher.matches(&Order { id: 42, customer: "bob".into(), int_value: 5 }));
//! ```

#![warn(
    unused,
    clippy::pedantic,
    future_incompatible,
    missing_debug_implementations,
    nonstandard_style,
    rust_2018_idioms,
    rust_2021_compatibility
)]
#![allow(clippy::module_name_repetitions)]

pub mod args;
pub mod context;
pub mod error;
pub mod extract;
pub mod matcher;
pub mod properties;
pub mod value;

pub use prop_match_macros::Properties;

pub use context::{
    pull_matcher, pull_matchers, report_matcher, reported_count, MatcherContext, ReportedMatcher,
};
pub use error::Error;
pub use extract::{extract, extract_all, PropertyMap};
pub use matcher::{Matcher, PropertyMatcher};
pub use properties::{Properties, TYPE_PROPERTY};
pub use value::{DynValue, ToValue, Value};
