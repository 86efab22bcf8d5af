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

use proc_macro::TokenStream;

mod misc;
mod properties;

/// Implements `prop_match::Properties` for a struct with named fields.
///
/// Every field is exposed as a property named after the field, in addition
/// to the synthetic `type` property.
///
/// Field attributes:
/// - `#[property(rename = "name")]`: expose the field under another name.
/// - `#[property(skip)]`: do not expose the field.
/// - `#[property(getter = method)]`: read the value by calling `method`.
/// - `#[property(try_getter = method)]`: like `getter`, but `method` returns
///   a `Result` whose error is reported as accessor failure.
///
/// Container attributes:
/// - `#[properties(rename_all = "camelCase")]`: rename all fields.
/// - `#[properties(computed(name = "name", getter = method))]`: expose a
///   property that has no backing field (`try_getter` is accepted as well).
///
/// Every exposed value must implement `prop_match::ToValue`. For generic
/// structs a `ToValue` bound is added for the type of each exposed field.
/// The return type of a getter is not known to the macro, so a getter that
/// returns a type parameter needs an explicit bound on the struct, e.g.
/// `struct Wrapper<T: ToValue>`.
#[proc_macro_derive(Properties, attributes(property, properties))]
pub fn derive_properties(input: TokenStream) -> TokenStream {
    properties::exec(input.into()).into()
}
