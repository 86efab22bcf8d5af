//! The [`args`](self) module contains the entry points that are used in place
//! of an argument while an expected call is recorded.
//!
//! Each function reports a [`PropertyMatcher`] to the current
//! [`MatcherContext`](crate::MatcherContext) and returns a placeholder value
//! (`T::default()`) that only exists to satisfy the signature of the recorded
//! call. The placeholder itself is never inspected.
//!
//! ```
//! use prop_match::{args::property_eq, pull_matcher, Matcher, Properties};
//!
//! #[derive(Default, Properties)]
//! #[properties(rename_all = "camelCase")]
//! struct Item {
//!     int_value: i32,
//! }
//!
//! let _placeholder: Item = property_eq("intValue", 5);
//!
//! let matcher = pull_matcher::<Item>().unwrap().unwrap();
//! assert!(matcher.matches(&Item { int_value: 5 }));
//! ```

use crate::context::report_matcher;
use crate::matcher::{self, PropertyMatcher};
use crate::{Error, Properties, ToValue};

/// Report a matcher for an argument of type `T` whose property `name` is
/// equal to `value`.
///
/// The type of `value` must be the type of the property, see
/// [`matcher::property_eq`].
pub fn property_eq<T, N, V>(name: N, value: V) -> T
where
    T: Properties + Default + 'static,
    N: Into<String>,
    V: ToValue,
{
    report::<T>(matcher::property_eq(name, value))
}

/// Report a matcher for an argument of type `T` whose properties are equal
/// to the passed name/value pairs.
pub fn properties_eq<T, I, N, V>(properties: I) -> T
where
    T: Properties + Default + 'static,
    I: IntoIterator<Item = (N, V)>,
    N: Into<String>,
    V: ToValue,
{
    report::<T>(matcher::properties_eq(properties))
}

/// Report a matcher for an argument of type `T` whose properties are equal
/// to the properties of `reference`.
///
/// # Errors
/// Returns [`Error::Extraction`] if the properties of `reference` could not
/// be read. Nothing is reported in that case.
pub fn properties_like<T, R>(reference: &R) -> Result<T, Error>
where
    T: Properties + Default + 'static,
    R: Properties + ?Sized,
{
    matcher::properties_like(reference).map(report::<T>)
}

/// Like [`properties_like`], but the properties named in `ignored` are not
/// compared.
///
/// # Errors
/// Returns [`Error::Extraction`] if the properties of `reference` could not
/// be read. Nothing is reported in that case.
pub fn properties_like_except<T, R, I>(reference: &R, ignored: I) -> Result<T, Error>
where
    T: Properties + Default + 'static,
    R: Properties + ?Sized,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    matcher::properties_like_except(reference, ignored).map(report::<T>)
}

/// Like [`properties_like`], but the argument type is the type of
/// `reference`.
///
/// # Errors
/// Returns [`Error::Extraction`] if the properties of `reference` could not
/// be read.
pub fn same_properties<T>(reference: &T) -> Result<T, Error>
where
    T: Properties + Default + 'static,
{
    properties_like::<T, T>(reference)
}

/// Like [`properties_like_except`], but the argument type is the type of
/// `reference`.
///
/// # Errors
/// Returns [`Error::Extraction`] if the properties of `reference` could not
/// be read.
pub fn same_properties_except<T, I>(reference: &T, ignored: I) -> Result<T, Error>
where
    T: Properties + Default + 'static,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    properties_like_except::<T, T, I>(reference, ignored)
}

/// Previous name of [`property_eq`].
#[deprecated(since = "0.1.0", note = "Use `property_eq` instead")]
pub fn bean_property_eq<T, N, V>(name: N, value: V) -> T
where
    T: Properties + Default + 'static,
    N: Into<String>,
    V: ToValue,
{
    property_eq(name, value)
}

/// Previous name of [`properties_eq`].
#[deprecated(since = "0.1.0", note = "Use `properties_eq` instead")]
pub fn bean_properties_eq<T, I, N, V>(properties: I) -> T
where
    T: Properties + Default + 'static,
    I: IntoIterator<Item = (N, V)>,
    N: Into<String>,
    V: ToValue,
{
    properties_eq(properties)
}

/// Previous name of [`properties_like`].
///
/// # Errors
/// See [`properties_like`].
#[deprecated(since = "0.1.0", note = "Use `properties_like` instead")]
pub fn bean_properties_like<T, R>(reference: &R) -> Result<T, Error>
where
    T: Properties + Default + 'static,
    R: Properties + ?Sized,
{
    properties_like(reference)
}

fn report<T>(matcher: PropertyMatcher) -> T
where
    T: Properties + Default + 'static,
{
    report_matcher::<T, _>(matcher);

    T::default()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::{properties_eq, properties_like_except, property_eq, same_properties};
    use crate::{pull_matcher, reported_count, Error, Matcher, MatcherContext, ToValue, Value};

    type Object = HashMap<String, Value>;

    fn object(a: i32, b: i32) -> Object {
        Object::from([("a".into(), a.to_value()), ("b".into(), b.to_value())])
    }

    #[test]
    fn each_entry_point_reports_once() {
        let _context = MatcherContext::new();

        let placeholder: Object = property_eq("a", 1);
        assert!(placeholder.is_empty());

        let _: Object = properties_eq([("a", 1), ("b", 2)]);
        let _: Object = properties_like_except(&object(1, 2), ["b"]).unwrap();
        let _ = same_properties(&object(1, 2)).unwrap();

        assert_eq!(4, reported_count());

        let target = object(1, 3);
        let results = std::iter::from_fn(|| pull_matcher::<Object>().unwrap())
            .map(|m| m.matches(&target))
            .collect::<Vec<_>>();

        assert_eq!(vec![true, false, true, false], results);
    }

    #[test]
    fn extraction_failure_reports_nothing() {
        let _context = MatcherContext::new();

        let err = properties_like_except::<Object, _, _>(&None::<Object>, ["a"]).unwrap_err();

        assert!(matches!(err, Error::Extraction { .. }));
        assert_eq!(0, reported_count());
    }

    #[test]
    #[allow(deprecated)]
    fn deprecated_aliases_delegate() {
        let _context = MatcherContext::new();

        let _: Object = super::bean_property_eq("a", 1);
        let _: Object = super::bean_properties_eq([("a", 1)]);
        let _: Object = super::bean_properties_like(&object(1, 1)).unwrap();

        assert_eq!(3, reported_count());
    }
}
