use std::fmt::{Display, Formatter, Result as FmtResult};
use std::mem::take;

use log::trace;

use crate::extract::{extract, PropertyMap};
use crate::{Error, Properties, ToValue};

use super::Matcher;

/// Create a [`PropertyMatcher`] that expects the property `name` to be equal
/// to `value`.
///
/// Values of different types never match, so the type of `value` must be
/// the type of the property. An untyped integer literal is an `i32`: use
/// `2u8` to match a `u8` property.
pub fn property_eq<N, V>(name: N, value: V) -> PropertyMatcher
where
    N: Into<String>,
    V: ToValue,
{
    PropertyMatcher::single(name, value)
}

/// Create a [`PropertyMatcher`] that expects each named property to be equal
/// to the associated value.
pub fn properties_eq<I, N, V>(properties: I) -> PropertyMatcher
where
    I: IntoIterator<Item = (N, V)>,
    N: Into<String>,
    V: ToValue,
{
    properties.into_iter().collect()
}

/// Create a [`PropertyMatcher`] that expects all properties to be equal to the
/// properties of `reference`.
///
/// # Errors
/// Returns [`Error::Extraction`] if the properties of `reference` could not
/// be read.
pub fn properties_like<R>(reference: &R) -> Result<PropertyMatcher, Error>
where
    R: Properties + ?Sized,
{
    PropertyMatcher::from_object(reference, std::iter::empty::<&str>())
}

/// Like [`properties_like`], but the properties named in `ignored` are not
/// compared.
///
/// # Errors
/// Returns [`Error::Extraction`] if the properties of `reference` could not
/// be read.
pub fn properties_like_except<R, I>(reference: &R, ignored: I) -> Result<PropertyMatcher, Error>
where
    R: Properties + ?Sized,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    PropertyMatcher::from_object(reference, ignored)
}

/// Implements a [`Matcher`] that compares named properties of the argument
/// against a fixed set of expected values.
///
/// A property matches if the expected and the actual value are both null,
/// are the same shared object, or are equal. Properties that can not be read
/// from the argument never match.
#[must_use]
#[derive(Default, Debug, Clone)]
pub struct PropertyMatcher {
    expected: PropertyMap,
}

impl PropertyMatcher {
    /// Create a new [`PropertyMatcher`] from the passed map of expected
    /// properties.
    pub fn new(expected: PropertyMap) -> Self {
        Self { expected }
    }

    /// Create a new [`PropertyMatcher`] that checks a single property.
    pub fn single<N, V>(name: N, value: V) -> Self
    where
        N: Into<String>,
        V: ToValue,
    {
        Self::new(PropertyMap::from([(name.into(), value.to_value())]))
    }

    /// Create a new [`PropertyMatcher`] that expects the properties of
    /// `reference`, except the ones named in `ignored`.
    ///
    /// # Errors
    /// Returns [`Error::Extraction`] if the properties of `reference` could
    /// not be read.
    pub fn from_object<R, I>(reference: &R, ignored: I) -> Result<Self, Error>
    where
        R: Properties + ?Sized,
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        extract(reference, ignored).map(Self::new)
    }

    /// Get the expected properties.
    #[must_use]
    pub fn expected(&self) -> &PropertyMap {
        &self.expected
    }

    /// Number of expected properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.expected.len()
    }

    /// Returns `true` if no property is expected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.expected.is_empty()
    }
}

impl<T> Matcher<T> for PropertyMatcher
where
    T: Properties,
{
    fn matches(&self, value: &T) -> bool {
        if value.is_null() {
            trace!("Argument of type `{}` is null", value.type_name());

            return false;
        }

        self.expected
            .iter()
            .all(|(name, expected)| match value.property(name) {
                Ok(actual) if expected.same_as(&actual) => true,
                Ok(actual) => {
                    trace!(
                        "Property `{name}` of `{}` does not match: expected {expected} ({}), got {actual} ({})",
                        value.type_name(),
                        expected.type_name(),
                        actual.type_name(),
                    );

                    false
                }
                Err(err) => {
                    trace!("Property `{name}` does not match: {err}");

                    false
                }
            })
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(self, f)
    }
}

impl Display for PropertyMatcher {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let mut first = true;

        write!(f, "propertiesEq(")?;

        for (name, value) in &self.expected {
            if !take(&mut first) {
                write!(f, ", ")?;
            }

            write!(f, "{name}={value}")?;
        }

        write!(f, ")")
    }
}

impl<N, V> FromIterator<(N, V)> for PropertyMatcher
where
    N: Into<String>,
    V: ToValue,
{
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        Self::new(
            iter.into_iter()
                .map(|(name, value)| (name.into(), value.to_value()))
                .collect(),
        )
    }
}
