//! The [`matcher`](self) module defines the [`Matcher`] extension point of the
//! mocking framework and the [`PropertyMatcher`] that implements it.

mod property;

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::marker::PhantomData;

pub use property::{
    properties_eq, properties_like, properties_like_except, property_eq, PropertyMatcher,
};

/// A matcher is used to check if the passed argument matches a pre-defined
/// expectation. It is mostly used to verify the arguments to an expected call.
pub trait Matcher<T> {
    /// Returns `true` if the passed `value` matches the expectations, `false`
    /// otherwise.
    fn matches(&self, value: &T) -> bool;

    /// Write a human readable representation of the matcher to the passed
    /// formatter.
    ///
    /// # Errors
    /// Returns an error if writing to the formatter failed.
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult;
}

impl<T, M> Matcher<T> for Box<M>
where
    M: Matcher<T> + ?Sized,
{
    fn matches(&self, value: &T) -> bool {
        (**self).matches(value)
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        <M as Matcher<T>>::fmt(&**self, f)
    }
}

/// Render the description of any [`Matcher`] into a string.
pub fn describe<T, M>(matcher: &M) -> String
where
    M: Matcher<T> + ?Sized,
{
    Describe::<T, M>(matcher, PhantomData).to_string()
}

struct Describe<'a, T, M: ?Sized>(&'a M, PhantomData<fn(&T)>);

impl<T, M> Display for Describe<'_, T, M>
where
    M: Matcher<T> + ?Sized,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        <M as Matcher<T>>::fmt(self.0, f)
    }
}
