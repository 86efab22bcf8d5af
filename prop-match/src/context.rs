//! The [`context`](self) module implements the thread local registration point
//! for argument matchers.
//!
//! Matchers are reported in argument order while an expected call is being
//! recorded and are pulled by the mocking framework in the same order.
//! Reported matchers live in the innermost [`MatcherContext`] of the current
//! thread, or in the root context of the thread if none was created.
//!
//! The root context is never drained on its own: matchers reported outside of
//! any [`MatcherContext`] that are never pulled stay alive until the thread
//! exits. Use a [`MatcherContext`] per recorded call (or test) to release
//! them early.

use std::any::{type_name, Any, TypeId};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt::{Debug, Display, Formatter, Result as FmtResult};
use std::marker::PhantomData;
use std::mem::take;

use log::{debug, warn};

use crate::matcher::{describe, Matcher};
use crate::Error;

/// Scope for reported matchers.
///
/// Creating a context pushes a new, empty scope for the current thread.
/// Dropping it restores the enclosing scope. Matchers that were reported but
/// never pulled are dropped together with the context.
#[must_use]
#[derive(Debug)]
pub struct MatcherContext {
    _marker: PhantomData<*const ()>,
}

impl MatcherContext {
    /// Create a new [`MatcherContext`] instance.
    pub fn new() -> Self {
        CURRENT_CONTEXT.with(|cell| {
            let mut cell = cell.borrow_mut();
            let parent = take(&mut *cell);

            cell.parent = Some(Box::new(parent));
        });

        Self {
            _marker: PhantomData,
        }
    }
}

impl Default for MatcherContext {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for MatcherContext {
    fn drop(&mut self) {
        // The unused matchers are dropped after the context is released, their
        // destructors may access the context again.
        let unused = CURRENT_CONTEXT.with(|cell| {
            let mut cell = cell.borrow_mut();
            let mut inner = take(&mut *cell);

            *cell = inner.parent.take().map(|x| *x).unwrap_or_default();

            inner.reported
        });

        if !unused.is_empty() {
            warn!(
                "Dropping {} reported matcher(s) that were never used",
                unused.len()
            );
        }

        drop(unused);
    }
}

/// Matcher that was reported for an argument of a specific type.
pub struct ReportedMatcher {
    type_id: TypeId,
    argument_type: &'static str,
    description: String,
    matcher: Box<dyn Any>,
}

impl ReportedMatcher {
    /// Create a new [`ReportedMatcher`] for arguments of type `T`.
    pub fn new<T, M>(matcher: M) -> Self
    where
        T: 'static,
        M: Matcher<T> + 'static,
    {
        let description = describe::<T, M>(&matcher);
        let matcher: Box<dyn Matcher<T>> = Box::new(matcher);

        Self {
            type_id: TypeId::of::<T>(),
            argument_type: type_name::<T>(),
            description,
            matcher: Box::new(matcher),
        }
    }

    /// Name of the argument type the matcher was reported for.
    #[must_use]
    pub fn argument_type(&self) -> &'static str {
        self.argument_type
    }

    /// Returns `true` if the matcher was reported for arguments of type `T`.
    #[must_use]
    pub fn is<T: 'static>(&self) -> bool {
        self.type_id == TypeId::of::<T>()
    }

    /// Get the typed matcher.
    ///
    /// # Errors
    /// Returns [`Error::ArgumentType`] if the matcher was reported for a
    /// different argument type.
    pub fn downcast<T: 'static>(self) -> Result<Box<dyn Matcher<T>>, Error> {
        let reported = self.argument_type;

        self.matcher
            .downcast::<Box<dyn Matcher<T>>>()
            .map(|matcher| *matcher)
            .map_err(|_| Error::ArgumentType {
                expected: type_name::<T>(),
                reported,
            })
    }
}

impl Display for ReportedMatcher {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.description)
    }
}

impl Debug for ReportedMatcher {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("ReportedMatcher")
            .field("argument_type", &self.argument_type)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// Report `matcher` as the matcher for the next argument of type `T`.
pub fn report_matcher<T, M>(matcher: M)
where
    T: 'static,
    M: Matcher<T> + 'static,
{
    let reported = ReportedMatcher::new::<T, M>(matcher);

    debug!(
        "Reported matcher {reported} for argument of type `{}`",
        reported.argument_type
    );

    CURRENT_CONTEXT.with(|cell| cell.borrow_mut().reported.push_back(reported));
}

/// Pull the oldest reported matcher of the current context.
///
/// Returns `Ok(None)` if no matcher was reported.
///
/// # Errors
/// Returns [`Error::ArgumentType`] if the oldest matcher was reported for a
/// different argument type. The matcher is kept in the context in that case.
pub fn pull_matcher<T: 'static>() -> Result<Option<Box<dyn Matcher<T>>>, Error> {
    CURRENT_CONTEXT.with(|cell| {
        let mut cell = cell.borrow_mut();
        let inner = &mut *cell;

        let Some(front) = inner.reported.front() else {
            return Ok(None);
        };

        if !front.is::<T>() {
            return Err(Error::ArgumentType {
                expected: type_name::<T>(),
                reported: front.argument_type,
            });
        }

        inner
            .reported
            .pop_front()
            .map(ReportedMatcher::downcast)
            .transpose()
    })
}

/// Take all matchers that were reported in the current context.
#[must_use]
pub fn pull_matchers() -> Vec<ReportedMatcher> {
    CURRENT_CONTEXT.with(|cell| cell.borrow_mut().reported.drain(..).collect())
}

/// Number of matchers that were reported in the current context and not
/// pulled yet.
#[must_use]
pub fn reported_count() -> usize {
    CURRENT_CONTEXT.with(|cell| cell.borrow().reported.len())
}

/// Actual state that is stored for each [`MatcherContext`].
#[derive(Default, Debug)]
struct Inner {
    parent: Option<Box<Inner>>,
    reported: VecDeque<ReportedMatcher>,
}

thread_local! {
    static CURRENT_CONTEXT: RefCell<Inner> = RefCell::new(Inner::default());
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::fmt::{Formatter, Result as FmtResult};
    use std::rc::Rc;

    use super::{pull_matcher, pull_matchers, report_matcher, reported_count, MatcherContext};
    use crate::matcher::{property_eq, Matcher};
    use crate::{Error, Value};

    type Object = std::collections::HashMap<String, Value>;

    #[test]
    fn report_and_pull_in_order() {
        let _context = MatcherContext::new();

        report_matcher::<Object, _>(property_eq("a", 1));
        report_matcher::<Object, _>(property_eq("b", 2));
        assert_eq!(2, reported_count());

        let first = pull_matcher::<Object>().unwrap().unwrap();
        let object = Object::from([("a".into(), Value::new(1))]);
        assert!(first.matches(&object));

        let second = pull_matcher::<Object>().unwrap().unwrap();
        assert!(!second.matches(&object));

        assert!(pull_matcher::<Object>().unwrap().is_none());
    }

    #[test]
    fn nested_contexts_are_isolated() {
        let _outer = MatcherContext::new();
        report_matcher::<Object, _>(property_eq("a", 1));

        {
            let _inner = MatcherContext::new();
            assert_eq!(0, reported_count());

            report_matcher::<Object, _>(property_eq("b", 2));
            assert_eq!(1, reported_count());
        }

        assert_eq!(1, reported_count());
        assert_eq!("propertiesEq(a=1)", pull_matchers()[0].to_string());
    }

    #[test]
    fn unused_matchers_are_dropped_after_the_context_is_released() {
        struct CountOnDrop(Rc<Cell<Option<usize>>>);

        impl Matcher<Object> for CountOnDrop {
            fn matches(&self, _value: &Object) -> bool {
                true
            }

            fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
                write!(f, "CountOnDrop")
            }
        }

        impl Drop for CountOnDrop {
            fn drop(&mut self) {
                self.0.set(Some(reported_count()));
            }
        }

        let seen = Rc::new(Cell::new(None));
        let _outer = MatcherContext::new();
        report_matcher::<Object, _>(property_eq("a", 1));

        {
            let _inner = MatcherContext::new();
            report_matcher::<Object, _>(CountOnDrop(seen.clone()));
        }

        assert_eq!(Some(1), seen.get());
        assert_eq!(1, reported_count());
    }

    #[test]
    fn wrong_argument_type() {
        let _context = MatcherContext::new();

        report_matcher::<Object, _>(property_eq("a", 1));

        let err = pull_matcher::<Option<Object>>().err().unwrap();
        assert!(matches!(err, Error::ArgumentType { .. }));
        assert_eq!(1, reported_count());
    }
}
