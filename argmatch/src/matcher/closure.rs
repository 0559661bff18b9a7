use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::Matcher;

/// Create a new [`Closure`] matcher from the predicate `f`.
///
/// This is the most basic way to build a matcher: every other matcher in this
/// crate could be written as a closure. The predicate is expected to be pure;
/// it is called once for every evaluation of the matcher.
pub fn closure<F>(f: F) -> Closure<F> {
    Closure(f)
}

/// Implements a [`Matcher`] that forwards the argument to the predicate `F`.
#[must_use]
#[derive(Debug, Clone, Copy)]
pub struct Closure<F>(pub F);

impl<T, F> Matcher<T> for Closure<F>
where
    T: ?Sized,
    F: Fn(&T) -> bool,
{
    fn matches(&self, value: &T) -> bool {
        self.0(value)
    }
}

impl<F> Display for Closure<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "Closure")
    }
}
