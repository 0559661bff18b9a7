use std::fmt::{Debug, Display, Formatter, Result as FmtResult};

use crate::Matcher;

/// Create a new [`Inspect`] matcher that forwards the argument to `inner` and
/// records the outcome as a `DEBUG` [`tracing`] event.
///
/// Handy to find out why an expectation does not match: wrap the suspicious
/// part of a composite matcher and run the test with a subscriber installed.
pub fn inspect<M>(inner: M) -> Inspect<M> {
    Inspect(inner)
}

/// Implements a [`Matcher`] that logs every evaluation of the matcher `M`.
#[must_use]
#[derive(Debug, Clone, Copy)]
pub struct Inspect<M>(pub M);

impl<T, M> Matcher<T> for Inspect<M>
where
    T: Debug + ?Sized,
    M: Matcher<T>,
{
    fn matches(&self, value: &T) -> bool {
        let matched = self.0.matches(value);

        tracing::debug!(matcher = %self.0, ?value, matched, "evaluated matcher");

        matched
    }
}

impl<M> Display for Inspect<M>
where
    M: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}
