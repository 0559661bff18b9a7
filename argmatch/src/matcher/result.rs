use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::Matcher;

/// Create a new [`Success`] matcher that accepts `Ok(value)` if the `inner`
/// matcher accepts `value`. Any `Err` is rejected.
pub fn success<M>(inner: M) -> Success<M> {
    Success(inner)
}

/// Create a new [`Failure`] matcher that accepts `Err(error)` if the `inner`
/// matcher accepts `error`. Any `Ok` is rejected.
pub fn failure<M>(inner: M) -> Failure<M> {
    Failure(inner)
}

#[must_use]
#[derive(Debug, Clone, Copy)]
pub struct Success<M>(pub M);

#[must_use]
#[derive(Debug, Clone, Copy)]
pub struct Failure<M>(pub M);

impl<T, E, M> Matcher<Result<T, E>> for Success<M>
where
    M: Matcher<T>,
{
    fn matches(&self, value: &Result<T, E>) -> bool {
        match value {
            Ok(value) => self.0.matches(value),
            Err(_) => false,
        }
    }
}

impl<T, E, M> Matcher<Result<T, E>> for Failure<M>
where
    M: Matcher<E>,
{
    fn matches(&self, value: &Result<T, E>) -> bool {
        match value {
            Ok(_) => false,
            Err(error) => self.0.matches(error),
        }
    }
}

impl<M> Display for Success<M>
where
    M: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "Success({})", self.0)
    }
}

impl<M> Display for Failure<M>
where
    M: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "Failure({})", self.0)
    }
}
