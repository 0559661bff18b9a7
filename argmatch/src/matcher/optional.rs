use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::Matcher;

/* Optional */

/// Create a new [`Optional`] matcher that wraps the argument into `Some` and
/// passes it to the `inner` matcher.
///
/// This allows to reuse a matcher written for `Option<T>` at a position that
/// takes a plain `T`.
pub fn optional<M>(inner: M) -> Optional<M> {
    Optional(inner)
}

/// Implements a [`Matcher`] for `T` using a matcher for `Option<T>`.
#[must_use]
#[derive(Debug, Clone, Copy)]
pub struct Optional<M>(pub M);

impl<T, M> Matcher<T> for Optional<M>
where
    T: Clone,
    M: Matcher<Option<T>>,
{
    fn matches(&self, value: &T) -> bool {
        self.0.matches(&Some(value.clone()))
    }
}

impl<M> Display for Optional<M>
where
    M: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "Optional({})", self.0)
    }
}

/* IsNone / IsSome */

pub fn is_none() -> IsNone {
    IsNone
}

pub fn is_some() -> IsSome {
    IsSome
}

#[must_use]
#[derive(Debug, Clone, Copy)]
pub struct IsNone;

#[must_use]
#[derive(Debug, Clone, Copy)]
pub struct IsSome;

impl<T> Matcher<Option<T>> for IsNone {
    fn matches(&self, value: &Option<T>) -> bool {
        value.is_none()
    }
}

impl<T> Matcher<Option<T>> for IsSome {
    fn matches(&self, value: &Option<T>) -> bool {
        value.is_some()
    }
}

impl Display for IsNone {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "IsNone")
    }
}

impl Display for IsSome {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "IsSome")
    }
}

/* IsSomeAnd */

/// Create a new [`IsSomeAnd`] matcher that accepts `Some(value)` if the
/// `inner` matcher accepts `value`. `None` is never accepted.
pub fn some<M>(inner: M) -> IsSomeAnd<M> {
    IsSomeAnd(inner)
}

#[must_use]
#[derive(Debug, Clone, Copy)]
pub struct IsSomeAnd<M>(pub M);

impl<T, M> Matcher<Option<T>> for IsSomeAnd<M>
where
    M: Matcher<T>,
{
    fn matches(&self, value: &Option<T>) -> bool {
        value.as_ref().is_some_and(|value| self.0.matches(value))
    }
}

impl<M> Display for IsSomeAnd<M>
where
    M: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "Some({})", self.0)
    }
}
