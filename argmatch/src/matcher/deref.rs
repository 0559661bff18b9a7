use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::Matcher;

/// Create a new [`Deref`] matcher, that calls the [`deref`](std::ops::Deref::deref())
/// method of the argument and forwards it to the passed `inner` matcher.
///
/// Useful for arguments passed as `Box<T>`, `Rc<T>`, `String` or `&T`, where
/// the expectation is written against the target type.
pub fn deref<M>(inner: M) -> Deref<M> {
    Deref(inner)
}

/// Implements a [`Matcher`] that calls the [`deref`](std::ops::Deref::deref())
/// method of the argument and forwards it to the passed matcher `M`.
#[must_use]
#[derive(Debug, Clone, Copy)]
pub struct Deref<M>(pub M);

impl<T, M> Matcher<T> for Deref<M>
where
    T: std::ops::Deref + ?Sized,
    M: Matcher<T::Target>,
{
    fn matches(&self, value: &T) -> bool {
        self.0.matches(&**value)
    }
}

impl<M> Display for Deref<M>
where
    M: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "Deref({})", self.0)
    }
}
