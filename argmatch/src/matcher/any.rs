use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::Matcher;

/// Create a new [`Any`] matcher that accepts every value.
pub fn any() -> Any {
    Any
}

/// Implements a [`Matcher`] that accepts any value of any type.
#[must_use]
#[derive(Debug, Clone, Copy, Default)]
pub struct Any;

impl<T: ?Sized> Matcher<T> for Any {
    fn matches(&self, _value: &T) -> bool {
        true
    }
}

impl Display for Any {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "any")
    }
}
