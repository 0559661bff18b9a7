use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::Matcher;

pub fn is_true() -> IsTrue {
    IsTrue
}

pub fn is_false() -> IsFalse {
    IsFalse
}

#[must_use]
#[derive(Debug, Clone, Copy)]
pub struct IsTrue;

#[must_use]
#[derive(Debug, Clone, Copy)]
pub struct IsFalse;

impl Matcher<bool> for IsTrue {
    fn matches(&self, value: &bool) -> bool {
        *value
    }
}

impl Matcher<bool> for IsFalse {
    fn matches(&self, value: &bool) -> bool {
        !*value
    }
}

impl Display for IsTrue {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "IsTrue")
    }
}

impl Display for IsFalse {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "IsFalse")
    }
}
