use std::fmt::{Display, Formatter, Result as FmtResult};

use super::Matcher;

/* IsEmpty */

pub fn is_empty() -> IsEmpty {
    IsEmpty
}

#[must_use]
#[derive(Debug, Clone, Copy)]
pub struct IsEmpty;

impl<X> Matcher<X> for IsEmpty
where
    X: AsRef<str> + ?Sized,
{
    fn matches(&self, value: &X) -> bool {
        value.as_ref().is_empty()
    }
}

impl Display for IsEmpty {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "StrIsEmpty")
    }
}

/* Pattern matchers */

macro_rules! impl_str_matcher {
    ($type:ident, $fn:ident, |$value:ident, $pattern:ident| $test:expr, $fmt:tt) => {
        pub fn $fn<P: Into<String>>(pattern: P) -> $type {
            $type(pattern.into())
        }

        #[must_use]
        #[derive(Debug, Clone)]
        pub struct $type(String);

        impl<X> Matcher<X> for $type
        where
            X: AsRef<str> + ?Sized,
        {
            fn matches(&self, value: &X) -> bool {
                let $value = value.as_ref();
                let $pattern = self.0.as_str();

                $test
            }
        }

        impl Display for $type {
            fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
                write!(f, $fmt, self.0)
            }
        }
    };
}

impl_str_matcher!(StartsWith, starts_with, |v, p| v.starts_with(p), "StrStartsWith({:?})");
impl_str_matcher!(EndsWith, ends_with, |v, p| v.ends_with(p), "StrEndsWith({:?})");
impl_str_matcher!(Contains, contains, |v, p| v.contains(p), "StrContains({:?})");

impl_str_matcher!(CaseEq, case_eq, |v, p| eq_ignore_case(v, p), "StrCaseEq({:?})");
impl_str_matcher!(CaseNe, case_ne, |v, p| !eq_ignore_case(v, p), "StrCaseNe({:?})");

/// Ordinal comparison after mapping every character to its lowercase form.
///
/// Uses the locale independent mappings of [`char::to_lowercase`], so
/// `"STRASSE"` equals `"strasse"` but not `"straße"`.
fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}
