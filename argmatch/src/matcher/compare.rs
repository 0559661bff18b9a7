use std::fmt::{Debug, Display, Formatter, Result as FmtResult};
use std::ops::{Bound, RangeBounds};

use super::Matcher;

macro_rules! impl_matcher {
    (eq $type:ident, $method:ident, $op:tt, $fmt:tt) => {
        #[doc = concat!(
            "Create a new [`", stringify!($type), "`] matcher that compares the argument ",
            "with the passed `value` using [`PartialEq::", stringify!($method), "`]."
        )]
        pub fn $method<T>(value: T) -> $type<T> {
            $type(value)
        }

        impl_matcher!(@struct $type, $op);

        impl<T, X> Matcher<X> for $type<T>
        where
            T: PartialEq<X> + Debug,
            X: ?Sized,
        {
            fn matches(&self, value: &X) -> bool {
                self.0.$method(value)
            }
        }

        impl_matcher!(@display $type, $fmt);
    };
    (ord $type:ident, $method:ident, $op:tt, $fmt:tt) => {
        #[doc = concat!(
            "Create a new [`", stringify!($type), "`] matcher that accepts arguments ",
            "`x` with `x ", $op, " value`."
        )]
        pub fn $method<T>(value: T) -> $type<T> {
            $type(value)
        }

        impl_matcher!(@struct $type, $op);

        impl<T, X> Matcher<X> for $type<T>
        where
            T: Debug,
            X: PartialOrd<T> + ?Sized,
        {
            fn matches(&self, value: &X) -> bool {
                PartialOrd::$method(value, &self.0)
            }
        }

        impl_matcher!(@display $type, $fmt);
    };
    (@struct $type:ident, $op:tt) => {
        #[doc = concat!(
            "Implements a [`Matcher`] that compares the argument with the expected value ",
            "using `", $op, "`."
        )]
        #[must_use]
        #[derive(Debug, Clone, Copy)]
        pub struct $type<T>(pub T);
    };
    (@display $type:ident, $fmt:tt) => {
        impl<T> Display for $type<T>
        where
            T: Debug,
        {
            fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
                write!(f, $fmt, self.0)
            }
        }
    };
}

impl_matcher!(eq Eq, eq, "==", "Eq({:?})");
impl_matcher!(eq Ne, ne, "!=", "Ne({:?})");
impl_matcher!(ord Lt, lt, "<", "Lt({:?})");
impl_matcher!(ord Le, le, "<=", "Le({:?})");
impl_matcher!(ord Gt, gt, ">", "Gt({:?})");
impl_matcher!(ord Ge, ge, ">=", "Ge({:?})");

/* Range */

/// Create a new [`Range`] matcher that accepts any argument that is contained
/// in the passed `range` (`4..=6`, `..10`, `3..`, ...).
pub fn range<R, T>(range: R) -> Range<T>
where
    R: RangeBounds<T>,
    T: Clone,
{
    Range {
        start: range.start_bound().cloned(),
        end: range.end_bound().cloned(),
    }
}

/// Implements a [`Matcher`] that combines a lower and an upper bound. An
/// unbounded side accepts everything.
#[must_use]
#[derive(Debug, Clone, Copy)]
pub struct Range<T> {
    start: Bound<T>,
    end: Bound<T>,
}

impl<T, X> Matcher<X> for Range<T>
where
    T: Debug,
    X: PartialOrd<T> + ?Sized,
{
    fn matches(&self, value: &X) -> bool {
        let above = match &self.start {
            Bound::Included(start) => value >= start,
            Bound::Excluded(start) => value > start,
            Bound::Unbounded => true,
        };

        above
            && match &self.end {
                Bound::Included(end) => value <= end,
                Bound::Excluded(end) => value < end,
                Bound::Unbounded => true,
            }
    }
}

impl<T> Display for Range<T>
where
    T: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match &self.start {
            Bound::Unbounded => write!(f, "[_, "),
            Bound::Included(x) => write!(f, "[{x:?}, "),
            Bound::Excluded(x) => write!(f, "({x:?}, "),
        }?;

        match &self.end {
            Bound::Unbounded => write!(f, "_]"),
            Bound::Included(x) => write!(f, "{x:?}]"),
            Bound::Excluded(x) => write!(f, "{x:?})"),
        }
    }
}
