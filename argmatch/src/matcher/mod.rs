//! The [`matcher`](self) module contains the [`Matcher`] trait and the
//! pre-defined matchers that can be used to describe expected arguments.

mod any;
mod boolean;
mod cast;
mod closure;
mod collection;
mod compare;
mod deref;
#[cfg(feature = "tracing")]
mod inspect;
mod multi;
mod optional;
mod project;
mod result;
mod string;

use std::fmt::Display;
use std::sync::Arc;

pub use any::{any, Any};
pub use boolean::{is_false, is_true, IsFalse, IsTrue};
pub use cast::{cast, Cast};
pub use closure::{closure, Closure};
pub use collection::{
    at_least_one, contains, contains_all_of, contains_any_of, each, ends_with, in_collection,
    is_empty, size_is, starts_with, AtLeastOne, Contains, ContainsAllOf, ContainsAnyOf, Each,
    EndsWith, InCollection, IsEmpty, SizeIs, StartsWith,
};
pub use compare::{eq, ge, gt, le, lt, ne, range, Eq, Ge, Gt, Le, Lt, Ne, Range};
pub use deref::{deref, Deref};
#[cfg(feature = "tracing")]
pub use inspect::{inspect, Inspect};
pub use multi::{split_args, SplitArgs};
pub use optional::{is_none, is_some, optional, some, IsNone, IsSome, IsSomeAnd, Optional};
pub use project::{map, project, project_eq, Map, Project};
pub use result::{failure, success, Failure, Success};
pub use string::{
    case_eq as str_case_eq, case_ne as str_case_ne, contains as str_contains,
    ends_with as str_ends_with, is_empty as str_is_empty, starts_with as str_starts_with,
    CaseEq as StrCaseEq, CaseNe as StrCaseNe, Contains as StrContains, EndsWith as StrEndsWith,
    IsEmpty as StrIsEmpty, StartsWith as StrStartsWith,
};

/// A matcher is used to check if the passed argument matches a pre-defined
/// expectation. It is mostly used to verify the arguments to an expected call.
///
/// Matchers are stateless: evaluating one never changes it, so the same
/// matcher may be evaluated any number of times, in any order and from
/// several threads at once.
///
/// The [`Display`] implementation describes the expectation in a human
/// readable form, e.g. `Gt(3)` or `Each(Eq("a"))`.
pub trait Matcher<T: ?Sized>: Display {
    /// Returns `true` if the passed `value` matches the expectations, `false`
    /// otherwise.
    fn matches(&self, value: &T) -> bool;
}

impl<T, M> Matcher<T> for &M
where
    T: ?Sized,
    M: Matcher<T> + ?Sized,
{
    fn matches(&self, value: &T) -> bool {
        (**self).matches(value)
    }
}

impl<T, M> Matcher<T> for Box<M>
where
    T: ?Sized,
    M: Matcher<T> + ?Sized,
{
    fn matches(&self, value: &T) -> bool {
        (**self).matches(value)
    }
}

impl<T, M> Matcher<T> for Arc<M>
where
    T: ?Sized,
    M: Matcher<T> + ?Sized,
{
    fn matches(&self, value: &T) -> bool {
        (**self).matches(value)
    }
}
