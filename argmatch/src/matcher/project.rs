//! Matchers that project the argument onto one of its parts before checking
//! it.
//!
//! The projection is a plain accessor function: [`project`] borrows a part of
//! the argument (typically a field), [`map`] computes a new value from it.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::marker::PhantomData;

use super::{eq, Eq, Matcher};

/// Create a new [`Project`] matcher that passes the part of the argument
/// returned by `accessor` to the `inner` matcher.
///
/// ```
/// use argmatch::matcher::{project, str_starts_with};
/// use argmatch::Matcher;
///
/// struct User {
///     name: String,
/// }
///
/// let matcher = project(|u: &User| &u.name, str_starts_with("al"));
///
/// assert!(matcher.matches(&User { name: "alice".into() }));
/// assert!(!matcher.matches(&User { name: "bob".into() }));
/// ```
pub fn project<R, V, F, M>(accessor: F, inner: M) -> Project<R, V, F, M>
where
    R: ?Sized,
    V: ?Sized,
    F: Fn(&R) -> &V,
    M: Matcher<V>,
{
    Project {
        accessor,
        inner,
        _marker: PhantomData,
    }
}

/// Like [`project`] but compares the projected part with the expected `value`.
pub fn project_eq<R, V, F, T>(accessor: F, value: T) -> Project<R, V, F, Eq<T>>
where
    R: ?Sized,
    V: ?Sized,
    F: Fn(&R) -> &V,
    Eq<T>: Matcher<V>,
{
    project(accessor, eq(value))
}

/// Create a new [`Map`] matcher that computes a value from the argument using
/// `f` and passes it to the `inner` matcher.
///
/// In contrast to [`project`] the computed value is owned, which allows
/// matching on derived properties like the length of a string.
pub fn map<R, V, F, M>(f: F, inner: M) -> Map<R, V, F, M>
where
    R: ?Sized,
    F: Fn(&R) -> V,
    M: Matcher<V>,
{
    Map {
        f,
        inner,
        _marker: PhantomData,
    }
}

/// Implements a [`Matcher`] that borrows a part of the argument of type `R`
/// using the accessor `F` and forwards it to the matcher `M`.
#[must_use]
pub struct Project<R: ?Sized, V: ?Sized, F, M> {
    accessor: F,
    inner: M,
    _marker: PhantomData<fn(&R) -> &V>,
}

impl<R, V, F, M> Matcher<R> for Project<R, V, F, M>
where
    R: ?Sized,
    V: ?Sized,
    F: Fn(&R) -> &V,
    M: Matcher<V>,
{
    fn matches(&self, value: &R) -> bool {
        self.inner.matches((self.accessor)(value))
    }
}

impl<R, V, F, M> Display for Project<R, V, F, M>
where
    R: ?Sized,
    V: ?Sized,
    M: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "Project({})", self.inner)
    }
}

/// Implements a [`Matcher`] that computes a value from the argument of type
/// `R` using `F` and forwards it to the matcher `M`.
#[must_use]
pub struct Map<R: ?Sized, V, F, M> {
    f: F,
    inner: M,
    _marker: PhantomData<fn(&R) -> V>,
}

impl<R, V, F, M> Matcher<R> for Map<R, V, F, M>
where
    R: ?Sized,
    F: Fn(&R) -> V,
    M: Matcher<V>,
{
    fn matches(&self, value: &R) -> bool {
        self.inner.matches(&(self.f)(value))
    }
}

impl<R, V, F, M> Display for Map<R, V, F, M>
where
    R: ?Sized,
    M: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "Map({})", self.inner)
    }
}
