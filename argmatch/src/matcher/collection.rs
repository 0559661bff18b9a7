//! Matchers for arguments that are collections of elements.
//!
//! All matchers in this module work on any type implementing [`Collection`],
//! i.e. slices, arrays, vectors, deques, lists and sets. Expected elements
//! (`subset`, `prefix`, `suffix`, ...) may be passed as any [`Collection`] as
//! well.

use std::fmt::{Debug, Display, Formatter, Result as FmtResult};

use crate::{Collection, Matcher};

/* Contains */

/// Create a new [`Contains`] matcher that accepts collections containing
/// `element`.
pub fn contains<E>(element: E) -> Contains<E> {
    Contains(element)
}

#[must_use]
#[derive(Debug, Clone, Copy)]
pub struct Contains<E>(pub E);

impl<X, E> Matcher<X> for Contains<E>
where
    X: Collection + ?Sized,
    X::Item: PartialEq<E>,
    E: Debug,
{
    fn matches(&self, value: &X) -> bool {
        value.iter().any(|item| *item == self.0)
    }
}

impl<E> Display for Contains<E>
where
    E: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "Contains({:?})", self.0)
    }
}

/* ContainsAllOf / ContainsAnyOf */

/// Create a new [`ContainsAllOf`] matcher that accepts collections containing
/// every element of `subset`. An empty `subset` accepts every collection.
pub fn contains_all_of<S>(subset: S) -> ContainsAllOf<S> {
    ContainsAllOf(subset)
}

/// Create a new [`ContainsAnyOf`] matcher that accepts collections containing
/// at least one element of `subset`. An empty `subset` rejects every
/// collection.
pub fn contains_any_of<S>(subset: S) -> ContainsAnyOf<S> {
    ContainsAnyOf(subset)
}

#[must_use]
#[derive(Debug, Clone, Copy)]
pub struct ContainsAllOf<S>(pub S);

#[must_use]
#[derive(Debug, Clone, Copy)]
pub struct ContainsAnyOf<S>(pub S);

impl<X, S> Matcher<X> for ContainsAllOf<S>
where
    X: Collection + ?Sized,
    S: Collection + Debug,
    X::Item: PartialEq<S::Item>,
{
    fn matches(&self, value: &X) -> bool {
        self.0
            .iter()
            .all(|expected| value.iter().any(|item| item == expected))
    }
}

impl<X, S> Matcher<X> for ContainsAnyOf<S>
where
    X: Collection + ?Sized,
    S: Collection + Debug,
    X::Item: PartialEq<S::Item>,
{
    fn matches(&self, value: &X) -> bool {
        self.0
            .iter()
            .any(|expected| value.iter().any(|item| item == expected))
    }
}

impl<S> Display for ContainsAllOf<S>
where
    S: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "ContainsAllOf({:?})", self.0)
    }
}

impl<S> Display for ContainsAnyOf<S>
where
    S: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "ContainsAnyOf({:?})", self.0)
    }
}

/* StartsWith / EndsWith */

/// Create a new [`StartsWith`] matcher that accepts collections whose leading
/// elements are equal to `prefix`, in order.
pub fn starts_with<P>(prefix: P) -> StartsWith<P> {
    StartsWith(prefix)
}

/// Create a new [`EndsWith`] matcher that accepts collections whose trailing
/// elements are equal to `suffix`, in order.
pub fn ends_with<S>(suffix: S) -> EndsWith<S> {
    EndsWith(suffix)
}

#[must_use]
#[derive(Debug, Clone, Copy)]
pub struct StartsWith<P>(pub P);

#[must_use]
#[derive(Debug, Clone, Copy)]
pub struct EndsWith<S>(pub S);

impl<X, P> Matcher<X> for StartsWith<P>
where
    X: Collection + ?Sized,
    P: Collection + Debug,
    X::Item: PartialEq<P::Item>,
{
    fn matches(&self, value: &X) -> bool {
        let mut items = value.iter();

        self.0
            .iter()
            .all(|expected| items.next().is_some_and(|item| item == expected))
    }
}

impl<X, S> Matcher<X> for EndsWith<S>
where
    X: Collection + ?Sized,
    S: Collection + Debug,
    X::Item: PartialEq<S::Item>,
{
    fn matches(&self, value: &X) -> bool {
        let len = value.len();
        let suffix_len = self.0.len();

        if len < suffix_len {
            return false;
        }

        value
            .iter()
            .skip(len - suffix_len)
            .zip(self.0.iter())
            .all(|(item, expected)| item == expected)
    }
}

impl<P> Display for StartsWith<P>
where
    P: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "StartsWith({:?})", self.0)
    }
}

impl<S> Display for EndsWith<S>
where
    S: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "EndsWith({:?})", self.0)
    }
}

/* IsEmpty / SizeIs */

pub fn is_empty() -> IsEmpty {
    IsEmpty
}

pub fn size_is(size: usize) -> SizeIs {
    SizeIs(size)
}

#[must_use]
#[derive(Debug, Clone, Copy)]
pub struct IsEmpty;

#[must_use]
#[derive(Debug, Clone, Copy)]
pub struct SizeIs(pub usize);

impl<X> Matcher<X> for IsEmpty
where
    X: Collection + ?Sized,
{
    fn matches(&self, value: &X) -> bool {
        value.is_empty()
    }
}

impl<X> Matcher<X> for SizeIs
where
    X: Collection + ?Sized,
{
    fn matches(&self, value: &X) -> bool {
        value.len() == self.0
    }
}

impl Display for IsEmpty {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "IsEmpty")
    }
}

impl Display for SizeIs {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "SizeIs({})", self.0)
    }
}

/* Each / AtLeastOne */

/// Create a new [`Each`] matcher that accepts collections where every element
/// is accepted by `inner`. Empty collections are accepted.
pub fn each<M>(inner: M) -> Each<M> {
    Each(inner)
}

/// Create a new [`AtLeastOne`] matcher that accepts collections where at
/// least one element is accepted by `inner`. Empty collections are rejected.
pub fn at_least_one<M>(inner: M) -> AtLeastOne<M> {
    AtLeastOne(inner)
}

#[must_use]
#[derive(Debug, Clone, Copy)]
pub struct Each<M>(pub M);

#[must_use]
#[derive(Debug, Clone, Copy)]
pub struct AtLeastOne<M>(pub M);

impl<X, M> Matcher<X> for Each<M>
where
    X: Collection + ?Sized,
    M: Matcher<X::Item>,
{
    fn matches(&self, value: &X) -> bool {
        value.iter().all(|item| self.0.matches(item))
    }
}

impl<X, M> Matcher<X> for AtLeastOne<M>
where
    X: Collection + ?Sized,
    M: Matcher<X::Item>,
{
    fn matches(&self, value: &X) -> bool {
        value.iter().any(|item| self.0.matches(item))
    }
}

impl<M> Display for Each<M>
where
    M: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "Each({})", self.0)
    }
}

impl<M> Display for AtLeastOne<M>
where
    M: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "AtLeastOne({})", self.0)
    }
}

/* InCollection */

/// Create a new [`InCollection`] matcher that accepts any argument that is an
/// element of `set`.
pub fn in_collection<C>(set: C) -> InCollection<C> {
    InCollection(set)
}

#[must_use]
#[derive(Debug, Clone, Copy)]
pub struct InCollection<C>(pub C);

impl<X, C> Matcher<X> for InCollection<C>
where
    X: ?Sized,
    C: Collection + Debug,
    C::Item: PartialEq<X>,
{
    fn matches(&self, value: &X) -> bool {
        self.0.iter().any(|item| item == value)
    }
}

impl<C> Display for InCollection<C>
where
    C: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "InCollection({:?})", self.0)
    }
}
