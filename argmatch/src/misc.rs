//! The [`misc`](self) module contains different helper types and traits.

use std::collections::{
    btree_set, hash_set, linked_list, vec_deque, BTreeSet, HashSet, LinkedList, VecDeque,
};
use std::slice;

/// Finite sequence of elements that can be inspected by the collection
/// matchers.
///
/// The trait only needs borrowed iteration, so ordered sequences (slices,
/// vectors, deques) and unordered sets can be matched the same way. For
/// unordered sets the order of [`iter`](Collection::iter) is the order of the
/// underlying container.
pub trait Collection {
    /// Type of the elements stored in the collection.
    type Item;

    /// Iterator over borrowed elements.
    type Iter<'a>: Iterator<Item = &'a Self::Item>
    where
        Self: 'a;

    /// Get an iterator over the elements of the collection.
    fn iter(&self) -> Self::Iter<'_>;

    /// Number of elements in the collection.
    fn len(&self) -> usize {
        self.iter().count()
    }

    /// Returns `true` if the collection does not contain any element.
    fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

impl<T> Collection for [T] {
    type Item = T;
    type Iter<'a> = slice::Iter<'a, T> where Self: 'a;

    fn iter(&self) -> Self::Iter<'_> {
        <[T]>::iter(self)
    }

    fn len(&self) -> usize {
        <[T]>::len(self)
    }
}

impl<T, const N: usize> Collection for [T; N] {
    type Item = T;
    type Iter<'a> = slice::Iter<'a, T> where Self: 'a;

    fn iter(&self) -> Self::Iter<'_> {
        self.as_slice().iter()
    }

    fn len(&self) -> usize {
        N
    }
}

impl<T> Collection for Vec<T> {
    type Item = T;
    type Iter<'a> = slice::Iter<'a, T> where Self: 'a;

    fn iter(&self) -> Self::Iter<'_> {
        self.as_slice().iter()
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }
}

macro_rules! impl_collection {
    ($type:ident<T $(, $param:ident)*>, $module:ident) => {
        impl<T $(, $param)*> Collection for $type<T $(, $param)*> {
            type Item = T;
            type Iter<'a> = $module::Iter<'a, T> where Self: 'a;

            fn iter(&self) -> Self::Iter<'_> {
                $type::iter(self)
            }

            fn len(&self) -> usize {
                $type::len(self)
            }
        }
    };
}

impl_collection!(VecDeque<T>, vec_deque);
impl_collection!(LinkedList<T>, linked_list);
impl_collection!(BTreeSet<T>, btree_set);
impl_collection!(HashSet<T, S>, hash_set);

impl<C> Collection for &C
where
    C: Collection + ?Sized,
{
    type Item = C::Item;
    type Iter<'a> = C::Iter<'a> where Self: 'a;

    fn iter(&self) -> Self::Iter<'_> {
        (**self).iter()
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}
