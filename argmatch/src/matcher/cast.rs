use std::any::{type_name, Any};
use std::fmt::{Debug, Display, Formatter, Result as FmtResult};
use std::marker::PhantomData;

use crate::Matcher;

/// Create a new [`Cast`] matcher that narrows a type erased argument to `T`
/// and forwards it to the `inner` matcher.
///
/// If the argument is not a `T` the matcher evaluates to `false` and `inner`
/// is not called.
///
/// ```
/// use std::any::Any;
///
/// use argmatch::matcher::{cast, eq};
/// use argmatch::Matcher;
///
/// let matcher = cast::<String, _>(eq("a"));
///
/// assert!(matcher.matches(&String::from("a") as &dyn Any));
/// assert!(!matcher.matches(&5 as &dyn Any));
/// ```
pub fn cast<T, M>(inner: M) -> Cast<T, M>
where
    T: Any,
    M: Matcher<T>,
{
    Cast {
        inner,
        _marker: PhantomData,
    }
}

/// Implements a [`Matcher`] for type erased values (`dyn Any` and
/// `Box<dyn Any>`, optionally `Send` and `Sync`) that only accepts values of
/// type `T` matching `M`.
#[must_use]
pub struct Cast<T, M> {
    inner: M,
    _marker: PhantomData<fn(&T)>,
}

impl<T, M> Clone for Cast<T, M>
where
    M: Clone,
{
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T, M> Copy for Cast<T, M> where M: Copy {}

impl<T, M> Debug for Cast<T, M>
where
    M: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("Cast")
            .field("target", &type_name::<T>())
            .field("inner", &self.inner)
            .finish()
    }
}

impl<T, M> Cast<T, M>
where
    T: Any,
    M: Matcher<T>,
{
    fn narrow(&self, value: &dyn Any) -> bool {
        value
            .downcast_ref::<T>()
            .is_some_and(|value| self.inner.matches(value))
    }
}

macro_rules! impl_cast {
    (erased: $( $erased:ty ),+) => {
        $(
            impl<T, M> Matcher<$erased> for Cast<T, M>
            where
                T: Any,
                M: Matcher<T>,
            {
                fn matches(&self, value: &$erased) -> bool {
                    self.narrow(value)
                }
            }
        )+
    };
    (boxed: $( $boxed:ty ),+) => {
        $(
            impl<T, M> Matcher<$boxed> for Cast<T, M>
            where
                T: Any,
                M: Matcher<T>,
            {
                fn matches(&self, value: &$boxed) -> bool {
                    self.narrow(&**value)
                }
            }
        )+
    };
}

impl_cast!(erased: dyn Any, dyn Any + Send, dyn Any + Send + Sync);
impl_cast!(boxed: Box<dyn Any>, Box<dyn Any + Send>, Box<dyn Any + Send + Sync>);

impl<T, M> Display for Cast<T, M>
where
    M: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "Cast<{}>({})", type_name::<T>(), self.inner)
    }
}
