use std::fmt::{Display, Formatter, Result as FmtResult};
use std::mem::take;

use crate::Matcher;

/// Create a new [`SplitArgs`] matcher from a tuple of 2 to 6 matchers.
///
/// The resulting matcher is used for calls with several arguments: the
/// arguments are passed as a tuple and each element is checked by the matcher
/// at the same position. The call matches only if all matchers accept their
/// element.
pub fn split_args<T>(matchers: T) -> SplitArgs<T> {
    SplitArgs(matchers)
}

/// Implements a [`Matcher`] for a tuple of arguments by splitting it into its
/// elements and checking each one with the matcher at the same position.
#[must_use]
#[derive(Debug, Clone, Copy)]
pub struct SplitArgs<T>(T);

macro_rules! impl_split_args {
    (($( $arg_name:ident: $arg_type:ident ),+) => ($( $matcher_name:ident: $matcher_type:ident ),+)) => {
        impl<$( $arg_type ),+ $( , $matcher_type )+> Matcher<($( $arg_type ),+)> for SplitArgs<($( $matcher_type ),+)>
        where
            $(
                $matcher_type: Matcher<$arg_type>,
            )+
        {
            fn matches(&self, ($( $arg_name ),+): &($( $arg_type ),+)) -> bool {
                let Self(($( $matcher_name ),+)) = self;

                $(
                    $matcher_name.matches($arg_name)
                )&&+
            }
        }

        impl<$( $matcher_type ),+> Display for SplitArgs<($( $matcher_type ),+)>
        where
            $(
                $matcher_type: Display,
            )+
        {
            fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
                let mut first = true;
                let Self(($( $matcher_name ),+)) = self;

                write!(f, "SplitArgs(")?;

                $(
                    if !take(&mut first) {
                        write!(f, ", ")?;
                    }

                    $matcher_name.fmt(f)?;
                )+

                write!(f, ")")
            }
        }
    };
}

impl_split_args!((a0: T0, a1: T1) => (m0: M0, m1: M1));
impl_split_args!((a0: T0, a1: T1, a2: T2) => (m0: M0, m1: M1, m2: M2));
impl_split_args!((a0: T0, a1: T1, a2: T2, a3: T3) => (m0: M0, m1: M1, m2: M2, m3: M3));
impl_split_args!((a0: T0, a1: T1, a2: T2, a3: T3, a4: T4) => (m0: M0, m1: M1, m2: M2, m3: M3, m4: M4));
impl_split_args!((a0: T0, a1: T1, a2: T2, a3: T3, a4: T4, a5: T5) => (m0: M0, m1: M1, m2: M2, m3: M3, m4: M4, m5: M5));
