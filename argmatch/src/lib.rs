//! Composable argument matchers.
//!
//! A [`Matcher`] is a stateless predicate that decides whether a value passed
//! to a mocked call meets an expectation. The matchers in [`matcher`] can be
//! nested freely: a tuple of matchers checks several arguments at once,
//! projections reach into fields, and collection matchers quantify over
//! elements.
//!
//! ```
//! use argmatch::matcher::{each, gt, project, split_args, str_case_eq};
//! use argmatch::Matcher;
//!
//! struct Order {
//!     items: Vec<u32>,
//! }
//!
//! let matcher = split_args((
//!     str_case_eq("alice"),
//!     project(|o: &Order| &o.items, each(gt(0u32))),
//! ));
//!
//! let order = Order { items: vec![1, 2] };
//! assert!(matcher.matches(&(String::from("Alice"), order)));
//!
//! let order = Order { items: vec![0] };
//! assert!(!matcher.matches(&(String::from("Alice"), order)));
//! ```

pub mod matcher;
pub mod misc;

pub use matcher::Matcher;
pub use misc::Collection;
