use argmatch::{
    matcher::{eq, ge, gt, le, lt, ne, range},
    Matcher,
};
use rstest::rstest;

use crate::expect_match;

#[test]
fn success() {
    expect_match(eq(5), 5);
}

#[test]
#[should_panic]
fn failure() {
    expect_match(eq(5), 6);
}

#[test]
fn not_equal() {
    assert!(ne(5).matches(&6));
    assert!(!ne(5).matches(&5));
}

#[test]
fn compares_with_borrowed_form() {
    let value = String::from("a");

    assert!(eq("a").matches(&value));
    assert!(ne("b").matches(&value));
}

#[rstest]
#[case::below(4, false, false, true, true)]
#[case::equal(5, false, true, false, true)]
#[case::above(6, true, true, false, false)]
fn ordering(
    #[case] value: i32,
    #[case] greater: bool,
    #[case] greater_equal: bool,
    #[case] less: bool,
    #[case] less_equal: bool,
) {
    assert_eq!(gt(5).matches(&value), greater);
    assert_eq!(ge(5).matches(&value), greater_equal);
    assert_eq!(lt(5).matches(&value), less);
    assert_eq!(le(5).matches(&value), less_equal);
}

#[test]
fn argument_is_the_left_operand() {
    assert!(gt(10).matches(&11));
    assert!(!gt(10).matches(&5));
    assert!(lt(10).matches(&5));
    assert!(!lt(10).matches(&11));
    assert!(ge(10u8).matches(&10u8));
    assert!(!le(1.5).matches(&2.0));
}

#[test]
fn display() {
    assert_eq!(eq(5).to_string(), "Eq(5)");
    assert_eq!(ne("x").to_string(), "Ne(\"x\")");
    assert_eq!(ge(1.5).to_string(), "Ge(1.5)");
}

#[test]
fn range_success() {
    expect_match(range(4..=6), 5);
}

#[test]
#[should_panic]
fn range_failure() {
    expect_match(range(4..=6), 7);
}

#[test]
fn range_bounds() {
    assert!(range(4..=6).matches(&4));
    assert!(range(4..=6).matches(&6));
    assert!(!range(4..6).matches(&6));
    assert!(range(..10).matches(&-3));
    assert!(!range(..10).matches(&10));
    assert!(range(..=10).matches(&10));
    assert!(range(3..).matches(&3));
    assert!(!range(3..).matches(&2));
    assert!(range(1.5..2.5).matches(&2.0));
}

#[test]
fn range_is_copy_for_copy_bounds() {
    let matcher = range(..3);
    let first = matcher;
    let second = matcher;

    assert!(first.matches(&2));
    assert!(!second.matches(&3));
}

#[test]
fn range_display() {
    assert_eq!(range(4..=6).to_string(), "[4, 6]");
    assert_eq!(range(4..6).to_string(), "[4, 6)");
    assert_eq!(range(..6).to_string(), "[_, 6)");
}
