use argmatch::{
    matcher::{contains, eq, gt, is_true, split_args, str_case_eq},
    Matcher,
};

use crate::expect_match;

#[test]
fn success() {
    expect_match(split_args((eq(1), gt(10))), (1, 11));
}

#[test]
#[should_panic]
fn failure() {
    expect_match(split_args((eq(1), gt(10))), (1, 5));
}

#[test]
fn different_argument_types() {
    let matcher = split_args((str_case_eq("fuu"), is_true(), contains(3)));

    assert!(matcher.matches(&(String::from("FUU"), true, vec![1, 2, 3])));
    assert!(!matcher.matches(&(String::from("bar"), true, vec![1, 2, 3])));
    assert!(!matcher.matches(&(String::from("FUU"), false, vec![1, 2, 3])));
    assert!(!matcher.matches(&(String::from("FUU"), true, vec![1, 2])));
}

#[test]
fn single_failing_position_rejects_two() {
    let m = split_args((eq(0), eq(1)));

    assert!(m.matches(&(0, 1)));
    assert!(!m.matches(&(9, 1)));
    assert!(!m.matches(&(0, 9)));
}

#[test]
fn single_failing_position_rejects_three() {
    let m = split_args((eq(0), eq(1), eq(2)));

    assert!(m.matches(&(0, 1, 2)));
    assert!(!m.matches(&(9, 1, 2)));
    assert!(!m.matches(&(0, 9, 2)));
    assert!(!m.matches(&(0, 1, 9)));
}

#[test]
fn single_failing_position_rejects_four() {
    let m = split_args((eq(0), eq(1), eq(2), eq(3)));

    assert!(m.matches(&(0, 1, 2, 3)));
    assert!(!m.matches(&(9, 1, 2, 3)));
    assert!(!m.matches(&(0, 9, 2, 3)));
    assert!(!m.matches(&(0, 1, 9, 3)));
    assert!(!m.matches(&(0, 1, 2, 9)));
}

#[test]
fn single_failing_position_rejects_five() {
    let m = split_args((eq(0), eq(1), eq(2), eq(3), eq(4)));

    assert!(m.matches(&(0, 1, 2, 3, 4)));
    assert!(!m.matches(&(9, 1, 2, 3, 4)));
    assert!(!m.matches(&(0, 9, 2, 3, 4)));
    assert!(!m.matches(&(0, 1, 9, 3, 4)));
    assert!(!m.matches(&(0, 1, 2, 9, 4)));
    assert!(!m.matches(&(0, 1, 2, 3, 9)));
}

#[test]
fn single_failing_position_rejects_six() {
    let m = split_args((eq(0), eq(1), eq(2), eq(3), eq(4), eq(5)));

    assert!(m.matches(&(0, 1, 2, 3, 4, 5)));
    assert!(!m.matches(&(9, 1, 2, 3, 4, 5)));
    assert!(!m.matches(&(0, 9, 2, 3, 4, 5)));
    assert!(!m.matches(&(0, 1, 9, 3, 4, 5)));
    assert!(!m.matches(&(0, 1, 2, 9, 4, 5)));
    assert!(!m.matches(&(0, 1, 2, 3, 9, 5)));
    assert!(!m.matches(&(0, 1, 2, 3, 4, 9)));
}

#[test]
fn display() {
    assert_eq!(
        split_args((eq(1), gt(10))).to_string(),
        "SplitArgs(Eq(1), Gt(10))"
    );
}
