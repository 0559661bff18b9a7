use argmatch::{
    matcher::{any, eq, failure, str_contains, success},
    Matcher,
};

use crate::expect_match;

#[test]
fn success_case() {
    expect_match(success(eq(1)), Ok::<i32, String>(1));
    expect_match(failure(str_contains("boom")), Err::<i32, String>("kaboom".into()));
}

#[test]
#[should_panic]
fn failure_case() {
    expect_match(success(eq(1)), Ok::<i32, String>(2));
}

#[test]
fn mismatching_case_is_rejected() {
    let ok: Result<i32, String> = Ok(1);
    let err: Result<i32, String> = Err("error".into());

    assert!(!success(any()).matches(&err));
    assert!(!failure(any()).matches(&ok));
    assert!(success(any()).matches(&ok));
    assert!(failure(any()).matches(&err));
}

#[test]
fn display() {
    assert_eq!(success(eq(1)).to_string(), "Success(Eq(1))");
    assert_eq!(failure(any()).to_string(), "Failure(any)");
}
