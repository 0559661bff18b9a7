use argmatch::{
    matcher::{eq, is_none, is_some, optional, some},
    Matcher,
};

use crate::expect_match;

#[test]
fn success() {
    expect_match(is_none(), None::<i32>);
    expect_match(is_some(), Some(1));
}

#[test]
#[should_panic]
fn failure() {
    expect_match(is_none(), Some(1));
}

#[test]
fn presence_ignores_wrapped_value() {
    assert!(is_some().matches(&Some(0)));
    assert!(is_some().matches(&Some(String::new())));
    assert!(!is_some().matches(&None::<String>));
    assert!(!is_none().matches(&Some(())));
}

#[test]
fn some_delegates_to_inner_matcher() {
    assert!(some(eq(3)).matches(&Some(3)));
    assert!(!some(eq(3)).matches(&Some(4)));
    assert!(!some(eq(3)).matches(&None::<i32>));
}

#[test]
fn optional_wraps_plain_argument() {
    assert!(optional(is_some()).matches(&3));
    assert!(!optional(is_none()).matches(&3));
    assert!(optional(some(eq(3))).matches(&3));
    assert!(optional(eq(Some(String::from("a")))).matches(&String::from("a")));
}

#[test]
fn display() {
    assert_eq!(optional(some(eq(3))).to_string(), "Optional(Some(Eq(3)))");
    assert_eq!(is_none().to_string(), "IsNone");
}
