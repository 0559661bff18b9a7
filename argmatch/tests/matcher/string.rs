use argmatch::{
    matcher::{
        str_case_eq, str_case_ne, str_contains, str_ends_with, str_is_empty, str_starts_with,
    },
    Matcher,
};
use rstest::rstest;

use crate::expect_match;

#[test]
fn success() {
    expect_match(str_case_eq("hello"), String::from("HeLLo"));
}

#[test]
#[should_panic]
fn failure() {
    expect_match(str_case_eq("hello"), String::from("hallo"));
}

#[rstest]
#[case("abc", "abc", true)]
#[case("abc", "ABC", true)]
#[case("ÄÖÜ", "äöü", true)]
#[case("Straße", "STRASSE", false)]
#[case("abc", "abcd", false)]
#[case("", "", true)]
fn case_insensitive(#[case] expected: &str, #[case] value: &str, #[case] equal: bool) {
    assert_eq!(str_case_eq(expected).matches(value), equal);
    assert_eq!(str_case_ne(expected).matches(value), !equal);
}

#[test]
fn patterns() {
    let value = String::from("hello world");

    assert!(str_starts_with("hello").matches(&value));
    assert!(!str_starts_with("world").matches(&value));
    assert!(str_ends_with("world").matches(&value));
    assert!(str_contains("o w").matches(&value));
    assert!(!str_contains("xyz").matches(&value));
}

#[test]
fn empty() {
    assert!(str_is_empty().matches(""));
    assert!(str_is_empty().matches(&String::new()));
    assert!(!str_is_empty().matches("x"));
}

#[test]
fn display() {
    assert_eq!(str_case_eq("abc").to_string(), "StrCaseEq(\"abc\")");
    assert_eq!(str_starts_with("a").to_string(), "StrStartsWith(\"a\")");
}
