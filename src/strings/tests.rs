#![cfg(test)]

use super::*;

#[test]
fn test_concat() {
    assert_eq!(concat(&["/usr", "/", "lib"]), "/usr/lib");
    assert_eq!(concat(&[]), "");
    assert_eq!(concat_after("pre", &["fix", "ed"]), "prefixed");

    let joined = concat(&["ab", "cd"]);
    assert_eq!(joined.capacity(), 4, "Concatenation should allocate exactly enough space.");
}

#[test]
fn test_join() {
    assert_eq!(join(&["a", "b", "c"], ", "), "a, b, c");
    assert_eq!(join(&["a", "b"], ""), "ab", "An empty delimiter should concatenate.");
    assert_eq!(join::<&str>(&[], "-"), "");
    assert_eq!(join(&[String::from("solo")], "-"), "solo");
}

#[test]
fn test_substr() {
    assert_eq!(substr("libcassava", 3, 7), Ok("cass"));
    assert_eq!(
        substr("abc", 2, 1),
        Err(SubstrError { start: 2, end: 1, len: 3 }),
        "Start after end should be rejected."
    );
    assert!(substr("abc", 0, 3).is_err(), "End must be before the end of the input.");
    assert!(substr("héllo", 1, 2).is_err(), "Offsets inside a character should be rejected.");
}

#[test]
fn test_is_prefix() {
    assert!(is_prefix("/usr", "/usr/lib"));
    assert!(is_prefix("", "anything"));
    assert!(!is_prefix("/usr/lib", "/usr"));
    assert!(!is_prefix("/opt", "/usr"));
}

#[test]
fn test_sort() {
    let mut names = ["b", "a", "Z", "_x", "aa"];
    sort(&mut names);
    assert_eq!(names, ["Z", "_x", "a", "aa", "b"], "Sorting should compare bytes.");
}
