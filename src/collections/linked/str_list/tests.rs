#![cfg(test)]

use std::cell::Cell;

use super::*;
use crate::collections::linked::LinkedList;

fn strings(items: &[&str]) -> StrList {
    items.iter().map(|item| item.to_string()).collect()
}

fn written<F: FnOnce(&mut Vec<u8>) -> std::io::Result<()>>(write: F) -> String {
    let mut out = Vec::new();
    write(&mut out).expect("writing to a Vec can't fail");
    String::from_utf8(out).expect("output should be utf-8")
}

#[test]
fn test_join() {
    let list = strings(&["a", "b", "c"]);
    assert_eq!(list.join(",").as_deref(), Some("a,b,c"));
    assert_eq!(list.join("").as_deref(), Some("abc"));
    assert_eq!(strings(&["only"]).join(", ").as_deref(), Some("only"));

    assert_eq!(StrList::new().join(","), None, "Joining an empty list should return None.");
}

#[test]
fn test_join_exact_capacity() {
    let list = strings(&["alpha", "be", "c"]);
    let joined = list.try_join(" :: ").expect("allocation shouldn't fail").expect("list isn't empty");

    assert_eq!(joined, "alpha :: be :: c");
    assert_eq!(joined.capacity(), joined.len(), "Join should allocate exactly enough space.");
}

#[test]
fn test_join_skips_vacant() {
    let mut list = strings(&["a", "b"]);
    list.push_vacant();
    assert_eq!(list.join("-").as_deref(), Some("a-b"));
}

#[test]
fn test_write_joined() {
    let list = strings(&["x", "y", "z"]);
    assert_eq!(written(|out| list.write_joined(out, ", ")), "x, y, z\n");
    assert_eq!(
        written(|out| StrList::new().write_joined(out, ", ")),
        "",
        "An empty list should print nothing."
    );
}

#[test]
fn test_write_lines() {
    let list = strings(&["one", "two"]);
    assert_eq!(written(|out| list.write_lines(out, Some("- "))), "- one\n- two\n");
    assert_eq!(
        written(|out| list.write_lines(out, None)),
        "one\ntwo\n",
        "A missing prefix should behave like an empty one."
    );
    assert_eq!(written(|out| StrList::new().write_lines(out, Some(">"))), "");
}

#[test]
fn test_search() {
    let list = strings(&["x", "y", "z", "y"]);

    let found = list.search("y").expect("y is in the list");
    assert_eq!(found.value().map(String::as_str), Some("y"));
    assert_eq!(
        found.next().and_then(|node| node.value()).map(String::as_str),
        Some("z"),
        "Search should return the first match in traversal order."
    );

    assert!(list.search("w").is_none());
    assert!(list.search("").is_none());
}

#[test]
fn test_search_borrowed_payloads() {
    let list: LinkedList<&str> = ["src", "target"].into_iter().collect();
    assert!(list.search("target").is_some(), "Any AsRef<str> payload should be searchable.");
}

#[test]
fn test_filter_regex() {
    let mut list = strings(&[".git", "Cargo.toml", "src", ".hidden", "README.md"]);

    let retained = list.filter_regex("^[^.].*").expect("pattern is valid");
    assert_eq!(retained, 3);
    assert_eq!(
        list,
        strings(&["Cargo.toml", "src", "README.md"]),
        "Only entries matching the pattern should remain, in their original order."
    );
}

#[test]
fn test_filter_regex_invalid_pattern() {
    let mut list = strings(&["a", "b"]);

    let error = list.filter_regex("(unclosed").expect_err("pattern is invalid");
    assert!(error.is_compile());
    assert!(error.to_string().starts_with("invalid pattern:"));
    assert_eq!(list, strings(&["a", "b"]), "A compile failure shouldn't modify the list.");
}

struct FailsOn {
    text: &'static str,
    calls: Cell<usize>,
}

impl Matcher for FailsOn {
    fn is_match(&self, text: &str) -> Result<bool, MatchError> {
        self.calls.set(self.calls.get() + 1);
        if text == self.text {
            Err(MatchError {
                message: format!("can't match {text}"),
            })
        } else {
            Ok(text.len() > 1)
        }
    }
}

#[test]
fn test_filter_matching_error() {
    let mut list = strings(&["a", "bb", "c", "boom", "d"]);
    let matcher = FailsOn {
        text: "boom",
        calls: Cell::new(0),
    };

    let error = list.filter_matching(&matcher).expect_err("matcher fails on boom");
    assert_eq!(
        error,
        PatternError::Match(MatchError {
            message: "can't match boom".to_owned(),
        })
    );
    assert_eq!(matcher.calls.get(), 4, "Filtering should stop at the first matcher failure.");
    assert_eq!(
        list,
        strings(&["bb", "boom", "d"]),
        "Rejected nodes stay dropped, unvisited nodes are kept."
    );
}

#[test]
fn test_print_to_stdout() {
    let list = strings(&["stdout", "smoke"]);
    assert!(list.print(", ").is_ok());
    assert!(list.print_lines(Some("  ")).is_ok());
    assert!(StrList::new().print(", ").is_ok());
}
