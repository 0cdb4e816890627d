#![cfg(test)]

use super::*;

#[test]
fn test_single_row() {
    assert_eq!(render_columns(&["a", "bb", "ccc"], 80), "a  bb  ccc\n");
}

#[test]
fn test_column_major() {
    let names = ["one", "two", "three", "four", "five"];
    assert_eq!(
        render_columns(&names, 14),
        "one    four\ntwo    five\nthree\n",
        "Items should fill each column top to bottom before moving right."
    );
}

#[test]
fn test_narrow_terminal() {
    let names = ["a-long-name", "another-long-name"];
    assert_eq!(
        render_columns(&names, 5),
        "a-long-name\nanother-long-name\n",
        "A single column should be used even when it doesn't fit."
    );
}

#[test]
fn test_layout() {
    assert_eq!(Layout::fit(&[], 80), Layout { rows: 0, widths: vec![] });
    assert_eq!(render_columns::<&str>(&[], 80), "");

    let layout = Layout::fit(&[3, 3, 5, 4, 4], 14);
    assert_eq!(layout.rows, 3);
    assert_eq!(layout.widths, [5, 4]);
    assert_eq!(layout.columns(), 2);
}

#[test]
fn test_wide_characters() {
    assert_eq!(
        render_columns(&["日本語日本語", "abc"], 14),
        "日本語日本語\nabc\n",
        "Wide characters take two cells each, so these names can't share a 14 cell row."
    );
    assert_eq!(
        render_columns(&["日本", "a", "b", "c"], 9),
        "日本  b\na     c\n",
        "Padding should be measured in display cells, not characters."
    );
}

#[test]
fn test_combining_marks() {
    assert_eq!(
        render_columns(&["e\u{301}x", "ab"], 80),
        "e\u{301}x  ab\n",
        "Combining marks shouldn't widen a column."
    );
}

#[test]
fn test_overwide_item_single_column() {
    let mut lens = vec![3; 30_000];
    lens.push(200);

    let layout = Layout::fit(&lens, 80);
    assert_eq!(layout.rows, lens.len(), "An item wider than the terminal forces a single column.");
    assert_eq!(layout.widths, [200]);

    let layout = Layout::fit(&[4, 4], 4);
    assert_eq!(layout.rows, 2, "An item exactly as wide as the terminal leaves no room for a second column.");
}
