#![cfg(test)]

use std::cmp::Ordering;
use std::fs;

use tempfile::TempDir;

use super::*;
use crate::strings;

fn fixture() -> TempDir {
    let dir = tempfile::tempdir().expect("temp dir");
    for name in ["b.txt", "a.rs", ".hidden", "notes.txt"] {
        fs::write(dir.path().join(name), name).expect("write fixture file");
    }
    fs::create_dir(dir.path().join("sub")).expect("create fixture dir");
    dir
}

fn dir_path(dir: &TempDir) -> String {
    dir.path().to_str().expect("temp dir path is utf-8").to_owned()
}

fn sorted(list: &crate::collections::linked::StrList) -> Vec<&str> {
    let mut array: Vec<&str> = list.to_array().into_iter().map(String::as_str).collect();
    strings::sort(&mut array);
    array
}

#[test]
fn test_read_directory_names() {
    let dir = fixture();
    let list = read_directory(&dir_path(&dir), Naming::FileName).expect("directory is readable");

    assert_eq!(
        sorted(&list),
        [".", "..", ".hidden", "a.rs", "b.txt", "notes.txt", "sub"],
        "Every entry should be listed, including . and .."
    );
}

#[test]
fn test_read_directory_full_paths() {
    let dir = fixture();
    let path = dir_path(&dir);

    let list = get_filepaths(&path).expect("directory is readable");
    assert!(list.search(&format!("{path}/a.rs")).is_some(), "Entries should be joined with a '/'.");

    let list = get_filepaths(&format!("{path}/")).expect("directory is readable");
    assert!(
        list.search(&format!("{path}/a.rs")).is_some(),
        "A trailing '/' on the directory shouldn't be doubled."
    );
}

#[test]
fn test_read_directory_errors() {
    let dir = fixture();
    let path = dir_path(&dir);

    let error = get_filenames(&format!("{path}/missing")).expect_err("directory doesn't exist");
    assert!(error.is_missing_component());

    let error = get_filenames(&format!("{path}/a.rs")).expect_err("path is a file");
    assert!(error.is_non_dir_component());

    assert!(get_filenames("bad\0path").expect_err("path has a nul").is_nul_path());
}

#[test]
fn test_filter_regex() {
    let dir = fixture();
    let list = get_filenames_filter_regex(&dir_path(&dir), "^[^.].*").expect("valid listing");
    assert_eq!(sorted(&list), ["a.rs", "b.txt", "notes.txt", "sub"], "Hidden entries should go.");

    let error = get_filenames_filter_regex(&dir_path(&dir), "[").expect_err("pattern is invalid");
    assert!(error.is_pattern());
}

#[test]
fn test_filter_predicates() {
    let dir = fixture();
    let path = dir_path(&dir);

    let dirs = get_filepaths_filter(&path, is_dir).expect("valid listing");
    assert_eq!(dirs.len(), 3, "., .. and sub should be the only directories.");

    let files = get_filepaths_filter(&path, is_regular).expect("valid listing");
    assert_eq!(files.len(), 4);

    let recent = get_filepaths_filter(&path, modified(Ordering::Greater, 0)).expect("valid listing");
    assert_eq!(recent.len(), 7, "Everything was modified after the epoch.");
}

#[test]
fn test_regex_files() {
    let dir = fixture();
    let path = dir_path(&dir);

    let list = regex_files(r"\.txt$", &path).expect("valid listing");
    assert_eq!(
        sorted(&list),
        [format!("{path}/b.txt"), format!("{path}/notes.txt")],
        "Only regular files whose name matches should be listed, by full path."
    );

    assert!(regex_files("(", &path).expect_err("pattern is invalid").is_pattern());
}

#[test]
fn test_younger_files() {
    let dir = fixture();
    let path = dir_path(&dir);

    assert_eq!(younger_files(0, &path).expect("valid listing").len(), 4);
    assert!(younger_files(i64::MAX, &path).expect("valid listing").is_empty());
}

#[test]
fn test_metadata() {
    let dir = fixture();
    let path = dir_path(&dir);

    let meta = metadata(&format!("{path}/a.rs")).expect("file exists");
    assert_eq!(meta.file_type, FileType::Regular);
    assert_eq!(meta.size, 4);

    assert_eq!(metadata(&path).expect("dir exists").file_type, FileType::Directory);
    assert!(metadata(&format!("{path}/nope")).expect_err("missing").is_missing_component());
}
