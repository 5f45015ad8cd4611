//! Discovery of eligible .html files

use signage_upload::discover::find_html_files;
use std::collections::BTreeSet;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_matches_extension_case_insensitively_and_skips_dirs() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.html"), "<p>a</p>").unwrap();
    fs::write(dir.path().join("A.HTML"), "<p>A</p>").unwrap();
    fs::write(dir.path().join("b.txt"), "b").unwrap();
    fs::create_dir(dir.path().join("c.html")).unwrap();
    fs::write(dir.path().join("c.html").join("nested.html"), "<p>n</p>").unwrap();

    let files = find_html_files(dir.path()).unwrap();
    let names: BTreeSet<_> = files.iter().map(|f| f.name.as_str()).collect();

    assert_eq!(names, BTreeSet::from(["a.html", "A.HTML"]));
    for file in &files {
        assert_eq!(file.path, dir.path().join(&file.name));
    }
}

#[test]
fn test_empty_directory() {
    let dir = TempDir::new().unwrap();
    assert!(find_html_files(dir.path()).unwrap().is_empty());
}

#[test]
fn test_missing_directory_is_an_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("gone");
    assert!(find_html_files(&missing).is_err());
}
