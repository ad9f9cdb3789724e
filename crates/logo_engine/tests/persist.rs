use std::fs;

use logo_engine::{ensure_output_dir, ImageWriter};
use tempfile::TempDir;

#[test]
fn creates_missing_output_dir() {
    let temp = TempDir::new().unwrap();
    let new_dir = temp.path().join("logos");
    assert!(!new_dir.exists());
    ensure_output_dir(&new_dir).unwrap();
    assert!(new_dir.is_dir());
}

#[test]
fn write_creates_dir_lazily_and_replaces_existing() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("logos");
    let writer = ImageWriter::new(dir.clone());
    assert!(!dir.exists());

    let first = writer.write("logo.png", b"aaaa").unwrap();
    assert!(dir.is_dir());
    assert_eq!(fs::read(&first).unwrap(), b"aaaa");

    let second = writer.write("logo.png", b"bbbb").unwrap();
    assert_eq!(first, second);
    assert_eq!(fs::read(&second).unwrap(), b"bbbb");
}

#[test]
fn no_partial_file_on_error() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("not_a_dir");
    fs::write(&file_path, "x").unwrap();

    let writer = ImageWriter::new(file_path.clone());
    let result = writer.write("logo.png", b"data");
    assert!(result.is_err());
    assert!(!file_path.with_file_name("logo.png").exists());
}
