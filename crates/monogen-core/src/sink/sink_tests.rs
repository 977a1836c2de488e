#![allow(non_snake_case)]

use super::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn write_output___fresh_path___writes_bytes() {
    let dir = TempDir::new().unwrap();
    let dest = dir.path().join("out.rs");

    write_output(&dest, b"fn noop() {}\n").unwrap();

    assert_eq!(fs::read(&dest).unwrap(), b"fn noop() {}\n");
}

#[test]
fn write_output___existing_file___is_replaced() {
    let dir = TempDir::new().unwrap();
    let dest = dir.path().join("out.rs");
    fs::write(&dest, "old contents").unwrap();

    write_output(&dest, b"new contents").unwrap();

    assert_eq!(fs::read_to_string(&dest).unwrap(), "new contents");
}

#[test]
fn write_output___destination_is_directory___fails_with_cleanup_error() {
    let dir = TempDir::new().unwrap();
    let dest = dir.path().join("out.rs");
    fs::create_dir(&dest).unwrap();

    let err = write_output(&dest, b"contents").unwrap_err();

    assert!(matches!(err, GenerateError::DestinationCleanup { .. }));
    // Nothing was written over the directory.
    assert!(dest.is_dir());
}

#[test]
fn write_output___missing_parent_directory___fails_with_write_error() {
    let dir = TempDir::new().unwrap();
    let dest = dir.path().join("no/such/dir/out.rs");

    let err = write_output(&dest, b"contents").unwrap_err();

    assert!(matches!(err, GenerateError::FileWrite { .. }));
}
