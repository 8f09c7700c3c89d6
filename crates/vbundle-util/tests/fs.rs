use std::path::PathBuf;

use tempfile::TempDir;
use vbundle_util::fs::{collect_definition_files, find_ancestor_with, is_definition_file};

#[test]
fn test_find_ancestor_with_direct() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("Vbundle.toml"), "").unwrap();
    let result = find_ancestor_with(tmp.path(), "Vbundle.toml");
    assert_eq!(result, Some(tmp.path().to_path_buf()));
}

#[test]
fn test_find_ancestor_with_nested() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("Vbundle.toml"), "").unwrap();
    let nested = tmp.path().join("a").join("b").join("c");
    std::fs::create_dir_all(&nested).unwrap();
    let result = find_ancestor_with(&nested, "Vbundle.toml");
    assert_eq!(result, Some(tmp.path().to_path_buf()));
}

#[test]
fn test_find_ancestor_with_not_found() {
    let tmp = TempDir::new().unwrap();
    let result = find_ancestor_with(tmp.path(), "NonExistent.file");
    assert_eq!(result, None);
}

#[test]
fn test_is_definition_file() {
    assert!(is_definition_file(std::path::Path::new("a/bundle.json")));
    assert!(is_definition_file(std::path::Path::new("bundle.YAML")));
    assert!(is_definition_file(std::path::Path::new("bundle.yml")));
    assert!(!is_definition_file(std::path::Path::new("README.md")));
    assert!(!is_definition_file(std::path::Path::new("Makefile")));
}

#[test]
fn test_collect_definition_files_sorted_and_filtered() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("b.yaml"), "").unwrap();
    std::fs::write(tmp.path().join("a.json"), "").unwrap();
    std::fs::write(tmp.path().join("notes.txt"), "").unwrap();
    std::fs::create_dir(tmp.path().join("nested")).unwrap();
    std::fs::write(tmp.path().join("nested").join("c.json"), "").unwrap();

    let files = collect_definition_files(&[tmp.path().to_path_buf()]).unwrap();
    assert_eq!(
        files,
        vec![tmp.path().join("a.json"), tmp.path().join("b.yaml")]
    );
}

#[test]
fn test_collect_definition_files_keeps_explicit_files() {
    let tmp = TempDir::new().unwrap();
    let explicit = tmp.path().join("bundles.txt");
    std::fs::write(&explicit, "").unwrap();
    let files = collect_definition_files(&[explicit.clone()]).unwrap();
    assert_eq!(files, vec![explicit]);
}

#[test]
fn test_collect_definition_files_missing_path() {
    let result = collect_definition_files(&[PathBuf::from("/nonexistent/vbundle/defs")]);
    assert!(result.is_err());
}
