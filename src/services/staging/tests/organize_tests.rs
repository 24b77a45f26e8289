use super::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn write_labels(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("labels.csv");
    fs::write(&path, content).unwrap();
    path
}

fn setup_images(dir: &Path, names: &[(&str, &[u8])]) -> PathBuf {
    let image_dir = dir.join("images");
    fs::create_dir_all(&image_dir).unwrap();
    for (name, content) in names {
        fs::write(image_dir.join(name), content).unwrap();
    }
    image_dir
}

#[test]
fn test_copies_images_into_class_directories() {
    let dir = TempDir::new().unwrap();
    let labels = write_labels(dir.path(), "id,label\n1,cat\n3,cat\n");
    let images = setup_images(
        dir.path(),
        &[("1.png", b"one".as_slice()), ("3.png", b"three".as_slice())],
    );
    let out = dir.path().join("split");

    let report = prepare_folder_structure(&labels, &images, &out).unwrap();

    assert_eq!(report.files_copied, 2);
    assert!(report.missing_ids.is_empty());
    assert_eq!(fs::read(out.join("cat").join("1.png")).unwrap(), b"one");
    assert_eq!(fs::read(out.join("cat").join("3.png")).unwrap(), b"three");

    // Copy semantics: sources stay put
    assert!(images.join("1.png").exists());
    assert!(images.join("3.png").exists());
}

#[test]
fn test_missing_image_is_skipped_not_fatal() {
    // Rows (1,cat), (2,dog), (3,cat) with 2.png absent: both cats land,
    // id 2 is reported missing, and dog/ is never created.
    let dir = TempDir::new().unwrap();
    let labels = write_labels(dir.path(), "id,label\n1,cat\n2,dog\n3,cat\n");
    let images = setup_images(
        dir.path(),
        &[("1.png", b"one".as_slice()), ("3.png", b"three".as_slice())],
    );
    let out = dir.path().join("split");

    let report = prepare_folder_structure(&labels, &images, &out).unwrap();

    assert_eq!(report.files_copied, 2);
    assert_eq!(report.missing_ids, vec!["2".to_string()]);
    assert!(out.join("cat").join("1.png").exists());
    assert!(out.join("cat").join("3.png").exists());
    assert!(!out.join("dog").exists());
    assert!(!out.join("dog").join("2.png").exists());
}

#[test]
fn test_rerun_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let labels = write_labels(dir.path(), "id,label\n1,cat\n2,dog\n");
    let images = setup_images(
        dir.path(),
        &[("1.png", b"one".as_slice()), ("2.png", b"two".as_slice())],
    );
    let out = dir.path().join("split");

    let first = prepare_folder_structure(&labels, &images, &out).unwrap();
    let second = prepare_folder_structure(&labels, &images, &out).unwrap();

    assert_eq!(first.files_copied, 2);
    assert_eq!(second.files_copied, 2);
    assert_eq!(fs::read(out.join("cat").join("1.png")).unwrap(), b"one");
    assert_eq!(fs::read(out.join("dog").join("2.png")).unwrap(), b"two");

    // No strays beyond the two class directories
    let children: Vec<_> = fs::read_dir(&out).unwrap().filter_map(|e| e.ok()).collect();
    assert_eq!(children.len(), 2);
}

#[test]
fn test_duplicate_ids_copy_to_same_destination() {
    let dir = TempDir::new().unwrap();
    let labels = write_labels(dir.path(), "id,label\n1,cat\n1,cat\n");
    let images = setup_images(dir.path(), &[("1.png", b"one".as_slice())]);
    let out = dir.path().join("split");

    let report = prepare_folder_structure(&labels, &images, &out).unwrap();
    assert_eq!(report.files_copied, 2);
    assert_eq!(fs::read(out.join("cat").join("1.png")).unwrap(), b"one");
}

#[test]
fn test_bad_table_fails_before_any_copy() {
    let dir = TempDir::new().unwrap();
    let labels = write_labels(dir.path(), "id,label\n1,cat\n2\n");
    let images = setup_images(dir.path(), &[("1.png", b"one".as_slice())]);
    let out = dir.path().join("split");

    assert!(prepare_folder_structure(&labels, &images, &out).is_err());
    // Table is read eagerly, so the output tree was never started
    assert!(!out.exists());
}
