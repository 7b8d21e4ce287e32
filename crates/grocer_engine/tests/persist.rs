use std::fs;

use grocer_engine::{
    ensure_output_dir, write_grocery_list, ListStore, PersistError, GROCERY_LIST_FILENAME,
};
use tempfile::TempDir;

#[test]
fn creates_missing_output_dir() {
    let temp = TempDir::new().unwrap();
    let new_dir = temp.path().join("out").join("week");
    assert!(!new_dir.exists());
    ensure_output_dir(&new_dir).unwrap();
    assert!(new_dir.is_dir());
}

#[test]
fn saving_twice_replaces_previous_list() {
    let temp = TempDir::new().unwrap();
    let store = ListStore::new(temp.path());

    let first = store.save("Rice: 8 cup").unwrap();
    assert_eq!(fs::read_to_string(&first).unwrap(), "Rice: 8 cup\n");

    let second = store.save("Salt").unwrap();
    assert_eq!(first, second);
    assert_eq!(fs::read_to_string(&second).unwrap(), "Salt\n");
}

#[test]
fn save_as_writes_content_verbatim() {
    let temp = TempDir::new().unwrap();
    let store = ListStore::new(temp.path());
    let path = store.save_as("organized.txt", "🌾 Grains\nRice: 8 cup").unwrap();
    assert_eq!(path, temp.path().join("organized.txt"));
    assert_eq!(fs::read_to_string(path).unwrap(), "🌾 Grains\nRice: 8 cup");
}

#[test]
fn file_in_place_of_directory_is_rejected() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("not_a_dir");
    fs::write(&file_path, "x").unwrap();

    let err = write_grocery_list(&file_path, "Rice: 8 cup").unwrap_err();
    assert!(matches!(err, PersistError::NotADirectory(path) if path == file_path));
    assert!(!file_path.with_file_name(GROCERY_LIST_FILENAME).exists());
}

#[test]
fn grocery_list_file_ends_with_single_newline() {
    let temp = TempDir::new().unwrap();
    let path = write_grocery_list(temp.path(), "Rice: 8 cup\nSalt\n\n").unwrap();
    assert_eq!(path.file_name().unwrap(), GROCERY_LIST_FILENAME);
    assert_eq!(fs::read_to_string(path).unwrap(), "Rice: 8 cup\nSalt\n");
}
