use std::sync::Mutex;

use expense_core::storage::{JsonStore, DEFAULT_STORE_FILE};
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the
/// test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates a JSON store backed by a unique temporary directory and returns
/// it together with the path it writes to.
pub fn temp_store() -> (JsonStore, std::path::PathBuf) {
    let temp = TempDir::new().expect("create temp dir");
    let path = temp.path().join(DEFAULT_STORE_FILE);
    let store = JsonStore::new(&path);
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    (store, path)
}
