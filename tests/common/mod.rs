#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Once;
use tempfile::TempDir;

pub mod fixtures;

static INIT: Once = Once::new();

pub fn init_test_logging() {
    INIT.call_once(|| {
        taiga_report::logging::init_test_logging();
    });
}

/// Write `contents` as a CSV export in a fresh temp dir.
pub fn export_file(contents: &str) -> (PathBuf, TempDir) {
    init_test_logging();
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("userstories.csv");
    std::fs::write(&path, contents).expect("Failed to write export");
    (path, dir)
}
