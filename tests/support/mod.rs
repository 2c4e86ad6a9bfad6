use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Temporary vault directory fixture for integration tests.
pub struct TestVault {
    dir: TempDir,
}

impl TestVault {
    pub fn init() -> Self {
        let dir = tempfile::tempdir().expect("failed to create tempdir");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write_file(&self, rel_path: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(rel_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("mkdir");
        }
        fs::write(&path, contents).expect("write file");
        path
    }

    pub fn read_file(&self, rel_path: &str) -> String {
        fs::read_to_string(self.dir.path().join(rel_path)).expect("read file")
    }

    pub fn write_config(&self, contents: &str) -> PathBuf {
        self.write_file(".prio.toml", contents)
    }
}
