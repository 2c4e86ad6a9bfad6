//! Vault storage for prio
//!
//! The engines never touch the filesystem; they go through a `Vault` that
//! lists candidate files and reads/writes whole text blobs. `DirVault` is
//! the directory-backed implementation used by the CLI.

use std::path::{Path, PathBuf};

use crate::config::FilesConfig;
use crate::error::{Error, Result};

/// File storage collaborator.
pub trait Vault {
    /// All candidate files, by name prefix and extension.
    fn candidates(&self, files: &FilesConfig) -> Result<Vec<PathBuf>>;

    /// Read a file's full text.
    fn read(&self, path: &Path) -> Result<String>;

    /// Replace a file's full text.
    fn write(&self, path: &Path, contents: &str) -> Result<()>;
}

/// Vault backed by a directory tree.
#[derive(Debug, Clone)]
pub struct DirVault {
    root: PathBuf,
}

impl DirVault {
    pub fn new(root: PathBuf) -> Result<Self> {
        if !root.is_dir() {
            return Err(Error::VaultNotFound(root));
        }
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Vault for DirVault {
    fn candidates(&self, files: &FilesConfig) -> Result<Vec<PathBuf>> {
        let pattern = self
            .root
            .join(format!("**/{}*.{}", files.prefix, files.extension));
        let mut paths = Vec::new();
        for entry in glob::glob(&pattern.to_string_lossy())? {
            let path = entry.map_err(|err| Error::Io(err.into_error()))?;
            if path.is_file() {
                paths.push(path);
            }
        }
        paths.sort();
        Ok(paths)
    }

    fn read(&self, path: &Path) -> Result<String> {
        Ok(std::fs::read_to_string(path)?)
    }

    fn write(&self, path: &Path, contents: &str) -> Result<()> {
        Ok(std::fs::write(path, contents)?)
    }
}
