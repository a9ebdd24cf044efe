use crate::core::Storage;
use crate::utils::error::{ConvertError, Result};
use std::fs;
use std::io;
use std::path::Path;

/// File system storage. Paths are used as given.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }
}

impl Storage for LocalStorage {
    fn read_file(&self, path: &Path) -> Result<Vec<u8>> {
        fs::read(path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => ConvertError::InputNotFound {
                path: path.to_path_buf(),
            },
            _ => ConvertError::InputUnreadable {
                path: path.to_path_buf(),
                source,
            },
        })
    }

    /// Creates or truncates `path`. Missing parent directories are an error.
    fn write_file(&self, path: &Path, data: &[u8]) -> Result<()> {
        fs::write(path, data).map_err(|source| ConvertError::OutputUnwritable {
            path: path.to_path_buf(),
            source,
        })
    }
}
