#[cfg(feature = "cli")]
pub mod cli;

use crate::core::ConfigProvider;
use crate::utils::error::{ConvertError, Result};
use crate::utils::validation::{validate_path, Validate};
use std::path::{Path, PathBuf};

pub const DEFAULT_INPUT_FILE: &str = "businessScopes.csv";
pub const DEFAULT_OUTPUT_FILE: &str = "businessScopes.json";

/// Source and destination of one conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
}

impl ConvertConfig {
    pub fn new(input_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
        }
    }

    /// The well-known file pair inside `resource_dir`.
    pub fn defaults_in(resource_dir: &Path) -> Self {
        Self::new(
            resource_dir.join(DEFAULT_INPUT_FILE),
            resource_dir.join(DEFAULT_OUTPUT_FILE),
        )
    }
}

impl ConfigProvider for ConvertConfig {
    fn input_path(&self) -> &Path {
        &self.input_path
    }

    fn output_path(&self) -> &Path {
        &self.output_path
    }
}

impl Validate for ConvertConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input_path", &self.input_path)?;
        validate_path("output_path", &self.output_path)?;
        Ok(())
    }
}

/// Directory holding the running executable; default files resolve here.
pub fn resource_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().map_err(|e| ConvertError::ConfigError {
        message: format!("cannot locate the running executable: {}", e),
    })?;

    exe.parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| ConvertError::ConfigError {
            message: format!("executable path '{}' has no parent directory", exe.display()),
        })
}
