//! Converts a headed CSV file into a pretty-printed JSON array of records.
//!
//! ```no_run
//! let written = csv2json::convert("businessScopes.csv", "businessScopes.json")?;
//! println!("Conversion complete. JSON file saved to {}", written.display());
//! # Ok::<(), csv2json::ConvertError>(())
//! ```

pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;

pub use crate::adapters::LocalStorage;
pub use crate::config::ConvertConfig;
pub use crate::core::{etl::ConversionEngine, pipeline::CsvJsonPipeline};
pub use crate::domain::model::{Document, Record};
pub use crate::utils::error::{ConvertError, Result};

use crate::utils::validation::Validate;
use std::path::{Path, PathBuf};

/// Reads the CSV at `input_path` and writes its records as JSON to
/// `output_path`, returning the path written.
///
/// The output file is only created once the whole input parsed cleanly.
pub fn convert(input_path: impl AsRef<Path>, output_path: impl AsRef<Path>) -> Result<PathBuf> {
    let config = ConvertConfig::new(input_path.as_ref(), output_path.as_ref());
    run(config)
}

/// Runs a conversion for an already assembled configuration.
pub fn run(config: ConvertConfig) -> Result<PathBuf> {
    config.validate()?;
    let pipeline = CsvJsonPipeline::new(LocalStorage::new(), config);
    ConversionEngine::new(pipeline).run()
}
