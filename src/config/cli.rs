use crate::config::{resource_dir, ConvertConfig, DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_FILE};
use crate::utils::error::Result;
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Parser)]
#[command(name = "csv2json")]
#[command(about = "Convert a headed CSV file into a JSON array of records")]
pub struct CliConfig {
    /// CSV file to read [default: businessScopes.csv next to the executable]
    #[arg(long)]
    pub input_path: Option<PathBuf>,

    /// JSON file to write [default: businessScopes.json next to the executable]
    #[arg(long)]
    pub output_path: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines on stderr")]
    pub json_logs: bool,
}

impl CliConfig {
    /// Fills in omitted paths from the executable's directory.
    pub fn into_convert_config(self) -> Result<ConvertConfig> {
        if self.input_path.is_some() && self.output_path.is_some() {
            return Ok(self.resolve_in(Path::new("")));
        }
        let dir = resource_dir()?;
        Ok(self.resolve_in(&dir))
    }

    pub fn resolve_in(self, resource_dir: &Path) -> ConvertConfig {
        ConvertConfig::new(
            self.input_path
                .unwrap_or_else(|| resource_dir.join(DEFAULT_INPUT_FILE)),
            self.output_path
                .unwrap_or_else(|| resource_dir.join(DEFAULT_OUTPUT_FILE)),
        )
    }
}
