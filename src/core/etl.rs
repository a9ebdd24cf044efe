use crate::core::Pipeline;
use crate::utils::error::Result;
use std::path::PathBuf;
use std::time::Instant;

pub struct ConversionEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ConversionEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Runs extract, transform and load in order, returning the output path.
    pub fn run(&self) -> Result<PathBuf> {
        let started = Instant::now();
        tracing::info!("Starting CSV to JSON conversion");

        // Extract
        let document = self.pipeline.extract()?;
        tracing::info!("📥 Parsed {} records", document.len());

        // Transform
        let rendered = self.pipeline.transform(document)?;
        tracing::debug!(
            "Rendered {} records into {} bytes of JSON",
            rendered.record_count,
            rendered.json.len()
        );

        // Load
        let output_path = self.pipeline.load(rendered)?;
        tracing::info!(
            "📁 Output saved to: {} ({:?})",
            output_path.display(),
            started.elapsed()
        );

        Ok(output_path)
    }
}
