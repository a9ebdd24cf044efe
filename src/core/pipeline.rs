use crate::core::csv_source::parse_document;
use crate::core::json_sink::render_document;
use crate::core::{ConfigProvider, Document, Pipeline, RenderedDocument, Storage};
use crate::utils::error::{ConvertError, Result};
use std::io;
use std::path::PathBuf;

pub struct CsvJsonPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> CsvJsonPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for CsvJsonPipeline<S, C> {
    fn extract(&self) -> Result<Document> {
        let input_path = self.config.input_path();
        tracing::debug!("Reading CSV from: {}", input_path.display());

        let bytes = self.storage.read_file(input_path)?;
        tracing::debug!("Read {} bytes", bytes.len());

        let content = String::from_utf8(bytes).map_err(|e| ConvertError::InputUnreadable {
            path: input_path.to_path_buf(),
            source: io::Error::new(io::ErrorKind::InvalidData, e),
        })?;

        parse_document(&content)
    }

    fn transform(&self, document: Document) -> Result<RenderedDocument> {
        render_document(&document)
    }

    fn load(&self, rendered: RenderedDocument) -> Result<PathBuf> {
        let output_path = self.config.output_path();
        tracing::debug!(
            "Writing {} bytes of JSON to: {}",
            rendered.json.len(),
            output_path.display()
        );

        self.storage.write_file(output_path, rendered.json.as_bytes())?;

        Ok(output_path.to_path_buf())
    }
}
