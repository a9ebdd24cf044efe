use crate::domain::model::{Document, RenderedDocument};
use crate::utils::error::Result;

/// Renders a document as a 2-space indented JSON array.
///
/// Non-ASCII text is written as-is; serde_json only escapes control
/// characters, quotes and backslashes.
pub fn render_document(document: &Document) -> Result<RenderedDocument> {
    let json = serde_json::to_string_pretty(document)?;
    Ok(RenderedDocument {
        json,
        record_count: document.len(),
    })
}
