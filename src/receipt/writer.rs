//! Persists generated documents.

use std::fs;
use std::path::Path;

use super::{GeneratedDocument, ReceiptError};

/// Write the encoded PDF to `path`, replacing any existing file.
pub fn write_document(document: &GeneratedDocument, path: &Path) -> Result<(), ReceiptError> {
    fs::write(path, &document.pdf).map_err(|source| ReceiptError::WriteOutput {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!(
        "Wrote {} page(s) ({} bytes) to {}",
        document.page_count(),
        document.pdf.len(),
        path.display()
    );
    Ok(())
}
