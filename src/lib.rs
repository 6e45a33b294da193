//! Monthly rent receipt PDFs for HRA claims.

pub mod cli;
pub mod config;
pub mod receipt;

use std::path::PathBuf;

pub use crate::cli::Cli;
pub use crate::config::ReceiptConfig;
pub use crate::receipt::{ReceiptError, ReceiptRequest};

use crate::receipt::writer::write_document;
use crate::receipt::{Generator, ReceiptGenerator, Validator};

/// Resolve input, render every month, and write the document.
///
/// Returns the path that was written.
pub fn run(cli: &Cli, config: &ReceiptConfig) -> Result<PathBuf, ReceiptError> {
    let request = cli.resolve_request()?;
    request.review().log_warnings();

    let generator = ReceiptGenerator::new(config.clock());
    let document = generator.generate(&request)?;

    write_document(&document, &config.output_path)?;
    Ok(config.output_path.clone())
}
