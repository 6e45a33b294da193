//! Receipt module - business logic for turning a rent request into a PDF.
//!
//! The pipeline is split the same way the document is produced:
//! - `request` - resolving a `ReceiptRequest` from JSON or discrete values
//! - `month` - parsing "January 2024" style months and expanding ranges
//! - `page` - the fixed text layout of a single receipt page
//! - `engine` - drawing laid-out pages into a `lopdf` document
//! - `writer` - persisting the encoded document

pub mod clock;
pub mod common;
pub mod engine;
pub mod generator;
pub mod month;
pub mod page;
pub mod request;
pub mod traits;
pub mod validation;
pub mod writer;

pub use clock::{Clock, FixedClock, SystemClock};
pub use engine::PdfRenderEngine;
pub use generator::ReceiptGenerator;
pub use month::{CalendarMonth, MonthRange};
pub use page::{LineStyle, ReceiptLine, ReceiptPage};
pub use request::ReceiptRequest;
pub use traits::{Generator, Validator};

use std::path::PathBuf;

use thiserror::Error;

/// Default output file, written to the current working directory.
pub const OUTPUT_FILENAME: &str = "rent_receipts.pdf";

/// Errors that can occur while producing rent receipts.
#[derive(Debug, Error)]
pub enum ReceiptError {
    #[error("error reading JSON file {}", path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("error parsing JSON file {}", path.display())]
    ParseInput {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid {field} month {value:?}: {reason}")]
    InvalidMonth {
        field: &'static str,
        value: String,
        reason: String,
    },
    #[error("start month {from} cannot be after end month {to}")]
    RangeReversed { from: CalendarMonth, to: CalendarMonth },
    #[error("failed to render PDF: {0}")]
    Render(String),
    #[error("error writing PDF to {}", path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid value {value:?} for {key}")]
    InvalidConfig { key: &'static str, value: String },
}

/// Result of a successful document generation.
#[derive(Debug)]
pub struct GeneratedDocument {
    pub pdf: Vec<u8>,
    /// Months in page order.
    pub months: Vec<CalendarMonth>,
}

impl GeneratedDocument {
    pub fn page_count(&self) -> usize {
        self.months.len()
    }
}
