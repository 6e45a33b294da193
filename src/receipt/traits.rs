//! Traits for the receipt pipeline.

use super::validation::ValidationIssues;
use super::{GeneratedDocument, ReceiptError};

/// Trait for reviewing request objects.
pub trait Validator {
    /// Collect advisory issues; an empty result means nothing looked off.
    fn review(&self) -> ValidationIssues;
}

/// Trait for document generators.
pub trait Generator<Req: ?Sized> {
    /// Generate a document from the request.
    fn generate(&self, request: &Req) -> Result<GeneratedDocument, ReceiptError>;
}
