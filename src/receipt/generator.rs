//! Generator for monthly rent receipts.
//!
//! Expands the request's month range and draws one page per month, all into
//! a single document.

use super::clock::Clock;
use super::engine::PdfRenderEngine;
use super::month::MonthRange;
use super::page::ReceiptPage;
use super::request::ReceiptRequest;
use super::traits::Generator;
use super::{GeneratedDocument, ReceiptError};

/// Generator for HRA rent receipts.
pub struct ReceiptGenerator {
    clock: Box<dyn Clock>,
}

impl ReceiptGenerator {
    pub fn new(clock: Box<dyn Clock>) -> Self {
        Self { clock }
    }
}

impl Generator<ReceiptRequest> for ReceiptGenerator {
    fn generate(&self, request: &ReceiptRequest) -> Result<GeneratedDocument, ReceiptError> {
        let months = MonthRange::parse(&request.from, &request.to)?;
        log::info!(
            "Generating {} receipt(s) from {} to {}",
            months.len(),
            request.from,
            request.to
        );

        let mut engine = PdfRenderEngine::new();
        for month in months {
            let page = ReceiptPage::new(request, month, self.clock.today());
            engine.draw_page(&page)?;
            log::debug!("Rendered receipt for {month}");
        }

        engine.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::receipt::clock::FixedClock;
    use chrono::NaiveDate;

    fn generator() -> ReceiptGenerator {
        ReceiptGenerator::new(Box::new(FixedClock(
            NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
        )))
    }

    #[test]
    fn test_generate_quarter() {
        let request =
            ReceiptRequest::from_fields("A", "B", "C", 1000.0, "January 2024", "March 2024");
        let document = generator().generate(&request).unwrap();

        let months: Vec<String> = document.months.iter().map(|m| m.to_string()).collect();
        assert_eq!(months, vec!["January 2024", "February 2024", "March 2024"]);
    }

    #[test]
    fn test_generate_reversed_range() {
        let request =
            ReceiptRequest::from_fields("A", "B", "C", 1000.0, "March 2024", "January 2024");
        assert!(matches!(
            generator().generate(&request),
            Err(ReceiptError::RangeReversed { .. })
        ));
    }

    #[test]
    fn test_generate_empty_months() {
        let request = ReceiptRequest::default();
        assert!(matches!(
            generator().generate(&request),
            Err(ReceiptError::InvalidMonth { field: "from", .. })
        ));
    }
}
