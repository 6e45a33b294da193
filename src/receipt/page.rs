//! Fixed text layout of one receipt page.
//!
//! Positions are in millimetres from the top-left corner of an A4 page, with
//! every line drawn in a 10mm tall cell.

use chrono::NaiveDate;

use super::common::{format_amount, format_issue_date};
use super::month::CalendarMonth;
use super::request::ReceiptRequest;

pub const TOP_MARGIN_MM: f32 = 10.0;
pub const CELL_HEIGHT_MM: f32 = 10.0;
/// Extra gap before the date line.
pub const SIGNATURE_GAP_MM: f32 = 20.0;
pub const SIGNATURE_LINE: &str = "Signature: ________________";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    /// Bold 16pt.
    Title,
    /// Regular 12pt.
    Body,
}

impl LineStyle {
    pub fn font_size(&self) -> f32 {
        match self {
            Self::Title => 16.0,
            Self::Body => 12.0,
        }
    }
}

/// A single line of receipt text and where its cell starts.
#[derive(Debug, Clone, PartialEq)]
pub struct ReceiptLine {
    pub text: String,
    pub style: LineStyle,
    pub top_mm: f32,
}

/// One month's receipt.
#[derive(Debug, Clone)]
pub struct ReceiptPage<'a> {
    pub request: &'a ReceiptRequest,
    pub month: CalendarMonth,
    pub issued_on: NaiveDate,
}

impl<'a> ReceiptPage<'a> {
    pub fn new(request: &'a ReceiptRequest, month: CalendarMonth, issued_on: NaiveDate) -> Self {
        Self {
            request,
            month,
            issued_on,
        }
    }

    /// Lines in drawing order.
    pub fn lines(&self) -> Vec<ReceiptLine> {
        let request = self.request;
        let mut top = TOP_MARGIN_MM;
        let mut lines = Vec::with_capacity(8);

        let mut push = |text: String, style: LineStyle, advance: f32| {
            lines.push(ReceiptLine {
                text,
                style,
                top_mm: top,
            });
            top += advance;
        };

        push("Rent Receipt".to_string(), LineStyle::Title, CELL_HEIGHT_MM);
        push(format!("Landlord: {}", request.landlord), LineStyle::Body, CELL_HEIGHT_MM);
        push(format!("Tenant: {}", request.tenant), LineStyle::Body, CELL_HEIGHT_MM);
        push(format!("Address: {}", request.address), LineStyle::Body, CELL_HEIGHT_MM);
        push(
            format!("Rent Amount: {}", format_amount(request.rent)),
            LineStyle::Body,
            CELL_HEIGHT_MM,
        );
        push(format!("Month: {}", self.month), LineStyle::Body, SIGNATURE_GAP_MM);
        push(
            format!("Date: {}", format_issue_date(self.issued_on)),
            LineStyle::Body,
            CELL_HEIGHT_MM,
        );
        push(SIGNATURE_LINE.to_string(), LineStyle::Body, CELL_HEIGHT_MM);

        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_request() -> ReceiptRequest {
        ReceiptRequest::from_fields("A", "B", "C", 1234.5, "January 2024", "January 2024")
    }

    #[test]
    fn test_lines_in_fixed_order() {
        let request = sample_request();
        let page = ReceiptPage::new(
            &request,
            "January 2024".parse().unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 5).unwrap(),
        );

        let text: Vec<String> = page.lines().into_iter().map(|l| l.text).collect();
        assert_eq!(
            text,
            vec![
                "Rent Receipt",
                "Landlord: A",
                "Tenant: B",
                "Address: C",
                "Rent Amount: 1234.50",
                "Month: January 2024",
                "Date: 05/02/2024",
                "Signature: ________________",
            ]
        );
    }

    #[test]
    fn test_layout_positions() {
        let request = sample_request();
        let page = ReceiptPage::new(
            &request,
            "January 2024".parse().unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 5).unwrap(),
        );
        let lines = page.lines();

        assert_eq!(lines[0].style, LineStyle::Title);
        assert!(lines[1..].iter().all(|l| l.style == LineStyle::Body));

        let tops: Vec<f32> = lines.iter().map(|l| l.top_mm).collect();
        assert_eq!(tops, vec![10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 80.0, 90.0]);
    }
}
