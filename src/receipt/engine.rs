//! PDF rendering engine.
//!
//! Handles the low-level details of building a `lopdf` document: page tree,
//! shared font resources, and one content stream per receipt page.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, ObjectId, Stream};

use super::common::encode_win_ansi;
use super::month::CalendarMonth;
use super::page::{LineStyle, ReceiptPage, CELL_HEIGHT_MM};
use super::{GeneratedDocument, ReceiptError};

const PAGE_WIDTH_PT: f32 = 595.28;
const PAGE_HEIGHT_PT: f32 = 841.89;
const PT_PER_MM: f32 = 72.0 / 25.4;
/// Left margin plus the cell's inner padding.
const TEXT_LEFT_MM: f32 = 11.0;

const FONT_REGULAR: &str = "F1";
const FONT_BOLD: &str = "F2";

fn mm_to_pt(mm: f32) -> f32 {
    mm * PT_PER_MM
}

/// Accumulates receipt pages into one PDF document.
pub struct PdfRenderEngine {
    doc: Document,
    pages_id: ObjectId,
    resources_id: ObjectId,
    kids: Vec<Object>,
    months: Vec<CalendarMonth>,
}

impl PdfRenderEngine {
    pub fn new() -> Self {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let regular_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
            "Encoding" => "WinAnsiEncoding",
        });
        let bold_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica-Bold",
            "Encoding" => "WinAnsiEncoding",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! {
                FONT_REGULAR => regular_id,
                FONT_BOLD => bold_id,
            },
        });

        Self {
            doc,
            pages_id,
            resources_id,
            kids: Vec::new(),
            months: Vec::new(),
        }
    }

    /// Number of pages drawn so far.
    pub fn page_count(&self) -> usize {
        self.kids.len()
    }

    /// Draw one receipt onto a new page.
    pub fn draw_page(&mut self, page: &ReceiptPage<'_>) -> Result<(), ReceiptError> {
        let mut operations = Vec::new();

        for line in page.lines() {
            let font = match line.style {
                LineStyle::Title => FONT_BOLD,
                LineStyle::Body => FONT_REGULAR,
            };
            let size = line.style.font_size();
            // Vertically centre the text in its cell.
            let baseline_mm = line.top_mm + CELL_HEIGHT_MM / 2.0 + 0.3 * size / PT_PER_MM;

            operations.push(Operation::new("BT", vec![]));
            operations.push(Operation::new("Tf", vec![font.into(), size.into()]));
            operations.push(Operation::new(
                "Td",
                vec![
                    mm_to_pt(TEXT_LEFT_MM).into(),
                    (PAGE_HEIGHT_PT - mm_to_pt(baseline_mm)).into(),
                ],
            ));
            operations.push(Operation::new(
                "Tj",
                vec![Object::string_literal(encode_win_ansi(&line.text))],
            ));
            operations.push(Operation::new("ET", vec![]));
        }

        let content = Content { operations }
            .encode()
            .map_err(|e| ReceiptError::Render(format!("failed to encode content stream: {e}")))?;
        let content_id = self
            .doc
            .add_object(Stream::new(lopdf::Dictionary::new(), content));

        let page_id = self.doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => self.pages_id,
            "Resources" => self.resources_id,
            "MediaBox" => vec![0.into(), 0.into(), PAGE_WIDTH_PT.into(), PAGE_HEIGHT_PT.into()],
            "Contents" => content_id,
        });

        self.kids.push(page_id.into());
        self.months.push(page.month);
        Ok(())
    }

    /// Close the page tree and serialise the document.
    pub fn finish(mut self) -> Result<GeneratedDocument, ReceiptError> {
        let count = i64::try_from(self.kids.len())
            .map_err(|_| ReceiptError::Render("too many pages".to_string()))?;
        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => self.kids,
            "Count" => count,
        };
        self.doc
            .objects
            .insert(self.pages_id, Object::Dictionary(pages));

        let catalog_id = self.doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => self.pages_id,
        });
        self.doc.trailer.set("Root", catalog_id);

        let mut pdf = Vec::new();
        self.doc
            .save_to(&mut pdf)
            .map_err(|e| ReceiptError::Render(format!("failed to serialise document: {e}")))?;

        Ok(GeneratedDocument {
            pdf,
            months: self.months,
        })
    }
}

impl Default for PdfRenderEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::receipt::request::ReceiptRequest;
    use chrono::NaiveDate;

    #[test]
    fn test_empty_engine_still_produces_pdf() {
        let document = PdfRenderEngine::new().finish().unwrap();
        assert!(document.pdf.starts_with(b"%PDF-1.5"));
        assert_eq!(document.page_count(), 0);
    }

    #[test]
    fn test_draw_pages() {
        let request = ReceiptRequest::from_fields("A", "B", "C", 10.0, "", "");
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let mut engine = PdfRenderEngine::new();

        for month in ["January 2024", "February 2024"] {
            let page = ReceiptPage::new(&request, month.parse().unwrap(), date);
            engine.draw_page(&page).unwrap();
        }
        assert_eq!(engine.page_count(), 2);

        let document = engine.finish().unwrap();
        let loaded = Document::load_mem(&document.pdf).unwrap();
        assert_eq!(loaded.get_pages().len(), 2);
    }

    #[test]
    fn test_mm_to_pt() {
        assert!((mm_to_pt(25.4) - 72.0).abs() < 1e-4);
    }
}
