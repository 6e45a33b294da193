#![allow(dead_code)]

use chrono::NaiveDate;
use lopdf::content::Content;
use lopdf::{Document, Object};
use rent_receipt::receipt::{FixedClock, ReceiptGenerator};

/// Issue date used by every deterministic test.
pub fn issue_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 4, 15).unwrap()
}

pub fn fixed_generator() -> ReceiptGenerator {
    ReceiptGenerator::new(Box::new(FixedClock(issue_date())))
}

/// Text drawn on each page, in page order.
pub fn page_texts(pdf: &[u8]) -> Vec<Vec<String>> {
    let doc = Document::load_mem(pdf).expect("generated PDF should load");
    doc.get_pages()
        .values()
        .map(|&page_id| {
            let data = doc.get_page_content(page_id).expect("page content");
            let content = Content::decode(&data).expect("content stream should decode");
            content
                .operations
                .iter()
                .filter(|op| op.operator == "Tj")
                .filter_map(|op| match op.operands.first() {
                    Some(Object::String(bytes, _)) => Some(String::from_utf8_lossy(bytes).into_owned()),
                    _ => None,
                })
                .collect()
        })
        .collect()
}

/// The "Month: ..." line of every page.
pub fn page_months(pdf: &[u8]) -> Vec<String> {
    page_texts(pdf)
        .into_iter()
        .filter_map(|lines| {
            lines
                .into_iter()
                .find_map(|line| line.strip_prefix("Month: ").map(str::to_string))
        })
        .collect()
}
