//! Common utilities for receipt generation.
//!
//! Shared helpers for date and amount formatting and PDF text encoding.

use chrono::NaiveDate;

const ISSUE_DATE_FORMAT: &str = "%d/%m/%Y";

/// Format an issue date as DD/MM/YYYY (e.g., "02/01/2006").
pub fn format_issue_date(date: NaiveDate) -> String {
    date.format(ISSUE_DATE_FORMAT).to_string()
}

/// Parse a DD/MM/YYYY issue date.
pub fn parse_issue_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), ISSUE_DATE_FORMAT).ok()
}

/// Format a rent amount with exactly two decimals and no separators.
pub fn format_amount(amount: f64) -> String {
    format!("{amount:.2}")
}

/// Encode text for the standard PDF fonts using WinAnsi.
///
/// Latin-1 maps directly; anything else becomes `?`.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|ch| u8::try_from(u32::from(ch)).unwrap_or(b'?'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(1234.5), "1234.50");
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(1000.0), "1000.00");
        assert_eq!(format_amount(25000.456), "25000.46");
        assert_eq!(format_amount(-50.0), "-50.00");
    }

    #[test]
    fn test_issue_date_round_trip() {
        let date = NaiveDate::from_ymd_opt(2006, 1, 2).unwrap();
        assert_eq!(format_issue_date(date), "02/01/2006");
        assert_eq!(parse_issue_date("02/01/2006"), Some(date));
        assert_eq!(parse_issue_date("2006-01-02"), None);
    }

    #[test]
    fn test_encode_win_ansi() {
        assert_eq!(encode_win_ansi("Rent (Jan)"), b"Rent (Jan)".to_vec());
        assert_eq!(encode_win_ansi("café"), vec![b'c', b'a', b'f', 0xE9]);
        assert_eq!(encode_win_ansi("₹500"), b"?500".to_vec());
    }
}
