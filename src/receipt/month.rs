//! Calendar months and inclusive month ranges.
//!
//! Months are written as "<full month name> <4-digit year>", e.g. "January 2024".

use std::fmt;
use std::str::FromStr;

use chrono::Month;
use thiserror::Error;

use super::ReceiptError;

/// Why a month string was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MonthParseError {
    #[error("expected \"<Month> <YYYY>\", e.g. \"January 2024\"")]
    Format,
    #[error("unknown month name {0:?}, use the full English name")]
    MonthName(String),
    #[error("year {0:?} must be exactly four digits")]
    Year(String),
}

/// A (year, month) pair with no day component.
///
/// Ordering is chronological: year first, then month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarMonth {
    year: i32,
    /// 1-based, January = 1.
    month: u32,
}

impl CalendarMonth {
    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Full English month name.
    pub fn name(&self) -> &'static str {
        month_from_number(self.month).name()
    }

    /// The following month, rolling December into January.
    pub fn succ(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Number of months in the inclusive range `self..=other`, zero if reversed.
    pub fn months_through(&self, other: &Self) -> usize {
        let span = i64::from(other.year - self.year) * 12 + i64::from(other.month)
            - i64::from(self.month);
        usize::try_from(span + 1).unwrap_or(0)
    }

    /// Parse the value of a named input field, mapping failures to a receipt error.
    pub fn parse_field(field: &'static str, value: &str) -> Result<Self, ReceiptError> {
        value
            .parse()
            .map_err(|err: MonthParseError| ReceiptError::InvalidMonth {
                field,
                value: value.to_string(),
                reason: err.to_string(),
            })
    }
}

fn month_from_number(month: u32) -> Month {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .unwrap_or(Month::January)
}

impl FromStr for CalendarMonth {
    type Err = MonthParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, year) = s.split_once(' ').ok_or(MonthParseError::Format)?;
        // A run of spaces between name and year counts as one.
        let year = year.trim_start_matches(' ');
        if name.is_empty() || year.is_empty() {
            return Err(MonthParseError::Format);
        }

        let month = (1..=12u32)
            .find(|&m| month_from_number(m).name().eq_ignore_ascii_case(name))
            .ok_or_else(|| MonthParseError::MonthName(name.to_string()))?;

        if year.len() != 4 || !year.chars().all(|c| c.is_ascii_digit()) {
            return Err(MonthParseError::Year(year.to_string()));
        }
        let year = year
            .parse()
            .map_err(|_| MonthParseError::Year(year.to_string()))?;

        Ok(Self { year, month })
    }
}

impl fmt::Display for CalendarMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name(), self.year)
    }
}

/// Inclusive, ascending sequence of months.
#[derive(Debug, Clone)]
pub struct MonthRange {
    next: Option<CalendarMonth>,
    end: CalendarMonth,
}

impl MonthRange {
    /// Expand `from..=to`. Fails when `from` is after `to`.
    pub fn new(from: CalendarMonth, to: CalendarMonth) -> Result<Self, ReceiptError> {
        if from > to {
            return Err(ReceiptError::RangeReversed { from, to });
        }
        Ok(Self {
            next: Some(from),
            end: to,
        })
    }

    /// Parse both ends and expand them.
    pub fn parse(from: &str, to: &str) -> Result<Self, ReceiptError> {
        let start = CalendarMonth::parse_field("from", from)?;
        let end = CalendarMonth::parse_field("to", to)?;
        Self::new(start, end)
    }
}

impl Iterator for MonthRange {
    type Item = CalendarMonth;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = (current < self.end).then(|| current.succ());
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self
            .next
            .map_or(0, |current| current.months_through(&self.end));
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for MonthRange {}
