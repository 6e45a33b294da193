//! Runtime configuration read from the environment (and `.env`).

use std::env;
use std::path::PathBuf;

use chrono::NaiveDate;

use crate::receipt::common::parse_issue_date;
use crate::receipt::{Clock, FixedClock, ReceiptError, SystemClock, OUTPUT_FILENAME};

pub const OUTPUT_VAR: &str = "RENT_RECEIPT_OUTPUT";
pub const DATE_VAR: &str = "RENT_RECEIPT_DATE";

#[derive(Debug, Clone, PartialEq)]
pub struct ReceiptConfig {
    pub output_path: PathBuf,
    /// Pins the "Date:" line instead of reading the system clock.
    pub issue_date: Option<NaiveDate>,
}

impl Default for ReceiptConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(OUTPUT_FILENAME),
            issue_date: None,
        }
    }
}

impl ReceiptConfig {
    pub fn from_env() -> Result<Self, ReceiptError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ReceiptError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let output_path = get(OUTPUT_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(OUTPUT_FILENAME));

        let issue_date = match get(DATE_VAR) {
            Some(value) => Some(parse_issue_date(&value).ok_or(ReceiptError::InvalidConfig {
                key: DATE_VAR,
                value,
            })?),
            None => None,
        };

        Ok(Self {
            output_path,
            issue_date,
        })
    }

    pub fn clock(&self) -> Box<dyn Clock> {
        match self.issue_date {
            Some(date) => Box::new(FixedClock(date)),
            None => Box::new(SystemClock),
        }
    }
}
