//! Rent receipt request and its two input sources.
//!
//! A request comes either from a JSON file or from discrete values (the CLI
//! flags). Both end up as the same immutable `ReceiptRequest`.

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

use super::traits::Validator;
use super::validation::{validate_positive_amount, validate_required, ValidationIssues};
use super::ReceiptError;

/// Everything needed to print a run of monthly receipts.
///
/// Months stay as the raw "<Month> <YYYY>" strings the user gave; they are
/// parsed when the range is expanded so errors can name the offending side.
///
/// Missing keys and `null` values decode to the field's zero value.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ReceiptRequest {
    #[serde(deserialize_with = "null_as_default")]
    pub landlord: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tenant: String,
    #[serde(deserialize_with = "null_as_default")]
    pub address: String,
    #[serde(deserialize_with = "null_as_default")]
    pub rent: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub from: String,
    #[serde(deserialize_with = "null_as_default")]
    pub to: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Lowercase object keys so "Landlord" and "LANDLORD" reach `landlord`.
///
/// A key already in lowercase wins over other spellings of the same name.
fn fold_keys(map: Map<String, Value>) -> Map<String, Value> {
    let mut folded = Map::new();
    let mut exact = Vec::new();

    for (key, value) in map {
        let lower = key.to_lowercase();
        if lower == key {
            exact.push((key, value));
        } else {
            folded.insert(lower, value);
        }
    }
    folded.extend(exact);
    folded
}

impl ReceiptRequest {
    /// Build a request from discrete values, used verbatim.
    pub fn from_fields(
        landlord: impl Into<String>,
        tenant: impl Into<String>,
        address: impl Into<String>,
        rent: f64,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        Self {
            landlord: landlord.into(),
            tenant: tenant.into(),
            address: address.into(),
            rent,
            from: from.into(),
            to: to.into(),
        }
    }

    /// Read and decode a JSON request file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ReceiptError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ReceiptError::ReadInput {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&contents).map_err(|source| ReceiptError::ParseInput {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Decode a JSON request document. Keys match case-insensitively.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        let value = match serde_json::from_str::<Value>(json)? {
            Value::Object(map) => Value::Object(fold_keys(map)),
            other => other,
        };
        serde_json::from_value(value)
    }
}

impl Validator for ReceiptRequest {
    fn review(&self) -> ValidationIssues {
        let mut issues = ValidationIssues::new();

        validate_required(&self.landlord, "landlord", "Landlord name", &mut issues);
        validate_required(&self.tenant, "tenant", "Tenant name", &mut issues);
        validate_required(&self.address, "address", "Property address", &mut issues);
        validate_positive_amount(self.rent, "rent", &mut issues);

        issues
    }
}
