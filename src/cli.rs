//! Command-line surface.

use std::path::PathBuf;

use clap::Parser;

use crate::receipt::{ReceiptError, ReceiptRequest};

/// Generate rent receipts for HRA claims.
#[derive(Parser, Debug, Default)]
#[command(name = "rent-receipt", version, about = "Generate rent receipts for HRA claims")]
pub struct Cli {
    /// Landlord's name (optional if JSON is provided)
    #[arg(short = 'l', long, default_value = "")]
    pub landlord: String,

    /// Tenant's name (optional if JSON is provided)
    #[arg(short = 't', long, default_value = "")]
    pub tenant: String,

    /// Property address (optional if JSON is provided)
    #[arg(short = 'a', long, default_value = "")]
    pub address: String,

    /// Monthly rent amount (optional if JSON is provided)
    #[arg(short = 'r', long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub rent: f64,

    /// Start month, e.g. "January 2024" (optional if JSON is provided)
    #[arg(short = 'f', long, default_value = "")]
    pub from: String,

    /// End month, e.g. "December 2024" (optional if JSON is provided)
    #[arg(short = 'o', long, default_value = "")]
    pub to: String,

    /// Input data as JSON file; replaces all other flags
    #[arg(short = 'j', long, value_hint = clap::ValueHint::FilePath)]
    pub json: Option<PathBuf>,
}

impl Cli {
    /// Resolve the request, letting a JSON file override every flag.
    pub fn resolve_request(&self) -> Result<ReceiptRequest, ReceiptError> {
        match &self.json {
            Some(path) => {
                log::info!("Reading receipt details from {}", path.display());
                ReceiptRequest::from_json_file(path)
            }
            None => Ok(ReceiptRequest::from_fields(
                self.landlord.as_str(),
                self.tenant.as_str(),
                self.address.as_str(),
                self.rent,
                self.from.as_str(),
                self.to.as_str(),
            )),
        }
    }
}
