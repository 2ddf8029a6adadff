use serde::{Deserialize, Serialize};

use crate::domain::geo::models::AddressResult;

/// Top-level envelope returned by the classification endpoint.
///
/// `error` is the empty string on success; `total_items` counts the
/// comma-split tokens of the raw `items` value, empty tokens included.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountryResponse {
    pub error: String,
    pub items: String,
    pub total_items: usize,
    pub country_results: Vec<AddressResult>,
}

impl CountryResponse {
    /// Envelope for requests rejected before the batch is processed.
    pub fn error(message: String) -> Self {
        Self {
            error: message,
            items: String::new(),
            total_items: 0,
            country_results: Vec::new(),
        }
    }
}
