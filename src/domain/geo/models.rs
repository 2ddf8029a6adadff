//! Canonical data structures comprising the domain.

use serde::{Deserialize, Serialize};

/// Classification outcome for a single address token.
///
/// Serialized field names follow the wire format of the public endpoint
/// (`ip` / `country`); the reason is dropped from the output entirely when
/// the lookup produced none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressResult {
    /// The token as received, after trimming surrounding whitespace
    #[serde(rename = "ip")]
    pub address: String,

    /// Region label; "Unknown" when no table entry matched
    #[serde(rename = "country")]
    pub region: String,

    /// Optional explanation for the assigned region
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl AddressResult {
    pub fn new(address: &str, region: &str, reason: &str) -> Self {
        Self {
            address: address.to_string(),
            region: region.to_string(),
            reason: (!reason.is_empty()).then(|| reason.to_string()),
        }
    }
}
