//! interface that external modules use to interact with the domain.

use super::models::AddressResult;

/// Classifies a comma-separated batch of address tokens, yielding one
/// result per token in input order.
pub trait RegionService: Clone + Send + Sync + 'static {
    fn process(&self, items: &str) -> Vec<AddressResult>;
}
