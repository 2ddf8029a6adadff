//! Service layer that provides the business logic of the domain.

use super::classifier::{is_ipv4, is_ipv6};
use super::lookup::{classify_ipv4, classify_ipv6};
use super::models::AddressResult;
use super::ports::RegionService;

/// Stateless batch classifier over the static region tables.
#[derive(Debug, Clone, Default)]
pub struct GeoService;

impl GeoService {
    pub fn new() -> Self {
        Self
    }
}

impl RegionService for GeoService {
    fn process(&self, items: &str) -> Vec<AddressResult> {
        if items.is_empty() {
            return Vec::new();
        }

        items
            .split(',')
            .map(|item| {
                let item = item.trim();

                let (region, reason) = if item.is_empty() {
                    ("Unknown", "empty")
                } else if is_ipv4(item) {
                    classify_ipv4(item)
                } else if is_ipv6(item) {
                    classify_ipv6(item)
                } else {
                    // neither family; lower-case label kept for wire
                    // compatibility with the original service
                    ("unknown", "invalid format")
                };

                AddressResult::new(item, region, reason)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_empty_input() {
        let service = GeoService::new();
        assert!(service.process("").is_empty());
    }

    #[test]
    fn test_process_batch_preserves_order() {
        let service = GeoService::new();
        let results = service.process("100.217.23.206,101.217.23.206,102.217.23.206");

        assert_eq!(results.len(), 3);
        let regions: Vec<&str> = results.iter().map(|r| r.region.as_str()).collect();
        assert_eq!(regions, ["US", "UK", "China"]);
        assert!(results.iter().all(|r| r.reason.is_none()));
    }

    #[test]
    fn test_process_keeps_empty_tokens() {
        let service = GeoService::new();
        let results = service.process("100.1.1.1,,102.1.1.1");

        assert_eq!(results.len(), 3);
        assert_eq!(results[1].address, "");
        assert_eq!(results[1].region, "Unknown");
        assert_eq!(results[1].reason.as_deref(), Some("empty"));
    }

    #[test]
    fn test_process_trims_tokens() {
        let service = GeoService::new();
        let results = service.process("  172.1.1.1 , 2001:db8::1 ");

        assert_eq!(results[0].address, "172.1.1.1");
        assert_eq!(results[0].region, "Private Network");
        assert_eq!(results[0].reason.as_deref(), Some("RFC1918 private range"));
        assert_eq!(results[1].address, "2001:db8::1");
        assert_eq!(results[1].region, "Global Unicast");
    }

    #[test]
    fn test_process_invalid_format() {
        let service = GeoService::new();
        let results = service.process("notanip");

        assert_eq!(results.len(), 1);
        // lower-case sentinel on this branch only
        assert_eq!(results[0].region, "unknown");
        assert_eq!(results[0].reason.as_deref(), Some("invalid format"));
    }

    #[test]
    fn test_process_mixed_families() {
        let service = GeoService::new();
        let results = service.process("127.0.0.1,fe80::1:2:3,999.1.1.1,notanip");

        assert_eq!(results.len(), 4);
        assert_eq!(results[0].region, "Localhost");
        assert_eq!(results[1].region, "Link Local");
        assert_eq!(results[2].region, "Unknown");
        assert_eq!(results[2].reason.as_deref(), Some("no country mapping"));
        assert_eq!(results[3].region, "unknown");
    }

    #[test]
    fn test_process_is_deterministic() {
        let service = GeoService::new();
        let input = "100.1.1.1,::1,junk,,2800:abc::1";
        assert_eq!(service.process(input), service.process(input));
    }
}
