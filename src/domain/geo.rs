//! IP address region classification.
//!
//! The lookup is deliberately shallow: IPv4 addresses are bucketed by their
//! first octet and IPv6 addresses by their leading group, against static
//! tables. No geolocation database is consulted.

pub mod classifier;
pub mod lookup;
pub mod models;
pub mod ports;
pub mod service;

pub use models::AddressResult;
pub use ports::RegionService;
pub use service::GeoService;
