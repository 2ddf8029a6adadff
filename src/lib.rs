pub mod config;
pub mod domain;
pub mod server;
pub mod telemetry;
