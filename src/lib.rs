// Library root — exposes internals for integration tests and future crate consumers.
// The binary entry point is src/main.rs.

pub mod client;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod server;
