//! Database module: connection bootstrap and the client registry.
//!
//! Layout:
//! - `connection.rs`: URI construction, client build and liveness check
//! - `registry.rs`: holder for the initialized client and its accessors

pub mod connection;
pub mod registry;

pub use connection::init_db;
pub use registry::{DEFAULT_DATABASE, DbRegistry};
