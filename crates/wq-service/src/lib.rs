//! Water Quality Service — library crate for the versioned HTTP API.
//!
//! The binary (`main.rs`) and `wq-e2e-tests` both build on these modules:
//! `ApiConfig` for startup configuration, `routes::build_router` for the
//! route group and middleware, and `server` for binding and serving.

pub mod config;
pub mod error;
pub mod routes;
pub mod server;
