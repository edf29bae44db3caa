//! Path builders for the versioned water API.
//!
//! Route structure:
//! ```text
//! /api/v1/water/health
//! ```

/// Prefix shared by every endpoint in the water route group.
pub const API_PREFIX: &str = "/api/v1/water";

/// Health check, relative to [`API_PREFIX`].
pub const HEALTH: &str = "/health";

/// Absolute path of a route bound at `relative` inside the group.
pub fn group_path(relative: &str) -> String {
    format!("{API_PREFIX}{relative}")
}

pub fn health_path() -> String {
    group_path(HEALTH)
}
