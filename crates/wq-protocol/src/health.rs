use serde::{Deserialize, Serialize};

/// Name reported in every health document.
pub const SERVICE_NAME: &str = "Water Quality Service";

/// Liveness verdict reported by the health endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ServiceStatus {
    Ok,
}

impl std::fmt::Display for ServiceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServiceStatus::Ok => write!(f, "OK"),
        }
    }
}

/// Body of `GET /api/v1/water/health`.
///
/// Built fresh for every request and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HealthStatus {
    pub status: ServiceStatus,
    pub service: String,
}

impl HealthStatus {
    /// The success document: `{"status":"OK","service":"Water Quality Service"}`.
    pub fn ok() -> Self {
        Self {
            status: ServiceStatus::Ok,
            service: SERVICE_NAME.to_string(),
        }
    }
}
