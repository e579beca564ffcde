//! API request and response models

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Generated acronym response
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct AcronymResponse {
    /// Random uppercase acronym, 5 to 8 letters
    pub acronym: String,
}

/// Definition request for a single acronym letter
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct DefinitionRequest {
    /// The letter to define
    #[serde(default)]
    pub letter: String,

    /// One of "manual", "corporate", "creed"; anything else behaves as manual
    #[serde(default = "default_mode")]
    pub mode: String,
}

fn default_mode() -> String {
    "manual".to_string()
}

/// Definition response
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct DefinitionResponse {
    /// The produced definition; empty string in manual mode
    pub definition: String,
}

/// Health check response
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
}
