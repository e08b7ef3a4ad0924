//! Backend wire types
//!
//! The backend is an opaque collaborator; its JSON payloads are decoded
//! through explicit schemas here, and anything that does not fit the
//! schema is rejected as a transport fault rather than trusted.

use crate::error::{Error, Result};
use crate::pairs::PairValues;
use serde::{Deserialize, Serialize};

/// Body of `POST /api/validate_configuration`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidateRequest {
    pub remote_url: String,
    pub node_pairs: Vec<PairValues>,
}

/// Display-only log entry forwarded by the backend
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BackendLog {
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub level: Option<String>,
    pub message: String,
}

/// Response of `GET /api/auto_detect_pairs`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DetectResponse {
    pub success: bool,
    #[serde(default)]
    pub suggested_pairs: Vec<PairValues>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub logs: Vec<BackendLog>,
}

/// Response of `POST /api/validate_configuration`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ValidateResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub logs: Vec<BackendLog>,
}

pub fn decode_detect(body: &str) -> Result<DetectResponse> {
    serde_json::from_str(body)
        .map_err(|e| Error::Transport(format!("malformed auto-detect response: {e}")))
}

pub fn decode_validate(body: &str) -> Result<ValidateResponse> {
    serde_json::from_str(body)
        .map_err(|e| Error::Transport(format!("malformed validation response: {e}")))
}
