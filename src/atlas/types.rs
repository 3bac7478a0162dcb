//! Atlas API types and error definitions.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Inbound create payload.
///
/// Accepts the legacy `Name` / `OrgID` keys as well as the camel-case
/// forms. Absent fields default to empty strings; the Atlas API is the
/// validator of record for their contents.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ProjectRequest {
    #[serde(alias = "Name")]
    pub name: String,

    #[serde(rename = "orgId", alias = "OrgID", alias = "organizationId")]
    pub org_id: String,
}

/// A project document as returned by the Atlas API.
///
/// Passed through to the caller; fields the provider does not understand
/// are dropped rather than rejected.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct AtlasProject {
    pub id: String,
    pub name: String,
    pub org_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_count: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
}

/// Body of the create-project call.
///
/// Alert settings are always defaulted on and no project owner is
/// designated.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateProjectBody {
    pub name: String,
    pub org_id: String,
    pub with_default_alerts_settings: bool,
}

/// Error document returned by the Atlas API on non-2xx responses.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct AtlasApiError {
    pub detail: String,
    pub error_code: String,
    pub error: u16,
}

/// Errors that can occur when talking to the Atlas API.
#[derive(Debug, Error)]
pub enum AtlasError {
    /// Client construction failed (bad base URL, TLS setup).
    #[error("Client setup error: {0}")]
    Setup(String),

    /// Transport-level failure (connect, timeout, digest handshake).
    #[error("Transport error: {0}")]
    Transport(String),

    /// The API rejected the call.
    #[error("Atlas API error {status} ({error_code}): {detail}")]
    Api {
        status: u16,
        error_code: String,
        detail: String,
    },

    /// A 2xx response body could not be decoded.
    #[error("Decode error: {0}")]
    Decode(String),
}

/// Result type for Atlas operations.
pub type AtlasResult<T> = Result<T, AtlasError>;
