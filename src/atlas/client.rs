//! Atlas API client with digest authentication.
//!
//! # Responsibilities
//! - Build an HTTP client bound to the configured base URL
//! - Stamp the version-stamped user agent on every call
//! - Perform the digest handshake for each operation
//! - Decode project documents and Atlas error documents

use std::time::Duration;

use diqwest::WithDigestAuth;
use url::Url;

use crate::atlas::types::{
    AtlasApiError, AtlasError, AtlasProject, AtlasResult, CreateProjectBody, ProjectRequest,
};
use crate::config::AtlasConfig;

/// Tool name stamped into the user agent.
const TOOL_NAME: &str = "atlas-provider";

/// Versioned administration API prefix.
const API_PREFIX: &str = "api/atlas/v1.0";

/// User agent in the `<tool>/<version> (<os>;<arch>)` form.
pub fn user_agent() -> String {
    format!(
        "{}/{} ({};{})",
        TOOL_NAME,
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS,
        std::env::consts::ARCH
    )
}

/// Atlas API client bound to one set of digest credentials.
///
/// Built fresh per request and used for exactly one call.
pub struct AtlasClient {
    http: reqwest::Client,
    base: Url,
    public_key: String,
    private_key: String,
}

impl AtlasClient {
    /// Build a client from configuration.
    pub fn new(config: &AtlasConfig, timeout: Duration) -> AtlasResult<Self> {
        let base = Url::parse(&config.base_url).map_err(|e| {
            AtlasError::Setup(format!("Invalid base URL '{}': {}", config.base_url, e))
        })?;

        let http = reqwest::Client::builder()
            .user_agent(user_agent())
            .timeout(timeout)
            .build()
            .map_err(|e| AtlasError::Setup(e.to_string()))?;

        Ok(Self {
            http,
            base,
            public_key: config.public_key.clone(),
            private_key: config.private_key.clone(),
        })
    }

    /// Create a project with default alert settings and no designated owner.
    pub async fn create_project(&self, request: &ProjectRequest) -> AtlasResult<AtlasProject> {
        let url = self.endpoint(&["groups"])?;
        let body = CreateProjectBody {
            name: request.name.clone(),
            org_id: request.org_id.clone(),
            with_default_alerts_settings: true,
        };

        let response = self
            .http
            .post(url)
            .json(&body)
            .send_with_digest_auth(&self.public_key, &self.private_key)
            .await
            .map_err(|e| AtlasError::Transport(e.to_string()))?;

        decode_project(response).await
    }

    /// Fetch one project by id.
    pub async fn get_project(&self, id: &str) -> AtlasResult<AtlasProject> {
        let url = self.endpoint(&["groups", id])?;

        let response = self
            .http
            .get(url)
            .send_with_digest_auth(&self.public_key, &self.private_key)
            .await
            .map_err(|e| AtlasError::Transport(e.to_string()))?;

        decode_project(response).await
    }

    /// Delete a project by id.
    pub async fn delete_project(&self, id: &str) -> AtlasResult<()> {
        let url = self.endpoint(&["groups", id])?;

        let response = self
            .http
            .delete(url)
            .send_with_digest_auth(&self.public_key, &self.private_key)
            .await
            .map_err(|e| AtlasError::Transport(e.to_string()))?;

        check_status(response).await?;
        Ok(())
    }

    /// Build a full endpoint URL under the API prefix.
    fn endpoint(&self, segments: &[&str]) -> AtlasResult<Url> {
        let mut url = self.base.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| AtlasError::Setup("Base URL cannot be a base".to_string()))?;
            path.pop_if_empty();
            for segment in API_PREFIX.split('/') {
                path.push(segment);
            }
            for segment in segments {
                path.push(segment);
            }
        }
        Ok(url)
    }
}

impl std::fmt::Debug for AtlasClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AtlasClient")
            .field("base", &self.base.as_str())
            .field("public_key", &self.public_key)
            .finish()
    }
}

/// Decode a project document after checking the response status.
async fn decode_project(response: reqwest::Response) -> AtlasResult<AtlasProject> {
    let response = check_status(response).await?;
    response
        .json::<AtlasProject>()
        .await
        .map_err(|e| AtlasError::Decode(e.to_string()))
}

/// Pass 2xx responses through; decode everything else as an Atlas error
/// document.
async fn check_status(response: reqwest::Response) -> AtlasResult<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.bytes().await.unwrap_or_default();
    let doc: AtlasApiError = serde_json::from_slice(&body).unwrap_or_default();
    let detail = if doc.detail.is_empty() {
        String::from_utf8_lossy(&body).trim().to_string()
    } else {
        doc.detail
    };

    Err(AtlasError::Api {
        status: status.as_u16(),
        error_code: doc.error_code,
        detail,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> AtlasConfig {
        AtlasConfig {
            base_url: "https://cloud.mongodb.com".to_string(),
            public_key: "pubkey".to_string(),
            private_key: "pvtkey".to_string(),
        }
    }

    #[test]
    fn test_user_agent_format() {
        let agent = user_agent();
        assert!(agent.starts_with("atlas-provider/"));
        assert!(agent.contains('('));
        assert!(agent.contains(';'));
        assert!(agent.ends_with(')'));
    }

    #[test]
    fn test_endpoint_paths() {
        let client = AtlasClient::new(&test_config(), Duration::from_secs(5)).unwrap();

        let url = client.endpoint(&["groups"]).unwrap();
        assert_eq!(
            url.as_str(),
            "https://cloud.mongodb.com/api/atlas/v1.0/groups"
        );

        let url = client.endpoint(&["groups", "5f1"]).unwrap();
        assert_eq!(
            url.as_str(),
            "https://cloud.mongodb.com/api/atlas/v1.0/groups/5f1"
        );
    }

    #[test]
    fn test_invalid_base_url_is_a_setup_error() {
        let config = AtlasConfig {
            base_url: "not a url".to_string(),
            ..test_config()
        };
        let result = AtlasClient::new(&config, Duration::from_secs(5));
        assert!(matches!(result, Err(AtlasError::Setup(_))));
    }

    #[test]
    fn test_debug_hides_private_key() {
        let client = AtlasClient::new(&test_config(), Duration::from_secs(5)).unwrap();
        let rendered = format!("{:?}", client);
        assert!(!rendered.contains("pvtkey"));
    }
}
