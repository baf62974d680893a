//! HTTP client for the Make or Break event platform
//!
//! Thin JSON wrapper over the platform API: Slack community invites,
//! newsletter subscriptions, project records, and news posts.

use crate::config::TuiConfig;
use crate::state::{Post, Project, TeamProfile};
use anyhow::Result;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::json;
use std::collections::HashMap;
use std::time::Duration;
use thiserror::Error;

/// Default platform API address
const DEFAULT_BASE_URL: &str = "https://api.makeorbreak.io";

/// Default mailing-list subscription endpoint.
/// The newsletter lives on the mailing-list provider, not the platform API.
const DEFAULT_NEWSLETTER_URL: &str =
    "https://makeorbreak.us8.list-manage.com/subscribe/post-json";

/// Honeypot field the mailing-list provider expects to be empty
const NEWSLETTER_HONEYPOT_FIELD: &str = "b_1b6e195ef5bf93f16b5c4c5a4_c59d1784a4";

/// Request timeout for all platform calls
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors from platform API calls
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure (connection, timeout, body decode)
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The platform refused the submission and said why
    #[error("{reason}")]
    Rejected { reason: String },
    /// Response status the client has no mapping for
    #[error("unexpected status {0}")]
    Status(StatusCode),
}

impl ApiError {
    /// The platform-supplied rejection reason, when there is one
    pub fn rejection_reason(&self) -> Option<&str> {
        match self {
            ApiError::Rejected { reason } => Some(reason),
            _ => None,
        }
    }
}

/// Error payload shape the platform returns on rejected submissions
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
    errors: Option<HashMap<String, String>>,
}

/// Client for the event platform API
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    newsletter_url: String,
}

impl ApiClient {
    /// Create a new client.
    /// The API address resolves from `MOB_API_URL`, then the config file,
    /// then the default.
    pub fn new(config: &TuiConfig) -> Result<Self> {
        let base_url = std::env::var("MOB_API_URL")
            .ok()
            .or_else(|| config.api_address.clone())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let newsletter_url = config
            .newsletter_address
            .clone()
            .unwrap_or_else(|| DEFAULT_NEWSLETTER_URL.to_string());

        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            base_url,
            newsletter_url,
        })
    }

    /// Check if the platform API is reachable
    pub async fn check_connection(&self) -> bool {
        match self.http.get(format!("{}/", self.base_url)).send().await {
            Ok(response) => !response.status().is_server_error(),
            Err(e) => {
                tracing::debug!("API unreachable: {e}");
                false
            }
        }
    }

    /// Fetch the latest news posts for the landing view
    pub async fn fetch_posts(&self) -> Result<Vec<Post>, ApiError> {
        let response = self
            .http
            .get(format!("{}/posts", self.base_url))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }

        Ok(response.json::<Vec<Post>>().await?)
    }

    /// Fetch the authenticated participant's team, if any
    pub async fn fetch_team(&self) -> Result<Option<TeamProfile>, ApiError> {
        let response = self
            .http
            .get(format!("{}/me/team", self.base_url))
            .send()
            .await?;

        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => Ok(Some(response.json::<TeamProfile>().await?)),
            status => Err(ApiError::Status(status)),
        }
    }

    /// Request a Slack community invite for an email address.
    /// The platform answers conflict for an address that was already
    /// invited; that reason is surfaced as a rejection.
    pub async fn request_slack_invite(&self, email: &str) -> Result<(), ApiError> {
        let response = self
            .http
            .post(format!("{}/slack/invites", self.base_url))
            .json(&json!({ "email": email }))
            .send()
            .await?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::rejection(response).await)
        }
    }

    /// Subscribe an email address to the event newsletter.
    /// This posts form-encoded data to the mailing-list provider, honeypot
    /// field included, the same way the event website's embedded form does.
    pub async fn subscribe_newsletter(&self, email: &str) -> Result<(), ApiError> {
        let response = self
            .http
            .post(&self.newsletter_url)
            .form(&[("EMAIL", email), (NEWSLETTER_HONEYPOT_FIELD, "")])
            .send()
            .await?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::rejection(response).await)
        }
    }

    /// Create a project record for a team
    pub async fn create_project(
        &self,
        team_id: &str,
        name: &str,
        description: &str,
        technologies: &[String],
        student_team: bool,
    ) -> Result<Project, ApiError> {
        let response = self
            .http
            .post(format!("{}/projects", self.base_url))
            .json(&json!({
                "project": {
                    "team_id": team_id,
                    "name": name,
                    "description": description,
                    "technologies": technologies,
                    "student_team": student_team,
                }
            }))
            .send()
            .await?;

        if response.status().is_success() {
            Ok(response.json::<Project>().await?)
        } else {
            Err(Self::rejection(response).await)
        }
    }

    /// Update an existing project record
    pub async fn update_project(
        &self,
        project_id: &str,
        name: &str,
        description: &str,
        technologies: &[String],
        student_team: bool,
    ) -> Result<Project, ApiError> {
        let response = self
            .http
            .put(format!("{}/projects/{}", self.base_url, project_id))
            .json(&json!({
                "project": {
                    "name": name,
                    "description": description,
                    "technologies": technologies,
                    "student_team": student_team,
                }
            }))
            .send()
            .await?;

        if response.status().is_success() {
            Ok(response.json::<Project>().await?)
        } else {
            Err(Self::rejection(response).await)
        }
    }

    /// Turn an error response into the most specific ApiError available
    async fn rejection(response: reqwest::Response) -> ApiError {
        let status = response.status();
        match response.json::<ErrorBody>().await {
            Ok(body) => {
                let reason = body
                    .errors
                    .and_then(|errors| errors.into_values().next())
                    .or(body.error);
                match reason {
                    Some(reason) => ApiError::Rejected { reason },
                    None => ApiError::Status(status),
                }
            }
            Err(_) => ApiError::Status(status),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_uses_config_address() {
        let config = TuiConfig {
            api_address: Some("http://localhost:4000".to_string()),
            ..Default::default()
        };
        let client = ApiClient::new(&config).unwrap();
        assert_eq!(client.base_url, "http://localhost:4000");
        assert_eq!(client.newsletter_url, DEFAULT_NEWSLETTER_URL);
    }

    #[test]
    fn test_client_defaults_without_config() {
        let config = TuiConfig::default();
        let client = ApiClient::new(&config).unwrap();
        assert_eq!(client.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_check_connection_false_when_unreachable() {
        let config = TuiConfig {
            api_address: Some("http://127.0.0.1:1".to_string()),
            ..Default::default()
        };
        let client = ApiClient::new(&config).unwrap();
        assert!(!tokio_test::block_on(client.check_connection()));
    }

    #[test]
    fn test_rejection_reason_accessor() {
        let rejected = ApiError::Rejected {
            reason: "already invited".to_string(),
        };
        assert_eq!(rejected.rejection_reason(), Some("already invited"));
        assert!(ApiError::Status(StatusCode::IM_A_TEAPOT)
            .rejection_reason()
            .is_none());
    }

    #[test]
    fn test_error_display() {
        let rejected = ApiError::Rejected {
            reason: "already invited".to_string(),
        };
        assert_eq!(rejected.to_string(), "already invited");
        assert_eq!(
            ApiError::Status(StatusCode::BAD_GATEWAY).to_string(),
            "unexpected status 502 Bad Gateway"
        );
    }

    #[test]
    fn test_error_body_prefers_field_errors() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"errors": {"email": "already invited"}}"#).unwrap();
        let reason = body
            .errors
            .and_then(|errors| errors.into_values().next())
            .or(body.error);
        assert_eq!(reason.as_deref(), Some("already invited"));
    }
}
