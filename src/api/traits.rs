//! Trait abstraction for the platform client to enable mocking in tests

use super::client::{ApiClient, ApiError};
use crate::state::{Post, Project, TeamProfile};
use async_trait::async_trait;

/// Trait for platform API operations, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ApiClientTrait: Send + Sync {
    /// Check if the platform API is reachable
    async fn check_connection(&self) -> bool;

    /// Fetch the latest news posts
    async fn fetch_posts(&self) -> Result<Vec<Post>, ApiError>;

    /// Fetch the authenticated participant's team, if any
    async fn fetch_team(&self) -> Result<Option<TeamProfile>, ApiError>;

    /// Request a Slack community invite
    async fn request_slack_invite(&self, email: &str) -> Result<(), ApiError>;

    /// Subscribe an address to the newsletter
    async fn subscribe_newsletter(&self, email: &str) -> Result<(), ApiError>;

    /// Create a project record for a team
    async fn create_project(
        &self,
        team_id: &str,
        name: &str,
        description: &str,
        technologies: &[String],
        student_team: bool,
    ) -> Result<Project, ApiError>;

    /// Update an existing project record
    async fn update_project(
        &self,
        project_id: &str,
        name: &str,
        description: &str,
        technologies: &[String],
        student_team: bool,
    ) -> Result<Project, ApiError>;
}

#[async_trait]
impl ApiClientTrait for ApiClient {
    async fn check_connection(&self) -> bool {
        ApiClient::check_connection(self).await
    }

    async fn fetch_posts(&self) -> Result<Vec<Post>, ApiError> {
        ApiClient::fetch_posts(self).await
    }

    async fn fetch_team(&self) -> Result<Option<TeamProfile>, ApiError> {
        ApiClient::fetch_team(self).await
    }

    async fn request_slack_invite(&self, email: &str) -> Result<(), ApiError> {
        ApiClient::request_slack_invite(self, email).await
    }

    async fn subscribe_newsletter(&self, email: &str) -> Result<(), ApiError> {
        ApiClient::subscribe_newsletter(self, email).await
    }

    async fn create_project(
        &self,
        team_id: &str,
        name: &str,
        description: &str,
        technologies: &[String],
        student_team: bool,
    ) -> Result<Project, ApiError> {
        ApiClient::create_project(self, team_id, name, description, technologies, student_team)
            .await
    }

    async fn update_project(
        &self,
        project_id: &str,
        name: &str,
        description: &str,
        technologies: &[String],
        student_team: bool,
    ) -> Result<Project, ApiError> {
        ApiClient::update_project(self, project_id, name, description, technologies, student_team)
            .await
    }
}
