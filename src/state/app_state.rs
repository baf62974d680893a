//! Application state definitions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use super::forms::{InviteForm, ProjectForm};

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Event information and latest news
    #[default]
    Landing,
    /// Slack invite / newsletter signup
    Community,
    /// Editable project form
    Project,
}

/// A news post shown on the landing view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    /// Empty when the post has no preview image
    #[serde(default)]
    pub preview_image_id: String,
    pub unique_slug: String,
    pub published_at: DateTime<Utc>,
}

/// A team's project record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub team_id: String,
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub student_team: bool,
}

/// The participant's team, with its project when one exists
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamProfile {
    pub id: String,
    pub name: String,
    pub project: Option<Project>,
}

/// Main application state
pub struct AppState {
    // Navigation
    pub current_view: View,

    // Data
    pub posts: Vec<Post>,
    pub team: Option<TeamProfile>,
    pub api_connected: bool,

    // Forms
    pub invite_form: InviteForm,
    pub project_form: ProjectForm,

    // UI state
    pub landing_scroll: usize,
    pub status_message: Option<String>,
    errors: VecDeque<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            current_view: View::default(),
            posts: Vec::new(),
            team: None,
            api_connected: false,
            invite_form: InviteForm::new(),
            project_form: ProjectForm::new(None),
            landing_scroll: 0,
            status_message: None,
            errors: VecDeque::new(),
        }
    }
}

impl AppState {
    /// Adopt the fetched team and seed the project form: update mode when
    /// the team already has a project, create mode otherwise.
    pub fn load_team(&mut self, team: Option<TeamProfile>) {
        self.project_form = match &team {
            Some(profile) => match &profile.project {
                Some(project) => ProjectForm::from_project(project),
                None => ProjectForm::new(Some(profile.id.clone())),
            },
            None => ProjectForm::new(None),
        };
        self.team = team;
    }

    /// Record a saved project on the team
    pub fn adopt_project(&mut self, project: Project) {
        if let Some(team) = &mut self.team {
            team.project = Some(project);
        }
    }

    /// Push an error message for modal display
    pub fn push_error(&mut self, message: String) {
        self.errors.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn current_error(&self) -> Option<&str> {
        self.errors.front().map(String::as_str)
    }

    /// Dismiss the currently displayed error
    pub fn dismiss_error(&mut self) {
        self.errors.pop_front();
    }
}
