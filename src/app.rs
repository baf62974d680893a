//! Application state and core logic

use crate::api::{ApiClient, ApiClientTrait};
use crate::config::TuiConfig;
use crate::state::{AppState, Form, InviteForm, Project, ProjectForm, SubmitBlocked, View};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Client for the event platform API
    pub api: ApiClient,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub async fn new() -> Result<Self> {
        let config = TuiConfig::load().unwrap_or_default();
        let api = ApiClient::new(&config)?;
        let mut state = AppState::default();

        // Check platform connection
        state.api_connected = api.check_connection().await;

        // Load landing content and the participant's team if reachable
        if state.api_connected {
            match api.fetch_posts().await {
                Ok(posts) => state.posts = posts,
                Err(e) => tracing::warn!("failed to fetch posts: {e}"),
            }
            match api.fetch_team().await {
                Ok(team) => state.load_team(team),
                Err(e) => tracing::warn!("failed to fetch team: {e}"),
            }
        }

        Ok(Self {
            state,
            api,
            quit: false,
        })
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        // Any keypress invalidates a transient status message
        self.state.status_message = None;

        match self.state.current_view {
            View::Landing => self.handle_landing_key(key),
            View::Community => self.handle_community_key(key).await,
            View::Project => self.handle_project_key(key).await,
        }
        Ok(())
    }

    /// Handle keys on the landing view
    fn handle_landing_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Char('j') | KeyCode::Down => {
                self.state.landing_scroll = self.state.landing_scroll.saturating_add(1);
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.state.landing_scroll = self.state.landing_scroll.saturating_sub(1);
            }
            KeyCode::Char('g') => self.state.landing_scroll = 0,
            KeyCode::Char('c') | KeyCode::Char('2') => self.switch_view(View::Community),
            KeyCode::Char('p') | KeyCode::Char('3') => self.switch_view(View::Project),
            KeyCode::Tab => self.switch_view(View::Community),
            _ => {}
        }
    }

    /// Handle keys on the community (invite/newsletter) view
    async fn handle_community_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.switch_view(View::Landing),
            KeyCode::Tab => self.state.invite_form.next_field(),
            KeyCode::BackTab => self.state.invite_form.prev_field(),
            KeyCode::Left if self.state.invite_form.is_buttons_row_active() => {
                self.state.invite_form.prev_button();
            }
            KeyCode::Right if self.state.invite_form.is_buttons_row_active() => {
                self.state.invite_form.next_button();
            }
            KeyCode::Enter => {
                if self.state.invite_form.selected_button == 0 {
                    self.submit_invite().await;
                } else {
                    self.submit_newsletter().await;
                }
            }
            KeyCode::Char(c) if !self.state.invite_form.is_buttons_row_active() => {
                self.state.invite_form.input_char(c);
            }
            KeyCode::Backspace if !self.state.invite_form.is_buttons_row_active() => {
                self.state.invite_form.backspace();
            }
            _ => {}
        }
    }

    /// Handle keys on the project form view
    async fn handle_project_key(&mut self, key: KeyEvent) {
        // Save shortcut works from any field
        if key.code == KeyCode::Char('s')
            && (key.modifiers.contains(KeyModifiers::CONTROL)
                || key.modifiers.contains(crate::platform::SAVE_MODIFIER))
        {
            self.save_project().await;
            return;
        }

        let on_technologies = self.state.project_form.active_field_index == 2;
        let on_checkbox = self.state.project_form.active_field_index == 3;

        match key.code {
            KeyCode::Esc => self.switch_view(View::Landing),
            KeyCode::Tab => self.state.project_form.next_field(),
            KeyCode::BackTab => self.state.project_form.prev_field(),
            KeyCode::Up if on_technologies => self.state.project_form.move_tech_cursor(-1),
            KeyCode::Down if on_technologies => self.state.project_form.move_tech_cursor(1),
            KeyCode::Char(' ') if on_technologies || on_checkbox => {
                self.state.project_form.toggle_active();
            }
            KeyCode::Enter => {
                if self.state.project_form.is_buttons_row_active() {
                    self.save_project().await;
                } else if self.state.project_form.active_field_index == 1 {
                    // Multiline description
                    self.state.project_form.input_char('\n');
                }
            }
            KeyCode::Char(c) if !self.state.project_form.is_buttons_row_active() => {
                self.state.project_form.input_char(c);
            }
            KeyCode::Backspace if !self.state.project_form.is_buttons_row_active() => {
                self.state.project_form.backspace();
            }
            _ => {}
        }
    }

    fn switch_view(&mut self, view: View) {
        self.state.current_view = view;
    }

    /// Run the Slack-invite submission against the platform
    async fn submit_invite(&mut self) {
        let _ = submit_slack_invite(&self.api, &mut self.state.invite_form).await;
    }

    /// Run the newsletter subscription against the platform
    async fn submit_newsletter(&mut self) {
        let _ = submit_newsletter(&self.api, &mut self.state.invite_form).await;
    }

    /// Validate and save the project, creating or updating as appropriate
    async fn save_project(&mut self) {
        if !self.state.project_form.is_update() && self.state.project_form.team_id.is_none() {
            self.push_error("You need a team before creating a project");
            return;
        }

        match submit_project(&self.api, &mut self.state.project_form).await {
            Ok(Some(project)) => {
                self.state.status_message = Some("Project saved!".to_string());
                self.state.adopt_project(project);
            }
            // Failure feedback is shown on the submit trigger itself;
            // blocked submissions surface as inline field errors.
            Ok(None) | Err(_) => {}
        }
    }
}

/// Validate and run the Slack-invite submission.
///
/// Invokes the platform action exactly once per accepted attempt; a
/// blocked attempt (validation errors, already in flight) invokes
/// nothing and reports why.
pub(crate) async fn submit_slack_invite(
    api: &dyn ApiClientTrait,
    form: &mut InviteForm,
) -> Result<(), SubmitBlocked> {
    let validation = form.validate();
    let ticket = match form.invite_submission.begin(&validation) {
        Ok(ticket) => ticket,
        Err(blocked) => {
            if blocked == SubmitBlocked::ValidationFailed {
                tracing::debug!("submission blocked: {} validation error(s)", validation.len());
                form.show_errors = true;
            }
            return Err(blocked);
        }
    };

    let email = form.email.as_text().to_string();
    let outcome = api.request_slack_invite(&email).await;
    if let Err(e) = &outcome {
        tracing::warn!("slack invite failed: {e}");
    }
    form.invite_submission.complete(
        ticket,
        outcome.map_err(|e| e.rejection_reason().map(str::to_string)),
    );
    Ok(())
}

/// Validate and run the newsletter subscription
pub(crate) async fn submit_newsletter(
    api: &dyn ApiClientTrait,
    form: &mut InviteForm,
) -> Result<(), SubmitBlocked> {
    let validation = form.validate();
    let ticket = match form.subscribe_submission.begin(&validation) {
        Ok(ticket) => ticket,
        Err(blocked) => {
            if blocked == SubmitBlocked::ValidationFailed {
                tracing::debug!("submission blocked: {} validation error(s)", validation.len());
                form.show_errors = true;
            }
            return Err(blocked);
        }
    };

    let email = form.email.as_text().to_string();
    let outcome = api.subscribe_newsletter(&email).await;
    if let Err(e) = &outcome {
        tracing::warn!("newsletter subscription failed: {e}");
    }
    form.subscribe_submission.complete(
        ticket,
        outcome.map_err(|e| e.rejection_reason().map(str::to_string)),
    );
    Ok(())
}

/// Validate and save the project record.
///
/// Returns the saved project on success; `Ok(None)` when the platform
/// refused the submission (the controller keeps the failure feedback).
pub(crate) async fn submit_project(
    api: &dyn ApiClientTrait,
    form: &mut ProjectForm,
) -> Result<Option<Project>, SubmitBlocked> {
    let validation = form.validate();
    let ticket = match form.submission.begin(&validation) {
        Ok(ticket) => ticket,
        Err(blocked) => {
            if blocked == SubmitBlocked::ValidationFailed {
                tracing::debug!("submission blocked: {} validation error(s)", validation.len());
                form.show_errors = true;
            }
            return Err(blocked);
        }
    };

    let name = form.name.as_text().to_string();
    let description = form.description.as_text().to_string();
    let technologies = form.technologies.as_selections().to_vec();
    let student_team = form.student_team.as_checkbox();

    let result = match form.project_id.clone() {
        Some(project_id) => {
            api.update_project(&project_id, &name, &description, &technologies, student_team)
                .await
        }
        None => {
            let team_id = form.team_id.clone().unwrap_or_default();
            api.create_project(&team_id, &name, &description, &technologies, student_team)
                .await
        }
    };

    match result {
        Ok(project) => {
            form.submission.complete(ticket, Ok(()));
            // Later saves update the record that was just created
            form.project_id = Some(project.id.clone());
            form.team_id = Some(project.team_id.clone());
            Ok(Some(project))
        }
        Err(e) => {
            tracing::warn!("project save failed: {e}");
            form.submission
                .complete(ticket, Err(e.rejection_reason().map(str::to_string)));
            Ok(None)
        }
    }
}
