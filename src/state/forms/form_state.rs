//! Form state management and form structs

use super::field::{FieldValues, FormField};
use super::submission::{Submission, SubmissionState};
use super::validation::{Rule, ValidationResult, Validator};
use crate::state::Project;

/// Technology catalogue offered by the project form's multi-select
pub const TECHNOLOGIES: &[&str] = &[
    "android", "c", "c++", "c#", "clojure", "elixir", "elm", "go", "haskell", "java", "javascript",
    "kotlin", "node", "php", "python", "react", "ruby", "rust", "scala", "swift", "vue",
];

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> &mut FormField;
    fn get_field(&self, index: usize) -> Option<&FormField>;

    /// Snapshot of the current values, keyed by field name
    fn values(&self) -> FieldValues {
        let mut values = FieldValues::new();
        for index in 0..self.field_count() {
            if let Some(field) = self.get_field(index) {
                values.insert(field.name.clone(), field.value.clone());
            }
        }
        values
    }
}

// Slack invite / newsletter form (community section)
//
// One EMAIL field shared by two triggers, each with its own submission
// lifecycle: the Slack invite and the newsletter subscription.
#[derive(Debug, Clone)]
pub struct InviteForm {
    pub email: FormField,
    pub active_field_index: usize,
    /// Which trigger is selected on the buttons row (0=Invite, 1=Subscribe)
    pub selected_button: usize,
    /// Show inline errors only after the first blocked submit
    pub show_errors: bool,
    pub invite_submission: Submission,
    pub subscribe_submission: Submission,
    validator: Validator,
}

impl InviteForm {
    pub fn new() -> Self {
        Self {
            email: FormField::text("EMAIL", "Email address", false),
            active_field_index: 0,
            selected_button: 0,
            show_errors: false,
            invite_submission: Submission::new()
                .with_success_label("Invite sent!")
                .with_failure_label("Already invited"),
            subscribe_submission: Submission::new()
                .with_success_label("Subscribed!")
                .with_failure_label("Subscription failed"),
            validator: Validator::new(vec![Rule::email("EMAIL", "Email")]),
        }
    }

    /// Recompute validation from the current field values
    pub fn validate(&self) -> ValidationResult {
        self.validator.validate(&self.values())
    }

    /// Returns true if the buttons row is currently active
    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field_index == 1
    }

    pub fn next_button(&mut self) {
        self.selected_button = (self.selected_button + 1) % 2;
    }

    pub fn prev_button(&mut self) {
        if self.selected_button == 0 {
            self.selected_button = 1;
        } else {
            self.selected_button -= 1;
        }
    }

    /// Route a typed character into the email field.
    /// Editing again after a completed submission returns it to Idle.
    pub fn input_char(&mut self, c: char) {
        self.email.push_char(c);
        self.reset_completed();
    }

    pub fn backspace(&mut self) {
        self.email.pop_char();
        self.reset_completed();
    }

    fn reset_completed(&mut self) {
        for submission in [&mut self.invite_submission, &mut self.subscribe_submission] {
            if matches!(
                submission.state(),
                SubmissionState::Succeeded | SubmissionState::Failed
            ) {
                submission.reset();
            }
        }
    }
}

impl Default for InviteForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for InviteForm {
    fn field_count(&self) -> usize {
        2 // email, buttons
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(1);
    }
    fn get_active_field_mut(&mut self) -> &mut FormField {
        &mut self.email
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.email),
            // Index 1 is the buttons row, no FormField for it
            _ => None,
        }
    }
}

// Editable project form (create and update)
#[derive(Debug, Clone)]
pub struct ProjectForm {
    pub name: FormField,
    pub description: FormField,
    pub technologies: FormField,
    pub student_team: FormField,
    pub active_field_index: usize,
    /// Highlighted option in the technology catalogue
    pub tech_cursor: usize,
    /// Show inline errors only after the first blocked submit
    pub show_errors: bool,
    pub submission: Submission,
    /// Set when editing an existing project; drives update vs create
    pub project_id: Option<String>,
    pub team_id: Option<String>,
    validator: Validator,
}

impl ProjectForm {
    pub fn new(team_id: Option<String>) -> Self {
        Self {
            name: FormField::text("name", "Name", false),
            description: FormField::text("description", "Description", true),
            technologies: FormField::multi_select("technologies", "Technologies", vec![]),
            student_team: FormField::checkbox("student_team", "Student Team", false),
            active_field_index: 0,
            tech_cursor: 0,
            show_errors: false,
            submission: Submission::new().with_success_label("Project saved!"),
            project_id: None,
            team_id,
            validator: Self::validator(),
        }
    }

    /// Seed the form from an existing project for update mode
    pub fn from_project(project: &Project) -> Self {
        Self {
            name: FormField::text_with_value("name", "Name", project.name.clone(), false),
            description: FormField::text_with_value(
                "description",
                "Description",
                project.description.clone(),
                true,
            ),
            technologies: FormField::multi_select(
                "technologies",
                "Technologies",
                project.technologies.clone(),
            ),
            student_team: FormField::checkbox("student_team", "Student Team", project.student_team),
            active_field_index: 0,
            tech_cursor: 0,
            show_errors: false,
            submission: Submission::new().with_success_label("Project saved!"),
            project_id: Some(project.id.clone()),
            team_id: Some(project.team_id.clone()),
            validator: Self::validator(),
        }
    }

    fn validator() -> Validator {
        Validator::new(vec![
            Rule::presence("name", "Project name"),
            Rule::presence("description", "Description"),
            Rule::presence("technologies", "Technologies"),
        ])
    }

    /// Recompute validation from the current field values
    pub fn validate(&self) -> ValidationResult {
        self.validator.validate(&self.values())
    }

    pub fn is_update(&self) -> bool {
        self.project_id.is_some()
    }

    /// Label for the submit trigger in its idle state
    pub fn submit_label(&self) -> &'static str {
        if self.is_update() {
            "Update Project"
        } else {
            "Create Project"
        }
    }

    /// Returns true if the buttons row is currently active
    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field_index == 4
    }

    /// Route a typed character into the active field.
    /// Editing again after a completed submission returns it to Idle.
    pub fn input_char(&mut self, c: char) {
        self.get_active_field_mut().push_char(c);
        self.reset_completed();
    }

    pub fn backspace(&mut self) {
        self.get_active_field_mut().pop_char();
        self.reset_completed();
    }

    /// Toggle the active field: the highlighted technology on the
    /// multi-select, or the checkbox.
    pub fn toggle_active(&mut self) {
        let option = TECHNOLOGIES
            .get(self.tech_cursor)
            .copied()
            .unwrap_or_default()
            .to_string();
        self.get_active_field_mut().toggle(&option);
        self.reset_completed();
    }

    /// Move the technology highlight up or down
    pub fn move_tech_cursor(&mut self, delta: isize) {
        let count = TECHNOLOGIES.len() as isize;
        let next = (self.tech_cursor as isize + delta).rem_euclid(count);
        self.tech_cursor = next as usize;
    }

    fn reset_completed(&mut self) {
        if matches!(
            self.submission.state(),
            SubmissionState::Succeeded | SubmissionState::Failed
        ) {
            self.submission.reset();
        }
    }
}

impl Form for ProjectForm {
    fn field_count(&self) -> usize {
        5 // name, description, technologies, student_team, buttons
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(4);
    }
    fn get_active_field_mut(&mut self) -> &mut FormField {
        match self.active_field_index {
            0 => &mut self.name,
            1 => &mut self.description,
            2 => &mut self.technologies,
            // For the buttons row (index 4), the checkbox is a harmless dummy
            _ => &mut self.student_team,
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.name),
            1 => Some(&self.description),
            2 => Some(&self.technologies),
            3 => Some(&self.student_team),
            // Index 4 is the buttons row, no FormField for it
            _ => None,
        }
    }
}
