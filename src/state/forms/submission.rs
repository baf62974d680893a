//! Submission state machine for forms

use super::validation::ValidationResult;
use thiserror::Error;

/// Lifecycle stage of a form's submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    InFlight,
    Succeeded,
    Failed,
}

/// Why a submit trigger was refused without starting a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitBlocked {
    #[error("submission blocked: validation failed")]
    ValidationFailed,
    #[error("submission already in progress")]
    AlreadyInFlight,
}

/// Proof that a submission was started.
///
/// The external action is invoked exactly once per ticket; the outcome is
/// reported back through [`Submission::complete`]. A ticket issued before a
/// reset (or before a newer submission) is stale and its completion is
/// discarded, so a late response can never touch a form that moved on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitTicket {
    generation: u64,
}

/// Tracks one form trigger's submission lifecycle and the feedback shown
/// for it.
///
/// The controller never performs I/O itself: callers ask it to `begin`,
/// run the external action, then `complete` with the outcome. That keeps
/// at most one action outstanding per controller while leaving the actual
/// await to the host.
#[derive(Debug, Clone, Default)]
pub struct Submission {
    state: SubmissionState,
    success_label: Option<String>,
    failure_label: Option<String>,
    failure_reason: Option<String>,
    generation: u64,
}

impl Submission {
    pub fn new() -> Self {
        Self::default()
    }

    /// Label shown on the trigger after a successful submission
    pub fn with_success_label(mut self, label: &str) -> Self {
        self.success_label = Some(label.to_string());
        self
    }

    /// Label shown on the trigger after a failed submission
    pub fn with_failure_label(mut self, label: &str) -> Self {
        self.failure_label = Some(label.to_string());
        self
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    /// Attempt to start a submission.
    ///
    /// Refused while a prior submission is outstanding or when the given
    /// validation result carries errors; in both cases no transition
    /// happens and no action must be invoked.
    pub fn begin(&mut self, validation: &ValidationResult) -> Result<SubmitTicket, SubmitBlocked> {
        if self.state == SubmissionState::InFlight {
            return Err(SubmitBlocked::AlreadyInFlight);
        }
        if !validation.is_valid() {
            return Err(SubmitBlocked::ValidationFailed);
        }

        self.state = SubmissionState::InFlight;
        self.failure_reason = None;
        self.generation += 1;
        Ok(SubmitTicket {
            generation: self.generation,
        })
    }

    /// Report the external action's outcome for a ticket.
    ///
    /// Stale tickets are ignored. On failure the action's reason is kept
    /// for display; a missing reason falls back to a generic one.
    pub fn complete(&mut self, ticket: SubmitTicket, outcome: Result<(), Option<String>>) {
        if ticket.generation != self.generation || self.state != SubmissionState::InFlight {
            return;
        }

        match outcome {
            Ok(()) => {
                self.state = SubmissionState::Succeeded;
            }
            Err(reason) => {
                self.state = SubmissionState::Failed;
                self.failure_reason =
                    Some(reason.unwrap_or_else(|| "Submission failed".to_string()));
            }
        }
    }

    /// Return to Idle, clearing stored feedback.
    ///
    /// Called by the host when the user edits the form again (or the form
    /// goes away); any outstanding ticket becomes stale.
    pub fn reset(&mut self) {
        self.state = SubmissionState::Idle;
        self.failure_reason = None;
        self.generation += 1;
    }

    /// Feedback label for the current state, if any
    pub fn feedback_label(&self) -> Option<&str> {
        match self.state {
            SubmissionState::Succeeded => self.success_label.as_deref(),
            SubmissionState::Failed => self.failure_label.as_deref(),
            _ => None,
        }
    }

    /// The failure reason reported by the last completed action
    pub fn failure_reason(&self) -> Option<&str> {
        match self.state {
            SubmissionState::Failed => self.failure_reason.as_deref(),
            _ => None,
        }
    }

    /// Label to render on the submit trigger
    pub fn trigger_label<'a>(&'a self, idle_label: &'a str) -> &'a str {
        match self.state {
            SubmissionState::Idle => idle_label,
            SubmissionState::InFlight => "Submitting...",
            SubmissionState::Succeeded | SubmissionState::Failed => {
                self.feedback_label().unwrap_or(idle_label)
            }
        }
    }

    /// Whether the submit trigger should be disabled
    pub fn is_trigger_disabled(&self) -> bool {
        self.state == SubmissionState::InFlight
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::field::{FieldValue, FieldValues};
    use crate::state::forms::validation::{Rule, Validator};

    fn valid_result() -> ValidationResult {
        Validator::default().validate(&FieldValues::new())
    }

    fn invalid_result() -> ValidationResult {
        let validator = Validator::new(vec![Rule::presence("EMAIL", "Email")]);
        let mut values = FieldValues::new();
        values.insert("EMAIL".to_string(), FieldValue::Text(String::new()));
        validator.validate(&values)
    }

    mod transitions {
        use super::*;

        #[test]
        fn test_initial_state_is_idle() {
            let submission = Submission::new();
            assert_eq!(submission.state(), SubmissionState::Idle);
        }

        #[test]
        fn test_begin_with_errors_stays_idle() {
            let mut submission = Submission::new();
            let result = submission.begin(&invalid_result());
            assert_eq!(result.unwrap_err(), SubmitBlocked::ValidationFailed);
            assert_eq!(submission.state(), SubmissionState::Idle);
        }

        #[test]
        fn test_begin_with_valid_result_goes_in_flight() {
            let mut submission = Submission::new();
            let ticket = submission.begin(&valid_result());
            assert!(ticket.is_ok());
            assert_eq!(submission.state(), SubmissionState::InFlight);
        }

        #[test]
        fn test_success_completion_goes_succeeded() {
            let mut submission = Submission::new();
            let ticket = submission.begin(&valid_result()).unwrap();
            submission.complete(ticket, Ok(()));
            assert_eq!(submission.state(), SubmissionState::Succeeded);
        }

        #[test]
        fn test_failure_completion_goes_failed() {
            let mut submission = Submission::new();
            let ticket = submission.begin(&valid_result()).unwrap();
            submission.complete(ticket, Err(Some("already invited".to_string())));
            assert_eq!(submission.state(), SubmissionState::Failed);
            assert_eq!(submission.failure_reason(), Some("already invited"));
        }

        #[test]
        fn test_failure_without_reason_gets_generic_one() {
            let mut submission = Submission::new();
            let ticket = submission.begin(&valid_result()).unwrap();
            submission.complete(ticket, Err(None));
            assert_eq!(submission.failure_reason(), Some("Submission failed"));
        }

        #[test]
        fn test_reset_returns_to_idle_and_clears_feedback() {
            let mut submission = Submission::new().with_failure_label("Already invited");
            let ticket = submission.begin(&valid_result()).unwrap();
            submission.complete(ticket, Err(None));
            assert_eq!(submission.feedback_label(), Some("Already invited"));

            submission.reset();
            assert_eq!(submission.state(), SubmissionState::Idle);
            assert!(submission.feedback_label().is_none());
            assert!(submission.failure_reason().is_none());
        }

        #[test]
        fn test_no_auto_reset_on_failure() {
            let mut submission = Submission::new();
            let ticket = submission.begin(&valid_result()).unwrap();
            submission.complete(ticket, Err(None));
            // A new submit is refused until the host resets
            assert_eq!(submission.state(), SubmissionState::Failed);
            assert!(submission.begin(&valid_result()).is_ok());
        }
    }

    mod re_entrancy {
        use super::*;

        #[test]
        fn test_second_submit_while_in_flight_is_rejected() {
            let mut submission = Submission::new();
            let first = submission.begin(&valid_result());
            assert!(first.is_ok());

            let second = submission.begin(&valid_result());
            assert_eq!(second.unwrap_err(), SubmitBlocked::AlreadyInFlight);
            assert_eq!(submission.state(), SubmissionState::InFlight);
        }

        #[test]
        fn test_resubmit_after_reset_succeeds() {
            let mut submission = Submission::new();
            let ticket = submission.begin(&valid_result()).unwrap();
            submission.complete(ticket, Err(Some("rejected".to_string())));
            submission.reset();

            let ticket = submission.begin(&valid_result()).unwrap();
            submission.complete(ticket, Ok(()));
            assert_eq!(submission.state(), SubmissionState::Succeeded);
        }
    }

    mod stale_tickets {
        use super::*;

        #[test]
        fn test_completion_after_reset_is_discarded() {
            let mut submission = Submission::new();
            let ticket = submission.begin(&valid_result()).unwrap();
            // The form went away while the action was outstanding
            submission.reset();

            submission.complete(ticket, Ok(()));
            assert_eq!(submission.state(), SubmissionState::Idle);
        }

        #[test]
        fn test_old_ticket_cannot_complete_newer_submission() {
            let mut submission = Submission::new();
            let old_ticket = submission.begin(&valid_result()).unwrap();
            submission.reset();
            let _new_ticket = submission.begin(&valid_result()).unwrap();

            submission.complete(old_ticket, Err(Some("late failure".to_string())));
            assert_eq!(submission.state(), SubmissionState::InFlight);
            assert!(submission.failure_reason().is_none());
        }

        #[test]
        fn test_duplicate_completion_is_ignored() {
            let mut submission = Submission::new();
            let ticket = submission.begin(&valid_result()).unwrap();
            submission.complete(ticket, Ok(()));
            submission.complete(ticket, Err(Some("late".to_string())));
            assert_eq!(submission.state(), SubmissionState::Succeeded);
        }
    }

    mod feedback {
        use super::*;

        #[test]
        fn test_trigger_label_per_state() {
            let mut submission = Submission::new()
                .with_success_label("Invite sent!")
                .with_failure_label("Already invited");

            assert_eq!(submission.trigger_label("Get invited"), "Get invited");

            let ticket = submission.begin(&valid_result()).unwrap();
            assert_eq!(submission.trigger_label("Get invited"), "Submitting...");
            assert!(submission.is_trigger_disabled());

            submission.complete(ticket, Ok(()));
            assert_eq!(submission.trigger_label("Get invited"), "Invite sent!");
            assert!(!submission.is_trigger_disabled());

            submission.reset();
            let ticket = submission.begin(&valid_result()).unwrap();
            submission.complete(ticket, Err(None));
            assert_eq!(submission.trigger_label("Get invited"), "Already invited");
        }

        #[test]
        fn test_trigger_label_without_feedback_labels_falls_back() {
            let mut submission = Submission::new();
            let ticket = submission.begin(&valid_result()).unwrap();
            submission.complete(ticket, Ok(()));
            assert_eq!(submission.trigger_label("Save"), "Save");
        }

        #[test]
        fn test_idle_has_no_feedback() {
            let submission = Submission::new().with_success_label("Done!");
            assert!(submission.feedback_label().is_none());
        }
    }
}
