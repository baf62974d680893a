//! Form domain layer
//!
//! Type-safe form handling shared by the community signup and the
//! editable project form: typed field values, composable validation
//! rules, and the submission state machine.

pub mod field;
mod form_state;
pub mod submission;
pub mod validation;

pub use field::{FieldValue, FieldValues, FormField};
pub use form_state::{Form, InviteForm, ProjectForm, TECHNOLOGIES};
pub use submission::{Submission, SubmissionState, SubmitBlocked, SubmitTicket};
pub use validation::{ErrorKind, FieldError, ValidationResult};
