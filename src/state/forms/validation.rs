//! Field-level validation rules and their composition

use super::field::{FieldValue, FieldValues};
use std::collections::HashMap;

/// Error-kind label attached to a failed rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Required,
    InvalidEmail,
}

impl ErrorKind {
    /// Stable label for the error kind
    #[allow(dead_code)]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::InvalidEmail => "invalid-email",
        }
    }
}

/// A single field error: the kind that fired plus a display message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub kind: ErrorKind,
    pub message: String,
}

/// The checks a rule can perform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Check {
    Presence,
    EmailFormat,
}

/// A named, pure check against the current field values
#[derive(Debug, Clone)]
pub struct Rule {
    field: String,
    label: String,
    check: Check,
}

impl Rule {
    /// Require a non-empty value: text must contain non-whitespace,
    /// a multi-select must have at least one selection
    pub fn presence(field: &str, label: &str) -> Self {
        Self {
            field: field.to_string(),
            label: label.to_string(),
            check: Check::Presence,
        }
    }

    /// Require a conventional local-part@domain email shape
    pub fn email(field: &str, label: &str) -> Self {
        Self {
            field: field.to_string(),
            label: label.to_string(),
            check: Check::EmailFormat,
        }
    }

    /// Field name this rule targets
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Evaluate the rule against the current values.
    /// Returns None when the rule passes.
    fn evaluate(&self, values: &FieldValues) -> Option<FieldError> {
        let value = values.get(self.field.as_str());
        match self.check {
            Check::Presence => {
                let present = match value {
                    Some(FieldValue::Text(s)) => !s.trim().is_empty(),
                    Some(FieldValue::MultiSelect(items)) => !items.is_empty(),
                    // A checkbox always carries a value
                    Some(FieldValue::Checkbox(_)) => true,
                    None => false,
                };
                if present {
                    None
                } else {
                    Some(FieldError {
                        kind: ErrorKind::Required,
                        message: format!("{} is required", self.label),
                    })
                }
            }
            Check::EmailFormat => {
                let ok = match value {
                    Some(FieldValue::Text(s)) => is_email(s),
                    _ => false,
                };
                if ok {
                    None
                } else {
                    Some(FieldError {
                        kind: ErrorKind::InvalidEmail,
                        message: format!("{} must be a valid email address", self.label),
                    })
                }
            }
        }
    }
}

/// Exactly one '@' with non-empty local and domain segments
fn is_email(value: &str) -> bool {
    let mut parts = value.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => !local.is_empty() && !domain.is_empty(),
        _ => false,
    }
}

/// Per-field errors derived from one validation pass.
/// Empty means the values are valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: HashMap<String, FieldError>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.is_empty()
    }

    pub fn error(&self, field: &str) -> Option<&FieldError> {
        self.errors.get(field)
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

/// An ordered rule set composed into a single validation function
#[derive(Debug, Clone, Default)]
pub struct Validator {
    rules: Vec<Rule>,
}

impl Validator {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// Run every rule against the values.
    ///
    /// Rules for different fields are independent. Within one field the
    /// first failing rule in declaration order wins and the remaining
    /// rules for that field are skipped.
    pub fn validate(&self, values: &FieldValues) -> ValidationResult {
        let mut errors: HashMap<String, FieldError> = HashMap::new();

        for rule in &self.rules {
            if errors.contains_key(rule.field()) {
                continue;
            }
            if let Some(error) = rule.evaluate(values) {
                errors.insert(rule.field().to_string(), error);
            }
        }

        ValidationResult { errors }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::field::FieldValue;
    use pretty_assertions::assert_eq;

    fn values(entries: &[(&str, FieldValue)]) -> FieldValues {
        entries
            .iter()
            .map(|(name, value)| (name.to_string(), value.clone()))
            .collect()
    }

    mod presence {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_empty_text_fails() {
            let validator = Validator::new(vec![Rule::presence("EMAIL", "Email")]);
            let result = validator.validate(&values(&[("EMAIL", FieldValue::Text(String::new()))]));
            assert_eq!(result.error("EMAIL").unwrap().kind, ErrorKind::Required);
        }

        #[test]
        fn test_whitespace_only_text_fails() {
            let validator = Validator::new(vec![Rule::presence("name", "Project name")]);
            let result =
                validator.validate(&values(&[("name", FieldValue::Text("   \t".to_string()))]));
            assert_eq!(result.error("name").unwrap().kind, ErrorKind::Required);
        }

        #[test]
        fn test_missing_field_fails() {
            let validator = Validator::new(vec![Rule::presence("name", "Project name")]);
            let result = validator.validate(&FieldValues::new());
            assert_eq!(result.error("name").unwrap().kind, ErrorKind::Required);
        }

        #[test]
        fn test_non_empty_text_passes() {
            let validator = Validator::new(vec![Rule::presence("name", "Project name")]);
            let result =
                validator.validate(&values(&[("name", FieldValue::Text("Jelly".to_string()))]));
            assert!(result.is_valid());
        }

        #[test]
        fn test_empty_multi_select_fails() {
            let validator = Validator::new(vec![Rule::presence("technologies", "Technologies")]);
            let result =
                validator.validate(&values(&[("technologies", FieldValue::MultiSelect(vec![]))]));
            assert_eq!(
                result.error("technologies").unwrap().kind,
                ErrorKind::Required
            );
        }

        #[test]
        fn test_multi_select_with_selection_passes() {
            let validator = Validator::new(vec![Rule::presence("technologies", "Technologies")]);
            let result = validator.validate(&values(&[(
                "technologies",
                FieldValue::MultiSelect(vec!["rust".to_string()]),
            )]));
            assert!(result.is_valid());
        }

        #[test]
        fn test_unchecked_checkbox_passes() {
            let validator = Validator::new(vec![Rule::presence("student_team", "Student team")]);
            let result =
                validator.validate(&values(&[("student_team", FieldValue::Checkbox(false))]));
            assert!(result.is_valid());
        }

        #[test]
        fn test_error_message_uses_display_label() {
            let validator = Validator::new(vec![Rule::presence("description", "Description")]);
            let result = validator.validate(&FieldValues::new());
            assert_eq!(
                result.error("description").unwrap().message,
                "Description is required"
            );
        }
    }

    mod email_format {
        use super::*;
        use pretty_assertions::assert_eq;

        fn email_validator() -> Validator {
            Validator::new(vec![Rule::email("EMAIL", "Email")])
        }

        #[test]
        fn test_plain_address_passes() {
            let result = email_validator().validate(&values(&[(
                "EMAIL",
                FieldValue::Text("team@makeorbreak.io".to_string()),
            )]));
            assert!(result.is_valid());
        }

        #[test]
        fn test_no_at_sign_fails() {
            let result = email_validator().validate(&values(&[(
                "EMAIL",
                FieldValue::Text("not-an-email".to_string()),
            )]));
            assert_eq!(result.error("EMAIL").unwrap().kind, ErrorKind::InvalidEmail);
        }

        #[test]
        fn test_two_at_signs_fail() {
            let result = email_validator().validate(&values(&[(
                "EMAIL",
                FieldValue::Text("a@b@c.io".to_string()),
            )]));
            assert_eq!(result.error("EMAIL").unwrap().kind, ErrorKind::InvalidEmail);
        }

        #[test]
        fn test_empty_local_part_fails() {
            let result = email_validator().validate(&values(&[(
                "EMAIL",
                FieldValue::Text("@makeorbreak.io".to_string()),
            )]));
            assert_eq!(result.error("EMAIL").unwrap().kind, ErrorKind::InvalidEmail);
        }

        #[test]
        fn test_empty_domain_fails() {
            let result = email_validator()
                .validate(&values(&[("EMAIL", FieldValue::Text("team@".to_string()))]));
            assert_eq!(result.error("EMAIL").unwrap().kind, ErrorKind::InvalidEmail);
        }

        #[test]
        fn test_missing_field_fails() {
            let result = email_validator().validate(&FieldValues::new());
            assert_eq!(result.error("EMAIL").unwrap().kind, ErrorKind::InvalidEmail);
        }

        #[test]
        fn test_non_text_value_fails() {
            let result = email_validator()
                .validate(&values(&[("EMAIL", FieldValue::Checkbox(true))]));
            assert_eq!(result.error("EMAIL").unwrap().kind, ErrorKind::InvalidEmail);
        }
    }

    mod composition {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_passing_fields_are_absent_from_result() {
            let validator = Validator::new(vec![
                Rule::presence("name", "Project name"),
                Rule::presence("description", "Description"),
            ]);
            let result = validator.validate(&values(&[
                ("name", FieldValue::Text("Jelly".to_string())),
                ("description", FieldValue::Text(String::new())),
            ]));
            assert!(result.error("name").is_none());
            assert!(result.error("description").is_some());
            assert_eq!(result.len(), 1);
        }

        #[test]
        fn first_failing_rule_wins_per_field() {
            // Presence fails first; the email rule for the same field
            // must not overwrite it.
            let validator = Validator::new(vec![
                Rule::presence("EMAIL", "Email"),
                Rule::email("EMAIL", "Email"),
            ]);
            let result = validator.validate(&values(&[("EMAIL", FieldValue::Text(String::new()))]));
            assert_eq!(result.error("EMAIL").unwrap().kind, ErrorKind::Required);
            assert_eq!(result.len(), 1);
        }

        #[test]
        fn test_later_rule_fires_when_earlier_passes() {
            // Presence passes on a non-empty value, so the format rule
            // reports for the same field.
            let validator = Validator::new(vec![
                Rule::presence("EMAIL", "Email"),
                Rule::email("EMAIL", "Email"),
            ]);
            let result = validator.validate(&values(&[(
                "EMAIL",
                FieldValue::Text("not-an-email".to_string()),
            )]));
            assert_eq!(result.error("EMAIL").unwrap().kind, ErrorKind::InvalidEmail);
        }

        #[test]
        fn test_failure_on_one_field_does_not_short_circuit_others() {
            let validator = Validator::new(vec![
                Rule::presence("name", "Project name"),
                Rule::presence("description", "Description"),
                Rule::presence("technologies", "Technologies"),
            ]);
            let result = validator.validate(&values(&[(
                "technologies",
                FieldValue::MultiSelect(vec![]),
            )]));
            assert_eq!(result.len(), 3);
            assert_eq!(result.error("name").unwrap().kind, ErrorKind::Required);
            assert_eq!(
                result.error("description").unwrap().kind,
                ErrorKind::Required
            );
            assert_eq!(
                result.error("technologies").unwrap().kind,
                ErrorKind::Required
            );
        }

        #[test]
        fn test_validate_is_idempotent() {
            let validator = Validator::new(vec![
                Rule::presence("EMAIL", "Email"),
                Rule::email("EMAIL", "Email"),
            ]);
            let input = values(&[("EMAIL", FieldValue::Text("a@b".to_string()))]);
            assert_eq!(validator.validate(&input), validator.validate(&input));
        }

        #[test]
        fn test_validate_does_not_mutate_input() {
            let validator = Validator::new(vec![Rule::presence("EMAIL", "Email")]);
            let input = values(&[("EMAIL", FieldValue::Text("team@makeorbreak.io".to_string()))]);
            let before = input.clone();
            let _ = validator.validate(&input);
            assert_eq!(
                before.get("EMAIL").unwrap().as_text(),
                input.get("EMAIL").unwrap().as_text()
            );
        }

        #[test]
        fn test_empty_values_and_no_rules_is_valid() {
            let validator = Validator::default();
            assert!(validator.validate(&FieldValues::new()).is_valid());
        }

        #[test]
        fn test_error_kind_labels() {
            assert_eq!(ErrorKind::Required.as_str(), "required");
            assert_eq!(ErrorKind::InvalidEmail.as_str(), "invalid-email");
        }
    }
}
