//! Hand-rolled field validation for the validation showcase.
//!
//! # Responsibilities
//! - Check a submitted record against ad hoc rules
//! - Accumulate field-level problems in declaration order
//! - Echo accepted fields verbatim on success
//!
//! # Design Decisions
//! - Rules run over `serde_json::Value` so wrong-type fields are
//!   reported instead of rejected at deserialization
//! - No short-circuit: name, email and age are all checked
//! - Email check is a plausibility shape test, not RFC compliance

use serde::Serialize;
use serde_json::{Map, Value};

/// Minimum accepted length for `name`, in characters.
const NAME_MIN_LEN: usize = 2;

/// Inclusive bounds for `age`.
const AGE_RANGE: (f64, f64) = (0.0, 150.0);

/// A single field-level problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Outcome of validating one submission.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationOutcome {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldError>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl ValidationOutcome {
    fn accepted(data: Value) -> Self {
        Self {
            valid: true,
            errors: None,
            data: Some(data),
        }
    }

    fn rejected(errors: Vec<FieldError>) -> Self {
        Self {
            valid: false,
            errors: Some(errors),
            data: None,
        }
    }

    /// Outcome for a body that could not be parsed as structured data:
    /// exactly one error on the synthetic `body` field.
    pub fn malformed_body(detail: impl Into<String>) -> Self {
        Self::rejected(vec![FieldError::new("body", detail)])
    }
}

/// Validate a submitted record with optional `name`, `email` and `age`.
///
/// Errors accumulate in field declaration order. On success the returned
/// data echoes the submitted values verbatim, not normalized.
pub fn validate_record(record: &Value) -> ValidationOutcome {
    let Some(fields) = record.as_object() else {
        return ValidationOutcome::malformed_body("expected a JSON object");
    };

    let mut errors = Vec::new();
    check_name(fields, &mut errors);
    check_email(fields, &mut errors);
    check_age(fields, &mut errors);

    if !errors.is_empty() {
        return ValidationOutcome::rejected(errors);
    }

    let mut accepted = Map::new();
    for key in ["name", "email", "age"] {
        if let Some(value) = fields.get(key) {
            accepted.insert(key.to_string(), value.clone());
        }
    }
    ValidationOutcome::accepted(Value::Object(accepted))
}

fn check_name(fields: &Map<String, Value>, errors: &mut Vec<FieldError>) {
    match fields.get("name") {
        None | Some(Value::Null) => errors.push(FieldError::new("name", "name is required")),
        Some(Value::String(name)) => {
            if name.chars().count() < NAME_MIN_LEN {
                errors.push(FieldError::new(
                    "name",
                    format!("name must be at least {NAME_MIN_LEN} characters"),
                ));
            }
        }
        Some(_) => errors.push(FieldError::new("name", "name must be a string")),
    }
}

fn check_email(fields: &Map<String, Value>, errors: &mut Vec<FieldError>) {
    match fields.get("email") {
        None | Some(Value::Null) => errors.push(FieldError::new("email", "email is required")),
        Some(Value::String(email)) => {
            if !is_plausible_email(email) {
                errors.push(FieldError::new(
                    "email",
                    "email must look like local@domain.tld",
                ));
            }
        }
        Some(_) => errors.push(FieldError::new("email", "email must be a string")),
    }
}

fn check_age(fields: &Map<String, Value>, errors: &mut Vec<FieldError>) {
    match fields.get("age") {
        // Optional field: absent is fine.
        None => {}
        Some(Value::Number(age)) => {
            let age = age.as_f64().unwrap_or(f64::NAN);
            if !(AGE_RANGE.0..=AGE_RANGE.1).contains(&age) {
                errors.push(FieldError::new(
                    "age",
                    format!("age must be between {} and {}", AGE_RANGE.0, AGE_RANGE.1),
                ));
            }
        }
        Some(_) => errors.push(FieldError::new("age", "age must be a number")),
    }
}

/// Shape test for `local@domain.tld`. Deliberately loose.
fn is_plausible_email(candidate: &str) -> bool {
    if candidate.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = candidate.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && tld.len() >= 2,
        None => false,
    }
}
