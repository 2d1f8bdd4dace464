//! Declarative per-route field rules. Rules are attached to request types
//! with `validator` derive attributes; extraction collects every failing
//! rule into an ordered list before the handler body runs.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::handlers::error::AppError;
use crate::storage::TodoId;

/// A single field-level rule violation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationFailure {
    pub field: String,
    pub message: String,
}

/// Runs every rule on the body and collects all failures, not just the
/// first. A non-empty list aborts the request before any storage call.
pub(crate) fn validate_body<T: Validate>(body: &T) -> Result<(), AppError> {
    match body.validate() {
        Ok(()) => Ok(()),
        Err(errors) => Err(AppError::Validation(extract_failures(errors))),
    }
}

/// Rule for `:id` path params: the raw segment must parse as an id.
pub(crate) fn parse_id(raw: &str) -> Result<TodoId, AppError> {
    TodoId::from_str(raw).map_err(|_| {
        AppError::Validation(vec![ValidationFailure {
            field: "id".to_owned(),
            message: "id must be a valid identifier".to_owned(),
        }])
    })
}

/// Rule body for titles: present strings must be non-empty after trimming.
pub(crate) fn non_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("non_blank").with_message("title must not be empty".into()));
    }
    Ok(())
}

fn extract_failures(errors: validator::ValidationErrors) -> Vec<ValidationFailure> {
    let mut failures: Vec<ValidationFailure> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, field_errors)| {
            field_errors.iter().map(move |error| ValidationFailure {
                field: field.to_string(),
                message: error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("validation failed for field '{field}'")),
            })
        })
        .collect();

    // field_errors is a map; order the list for a stable response shape
    failures.sort_by(|a, b| a.field.cmp(&b.field).then(a.message.cmp(&b.message)));
    failures
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::CreateTodo;

    #[test]
    fn missing_title_fails_with_field_reference() {
        let body = CreateTodo { title: None };

        let err = validate_body(&body).unwrap_err();
        let AppError::Validation(failures) = err else {
            panic!("expected validation error");
        };
        assert!(failures.iter().any(|f| f.field == "title"));
    }

    #[test]
    fn blank_title_fails() {
        let body = CreateTodo {
            title: Some("   ".to_owned()),
        };

        let err = validate_body(&body).unwrap_err();
        let AppError::Validation(failures) = err else {
            panic!("expected validation error");
        };
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].field, "title");
        assert_eq!(failures[0].message, "title must not be empty");
    }

    #[test]
    fn non_empty_title_passes() {
        let body = CreateTodo {
            title: Some("buy milk".to_owned()),
        };

        assert!(validate_body(&body).is_ok());
    }

    #[test]
    fn id_rule_rejects_non_uuid() {
        assert!(parse_id("not-an-id").is_err());
        assert!(parse_id("123").is_err());

        let id = TodoId::new();
        assert_eq!(parse_id(&id.to_string()).unwrap(), id);
    }
}
