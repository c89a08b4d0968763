//! Structured validation results.
//!
//! DTOs declare their rules with `validator` derives. [`check`] runs those
//! rules and flattens the nested `validator` error tree into a
//! [`ValidationReport`] of field-level issues that can be rendered directly
//! in an HTTP error body.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;
use validator::{Validate, ValidationError, ValidationErrors, ValidationErrorsKind};

/// A single failed rule on a single field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldIssue {
    /// Field path, e.g. `role` or `address.city` or `tags[2]`.
    pub field: String,
    /// Machine-readable rule code (`required`, `regex`, `email`, `blank`, ...).
    pub code: String,
    /// Human-readable message.
    pub message: String,
}

impl FieldIssue {
    pub fn new(field: impl Into<String>, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Outcome of a failed validation pass. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationReport {
    issues: Vec<FieldIssue>,
}

impl ValidationReport {
    /// Build a report from a list of issues, sorted by field then code.
    pub fn from_issues(mut issues: Vec<FieldIssue>) -> Self {
        issues.sort_by(|a, b| a.field.cmp(&b.field).then_with(|| a.code.cmp(&b.code)));
        Self { issues }
    }

    pub fn issues(&self) -> &[FieldIssue] {
        &self.issues
    }

    /// Names of every field that failed at least one rule, deduplicated.
    pub fn fields(&self) -> Vec<&str> {
        let mut fields: Vec<&str> = self.issues.iter().map(|i| i.field.as_str()).collect();
        fields.dedup();
        fields
    }

    pub fn has_issue(&self, field: &str, code: &str) -> bool {
        self.issues.iter().any(|i| i.field == field && i.code == code)
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for issue in &self.issues {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", issue.field, issue.message)?;
            first = false;
        }
        Ok(())
    }
}

impl From<&ValidationErrors> for ValidationReport {
    fn from(errors: &ValidationErrors) -> Self {
        let mut issues = Vec::new();
        collect_issues(None, errors, &mut issues);
        Self::from_issues(issues)
    }
}

/// Run the declared rules of `value`.
pub fn check<T: Validate>(value: &T) -> Result<(), ValidationReport> {
    value.validate().map_err(|errors| ValidationReport::from(&errors))
}

/// Rejects strings that are empty or whitespace only.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message(Cow::Borrowed("must not be blank")));
    }
    Ok(())
}

fn collect_issues(prefix: Option<String>, errors: &ValidationErrors, out: &mut Vec<FieldIssue>) {
    for (field, kind) in errors.errors() {
        let path = match &prefix {
            Some(prefix) => format!("{prefix}.{field}"),
            None => field.to_string(),
        };

        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                for error in field_errors {
                    let message = error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{path} is invalid"));
                    out.push(FieldIssue::new(path.clone(), error.code.to_string(), message));
                }
            }
            ValidationErrorsKind::Struct(nested) => {
                collect_issues(Some(path), nested, out);
            }
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    collect_issues(Some(format!("{path}[{index}]")), nested, out);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Validate)]
    struct Inner {
        #[validate(required(message = "city is required"))]
        city: Option<String>,
    }

    #[derive(Validate)]
    struct Outer {
        #[validate(required, custom(function = "not_blank"))]
        name: Option<String>,
        #[validate(nested)]
        inner: Inner,
    }

    #[test]
    fn valid_value_passes() {
        let value = Outer {
            name: Some("ok".into()),
            inner: Inner { city: Some("Colombo".into()) },
        };
        assert!(check(&value).is_ok());
    }

    #[test]
    fn nested_errors_are_flattened_with_dotted_path() {
        let value = Outer {
            name: Some("ok".into()),
            inner: Inner { city: None },
        };
        let report = check(&value).unwrap_err();
        assert!(report.has_issue("inner.city", "required"));
        assert_eq!(report.issues()[0].message, "city is required");
    }

    #[test]
    fn missing_message_falls_back_to_generic_text() {
        let value = Outer {
            name: None,
            inner: Inner { city: Some("Kandy".into()) },
        };
        let report = check(&value).unwrap_err();
        assert_eq!(report.issues().len(), 1);
        assert_eq!(report.issues()[0].message, "name is invalid");
    }

    #[test]
    fn blank_string_is_rejected() {
        assert!(not_blank("   ").is_err());
        assert!(not_blank("").is_err());
        assert!(not_blank(" x ").is_ok());
    }

    #[test]
    fn issues_are_sorted_and_displayed() {
        let report = ValidationReport::from_issues(vec![
            FieldIssue::new("role", "regex", "bad role"),
            FieldIssue::new("id", "required", "id is required"),
        ]);
        assert_eq!(report.fields(), vec!["id", "role"]);
        assert_eq!(report.to_string(), "id: id is required; role: bad role");
    }
}
