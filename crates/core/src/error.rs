use crate::validation::ValidationReport;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(ValidationReport),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),
}

impl From<ValidationReport> for CoreError {
    fn from(report: ValidationReport) -> Self {
        CoreError::Validation(report)
    }
}
