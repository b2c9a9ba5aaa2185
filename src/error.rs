//! Build-level errors.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors returned by a roster build.
///
/// Every variant is raised before assignment work begins; a failed build
/// has no partial output.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BuildError {
    /// The roster, catalogue, or day list failed validation.
    #[error("invalid roster input: {}", join_messages(.0))]
    InvalidInput(Vec<ValidationError>),
}

impl BuildError {
    /// Validation errors carried by this build error.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            BuildError::InvalidInput(errors) => errors,
        }
    }
}

impl From<Vec<ValidationError>> for BuildError {
    fn from(errors: Vec<ValidationError>) -> Self {
        BuildError::InvalidInput(errors)
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
