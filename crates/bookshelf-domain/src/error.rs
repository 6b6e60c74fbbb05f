//! Error types for bookshelf-domain

use thiserror::Error;

use crate::FieldError;

/// Result type alias for book record operations
pub type Result<T> = std::result::Result<T, BookError>;

/// Book record errors
#[derive(Error, Debug)]
pub enum BookError {
    /// One or more fields failed validation
    #[error("{}", join_messages(.0))]
    Validation(Vec<FieldError>),

    /// A full replace was missing required fields; carries every field error
    #[error("Incomplete Data")]
    IncompleteData(Vec<FieldError>),

    /// Request body was not a book object or array of book objects
    #[error("Invalid book body: {0}")]
    Parse(#[from] serde_json::Error),
}

impl BookError {
    /// Client-facing messages, one per problem.
    pub fn messages(&self) -> Vec<String> {
        match self {
            Self::Validation(errors) | Self::IncompleteData(errors) => {
                errors.iter().map(|e| e.message.clone()).collect()
            }
            Self::Parse(_) => vec![self.to_string()],
        }
    }

    /// Field errors, if this is a validation failure or an incomplete replace.
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            Self::Validation(errors) | Self::IncompleteData(errors) => errors,
            Self::Parse(_) => &[],
        }
    }
}

fn join_messages(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
