//! Field validation for book records

use bookshelf_identifiers::IsbnValidator;
use serde::{Deserialize, Serialize};

use crate::BookInput;

/// A field of a book record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookField {
    Isbn,
    Genre,
    Author,
    Title,
}

impl BookField {
    /// All fields, in validation order.
    pub const ALL: [BookField; 4] = [Self::Isbn, Self::Genre, Self::Author, Self::Title];

    /// Field name as it appears in request bodies.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Isbn => "isbn",
            Self::Genre => "genre",
            Self::Author => "author",
            Self::Title => "title",
        }
    }

    /// Message reported when the field is missing or empty.
    pub fn required_message(&self) -> &'static str {
        match self {
            Self::Isbn => "The book must have a valid ISBN.",
            Self::Genre => "The book must have a genre.",
            Self::Author => "The book must have an author.",
            Self::Title => "The book must have a title.",
        }
    }
}

/// Why a field was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldErrorKind {
    Required,
    InvalidIsbn,
}

/// A rejected field with its client-facing message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: BookField,
    pub kind: FieldErrorKind,
    pub message: String,
}

impl FieldError {
    pub fn required(field: BookField) -> Self {
        Self {
            field,
            kind: FieldErrorKind::Required,
            message: field.required_message().to_string(),
        }
    }

    pub fn invalid_isbn(value: &str) -> Self {
        Self {
            field: BookField::Isbn,
            kind: FieldErrorKind::InvalidIsbn,
            message: invalid_isbn_message(value),
        }
    }
}

/// Message for an ISBN that fails validation.
///
/// Callers match on this exact shape.
pub fn invalid_isbn_message(value: &str) -> String {
    format!("{} is not a valid ISBN!", value)
}

/// Validate every field of `input` and collect the errors.
///
/// A field that is absent or an empty string fails its required check; the
/// ISBN checksum only runs on a present, non-empty ISBN.
pub fn validate_fields(input: &BookInput, validator: &IsbnValidator) -> Vec<FieldError> {
    let mut errors = Vec::new();

    for field in BookField::ALL {
        match input.get(field) {
            None | Some("") => errors.push(FieldError::required(field)),
            Some(value) if field == BookField::Isbn && !validator.validate(Some(value)) => {
                tracing::debug!("ISBN failed validation: {:?}", value);
                errors.push(FieldError::invalid_isbn(value));
            }
            Some(_) => {}
        }
    }

    errors
}
