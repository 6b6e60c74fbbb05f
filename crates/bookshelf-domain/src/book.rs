//! Book records and the operations that change them

use bookshelf_identifiers::IsbnValidator;
use serde::{Deserialize, Serialize};

use crate::error::{BookError, Result};
use crate::validation::{validate_fields, BookField};

/// A book record that passed validation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Book {
    /// ISBN-10 or ISBN-13, stored as entered
    pub isbn: String,
    pub genre: String,
    pub author: String,
    pub title: String,
}

/// Unvalidated book fields from a request body.
///
/// Absent fields are `None`. Unknown fields are ignored; non-string values
/// fail deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl BookInput {
    /// Value of a field, if present.
    pub fn get(&self, field: BookField) -> Option<&str> {
        match field {
            BookField::Isbn => self.isbn.as_deref(),
            BookField::Genre => self.genre.as_deref(),
            BookField::Author => self.author.as_deref(),
            BookField::Title => self.title.as_deref(),
        }
    }

    /// True when every field is present and non-empty.
    pub fn is_complete(&self) -> bool {
        BookField::ALL
            .iter()
            .all(|&field| self.get(field).is_some_and(|value| !value.is_empty()))
    }

    /// Validate this input as a new record.
    pub fn validate(&self, validator: &IsbnValidator) -> Result<Book> {
        let errors = validate_fields(self, validator);

        match (&self.isbn, &self.genre, &self.author, &self.title) {
            (Some(isbn), Some(genre), Some(author), Some(title)) if errors.is_empty() => Ok(Book {
                isbn: isbn.clone(),
                genre: genre.clone(),
                author: author.clone(),
                title: title.clone(),
            }),
            _ => {
                let err = BookError::Validation(errors);
                tracing::debug!("Rejected book record: {}", err);
                Err(err)
            }
        }
    }

    /// Overlay the fields set in `patch` on top of `self`.
    fn merged_with(self, patch: BookPatch) -> BookInput {
        BookInput {
            isbn: patch.isbn.unwrap_or(self.isbn),
            genre: patch.genre.unwrap_or(self.genre),
            author: patch.author.unwrap_or(self.author),
            title: patch.title.unwrap_or(self.title),
        }
    }
}

/// Partial update body.
///
/// An absent field is `None` and keeps the stored value. An explicit `null`
/// is `Some(None)` and clears it, which then fails the required check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookPatch {
    #[serde(default, deserialize_with = "set_field", skip_serializing_if = "Option::is_none")]
    pub isbn: Option<Option<String>>,
    #[serde(default, deserialize_with = "set_field", skip_serializing_if = "Option::is_none")]
    pub genre: Option<Option<String>>,
    #[serde(default, deserialize_with = "set_field", skip_serializing_if = "Option::is_none")]
    pub author: Option<Option<String>>,
    #[serde(default, deserialize_with = "set_field", skip_serializing_if = "Option::is_none")]
    pub title: Option<Option<String>>,
}

impl BookPatch {
    /// Parse a JSON patch body.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl From<BookInput> for BookPatch {
    fn from(input: BookInput) -> Self {
        Self {
            isbn: input.isbn.map(Some),
            genre: input.genre.map(Some),
            author: input.author.map(Some),
            title: input.title.map(Some),
        }
    }
}

// Only called for keys present in the body; `null` becomes `Some(None)`
fn set_field<'de, D>(deserializer: D) -> std::result::Result<Option<Option<String>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

impl From<Book> for BookInput {
    fn from(book: Book) -> Self {
        Self {
            isbn: Some(book.isbn),
            genre: Some(book.genre),
            author: Some(book.author),
            title: Some(book.title),
        }
    }
}

impl Book {
    /// Replace every field of this record.
    ///
    /// All four fields must be present and non-empty, otherwise
    /// [`BookError::IncompleteData`] carrying every field error. On any error
    /// the record is unchanged.
    pub fn replace(&mut self, input: BookInput, validator: &IsbnValidator) -> Result<()> {
        if !input.is_complete() {
            let err = BookError::IncompleteData(validate_fields(&input, validator));
            tracing::debug!("Rejected full update of {}: {:?}", self.isbn, err.messages());
            return Err(err);
        }
        *self = input.validate(validator)?;
        Ok(())
    }

    /// Apply the fields set in `patch`, then revalidate the whole record.
    ///
    /// On error the record is unchanged.
    pub fn patch(
        &mut self,
        patch: impl Into<BookPatch>,
        validator: &IsbnValidator,
    ) -> Result<()> {
        let patch = patch.into();
        let merged = BookInput::from(self.clone()).merged_with(patch);
        *self = merged.validate(validator)?;
        Ok(())
    }
}

/// A create request body: one book or an array of books.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BookBody {
    Many(Vec<BookInput>),
    One(BookInput),
}

impl BookBody {
    /// Parse a JSON request body.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn into_inputs(self) -> Vec<BookInput> {
        match self {
            Self::Many(inputs) => inputs,
            Self::One(input) => vec![input],
        }
    }
}

/// Validate a batch of new records independently.
pub fn validate_books(inputs: &[BookInput], validator: &IsbnValidator) -> Vec<Result<Book>> {
    inputs.iter().map(|input| input.validate(validator)).collect()
}
