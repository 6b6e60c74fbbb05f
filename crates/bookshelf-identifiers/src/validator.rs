//! Configurable ISBN validator

use lazy_static::lazy_static;
use regex::Regex;

use crate::config::{ShapePolicy, ValidatorConfig};
use crate::isbn::{clean_isbn, is_valid_cleaned_isbn};

lazy_static! {
    // Written ISBN shape: optional label, ASCII digits joined by at most one
    // hyphen or space, optional trailing check character X
    static ref STRICT_SHAPE: Regex = Regex::new(
        r"^(?i:ISBN(?:-1[03])?:? ?)?(?P<body>[0-9](?:[- ]?[0-9])*(?:[- ]?[Xx])?)$"
    ).unwrap();
}

/// ISBN validator bound to a [`ValidatorConfig`].
///
/// `IsbnValidator::default()` behaves exactly like [`crate::validate_isbn`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IsbnValidator {
    config: ValidatorConfig,
}

impl IsbnValidator {
    pub fn new(config: ValidatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Cleaned digit sequence for `raw`, or `None` if strict shape checking
    /// rejects the input outright.
    pub fn clean(&self, raw: &str) -> Option<String> {
        match self.config.shape {
            ShapePolicy::Permissive => Some(clean_isbn(raw)),
            ShapePolicy::Strict => strict_body(raw).map(clean_isbn),
        }
    }

    /// Validate an optional ISBN string under this configuration.
    pub fn validate(&self, isbn: Option<&str>) -> bool {
        isbn.and_then(|raw| self.clean(raw))
            .is_some_and(|cleaned| is_valid_cleaned_isbn(&cleaned))
    }
}

/// ISBN body of a strictly shaped input, with any label removed.
///
/// Surrounding whitespace is ignored.
pub fn strict_body(raw: &str) -> Option<&str> {
    STRICT_SHAPE
        .captures(raw.trim())
        .and_then(|cap| cap.name("body"))
        .map(|m| m.as_str())
}
