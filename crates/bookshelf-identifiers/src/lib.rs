//! ISBN validation for book records
//!
//! This crate provides the checks a book store runs before accepting a record:
//! - ISBN cleaning (digits and the `X` check character only)
//! - Format classification (ISBN-10, ISBN-13)
//! - ISBN-10 (mod 11) and ISBN-13 (mod 10) checksum validation
//! - Optional strict shape checking through [`IsbnValidator`] and [`ValidatorConfig`]
//!
//! ```
//! use bookshelf_identifiers::validate_isbn;
//!
//! assert!(validate_isbn(Some("978-3-16-148410-0")));
//! assert!(!validate_isbn(Some("978-3-16-148410-1")));
//! assert!(!validate_isbn(None));
//! ```

pub mod config;
pub mod isbn;
pub mod validator;

pub use config::*;
pub use isbn::*;
pub use validator::*;

// Setup UniFFI when the feature is enabled
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();
