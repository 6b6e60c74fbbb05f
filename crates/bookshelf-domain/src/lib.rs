//! Book record schema for bookshelf
//!
//! This crate provides the record-level checks a store runs before writing a book:
//! - Book: a validated record (ISBN, genre, author, title)
//! - BookInput: an unvalidated request body, possibly partial
//! - Validation: required fields and ISBN checksum, with stable messages
//! - Create, full replace and partial patch semantics
//!
//! Storage, uniqueness of ISBNs and HTTP mapping belong to the caller.

pub mod book;
pub mod error;
pub mod validation;

pub use book::*;
pub use error::*;
pub use validation::*;
