//! ISBN cleaning, classification and checksum validation

use serde::{Deserialize, Serialize};

/// Format of a cleaned ISBN, decided by its length alone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum IsbnFormat {
    TenDigit,
    ThirteenDigit,
    Invalid,
}

impl IsbnFormat {
    /// Classify a cleaned digit sequence.
    pub fn classify(cleaned: &str) -> Self {
        match cleaned.chars().count() {
            10 => Self::TenDigit,
            13 => Self::ThirteenDigit,
            _ => Self::Invalid,
        }
    }

    /// Display name for output.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::TenDigit => "ISBN-10",
            Self::ThirteenDigit => "ISBN-13",
            Self::Invalid => "invalid",
        }
    }
}

/// Reduce raw input to its ISBN characters.
///
/// Keeps ASCII digits and `X`/`x` (folded to `X`) in order and drops
/// everything else, including hyphens, spaces and other letters.
///
/// ```
/// use bookshelf_identifiers::clean_isbn;
/// assert_eq!(clean_isbn("1-85723-569-x"), "185723569X");
/// assert_eq!(clean_isbn("ISBN 978 3 16"), "978316");
/// ```
pub fn clean_isbn(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit() || *c == 'X' || *c == 'x')
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Validate an optional ISBN string.
///
/// Absent input, a cleaned length other than 10 or 13, or a checksum
/// mismatch all yield `false`. This function never fails.
pub fn validate_isbn(isbn: Option<&str>) -> bool {
    match isbn {
        Some(raw) => is_valid_cleaned_isbn(&clean_isbn(raw)),
        None => false,
    }
}

/// Validate a present ISBN string.
pub fn is_valid_isbn(isbn: &str) -> bool {
    validate_isbn(Some(isbn))
}

/// FFI entry point for [`validate_isbn`].
#[cfg(feature = "uniffi")]
#[uniffi::export]
pub fn validate_isbn_ffi(isbn: Option<String>) -> bool {
    validate_isbn(isbn.as_deref())
}

/// Validate a sequence that has already been through [`clean_isbn`].
pub fn is_valid_cleaned_isbn(cleaned: &str) -> bool {
    match IsbnFormat::classify(cleaned) {
        IsbnFormat::TenDigit => validate_isbn10(cleaned),
        IsbnFormat::ThirteenDigit => validate_isbn13(cleaned),
        IsbnFormat::Invalid => false,
    }
}

/// Validate ISBN-10 checksum
///
/// Weights run 10 down to 1. Only the last character may be `X` (value 10).
fn validate_isbn10(isbn: &str) -> bool {
    let chars: Vec<char> = isbn.chars().collect();
    if chars.len() != 10 {
        return false;
    }

    let mut sum: u32 = 0;
    for (i, c) in chars[..9].iter().enumerate() {
        match c.to_digit(10) {
            Some(value) => sum += value * (10 - i as u32),
            None => return false,
        }
    }

    let check = match chars[9] {
        'X' => 10,
        c => match c.to_digit(10) {
            Some(value) => value,
            None => return false,
        },
    };

    (sum + check) % 11 == 0
}

/// Validate ISBN-13 checksum
fn validate_isbn13(isbn: &str) -> bool {
    let digits: Option<Vec<u32>> = isbn.chars().map(|c| c.to_digit(10)).collect();
    let Some(digits) = digits else {
        return false;
    };
    if digits.len() != 13 {
        return false;
    }

    let sum: u32 = digits[..12]
        .iter()
        .enumerate()
        .map(|(i, &value)| if i % 2 == 0 { value } else { value * 3 })
        .sum();

    (10 - sum % 10) % 10 == digits[12]
}
