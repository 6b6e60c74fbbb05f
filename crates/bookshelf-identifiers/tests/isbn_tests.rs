//! ISBN validation integration tests
//!
//! Case tables for the reference inputs plus property-based checks of the
//! checksum schemes.

use bookshelf_identifiers::{
    clean_isbn, is_valid_isbn, validate_isbn, IsbnFormat, IsbnValidator, ShapePolicy,
    ValidatorConfig,
};
use proptest::prelude::*;
use rstest::rstest;

// === Helpers ===

fn isbn10_check_char(first_nine: &[u32]) -> char {
    let sum: u32 = first_nine
        .iter()
        .enumerate()
        .map(|(i, d)| d * (10 - i as u32))
        .sum();
    match (11 - sum % 11) % 11 {
        10 => 'X',
        d => char::from_digit(d, 10).unwrap(),
    }
}

fn isbn13_check_digit(first_twelve: &[u32]) -> u32 {
    let sum: u32 = first_twelve
        .iter()
        .enumerate()
        .map(|(i, d)| if i % 2 == 0 { *d } else { d * 3 })
        .sum();
    (10 - sum % 10) % 10
}

fn digits_to_string(digits: &[u32]) -> String {
    digits
        .iter()
        .map(|d| char::from_digit(*d, 10).unwrap())
        .collect()
}

fn make_isbn10(first_nine: &[u32]) -> String {
    let mut isbn = digits_to_string(first_nine);
    isbn.push(isbn10_check_char(first_nine));
    isbn
}

fn make_isbn13(first_twelve: &[u32]) -> String {
    let mut digits = first_twelve.to_vec();
    digits.push(isbn13_check_digit(first_twelve));
    digits_to_string(&digits)
}

/// Replace the character at `index` with a different digit.
fn substitute(isbn: &str, index: usize, digit: u32) -> Option<String> {
    let mut chars: Vec<char> = isbn.chars().collect();
    let replacement = char::from_digit(digit, 10)?;
    if chars[index] == replacement {
        return None;
    }
    chars[index] = replacement;
    Some(chars.into_iter().collect())
}

// === Reference cases ===

#[rstest]
#[case("978-3-16-148410-0")]
#[case("185723569X")]
#[case("9781857235692")]
#[case("0-306-40615-2")]
#[case("978-0-321-12521-7")]
#[case("080442957X")]
#[case("185723569x")]
fn test_valid_isbns(#[case] input: &str) {
    assert!(validate_isbn(Some(input)), "{input} should be a valid ISBN");
}

#[rstest]
#[case(None)]
#[case(Some(""))]
#[case(Some("978-3-16-148410-1"))]
#[case(Some("185723569Y"))]
#[case(Some("9781857235691"))]
#[case(Some("0-306-40615-1"))]
#[case(Some("978-0-321-12521-8"))]
#[case(Some("12345"))]
#[case(Some("97831614841001"))]
#[case(Some("not an isbn"))]
fn test_invalid_isbns(#[case] input: Option<&str>) {
    assert!(!validate_isbn(input), "{input:?} should not be a valid ISBN");
}

#[rstest]
#[case("185723569X", IsbnFormat::TenDigit)]
#[case("978-3-16-148410-0", IsbnFormat::ThirteenDigit)]
#[case("978-3-16", IsbnFormat::Invalid)]
#[case("", IsbnFormat::Invalid)]
fn test_format_classification(#[case] input: &str, #[case] expected: IsbnFormat) {
    assert_eq!(IsbnFormat::classify(&clean_isbn(input)), expected);
}

#[test]
fn test_embedded_letters_still_clean_to_valid_codeword() {
    // Permissive cleaning is the default behavior
    assert!(is_valid_isbn("a1b8c5d7e2f3g5h6i9jX"));
    let strict = IsbnValidator::new(ValidatorConfig {
        shape: ShapePolicy::Strict,
    });
    assert!(!strict.validate(Some("a1b8c5d7e2f3g5h6i9jX")));
}

#[test]
fn test_config_file_selects_strict_policy() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bookshelf.toml");
    std::fs::write(&path, "shape = \"strict\"\n").unwrap();

    let validator = IsbnValidator::new(ValidatorConfig::load(&path).unwrap());
    assert_eq!(validator.config().shape, ShapePolicy::Strict);
    assert!(validator.validate(Some("978-3-16-148410-0")));
    assert!(!validator.validate(Some("978_3_16_148410_0")));
}

#[test]
fn test_json_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bookshelf.json");
    std::fs::write(&path, r#"{ "shape": "permissive" }"#).unwrap();

    let config = ValidatorConfig::load(&path).unwrap();
    assert_eq!(config.shape, ShapePolicy::Permissive);
}

// === Properties ===

proptest! {
    #[test]
    fn test_validation_is_deterministic(input in ".{0,40}") {
        prop_assert_eq!(is_valid_isbn(&input), is_valid_isbn(&input));
    }

    #[test]
    fn test_never_panics_on_arbitrary_input(input in any::<String>()) {
        let _ = validate_isbn(Some(&input));
        let _ = IsbnValidator::new(ValidatorConfig::strict()).validate(Some(&input));
    }

    #[test]
    fn test_wrong_length_is_rejected(digits in "[0-9X]{0,30}") {
        prop_assume!(digits.len() != 10 && digits.len() != 13);
        prop_assert!(!is_valid_isbn(&digits));
    }

    #[test]
    fn test_generated_isbn10_is_valid(first_nine in prop::collection::vec(0u32..10, 9)) {
        let isbn = make_isbn10(&first_nine);
        prop_assert!(is_valid_isbn(&isbn), "{} should be valid", isbn);
        prop_assert!(is_valid_isbn(&isbn.to_lowercase()));
    }

    #[test]
    fn test_generated_isbn13_is_valid(first_twelve in prop::collection::vec(0u32..10, 12)) {
        let isbn = make_isbn13(&first_twelve);
        prop_assert!(is_valid_isbn(&isbn), "{} should be valid", isbn);
    }

    #[test]
    fn test_isbn10_detects_single_digit_errors(
        first_nine in prop::collection::vec(0u32..10, 9),
        index in 0usize..10,
        digit in 0u32..10,
    ) {
        let isbn = make_isbn10(&first_nine);
        if let Some(corrupted) = substitute(&isbn, index, digit) {
            prop_assert!(!is_valid_isbn(&corrupted), "{} -> {} should be invalid", isbn, corrupted);
        }
    }

    #[test]
    fn test_isbn13_detects_single_digit_errors(
        first_twelve in prop::collection::vec(0u32..10, 12),
        index in 0usize..13,
        digit in 0u32..10,
    ) {
        let isbn = make_isbn13(&first_twelve);
        if let Some(corrupted) = substitute(&isbn, index, digit) {
            prop_assert!(!is_valid_isbn(&corrupted), "{} -> {} should be invalid", isbn, corrupted);
        }
    }

    #[test]
    fn test_separators_do_not_change_verdict(
        first_twelve in prop::collection::vec(0u32..10, 12),
        split in 1usize..12,
    ) {
        let isbn = make_isbn13(&first_twelve);
        let hyphenated = format!("{}-{}", &isbn[..split], &isbn[split..]);
        prop_assert_eq!(is_valid_isbn(&hyphenated), is_valid_isbn(&isbn));
    }
}
