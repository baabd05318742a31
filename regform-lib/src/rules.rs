//! The per-field validation rules.
//!
//! Patterns are compiled once and explicitly anchored: `Regex::is_match`
//! matches anywhere in the haystack, and every rule here constrains the
//! whole value.

use std::sync::LazyLock;

use regex::Regex;

use crate::field::Field;
use crate::result::{FieldError, ValidationResult};

static NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]{2,25}$").expect("name pattern"));

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9+_.-]+@farmingdale\.edu$").expect("email pattern"));

// Day range is 00-31 with no per-month bounds or leap-year handling; the
// accept set is pinned by tests and must not be tightened here.
static DATE_OF_BIRTH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(0[1-9]|1[0-2])/([0-2][0-9]|3[01])/\d{4}$").expect("date pattern")
});

static ZIP_CODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{5}$").expect("zip pattern"));

/// Letters only, 2 to 25 characters.
pub fn is_valid_name(value: &str) -> bool {
    NAME.is_match(value)
}

/// Local part of `+`, `_`, `.`, `-` or alphanumerics at the fixed domain.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL.is_match(value)
}

/// MM/DD/YYYY with month 01-12, day 00-31 and a four-digit year.
pub fn is_valid_date_of_birth(value: &str) -> bool {
    DATE_OF_BIRTH.is_match(value)
}

/// Exactly five digits.
pub fn is_valid_zip_code(value: &str) -> bool {
    ZIP_CODE.is_match(value)
}

/// Test `value` against the rule for `field`.
pub fn is_valid(field: Field, value: &str) -> bool {
    match field {
        Field::FirstName | Field::LastName => is_valid_name(value),
        Field::Email => is_valid_email(value),
        Field::DateOfBirth => is_valid_date_of_birth(value),
        Field::ZipCode => is_valid_zip_code(value),
    }
}

/// Validate a single field, reporting its fixed message on failure.
pub fn validate(field: Field, value: &str) -> ValidationResult {
    if is_valid(field, value) {
        ValidationResult::Valid
    } else {
        ValidationResult::Invalid(vec![FieldError::new(field)])
    }
}
