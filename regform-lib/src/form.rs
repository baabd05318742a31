//! The raw form data and whole-form validation.

use crate::field::Field;
use crate::result::{FieldError, ValidationResult};
use crate::rules;

/// Raw text of the five registration fields.
///
/// Values are kept exactly as typed: no trimming, no case-folding. The
/// struct has no identity or lifecycle beyond the open form; validation
/// recomputes from scratch on every call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub date_of_birth: String,
    pub zip_code: String,
}

impl RegistrationInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current text of a field.
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::DateOfBirth => &self.date_of_birth,
            Field::ZipCode => &self.zip_code,
        }
    }

    /// Replace the text of a field.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::FirstName => self.first_name = value,
            Field::LastName => self.last_name = value,
            Field::Email => self.email = value,
            Field::DateOfBirth => self.date_of_birth = value,
            Field::ZipCode => self.zip_code = value,
        }
    }

    /// Validate a single field against its rule.
    pub fn validate_field(&self, field: Field) -> ValidationResult {
        rules::validate(field, self.value(field))
    }

    /// Validate every field, collecting errors in form order.
    pub fn validate(&self) -> ValidationResult {
        let errors: Vec<FieldError> = Field::ALL
            .into_iter()
            .filter(|&field| !rules::is_valid(field, self.value(field)))
            .map(FieldError::new)
            .collect();

        if errors.is_empty() {
            ValidationResult::Valid
        } else {
            ValidationResult::Invalid(errors)
        }
    }

    /// True only when every field passes its rule. Nothing is cached.
    pub fn can_submit(&self) -> bool {
        Field::ALL
            .into_iter()
            .all(|field| rules::is_valid(field, self.value(field)))
    }
}
