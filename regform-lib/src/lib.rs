//! Validation rules for the registration form.
//!
//! Five fields, one fixed rule each, and a whole-form aggregate. Every
//! function here is a pure, total function of its string input: no I/O,
//! no state, no panics. The UI layer decides *when* to validate (on
//! focus loss, on change, on submit); this crate only decides *what* is
//! valid.
//!
//! # Example
//!
//! ```
//! use regform_lib::{validate, Field, RegistrationInput};
//!
//! let verdict = validate(Field::ZipCode, "11735");
//! assert!(verdict.is_valid());
//!
//! let mut input = RegistrationInput::new();
//! input.set(Field::ZipCode, "11735");
//! assert!(!input.can_submit()); // the other four fields are still empty
//! ```

pub mod field;
pub mod form;
pub mod result;
pub mod rules;

pub use field::Field;
pub use form::RegistrationInput;
pub use result::{FieldError, ValidationResult};
pub use rules::{
    is_valid, is_valid_date_of_birth, is_valid_email, is_valid_name, is_valid_zip_code, validate,
};
