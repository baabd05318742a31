use regform_lib::{Field, RegistrationInput, ValidationResult};

fn valid_value(field: Field) -> &'static str {
    match field {
        Field::FirstName => "John",
        Field::LastName => "Smith",
        Field::Email => "jsmith@farmingdale.edu",
        Field::DateOfBirth => "04/12/2001",
        Field::ZipCode => "11735",
    }
}

fn invalid_value(field: Field) -> &'static str {
    match field {
        Field::FirstName => "J",
        Field::LastName => "Sm1th",
        Field::Email => "jsmith@other.edu",
        Field::DateOfBirth => "13/12/2001",
        Field::ZipCode => "117",
    }
}

/// Fill a form from a bitmask: bit `i` set means field `i` gets a valid value.
fn filled(mask: u32) -> RegistrationInput {
    let mut input = RegistrationInput::new();
    for (i, field) in Field::ALL.into_iter().enumerate() {
        let value = if mask & (1 << i) != 0 {
            valid_value(field)
        } else {
            invalid_value(field)
        };
        input.set(field, value);
    }
    input
}

#[test]
fn test_can_submit_requires_all_five() {
    for mask in 0..32u32 {
        let input = filled(mask);
        assert_eq!(input.can_submit(), mask == 0b11111, "mask {mask:05b}");
    }
}

#[test]
fn test_validate_collects_errors_in_form_order() {
    let input = filled(0b00100); // only the email is valid

    let ValidationResult::Invalid(errors) = input.validate() else {
        panic!("expected an invalid result");
    };
    let fields: Vec<Field> = errors.iter().map(|error| error.field).collect();
    assert_eq!(
        fields,
        vec![
            Field::FirstName,
            Field::LastName,
            Field::DateOfBirth,
            Field::ZipCode,
        ]
    );
}

#[test]
fn test_validate_all_valid() {
    let input = filled(0b11111);
    assert!(input.validate().is_valid());
    assert!(input.can_submit());
}

#[test]
fn test_empty_form_cannot_submit() {
    let input = RegistrationInput::new();
    assert!(!input.can_submit());
    assert_eq!(input.validate().errors().len(), 5);
}

#[test]
fn test_set_and_value_round_trip() {
    let mut input = RegistrationInput::new();
    for field in Field::ALL {
        input.set(field, format!("value for {field}"));
    }
    for field in Field::ALL {
        assert_eq!(input.value(field), format!("value for {field}"));
    }
}

#[test]
fn test_values_are_not_normalized() {
    let mut input = filled(0b11111);
    input.set(Field::FirstName, " John");
    assert_eq!(input.value(Field::FirstName), " John");
    // The leading space is kept as typed, so the name rule now fails
    assert!(!input.can_submit());
}

#[test]
fn test_validate_field_checks_one_rule() {
    let mut input = RegistrationInput::new();
    input.set(Field::ZipCode, "11735");

    assert!(input.validate_field(Field::ZipCode).is_valid());
    assert!(input.validate_field(Field::Email).is_invalid());
}

#[test]
fn test_validation_has_no_hidden_state() {
    let input = filled(0b11111);
    assert!(input.can_submit());
    assert!(input.can_submit());
    assert_eq!(input.validate(), input.validate());
}
