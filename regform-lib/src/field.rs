//! Field identity for the registration form.

use std::fmt;

/// One of the five registration fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    DateOfBirth,
    ZipCode,
}

impl Field {
    /// All fields in visual and tab order.
    pub const ALL: [Self; 5] = [
        Self::FirstName,
        Self::LastName,
        Self::Email,
        Self::DateOfBirth,
        Self::ZipCode,
    ];

    /// Display label shown next to the input.
    pub fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First Name:",
            Self::LastName => "Last Name:",
            Self::Email => "Email:",
            Self::DateOfBirth => "Date of Birth (MM/DD/YYYY):",
            Self::ZipCode => "Zip Code:",
        }
    }

    /// Fixed message shown when the field fails validation.
    pub fn error_message(self) -> &'static str {
        match self {
            Self::FirstName => "Invalid First Name",
            Self::LastName => "Invalid Last Name",
            Self::Email => "Invalid Email",
            Self::DateOfBirth => "Invalid Date of Birth",
            Self::ZipCode => "Invalid Zip Code",
        }
    }

    /// Stable control id (for focusing).
    pub fn id(self) -> &'static str {
        match self {
            Self::FirstName => "first-name",
            Self::LastName => "last-name",
            Self::Email => "email",
            Self::DateOfBirth => "date-of-birth",
            Self::ZipCode => "zip-code",
        }
    }

    /// Look a field up by its control id.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.id() == id)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
