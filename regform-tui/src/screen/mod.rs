//! The two screens of the program.

mod form;
mod welcome;

pub use form::{FormOutcome, FormScreen, SUBMIT_ID};
pub use welcome::WelcomeScreen;
