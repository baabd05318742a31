//! Terminal front end for the registration form.
//!
//! The shell owns the terminal session, keyboard event translation, focus
//! traversal and rendering. Every validation verdict and error message
//! comes from `regform-lib`; nothing here duplicates a rule.

pub mod app;
pub mod error;
pub mod event;
pub mod focus;
pub mod input;
pub mod screen;
pub mod terminal;

pub use app::App;
pub use error::AppError;
