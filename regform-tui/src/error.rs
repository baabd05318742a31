use thiserror::Error;

/// Errors the terminal shell can hit.
///
/// Validation never fails; the only fallible operations are terminal I/O.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal i/o error: {0}")]
    Io(#[from] std::io::Error),
}
