//! Crate error type.

/// Errors returned by generator construction, range draws and the
/// distribution helpers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// An argument is outside the domain of the operation.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// Two slices that must be aligned have different lengths.
    #[error("length mismatch: {0} != {1}")]
    LengthMismatch(usize, usize),
}

/// `Result` alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
