use thiserror::Error;

/// Errors reported by the boundary-processing crates.
///
/// Every operation validates its inputs before writing anything, so an error
/// always means the destination was left untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("sequence handle does not refer to a live sequence")]
    UnknownSequence,

    #[error("sequence handle was invalidated by an arena reset")]
    StaleHandle,

    #[error("empty input: {what}")]
    EmptyInput { what: &'static str },

    #[error("size mismatch: expected {expected}, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: isize, len: usize },

    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}
