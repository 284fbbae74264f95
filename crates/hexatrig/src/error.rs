use thiserror::Error;

/// Errors reported by the strict codec functions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The instance id needs more than six base-36 digits.
    #[error("instance id {id} does not fit in a 6 digit field (max {max})", max = crate::codec::MAX_INSTANCE_ID)]
    OutOfRange { id: u64 },

    /// The hostname is shorter than the encoded field.
    #[error("hostname has {len} characters, expected at least 6")]
    TooShort { len: usize },

    /// A suffix character is outside `0-9A-Z`.
    #[error("invalid base-36 digit '{digit}' at suffix position {position}")]
    InvalidDigit { digit: char, position: usize },
}
