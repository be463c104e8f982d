use thiserror::Error;

/// Error type for delta decoding and fuzzy matching.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiffError {
    /// The pattern does not fit in the matcher's bit vectors
    #[error(
        "pattern is {length} characters long but fuzzy matching supports at most {max_bits} \
         characters"
    )]
    PatternTooLong {
        /// The number of characters in the pattern
        length: usize,
        /// The configured maximum pattern length
        max_bits: usize,
    },

    /// A percent escape in a delta insertion could not be decoded
    #[error("invalid percent escape in delta insertion `{token}`")]
    InvalidEscape {
        /// The insertion text that failed to decode
        token: String,
    },

    /// A delta length was negative or not a number
    #[error("invalid length `{token}` in delta, expected a non-negative number")]
    InvalidLength {
        /// The offending length text
        token: String,
    },

    /// A delta operation was not one of `=`, `-` or `+`
    #[error("invalid operation `{op}` in delta, expected `=`, `-` or `+`")]
    InvalidOperation {
        /// The offending operation character
        op: char,
    },

    /// The delta does not consume exactly the source text
    #[error("delta consumed {consumed} characters but the source text has {expected}")]
    DeltaLengthMismatch {
        /// Characters the delta consumed from the source
        consumed: usize,
        /// Characters the source actually has
        expected: usize,
    },
}
