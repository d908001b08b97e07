//! Error types for arithmetic coding.

use thiserror::Error;

/// Error variants for encode and decode calls.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The requested context length is zero or exceeds the supported maximum.
    #[error("context length {given} is outside the supported range 1..={max} bits")]
    InvalidContextLength {
        /// The context length the caller asked for.
        given: usize,
        /// The largest supported context length in bits.
        max: usize,
    },

    /// The requested bit length exceeds what the input buffer can supply.
    #[error("bit length {given} exceeds the {available} bits available in the input")]
    BitLengthOutOfRange {
        /// The bit length the caller asked for.
        given: usize,
        /// The number of bits the input buffer holds.
        available: usize,
    },
}

/// A specialized Result type for arithmetic coding operations.
pub type Result<T> = std::result::Result<T, Error>;
