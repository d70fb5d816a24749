//! Error types shared across the crate.

use thiserror::Error;

/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by the codecs and their byte/text pipeline
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Input that violates a documented precondition, such as an unsupported
    /// error-injection count or a non-binary character in a bit string
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A double error was detected while stream-decoding. The block cannot
    /// be corrected; the caller should request retransmission.
    #[error("uncorrectable double error in block {block}")]
    Uncorrectable {
        /// Zero-based index of the offending block in the stream
        block: usize,
    },
}

impl Error {
    /// Shorthand for building an [`Error::InvalidInput`]
    pub fn invalid(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }
}
