//! Hamming codec implementations.
//!
//! This module groups the two codec variants and the machinery around them:
//! - Standard Hamming(7,4): single error correction
//! - Extended Hamming(8,4): single error correction, double error detection
//! - Mod-2 matrix arithmetic shared by both
//! - Random error injection for channel-noise simulation
//! - Channel-side transmission state and per-block pipeline traces
//! - Byte- and text-stream encoding on top of the fixed-size codecs
//!
//! # Examples
//!
//! ```rust
//! use hamming_secded::codec::standard;
//!
//! let codeword = standard::encode([1, 0, 1, 1]);
//! assert_eq!(codeword, [0, 1, 1, 0, 0, 1, 1]);
//! assert_eq!(standard::syndrome(codeword), [0, 0, 0]);
//! ```

use crate::error::Error;

/// Result type for codec operations
pub type Result<T> = std::result::Result<T, Error>;

/// Byte-stream interface shared by the codec variants
pub trait BlockCode {
    /// Encode data block-wise, adding parity bits
    fn encode(&self, data: &[u8]) -> Result<Vec<u8>>;

    /// Decode data block-wise, correcting errors where possible
    fn decode(&self, data: &[u8]) -> Result<Vec<u8>>;
}

/// Mod-2 vector/matrix arithmetic
pub mod matrix;

/// Standard Hamming(7,4) code
pub mod standard;

/// Extended Hamming(8,4) SECDED code
pub mod extended;

/// Random bit-flip injection
pub mod inject;

/// Channel-side transmission state
pub mod channel;

/// Byte- and text-stream pipeline
pub mod stream;

pub use channel::{ExtendedTrace, StandardTrace, Transmission};
pub use extended::{ErrorKind, ErrorReport};
pub use inject::{inject_multiple, inject_single, noise_rng};
pub use stream::{ExtendedCode, StandardCode};
