//! Hamming(7,4) and extended Hamming(8,4) SECDED error-correcting codecs.
//!
//! This crate implements the encode/decode engine behind an interactive
//! teaching tool for linear block codes: encoding 4 data bits into a 7-bit
//! (single error correction) or 8-bit (single error correction, double error
//! detection) codeword, computing syndromes from a possibly corrupted
//! received word, classifying the corruption, and reconstructing the
//! original data. A channel layer simulates transmission noise with random
//! or hand-picked bit flips, and a stream layer runs whole byte buffers and
//! text through the codecs block by block.
//!
//! All core operations are pure functions over fixed-size bit arrays; the
//! only state in the crate is the caller-owned [`codec::channel::Transmission`]
//! value that models a codeword in flight.

pub mod codec;
pub mod error;

pub use codec::{channel, extended, inject, matrix, standard, stream};
pub use error::{Error, Result};
