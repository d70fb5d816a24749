//! Byte- and text-stream pipeline over the fixed-size codecs.
//!
//! The codecs in [`standard`](crate::codec::standard) and
//! [`extended`](crate::codec::extended) work on one 4-bit block at a time.
//! This module feeds them whole inputs: text split into nibbles the way the
//! teaching tool displays it (high nibble, then low nibble, per byte),
//! binary strings typed by hand, and arbitrary byte buffers encoded
//! block-wise into a packed bit stream.
//!
//! Stream decoding corrects single-bit errors per block as it goes. In the
//! extended stream a detected double error aborts the decode with
//! [`Error::Uncorrectable`], since there is no per-block report channel to
//! hand the classification to.

use bitvec::prelude::*;
use bitvec::view::BitView;
use log::trace;

use crate::codec::extended::ErrorKind;
use crate::codec::{extended, standard, BlockCode, Result};
use crate::error::Error;

/// Split text into 4-bit blocks: high nibble, then low nibble, per byte.
pub fn text_to_nibbles(text: &str) -> Vec<[u8; 4]> {
    let mut nibbles = Vec::with_capacity(text.len() * 2);
    for byte in text.bytes() {
        nibbles.push(nibble_bits(byte >> 4));
        nibbles.push(nibble_bits(byte & 0x0F));
    }
    nibbles
}

/// Reassemble text from (high, low) nibble pairs.
pub fn nibbles_to_text(nibbles: &[[u8; 4]]) -> Result<String> {
    if nibbles.len() % 2 != 0 {
        return Err(Error::invalid(format!(
            "expected an even number of nibbles, got {}",
            nibbles.len()
        )));
    }

    let mut text = String::with_capacity(nibbles.len() / 2);
    for pair in nibbles.chunks_exact(2) {
        let byte = (nibble_value(&pair[0]) << 4) | nibble_value(&pair[1]);
        text.push(char::from(byte));
    }
    Ok(text)
}

/// Uppercase hex digit for one nibble
pub fn nibble_to_hex_char(nibble: [u8; 4]) -> char {
    b"0123456789ABCDEF"[nibble_value(&nibble) as usize] as char
}

/// Parse a hand-typed binary string into bits.
///
/// Only '0' and '1' are accepted; anything else is an input error.
pub fn parse_bits(input: &str) -> Result<Vec<u8>> {
    input
        .chars()
        .map(|c| match c {
            '0' => Ok(0),
            '1' => Ok(1),
            _ => Err(Error::invalid(format!("invalid binary digit '{}'", c))),
        })
        .collect()
}

/// Group bits into 4-bit blocks, zero-padding the tail.
pub fn chunk_nibbles(bits: &[u8]) -> Vec<[u8; 4]> {
    bits.chunks(4)
        .map(|chunk| {
            let mut block = [0u8; 4];
            block[..chunk.len()].copy_from_slice(chunk);
            block
        })
        .collect()
}

fn nibble_bits(value: u8) -> [u8; 4] {
    [
        (value >> 3) & 1,
        (value >> 2) & 1,
        (value >> 1) & 1,
        value & 1,
    ]
}

fn nibble_value(bits: &[u8; 4]) -> u8 {
    bits.iter().fold(0, |acc, &bit| (acc << 1) | bit)
}

/// Encode a byte buffer block-wise with Hamming(7,4).
///
/// Each 4-bit block of the input becomes 7 bits of output; the final
/// partial block, if any, is zero-padded.
pub fn encode_bytes(data: &[u8]) -> Vec<u8> {
    if data.is_empty() {
        return Vec::new();
    }

    let bits = data.view_bits::<Msb0>();
    let mut encoded = BitVec::<u8, Msb0>::with_capacity(bits.len() / 4 * 7 + 7);

    for chunk in bits.chunks(4) {
        let mut block = [0u8; 4];
        for (i, slot) in block.iter_mut().enumerate() {
            if i < chunk.len() {
                *slot = u8::from(chunk[i]);
            }
        }
        for bit in standard::encode(block) {
            encoded.push(bit == 1);
        }
    }

    encoded.into_vec()
}

/// Decode a Hamming(7,4) bit stream back into bytes.
///
/// Single-bit errors are corrected per block. The standard code cannot
/// tell a double error from a single one, so heavier corruption decodes
/// into wrong data silently; use the extended stream when that matters.
pub fn decode_bytes(encoded: &[u8]) -> Vec<u8> {
    let bits = encoded.view_bits::<Msb0>();
    let blocks = bits.len() / 7;
    let mut decoded = BitVec::<u8, Msb0>::with_capacity(blocks * 4);

    for block_idx in 0..blocks {
        let view = &bits[block_idx * 7..block_idx * 7 + 7];
        let mut word = [0u8; 7];
        for (i, slot) in word.iter_mut().enumerate() {
            *slot = u8::from(view[i]);
        }

        let position = standard::error_position(standard::syndrome(word));
        if position != 0 {
            trace!("corrected bit {} in block {}", position, block_idx);
        }
        let corrected = standard::correct(word, position);
        for bit in standard::extract_data(corrected) {
            decoded.push(bit == 1);
        }
    }

    decoded.into_vec()
}

/// Encode a byte buffer block-wise with extended Hamming(8,4).
pub fn encode_bytes_extended(data: &[u8]) -> Vec<u8> {
    if data.is_empty() {
        return Vec::new();
    }

    let bits = data.view_bits::<Msb0>();
    let mut encoded = BitVec::<u8, Msb0>::with_capacity(bits.len() * 2);

    for chunk in bits.chunks(4) {
        let mut block = [0u8; 4];
        for (i, slot) in block.iter_mut().enumerate() {
            if i < chunk.len() {
                *slot = u8::from(chunk[i]);
            }
        }
        for bit in extended::encode(block) {
            encoded.push(bit == 1);
        }
    }

    encoded.into_vec()
}

/// Decode an extended Hamming(8,4) bit stream back into bytes.
///
/// Single-bit errors are corrected per block; a detected double error
/// aborts with [`Error::Uncorrectable`] naming the offending block.
pub fn decode_bytes_extended(encoded: &[u8]) -> Result<Vec<u8>> {
    let bits = encoded.view_bits::<Msb0>();
    let blocks = bits.len() / 8;
    let mut decoded = BitVec::<u8, Msb0>::with_capacity(blocks * 4);

    for block_idx in 0..blocks {
        let view = &bits[block_idx * 8..block_idx * 8 + 8];
        let mut word = [0u8; 8];
        for (i, slot) in word.iter_mut().enumerate() {
            *slot = u8::from(view[i]);
        }

        let report = extended::classify(extended::syndrome(word));
        if report.kind == ErrorKind::Double {
            return Err(Error::Uncorrectable { block: block_idx });
        }
        if report.kind == ErrorKind::Single {
            trace!(
                "corrected bit {:?} in block {}",
                report.position,
                block_idx
            );
        }
        let corrected = extended::correct(word, report.position);
        for bit in extended::extract_data(corrected) {
            decoded.push(bit == 1);
        }
    }

    Ok(decoded.into_vec())
}

/// Standard Hamming(7,4) byte-stream codec
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardCode;

impl BlockCode for StandardCode {
    fn encode(&self, data: &[u8]) -> Result<Vec<u8>> {
        Ok(encode_bytes(data))
    }

    fn decode(&self, data: &[u8]) -> Result<Vec<u8>> {
        Ok(decode_bytes(data))
    }
}

/// Extended Hamming(8,4) byte-stream codec
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtendedCode;

impl BlockCode for ExtendedCode {
    fn encode(&self, data: &[u8]) -> Result<Vec<u8>> {
        Ok(encode_bytes_extended(data))
    }

    fn decode(&self, data: &[u8]) -> Result<Vec<u8>> {
        decode_bytes_extended(data)
    }
}
