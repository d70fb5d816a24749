//! Channel-side transmission state.
//!
//! The codecs themselves are stateless; this module owns the one piece of
//! state the teaching tool needs, a codeword in flight. A [`Transmission`]
//! remembers what was sent and what the receiver currently holds, lets the
//! caller corrupt single bits by hand up to a per-variant cap, and skips
//! random noise injection when the word has already been tampered with.
//! Decoding a transmission produces a trace of every intermediate value in
//! the receive pipeline, which is what the presentation layer renders.

use log::debug;
use rand::Rng;

use crate::codec::extended::{self, ErrorReport};
use crate::codec::{inject, standard, Result};

/// A codeword in flight: the sent word, the received word, and the flip cap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transmission<const N: usize> {
    sent: [u8; N],
    received: [u8; N],
    max_flips: usize,
}

impl<const N: usize> Transmission<N> {
    fn new(sent: [u8; N], max_flips: usize) -> Self {
        Transmission {
            sent,
            received: sent,
            max_flips,
        }
    }

    /// The codeword as it left the encoder
    pub fn sent(&self) -> &[u8; N] {
        &self.sent
    }

    /// The word as the receiver currently sees it
    pub fn received(&self) -> &[u8; N] {
        &self.received
    }

    /// Every index where the received word differs from the sent word.
    ///
    /// Always recomputed as the full diff, never tracked incrementally, so
    /// manual flips that revert earlier ones are accounted for.
    pub fn error_positions(&self) -> Vec<usize> {
        (0..N).filter(|&i| self.received[i] != self.sent[i]).collect()
    }

    /// True when the received word still equals the sent word
    pub fn is_clean(&self) -> bool {
        self.received == self.sent
    }

    /// Toggle one received bit by hand.
    ///
    /// Toggling a bit that is already in error reverts it and is always
    /// allowed. Introducing a new error when the error count has reached
    /// the cap is rejected as a no-op; returns whether the toggle happened.
    pub fn toggle(&mut self, index: usize) -> bool {
        let introduces = self.received[index] == self.sent[index];
        if introduces && self.error_positions().len() >= self.max_flips {
            debug!("flip cap {} reached, ignoring toggle of bit {}", self.max_flips, index);
            return false;
        }
        self.received[index] ^= 1;
        true
    }
}

impl Transmission<7> {
    /// Transmission of a standard (7,4) codeword; at most one flip.
    pub fn standard(sent: [u8; 7]) -> Self {
        Self::new(sent, 1)
    }

    /// Hit the word with random single-bit noise.
    ///
    /// Skipped when the word was already corrupted by hand; the receive
    /// pipeline runs the same either way. Returns the 1-indexed flip
    /// position, or `None` when injection was bypassed.
    pub fn apply_noise<R: Rng>(&mut self, rng: &mut R) -> Option<usize> {
        if !self.is_clean() {
            debug!("manual errors present, skipping random injection");
            return None;
        }
        let (corrupted, position) = inject::inject_single(&self.sent, rng);
        self.received = corrupted;
        Some(position)
    }

    /// Run the receive pipeline on the current received word.
    pub fn decode(&self) -> StandardTrace {
        let syndrome = standard::syndrome(self.received);
        let error_position = standard::error_position(syndrome);
        let corrected = standard::correct(self.received, error_position);
        StandardTrace {
            sent: self.sent,
            received: self.received,
            syndrome,
            error_position,
            corrected,
            decoded: standard::extract_data(corrected),
        }
    }
}

impl Transmission<8> {
    /// Transmission of an extended (8,4) codeword; at most two flips.
    pub fn extended(sent: [u8; 8]) -> Self {
        Self::new(sent, 2)
    }

    /// Hit the word with random noise on `count` distinct bits (1 or 2).
    ///
    /// Skipped when the word was already corrupted by hand, in which case
    /// the returned position list is empty.
    pub fn apply_noise<R: Rng>(&mut self, count: usize, rng: &mut R) -> Result<Vec<usize>> {
        if !self.is_clean() {
            debug!("manual errors present, skipping random injection");
            return Ok(Vec::new());
        }
        let (corrupted, positions) = inject::inject_multiple(&self.sent, count, rng)?;
        self.received = corrupted;
        Ok(positions)
    }

    /// Run the receive pipeline on the current received word.
    ///
    /// A detected double error leaves the word uncorrected and the decoded
    /// data empty; the caller decides how to surface "request
    /// retransmission".
    pub fn decode(&self) -> ExtendedTrace {
        let syndrome = extended::syndrome(self.received);
        let report = extended::classify(syndrome);
        let corrected = extended::correct(self.received, report.position);
        let decoded = report
            .can_correct
            .then(|| extended::extract_data(corrected));
        ExtendedTrace {
            sent: self.sent,
            received: self.received,
            syndrome,
            report,
            corrected,
            decoded,
        }
    }
}

/// Record of one standard-variant block through the receive pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandardTrace {
    /// Codeword as sent
    pub sent: [u8; 7],
    /// Word as received, before correction
    pub received: [u8; 7],
    /// Syndrome `[s1, s2, s4]`
    pub syndrome: [u8; 3],
    /// 1-indexed error position, 0 for none
    pub error_position: usize,
    /// Received word after correction
    pub corrected: [u8; 7],
    /// Data bits extracted from the corrected word
    pub decoded: [u8; 4],
}

/// Record of one extended-variant block through the receive pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtendedTrace {
    /// Codeword as sent
    pub sent: [u8; 8],
    /// Word as received, before correction
    pub received: [u8; 8],
    /// Syndrome `[s1, s2, s4, p0check]`
    pub syndrome: [u8; 4],
    /// Classification of the corruption
    pub report: ErrorReport,
    /// Received word after correction; unchanged for none/double
    pub corrected: [u8; 8],
    /// Extracted data, or `None` when the block was uncorrectable
    pub decoded: Option<[u8; 4]>,
}

/// Encode one nibble, optionally hit it with random noise, and decode.
pub fn transmit<R: Rng>(data: [u8; 4], noise: bool, rng: &mut R) -> StandardTrace {
    let mut tx = Transmission::standard(standard::encode(data));
    if noise {
        tx.apply_noise(rng);
    }
    tx.decode()
}

/// Encode one nibble, flip `errors` random bits (0 to 2), and decode.
pub fn transmit_extended<R: Rng>(
    data: [u8; 4],
    errors: usize,
    rng: &mut R,
) -> Result<ExtendedTrace> {
    let mut tx = Transmission::extended(extended::encode(data));
    if errors > 0 {
        tx.apply_noise(errors, rng)?;
    }
    Ok(tx.decode())
}
