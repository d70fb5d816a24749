//! Standard Hamming(7,4) error correction code.
//!
//! Hamming codes are a family of linear error-correcting codes developed by
//! Richard Hamming in 1950. The (7,4) variant encodes 4 data bits into 7
//! bits by adding 3 parity bits, and can correct any single-bit error in a
//! codeword. Parity bits sit at the classical power-of-two positions, so a
//! nonzero syndrome reads directly as the 1-indexed position of the error.
//!
//! This implementation provides:
//! - Encoding via a fixed 7x4 generator matrix
//! - Syndrome computation via a fixed 3x7 parity-check matrix
//! - Error-position lookup, single-bit correction, and data extraction
//!
//! The code has no double-error detection: any 2-bit error pattern decodes
//! as a different single-bit error (or, rarely, as none). That is an
//! inherent limitation of the code, not of this implementation; the
//! extended variant in [`crate::codec::extended`] closes the gap.

use crate::codec::matrix;

/// Generator matrix G (7x4).
///
/// Row `i` defines codeword bit `i` as the mod-2 sum of the data bits it
/// depends on. Codeword layout: `[p1, p2, d1, p4, d2, d3, d4]`.
pub const GENERATOR: [[u8; 4]; 7] = [
    [1, 1, 0, 1], // c1 = p1 = d1 + d2 + d4
    [1, 0, 1, 1], // c2 = p2 = d1 + d3 + d4
    [1, 0, 0, 0], // c3 = d1
    [0, 1, 1, 1], // c4 = p4 = d2 + d3 + d4
    [0, 1, 0, 0], // c5 = d2
    [0, 0, 1, 0], // c6 = d3
    [0, 0, 0, 1], // c7 = d4
];

/// Parity-check matrix H (3x7).
///
/// Row `k` is 1 at codeword position `p` iff bit `k` (weight 1, 2, 4) is
/// set in the binary representation of `p` (1-indexed). A received word
/// multiplied by H yields the syndrome `[s1, s2, s4]`.
pub const PARITY_CHECK: [[u8; 7]; 3] = [
    [1, 0, 1, 0, 1, 0, 1], // s1: positions 1, 3, 5, 7
    [0, 1, 1, 0, 0, 1, 1], // s2: positions 2, 3, 6, 7
    [0, 0, 0, 1, 1, 1, 1], // s4: positions 4, 5, 6, 7
];

/// Encode 4 data bits into a 7-bit Hamming codeword.
///
/// # Arguments
///
/// * `data` - data bits `[d1, d2, d3, d4]`
///
/// # Returns
///
/// The codeword `[p1, p2, d1, p4, d2, d3, d4]`
pub fn encode(data: [u8; 4]) -> [u8; 7] {
    matrix::multiply(&GENERATOR, &data)
}

/// Compute the syndrome `[s1, s2, s4]` of a received 7-bit word.
///
/// The syndrome is all zero iff the word is a valid codeword.
pub fn syndrome(received: [u8; 7]) -> [u8; 3] {
    matrix::multiply(&PARITY_CHECK, &received)
}

/// Decode a syndrome into a 1-indexed error position.
///
/// Reads the syndrome as an unsigned binary number with `s1` as the least
/// significant bit: `s1 + 2*s2 + 4*s4`. Returns 0 for "no error",
/// 1 through 7 otherwise.
pub fn error_position(syndrome: [u8; 3]) -> usize {
    let [s1, s2, s4] = syndrome;
    (s1 + 2 * s2 + 4 * s4) as usize
}

/// Flip the bit at a 1-indexed error position.
///
/// Position 0 means "no error" and returns the word unchanged. The result
/// of [`error_position`] is trusted; correctness is not re-verified here.
pub fn correct(received: [u8; 7], position: usize) -> [u8; 7] {
    let mut corrected = received;
    if position > 0 {
        corrected[position - 1] ^= 1;
    }
    corrected
}

/// Extract the 4 data bits from a 7-bit codeword.
///
/// A pure projection of the non-parity positions {2, 4, 5, 6} (0-indexed).
pub fn extract_data(codeword: [u8; 7]) -> [u8; 4] {
    [codeword[2], codeword[4], codeword[5], codeword[6]]
}

#[cfg(test)]
mod tests {
    use super::*;

    /// All 16 possible data nibbles
    fn all_data_vectors() -> Vec<[u8; 4]> {
        (0..16u8)
            .map(|v| [(v >> 3) & 1, (v >> 2) & 1, (v >> 1) & 1, v & 1])
            .collect()
    }

    #[test]
    fn test_encode_known_vectors() {
        assert_eq!(encode([1, 0, 1, 1]), [0, 1, 1, 0, 0, 1, 1]);
        assert_eq!(encode([0, 1, 0, 0]), [1, 0, 0, 1, 1, 0, 0]);
        assert_eq!(encode([1, 1, 1, 1]), [1, 1, 1, 1, 1, 1, 1]);
        assert_eq!(encode([0, 0, 0, 0]), [0, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_round_trip_all_data_vectors() {
        for data in all_data_vectors() {
            assert_eq!(extract_data(encode(data)), data);
        }
    }

    #[test]
    fn test_zero_syndrome_on_clean_codewords() {
        for data in all_data_vectors() {
            assert_eq!(syndrome(encode(data)), [0, 0, 0]);
        }
    }

    #[test]
    fn test_error_position_covers_all_syndromes() {
        assert_eq!(error_position([0, 0, 0]), 0);
        assert_eq!(error_position([1, 0, 0]), 1);
        assert_eq!(error_position([0, 1, 0]), 2);
        assert_eq!(error_position([1, 1, 0]), 3);
        assert_eq!(error_position([0, 0, 1]), 4);
        assert_eq!(error_position([1, 0, 1]), 5);
        assert_eq!(error_position([0, 1, 1]), 6);
        assert_eq!(error_position([1, 1, 1]), 7);
    }

    #[test]
    fn test_single_error_scenario() {
        // Data [1,0,1,1], bit c5 corrupted in transit
        let codeword = encode([1, 0, 1, 1]);
        let mut received = codeword;
        received[4] ^= 1;
        assert_eq!(received, [0, 1, 1, 0, 1, 1, 1]);

        let s = syndrome(received);
        assert_eq!(s, [1, 0, 1]);
        let position = error_position(s);
        assert_eq!(position, 5);

        let corrected = correct(received, position);
        assert_eq!(corrected, codeword);
        assert_eq!(extract_data(corrected), [1, 0, 1, 1]);
    }

    #[test]
    fn test_single_error_sweep() {
        // Every data vector, every bit position: one flip is always repaired
        for data in all_data_vectors() {
            let codeword = encode(data);
            for bit in 0..7 {
                let mut received = codeword;
                received[bit] ^= 1;

                let position = error_position(syndrome(received));
                assert_eq!(position, bit + 1);

                let corrected = correct(received, position);
                assert_eq!(corrected, codeword);
                assert_eq!(extract_data(corrected), data);
            }
        }
    }

    #[test]
    fn test_correct_is_noop_without_error() {
        let received = encode([0, 1, 1, 0]);
        assert_eq!(correct(received, 0), received);
    }

    #[test]
    fn test_double_error_masquerades_as_single() {
        // Inherent limitation of the (7,4) code: two flips produce the
        // syndrome of some other single position, and "correction" lands on
        // the wrong codeword. The extended variant exists to detect this.
        let codeword = encode([1, 0, 1, 1]);
        let mut received = codeword;
        received[0] ^= 1;
        received[1] ^= 1;

        let position = error_position(syndrome(received));
        assert_eq!(position, 3); // 1 XOR 2, neither of the real errors

        let corrected = correct(received, position);
        assert_ne!(corrected, codeword);
        assert_eq!(syndrome(corrected), [0, 0, 0]); // valid, but wrong
    }
}
