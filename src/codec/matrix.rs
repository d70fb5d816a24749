//! Mod-2 matrix arithmetic over fixed-size bit vectors.
//!
//! Every encode and syndrome operation in the crate is one call to
//! [`multiply`]; bits are `u8` values restricted to 0 and 1, and dimension
//! agreement is enforced at compile time by const generics.

/// Multiply an `R`x`C` binary matrix by a `C`-element bit vector mod 2.
///
/// Each output bit is the XOR fold of the element-wise AND of a matrix row
/// and the vector. There are no fallible paths; a dimension mismatch is a
/// type error.
pub fn multiply<const R: usize, const C: usize>(
    matrix: &[[u8; C]; R],
    vector: &[u8; C],
) -> [u8; R] {
    let mut result = [0u8; R];
    for (out, row) in result.iter_mut().zip(matrix.iter()) {
        let mut acc = 0u8;
        for (m, v) in row.iter().zip(vector.iter()) {
            acc ^= m & v;
        }
        *out = acc;
    }
    result
}

/// XOR fold of a bit vector: the overall parity of its set bits.
pub fn parity<const N: usize>(vector: &[u8; N]) -> u8 {
    vector.iter().fold(0, |acc, bit| acc ^ bit)
}
