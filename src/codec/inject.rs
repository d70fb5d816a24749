//! Channel-noise simulation: random bit-flip injection.
//!
//! The injectors take the random source as a parameter so that noise is
//! reproducible in tests; [`noise_rng`] builds one from an optional seed.
//! Reported positions follow each variant's convention: 1-indexed for the
//! standard 7-bit word, 0-indexed for the extended 8-bit word.

use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::codec::Result;
use crate::error::Error;

/// Build the RNG used for noise injection.
///
/// `Some(seed)` gives a reproducible sequence for tests; `None` seeds from
/// operating-system entropy.
pub fn noise_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    }
}

/// Flip one uniformly random bit of a 7-bit codeword.
///
/// # Returns
///
/// The corrupted word and the 1-indexed position (1-7) of the flip
pub fn inject_single<R: Rng>(codeword: &[u8; 7], rng: &mut R) -> ([u8; 7], usize) {
    let position = rng.gen_range(1..=7);
    let mut corrupted = *codeword;
    corrupted[position - 1] ^= 1;
    debug!("injected single error at position {}", position);
    (corrupted, position)
}

/// Flip `count` distinct uniformly random bits of an 8-bit codeword.
///
/// Positions are 0-indexed and drawn without replacement, so the flips can
/// never land on the same bit twice.
///
/// # Arguments
///
/// * `codeword` - the clean 8-bit codeword
/// * `count` - number of bits to flip, 1 or 2
/// * `rng` - random source
///
/// # Returns
///
/// The corrupted word and the flipped positions, or an error for an
/// unsupported count
pub fn inject_multiple<R: Rng>(
    codeword: &[u8; 8],
    count: usize,
    rng: &mut R,
) -> Result<([u8; 8], Vec<usize>)> {
    if count == 0 || count > 2 {
        return Err(Error::invalid(format!(
            "error count must be 1 or 2, got {}",
            count
        )));
    }

    let all: Vec<usize> = (0..8).collect();
    let positions: Vec<usize> = all.choose_multiple(rng, count).copied().collect();

    let mut corrupted = *codeword;
    for &position in &positions {
        corrupted[position] ^= 1;
    }
    debug!("injected {} error(s) at positions {:?}", count, positions);
    Ok((corrupted, positions))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{extended, standard};

    #[test]
    fn test_noise_rng_is_reproducible() {
        let codeword = standard::encode([1, 0, 1, 1]);
        let (first, first_pos) = inject_single(&codeword, &mut noise_rng(Some(42)));
        let (second, second_pos) = inject_single(&codeword, &mut noise_rng(Some(42)));
        assert_eq!(first, second);
        assert_eq!(first_pos, second_pos);
    }

    #[test]
    fn test_inject_single_flips_exactly_one_bit() {
        let codeword = standard::encode([0, 1, 1, 0]);
        for seed in 0..50 {
            let (corrupted, position) = inject_single(&codeword, &mut noise_rng(Some(seed)));
            assert!((1..=7).contains(&position));

            let diff: Vec<usize> = (0..7).filter(|&i| corrupted[i] != codeword[i]).collect();
            assert_eq!(diff, vec![position - 1]);
        }
    }

    #[test]
    fn test_injected_error_is_correctable() {
        let codeword = standard::encode([1, 1, 0, 0]);
        let (corrupted, position) = inject_single(&codeword, &mut noise_rng(Some(7)));

        let detected = standard::error_position(standard::syndrome(corrupted));
        assert_eq!(detected, position);
        assert_eq!(standard::correct(corrupted, detected), codeword);
    }

    #[test]
    fn test_inject_multiple_draws_distinct_positions() {
        let codeword = extended::encode([1, 0, 0, 1]);
        for seed in 0..100 {
            let (corrupted, positions) =
                inject_multiple(&codeword, 2, &mut noise_rng(Some(seed))).unwrap();
            assert_eq!(positions.len(), 2);
            assert_ne!(positions[0], positions[1]);
            assert!(positions.iter().all(|&p| p < 8));

            let diff_count = (0..8).filter(|&i| corrupted[i] != codeword[i]).count();
            assert_eq!(diff_count, 2);
        }
    }

    #[test]
    fn test_inject_multiple_single_flip() {
        let codeword = extended::encode([0, 0, 1, 1]);
        let (corrupted, positions) =
            inject_multiple(&codeword, 1, &mut noise_rng(Some(3))).unwrap();
        assert_eq!(positions.len(), 1);

        let diff_count = (0..8).filter(|&i| corrupted[i] != codeword[i]).count();
        assert_eq!(diff_count, 1);
    }

    #[test]
    fn test_inject_multiple_rejects_bad_counts() {
        let codeword = extended::encode([0, 0, 0, 0]);
        assert!(inject_multiple(&codeword, 0, &mut noise_rng(Some(1))).is_err());
        assert!(inject_multiple(&codeword, 3, &mut noise_rng(Some(1))).is_err());
    }
}
