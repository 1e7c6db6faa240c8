//! Uniform random integers without modulo bias.
//!
//! Values are built from the fewest random bytes that can cover the target
//! range. Byte strings at or above the largest multiple of the range that fits
//! in those bytes are rejected and redrawn, so every value in the range is
//! exactly equally likely.

use rand::TryCryptoRng;

use crate::error::{SamplingError, SamplingResult};

/// Widest byte string ever read for a single value.
const MAX_BYTES: usize = 8;

/// Number of random bytes needed to sample from `range` values.
///
/// This is `ceil(log2(range) / 8)`, but never less than 1.
#[must_use]
pub const fn byte_width(range: u128) -> usize {
    let bits = u128::BITS - (range - 1).leading_zeros();
    if bits == 0 { 1 } else { bits.div_ceil(8) as usize }
}

/// Largest multiple of `range` representable in `width` bytes.
///
/// Drawn byte strings must be strictly below this bound to be accepted.
#[must_use]
pub const fn rejection_bound(range: u128, width: usize) -> u128 {
    let space = 1u128 << (8 * width);
    (space / range) * range
}

/// Draw a uniform integer in `[min, max]`.
///
/// # Errors
///
/// Returns [`SamplingError::InvalidRange`] if `max < min`, or
/// [`SamplingError::Entropy`] if the entropy source fails.
pub fn generate_uniform<R: TryCryptoRng>(rng: &mut R, min: i64, max: i64) -> SamplingResult<i64> {
    if max < min {
        return Err(SamplingError::InvalidRange { min, max });
    }

    let range = u128::from(min.abs_diff(max)) + 1;
    let offset = uniform_below(rng, range)?;

    // offset < range <= 2^64
    #[allow(clippy::cast_possible_truncation)]
    Ok(min.wrapping_add_unsigned(offset as u64))
}

/// Draw a uniform index in `[0, upper]`.
pub(crate) fn uniform_index<R: TryCryptoRng>(rng: &mut R, upper: usize) -> SamplingResult<usize> {
    let offset = uniform_below(rng, upper as u128 + 1)?;

    // offset <= upper
    #[allow(clippy::cast_possible_truncation)]
    Ok(offset as usize)
}

/// Draw a uniform value in `[0, range)`. `range` must be in `1..=2^64`.
///
/// The loop has no iteration cap: each attempt is rejected with probability
/// below one half, so it terminates with probability 1.
fn uniform_below<R: TryCryptoRng>(rng: &mut R, range: u128) -> SamplingResult<u128> {
    debug_assert!(range >= 1 && range <= 1u128 << 64);

    let width = byte_width(range);
    let bound = rejection_bound(range, width);
    let mut buf = [0u8; MAX_BYTES];
    let bytes = &mut buf[..width];

    loop {
        rng.try_fill_bytes(bytes)
            .map_err(|e| SamplingError::Entropy(e.to_string()))?;

        let value = bytes
            .iter()
            .fold(0u128, |acc, &byte| (acc << 8) | u128::from(byte));

        if value < bound {
            return Ok(value % range);
        }
    }
}
