//! Distinct number draws.

use std::collections::BTreeSet;

use rand::TryCryptoRng;

use super::uniform::uniform_index;
use crate::domain::DrawRequest;
use crate::error::SamplingResult;

/// Numbers in `[start, end]` that are not excluded, ascending.
#[must_use]
pub fn candidate_pool(start: i64, end: i64, exclude: &BTreeSet<i64>) -> Vec<i64> {
    (start..=end).filter(|n| !exclude.contains(n)).collect()
}

/// Partial Fisher–Yates shuffle of the tail of `items`.
///
/// Afterwards the last `amount` elements are a uniformly random selection of
/// `items` in uniformly random order; that tail is returned. `amount` is
/// clamped to `items.len()`. Costs `amount` uniform draws and swaps.
///
/// # Errors
///
/// Returns an error if the entropy source fails.
pub fn partial_shuffle<'a, R, T>(
    rng: &mut R,
    items: &'a mut [T],
    amount: usize,
) -> SamplingResult<&'a mut [T]>
where
    R: TryCryptoRng,
{
    let len = items.len();
    let first = len - amount.min(len);

    for i in (first..len).rev() {
        let j = uniform_index(rng, i)?;
        items.swap(i, j);
    }

    Ok(&mut items[first..])
}

/// Draw `request.count()` distinct numbers from the pool, ascending.
///
/// The request must come from [`super::validate`]; a count larger than the
/// pool is a caller bug and yields the whole pool.
///
/// # Errors
///
/// Returns an error if the entropy source fails.
pub fn draw<R: TryCryptoRng>(rng: &mut R, request: &DrawRequest) -> SamplingResult<Vec<i64>> {
    let mut pool = candidate_pool(request.start(), request.end(), request.exclude());
    let count = usize::try_from(request.count()).unwrap_or(usize::MAX);
    debug_assert!(count <= pool.len(), "draw called with an unvalidated request");

    let mut numbers = partial_shuffle(rng, &mut pool, count)?.to_vec();
    numbers.sort_unstable();
    Ok(numbers)
}
