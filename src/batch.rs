//! Bulk conversion of many values at once, spread over the rayon pool.

use rayon::prelude::*;

use crate::base62::{decode, encode};
use crate::error::{BatchError, DecodeError};

/// Largest accepted batch, bounding the memory a single call can claim.
pub const MAX_BATCH_SIZE: usize = 1_000_000;

fn check_len(len: usize) -> Result<(), BatchError> {
    if len > MAX_BATCH_SIZE {
        tracing::debug!(len, max = MAX_BATCH_SIZE, "rejecting oversized batch");
        return Err(BatchError::TooLarge {
            len,
            max: MAX_BATCH_SIZE,
        });
    }
    Ok(())
}

/// Encodes every value, preserving order.
pub fn encode_batch(nums: &[u64]) -> Result<Vec<String>, BatchError> {
    check_len(nums.len())?;
    Ok(nums.par_iter().map(|&num| encode(num)).collect())
}

/// Decodes every string, preserving order.
///
/// When several inputs are invalid, the error for the lowest index is returned.
pub fn decode_batch<S>(texts: &[S]) -> Result<Vec<u64>, BatchError>
where
    S: AsRef<str> + Sync,
{
    check_len(texts.len())?;

    let decoded: Vec<Result<u64, DecodeError>> = texts.par_iter().map(|s| decode(s.as_ref())).collect();

    decoded
        .into_iter()
        .enumerate()
        .map(|(index, result)| result.map_err(|source| BatchError::Decode { index, source }))
        .collect()
}
