//! Base62 encoding and decoding of `u64` values.
//!
//! Digits are `0-9`, `A-Z`, `a-z` (values 0 through 61), most significant first,
//! with no padding.

pub mod base62;
pub mod batch;
pub mod error;

pub use base62::{decode, encode, Base62};
pub use batch::{decode_batch, encode_batch, MAX_BATCH_SIZE};
pub use error::{BatchError, DecodeError};
