//! A bit-exact codec for Parquet's `DELTA_BINARY_PACKED` integer encoding.
//!
//! The encoding stores a stream of `i32` or `i64` values as a varint header
//! followed by blocks of bit-packed deltas:
//!
//! ```text
//! [block size] [miniblocks per block] [total value count] [first value]
//! [min delta] [miniblock bit widths] [miniblock bodies]   -- per block
//! ```
//!
//! Each block subtracts its minimum delta so every miniblock packs
//! non-negative values under a single per-miniblock bit width. The output is
//! wire-compatible with the other Parquet implementations.
//!
//! # Quick start
//!
//! ```
//! use delta_bitpacked::{decode_i64, encode_i64, DEFAULT_BLOCK_SIZE, DEFAULT_MINIBLOCK_SIZE};
//!
//! let values = vec![3i64, 7, 10, 12, 14, 15];
//! let mut encoded = Vec::new();
//! encode_i64(&values, &mut encoded, DEFAULT_BLOCK_SIZE, DEFAULT_MINIBLOCK_SIZE).unwrap();
//!
//! let mut decoded = vec![0i64; values.len()];
//! let result = decode_i64(&encoded, &mut decoded).unwrap();
//! assert_eq!(result.produced, values.len());
//! assert_eq!(result.consumed, encoded.len());
//! assert_eq!(decoded, values);
//! ```

#[macro_use]
mod errors;

mod encoding;
mod util;

pub use encoding::{
    decode, decode_i32, decode_i64, encode, encode_i32, encode_i64, Decoded, DeltaType,
    DEFAULT_BLOCK_SIZE, DEFAULT_MINIBLOCK_SIZE,
};
pub use errors::{Error, Result};
