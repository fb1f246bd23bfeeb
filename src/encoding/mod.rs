mod decoder;
mod encoder;
mod traits;

use std::io::Write;

use crate::errors::Result;

pub use decoder::{decode, Decoded};
pub use encoder::encode;
pub use traits::DeltaType;

/// Parquet's default block size for 32-bit values. 64-bit callers
/// conventionally use 256 split into miniblocks of 64.
pub const DEFAULT_BLOCK_SIZE: usize = 128;
/// Parquet's default miniblock size for 32-bit values.
pub const DEFAULT_MINIBLOCK_SIZE: usize = 32;

/// Bits needed to represent `value`; 0 when the value is 0.
pub(crate) fn get_bits_needed(value: u64) -> u32 {
    u64::BITS - value.leading_zeros()
}

/// Encode a sequence of `i32` values. See [`encode`].
pub fn encode_i32<W: Write>(
    values: &[i32],
    sink: &mut W,
    block_size: usize,
    miniblock_size: usize,
) -> Result<()> {
    encode(values, sink, block_size, miniblock_size)
}

/// Encode a sequence of `i64` values. See [`encode`].
pub fn encode_i64<W: Write>(
    values: &[i64],
    sink: &mut W,
    block_size: usize,
    miniblock_size: usize,
) -> Result<()> {
    encode(values, sink, block_size, miniblock_size)
}

/// Decode a stream of `i32` values into `dest`. See [`decode`].
pub fn decode_i32(input: &[u8], dest: &mut [i32]) -> Result<Decoded> {
    decode(input, dest)
}

/// Decode a stream of `i64` values into `dest`. See [`decode`].
pub fn decode_i64(input: &[u8], dest: &mut [i64]) -> Result<Decoded> {
    decode(input, dest)
}
