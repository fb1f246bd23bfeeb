// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use crate::errors::Result;
use crate::util::bit_pack::GROUP_SIZE;
use crate::util::varint::{read_uleb128, VarIntError};

use super::traits::DeltaType;

/// Outcome of a decode call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoded {
    /// Values written to the destination.
    pub produced: usize,
    /// Bytes consumed from the input.
    pub consumed: usize,
}

struct Cursor<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn varint(&mut self, what: &str) -> Result<u64> {
        match read_uleb128(&self.input[self.pos..]) {
            Ok((value, len)) => {
                self.pos += len;
                Ok(value)
            }
            Err(VarIntError::Underflow) => {
                Err(malformed_err!(self.pos, "input ended while reading {}", what))
            }
            Err(VarIntError::Overflow) => {
                Err(malformed_err!(self.pos, "varint overflow reading {}", what))
            }
        }
    }

    fn varint_usize(&mut self, what: &str) -> Result<usize> {
        let start = self.pos;
        let value = self.varint(what)?;
        usize::try_from(value).map_err(|_| malformed_err!(start, "{} {} does not fit", what, value))
    }

    fn remaining(&self) -> usize {
        self.input.len() - self.pos
    }
}

/// Parse a delta-binary-packed stream into `dest`.
///
/// The block layout is taken from the stream header; no configuration is
/// supplied by the caller. Returns how many values were written and how many
/// bytes were consumed.
///
/// A destination shorter than the stream's value count is not an error: the
/// decoder fills it and reports `produced == dest.len()`. A stream whose
/// final block body is cut short yields the values present and stops at the
/// end of the input. Structural violations (varint overflow, truncated
/// header, a bit width above the wire width, an inconsistent block layout)
/// fail with `Malformed` carrying the detection offset.
pub fn decode<T: DeltaType>(input: &[u8], dest: &mut [T]) -> Result<Decoded> {
    if input.is_empty() {
        return Ok(Decoded { produced: 0, consumed: 0 });
    }

    let mut cur = Cursor { input, pos: 0 };
    let block_size = cur.varint_usize("'block size'")?;
    let miniblock_count = cur.varint_usize("'miniblock count'")?;
    let total = cur.varint_usize("'total value count'")?;
    let first_value = T::from_zigzag(cur.varint("'first value'")?);

    log::debug!("decode {total} values, blocks of {block_size} as {miniblock_count} miniblocks");

    if total == 0 {
        return Ok(Decoded { produced: 0, consumed: cur.pos });
    }
    if !dest.is_empty() {
        dest[0] = first_value;
    }
    if total == 1 || dest.is_empty() {
        return Ok(Decoded {
            produced: total.min(dest.len()),
            consumed: cur.pos,
        });
    }

    if miniblock_count == 0 {
        return Err(malformed_err!(cur.pos, "miniblock count must be non-zero"));
    }
    if block_size == 0 || block_size % miniblock_count != 0 {
        return Err(malformed_err!(
            cur.pos,
            "block size {} is not a multiple of miniblock count {}",
            block_size,
            miniblock_count
        ));
    }
    let miniblock_size = block_size / miniblock_count;

    let mut group = [T::Packed::default(); GROUP_SIZE];
    let mut current = first_value;
    let mut produced = 1;

    'stream: while produced < total && produced < dest.len() && cur.remaining() > 0 {
        let min_delta = T::from_zigzag(cur.varint("'min delta'")?);

        // Bit-width bytes, one per miniblock slot; short reads are allowed
        // and the missing slots read as zero.
        let widths_start = cur.pos;
        let widths_read = miniblock_count.min(cur.remaining());
        cur.pos += widths_read;

        for slot in 0..miniblock_count {
            if produced == total || produced == dest.len() {
                // Bodies past the last produced value are never consumed.
                break 'stream;
            }
            let width = if slot < widths_read {
                input[widths_start + slot] as usize
            } else {
                0
            };
            if width > T::BITS as usize {
                return Err(malformed_err!(
                    widths_start + slot,
                    "bit width {} exceeds {} bits",
                    width,
                    T::BITS
                ));
            }

            // Values this miniblock still owes the stream.
            let take = miniblock_size.min(total - produced);

            if width == 0 {
                let n = take.min(dest.len() - produced);
                for _ in 0..n {
                    current = current.wrapping_add(min_delta);
                    dest[produced] = current;
                    produced += 1;
                }
                continue;
            }

            let mut done = 0;
            while done < take {
                if cur.remaining() < width {
                    // Truncated final body: surface what we have.
                    break 'stream;
                }
                T::unpack8(&input[cur.pos..cur.pos + width], &mut group, width);
                cur.pos += width;

                let lanes = (take - done).min(GROUP_SIZE);
                let n = lanes.min(dest.len() - produced);
                for &lane in &group[..n] {
                    current = current.wrapping_add(min_delta).wrapping_add(T::from_packed(lane));
                    dest[produced] = current;
                    produced += 1;
                }
                if n < lanes {
                    break 'stream;
                }
                done += lanes;
            }
        }
    }

    Ok(Decoded { produced, consumed: cur.pos })
}
