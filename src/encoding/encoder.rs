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

use std::io::Write;

use crate::errors::Result;
use crate::util::bit_pack::GROUP_SIZE;
use crate::util::varint::write_uleb128;

use super::traits::DeltaType;
use super::get_bits_needed;

/// Upper bound of one packed group: eight 64-bit lanes.
const MAX_GROUP_BYTES: usize = 64;

/// Serialize `values` as a delta-binary-packed stream.
///
/// Writes nothing for an empty sequence. Otherwise emits the page header
/// (block size, miniblocks per block, total value count, zig-zag first
/// value) followed by one block record per `block_size` deltas; the last
/// block may hold fewer.
///
/// `block_size` must be a non-zero multiple of `miniblock_size`, which in
/// turn must be a non-zero multiple of 8; anything else is rejected with
/// `InvalidConfig` before any byte is written. Sink failures propagate.
pub fn encode<T: DeltaType, W: Write>(
    values: &[T],
    sink: &mut W,
    block_size: usize,
    miniblock_size: usize,
) -> Result<()> {
    check_config(block_size, miniblock_size)?;
    if values.is_empty() {
        return Ok(());
    }
    let miniblock_count = block_size / miniblock_size;

    log::debug!(
        "encode {} values, blocks of {block_size} as {miniblock_count} x {miniblock_size}",
        values.len()
    );

    write_uleb128(sink, block_size as u64)?;
    write_uleb128(sink, miniblock_count as u64)?;
    write_uleb128(sink, values.len() as u64)?;
    write_uleb128(sink, values[0].zigzag())?;

    if values.len() == 1 {
        return Ok(());
    }

    let mut deltas: Vec<T> = Vec::with_capacity(block_size);
    let mut min_delta = T::default();
    // One scratch for the whole call; short tail groups re-pack whatever the
    // previous group left behind. Those lanes lie past the total value count
    // and are never produced on decode.
    let mut scratch = [T::Packed::default(); GROUP_SIZE];

    let mut prev = values[0];
    for &value in &values[1..] {
        let delta = value.wrapping_sub(prev);
        prev = value;
        if deltas.is_empty() || delta < min_delta {
            min_delta = delta;
        }
        deltas.push(delta);
        if deltas.len() == block_size {
            flush_block(sink, &mut deltas, min_delta, miniblock_size, miniblock_count, &mut scratch)?;
            deltas.clear();
        }
    }
    if !deltas.is_empty() {
        flush_block(sink, &mut deltas, min_delta, miniblock_size, miniblock_count, &mut scratch)?;
    }
    Ok(())
}

/// Write one (possibly partial) block: zig-zag min delta, the bit-width byte
/// of every miniblock slot, then the packed bodies of miniblocks that hold
/// at least one delta.
fn flush_block<T: DeltaType, W: Write>(
    sink: &mut W,
    deltas: &mut [T],
    min_delta: T,
    miniblock_size: usize,
    miniblock_count: usize,
    scratch: &mut [T::Packed; GROUP_SIZE],
) -> Result<()> {
    write_uleb128(sink, min_delta.zigzag())?;

    for delta in deltas.iter_mut() {
        *delta = delta.wrapping_sub(min_delta);
    }
    // Offset deltas are non-negative; reinterpret them as unsigned lanes.
    let lanes: &[T::Packed] = bytemuck::cast_slice(deltas);

    // Slots past the last delta of a partial block stay at zero.
    let mut widths = vec![0u8; miniblock_count];
    for (width, miniblock) in widths.iter_mut().zip(lanes.chunks(miniblock_size)) {
        let max = miniblock
            .iter()
            .map(|&lane| T::packed_as_u64(lane))
            .max()
            .unwrap_or(0);
        *width = get_bits_needed(max) as u8;
    }
    sink.write_all(&widths)?;

    let mut packed = [0u8; MAX_GROUP_BYTES];
    for (&width, miniblock) in widths.iter().zip(lanes.chunks(miniblock_size)) {
        let width = width as usize;
        if width == 0 {
            continue;
        }
        for group in miniblock.chunks(GROUP_SIZE) {
            scratch[..group.len()].copy_from_slice(group);
            T::pack8(scratch, &mut packed, width);
            sink.write_all(&packed[..width])?;
        }
    }
    Ok(())
}

fn check_config(block_size: usize, miniblock_size: usize) -> Result<()> {
    if miniblock_size == 0 || miniblock_size % 8 != 0 {
        return Err(invalid_config_err!(
            "miniblock size {} must be a non-zero multiple of 8",
            miniblock_size
        ));
    }
    if block_size == 0 || block_size % miniblock_size != 0 {
        return Err(invalid_config_err!(
            "block size {} must be a non-zero multiple of miniblock size {}",
            block_size,
            miniblock_size
        ));
    }
    Ok(())
}
