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

//! Wire compatibility against `parquet2`, the reference Rust implementation
//! of the encoding.
//!
//! In the encode direction a miniblock size of 8 keeps every data miniblock
//! body group-aligned, which is the layout other writers emit as well.

use delta_bitpacked::{decode_i32, decode_i64, encode_i32, encode_i64};
use parquet2::encoding::delta_bitpacked as reference;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn reference_decode(data: &[u8]) -> Vec<i64> {
    let decoder = reference::Decoder::try_new(data).unwrap();
    decoder.collect::<Result<Vec<_>, _>>().unwrap()
}

fn reference_encode(values: &[i64]) -> Vec<u8> {
    let mut buffer = Vec::new();
    reference::encode(values.iter().copied(), &mut buffer);
    buffer
}

fn assert_reference_reads_ours_i64(values: &[i64]) {
    let mut encoded = Vec::new();
    encode_i64(values, &mut encoded, 128, 8).unwrap();
    assert_eq!(reference_decode(&encoded), values);
}

fn assert_we_read_reference_i64(values: &[i64]) {
    let encoded = reference_encode(values);
    let mut out = vec![0i64; values.len()];
    let result = decode_i64(&encoded, &mut out).unwrap();
    assert_eq!(result.produced, values.len());
    assert_eq!(out, values);
}

#[test]
fn reference_reads_our_families_i64() {
    assert_reference_reads_ours_i64(&[1000]);
    assert_reference_reads_ours_i64(&vec![7; 100]);
    assert_reference_reads_ours_i64(&(0..500).map(|i| 3 + 11 * i).collect::<Vec<_>>());
}

#[test]
fn we_read_reference_families_i64() {
    assert_we_read_reference_i64(&[1000]);
    assert_we_read_reference_i64(&vec![7; 100]);
    assert_we_read_reference_i64(&(0..500).map(|i| 3 + 11 * i).collect::<Vec<_>>());
}

#[test]
fn reference_reads_our_wraparound_deltas() {
    assert_reference_reads_ours_i64(&[0, i64::MAX, i64::MIN, 0]);
}

#[test]
fn we_read_reference_wraparound_deltas() {
    assert_we_read_reference_i64(&[0, i64::MAX, i64::MIN, 0]);
}

#[test]
fn random_streams_cross_decode_i64() {
    let mut rng = StdRng::seed_from_u64(23);
    for len in [2usize, 9, 100, 129, 1000] {
        let values: Vec<i64> = (0..len).map(|_| rng.gen_range(-1 << 50..1 << 50)).collect();
        assert_reference_reads_ours_i64(&values);
        assert_we_read_reference_i64(&values);
    }
}

#[test]
fn reference_reads_our_i32_streams() {
    // The reference decoder widens to 64-bit and reconstructs modulo 2^32,
    // so the cast recovers the exact 32-bit sequence, wrap-around included.
    let mut rng = StdRng::seed_from_u64(29);
    let mut cases: Vec<Vec<i32>> = vec![
        vec![7, 5, 3, 1, 2, 3, 4, 5],
        vec![0, i32::MAX, i32::MIN, 0],
        (0..300).map(|_| rng.gen()).collect(),
    ];
    cases.push((0..128).collect());

    for values in cases {
        let mut encoded = Vec::new();
        encode_i32(&values, &mut encoded, 128, 8).unwrap();
        let decoded: Vec<i32> = reference_decode(&encoded)
            .into_iter()
            .map(|v| v as i32)
            .collect();
        assert_eq!(decoded, values);
    }
}

#[test]
fn we_read_reference_i32_range_streams() {
    // Keep the reference encoder's 64-bit deltas inside the 32-bit range so
    // both sides agree on the zig-zag codes.
    let mut rng = StdRng::seed_from_u64(31);
    let values: Vec<i64> = (0..400).map(|_| rng.gen_range(-1 << 20..1 << 20)).collect();
    let encoded = reference_encode(&values);

    let mut out = vec![0i32; values.len()];
    let result = decode_i32(&encoded, &mut out).unwrap();
    assert_eq!(result.produced, values.len());
    let expected: Vec<i32> = values.iter().map(|&v| v as i32).collect();
    assert_eq!(out, expected);
}
