use std::fmt::Debug;

use bytemuck::Pod;

use crate::util::bit_pack::{self, GROUP_SIZE};
use crate::util::varint;

/// The signed integer widths the codec understands.
///
/// Encoder and decoder are generic over this trait; `i32` and `i64` are the
/// two wire widths. `Packed` is the unsigned twin a delta becomes once the
/// block minimum has been subtracted, and the lane type of the 8-value
/// bit-packing primitive.
pub trait DeltaType: Pod + PartialOrd + Default + Debug {
    type Packed: Pod + Default + Debug;

    /// Wire width in bits.
    const BITS: u32;

    fn wrapping_sub(self, rhs: Self) -> Self;
    fn wrapping_add(self, rhs: Self) -> Self;

    /// Reinterpret a packed lane as a signed delta.
    fn from_packed(packed: Self::Packed) -> Self;

    /// Zero-extend a packed lane, for bit-width selection.
    fn packed_as_u64(packed: Self::Packed) -> u64;

    /// Zig-zag code of this value at the wire width.
    fn zigzag(self) -> u64;

    /// Inverse of [`DeltaType::zigzag`]; excess high bits are discarded.
    fn from_zigzag(encoded: u64) -> Self;

    fn pack8(src: &[Self::Packed; GROUP_SIZE], dst: &mut [u8], width: usize);
    fn unpack8(src: &[u8], dst: &mut [Self::Packed; GROUP_SIZE], width: usize);
}

macro_rules! delta_type {
    ($type:ty, $packed:ty, $zigzag:path, $unzigzag:path, $pack8:path, $unpack8:path) => {
        impl DeltaType for $type {
            type Packed = $packed;

            const BITS: u32 = <$type>::BITS;

            #[inline]
            fn wrapping_sub(self, rhs: Self) -> Self {
                <$type>::wrapping_sub(self, rhs)
            }

            #[inline]
            fn wrapping_add(self, rhs: Self) -> Self {
                <$type>::wrapping_add(self, rhs)
            }

            #[inline]
            fn from_packed(packed: $packed) -> Self {
                packed as $type
            }

            #[inline]
            fn packed_as_u64(packed: $packed) -> u64 {
                packed as u64
            }

            #[inline]
            fn zigzag(self) -> u64 {
                $zigzag(self)
            }

            #[inline]
            fn from_zigzag(encoded: u64) -> Self {
                $unzigzag(encoded)
            }

            #[inline]
            fn pack8(src: &[$packed; GROUP_SIZE], dst: &mut [u8], width: usize) {
                $pack8(src, dst, width)
            }

            #[inline]
            fn unpack8(src: &[u8], dst: &mut [$packed; GROUP_SIZE], width: usize) {
                $unpack8(src, dst, width)
            }
        }
    };
}

delta_type!(
    i32,
    u32,
    varint::zigzag32,
    varint::unzigzag32,
    bit_pack::pack8_32,
    bit_pack::unpack8_32
);
delta_type!(
    i64,
    u64,
    varint::zigzag64,
    varint::unzigzag64,
    bit_pack::pack8_64,
    bit_pack::unpack8_64
);
