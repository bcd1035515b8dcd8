// src/order/swap.rs
use bytemuck::Pod;

use crate::error::{CodecError, Result};
use crate::types::Decimal;

/// Reverse byte order (16-bit)
#[inline(always)]
pub const fn swap16(value: u16) -> u16 {
    (value & 0x00FF) << 8 | (value & 0xFF00) >> 8
}

/// Reverse byte order (32-bit)
#[inline(always)]
pub const fn swap32(value: u32) -> u32 {
    (value & 0x0000_00FF) << 24
        | (value & 0x0000_FF00) << 8
        | (value & 0x00FF_0000) >> 8
        | (value & 0xFF00_0000) >> 24
}

/// Reverse byte order (64-bit)
#[inline(always)]
pub const fn swap64(value: u64) -> u64 {
    (value & 0x0000_0000_0000_00FF) << 56
        | (value & 0x0000_0000_0000_FF00) << 40
        | (value & 0x0000_0000_00FF_0000) << 24
        | (value & 0x0000_0000_FF00_0000) << 8
        | (value & 0x0000_00FF_0000_0000) >> 8
        | (value & 0x0000_FF00_0000_0000) >> 24
        | (value & 0x00FF_0000_0000_0000) >> 40
        | (value & 0xFF00_0000_0000_0000) >> 56
}

/// Reverse byte order (128-bit): swap each 64-bit half, then exchange the halves
#[inline(always)]
pub const fn swap128(value: u128) -> u128 {
    let lo = swap64(value as u64) as u128;
    let hi = swap64((value >> 64) as u64) as u128;
    lo << 64 | hi
}

/// Reverse an arbitrary byte region in place
pub fn swap_buffer(buf: &mut [u8]) {
    let len = buf.len();
    for lo in 0..len / 2 {
        buf.swap(lo, len - 1 - lo);
    }
}

/// Reverse the first `count * size_of::<T>()` bytes of `values` as one region.
///
/// This reverses element order as well as the bytes inside each element.
pub fn swap_region<T: Pod>(values: &mut [T], count: usize) -> Result<()> {
    if count > values.len() {
        return Err(CodecError::out_of_range(
            "count",
            count as i64,
            values.len() as i64,
        ));
    }

    let byte_count = count * std::mem::size_of::<T>();
    let bytes: &mut [u8] = bytemuck::cast_slice_mut(values);
    swap_buffer(&mut bytes[..byte_count]);
    Ok(())
}

/// Byte-order reversal for the fixed-width scalars
pub trait ByteSwap: Copy {
    fn byte_swapped(self) -> Self;
}

impl ByteSwap for bool {
    #[inline]
    fn byte_swapped(self) -> Self {
        self
    }
}

impl ByteSwap for u8 {
    #[inline]
    fn byte_swapped(self) -> Self {
        self
    }
}

impl ByteSwap for i8 {
    #[inline]
    fn byte_swapped(self) -> Self {
        self
    }
}

macro_rules! impl_byte_swap {
    ($($t:ty => $swap:ident as $bits:ty),+ $(,)?) => {$(
        impl ByteSwap for $t {
            #[inline]
            fn byte_swapped(self) -> Self {
                <$t>::from_ne_bytes($swap(<$bits>::from_ne_bytes(self.to_ne_bytes())).to_ne_bytes())
            }
        }
    )+};
}

impl_byte_swap! {
    u16 => swap16 as u16,
    i16 => swap16 as u16,
    u32 => swap32 as u32,
    i32 => swap32 as u32,
    f32 => swap32 as u32,
    u64 => swap64 as u64,
    i64 => swap64 as u64,
    f64 => swap64 as u64,
    u128 => swap128 as u128,
    i128 => swap128 as u128,
}

impl ByteSwap for Decimal {
    #[inline]
    fn byte_swapped(self) -> Self {
        Decimal::from_bits(swap128(self.to_bits()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swap_fixed_widths() {
        assert_eq!(swap16(0x1234), 0x3412);
        assert_eq!(swap32(0x1234_5678), 0x7856_3412);
        assert_eq!(swap64(0x0102_0304_0506_0708), 0x0807_0605_0403_0201);
        assert_eq!(
            swap128(0x0102_0304_0506_0708_090A_0B0C_0D0E_0F10),
            0x100F_0E0D_0C0B_0A09_0807_0605_0403_0201
        );
    }

    #[test]
    fn test_swap_matches_core() {
        for value in [0u64, 1, 0xFF, 0xDEAD_BEEF_CAFE_BABE, u64::MAX] {
            assert_eq!(swap64(value), value.swap_bytes());
            assert_eq!(swap32(value as u32), (value as u32).swap_bytes());
            assert_eq!(swap16(value as u16), (value as u16).swap_bytes());
        }
    }

    #[test]
    fn test_signed_and_float_swaps() {
        assert_eq!((-2i16).byte_swapped(), -257);
        assert_eq!(1.5f64.byte_swapped().byte_swapped(), 1.5);
        assert_eq!(
            f32::NAN.byte_swapped().byte_swapped().to_bits(),
            f32::NAN.to_bits()
        );
        assert_eq!(0x0102i16.byte_swapped(), 0x0201);
    }

    #[test]
    fn test_decimal_swap_reverses_all_bytes() {
        let d = Decimal { flags: 0x0001_0000, hi: 1, lo: 2, mid: 3 };
        let mut expected = bytemuck::bytes_of(&d).to_vec();
        expected.reverse();

        let swapped = d.byte_swapped();
        assert_eq!(bytemuck::bytes_of(&swapped), expected.as_slice());
        assert_eq!(swapped.byte_swapped(), d);
    }

    #[test]
    fn test_swap_buffer() {
        let mut odd = [1u8, 2, 3, 4, 5];
        swap_buffer(&mut odd);
        assert_eq!(odd, [5, 4, 3, 2, 1]);

        let mut even = [1u8, 2, 3, 4];
        swap_buffer(&mut even);
        assert_eq!(even, [4, 3, 2, 1]);

        let mut empty: [u8; 0] = [];
        swap_buffer(&mut empty);
    }

    #[test]
    fn test_swap_region() {
        let mut values = [0x0102u16, 0x0304, 0x0506];
        swap_region(&mut values, 2).unwrap();
        // Only the first two elements are touched, bytes and order both reversed
        assert_eq!(values, [0x0403, 0x0201, 0x0506]);

        assert!(swap_region(&mut values, 4).is_err());
    }
}
