// src/order/mod.rs
//! Byte order detection and conditional byte swapping
//!
//! The native order of the running process is probed once, on first use, and never
//! changes afterwards. Every order-aware operation compares the requested
//! [`Endianness`] against it and swaps only when the two differ, so applying the
//! native order is always a no-op and applying a foreign order twice restores the
//! original value.
//!
//! ```
//! use rawcodec::order::{ByteOrderExt, Endianness};
//!
//! let value = 0x1234_5678u32;
//! let big = value.to_order(Endianness::Big);
//! assert_eq!(big.to_ne_bytes(), [0x12, 0x34, 0x56, 0x78]);
//! assert_eq!(big.to_order(Endianness::Big), value);
//! ```

mod swap;

pub use swap::*;

use std::sync::OnceLock;

use crate::convert::RawBytes;
use crate::error::Result;
use crate::types::CharUnit;

/// Byte order of a multi-byte value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endianness {
    Little,
    Big,
}

static NATIVE_ORDER: OnceLock<Endianness> = OnceLock::new();

impl Endianness {
    /// Byte order of the running process, resolved once
    pub fn native() -> Self {
        *NATIVE_ORDER.get_or_init(|| {
            let order = Self::probe();
            log::debug!("native byte order resolved to {:?}", order);
            order
        })
    }

    fn probe() -> Self {
        // The first byte of a multi-byte integer in memory tells the layout
        match 0x0102u16.to_ne_bytes()[0] {
            0x02 => Endianness::Little,
            _ => Endianness::Big,
        }
    }

    pub fn is_native(self) -> bool {
        self == Self::native()
    }

    pub fn opposite(self) -> Self {
        match self {
            Endianness::Little => Endianness::Big,
            Endianness::Big => Endianness::Little,
        }
    }
}

/// Conditional swapping against the native order
pub trait ByteOrderExt: ByteSwap {
    /// Value unchanged when `order` is native, byte-swapped otherwise
    #[inline]
    fn to_order(self, order: Endianness) -> Self {
        if order.is_native() {
            self
        } else {
            self.byte_swapped()
        }
    }
}

impl<T: ByteSwap> ByteOrderExt for T {}

#[inline]
pub fn apply_order<T: ByteSwap>(value: T, order: Endianness) -> T {
    value.to_order(order)
}

/// Apply `order` to every element of `values` in place
pub fn apply_order_slice<T: ByteSwap>(values: &mut [T], order: Endianness) {
    if order.is_native() {
        return;
    }
    for value in values.iter_mut() {
        *value = value.byte_swapped();
    }
}

/// Reverse a whole buffer in place when `order` is not native
pub fn apply_order_bytes(buf: &mut [u8], order: Endianness) -> &mut [u8] {
    if !order.is_native() {
        swap_buffer(buf);
    }
    buf
}

/// Raw bytes of `value` laid out in `order`
pub fn to_bytes_ordered<T: RawBytes>(value: T, order: Endianness) -> T::Bytes {
    let mut bytes = value.to_raw_bytes();
    apply_order_bytes(bytes.as_mut(), order);
    bytes
}

/// Inverse of [`to_bytes_ordered`]
pub fn from_bytes_ordered<T: RawBytes + ByteSwap>(bytes: &[u8], order: Endianness) -> Result<T> {
    Ok(T::from_raw_bytes(bytes)?.to_order(order))
}

/// UTF-16 units of `text`, each swapped when `order` is not native.
///
/// Only the bytes inside each unit move; the units stay in text order.
///
/// ```
/// use rawcodec::order::{text_units_in_order, Endianness};
///
/// let units = text_units_in_order("AB", Endianness::Big);
/// assert_eq!(units[0].to_ne_bytes(), [0x00, b'A']);
/// assert_eq!(units[1].to_ne_bytes(), [0x00, b'B']);
/// ```
pub fn text_units_in_order(text: &str, order: Endianness) -> Vec<CharUnit> {
    let mut units: Vec<CharUnit> = text.encode_utf16().collect();
    apply_order_slice(&mut units, order);
    units
}
