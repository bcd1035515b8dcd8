// src/lib.rs
//! # rawcodec
//!
//! A low-level library for converting scalars, character sequences and arrays to and
//! from raw byte buffers, with explicit control of byte order and explicit bounds
//! checking.
//!
//! ## Features
//!
//! - **Bit-exact scalars**: booleans, 8/16/32/64-bit integers, `f32`/`f64`, a 128-bit
//!   [`Decimal`] and UTF-16 code units round-trip through raw bytes unchanged, NaN
//!   payloads and signed zeros included
//! - **Byte order**: the native order is probed once; every order-aware call swaps
//!   only when the requested order differs from it
//! - **Block copy**: raw copies move 8-, 4-, 2- and 1-byte words in that order
//! - **Array copy**: bounds-checked, clamping copies between arrays of different
//!   element sizes
//!
//! ## Quick Start
//!
//! ### Scalars
//!
//! ```rust
//! use rawcodec::*;
//!
//! fn main() -> Result<()> {
//!     let bytes = to_bytes(0x1234_5678u32);
//!     let back: u32 = from_bytes(&bytes)?;
//!     assert_eq!(back, 0x1234_5678);
//!
//!     // Big-endian layout regardless of the host
//!     assert_eq!(to_bytes_ordered(0x1234_5678u32, Endianness::Big), [0x12, 0x34, 0x56, 0x78]);
//!     Ok(())
//! }
//! ```
//!
//! ### Text
//!
//! ```rust
//! use rawcodec::*;
//!
//! fn main() -> Result<()> {
//!     let raw = text_to_bytes("abcd", 1, 2)?;
//!     assert_eq!(raw.len(), 4);
//!     assert!(text_to_bytes("abcd", 2, 3).is_err());
//!     Ok(())
//! }
//! ```
//!
//! ### Arrays
//!
//! ```rust
//! use rawcodec::*;
//!
//! fn main() -> Result<()> {
//!     let src = [0x4141u16; 5];
//!     let mut dest = [0u8; 20];
//!
//!     let copied = copy_array(&mut dest, 3, &src, 0, 5)?;
//!     assert_eq!(copied, 10);
//!     Ok(())
//! }
//! ```

// Modules
pub mod error;
pub mod types;
pub mod order;
pub mod copy;
pub mod convert;
pub mod raw_data;

mod utils;

// Re-export commonly used types at the crate root for convenience
pub use error::{CodecError, Result};

pub use types::{
    byte_size,
    CharUnit,
    Decimal,
    ElementSize,
    Scalar,
    ScalarBytes,
    ScalarKind,
    TextEncoding,
    CHAR_UNIT_SIZE,
};

pub use order::{
    apply_order,
    apply_order_bytes,
    apply_order_slice,
    from_bytes_ordered,
    swap_buffer,
    swap_region,
    swap16,
    swap32,
    swap64,
    swap128,
    text_units_in_order,
    to_bytes_ordered,
    ByteOrderExt,
    ByteSwap,
    Endianness,
};

pub use copy::{
    block_copy,
    copy_array,
    copy_array_all,
    copy_array_from,
    copy_array_opt,
    copy_bool_elements,
    copy_elements,
};

pub use convert::{
    bytes_to_chars,
    bytes_to_chars_all,
    bytes_to_text,
    bytes_to_text_all,
    bytes_to_text_encoded,
    chars_to_bytes,
    chars_to_bytes_all,
    chars_to_bytes_from,
    from_bytes,
    from_bytes_opt,
    text_byte_size,
    text_to_bytes,
    text_to_bytes_all,
    text_to_bytes_encoded,
    text_to_bytes_from,
    to_bytes,
    RawBytes,
};

pub use raw_data::{RawBuffer, RawReader};

// Prelude module for glob imports
pub mod prelude {
    //! Convenient imports for common use cases.
    //!
    //! ```rust
    //! use rawcodec::prelude::*;
    //! ```

    pub use crate::convert::{from_bytes, to_bytes, RawBytes};
    pub use crate::copy::{block_copy, copy_array};
    pub use crate::error::{CodecError, Result};
    pub use crate::order::{ByteOrderExt, ByteSwap, Endianness};
    pub use crate::types::{Decimal, ElementSize, Scalar, ScalarKind};
}

/// The library version
pub const LIBRARY_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_constant() {
        assert!(!LIBRARY_VERSION.is_empty());
    }

    #[test]
    fn test_widths_agree_across_layers() {
        assert_eq!(<u16 as RawBytes>::WIDTH, <u16 as ElementSize>::BYTE_SIZE);
        assert_eq!(<f64 as RawBytes>::WIDTH, ScalarKind::F64.fixed_size());
        assert_eq!(<Decimal as RawBytes>::WIDTH, ScalarKind::Decimal.fixed_size());
        assert_eq!(<bool as RawBytes>::WIDTH, ScalarKind::Bool.fixed_size());
        assert_eq!(CHAR_UNIT_SIZE, ScalarKind::Char.fixed_size());
    }

    #[test]
    fn test_array_copy_bottoms_out_in_block_copy() {
        let src: Vec<u8> = (0..23).collect();
        let mut via_array = [0u8; 23];
        let mut via_block = [0u8; 23];

        copy_array_all(&mut via_array, &src).unwrap();
        block_copy(&mut via_block, &src, 23).unwrap();
        assert_eq!(via_array, via_block);
    }

    #[test]
    fn test_ordered_scalar_through_every_layer() {
        let value = -123_456i32;
        let big = to_bytes_ordered(value, Endianness::Big);
        assert_eq!(big, value.to_be_bytes());

        let scalar = Scalar::from_bytes_ordered(ScalarKind::I32, &big, Endianness::Big).unwrap();
        assert_eq!(scalar, Scalar::I32(value));
    }
}
