// src/convert/mod.rs
//! Typed values to and from raw bytes
//!
//! - [`RawBytes`] - bit-exact, native-order byte view of every supported scalar
//! - character sequences - raw widening copies of UTF-16 code units, with
//!   `(start, length)` range validation, plus encoding-aware variants that defer to a
//!   standard text codec
//!
//! # Examples
//!
//! ## Scalars
//!
//! ```
//! use rawcodec::convert::{from_bytes, to_bytes};
//!
//! let bytes = to_bytes(-1.25f64);
//! let back: f64 = from_bytes(&bytes).unwrap();
//! assert_eq!(back.to_bits(), (-1.25f64).to_bits());
//! ```
//!
//! ## Text
//!
//! ```
//! use rawcodec::convert::{bytes_to_text_all, text_to_bytes};
//!
//! let raw = text_to_bytes("abcd", 1, 2).unwrap();
//! assert_eq!(raw.len(), 4);
//! assert_eq!(bytes_to_text_all(&raw).unwrap(), "bc");
//! ```

mod scalar;
mod text;

pub use scalar::*;
pub use text::*;
