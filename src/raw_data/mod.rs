// src/raw_data/mod.rs
//! Ordered value buffers
//!
//! - [`RawBuffer`] - accumulates values of one scalar kind in a chosen byte order
//! - [`RawReader`] - reads them back from any [`std::io::Read`]
//!
//! # Examples
//!
//! ```
//! use rawcodec::raw_data::{RawBuffer, RawReader};
//! use rawcodec::{Endianness, ScalarKind};
//! use std::io::Cursor;
//!
//! let mut buffer = RawBuffer::new(ScalarKind::I64, Endianness::Big);
//! buffer.write_slice(&[1i64, -1, 42]).unwrap();
//!
//! let mut cursor = Cursor::new(buffer.as_bytes().to_vec());
//! let values: Vec<i64> = RawReader::read_values(&mut cursor, 3, Endianness::Big).unwrap();
//! assert_eq!(values, vec![1, -1, 42]);
//! ```

mod buffer;
mod reader;

pub use buffer::RawBuffer;
pub use reader::RawReader;
