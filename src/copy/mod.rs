// src/copy/mod.rs
//! Raw memory copies
//!
//! This module provides the two copy primitives every conversion bottoms out in:
//!
//! - [`block_copy`] / [`copy_raw`] - type-agnostic byte copy using the widest word size
//!   available at each step (8, then 4, 2 and 1 bytes)
//! - [`copy_array`] - bounds-checked, clamping copy between arrays whose element sizes
//!   may differ
//!
//! # Examples
//!
//! ```
//! use rawcodec::copy::copy_array;
//!
//! let src: Vec<u32> = (0..10).collect();
//! let mut dest = [0u32; 4];
//!
//! // Only four elements fit, so only 16 bytes are copied
//! let copied = copy_array(&mut dest, 0, &src, 0, 10).unwrap();
//! assert_eq!(copied, 16);
//! assert_eq!(dest, [0, 1, 2, 3]);
//! ```

mod array;
mod block;

pub use array::*;
pub use block::*;
