// src/copy/block.rs
use std::mem;
use std::ptr;

use crate::error::{CodecError, Result};

/// Copy one stage of whole `W` words, advancing `offset` and shrinking `remaining`.
#[inline(always)]
unsafe fn copy_words<W: Copy>(
    dest: *mut u8,
    src: *const u8,
    offset: &mut usize,
    remaining: &mut usize,
) {
    let width = mem::size_of::<W>();
    let block = *remaining / width;

    for i in 0..block {
        let at = *offset + i * width;
        let word = ptr::read_unaligned(src.add(at) as *const W);
        ptr::write_unaligned(dest.add(at) as *mut W, word);
    }

    *offset += block * width;
    *remaining -= block * width;
}

/// Copy `byte_count` bytes from `src` to `dest` in descending word sizes:
/// 8-byte words first, then 4, 2 and finally single bytes.
///
/// # Safety
///
/// Both pointers must be valid for `byte_count` bytes and the two regions must not
/// overlap. No alignment is required.
#[inline]
pub unsafe fn copy_raw(dest: *mut u8, src: *const u8, byte_count: usize) {
    let mut offset = 0usize;
    let mut remaining = byte_count;

    copy_words::<u64>(dest, src, &mut offset, &mut remaining);
    copy_words::<u32>(dest, src, &mut offset, &mut remaining);
    copy_words::<u16>(dest, src, &mut offset, &mut remaining);
    copy_words::<u8>(dest, src, &mut offset, &mut remaining);

    debug_assert_eq!(remaining, 0);
    debug_assert_eq!(offset, byte_count);
}

/// Copy the first `byte_count` bytes of `src` into `dest`.
///
/// Fails with [`CodecError::BufferTooShort`] before touching `dest` when either side
/// holds fewer than `byte_count` bytes. A zero count is a no-op.
///
/// # Example
///
/// ```
/// use rawcodec::copy::block_copy;
///
/// let src = [1u8, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11];
/// let mut dest = [0u8; 11];
/// block_copy(&mut dest, &src, 11).unwrap();
/// assert_eq!(dest, src);
/// ```
pub fn block_copy(dest: &mut [u8], src: &[u8], byte_count: usize) -> Result<()> {
    if src.len() < byte_count {
        return Err(CodecError::BufferTooShort {
            needed: byte_count,
            actual: src.len(),
        });
    }
    if dest.len() < byte_count {
        return Err(CodecError::BufferTooShort {
            needed: byte_count,
            actual: dest.len(),
        });
    }
    if byte_count == 0 {
        return Ok(());
    }

    // SAFETY: both slices hold at least `byte_count` bytes, and a `&mut` and a `&`
    // borrow can never alias.
    unsafe { copy_raw(dest.as_mut_ptr(), src.as_ptr(), byte_count) };
    Ok(())
}
