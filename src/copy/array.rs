// src/copy/array.rs
use bytemuck::{NoUninit, Pod};

use super::block::{block_copy, copy_raw};
use crate::error::{CodecError, Result};
use crate::types::ElementSize;

/// Element index or count converted to a byte offset, rejecting overflow
fn scale(argument: &'static str, value: i64, element_size: usize) -> Result<i64> {
    value
        .checked_mul(element_size as i64)
        .ok_or_else(|| CodecError::out_of_range(argument, value, i64::MAX / element_size as i64))
}

/// Validated and clamped byte ranges of one array copy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CopyPlan {
    dest_offset: usize,
    src_offset: usize,
    byte_count: usize,
}

impl CopyPlan {
    fn new<D: ElementSize, S: ElementSize>(
        dest_len: usize,
        dest_index: i64,
        src_len: usize,
        src_index: i64,
        src_count: i64,
    ) -> Result<Self> {
        if src_count < 0 {
            return Err(CodecError::out_of_range("src_count", src_count, i64::MAX));
        }

        let count = scale("src_count", src_count, S::BYTE_SIZE)?;

        let src_bytes = (src_len * S::BYTE_SIZE) as i64;
        let src_offset = scale("src_index", src_index, S::BYTE_SIZE)?;

        let dest_bytes = (dest_len * D::BYTE_SIZE) as i64;
        let dest_offset = scale("dest_index", dest_index, D::BYTE_SIZE)?;

        if src_offset < 0 || src_offset > src_bytes {
            return Err(CodecError::out_of_range("src_index", src_index, src_len as i64));
        }
        if dest_offset < 0 || dest_offset > dest_bytes {
            return Err(CodecError::out_of_range("dest_index", dest_index, dest_len as i64));
        }

        let byte_count = count
            .min(src_bytes - src_offset)
            .min(dest_bytes - dest_offset);

        if byte_count < count {
            log::trace!(
                "array copy clamped from {} to {} bytes (src {}+{}, dest {}+{})",
                count,
                byte_count,
                src_offset,
                src_bytes - src_offset,
                dest_offset,
                dest_bytes - dest_offset
            );
        }

        Ok(CopyPlan {
            dest_offset: dest_offset as usize,
            src_offset: src_offset as usize,
            byte_count: byte_count as usize,
        })
    }
}

/// Byte views of both arrays, then the block copy of the planned region.
///
/// Every failure here is reported as [`CodecError::CopyFailed`].
fn copy_stage<D: Pod, S: NoUninit>(dest: &mut [D], src: &[S], plan: CopyPlan) -> Result<usize> {
    let src_bytes: &[u8] = bytemuck::try_cast_slice(src)
        .map_err(|e| CodecError::CopyFailed(format!("source byte view: {}", e)))?;
    let dest_bytes: &mut [u8] = bytemuck::try_cast_slice_mut(dest)
        .map_err(|e| CodecError::CopyFailed(format!("destination byte view: {}", e)))?;

    let src_region = src_bytes
        .get(plan.src_offset..plan.src_offset + plan.byte_count)
        .ok_or_else(|| CodecError::CopyFailed("source region out of bounds".to_string()))?;
    let dest_region = dest_bytes
        .get_mut(plan.dest_offset..plan.dest_offset + plan.byte_count)
        .ok_or_else(|| CodecError::CopyFailed("destination region out of bounds".to_string()))?;

    block_copy(dest_region, src_region, plan.byte_count)
        .map_err(|e| CodecError::CopyFailed(e.to_string()))?;

    Ok(plan.byte_count)
}

/// Copy `src_count` elements of `src` starting at `src_index` into `dest` starting at
/// `dest_index`, where the two arrays may have different element sizes.
///
/// Indices and the count are in elements of their own array and are scaled to bytes
/// with each array's element size. The byte count is clamped to whatever room is left
/// in either array, and the number of bytes actually copied is returned.
///
/// Validation failures ([`CodecError::OutOfRange`]) are raised before any byte is
/// written. A failure during the raw copy stage is reported as
/// [`CodecError::CopyFailed`].
///
/// # Example
///
/// ```
/// use rawcodec::copy::copy_array;
///
/// // Two 2-byte elements land at byte offset 3 of a byte array
/// let src = [0x0101u16, 0x0202];
/// let mut dest = [0u8; 8];
/// let copied = copy_array(&mut dest, 3, &src, 0, 2).unwrap();
/// assert_eq!(copied, 4);
/// assert_eq!(dest, [0, 0, 0, 1, 1, 2, 2, 0]);
/// ```
pub fn copy_array<D, S>(
    dest: &mut [D],
    dest_index: i64,
    src: &[S],
    src_index: i64,
    src_count: i64,
) -> Result<usize>
where
    D: ElementSize + Pod,
    S: ElementSize + NoUninit,
{
    let plan = CopyPlan::new::<D, S>(dest.len(), dest_index, src.len(), src_index, src_count)?;

    copy_stage(dest, src, plan).map_err(|e| {
        log::warn!("array copy failed after validation: {}", e);
        e
    })
}

/// [`copy_array`] over optional arrays, failing with [`CodecError::NullInput`] when
/// either is absent.
pub fn copy_array_opt<D, S>(
    dest: Option<&mut [D]>,
    dest_index: i64,
    src: Option<&[S]>,
    src_index: i64,
    src_count: i64,
) -> Result<usize>
where
    D: ElementSize + Pod,
    S: ElementSize + NoUninit,
{
    let src = src.ok_or(CodecError::NullInput { argument: "src" })?;
    let dest = dest.ok_or(CodecError::NullInput { argument: "dest" })?;
    copy_array(dest, dest_index, src, src_index, src_count)
}

/// Copy the rest of `src` from `src_index` into `dest` at `dest_index`
pub fn copy_array_from<D, S>(dest: &mut [D], dest_index: i64, src: &[S], src_index: i64) -> Result<usize>
where
    D: ElementSize + Pod,
    S: ElementSize + NoUninit,
{
    copy_array(dest, dest_index, src, src_index, src.len() as i64)
}

/// Copy as much of `src` as fits into the start of `dest`
pub fn copy_array_all<D, S>(dest: &mut [D], src: &[S]) -> Result<usize>
where
    D: ElementSize + Pod,
    S: ElementSize + NoUninit,
{
    copy_array(dest, 0, src, 0, src.len() as i64)
}

/// Range of one side of an exact copy: `index` must lie within `len` and `count`
/// elements must fit after it.
fn check_exact(
    index_argument: &'static str,
    len: usize,
    index: usize,
    count: usize,
) -> Result<()> {
    if index > len {
        return Err(CodecError::out_of_range(index_argument, index as i64, len as i64));
    }
    if count > len - index {
        return Err(CodecError::out_of_range("count", count as i64, (len - index) as i64));
    }
    Ok(())
}

/// Copy exactly `count` elements between arrays of the same type. No clamping.
pub fn copy_elements<T: Pod>(
    dest: &mut [T],
    dest_index: usize,
    src: &[T],
    src_index: usize,
    count: usize,
) -> Result<()> {
    check_exact("src_index", src.len(), src_index, count)?;
    check_exact("dest_index", dest.len(), dest_index, count)?;

    let size = std::mem::size_of::<T>();
    let src_bytes: &[u8] = bytemuck::cast_slice(&src[src_index..src_index + count]);
    let dest_bytes: &mut [u8] = bytemuck::cast_slice_mut(&mut dest[dest_index..dest_index + count]);
    block_copy(dest_bytes, src_bytes, count * size)
}

/// [`copy_elements`] for boolean arrays.
///
/// `bool` has no mutable byte view, so this goes straight to the raw block copy.
pub fn copy_bool_elements(
    dest: &mut [bool],
    dest_index: usize,
    src: &[bool],
    src_index: usize,
    count: usize,
) -> Result<()> {
    check_exact("src_index", src.len(), src_index, count)?;
    check_exact("dest_index", dest.len(), dest_index, count)?;

    if count == 0 {
        return Ok(());
    }

    let src = &src[src_index..src_index + count];
    let dest = &mut dest[dest_index..dest_index + count];
    // SAFETY: both ranges hold `count` one-byte bools, and every copied byte comes
    // from a valid bool so the destination stays valid.
    unsafe { copy_raw(dest.as_mut_ptr() as *mut u8, src.as_ptr() as *const u8, count) };
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Decimal;

    #[test]
    fn test_same_size_clamped_to_destination() {
        let src: Vec<u32> = (0..10).collect();
        let mut dest = [0u32; 4];

        let copied = copy_array(&mut dest, 0, &src, 0, 10).unwrap();
        assert_eq!(copied, 16);
        assert_eq!(dest, [0, 1, 2, 3]);
    }

    #[test]
    fn test_clamped_to_source() {
        let src = [7u8, 8, 9];
        let mut dest = [0u8; 10];

        let copied = copy_array(&mut dest, 2, &src, 1, 100).unwrap();
        assert_eq!(copied, 2);
        assert_eq!(&dest[..5], &[0, 0, 8, 9, 0]);
    }

    #[test]
    fn test_wide_into_narrow() {
        let src = [0x1111u16, 0x2222, 0x3333, 0x4444, 0x5555];
        let mut dest = [0u8; 20];

        let copied = copy_array(&mut dest, 3, &src, 0, 5).unwrap();
        assert_eq!(copied, 10);
        assert_eq!(&dest[..3], &[0, 0, 0]);
        assert_eq!(&dest[3..13], bytemuck::cast_slice::<u16, u8>(&src));
        assert!(dest[13..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_narrow_into_wide() {
        let src: Vec<u8> = (1..=8).collect();
        let mut dest = [0u32; 4];

        // dest index 1 is byte offset 4
        let copied = copy_array(&mut dest, 1, &src, 0, 8).unwrap();
        assert_eq!(copied, 8);
        assert_eq!(dest[0], 0);
        assert_eq!(dest[1], u32::from_ne_bytes([1, 2, 3, 4]));
        assert_eq!(dest[2], u32::from_ne_bytes([5, 6, 7, 8]));
        assert_eq!(dest[3], 0);
    }

    #[test]
    fn test_bool_source() {
        let src = [true, false, true];
        let mut dest = [0xFFu8; 3];
        assert_eq!(copy_array(&mut dest, 0, &src, 0, 3).unwrap(), 3);
        assert_eq!(dest, [1, 0, 1]);
    }

    #[test]
    fn test_decimal_elements() {
        let src = [Decimal::from_i64(1), Decimal::from_i64(-2)];
        let mut dest = [Decimal::default(); 2];
        assert_eq!(copy_array(&mut dest, 0, &src, 0, 2).unwrap(), 32);
        assert_eq!(dest, src);
    }

    #[test]
    fn test_index_at_end_copies_nothing() {
        let src = [1u16, 2];
        let mut dest = [0u16; 2];
        assert_eq!(copy_array(&mut dest, 2, &src, 0, 2).unwrap(), 0);
        assert_eq!(copy_array(&mut dest, 0, &src, 2, 2).unwrap(), 0);
        assert_eq!(dest, [0, 0]);
    }

    #[test]
    fn test_validation_errors() {
        let src = [1u8; 4];
        let mut dest = [0u8; 4];

        let err = copy_array(&mut dest, 0, &src, 0, -1).unwrap_err();
        assert!(matches!(err, CodecError::OutOfRange { argument: "src_count", .. }));

        let err = copy_array(&mut dest, 0, &src, 5, 1).unwrap_err();
        assert!(matches!(err, CodecError::OutOfRange { argument: "src_index", .. }));

        let err = copy_array(&mut dest, -1, &src, 0, 1).unwrap_err();
        assert!(matches!(err, CodecError::OutOfRange { argument: "dest_index", .. }));

        let wide = [0u64; 2];
        let err = copy_array(&mut dest, 0, &wide, 0, i64::MAX).unwrap_err();
        assert!(err.is_validation());

        assert_eq!(dest, [0; 4]);
    }

    #[test]
    fn test_null_inputs() {
        let src = [1u8; 4];
        let mut dest = [0u8; 4];

        let err = copy_array_opt::<u8, u8>(Some(&mut dest[..]), 0, None, 0, 1).unwrap_err();
        assert!(matches!(err, CodecError::NullInput { argument: "src" }));

        let err = copy_array_opt::<u8, u8>(None, 0, Some(&src[..]), 0, 1).unwrap_err();
        assert!(matches!(err, CodecError::NullInput { argument: "dest" }));

        assert_eq!(copy_array_opt(Some(&mut dest[..]), 0, Some(&src[..]), 0, 4).unwrap(), 4);
    }

    #[test]
    fn test_overloads() {
        let src = [1i16, 2, 3];
        let mut dest = [0i16; 5];
        assert_eq!(copy_array_from(&mut dest, 1, &src, 1).unwrap(), 4);
        assert_eq!(dest, [0, 2, 3, 0, 0]);

        let mut dest = [0i16; 2];
        assert_eq!(copy_array_all(&mut dest, &src).unwrap(), 4);
        assert_eq!(dest, [1, 2]);
    }

    #[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
    #[repr(C)]
    struct Narrow(u8);

    // Claims 16 bytes per element while occupying one
    impl ElementSize for Narrow {
        const KIND: crate::types::ScalarKind = crate::types::ScalarKind::Decimal;
    }

    #[test]
    fn test_copy_stage_failure_is_not_validation() {
        let src = [Narrow(1), Narrow(2)];
        let mut dest = [0u8; 64];

        let err = copy_array(&mut dest, 0, &src, 0, 2).unwrap_err();
        assert!(matches!(err, CodecError::CopyFailed(_)), "{:?}", err);
        assert!(!err.is_validation());
        assert!(dest.iter().all(|&b| b == 0));
    }

    #[test]
    fn test_copy_elements_exact() {
        let src = [1.5f64, 2.5, 3.5];
        let mut dest = [0.0f64; 4];
        copy_elements(&mut dest, 1, &src, 1, 2).unwrap();
        assert_eq!(dest, [0.0, 2.5, 3.5, 0.0]);

        assert!(copy_elements(&mut dest, 3, &src, 0, 2).is_err());
        assert!(copy_elements(&mut dest, 0, &src, 2, 2).is_err());
        assert!(copy_elements(&mut dest, 5, &src, 0, 0).is_err());
    }

    #[test]
    fn test_copy_elements_names_count() {
        let src = [1u32, 2, 3];
        let mut dest = [0u32; 8];

        let err = copy_elements(&mut dest, 0, &src, 1, 3).unwrap_err();
        assert!(matches!(err, CodecError::OutOfRange { argument: "count", value: 3, limit: 2 }));

        let err = copy_elements(&mut dest, 7, &src, 0, 2).unwrap_err();
        assert!(matches!(err, CodecError::OutOfRange { argument: "count", value: 2, limit: 1 }));

        let err = copy_elements(&mut dest, 9, &src, 0, 0).unwrap_err();
        assert!(matches!(err, CodecError::OutOfRange { argument: "dest_index", value: 9, limit: 8 }));

        let err = copy_elements(&mut dest, 0, &src, 4, 0).unwrap_err();
        assert!(matches!(err, CodecError::OutOfRange { argument: "src_index", value: 4, limit: 3 }));
    }

    #[test]
    fn test_copy_bool_elements() {
        let src = [true, false, true, true];
        let mut dest = [false; 5];

        copy_bool_elements(&mut dest, 1, &src, 1, 3).unwrap();
        assert_eq!(dest, [false, false, true, true, false]);

        let err = copy_bool_elements(&mut dest, 3, &src, 0, 3).unwrap_err();
        assert!(matches!(err, CodecError::OutOfRange { argument: "count", .. }));
        assert_eq!(dest, [false, false, true, true, false]);

        copy_bool_elements(&mut dest, 5, &src, 4, 0).unwrap();
    }
}
