// src/convert/text.rs
use bytes::{Bytes, BytesMut};

use crate::copy::{block_copy, copy_raw};
use crate::error::{CodecError, Result};
use crate::types::{CharUnit, TextEncoding, CHAR_UNIT_SIZE};
use crate::utils::{decode_text, encode_text};

/// Validate a `(start, length)` request against a container of `len` elements and
/// return it as a `usize` range start and length.
pub(crate) fn check_range(len: usize, start: i64, length: i64) -> Result<(usize, usize)> {
    let len = len as i64;

    if start < 0 || start > len {
        return Err(CodecError::out_of_range("start", start, len));
    }
    if length < 0 || length > len - start {
        return Err(CodecError::out_of_range("length", length, len - start));
    }

    Ok((start as usize, length as usize))
}

/// Widen `units[start..start + length]` into raw native-order bytes.
///
/// This is a raw copy of the code units, not a text encoding: every unit becomes
/// [`CHAR_UNIT_SIZE`] bytes.
///
/// # Example
///
/// ```
/// use rawcodec::convert::chars_to_bytes;
///
/// let units: Vec<u16> = "abcd".encode_utf16().collect();
/// let bytes = chars_to_bytes(&units, 1, 2).unwrap();
/// assert_eq!(bytes.len(), 4);
/// assert!(chars_to_bytes(&units, 2, 3).is_err());
/// ```
pub fn chars_to_bytes(units: &[CharUnit], start: i64, length: i64) -> Result<BytesMut> {
    let (start, length) = check_range(units.len(), start, length)?;

    let byte_count = length * CHAR_UNIT_SIZE;
    let mut buf = BytesMut::zeroed(byte_count);
    let src: &[u8] = bytemuck::cast_slice(&units[start..start + length]);
    block_copy(&mut buf, src, byte_count)?;
    Ok(buf)
}

/// Units from `start` to the end
pub fn chars_to_bytes_from(units: &[CharUnit], start: i64) -> Result<BytesMut> {
    chars_to_bytes(units, start, units.len() as i64 - start)
}

pub fn chars_to_bytes_all(units: &[CharUnit]) -> BytesMut {
    let src: &[u8] = bytemuck::cast_slice(units);
    let mut buf = BytesMut::zeroed(src.len());
    // SAFETY: `buf` was just sized to `src.len()` and is a fresh allocation.
    unsafe { copy_raw(buf.as_mut_ptr(), src.as_ptr(), src.len()) };
    buf
}

/// Raw bytes of the UTF-16 units of `text` in `[start, start + length)`.
///
/// Positions and lengths count UTF-16 code units, not `char`s or UTF-8 bytes.
pub fn text_to_bytes(text: &str, start: i64, length: i64) -> Result<BytesMut> {
    let units: Vec<CharUnit> = text.encode_utf16().collect();
    chars_to_bytes(&units, start, length)
}

pub fn text_to_bytes_from(text: &str, start: i64) -> Result<BytesMut> {
    let units: Vec<CharUnit> = text.encode_utf16().collect();
    chars_to_bytes_from(&units, start)
}

pub fn text_to_bytes_all(text: &str) -> BytesMut {
    let units: Vec<CharUnit> = text.encode_utf16().collect();
    chars_to_bytes_all(&units)
}

/// Encoded form of `text`. No raw reinterpretation happens here.
pub fn text_to_bytes_encoded(text: &str, encoding: TextEncoding) -> Bytes {
    encode_text(text, encoding)
}

/// Code units stored in `bytes[offset..offset + length]`.
///
/// `offset` and `length` are in bytes and are validated against `bytes.len()`; the
/// unit count is `length / CHAR_UNIT_SIZE`, so a trailing odd byte is ignored.
pub fn bytes_to_chars(bytes: &[u8], offset: i64, length: i64) -> Result<Vec<CharUnit>> {
    let (offset, length) = check_range(bytes.len(), offset, length)?;

    let count = length / CHAR_UNIT_SIZE;
    let mut units: Vec<CharUnit> = vec![0; count];
    block_copy(
        bytemuck::cast_slice_mut(&mut units[..]),
        &bytes[offset..],
        count * CHAR_UNIT_SIZE,
    )?;
    Ok(units)
}

/// Every whole code unit in `bytes`; a trailing odd byte is ignored
pub fn bytes_to_chars_all(bytes: &[u8]) -> Vec<CharUnit> {
    let count = bytes.len() / CHAR_UNIT_SIZE;
    let mut units: Vec<CharUnit> = vec![0; count];
    let dest: &mut [u8] = bytemuck::cast_slice_mut(&mut units[..]);
    // SAFETY: `dest` holds `count * CHAR_UNIT_SIZE` bytes and `bytes` at least as many.
    unsafe { copy_raw(dest.as_mut_ptr(), bytes.as_ptr(), dest.len()) };
    units
}

/// Text rebuilt from raw code units in `bytes[offset..offset + length]`
pub fn bytes_to_text(bytes: &[u8], offset: i64, length: i64) -> Result<String> {
    let units = bytes_to_chars(bytes, offset, length)?;
    String::from_utf16(&units).map_err(|_| CodecError::InvalidUtf16)
}

pub fn bytes_to_text_all(bytes: &[u8]) -> Result<String> {
    String::from_utf16(&bytes_to_chars_all(bytes)).map_err(|_| CodecError::InvalidUtf16)
}

/// Decode `bytes` with `encoding`
pub fn bytes_to_text_encoded(bytes: &[u8], encoding: TextEncoding) -> Result<String> {
    decode_text(bytes, encoding)
}

/// Raw byte length of `text` as code units
pub fn text_byte_size(text: &str) -> usize {
    text.encode_utf16().count() * CHAR_UNIT_SIZE
}

#[cfg(test)]
mod tests {
    use super::*;

    fn units(text: &str) -> Vec<CharUnit> {
        text.encode_utf16().collect()
    }

    #[test]
    fn test_check_range() {
        assert_eq!(check_range(4, 0, 4).unwrap(), (0, 4));
        assert_eq!(check_range(4, 4, 0).unwrap(), (4, 0));
        assert!(check_range(4, -1, 1).is_err());
        assert!(check_range(4, 5, 0).is_err());
        assert!(check_range(4, 0, -1).is_err());
        assert!(check_range(4, 2, 3).is_err());
    }

    #[test]
    fn test_widening_copy() {
        let bytes = chars_to_bytes(&units("abcd"), 1, 2).unwrap();
        let expected: Vec<u8> = units("bc").iter().flat_map(|u| u.to_ne_bytes()).collect();
        assert_eq!(&bytes[..], expected.as_slice());
    }

    #[test]
    fn test_range_error_names_argument() {
        let err = text_to_bytes("abcd", 2, 3).unwrap_err();
        assert!(matches!(
            err,
            CodecError::OutOfRange { argument: "length", value: 3, limit: 2 }
        ));

        let err = text_to_bytes("abcd", -1, 0).unwrap_err();
        assert!(matches!(err, CodecError::OutOfRange { argument: "start", .. }));
    }

    #[test]
    fn test_overload_equivalence() {
        let text = "héllo wörld";
        let n = text.encode_utf16().count() as i64;
        assert_eq!(text_to_bytes_all(text), text_to_bytes(text, 0, n).unwrap());
        assert_eq!(text_to_bytes_from(text, 3).unwrap(), text_to_bytes(text, 3, n - 3).unwrap());
        assert!(text_to_bytes_from(text, n + 1).is_err());
    }

    #[test]
    fn test_surrogate_pairs_count_as_two_units() {
        let text = "a\u{1F600}";
        assert_eq!(text_byte_size(text), 6);
        assert_eq!(text_to_bytes_all(text).len(), 6);
        assert_eq!(bytes_to_text_all(&text_to_bytes_all(text)).unwrap(), text);
    }

    #[test]
    fn test_bytes_to_chars_scaled() {
        let raw = text_to_bytes_all("wxyz");
        assert_eq!(bytes_to_chars(&raw, 2, 4).unwrap(), units("xy"));
        assert_eq!(bytes_to_chars(&raw, 0, 3).unwrap(), units("w"));
        assert!(bytes_to_chars(&raw, 2, 7).is_err());
        assert!(bytes_to_chars(&raw, 9, 0).is_err());
    }

    #[test]
    fn test_whole_conversions_match_ranged() {
        let source = units("block copy");
        let n = source.len() as i64;
        assert_eq!(chars_to_bytes_all(&source), chars_to_bytes(&source, 0, n).unwrap());
        assert!(chars_to_bytes_all(&[]).is_empty());

        let mut raw = chars_to_bytes_all(&source).to_vec();
        assert_eq!(bytes_to_chars_all(&raw), bytes_to_chars(&raw, 0, 2 * n).unwrap());

        // Odd trailing byte is dropped
        raw.push(0x7F);
        assert_eq!(bytes_to_chars_all(&raw), source);
        assert_eq!(bytes_to_chars_all(&[0x41]), Vec::<CharUnit>::new());
    }

    #[test]
    fn test_bytes_to_text() {
        let raw = text_to_bytes_all("grüße");
        assert_eq!(bytes_to_text(&raw, 4, 6).unwrap(), "üße");

        let lone_surrogate = 0xD800u16.to_ne_bytes();
        assert!(matches!(
            bytes_to_text_all(&lone_surrogate),
            Err(CodecError::InvalidUtf16)
        ));
    }

    #[test]
    fn test_encoded_overloads_delegate() {
        assert_eq!(&text_to_bytes_encoded("hi", TextEncoding::Utf8)[..], b"hi");
        assert_eq!(
            &text_to_bytes_encoded("hi", TextEncoding::Utf16Be)[..],
            &[0, b'h', 0, b'i']
        );
        assert_eq!(
            bytes_to_text_encoded(&[b'h', 0, b'i', 0], TextEncoding::Utf16Le).unwrap(),
            "hi"
        );
    }
}
