// src/utils/string_encoding.rs
use bytes::{BufMut, Bytes, BytesMut};

use crate::error::{CodecError, Result};
use crate::types::{CharUnit, TextEncoding, CHAR_UNIT_SIZE};

/// Encode `text` with the standard codec for `encoding`
pub fn encode_text(text: &str, encoding: TextEncoding) -> Bytes {
    match encoding {
        TextEncoding::Utf8 => Bytes::copy_from_slice(text.as_bytes()),
        TextEncoding::Utf16Le | TextEncoding::Utf16Be => {
            let mut buf = BytesMut::with_capacity(text.len() * CHAR_UNIT_SIZE);
            for unit in text.encode_utf16() {
                if encoding == TextEncoding::Utf16Le {
                    buf.put_u16_le(unit);
                } else {
                    buf.put_u16(unit);
                }
            }
            buf.freeze()
        }
    }
}

/// Decode `bytes` with the standard codec for `encoding`
pub fn decode_text(bytes: &[u8], encoding: TextEncoding) -> Result<String> {
    match encoding {
        TextEncoding::Utf8 => String::from_utf8(bytes.to_vec()).map_err(|_| CodecError::InvalidUtf8),
        TextEncoding::Utf16Le | TextEncoding::Utf16Be => {
            if bytes.len() % CHAR_UNIT_SIZE != 0 {
                return Err(CodecError::InvalidUtf16);
            }
            let units: Vec<CharUnit> = bytes
                .chunks_exact(CHAR_UNIT_SIZE)
                .map(|pair| {
                    let pair = [pair[0], pair[1]];
                    if encoding == TextEncoding::Utf16Le {
                        CharUnit::from_le_bytes(pair)
                    } else {
                        CharUnit::from_be_bytes(pair)
                    }
                })
                .collect();
            String::from_utf16(&units).map_err(|_| CodecError::InvalidUtf16)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf8() {
        assert_eq!(&encode_text("ñ", TextEncoding::Utf8)[..], &[0xC3, 0xB1]);
        assert_eq!(decode_text(&[0xC3, 0xB1], TextEncoding::Utf8).unwrap(), "ñ");
        assert!(matches!(
            decode_text(&[0xFF], TextEncoding::Utf8),
            Err(CodecError::InvalidUtf8)
        ));
    }

    #[test]
    fn test_utf16_both_orders() {
        let le = encode_text("A\u{1F600}", TextEncoding::Utf16Le);
        assert_eq!(&le[..], &[0x41, 0x00, 0x3D, 0xD8, 0x00, 0xDE]);
        let be = encode_text("A\u{1F600}", TextEncoding::Utf16Be);
        assert_eq!(&be[..], &[0x00, 0x41, 0xD8, 0x3D, 0xDE, 0x00]);

        assert_eq!(decode_text(&le, TextEncoding::Utf16Le).unwrap(), "A\u{1F600}");
        assert_eq!(decode_text(&be, TextEncoding::Utf16Be).unwrap(), "A\u{1F600}");
    }

    #[test]
    fn test_utf16_odd_length_rejected() {
        assert!(decode_text(&[0x41, 0x00, 0x42], TextEncoding::Utf16Le).is_err());
    }
}
