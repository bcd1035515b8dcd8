// src/raw_data/reader.rs
use byteorder::{BigEndian, ByteOrder, LittleEndian, ReadBytesExt};
use std::io::{self, Read};

use crate::convert::RawBytes;
use crate::error::{CodecError, Result};
use crate::order::{ByteOrderExt, ByteSwap, Endianness};
use crate::types::{CharUnit, Decimal, Scalar, ScalarKind, CHAR_UNIT_SIZE};

/// Read exactly `count * width` bytes without trusting `count` for the allocation.
///
/// The buffer grows with the data actually read, so a huge count on a short stream
/// fails with `UnexpectedEof` instead of allocating up front.
fn read_counted<R: Read>(reader: &mut R, count: usize, width: usize) -> Result<Vec<u8>> {
    let byte_len = count.checked_mul(width).ok_or_else(|| {
        CodecError::out_of_range(
            "count",
            i64::try_from(count).unwrap_or(i64::MAX),
            i64::try_from(usize::MAX / width).unwrap_or(i64::MAX),
        )
    })?;

    let mut bytes = Vec::new();
    reader.by_ref().take(byte_len as u64).read_to_end(&mut bytes)?;

    if bytes.len() < byte_len {
        return Err(CodecError::Io(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            format!("expected {} bytes, stream ended after {}", byte_len, bytes.len()),
        )));
    }
    Ok(bytes)
}

/// Reads raw values back from a stream in a given byte order
pub struct RawReader;

impl RawReader {
    /// Read `count` values of `T` laid out in `order`
    ///
    /// # Example
    ///
    /// ```
    /// use rawcodec::raw_data::RawReader;
    /// use rawcodec::Endianness;
    /// use std::io::Cursor;
    ///
    /// let mut cursor = Cursor::new(vec![0u8, 0, 0, 1, 0, 0, 0, 2]);
    /// let values: Vec<i32> = RawReader::read_values(&mut cursor, 2, Endianness::Big).unwrap();
    /// assert_eq!(values, vec![1, 2]);
    /// ```
    pub fn read_values<T, R: Read>(reader: &mut R, count: usize, order: Endianness) -> Result<Vec<T>>
    where
        T: RawBytes + ByteSwap,
    {
        if count == 0 {
            return Ok(Vec::new());
        }

        let bytes = read_counted(reader, count, T::WIDTH)?;

        bytes
            .chunks_exact(T::WIDTH)
            .map(|chunk| T::from_raw_bytes(chunk).map(|value| value.to_order(order)))
            .collect()
    }

    /// Read one scalar of `kind`
    pub fn read_scalar<R: Read>(reader: &mut R, kind: ScalarKind, order: Endianness) -> Result<Scalar> {
        match order {
            Endianness::Big => read_scalar_as::<BigEndian, R>(reader, kind),
            Endianness::Little => read_scalar_as::<LittleEndian, R>(reader, kind),
        }
    }

    /// Read `count` UTF-16 code units
    pub fn read_chars<R: Read>(reader: &mut R, count: usize, order: Endianness) -> Result<Vec<CharUnit>> {
        let bytes = read_counted(reader, count, CHAR_UNIT_SIZE)?;

        let mut units = vec![0 as CharUnit; count];
        match order {
            Endianness::Big => BigEndian::read_u16_into(&bytes, &mut units),
            Endianness::Little => LittleEndian::read_u16_into(&bytes, &mut units),
        }
        Ok(units)
    }

    /// Read `count` UTF-16 code units and rebuild the text
    pub fn read_text<R: Read>(reader: &mut R, count: usize, order: Endianness) -> Result<String> {
        let units = Self::read_chars(reader, count, order)?;
        String::from_utf16(&units).map_err(|_| CodecError::InvalidUtf16)
    }
}

fn read_scalar_as<E: ByteOrder, R: Read>(reader: &mut R, kind: ScalarKind) -> Result<Scalar> {
    Ok(match kind {
        ScalarKind::Bool => Scalar::Bool(reader.read_u8()? != 0),
        ScalarKind::I8 => Scalar::I8(reader.read_i8()?),
        ScalarKind::U8 => Scalar::U8(reader.read_u8()?),
        ScalarKind::I16 => Scalar::I16(reader.read_i16::<E>()?),
        ScalarKind::U16 => Scalar::U16(reader.read_u16::<E>()?),
        ScalarKind::I32 => Scalar::I32(reader.read_i32::<E>()?),
        ScalarKind::U32 => Scalar::U32(reader.read_u32::<E>()?),
        ScalarKind::I64 => Scalar::I64(reader.read_i64::<E>()?),
        ScalarKind::U64 => Scalar::U64(reader.read_u64::<E>()?),
        ScalarKind::F32 => Scalar::F32(reader.read_f32::<E>()?),
        ScalarKind::F64 => Scalar::F64(reader.read_f64::<E>()?),
        // The 16 stream bytes are the decimal's memory image, reversed when `E` is foreign
        ScalarKind::Decimal => Scalar::Decimal(Decimal::from_bits(reader.read_u128::<E>()?)),
        ScalarKind::Char => Scalar::Char(reader.read_u16::<E>()?),
    })
}
