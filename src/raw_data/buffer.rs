// src/raw_data/buffer.rs
use bytemuck::NoUninit;
use bytes::{BufMut, BytesMut};
use std::mem;

use crate::convert::RawBytes;
use crate::copy::block_copy;
use crate::error::{CodecError, Result};
use crate::order::{to_bytes_ordered, text_units_in_order, ByteSwap, Endianness};
use crate::types::{CharUnit, Decimal, ElementSize, Scalar, ScalarKind};

/// Accumulates scalars of a single kind as raw bytes in a chosen byte order
///
/// The buffer holds nothing but the values themselves: no header, no length
/// prefix. It tracks how many values were written so callers can frame the data
/// however they need.
///
/// # Example
///
/// ```
/// use rawcodec::raw_data::RawBuffer;
/// use rawcodec::{Endianness, ScalarKind};
///
/// let mut buffer = RawBuffer::new(ScalarKind::U16, Endianness::Big);
/// buffer.write_u16(0x0102).unwrap();
/// buffer.write_u16(0x0304).unwrap();
///
/// assert_eq!(buffer.value_count(), 2);
/// assert_eq!(buffer.as_bytes(), &[1, 2, 3, 4]);
/// ```
pub struct RawBuffer {
    buffer: BytesMut,
    kind: ScalarKind,
    order: Endianness,
    value_count: u64,
}

macro_rules! put_ordered {
    ($self:ident, $put_be:ident, $put_le:ident, $value:expr) => {
        match $self.order {
            Endianness::Big => $self.buffer.$put_be($value),
            Endianness::Little => $self.buffer.$put_le($value),
        }
    };
}

impl RawBuffer {
    /// Create a new buffer with default capacity (8192 bytes)
    pub fn new(kind: ScalarKind, order: Endianness) -> Self {
        Self::with_capacity(kind, order, 8192)
    }

    /// Buffer in the native byte order of this process
    pub fn native(kind: ScalarKind) -> Self {
        Self::new(kind, Endianness::native())
    }

    pub fn with_capacity(kind: ScalarKind, order: Endianness, capacity: usize) -> Self {
        RawBuffer {
            buffer: BytesMut::with_capacity(capacity),
            kind,
            order,
            value_count: 0,
        }
    }

    /// Write a single boolean value (as 1 byte: 0 or 1)
    pub fn write_bool(&mut self, value: bool) -> Result<()> {
        self.check_type(ScalarKind::Bool)?;
        self.buffer.put_u8(value as u8);
        self.value_count += 1;
        Ok(())
    }

    /// Write a single i8 value
    pub fn write_i8(&mut self, value: i8) -> Result<()> {
        self.check_type(ScalarKind::I8)?;
        self.buffer.put_i8(value);
        self.value_count += 1;
        Ok(())
    }

    /// Write a single u8 value
    pub fn write_u8(&mut self, value: u8) -> Result<()> {
        self.check_type(ScalarKind::U8)?;
        self.buffer.put_u8(value);
        self.value_count += 1;
        Ok(())
    }

    /// Write a single i16 value in the buffer's byte order
    pub fn write_i16(&mut self, value: i16) -> Result<()> {
        self.check_type(ScalarKind::I16)?;
        put_ordered!(self, put_i16, put_i16_le, value);
        self.value_count += 1;
        Ok(())
    }

    /// Write a single u16 value in the buffer's byte order
    pub fn write_u16(&mut self, value: u16) -> Result<()> {
        self.check_type(ScalarKind::U16)?;
        put_ordered!(self, put_u16, put_u16_le, value);
        self.value_count += 1;
        Ok(())
    }

    /// Write a single i32 value in the buffer's byte order
    pub fn write_i32(&mut self, value: i32) -> Result<()> {
        self.check_type(ScalarKind::I32)?;
        put_ordered!(self, put_i32, put_i32_le, value);
        self.value_count += 1;
        Ok(())
    }

    /// Write a single u32 value in the buffer's byte order
    pub fn write_u32(&mut self, value: u32) -> Result<()> {
        self.check_type(ScalarKind::U32)?;
        put_ordered!(self, put_u32, put_u32_le, value);
        self.value_count += 1;
        Ok(())
    }

    /// Write a single i64 value in the buffer's byte order
    pub fn write_i64(&mut self, value: i64) -> Result<()> {
        self.check_type(ScalarKind::I64)?;
        put_ordered!(self, put_i64, put_i64_le, value);
        self.value_count += 1;
        Ok(())
    }

    /// Write a single u64 value in the buffer's byte order
    pub fn write_u64(&mut self, value: u64) -> Result<()> {
        self.check_type(ScalarKind::U64)?;
        put_ordered!(self, put_u64, put_u64_le, value);
        self.value_count += 1;
        Ok(())
    }

    /// Write a single f32 value in the buffer's byte order
    pub fn write_f32(&mut self, value: f32) -> Result<()> {
        self.check_type(ScalarKind::F32)?;
        put_ordered!(self, put_f32, put_f32_le, value);
        self.value_count += 1;
        Ok(())
    }

    /// Write a single f64 value in the buffer's byte order
    pub fn write_f64(&mut self, value: f64) -> Result<()> {
        self.check_type(ScalarKind::F64)?;
        put_ordered!(self, put_f64, put_f64_le, value);
        self.value_count += 1;
        Ok(())
    }

    /// Write a 16-byte decimal, reversed as a whole in foreign order
    pub fn write_decimal(&mut self, value: Decimal) -> Result<()> {
        self.check_type(ScalarKind::Decimal)?;
        self.buffer.extend_from_slice(&to_bytes_ordered(value, self.order));
        self.value_count += 1;
        Ok(())
    }

    /// Write a single UTF-16 code unit
    pub fn write_char(&mut self, unit: CharUnit) -> Result<()> {
        self.check_type(ScalarKind::Char)?;
        put_ordered!(self, put_u16, put_u16_le, unit);
        self.value_count += 1;
        Ok(())
    }

    /// Write every UTF-16 code unit of `text`
    pub fn write_text(&mut self, text: &str) -> Result<()> {
        self.check_type(ScalarKind::Char)?;
        let units = text_units_in_order(text, self.order);
        self.append_native(&units)?;
        self.value_count += units.len() as u64;
        Ok(())
    }

    /// Write a tagged scalar; its kind must match the buffer's
    pub fn write_scalar(&mut self, value: Scalar) -> Result<()> {
        self.check_type(value.kind())?;
        self.buffer.extend_from_slice(&value.to_bytes_ordered(self.order));
        self.value_count += 1;
        Ok(())
    }

    /// Write a slice of values. In native order this is a single block copy.
    ///
    /// # Example
    ///
    /// ```
    /// use rawcodec::raw_data::RawBuffer;
    /// use rawcodec::ScalarKind;
    ///
    /// let mut buffer = RawBuffer::native(ScalarKind::F64);
    /// buffer.write_slice(&[1.0f64, 2.0, 3.0]).unwrap();
    /// assert_eq!(buffer.byte_len(), 24);
    /// ```
    pub fn write_slice<T>(&mut self, values: &[T]) -> Result<()>
    where
        T: RawBytes + ElementSize + ByteSwap + NoUninit,
    {
        let found = if self.kind == ScalarKind::Char && T::KIND == ScalarKind::U16 {
            ScalarKind::Char
        } else {
            T::KIND
        };
        self.check_type(found)?;

        if values.is_empty() {
            return Ok(());
        }

        if self.order.is_native() {
            self.append_native(values)?;
        } else {
            self.buffer.reserve(values.len() * T::WIDTH);
            for value in values {
                self.buffer.extend_from_slice(value.byte_swapped().to_raw_bytes().as_ref());
            }
        }

        self.value_count += values.len() as u64;
        Ok(())
    }

    fn append_native<T: NoUninit>(&mut self, values: &[T]) -> Result<()> {
        let src: &[u8] = bytemuck::cast_slice(values);
        let start = self.buffer.len();
        self.buffer.resize(start + src.len(), 0);
        block_copy(&mut self.buffer[start..], src, src.len())
    }

    pub fn kind(&self) -> ScalarKind {
        self.kind
    }

    pub fn order(&self) -> Endianness {
        self.order
    }

    pub fn value_count(&self) -> u64 {
        self.value_count
    }

    pub fn byte_len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.value_count = 0;
    }

    /// Take the buffer contents, leaving an empty buffer
    pub fn take(&mut self) -> BytesMut {
        self.value_count = 0;
        mem::take(&mut self.buffer)
    }

    pub fn reserve(&mut self, additional: usize) {
        self.buffer.reserve(additional);
    }

    fn check_type(&self, found: ScalarKind) -> Result<()> {
        if self.kind != found {
            Err(CodecError::TypeMismatch {
                expected: self.kind.name().to_string(),
                found: found.name().to_string(),
            })
        } else {
            Ok(())
        }
    }
}

// Debug without dumping the contents
impl std::fmt::Debug for RawBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RawBuffer")
            .field("kind", &self.kind)
            .field("order", &self.order)
            .field("value_count", &self.value_count)
            .field("byte_len", &self.buffer.len())
            .finish()
    }
}
