// src/types.rs
use bytemuck::{Pod, Zeroable};
use smallvec::SmallVec;

use crate::convert::RawBytes;
use crate::error::{CodecError, Result};
use crate::order::{ByteSwap, Endianness};

/// Byte width of one character unit (a UTF-16 code unit)
pub const CHAR_UNIT_SIZE: usize = 2;

/// A single UTF-16 code unit, the element of every character sequence
pub type CharUnit = u16;

/// Inline storage for the raw bytes of any supported scalar
pub type ScalarBytes = SmallVec<[u8; 16]>;

/// Supported scalar kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ScalarKind {
    Bool = 0,
    I8 = 1,
    U8 = 2,
    I16 = 3,
    U16 = 4,
    I32 = 5,
    U32 = 6,
    I64 = 7,
    U64 = 8,
    F32 = 9,
    F64 = 10,
    Decimal = 11,
    Char = 12,
}

impl ScalarKind {
    /// Every kind, in declaration order
    pub const ALL: [ScalarKind; 13] = [
        ScalarKind::Bool,
        ScalarKind::I8,
        ScalarKind::U8,
        ScalarKind::I16,
        ScalarKind::U16,
        ScalarKind::I32,
        ScalarKind::U32,
        ScalarKind::I64,
        ScalarKind::U64,
        ScalarKind::F32,
        ScalarKind::F64,
        ScalarKind::Decimal,
        ScalarKind::Char,
    ];

    /// Fixed size of this kind in bytes. Never data-dependent.
    pub const fn fixed_size(&self) -> usize {
        match self {
            ScalarKind::Bool | ScalarKind::I8 | ScalarKind::U8 => 1,
            ScalarKind::I16 | ScalarKind::U16 | ScalarKind::Char => CHAR_UNIT_SIZE,
            ScalarKind::I32 | ScalarKind::U32 | ScalarKind::F32 => 4,
            ScalarKind::I64 | ScalarKind::U64 | ScalarKind::F64 => 8,
            ScalarKind::Decimal => 16,
        }
    }

    /// Size in bits. A boolean carries a single bit of information.
    pub const fn bit_size(&self) -> usize {
        match self {
            ScalarKind::Bool => 1,
            other => other.fixed_size() << 3,
        }
    }

    pub fn from_u8(value: u8) -> Option<Self> {
        Self::ALL.get(value as usize).copied()
    }

    /// Check if this kind can be evaluated as a number
    pub fn is_numeric(&self) -> bool {
        !matches!(self, ScalarKind::Bool | ScalarKind::Char)
    }

    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            ScalarKind::I8
                | ScalarKind::U8
                | ScalarKind::I16
                | ScalarKind::U16
                | ScalarKind::I32
                | ScalarKind::U32
                | ScalarKind::I64
                | ScalarKind::U64
        )
    }

    pub fn is_float(&self) -> bool {
        matches!(self, ScalarKind::F32 | ScalarKind::F64)
    }

    pub fn name(&self) -> &'static str {
        match self {
            ScalarKind::Bool => "bool",
            ScalarKind::I8 => "i8",
            ScalarKind::U8 => "u8",
            ScalarKind::I16 => "i16",
            ScalarKind::U16 => "u16",
            ScalarKind::I32 => "i32",
            ScalarKind::U32 => "u32",
            ScalarKind::I64 => "i64",
            ScalarKind::U64 => "u64",
            ScalarKind::F32 => "f32",
            ScalarKind::F64 => "f64",
            ScalarKind::Decimal => "decimal",
            ScalarKind::Char => "char",
        }
    }
}

/// Text encodings understood by the encoding-aware conversions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextEncoding {
    #[default]
    Utf8,
    Utf16Le,
    Utf16Be,
}

/// 128-bit decimal: a 96-bit unsigned mantissa, a power-of-ten scale and a sign.
///
/// The field order is the in-memory layout, so the raw bytes of a `Decimal` match
/// the common 16-byte decimal representation (flags word first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Pod, Zeroable)]
#[repr(C)]
pub struct Decimal {
    /// Bits 16..24 hold the scale, bit 31 the sign
    pub flags: u32,
    pub hi: u32,
    pub lo: u32,
    pub mid: u32,
}

impl Decimal {
    const SCALE_SHIFT: u32 = 16;
    const SCALE_MASK: u32 = 0x00FF_0000;
    const SIGN_MASK: u32 = 0x8000_0000;

    /// Largest supported scale (digits after the decimal point)
    pub const MAX_SCALE: u8 = 28;

    pub fn new(mantissa: u128, scale: u8, negative: bool) -> Result<Self> {
        if mantissa >> 96 != 0 {
            let bits = (u128::BITS - mantissa.leading_zeros()) as i64;
            return Err(CodecError::out_of_range("mantissa_bits", bits, 96));
        }
        if scale > Self::MAX_SCALE {
            return Err(CodecError::out_of_range(
                "scale",
                scale as i64,
                Self::MAX_SCALE as i64,
            ));
        }

        let mut flags = (scale as u32) << Self::SCALE_SHIFT;
        if negative {
            flags |= Self::SIGN_MASK;
        }

        Ok(Decimal {
            flags,
            hi: (mantissa >> 64) as u32,
            lo: mantissa as u32,
            mid: (mantissa >> 32) as u32,
        })
    }

    pub fn from_i64(value: i64) -> Self {
        Decimal {
            flags: if value < 0 { Self::SIGN_MASK } else { 0 },
            hi: 0,
            lo: value.unsigned_abs() as u32,
            mid: (value.unsigned_abs() >> 32) as u32,
        }
    }

    pub fn mantissa(&self) -> u128 {
        (self.hi as u128) << 64 | (self.mid as u128) << 32 | self.lo as u128
    }

    pub fn scale(&self) -> u8 {
        ((self.flags & Self::SCALE_MASK) >> Self::SCALE_SHIFT) as u8
    }

    pub fn is_negative(&self) -> bool {
        self.flags & Self::SIGN_MASK != 0
    }

    /// Raw 128-bit pattern in native order
    pub fn to_bits(self) -> u128 {
        bytemuck::cast(self)
    }

    pub fn from_bits(bits: u128) -> Self {
        bytemuck::cast(bits)
    }
}

/// Compile-time element byte width of an array element type
pub trait ElementSize: Copy + 'static {
    const KIND: ScalarKind;
    const BYTE_SIZE: usize = Self::KIND.fixed_size();
}

macro_rules! impl_element_size {
    ($($t:ty => $kind:ident),+ $(,)?) => {$(
        impl ElementSize for $t {
            const KIND: ScalarKind = ScalarKind::$kind;
        }
    )+};
}

impl_element_size! {
    bool => Bool,
    i8 => I8,
    u8 => U8,
    i16 => I16,
    u16 => U16,
    i32 => I32,
    u32 => U32,
    i64 => I64,
    u64 => U64,
    f32 => F32,
    f64 => F64,
    Decimal => Decimal,
}

/// Total byte length of a homogeneous slice
pub fn byte_size<T: ElementSize>(values: &[T]) -> usize {
    values.len() * T::BYTE_SIZE
}

/// A typed scalar paired with its fixed byte width
#[derive(Debug, Clone, Copy)]
pub enum Scalar {
    Bool(bool),
    I8(i8),
    U8(u8),
    I16(i16),
    U16(u16),
    I32(i32),
    U32(u32),
    I64(i64),
    U64(u64),
    F32(f32),
    F64(f64),
    Decimal(Decimal),
    Char(CharUnit),
}

// Bit-exact equality, so NaN payloads and signed zeros compare by representation
impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        self.kind() == other.kind() && self.to_bytes() == other.to_bytes()
    }
}

impl Eq for Scalar {}

macro_rules! scalar_dispatch {
    ($value:expr, $v:ident => $body:expr) => {
        match $value {
            Scalar::Bool($v) => $body,
            Scalar::I8($v) => $body,
            Scalar::U8($v) => $body,
            Scalar::I16($v) => $body,
            Scalar::U16($v) => $body,
            Scalar::I32($v) => $body,
            Scalar::U32($v) => $body,
            Scalar::I64($v) => $body,
            Scalar::U64($v) => $body,
            Scalar::F32($v) => $body,
            Scalar::F64($v) => $body,
            Scalar::Decimal($v) => $body,
            Scalar::Char($v) => $body,
        }
    };
}

impl Scalar {
    pub fn kind(&self) -> ScalarKind {
        match self {
            Scalar::Bool(_) => ScalarKind::Bool,
            Scalar::I8(_) => ScalarKind::I8,
            Scalar::U8(_) => ScalarKind::U8,
            Scalar::I16(_) => ScalarKind::I16,
            Scalar::U16(_) => ScalarKind::U16,
            Scalar::I32(_) => ScalarKind::I32,
            Scalar::U32(_) => ScalarKind::U32,
            Scalar::I64(_) => ScalarKind::I64,
            Scalar::U64(_) => ScalarKind::U64,
            Scalar::F32(_) => ScalarKind::F32,
            Scalar::F64(_) => ScalarKind::F64,
            Scalar::Decimal(_) => ScalarKind::Decimal,
            Scalar::Char(_) => ScalarKind::Char,
        }
    }

    pub fn width(&self) -> usize {
        self.kind().fixed_size()
    }

    /// Raw bytes in native order
    pub fn to_bytes(&self) -> ScalarBytes {
        scalar_dispatch!(*self, v => SmallVec::from_slice(v.to_raw_bytes().as_ref()))
    }

    /// Raw bytes in the requested order
    pub fn to_bytes_ordered(&self, order: Endianness) -> ScalarBytes {
        let mut bytes = self.to_bytes();
        if !order.is_native() {
            bytes.reverse();
        }
        bytes
    }

    /// Rebuild a scalar of `kind` from the first `kind.fixed_size()` bytes
    pub fn from_bytes(kind: ScalarKind, bytes: &[u8]) -> Result<Self> {
        Ok(match kind {
            ScalarKind::Bool => Scalar::Bool(RawBytes::from_raw_bytes(bytes)?),
            ScalarKind::I8 => Scalar::I8(RawBytes::from_raw_bytes(bytes)?),
            ScalarKind::U8 => Scalar::U8(RawBytes::from_raw_bytes(bytes)?),
            ScalarKind::I16 => Scalar::I16(RawBytes::from_raw_bytes(bytes)?),
            ScalarKind::U16 => Scalar::U16(RawBytes::from_raw_bytes(bytes)?),
            ScalarKind::I32 => Scalar::I32(RawBytes::from_raw_bytes(bytes)?),
            ScalarKind::U32 => Scalar::U32(RawBytes::from_raw_bytes(bytes)?),
            ScalarKind::I64 => Scalar::I64(RawBytes::from_raw_bytes(bytes)?),
            ScalarKind::U64 => Scalar::U64(RawBytes::from_raw_bytes(bytes)?),
            ScalarKind::F32 => Scalar::F32(RawBytes::from_raw_bytes(bytes)?),
            ScalarKind::F64 => Scalar::F64(RawBytes::from_raw_bytes(bytes)?),
            ScalarKind::Decimal => Scalar::Decimal(RawBytes::from_raw_bytes(bytes)?),
            ScalarKind::Char => Scalar::Char(RawBytes::from_raw_bytes(bytes)?),
        })
    }

    pub fn from_bytes_ordered(kind: ScalarKind, bytes: &[u8], order: Endianness) -> Result<Self> {
        Ok(Self::from_bytes(kind, bytes)?.to_order(order))
    }

    /// Same scalar with its bytes reversed
    pub fn byte_swapped(&self) -> Self {
        match *self {
            Scalar::Bool(v) => Scalar::Bool(v),
            Scalar::I8(v) => Scalar::I8(v),
            Scalar::U8(v) => Scalar::U8(v),
            Scalar::I16(v) => Scalar::I16(v.byte_swapped()),
            Scalar::U16(v) => Scalar::U16(v.byte_swapped()),
            Scalar::I32(v) => Scalar::I32(v.byte_swapped()),
            Scalar::U32(v) => Scalar::U32(v.byte_swapped()),
            Scalar::I64(v) => Scalar::I64(v.byte_swapped()),
            Scalar::U64(v) => Scalar::U64(v.byte_swapped()),
            Scalar::F32(v) => Scalar::F32(v.byte_swapped()),
            Scalar::F64(v) => Scalar::F64(v.byte_swapped()),
            Scalar::Decimal(v) => Scalar::Decimal(v.byte_swapped()),
            Scalar::Char(v) => Scalar::Char(v.byte_swapped()),
        }
    }

    /// Swap only when `order` differs from the native order
    pub fn to_order(&self, order: Endianness) -> Self {
        if order.is_native() {
            *self
        } else {
            self.byte_swapped()
        }
    }
}
