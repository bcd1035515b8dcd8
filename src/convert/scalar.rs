// src/convert/scalar.rs
use crate::copy::block_copy;
use crate::error::{CodecError, Result};
use crate::types::Decimal;

/// Raw, native-order byte view of a fixed-width scalar.
///
/// The conversion is a plain bit copy: no byte-order change and no numeric
/// re-encoding, so NaN payloads and signed zeros survive a round trip.
pub trait RawBytes: Sized + Copy {
    /// Width in bytes, constant per type
    const WIDTH: usize;

    /// Fixed-size byte array holding one value
    type Bytes: AsRef<[u8]> + AsMut<[u8]> + Default + Copy;

    fn to_raw_bytes(self) -> Self::Bytes;

    fn from_raw_array(bytes: Self::Bytes) -> Self;

    /// Read a value from the first `WIDTH` bytes of `bytes`
    fn from_raw_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < Self::WIDTH {
            return Err(CodecError::BufferTooShort {
                needed: Self::WIDTH,
                actual: bytes.len(),
            });
        }

        let mut raw = Self::Bytes::default();
        block_copy(raw.as_mut(), bytes, Self::WIDTH)?;
        Ok(Self::from_raw_array(raw))
    }
}

macro_rules! impl_raw_bytes {
    ($($t:ty),+ $(,)?) => {$(
        impl RawBytes for $t {
            const WIDTH: usize = std::mem::size_of::<$t>();
            type Bytes = [u8; std::mem::size_of::<$t>()];

            #[inline]
            fn to_raw_bytes(self) -> Self::Bytes {
                self.to_ne_bytes()
            }

            #[inline]
            fn from_raw_array(bytes: Self::Bytes) -> Self {
                <$t>::from_ne_bytes(bytes)
            }
        }
    )+};
}

impl_raw_bytes!(i8, u8, i16, u16, i32, u32, i64, u64, f32, f64);

impl RawBytes for bool {
    const WIDTH: usize = 1;
    type Bytes = [u8; 1];

    #[inline]
    fn to_raw_bytes(self) -> Self::Bytes {
        [self as u8]
    }

    /// Any non-zero byte reads as `true`
    #[inline]
    fn from_raw_array(bytes: Self::Bytes) -> Self {
        bytes[0] != 0
    }
}

impl RawBytes for Decimal {
    const WIDTH: usize = 16;
    type Bytes = [u8; 16];

    #[inline]
    fn to_raw_bytes(self) -> Self::Bytes {
        bytemuck::cast(self)
    }

    #[inline]
    fn from_raw_array(bytes: Self::Bytes) -> Self {
        bytemuck::cast(bytes)
    }
}

/// Native-order bytes of `value`
#[inline]
pub fn to_bytes<T: RawBytes>(value: T) -> T::Bytes {
    value.to_raw_bytes()
}

/// Value stored in the first `T::WIDTH` bytes of `bytes`
#[inline]
pub fn from_bytes<T: RawBytes>(bytes: &[u8]) -> Result<T> {
    T::from_raw_bytes(bytes)
}

/// [`from_bytes`] over an optional buffer, failing with [`CodecError::NullInput`]
/// when it is absent
pub fn from_bytes_opt<T: RawBytes>(bytes: Option<&[u8]>) -> Result<T> {
    let bytes = bytes.ok_or(CodecError::NullInput { argument: "bytes" })?;
    T::from_raw_bytes(bytes)
}
