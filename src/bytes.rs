//! Fixed-width little-endian field readers.
//!
//! Readers never check bounds against the record layout; callers validate the
//! total buffer length against the record's minimum size before reading any field.
//! Reading past the end of `buf` panics.
use std::borrow::Cow;

/// A scalar with a fixed wire width.
pub trait Field: Copy + Default {
    /// Number of bytes on the wire.
    const WIDTH: usize;

    /// Decode from the first [Self::WIDTH] bytes of `buf`.
    fn from_le(buf: &[u8]) -> Self;
}

macro_rules! impl_field {
    ($($ty:ty),*) => {
        $(
            impl Field for $ty {
                const WIDTH: usize = std::mem::size_of::<$ty>();

                fn from_le(buf: &[u8]) -> Self {
                    let mut raw = [0u8; std::mem::size_of::<$ty>()];
                    raw.copy_from_slice(&buf[..Self::WIDTH]);
                    <$ty>::from_le_bytes(raw)
                }
            }
        )*
    };
}

impl_field!(u8, i8, u16, i16, u32, i32, u64, i64, f32, f64);

/// Read a single scalar at `offset`.
///
/// # Panics
/// If `buf` does not contain `T::WIDTH` bytes at `offset`.
#[must_use]
pub fn read<T: Field>(buf: &[u8], offset: usize) -> T {
    T::from_le(&buf[offset..offset + T::WIDTH])
}

/// Read `N` consecutive scalars starting at `offset`.
///
/// # Panics
/// If `buf` does not contain `N * T::WIDTH` bytes at `offset`.
#[must_use]
pub fn read_array<T: Field, const N: usize>(buf: &[u8], offset: usize) -> [T; N] {
    std::array::from_fn(|idx| read(buf, offset + idx * T::WIDTH))
}

/// Interpret a NUL padded byte field as text. Bytes after the first NUL are ignored.
#[must_use]
pub fn c_str(dat: &[u8]) -> Cow<'_, str> {
    let end = dat.iter().position(|b| *b == 0).unwrap_or(dat.len());
    String::from_utf8_lossy(&dat[..end])
}
