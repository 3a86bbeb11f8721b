//! Raw byte regions handed to the record decoders.
use std::{fs::File, io::Read, path::Path};

use crate::{Error, Result};

/// Element type of a [Buffer].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[non_exhaustive]
pub enum PixelFormat {
    #[default]
    U8,
    S8,
    U16,
    S16,
    U32,
    S32,
    F32,
    U64,
    F64,
}

impl PixelFormat {
    /// Size of one element of a single channel.
    #[must_use]
    pub fn bytes_per_element(&self) -> usize {
        match self {
            PixelFormat::U8 | PixelFormat::S8 => 1,
            PixelFormat::U16 | PixelFormat::S16 => 2,
            PixelFormat::U32 | PixelFormat::S32 | PixelFormat::F32 => 4,
            PixelFormat::U64 | PixelFormat::F64 => 8,
        }
    }
}

/// Read-only view of a contiguous byte region containing one record.
///
/// Decoders only ever look at [RawBuffer::as_bytes]; the declared length is the
/// length of that slice.
pub trait RawBuffer {
    fn as_bytes(&self) -> &[u8];

    /// Element type of the region. Informational only: the element type already
    /// enters through the byte length, so no decoder consults it.
    fn format(&self) -> PixelFormat {
        PixelFormat::U8
    }

    fn len(&self) -> usize {
        self.as_bytes().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl RawBuffer for [u8] {
    fn as_bytes(&self) -> &[u8] {
        self
    }
}

impl RawBuffer for Vec<u8> {
    fn as_bytes(&self) -> &[u8] {
        self
    }
}

impl<T: RawBuffer + ?Sized> RawBuffer for &T {
    fn as_bytes(&self) -> &[u8] {
        (**self).as_bytes()
    }

    fn format(&self) -> PixelFormat {
        (**self).format()
    }
}

/// Owned image-like buffer of `width * height * channels` elements.
///
/// # Example
/// A single row of 200 8-bit elements is far too small for any ToF record.
/// ```
/// use calibinfo::{Buffer, PixelFormat, TofInfoV3};
///
/// let buffer = Buffer::new(1, 200, 1, PixelFormat::U8).unwrap();
/// assert_eq!(buffer.size(), 200);
///
/// let err = TofInfoV3::deserialize(&buffer).unwrap_err();
/// assert!(err.is_size_error());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buffer {
    width: usize,
    height: usize,
    channels: usize,
    format: PixelFormat,
    data: Vec<u8>,
}

impl Buffer {
    /// Create a zero filled buffer.
    ///
    /// # Errors
    /// [Error::BufferTooLarge] if the byte size of the dimensions overflows `usize`.
    pub fn new(
        width: usize,
        height: usize,
        channels: usize,
        format: PixelFormat,
    ) -> Result<Self> {
        let size = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(channels))
            .and_then(|n| n.checked_mul(format.bytes_per_element()))
            .ok_or(Error::BufferTooLarge {
                width,
                height,
                channels,
                format,
            })?;
        Ok(Self {
            width,
            height,
            channels,
            format,
            data: vec![0u8; size],
        })
    }

    /// Wrap raw record bytes as a single row of 8-bit elements.
    #[must_use]
    pub fn from_bytes(data: Vec<u8>) -> Self {
        Self {
            width: data.len(),
            height: 1,
            channels: 1,
            format: PixelFormat::U8,
            data,
        }
    }

    /// Read an entire file holding one captured record.
    ///
    /// # Errors
    /// Any ``std::io::Error`` opening or reading `path`.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut data = Vec::new();
        File::open(path)?.read_to_end(&mut data)?;
        Ok(Self::from_bytes(data))
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Total size in bytes.
    #[must_use]
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Mutable access to the bytes, e.g., for filling a buffer created with [Buffer::new].
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

impl RawBuffer for Buffer {
    fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    fn format(&self) -> PixelFormat {
        self.format
    }
}

impl From<Vec<u8>> for Buffer {
    fn from(data: Vec<u8>) -> Self {
        Buffer::from_bytes(data)
    }
}
