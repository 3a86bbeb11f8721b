use crate::{
    buffer::PixelFormat,
    record::{RecordKind, Version},
};

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The buffer cannot hold the fixed layout of the requested record version.
    #[error("Not enough bytes for {kind} v{version}: got {actual}, need {minimum}")]
    NotEnoughData {
        kind: RecordKind,
        /// Layout version the size was checked against
        version: Version,
        /// Number of bytes we got
        actual: usize,
        /// Minimum number of expected bytes
        minimum: usize,
    },

    /// The version tag in the buffer is older than the layout the decoder requires.
    #[error("Unsupported {kind} version {actual}; decoder requires at least {minimum}")]
    UnsupportedVersion {
        kind: RecordKind,
        actual: Version,
        minimum: Version,
    },

    /// The byte size of the requested buffer dimensions does not fit in `usize`.
    #[error("Buffer of {width}x{height}x{channels} {format:?} elements is too large")]
    BufferTooLarge {
        width: usize,
        height: usize,
        channels: usize,
        format: PixelFormat,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// True for [Error::NotEnoughData].
    #[must_use]
    pub fn is_size_error(&self) -> bool {
        matches!(self, Error::NotEnoughData { .. })
    }

    /// True for [Error::UnsupportedVersion]. A caller may retry such a buffer with a
    /// decoder for an older version.
    #[must_use]
    pub fn is_version_error(&self) -> bool {
        matches!(self, Error::UnsupportedVersion { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_and_version_errors_are_distinguishable() {
        let size = Error::NotEnoughData {
            kind: RecordKind::TofInfo,
            version: 4,
            actual: 416,
            minimum: 428,
        };
        let version = Error::UnsupportedVersion {
            kind: RecordKind::TofInfo,
            actual: 3,
            minimum: 4,
        };

        assert!(size.is_size_error());
        assert!(!size.is_version_error());
        assert!(version.is_version_error());
        assert!(!version.is_size_error());
        assert_eq!(
            size.to_string(),
            "Not enough bytes for TofInfo v4: got 416, need 428"
        );
        assert_eq!(
            version.to_string(),
            "Unsupported TofInfo version 3; decoder requires at least 4"
        );
    }
}
