//! Size and version validation shared by all record decoders.
//!
//! Every record layout starts with a `u32` version tag. A decode succeeds only when
//! the buffer covers the decoder's fixed layout *and* the version tag is at least the
//! decoder's version. The two checks are independent: a buffer tagged with a newer
//! version that is too short for the decoder's layout is still a size error.
use std::fmt::Display;

use tracing::{debug, trace};

use crate::{
    bytes::read,
    ods::{ODSInfoV1, ODSOccupancyGridV1},
    rgb::RGBInfoV1,
    tof::{TofInfoV3, TofInfoV4},
    Error, RawBuffer, Result,
};

/// Record layout version tag.
pub type Version = u32;

/// Offset of the version tag in every record layout.
pub const VERSION_OFFSET: usize = 0;

const VERSION_END: usize = VERSION_OFFSET + 4;

/// The kinds of records that can be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[non_exhaustive]
pub enum RecordKind {
    TofInfo,
    RgbInfo,
    OdsInfo,
    OdsOccupancyGrid,
}

impl Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RecordKind::TofInfo => "TofInfo",
            RecordKind::RgbInfo => "RGBInfo",
            RecordKind::OdsInfo => "ODSInfo",
            RecordKind::OdsOccupancyGrid => "ODSOccupancyGrid",
        };
        write!(f, "{name}")
    }
}

/// A fixed layout, versioned record.
///
/// Implementors describe their layout through the associated constants and extract
/// fields in [Record::decode_fields]; validation is done once by [decode].
pub trait Record: Sized {
    const KIND: RecordKind;
    /// Oldest version tag whose layout contains every field of this record.
    const VERSION: Version;
    /// Size in bytes of the fixed layout. [decode] never accepts fewer bytes than
    /// the version tag needs, even if this is smaller.
    const SIZE: usize;

    /// Extract all fields.
    ///
    /// # Panics
    /// If `buf` is shorter than [Record::SIZE]. Use [decode] unless the length has
    /// already been checked.
    fn decode_fields(buf: &[u8]) -> Self;
}

fn check_size(kind: RecordKind, version: Version, actual: usize, minimum: usize) -> Result<()> {
    if actual < minimum {
        debug!(%kind, version, actual, minimum, "buffer too small for record");
        return Err(Error::NotEnoughData {
            kind,
            version,
            actual,
            minimum,
        });
    }
    Ok(())
}

/// Validate `buffer` and decode it as `R`.
///
/// # Errors
/// [Error::NotEnoughData] if the buffer is shorter than `R::SIZE`, regardless of its
/// content, or [Error::UnsupportedVersion] if the version tag is older than
/// `R::VERSION`. No partially decoded record is ever returned.
pub fn decode<R, B>(buffer: &B) -> Result<R>
where
    R: Record,
    B: RawBuffer + ?Sized,
{
    let buf = buffer.as_bytes();
    // a layout always covers its own version tag
    check_size(R::KIND, R::VERSION, buf.len(), R::SIZE.max(VERSION_END))?;

    let version: Version = read(buf, VERSION_OFFSET);
    if version < R::VERSION {
        debug!(kind = %R::KIND, version, minimum = R::VERSION, "unsupported record version");
        return Err(Error::UnsupportedVersion {
            kind: R::KIND,
            actual: version,
            minimum: R::VERSION,
        });
    }

    let record = R::decode_fields(buf);
    trace!(kind = %R::KIND, version, size = buf.len(), "decoded record");
    Ok(record)
}

/// Read only the version tag of a `kind` record.
///
/// # Errors
/// [Error::NotEnoughData] if the buffer cannot hold the version tag. The error
/// names the oldest version of `kind`.
pub fn peek_version<B>(kind: RecordKind, buffer: &B) -> Result<Version>
where
    B: RawBuffer + ?Sized,
{
    let buf = buffer.as_bytes();
    check_size(kind, oldest_version(kind), buf.len(), VERSION_END)?;
    Ok(read(buf, VERSION_OFFSET))
}

/// Oldest version of `kind` that has a known layout.
#[must_use]
pub fn oldest_version(kind: RecordKind) -> Version {
    match kind {
        RecordKind::TofInfo => TofInfoV3::VERSION,
        RecordKind::RgbInfo => RGBInfoV1::VERSION,
        RecordKind::OdsInfo => ODSInfoV1::VERSION,
        RecordKind::OdsOccupancyGrid => ODSOccupancyGridV1::VERSION,
    }
}

/// Smallest buffer that can hold a `kind` record of `version`.
///
/// Returns `None` for versions older than the first known layout. Newer versions
/// only ever append fields, so versions beyond the newest known layout map to that
/// layout's size.
#[must_use]
pub fn minimum_size(kind: RecordKind, version: Version) -> Option<usize> {
    match kind {
        RecordKind::TofInfo => match version {
            v if v < TofInfoV3::VERSION => None,
            v if v < TofInfoV4::VERSION => Some(TofInfoV3::SIZE),
            _ => Some(TofInfoV4::SIZE),
        },
        RecordKind::RgbInfo => (version >= RGBInfoV1::VERSION).then_some(RGBInfoV1::SIZE),
        RecordKind::OdsInfo => (version >= ODSInfoV1::VERSION).then_some(ODSInfoV1::SIZE),
        RecordKind::OdsOccupancyGrid => {
            (version >= ODSOccupancyGridV1::VERSION).then_some(ODSOccupancyGridV1::SIZE)
        }
    }
}
