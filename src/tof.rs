//! Time-of-flight sensor info records.
//!
//! The v4 layout is the v3 layout with the measurement block fields appended, so
//! [TofInfoV4] reuses the v3 field extraction for the shared prefix.
use std::borrow::Cow;

use crate::{
    bytes::{self, read, read_array},
    calibration::{decode_extrinsic, decode_model, CalibrationModel, ExtrinsicCalibration},
    record::{self, peek_version, Record, RecordKind, Version},
    RawBuffer, Result,
};

/// Number of per-channel amplitude normalization factors.
pub const NUM_AMP_NORMALIZATION_FACTORS: usize = 3;
/// Number of exposures per frame.
pub const NUM_EXPOSURES: usize = 3;
/// Size of the NUL padded mode and imager text fields.
pub const TEXT_LEN: usize = 32;

/// ToF sensor info, layout version 3.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TofInfoV3 {
    pub version: Version,
    /// Amplitude value of one LSB of the amplitude image.
    pub amplitude_resolution: f32,
    /// Distance in meters of one LSB of the distance image.
    pub distance_resolution: f32,
    pub amp_normalization_factors: [f32; NUM_AMP_NORMALIZATION_FACTORS],
    pub extrinsic_optic_to_user: ExtrinsicCalibration,
    pub intrinsic_calibration: CalibrationModel,
    pub inverse_intrinsic_calibration: CalibrationModel,
    /// Start of each exposure.
    pub exposure_timestamps_ns: [u64; NUM_EXPOSURES],
    /// Duration of each exposure.
    pub exposure_times_s: [f32; NUM_EXPOSURES],
    /// Illumination temperature in degrees Celsius.
    pub illu_temperature: f32,
    pub mode: [u8; TEXT_LEN],
    pub imager: [u8; TEXT_LEN],
}

impl TofInfoV3 {
    const AMPLITUDE_RESOLUTION: usize = 4;
    const DISTANCE_RESOLUTION: usize = Self::AMPLITUDE_RESOLUTION + 4;
    const AMP_NORMALIZATION_FACTORS: usize = Self::DISTANCE_RESOLUTION + 4;
    const EXTRINSIC_OPTIC_TO_USER: usize =
        Self::AMP_NORMALIZATION_FACTORS + NUM_AMP_NORMALIZATION_FACTORS * 4;
    const INTRINSIC_CALIBRATION: usize = Self::EXTRINSIC_OPTIC_TO_USER + ExtrinsicCalibration::LEN;
    const INVERSE_INTRINSIC_CALIBRATION: usize =
        Self::INTRINSIC_CALIBRATION + CalibrationModel::<32>::LEN;
    const EXPOSURE_TIMESTAMPS_NS: usize =
        Self::INVERSE_INTRINSIC_CALIBRATION + CalibrationModel::<32>::LEN;
    const EXPOSURE_TIMES_S: usize = Self::EXPOSURE_TIMESTAMPS_NS + NUM_EXPOSURES * 8;
    const ILLU_TEMPERATURE: usize = Self::EXPOSURE_TIMES_S + NUM_EXPOSURES * 4;
    const MODE: usize = Self::ILLU_TEMPERATURE + 4;
    const IMAGER: usize = Self::MODE + TEXT_LEN;

    /// Decode from `buffer`.
    ///
    /// # Errors
    /// [crate::Error::NotEnoughData] if `buffer` is shorter than [Self::SIZE], or
    /// [crate::Error::UnsupportedVersion] if the version tag is less than 3.
    pub fn deserialize<B: RawBuffer + ?Sized>(buffer: &B) -> Result<Self> {
        record::decode(buffer)
    }

    /// Operating mode name.
    #[must_use]
    pub fn mode_str(&self) -> Cow<'_, str> {
        bytes::c_str(&self.mode)
    }

    /// Imager name.
    #[must_use]
    pub fn imager_str(&self) -> Cow<'_, str> {
        bytes::c_str(&self.imager)
    }
}

impl Record for TofInfoV3 {
    const KIND: RecordKind = RecordKind::TofInfo;
    const VERSION: Version = 3;
    const SIZE: usize = Self::IMAGER + TEXT_LEN;

    fn decode_fields(buf: &[u8]) -> Self {
        TofInfoV3 {
            version: read(buf, record::VERSION_OFFSET),
            amplitude_resolution: read(buf, Self::AMPLITUDE_RESOLUTION),
            distance_resolution: read(buf, Self::DISTANCE_RESOLUTION),
            amp_normalization_factors: read_array(buf, Self::AMP_NORMALIZATION_FACTORS),
            extrinsic_optic_to_user: decode_extrinsic(buf, Self::EXTRINSIC_OPTIC_TO_USER),
            intrinsic_calibration: decode_model(buf, Self::INTRINSIC_CALIBRATION),
            inverse_intrinsic_calibration: decode_model(buf, Self::INVERSE_INTRINSIC_CALIBRATION),
            exposure_timestamps_ns: read_array(buf, Self::EXPOSURE_TIMESTAMPS_NS),
            exposure_times_s: read_array(buf, Self::EXPOSURE_TIMES_S),
            illu_temperature: read(buf, Self::ILLU_TEMPERATURE),
            mode: read_array(buf, Self::MODE),
            imager: read_array(buf, Self::IMAGER),
        }
    }
}

/// ToF sensor info, layout version 4.
///
/// Contains every [TofInfoV3] field plus the measurement block the frame was
/// acquired with.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TofInfoV4 {
    pub version: Version,
    pub amplitude_resolution: f32,
    pub distance_resolution: f32,
    pub amp_normalization_factors: [f32; NUM_AMP_NORMALIZATION_FACTORS],
    pub extrinsic_optic_to_user: ExtrinsicCalibration,
    pub intrinsic_calibration: CalibrationModel,
    pub inverse_intrinsic_calibration: CalibrationModel,
    pub exposure_timestamps_ns: [u64; NUM_EXPOSURES],
    pub exposure_times_s: [f32; NUM_EXPOSURES],
    pub illu_temperature: f32,
    pub mode: [u8; TEXT_LEN],
    pub imager: [u8; TEXT_LEN],
    /// Index of the measurement block within the current mode.
    pub measurement_block_index: u32,
    /// Lower bound of the measurement range in meters.
    pub measurement_range_min: f32,
    /// Upper bound of the measurement range in meters.
    pub measurement_range_max: f32,
}

impl TofInfoV4 {
    const MEASUREMENT_BLOCK_INDEX: usize = TofInfoV3::SIZE;
    const MEASUREMENT_RANGE_MIN: usize = Self::MEASUREMENT_BLOCK_INDEX + 4;
    const MEASUREMENT_RANGE_MAX: usize = Self::MEASUREMENT_RANGE_MIN + 4;

    /// Decode from `buffer`.
    ///
    /// A buffer tagged as version 4 or newer that does not also cover the v4
    /// extension fields is rejected; it is not decoded as v3.
    ///
    /// # Errors
    /// [crate::Error::NotEnoughData] if `buffer` is shorter than [Self::SIZE], or
    /// [crate::Error::UnsupportedVersion] if the version tag is less than 4.
    pub fn deserialize<B: RawBuffer + ?Sized>(buffer: &B) -> Result<Self> {
        record::decode(buffer)
    }

    #[must_use]
    pub fn mode_str(&self) -> Cow<'_, str> {
        bytes::c_str(&self.mode)
    }

    #[must_use]
    pub fn imager_str(&self) -> Cow<'_, str> {
        bytes::c_str(&self.imager)
    }
}

impl Record for TofInfoV4 {
    const KIND: RecordKind = RecordKind::TofInfo;
    const VERSION: Version = 4;
    const SIZE: usize = Self::MEASUREMENT_RANGE_MAX + 4;

    fn decode_fields(buf: &[u8]) -> Self {
        let TofInfoV3 {
            version,
            amplitude_resolution,
            distance_resolution,
            amp_normalization_factors,
            extrinsic_optic_to_user,
            intrinsic_calibration,
            inverse_intrinsic_calibration,
            exposure_timestamps_ns,
            exposure_times_s,
            illu_temperature,
            mode,
            imager,
        } = TofInfoV3::decode_fields(buf);

        TofInfoV4 {
            version,
            amplitude_resolution,
            distance_resolution,
            amp_normalization_factors,
            extrinsic_optic_to_user,
            intrinsic_calibration,
            inverse_intrinsic_calibration,
            exposure_timestamps_ns,
            exposure_times_s,
            illu_temperature,
            mode,
            imager,
            measurement_block_index: read(buf, Self::MEASUREMENT_BLOCK_INDEX),
            measurement_range_min: read(buf, Self::MEASUREMENT_RANGE_MIN),
            measurement_range_max: read(buf, Self::MEASUREMENT_RANGE_MAX),
        }
    }
}

/// The v3 prefix of a v4 record. The version tag is kept as is.
impl From<TofInfoV4> for TofInfoV3 {
    fn from(v4: TofInfoV4) -> Self {
        TofInfoV3 {
            version: v4.version,
            amplitude_resolution: v4.amplitude_resolution,
            distance_resolution: v4.distance_resolution,
            amp_normalization_factors: v4.amp_normalization_factors,
            extrinsic_optic_to_user: v4.extrinsic_optic_to_user,
            intrinsic_calibration: v4.intrinsic_calibration,
            inverse_intrinsic_calibration: v4.inverse_intrinsic_calibration,
            exposure_timestamps_ns: v4.exposure_timestamps_ns,
            exposure_times_s: v4.exposure_times_s,
            illu_temperature: v4.illu_temperature,
            mode: v4.mode,
            imager: v4.imager,
        }
    }
}

/// ToF info decoded with the newest layout its version tag claims.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TofInfo {
    V3(TofInfoV3),
    V4(TofInfoV4),
}

impl TofInfo {
    /// Decode as [TofInfoV4] if the version tag is 4 or newer, otherwise as [TofInfoV3].
    ///
    /// # Errors
    /// [crate::Error::NotEnoughData] if `buffer` does not cover the layout of the
    /// tagged version, or [crate::Error::UnsupportedVersion] for tags older than 3.
    pub fn deserialize<B: RawBuffer + ?Sized>(buffer: &B) -> Result<Self> {
        let version = peek_version(RecordKind::TofInfo, buffer)?;
        if version >= TofInfoV4::VERSION {
            TofInfoV4::deserialize(buffer).map(TofInfo::V4)
        } else {
            TofInfoV3::deserialize(buffer).map(TofInfo::V3)
        }
    }

    #[must_use]
    pub fn version(&self) -> Version {
        match self {
            TofInfo::V3(info) => info.version,
            TofInfo::V4(info) => info.version,
        }
    }

    /// Fields common to all versions.
    #[must_use]
    pub fn as_v3(&self) -> TofInfoV3 {
        match self {
            TofInfo::V3(info) => info.clone(),
            TofInfo::V4(info) => TofInfoV3::from(info.clone()),
        }
    }
}
