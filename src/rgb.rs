//! RGB sensor info records.
use crate::{
    bytes::read,
    calibration::{decode_extrinsic, decode_model, CalibrationModel, ExtrinsicCalibration},
    record::{self, Record, RecordKind, Version},
    RawBuffer, Result,
};

/// RGB sensor info, layout version 1.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RGBInfoV1 {
    pub version: Version,
    pub frame_counter: u32,
    pub timestamp_ns: u64,
    /// Exposure time in seconds.
    pub exposure_time: f32,
    pub extrinsic_optic_to_user: ExtrinsicCalibration,
    pub intrinsic_calibration: CalibrationModel,
    pub inverse_intrinsic_calibration: CalibrationModel,
}

impl RGBInfoV1 {
    const FRAME_COUNTER: usize = 4;
    const TIMESTAMP_NS: usize = Self::FRAME_COUNTER + 4;
    const EXPOSURE_TIME: usize = Self::TIMESTAMP_NS + 8;
    const EXTRINSIC_OPTIC_TO_USER: usize = Self::EXPOSURE_TIME + 4;
    const INTRINSIC_CALIBRATION: usize = Self::EXTRINSIC_OPTIC_TO_USER + ExtrinsicCalibration::LEN;
    const INVERSE_INTRINSIC_CALIBRATION: usize =
        Self::INTRINSIC_CALIBRATION + CalibrationModel::<32>::LEN;

    /// Decode from `buffer`.
    ///
    /// # Errors
    /// [crate::Error::NotEnoughData] if `buffer` is shorter than [Self::SIZE], or
    /// [crate::Error::UnsupportedVersion] if the version tag is 0.
    pub fn deserialize<B: RawBuffer + ?Sized>(buffer: &B) -> Result<Self> {
        record::decode(buffer)
    }
}

impl Record for RGBInfoV1 {
    const KIND: RecordKind = RecordKind::RgbInfo;
    const VERSION: Version = 1;
    const SIZE: usize = Self::INVERSE_INTRINSIC_CALIBRATION + CalibrationModel::<32>::LEN;

    fn decode_fields(buf: &[u8]) -> Self {
        RGBInfoV1 {
            version: read(buf, record::VERSION_OFFSET),
            frame_counter: read(buf, Self::FRAME_COUNTER),
            timestamp_ns: read(buf, Self::TIMESTAMP_NS),
            exposure_time: read(buf, Self::EXPOSURE_TIME),
            extrinsic_optic_to_user: decode_extrinsic(buf, Self::EXTRINSIC_OPTIC_TO_USER),
            intrinsic_calibration: decode_model(buf, Self::INTRINSIC_CALIBRATION),
            inverse_intrinsic_calibration: decode_model(buf, Self::INVERSE_INTRINSIC_CALIBRATION),
        }
    }
}
