//! Calibration structures shared by the ToF and RGB info records.
use crate::bytes::{read, read_array};

/// Rigid transform from a sensor's optical frame to the user frame.
///
/// Translation is in meters, rotation in radians.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ExtrinsicCalibration {
    pub trans_x: f32,
    pub trans_y: f32,
    pub trans_z: f32,
    pub rot_x: f32,
    pub rot_y: f32,
    pub rot_z: f32,
}

impl ExtrinsicCalibration {
    /// Size on the wire.
    pub const LEN: usize = 6 * 4;

    #[must_use]
    pub fn translation(&self) -> [f32; 3] {
        [self.trans_x, self.trans_y, self.trans_z]
    }

    #[must_use]
    pub fn rotation(&self) -> [f32; 3] {
        [self.rot_x, self.rot_y, self.rot_z]
    }

    /// All six values in wire order.
    #[must_use]
    pub fn to_array(&self) -> [f32; 6] {
        [
            self.trans_x,
            self.trans_y,
            self.trans_z,
            self.rot_x,
            self.rot_y,
            self.rot_z,
        ]
    }
}

impl From<[f32; 6]> for ExtrinsicCalibration {
    fn from(v: [f32; 6]) -> Self {
        Self {
            trans_x: v[0],
            trans_y: v[1],
            trans_z: v[2],
            rot_x: v[3],
            rot_y: v[4],
            rot_z: v[5],
        }
    }
}

/// Lens model identifier plus its `N` coefficients.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CalibrationModel<const N: usize = 32> {
    pub model_id: u32,
    #[cfg_attr(feature = "serde", serde(serialize_with = "serialize_params"))]
    pub parameters: [f32; N],
}

impl<const N: usize> CalibrationModel<N> {
    /// Size on the wire.
    pub const LEN: usize = 4 + N * 4;
}

impl<const N: usize> Default for CalibrationModel<N> {
    fn default() -> Self {
        Self {
            model_id: 0,
            parameters: [0.0; N],
        }
    }
}

#[cfg(feature = "serde")]
fn serialize_params<S, const N: usize>(
    params: &[f32; N],
    serializer: S,
) -> std::result::Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_seq(params.iter())
}

/// Decode an [ExtrinsicCalibration] starting at `offset`.
///
/// # Panics
/// If `buf` does not contain [ExtrinsicCalibration::LEN] bytes at `offset`.
#[must_use]
pub fn decode_extrinsic(buf: &[u8], offset: usize) -> ExtrinsicCalibration {
    ExtrinsicCalibration::from(read_array::<f32, 6>(buf, offset))
}

/// Decode a [CalibrationModel] with `N` parameters starting at `offset`.
///
/// # Panics
/// If `buf` does not contain [CalibrationModel::LEN] bytes at `offset`.
#[must_use]
pub fn decode_model<const N: usize>(buf: &[u8], offset: usize) -> CalibrationModel<N> {
    CalibrationModel {
        model_id: read(buf, offset),
        parameters: read_array(buf, offset + 4),
    }
}
