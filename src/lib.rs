#![doc = include_str!("../README.md")]

mod error;

pub mod buffer;
pub mod bytes;
pub mod calibration;
pub mod ods;
pub mod record;
pub mod rgb;
pub mod tof;

pub use buffer::{Buffer, PixelFormat, RawBuffer};
pub use calibration::{CalibrationModel, ExtrinsicCalibration};
pub use error::{Error, Result};
pub use ods::{ODSInfoV1, ODSOccupancyGridV1};
pub use record::{decode, minimum_size, oldest_version, peek_version, Record, RecordKind, Version};
pub use rgb::RGBInfoV1;
pub use tof::{TofInfo, TofInfoV3, TofInfoV4};
