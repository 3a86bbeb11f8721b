#![allow(dead_code)]
use std::path::PathBuf;

use calibinfo::Buffer;

/// Tolerance for float comparisons, relative to the expected magnitude when it
/// is greater than 1.
pub const EPSILON: f32 = 1e-6;

pub fn fixture_path(name: &str) -> PathBuf {
    let mut path =
        PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR not set"));
    path.push("tests/fixtures");
    path.push(name);
    path
}

pub fn read_fixture(name: &str) -> Buffer {
    Buffer::from_file(fixture_path(name)).expect("failed to read fixture")
}

pub fn near(got: f32, expected: f32) -> bool {
    (got - expected).abs() <= EPSILON * expected.abs().max(1.0)
}

pub fn assert_near(got: f32, expected: f32, what: &str) {
    assert!(near(got, expected), "{what}: got {got}, expected {expected}");
}

pub fn assert_all_near(got: &[f32], expected: &[f32], what: &str) {
    assert_eq!(got.len(), expected.len(), "{what}: length mismatch");
    for (idx, (g, e)) in got.iter().zip(expected).enumerate() {
        assert!(near(*g, *e), "{what}[{idx}]: got {g}, expected {e}");
    }
}

/// Reference values encoded in `tof_info.data` (a v4 record).
pub mod tof_info {
    pub const VERSION: u32 = 4;
    pub const AMPLITUDE_RESOLUTION: f32 = 0.0009263;
    pub const DISTANCE_RESOLUTION: f32 = 0.00014496;
    pub const AMP_NORMALIZATION_FACTORS: [f32; 3] = [1.0, 1.0018, 0.9976];
    pub const EXTRINSIC_OPTIC_TO_USER: [f32; 6] =
        [0.00891, 0.01547, 0.0362, 0.00473, -0.01021, 1.5691];
    pub const INTRINSIC_CALIB_MODEL_ID: u32 = 2;
    pub const INTRINSIC_CALIB_MODEL_PARAM: [f32; 32] = [
        128.31, 128.29, 112.44, 84.72, //
        0.0, 0.4109, 0.1213, -0.0517, //
        0.0106, 1.5432, 0.0, 0.0, //
        0.0, 0.0, 0.0, 0.0, //
        0.0, 0.0, 0.0, 0.0, //
        0.0, 0.0, 0.0, 0.0, //
        0.0, 0.0, 0.0, 0.0, //
        0.0, 0.0, 0.0, 0.0,
    ];
    pub const INVERSE_INTRINSIC_CALIB_MODEL_ID: u32 = 3;
    pub const INVERSE_INTRINSIC_CALIB_MODEL_PARAM: [f32; 32] = [
        128.31, 128.29, 112.44, 84.72, //
        0.0, -0.4023, 0.0954, 0.0211, //
        -0.0032, 1.5432, 0.0, 0.0, //
        0.0, 0.0, 0.0, 0.0, //
        0.0, 0.0, 0.0, 0.0, //
        0.0, 0.0, 0.0, 0.0, //
        0.0, 0.0, 0.0, 0.0, //
        0.0, 0.0, 0.0, 0.0,
    ];
    pub const EXPOSURE_TIMESTAMPS_NS: [u64; 3] = [
        1_700_000_000_000_123_456,
        1_700_000_000_001_123_456,
        1_700_000_000_001_623_456,
    ];
    pub const EXPOSURE_TIMES_S: [f32; 3] = [0.0001, 0.000396, 0.0];
    pub const ILLU_TEMPERATURE: f32 = 38.5;
    pub const MODE: &str = "standard_range4m";
    pub const IMAGER: &str = "IRS2877C";
    pub const MEASUREMENT_BLOCK_INDEX: u32 = 1;
    pub const MEASUREMENT_RANGE_MIN: f32 = 0.3;
    pub const MEASUREMENT_RANGE_MAX: f32 = 4.3;
}

/// Reference values encoded in `rgb_info.data`.
pub mod rgb_info {
    pub const VERSION: u32 = 1;
    pub const FRAME_COUNTER: u32 = 4711;
    pub const TIMESTAMP_NS: u64 = 1_700_000_000_123_456_789;
    pub const EXPOSURE_TIME: f32 = 0.01667;
    pub const EXTRINSIC_OPTIC_TO_USER: [f32; 6] =
        [0.0421, -0.0183, 0.0297, 0.0012, 0.0031, -1.5662];
    pub const INTRINSIC_CALIB_MODEL_ID: u32 = 0;
    pub const INTRINSIC_CALIB_MODEL_PARAM: [f32; 32] = [
        1016.8, 1017.2, 637.9, 401.3, //
        0.0, -0.3881, 0.1724, 0.0004, //
        -0.0002, -0.0419, 0.0, 0.0, //
        0.0, 0.0, 0.0, 0.0, //
        0.0, 0.0, 0.0, 0.0, //
        0.0, 0.0, 0.0, 0.0, //
        0.0, 0.0, 0.0, 0.0, //
        0.0, 0.0, 0.0, 0.0,
    ];
    pub const INVERSE_INTRINSIC_CALIB_MODEL_ID: u32 = 1;
    pub const INVERSE_INTRINSIC_CALIB_MODEL_PARAM: [f32; 32] = [
        1016.8, 1017.2, 637.9, 401.3, //
        0.0, 0.4127, -0.0713, 0.0031, //
        0.0008, 0.0226, 0.0, 0.0, //
        0.0, 0.0, 0.0, 0.0, //
        0.0, 0.0, 0.0, 0.0, //
        0.0, 0.0, 0.0, 0.0, //
        0.0, 0.0, 0.0, 0.0, //
        0.0, 0.0, 0.0, 0.0,
    ];
}

/// Reference values encoded in `ods_info.data`.
pub mod ods_info {
    pub const VERSION: u32 = 1;
    pub const TIMESTAMP_NS: u64 = 1_700_000_000_500_000_000;
    pub const ZONE_OCCUPIED: [u8; 3] = [1, 0, 0];
    pub const ZONE_CONFIG_ID: i32 = 17;
}

/// Reference values encoded in `ods_occupancy_grid.data`.
pub mod ods_occupancy_grid {
    pub const VERSION: u32 = 1;
    pub const TIMESTAMP_NS: u64 = 1_700_000_000_600_000_000;
    pub const WIDTH: u32 = 200;
    pub const HEIGHT: u32 = 200;
    pub const TRANSFORM_CELL_CENTER_TO_USER: [f32; 6] = [0.05, 0.0, -4.975, 0.0, 0.05, -4.975];
    /// Occupied cells have the value 255 and form the block `rows x cols`.
    pub const OCCUPIED_ROWS: std::ops::Range<usize> = 90..110;
    pub const OCCUPIED_COLS: std::ops::Range<usize> = 120..130;
}
