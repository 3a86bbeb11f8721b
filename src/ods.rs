//! Obstacle detection (ODS) records.
use crate::{
    bytes::{read, read_array},
    record::{self, Record, RecordKind, Version},
    RawBuffer, Result,
};

/// Number of zones reported by [ODSInfoV1].
pub const NUM_ZONES: usize = 3;
/// Number of cell columns in an occupancy grid layout.
pub const GRID_WIDTH: usize = 200;
/// Number of cell rows in an occupancy grid layout.
pub const GRID_HEIGHT: usize = 200;
/// Number of cells in an occupancy grid layout.
pub const GRID_CELLS: usize = GRID_WIDTH * GRID_HEIGHT;

/// Zone occupancy state, layout version 1.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ODSInfoV1 {
    pub version: Version,
    pub timestamp_ns: u64,
    /// Non-zero if the zone is occupied.
    pub zone_occupied: [u8; NUM_ZONES],
    /// Identifier of the zone configuration the occupancy was evaluated against.
    pub zone_config_id: i32,
}

impl ODSInfoV1 {
    const TIMESTAMP_NS: usize = 4;
    const ZONE_OCCUPIED: usize = Self::TIMESTAMP_NS + 8;
    // one reserved byte follows the zone flags
    const ZONE_CONFIG_ID: usize = Self::ZONE_OCCUPIED + NUM_ZONES + 1;

    /// Decode from `buffer`.
    ///
    /// # Errors
    /// [crate::Error::NotEnoughData] if `buffer` is shorter than [Self::SIZE], or
    /// [crate::Error::UnsupportedVersion] if the version tag is 0.
    pub fn deserialize<B: RawBuffer + ?Sized>(buffer: &B) -> Result<Self> {
        record::decode(buffer)
    }

    /// Occupancy of zone `idx`, `None` if there is no such zone.
    #[must_use]
    pub fn is_zone_occupied(&self, idx: usize) -> Option<bool> {
        self.zone_occupied.get(idx).map(|z| *z != 0)
    }
}

impl Record for ODSInfoV1 {
    const KIND: RecordKind = RecordKind::OdsInfo;
    const VERSION: Version = 1;
    const SIZE: usize = Self::ZONE_CONFIG_ID + 4;

    fn decode_fields(buf: &[u8]) -> Self {
        ODSInfoV1 {
            version: read(buf, record::VERSION_OFFSET),
            timestamp_ns: read(buf, Self::TIMESTAMP_NS),
            zone_occupied: read_array(buf, Self::ZONE_OCCUPIED),
            zone_config_id: read(buf, Self::ZONE_CONFIG_ID),
        }
    }
}

/// Occupancy grid around the vehicle, layout version 1.
///
/// The layout always carries [GRID_HEIGHT] rows of [GRID_WIDTH] cells in row-major
/// order. `width` and `height` give the dimensions the device reports for the valid
/// part of the grid, anchored at row 0, column 0; values beyond the layout are
/// clamped when looking up cells.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ODSOccupancyGridV1 {
    pub version: Version,
    pub timestamp_ns: u64,
    pub width: u32,
    pub height: u32,
    /// Row-major 2x3 affine transform from (column, row, 1) cell coordinates to
    /// the center of that cell in user coordinates.
    pub transform_cell_center_to_user: [f32; 6],
    /// Occupancy value of each cell; always [GRID_CELLS] long.
    #[cfg_attr(feature = "serde", serde(serialize_with = "serde_bytes::serialize"))]
    pub cells: Box<[u8]>,
}

impl ODSOccupancyGridV1 {
    const TIMESTAMP_NS: usize = 4;
    const WIDTH: usize = Self::TIMESTAMP_NS + 8;
    const HEIGHT: usize = Self::WIDTH + 4;
    const TRANSFORM_CELL_CENTER_TO_USER: usize = Self::HEIGHT + 4;
    const CELLS: usize = Self::TRANSFORM_CELL_CENTER_TO_USER + 6 * 4;

    /// Decode from `buffer`.
    ///
    /// # Errors
    /// [crate::Error::NotEnoughData] if `buffer` is shorter than [Self::SIZE], or
    /// [crate::Error::UnsupportedVersion] if the version tag is 0.
    pub fn deserialize<B: RawBuffer + ?Sized>(buffer: &B) -> Result<Self> {
        record::decode(buffer)
    }

    /// Number of valid cell columns; the reported width clamped to [GRID_WIDTH].
    #[must_use]
    pub fn valid_width(&self) -> usize {
        (self.width as usize).min(GRID_WIDTH)
    }

    /// Number of valid cell rows; the reported height clamped to [GRID_HEIGHT].
    #[must_use]
    pub fn valid_height(&self) -> usize {
        (self.height as usize).min(GRID_HEIGHT)
    }

    /// Occupancy value at `row`, `col`, or `None` if outside the valid grid.
    ///
    /// Cells are laid out with a fixed stride of [GRID_WIDTH] whatever the
    /// reported width.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<u8> {
        if row >= self.valid_height() || col >= self.valid_width() {
            return None;
        }
        self.cells.get(row * GRID_WIDTH + col).copied()
    }

    /// User coordinates `[x, y]` of the center of the cell at `row`, `col`.
    #[must_use]
    pub fn cell_center_to_user(&self, row: usize, col: usize) -> [f32; 2] {
        let t = &self.transform_cell_center_to_user;
        let (col, row) = (col as f32, row as f32);
        [
            t[0] * col + t[1] * row + t[2],
            t[3] * col + t[4] * row + t[5],
        ]
    }
}

impl Record for ODSOccupancyGridV1 {
    const KIND: RecordKind = RecordKind::OdsOccupancyGrid;
    const VERSION: Version = 1;
    const SIZE: usize = Self::CELLS + GRID_CELLS;

    fn decode_fields(buf: &[u8]) -> Self {
        ODSOccupancyGridV1 {
            version: read(buf, record::VERSION_OFFSET),
            timestamp_ns: read(buf, Self::TIMESTAMP_NS),
            width: read(buf, Self::WIDTH),
            height: read(buf, Self::HEIGHT),
            transform_cell_center_to_user: read_array(buf, Self::TRANSFORM_CELL_CENTER_TO_USER),
            cells: buf[Self::CELLS..Self::CELLS + GRID_CELLS].into(),
        }
    }
}
