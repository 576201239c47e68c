//! Detection Range Calibration Data
//!
//! Reference distances at which the camera reliably detects a flame or a smoke
//! plume of the reference width, indexed by mounting height. Rows are strictly
//! ascending by height; the estimator interpolates linearly between them and
//! scales the result by the ratio of the requested target width to the
//! reference width.
//!
//! Source: vendor detection-range datasheet (7-point calibration, 2-30 m)

use crate::lookup::HeightDistanceSample;

/// Width of the test flame used during calibration (m).
///
/// A requested minimum flame width equal to this value leaves the table
/// distances unscaled.
pub const REFERENCE_FLAME_WIDTH_M: f32 = 0.5;

/// Width of the test smoke plume used during calibration (m).
pub const REFERENCE_SMOKE_WIDTH_M: f32 = 0.75;

/// Lowest calibrated mounting height (m). No extrapolation below this.
pub const TABLE_MIN_HEIGHT_M: f32 = 2.0;

/// Highest calibrated mounting height (m). Taller mounts use this row.
pub const TABLE_MAX_HEIGHT_M: f32 = 30.0;

/// Number of rows in the default calibration table.
pub const CALIBRATION_ROW_COUNT: usize = 7;

/// Height → (flame, smoke) maximum detection distance, all in meters.
pub const CALIBRATION_ROWS: [HeightDistanceSample; CALIBRATION_ROW_COUNT] = [
    HeightDistanceSample::new(2.0, 8.0, 6.0),
    HeightDistanceSample::new(5.0, 12.0, 9.0),
    HeightDistanceSample::new(10.0, 16.0, 12.0),
    HeightDistanceSample::new(15.0, 21.0, 15.0),
    HeightDistanceSample::new(20.0, 25.0, 19.0),
    HeightDistanceSample::new(25.0, 30.0, 22.0),
    HeightDistanceSample::new(30.0, 34.0, 26.0),
];
