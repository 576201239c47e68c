//! Height-Indexed Detection Range Lookup
//!
//! ## Background
//!
//! Flame and smoke cameras are calibrated by the vendor at a handful of
//! mounting heights: at each height they measure how far away a reference
//! flame (0.5 m wide) or smoke plume (0.75 m wide) can still be detected. The
//! result is a short table:
//!
//! ```text
//! height (m) | flame (m) | smoke (m)
//! -----------|-----------|----------
//!     2      |     8     |     6
//!     5      |    12     |     9
//!    10      |    16     |    12
//!    ...     |    ...    |    ...
//!    30      |    34     |    26
//! ```
//!
//! ## Lookup Rules
//!
//! 1. The requested height is clamped into the table span (first row to last
//!    row). Below the lowest calibration point the lowest row is used as-is;
//!    there is no extrapolation in either direction.
//! 2. The first row whose height is at or above the clamped height is the
//!    upper bracket. If that is the first row, its distances are returned
//!    directly.
//! 3. Otherwise the result is a linear blend of the preceding row and the
//!    upper bracket:
//!
//! ```text
//! ratio = (h - h_lower) / (h_upper - h_lower)
//! d     = d_lower + ratio × (d_upper - d_lower)
//! ```
//!
//! A height that lands exactly on a calibration row gives `ratio = 1` and
//! reproduces that row's distances exactly.
//!
//! ## Custom Tables
//!
//! [`CalibrationTable::STANDARD`] borrows the built-in
//! [`CALIBRATION_ROWS`](crate::constants::CALIBRATION_ROWS). Vendors with
//! different data can wrap their own rows with [`CalibrationTable::new`],
//! which checks the invariants the lookup depends on.

use crate::{
    constants::calibration::CALIBRATION_ROWS,
    errors::{CalibrationError, CalibrationResult},
    geometry::sanitize,
};

/// One calibration row: detection distances measured at a mounting height
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeightDistanceSample {
    /// Mounting height (m)
    pub height_m: f32,
    /// Max distance at which the reference flame is detected (m)
    pub flame_distance_m: f32,
    /// Max distance at which the reference smoke plume is detected (m)
    pub smoke_distance_m: f32,
}

impl HeightDistanceSample {
    /// Row from height and both distances
    pub const fn new(height_m: f32, flame_distance_m: f32, smoke_distance_m: f32) -> Self {
        Self {
            height_m,
            flame_distance_m,
            smoke_distance_m,
        }
    }

    fn is_finite(&self) -> bool {
        self.height_m.is_finite()
            && self.flame_distance_m.is_finite()
            && self.smoke_distance_m.is_finite()
    }
}

/// Ordered, immutable height → distance table
///
/// Always holds at least one row, with strictly ascending heights.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalibrationTable<'a> {
    rows: &'a [HeightDistanceSample],
}

impl CalibrationTable<'static> {
    /// The built-in 7-row vendor table (2-30 m)
    pub const STANDARD: Self = Self {
        rows: &CALIBRATION_ROWS,
    };
}

impl Default for CalibrationTable<'static> {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl<'a> CalibrationTable<'a> {
    /// Wrap caller-supplied rows after checking them
    pub fn new(rows: &'a [HeightDistanceSample]) -> CalibrationResult<Self> {
        if rows.is_empty() {
            return Err(CalibrationError::Empty);
        }

        let mut previous: Option<f32> = None;
        for (index, row) in rows.iter().enumerate() {
            if !row.is_finite() {
                return Err(CalibrationError::NonFinite { index });
            }
            if row.flame_distance_m < 0.0 || row.smoke_distance_m < 0.0 {
                return Err(CalibrationError::NegativeDistance { index });
            }
            if let Some(previous) = previous {
                if row.height_m <= previous {
                    return Err(CalibrationError::NotAscending {
                        index,
                        height: row.height_m,
                        previous,
                    });
                }
            }
            previous = Some(row.height_m);
        }

        Ok(Self { rows })
    }

    /// Rows in ascending height order
    pub fn rows(&self) -> &'a [HeightDistanceSample] {
        self.rows
    }

    /// Lowest calibrated height (m)
    pub fn min_height(&self) -> f32 {
        self.rows.first().map_or(0.0, |row| row.height_m)
    }

    /// Highest calibrated height (m)
    pub fn max_height(&self) -> f32 {
        self.rows.last().map_or(0.0, |row| row.height_m)
    }

    /// Base detection distances for a mounting height
    ///
    /// The returned sample's `height_m` is the height actually used, after
    /// clamping into the table span.
    pub fn lookup(&self, height_m: f32) -> HeightDistanceSample {
        let requested = sanitize(height_m);
        let (height, clamped) = self.clamp_height(requested);

        // Low mounts are legitimate and just reuse the first row
        if clamped && requested > height {
            log_warn!(
                "Calibration lookup: height clamped to table span ({} → {} m)",
                height_m, height
            );
        } else if clamped {
            log_debug!(
                "Calibration lookup: height below first row ({} → {} m)",
                height_m, height
            );
        }

        let last = self.rows.len().saturating_sub(1);
        let upper_idx = self
            .rows
            .iter()
            .position(|row| row.height_m >= height)
            .unwrap_or(last);

        let upper = self.rows[upper_idx];
        if upper_idx == 0 || upper.height_m == height {
            return HeightDistanceSample { height_m: height, ..upper };
        }

        let lower = self.rows[upper_idx - 1];
        let (flame, smoke) = interpolate(&lower, &upper, height);

        HeightDistanceSample::new(height, flame, smoke)
    }

    /// Clamp height to the table span, reporting whether clamping happened
    fn clamp_height(&self, height_m: f32) -> (f32, bool) {
        let min = self.min_height();
        let max = self.max_height();
        if height_m < min {
            (min, true)
        } else if height_m > max {
            (max, true)
        } else {
            (height_m, false)
        }
    }
}

/// Linear blend of two bracketing rows at `height`
fn interpolate(lower: &HeightDistanceSample, upper: &HeightDistanceSample, height: f32) -> (f32, f32) {
    let span = upper.height_m - lower.height_m;
    // Unreachable for validated tables, which have strictly ascending heights
    if span == 0.0 {
        return (lower.flame_distance_m, lower.smoke_distance_m);
    }

    let ratio = (height - lower.height_m) / span;
    let flame = lower.flame_distance_m + ratio * (upper.flame_distance_m - lower.flame_distance_m);
    let smoke = lower.smoke_distance_m + ratio * (upper.smoke_distance_m - lower.smoke_distance_m);
    (flame, smoke)
}
