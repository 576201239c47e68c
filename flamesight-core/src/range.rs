//! Flame/Smoke Detection Range Estimation
//!
//! ## Contract: always answer, flag concerns
//!
//! The estimator never rejects input. Every check that fails adds a
//! [`RangeWarning`] to the result, and the distances are still computed from
//! the (sanitized) values. An operator typing a height of 35 m gets the 30 m
//! answer plus a warning, not an error dialog.
//!
//! ## Pipeline
//!
//! ```text
//! RangeInputs ──sanitize──► checks ──► warnings (ordered)
//!                  │
//!                  ├─► CalibrationTable::lookup(height) ──► base flame/smoke
//!                  │
//!                  └─► width / reference width ──► scale
//!
//! flame_max = max(0, base_flame × min_flame_width / 0.5)
//! smoke_max = max(0, base_smoke × min_smoke_width / 0.75)
//! ```
//!
//! Checks run in a fixed order (mounting height, opening angle, focal length,
//! flame width, smoke width) and all of them run; there is no short-circuit.
//!
//! Opening angle and focal length do not enter the distance calculation.
//! They are checked because an out-of-range lens setting usually means the
//! rest of the form was filled in wrong too.
//!
//! ## Example
//!
//! ```rust
//! use flamesight_core::range::{estimate, RangeInputs, RangeWarning};
//!
//! let out = estimate(RangeInputs::new(10.0, 90.0, 8.0, 0.5, 0.75));
//! assert_eq!(out.flame_max_distance_m, 16.0);
//! assert_eq!(out.smoke_max_distance_m, 12.0);
//! assert!(out.warnings.is_empty());
//!
//! let out = estimate(RangeInputs::new(35.0, 90.0, 8.0, 0.5, 0.75));
//! assert_eq!(out.flame_max_distance_m, 34.0);
//! assert_eq!(out.warnings.as_slice(), &[RangeWarning::MountingHeightOutOfRange]);
//! ```

use heapless::Vec;
use thiserror_no_std::Error;

use crate::{
    constants::{
        limits::MAX_RANGE_WARNINGS, MOUNTING_HEIGHT_MAX_M, OPENING_ANGLE_MAX_DEG,
        REFERENCE_FLAME_WIDTH_M, REFERENCE_SMOKE_WIDTH_M,
    },
    geometry::sanitize,
    lookup::{CalibrationTable, HeightDistanceSample},
    validation::{in_half_open, is_positive, width_scale},
};

/// Advisory message attached to a range estimate
///
/// `Display` gives the text shown to the operator.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RangeWarning {
    /// Height outside (0, 30] m
    #[error("Mounting height should be greater than 0 m and at most 30 m")]
    MountingHeightOutOfRange,

    /// Opening angle outside (0, 120]°
    #[error("Opening angle should be greater than 0° and at most 120°")]
    OpeningAngleOutOfRange,

    /// Focal length ≤ 0
    #[error("Focal length should be greater than 0 mm")]
    FocalLengthNotPositive,

    /// Flame width ≤ 0; flame distance is zero
    #[error("Minimum flame width should be greater than 0 m")]
    FlameWidthNotPositive,

    /// Smoke width ≤ 0; smoke distance is zero
    #[error("Minimum smoke width should be greater than 0 m")]
    SmokeWidthNotPositive,
}

#[cfg(feature = "defmt")]
impl defmt::Format for RangeWarning {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::MountingHeightOutOfRange => defmt::write!(fmt, "Mounting height out of range"),
            Self::OpeningAngleOutOfRange => defmt::write!(fmt, "Opening angle out of range"),
            Self::FocalLengthNotPositive => defmt::write!(fmt, "Focal length not positive"),
            Self::FlameWidthNotPositive => defmt::write!(fmt, "Flame width not positive"),
            Self::SmokeWidthNotPositive => defmt::write!(fmt, "Smoke width not positive"),
        }
    }
}

/// Ordered warnings from one estimate; one slot per check
pub type RangeWarnings = Vec<RangeWarning, MAX_RANGE_WARNINGS>;

/// Camera and target parameters for a range estimate
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RangeInputs {
    /// Floor-to-sensor distance (m)
    pub mounting_height_m: f32,
    /// Lens opening angle (°)
    pub opening_angle_deg: f32,
    /// Lens focal length (mm)
    pub focal_length_mm: f32,
    /// Smallest flame that must be detected (m)
    pub min_flame_width_m: f32,
    /// Smallest smoke plume that must be detected (m)
    pub min_smoke_width_m: f32,
}

impl RangeInputs {
    /// Inputs in field order
    pub fn new(
        mounting_height_m: f32,
        opening_angle_deg: f32,
        focal_length_mm: f32,
        min_flame_width_m: f32,
        min_smoke_width_m: f32,
    ) -> Self {
        Self {
            mounting_height_m,
            opening_angle_deg,
            focal_length_mm,
            min_flame_width_m,
            min_smoke_width_m,
        }
    }

    /// Non-finite fields replaced by zero
    pub fn sanitized(self) -> Self {
        Self {
            mounting_height_m: sanitize(self.mounting_height_m),
            opening_angle_deg: sanitize(self.opening_angle_deg),
            focal_length_mm: sanitize(self.focal_length_mm),
            min_flame_width_m: sanitize(self.min_flame_width_m),
            min_smoke_width_m: sanitize(self.min_smoke_width_m),
        }
    }
}

/// Result of a range estimate
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RangeOutputs {
    /// Max distance at which the requested flame is detected (m)
    pub flame_max_distance_m: f32,
    /// Max distance at which the requested smoke plume is detected (m)
    pub smoke_max_distance_m: f32,
    /// Calibration sample used, before width scaling
    pub calibration: HeightDistanceSample,
    /// Advisory messages, in check order
    pub warnings: RangeWarnings,
}

impl RangeOutputs {
    /// Whether any check failed
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Range estimator bound to a calibration table and reference widths
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeEstimator<'a> {
    table: CalibrationTable<'a>,
    reference_flame_width_m: f32,
    reference_smoke_width_m: f32,
}

impl Default for RangeEstimator<'static> {
    fn default() -> Self {
        Self::with_table(CalibrationTable::STANDARD)
    }
}

impl<'a> RangeEstimator<'a> {
    /// Estimator over a custom calibration table
    pub fn with_table(table: CalibrationTable<'a>) -> Self {
        Self {
            table,
            reference_flame_width_m: REFERENCE_FLAME_WIDTH_M,
            reference_smoke_width_m: REFERENCE_SMOKE_WIDTH_M,
        }
    }

    /// Override the target widths the table was calibrated with
    pub fn reference_widths(mut self, flame_m: f32, smoke_m: f32) -> Self {
        self.reference_flame_width_m = flame_m;
        self.reference_smoke_width_m = smoke_m;
        self
    }

    /// Calibration table in use
    pub fn table(&self) -> &CalibrationTable<'a> {
        &self.table
    }

    /// Estimate maximum detection distances
    pub fn estimate(&self, inputs: RangeInputs) -> RangeOutputs {
        let inputs = inputs.sanitized();
        let warnings = check_inputs(&inputs);

        let calibration = self.table.lookup(inputs.mounting_height_m);

        let flame_scale = width_scale(inputs.min_flame_width_m, self.reference_flame_width_m);
        let smoke_scale = width_scale(inputs.min_smoke_width_m, self.reference_smoke_width_m);

        RangeOutputs {
            flame_max_distance_m: (calibration.flame_distance_m * flame_scale).max(0.0),
            smoke_max_distance_m: (calibration.smoke_distance_m * smoke_scale).max(0.0),
            calibration,
            warnings,
        }
    }
}

/// Run every advisory check, collecting failures in order
fn check_inputs(inputs: &RangeInputs) -> RangeWarnings {
    let checks = [
        (
            in_half_open(inputs.mounting_height_m, 0.0, MOUNTING_HEIGHT_MAX_M),
            RangeWarning::MountingHeightOutOfRange,
        ),
        (
            in_half_open(inputs.opening_angle_deg, 0.0, OPENING_ANGLE_MAX_DEG),
            RangeWarning::OpeningAngleOutOfRange,
        ),
        (
            is_positive(inputs.focal_length_mm),
            RangeWarning::FocalLengthNotPositive,
        ),
        (
            is_positive(inputs.min_flame_width_m),
            RangeWarning::FlameWidthNotPositive,
        ),
        (
            is_positive(inputs.min_smoke_width_m),
            RangeWarning::SmokeWidthNotPositive,
        ),
    ];

    let mut warnings = RangeWarnings::new();
    for (passed, warning) in checks {
        if !passed {
            log_debug!("Range estimate: {}", warning);
            // Capacity equals the number of checks
            let _ = warnings.push(warning);
        }
    }
    warnings
}

/// Estimate with the built-in table and reference widths
pub fn estimate(inputs: RangeInputs) -> RangeOutputs {
    RangeEstimator::default().estimate(inputs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nominal(height: f32) -> RangeInputs {
        RangeInputs::new(height, 90.0, 8.0, 0.5, 0.75)
    }

    #[test]
    fn reference_widths_leave_table_unscaled() {
        let out = estimate(nominal(10.0));
        assert_eq!(out.flame_max_distance_m, 16.0);
        assert_eq!(out.smoke_max_distance_m, 12.0);
        assert_eq!(out.calibration.height_m, 10.0);
        assert!(!out.has_warnings());
    }

    #[test]
    fn above_table_clamps_and_warns() {
        let out = estimate(nominal(35.0));
        assert_eq!(out.calibration.height_m, 30.0);
        assert_eq!(out.flame_max_distance_m, 34.0);
        assert_eq!(out.smoke_max_distance_m, 26.0);
        assert_eq!(out.warnings.as_slice(), &[RangeWarning::MountingHeightOutOfRange]);
    }

    #[test]
    fn below_table_uses_first_row_without_warning() {
        // 1 m is a valid height, just below the lowest calibration point
        let out = estimate(nominal(1.0));
        assert_eq!(out.flame_max_distance_m, 8.0);
        assert_eq!(out.smoke_max_distance_m, 6.0);
        assert!(out.warnings.is_empty());
    }

    #[test]
    fn width_scaling() {
        let out = estimate(RangeInputs::new(10.0, 90.0, 8.0, 1.0, 1.5));
        assert_eq!(out.flame_max_distance_m, 32.0);
        assert_eq!(out.smoke_max_distance_m, 24.0);
    }

    #[test]
    fn non_positive_width_zeroes_output() {
        let out = estimate(RangeInputs::new(10.0, 90.0, 8.0, 0.0, -1.0));
        assert_eq!(out.flame_max_distance_m, 0.0);
        assert_eq!(out.smoke_max_distance_m, 0.0);
        assert_eq!(
            out.warnings.as_slice(),
            &[RangeWarning::FlameWidthNotPositive, RangeWarning::SmokeWidthNotPositive]
        );
    }

    #[test]
    fn all_warnings_collected_in_order() {
        let out = estimate(RangeInputs::new(0.0, 150.0, 0.0, 0.0, 0.0));
        assert_eq!(
            out.warnings.as_slice(),
            &[
                RangeWarning::MountingHeightOutOfRange,
                RangeWarning::OpeningAngleOutOfRange,
                RangeWarning::FocalLengthNotPositive,
                RangeWarning::FlameWidthNotPositive,
                RangeWarning::SmokeWidthNotPositive,
            ]
        );
        // Still answers: lowest row, zero-scaled
        assert_eq!(out.calibration.height_m, 2.0);
        assert_eq!(out.flame_max_distance_m, 0.0);
    }

    #[test]
    fn boundaries_are_inclusive_at_the_top() {
        let out = estimate(RangeInputs::new(30.0, 120.0, 0.1, 0.1, 0.1));
        assert!(out.warnings.is_empty());
    }

    #[test]
    fn non_finite_inputs_are_sanitized_silently() {
        // NaN height becomes 0, which trips the ordinary height check only
        let out = estimate(RangeInputs::new(f32::NAN, 90.0, 8.0, 0.5, 0.75));
        assert_eq!(out.warnings.as_slice(), &[RangeWarning::MountingHeightOutOfRange]);
        assert_eq!(out.flame_max_distance_m, 8.0);

        let out = estimate(RangeInputs::new(10.0, 90.0, 8.0, f32::INFINITY, 0.75));
        assert_eq!(out.flame_max_distance_m, 0.0);
        assert!(out.flame_max_distance_m.is_finite());
    }

    #[test]
    fn custom_reference_widths() {
        let estimator = RangeEstimator::default().reference_widths(1.0, 1.0);
        let out = estimator.estimate(RangeInputs::new(10.0, 90.0, 8.0, 0.5, 0.5));
        assert_eq!(out.flame_max_distance_m, 8.0);
        assert_eq!(out.smoke_max_distance_m, 6.0);
    }

    #[test]
    fn custom_table() {
        let rows = [
            HeightDistanceSample::new(3.0, 10.0, 5.0),
            HeightDistanceSample::new(6.0, 20.0, 10.0),
        ];
        let table = CalibrationTable::new(&rows).unwrap();
        let out = RangeEstimator::with_table(table).estimate(nominal(4.5));
        assert!((out.flame_max_distance_m - 15.0).abs() < 1e-5);
        assert!((out.smoke_max_distance_m - 7.5).abs() < 1e-5);
    }

    #[cfg(feature = "std")]
    #[test]
    fn warning_text() {
        assert_eq!(
            RangeWarning::FocalLengthNotPositive.to_string(),
            "Focal length should be greater than 0 mm"
        );
    }
}
