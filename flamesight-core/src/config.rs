//! Engine configuration
//!
//! The engine works out of the box with the constants in
//! [`constants`](crate::constants). Host applications that need to tune them
//! (a vendor with different reference targets, a renderer that wants a larger
//! marker clearance) build an [`EngineConfig`], check it with
//! [`EngineConfig::validate`], and hand out the configured components.
//!
//! ```rust
//! use flamesight_core::config::EngineConfig;
//! use flamesight_core::footprint::FovParams;
//!
//! let config = EngineConfig {
//!     surface_clearance_m: 0.1,
//!     ..EngineConfig::default()
//! };
//! config.validate()?;
//!
//! let footprint = config.projector().project(FovParams::new(4.0, 10.0, 90.0, 60.0));
//! assert!(footprint.area_m2 > 0.0);
//! # Ok::<(), flamesight_core::errors::ConfigError>(())
//! ```
//!
//! With the `serde` feature the struct can be loaded from whatever settings
//! store the host already uses; missing fields fall back to the defaults.

use crate::{
    constants::{
        FOV_CEILING_DEG, MIN_VISIBLE_SIZE_M, OVERLAY_HEIGHT_M, REFERENCE_FLAME_WIDTH_M,
        REFERENCE_SMOKE_WIDTH_M, SURFACE_CLEARANCE_M,
    },
    coverage::CoverageComposer,
    errors::{ConfigError, ConfigResult},
    footprint::FootprintProjector,
    lookup::CalibrationTable,
    placement::PlacementResolver,
    range::RangeEstimator,
};

/// Tunable engine constants
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineConfig {
    /// Offset of a mount marker from the surface it was aimed at (m)
    pub surface_clearance_m: f32,

    /// Flame width the calibration table was measured with (m)
    pub reference_flame_width_m: f32,

    /// Smoke plume width the calibration table was measured with (m)
    pub reference_smoke_width_m: f32,

    /// Smallest footprint edge handed to a renderer (m)
    pub min_visible_size_m: f32,

    /// Overlay height above the floor (m)
    pub overlay_height_m: f32,

    /// FOV angles above this are clamped before projection (°)
    pub fov_ceiling_deg: f32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            surface_clearance_m: SURFACE_CLEARANCE_M,
            reference_flame_width_m: REFERENCE_FLAME_WIDTH_M,
            reference_smoke_width_m: REFERENCE_SMOKE_WIDTH_M,
            min_visible_size_m: MIN_VISIBLE_SIZE_M,
            overlay_height_m: OVERLAY_HEIGHT_M,
            fov_ceiling_deg: FOV_CEILING_DEG,
        }
    }
}

impl EngineConfig {
    /// Mount points sit exactly on the aimed surface
    ///
    /// Useful for numeric analysis where the rendering clearance would skew
    /// distances.
    pub fn flush_mount() -> Self {
        Self {
            surface_clearance_m: 0.0,
            ..Self::default()
        }
    }

    /// Reject values that would make results meaningless
    pub fn validate(&self) -> ConfigResult<()> {
        check(
            "surface_clearance_m",
            self.surface_clearance_m,
            |v| v >= 0.0,
        )?;
        check(
            "reference_flame_width_m",
            self.reference_flame_width_m,
            |v| v > 0.0,
        )?;
        check(
            "reference_smoke_width_m",
            self.reference_smoke_width_m,
            |v| v > 0.0,
        )?;
        check("min_visible_size_m", self.min_visible_size_m, |v| v > 0.0)?;
        check("overlay_height_m", self.overlay_height_m, |v| v >= 0.0)?;
        check("fov_ceiling_deg", self.fov_ceiling_deg, |v| v > 0.0 && v < 180.0)?;
        Ok(())
    }

    /// Footprint projector with the configured FOV ceiling
    pub fn projector(&self) -> FootprintProjector {
        FootprintProjector::new(self.fov_ceiling_deg)
    }

    /// Range estimator over the built-in calibration table
    pub fn estimator(&self) -> RangeEstimator<'static> {
        self.estimator_with_table(CalibrationTable::STANDARD)
    }

    /// Range estimator over a vendor-supplied table
    pub fn estimator_with_table<'a>(&self, table: CalibrationTable<'a>) -> RangeEstimator<'a> {
        RangeEstimator::with_table(table)
            .reference_widths(self.reference_flame_width_m, self.reference_smoke_width_m)
    }

    /// Placement resolver with the configured clearance
    pub fn resolver(&self) -> PlacementResolver {
        PlacementResolver::with_clearance(self.surface_clearance_m)
    }

    /// Coverage composer with the configured marker size and height
    pub fn composer(&self) -> CoverageComposer {
        CoverageComposer::new(self.min_visible_size_m, self.overlay_height_m)
    }
}

fn check(name: &'static str, value: f32, ok: impl Fn(f32) -> bool) -> ConfigResult<()> {
    if value.is_finite() && ok(value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange { name, value })
    }
}
