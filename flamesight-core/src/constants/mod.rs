//! Constants for FlameSight Core
//!
//! Every fixed number the engine relies on lives here, grouped by the
//! component that consumes it. Names carry their unit (`_M`, `_DEG`, `_MM`)
//! so call sites stay readable without a trip back to this module.
//!
//! ## Organization
//!
//! - **Calibration**: the vendor height→distance reference table and the
//!   target widths its distances were measured with
//! - **Limits**: advisory bounds checked by the range estimator
//! - **Placement**: clearance, overlay and projection constants used by the
//!   placement resolver, footprint projector and coverage composer
//!
//! Anything a deployment may want to tune is mirrored in
//! [`EngineConfig`](crate::config::EngineConfig), whose defaults are these
//! constants.

/// Vendor calibration data for flame/smoke detection range.
pub mod calibration;

/// Advisory input limits for the range estimator.
pub mod limits;

/// Placement, overlay and projection constants.
pub mod placement;

pub use calibration::{
    CALIBRATION_ROWS, REFERENCE_FLAME_WIDTH_M, REFERENCE_SMOKE_WIDTH_M,
    TABLE_MAX_HEIGHT_M, TABLE_MIN_HEIGHT_M,
};

pub use limits::{
    MOUNTING_HEIGHT_MAX_M, OPENING_ANGLE_MAX_DEG,
};

pub use placement::{
    FOV_CEILING_DEG, MIN_VISIBLE_SIZE_M, OVERLAY_HEIGHT_M, SURFACE_CLEARANCE_M,
};
