//! Sensor coverage and placement engine for FlameSight
//!
//! Estimates what a fixed-mount flame/smoke camera sees and where it sits in
//! a rectangular room. The host application owns the UI and the 3D scene;
//! this crate supplies the numbers.
//!
//! Four pieces, leaf-first:
//! - [`footprint`]: FOV angles and mounting height → floor rectangle
//! - [`range`]: mounting height and target size → detection distances
//! - [`placement`]: aim ray → mount point and normal, kept inside the room
//! - [`coverage`]: footprint + placement → what the renderer draws
//!
//! Key constraints:
//! - Every core operation is total; bad numbers are zeroed, not rejected
//! - No heap allocation; `no_std` without the `std` feature
//! - Pure and synchronous; the only state is the caller-owned placement
//!
//! ```rust
//! use flamesight_core::{
//!     compose, estimate, project, resolve_placement, FovParams, Ray, RangeInputs, RoomBounds,
//!     Vec3,
//! };
//!
//! let room = RoomBounds::new(10.0, 8.0, 3.0, 0.2);
//!
//! // Aim straight up from the middle of the room
//! let aim = Ray::new(Vec3::new(5.0, 1.5, 4.0), Vec3::Y);
//! let mount = resolve_placement(&aim, &room.surfaces()).unwrap();
//!
//! let footprint = project(FovParams::new(mount.position.y, 20.0, 90.0, 60.0));
//! let overlay = compose(&footprint, &mount, &room);
//! assert!(overlay.width_m <= room.length_m);
//!
//! let range = estimate(RangeInputs::new(10.0, 90.0, 8.0, 0.5, 0.75));
//! assert_eq!(range.flame_max_distance_m, 16.0);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

// Optional logging; compiled out without the `log` feature
#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "log")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "log")]
macro_rules! log_trace {
    ($($arg:tt)*) => { log::trace!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_trace {
    ($($arg:tt)*) => {};
}

pub mod config;
pub mod constants;
pub mod coverage;
pub mod errors;
pub mod footprint;
pub mod geometry;
pub mod lookup;
pub mod placement;
pub mod range;
pub mod traits;
pub mod validation;

// Public API
pub use config::EngineConfig;
pub use coverage::{compose, CoverageComposer, CoverageOverlay, CoverageReport};
pub use errors::{CalibrationError, ConfigError, GeometryError};
pub use footprint::{project, Footprint, FootprintProjector, FovParams};
pub use geometry::Vec3;
pub use lookup::{CalibrationTable, HeightDistanceSample};
pub use placement::{
    clamp_to_bounds, resolve_placement, MountState, Placement, PlacementResolver, Ray,
    RoomBounds, Surface, SurfaceKind,
};
pub use range::{estimate, RangeEstimator, RangeInputs, RangeOutputs, RangeWarning};
pub use traits::RayTarget;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}
