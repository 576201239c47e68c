//! Placement and Overlay Constants

/// Distance a mount marker is pushed off the surface it was aimed at (m).
///
/// Keeps the rendered marker from z-fighting with the wall mesh. This is a
/// rendering convention, not a bracket depth.
pub const SURFACE_CLEARANCE_M: f32 = 0.05;

/// Smallest footprint edge the composer will hand to a renderer (m).
///
/// A zero-size footprint still shows up as a small square.
pub const MIN_VISIBLE_SIZE_M: f32 = 0.1;

/// Height of the footprint overlay above the floor plane (m).
pub const OVERLAY_HEIGHT_M: f32 = 0.01;

/// Largest field-of-view angle the projector accepts (°).
///
/// `tan(fov / 2)` diverges at 180°, so angles are clamped just short of it.
pub const FOV_CEILING_DEG: f32 = 179.0;

/// Rays whose direction is this close to parallel with a surface are
/// treated as missing it.
pub const PARALLEL_EPSILON: f32 = 1e-6;

/// Minimum hit distance along a ray (m). Hits at or behind the origin are
/// ignored.
pub const MIN_HIT_DISTANCE_M: f32 = 1e-5;

/// Tolerance on patch edges so rays through a shared corner still hit (m).
pub const EDGE_TOLERANCE_M: f32 = 1e-4;
