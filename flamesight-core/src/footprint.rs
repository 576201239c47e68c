//! Ground Footprint Projection
//!
//! ## Model
//!
//! The projector treats the camera as looking straight down from its mount
//! and asks how large a rectangle on the floor falls inside its field of
//! view. The distance used for the projection is the shorter of the mounting
//! height and the camera's usable range, so a camera with a 5 m range mounted
//! at 8 m projects as if it were 5 m away:
//!
//! ```text
//!            camera
//!              /|\
//!             / | \        d     = min(height, range)
//!            /  |d \       width = 2 · d · tan(hFov / 2)
//!           /   |   \      depth = 2 · d · tan(vFov / 2)
//!   -------+----+----+---- area  = width · depth
//!          |<- width ->|
//! ```
//!
//! ## Guarantees
//!
//! - Total: NaN/infinite inputs are zeroed, negative height/range are floored
//!   at zero, so every input produces a footprint
//! - `area_m2` is always exactly `width_m * depth_m`
//! - Width and depth never decrease as `d` or the matching FOV angle grows
//!
//! FOV angles are clamped into `[0°, 179°]` before the tangent is taken.
//! `tan(fov / 2)` diverges at 180° and turns negative past it, which would
//! break monotonicity and produce infinite footprints.

use crate::{constants::FOV_CEILING_DEG, geometry::sanitize};

/// Inputs for a footprint projection
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FovParams {
    /// Floor-to-sensor distance (m)
    pub mounting_height_m: f32,
    /// Usable detection range (m)
    pub range_max_m: f32,
    /// Horizontal field of view (°)
    pub horizontal_fov_deg: f32,
    /// Vertical field of view (°)
    pub vertical_fov_deg: f32,
}

impl FovParams {
    /// Parameters in field order
    pub fn new(
        mounting_height_m: f32,
        range_max_m: f32,
        horizontal_fov_deg: f32,
        vertical_fov_deg: f32,
    ) -> Self {
        Self {
            mounting_height_m,
            range_max_m,
            horizontal_fov_deg,
            vertical_fov_deg,
        }
    }

    /// Non-finite fields replaced by zero
    pub fn sanitized(self) -> Self {
        Self {
            mounting_height_m: sanitize(self.mounting_height_m),
            range_max_m: sanitize(self.range_max_m),
            horizontal_fov_deg: sanitize(self.horizontal_fov_deg),
            vertical_fov_deg: sanitize(self.vertical_fov_deg),
        }
    }
}

/// Rectangular floor area covered by the sensor
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Footprint {
    /// Extent along the horizontal FOV (m)
    pub width_m: f32,
    /// Extent along the vertical FOV (m)
    pub depth_m: f32,
    /// `width_m * depth_m` (m²)
    pub area_m2: f32,
    /// Distance the projection was computed at (m)
    pub projection_distance_m: f32,
}

impl Footprint {
    /// Build from edge lengths; area is always derived, never supplied
    pub fn from_edges(width_m: f32, depth_m: f32, projection_distance_m: f32) -> Self {
        let width_m = width_m.max(0.0);
        let depth_m = depth_m.max(0.0);
        Self {
            width_m,
            depth_m,
            area_m2: (width_m * depth_m).max(0.0),
            projection_distance_m,
        }
    }
}

/// Footprint projector with a configurable FOV ceiling
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FootprintProjector {
    fov_ceiling_deg: f32,
}

impl Default for FootprintProjector {
    fn default() -> Self {
        Self {
            fov_ceiling_deg: FOV_CEILING_DEG,
        }
    }
}

impl FootprintProjector {
    /// Projector clamping FOV angles to `[0, fov_ceiling_deg]`
    ///
    /// Ceilings outside `(0°, 180°)` fall back to the default.
    pub fn new(fov_ceiling_deg: f32) -> Self {
        if fov_ceiling_deg.is_finite() && fov_ceiling_deg > 0.0 && fov_ceiling_deg < 180.0 {
            Self { fov_ceiling_deg }
        } else {
            Self::default()
        }
    }

    /// Largest FOV angle used (°)
    pub fn fov_ceiling_deg(&self) -> f32 {
        self.fov_ceiling_deg
    }

    /// Project the sensor's view onto the floor
    pub fn project(&self, params: FovParams) -> Footprint {
        let params = params.sanitized();

        let height = params.mounting_height_m.max(0.0);
        let range = params.range_max_m.max(0.0);
        let distance = height.min(range).max(0.0);

        let width = self.edge_length(distance, params.horizontal_fov_deg);
        let depth = self.edge_length(distance, params.vertical_fov_deg);

        Footprint::from_edges(width, depth, distance)
    }

    /// `2 · d · tan(fov / 2)` with the angle clamped into range
    fn edge_length(&self, distance: f32, fov_deg: f32) -> f32 {
        let fov = fov_deg.max(0.0).min(self.fov_ceiling_deg);
        let half_angle = (fov / 2.0).to_radians();
        (2.0 * distance * libm::tanf(half_angle)).max(0.0)
    }
}

/// Project with the default FOV ceiling
pub fn project(params: FovParams) -> Footprint {
    FootprintProjector::default().project(params)
}
