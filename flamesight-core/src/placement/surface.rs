//! Rays, room surfaces and room bounds
//!
//! A [`Surface`] is a finite rectangle in room space described by its center,
//! a unit normal and an orthonormal in-plane frame with half-extents:
//!
//! ```text
//!        v ▲
//!          │  half_v
//!    ┌─────┼─────┐
//!    │     │     │
//!    │     ●─────┼──► u      ● = center, n = u × v points out of the page
//!    │           │ half_u
//!    └───────────┘
//! ```
//!
//! [`RoomBounds::surfaces`] builds the six inner faces of a rectangular room
//! with normals facing the interior, inset from the outer shell by the wall
//! thickness.

use crate::{
    constants::placement::{EDGE_TOLERANCE_M, MIN_HIT_DISTANCE_M, PARALLEL_EPSILON},
    errors::{GeometryError, GeometryResult},
    geometry::{sanitize, Vec3},
    traits::RayTarget,
};

/// Aim ray from the operator's viewpoint into the room
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    origin: Vec3,
    direction: Vec3,
}

impl Ray {
    /// Build a ray; the direction is normalized
    ///
    /// Non-finite components are zeroed. A zero-length direction produces a
    /// degenerate ray that hits nothing.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin: origin.sanitized(),
            direction: direction.sanitized().normalized().unwrap_or(Vec3::ZERO),
        }
    }

    /// Ray start point
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Unit direction, or zero for a degenerate ray
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Zero direction; resolves to nothing
    pub fn is_degenerate(&self) -> bool {
        self.direction == Vec3::ZERO
    }

    /// Point at distance `t` along the ray
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction.scale(t)
    }
}

/// Which part of the room a surface belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SurfaceKind {
    /// Horizontal, facing up
    Floor,
    /// Horizontal, facing down
    Ceiling,
    /// Vertical
    Wall,
}

/// Finite planar patch a mount ray can land on
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    kind: SurfaceKind,
    center: Vec3,
    normal: Vec3,
    u_axis: Vec3,
    v_axis: Vec3,
    half_u: f32,
    half_v: f32,
}

impl Surface {
    /// Build a surface from a center, a normal and one in-plane axis
    ///
    /// `normal` need not be unit length. `u_axis` is projected onto the plane
    /// and normalized; the second axis is `normal × u_axis`.
    pub fn new(
        kind: SurfaceKind,
        center: Vec3,
        normal: Vec3,
        u_axis: Vec3,
        half_u: f32,
        half_v: f32,
    ) -> GeometryResult<Self> {
        if !center.is_finite() {
            return Err(GeometryError::NonFinite { field: "center" });
        }
        if !normal.is_finite() {
            return Err(GeometryError::NonFinite { field: "normal" });
        }
        if !u_axis.is_finite() {
            return Err(GeometryError::NonFinite { field: "u_axis" });
        }
        if !half_u.is_finite() {
            return Err(GeometryError::NonFinite { field: "half_u" });
        }
        if !half_v.is_finite() {
            return Err(GeometryError::NonFinite { field: "half_v" });
        }
        if half_u < 0.0 {
            return Err(GeometryError::NegativeExtent {
                field: "half_u",
                value: half_u,
            });
        }
        if half_v < 0.0 {
            return Err(GeometryError::NegativeExtent {
                field: "half_v",
                value: half_v,
            });
        }

        let normal = normal.normalized().ok_or(GeometryError::ZeroNormal)?;
        let in_plane = u_axis - normal.scale(u_axis.dot(normal));
        let u_axis = in_plane.normalized().ok_or(GeometryError::DegenerateAxis)?;

        Ok(Self::from_frame(kind, center, normal, u_axis, half_u, half_v))
    }

    /// Infallible constructor for frames already known to be orthonormal
    fn from_frame(
        kind: SurfaceKind,
        center: Vec3,
        normal: Vec3,
        u_axis: Vec3,
        half_u: f32,
        half_v: f32,
    ) -> Self {
        Self {
            kind,
            center,
            normal,
            u_axis,
            v_axis: normal.cross(u_axis),
            half_u,
            half_v,
        }
    }

    /// What part of the room this is
    pub fn kind(&self) -> SurfaceKind {
        self.kind
    }

    /// Patch center in room space
    pub fn center(&self) -> Vec3 {
        self.center
    }

    /// Unit normal as constructed
    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    /// Half-extents along the in-plane axes (m)
    pub fn half_extents(&self) -> (f32, f32) {
        (self.half_u, self.half_v)
    }

    /// Whether a point on the plane lies inside the patch
    fn contains(&self, point: Vec3) -> bool {
        let local = point - self.center;
        libm::fabsf(local.dot(self.u_axis)) <= self.half_u + EDGE_TOLERANCE_M
            && libm::fabsf(local.dot(self.v_axis)) <= self.half_v + EDGE_TOLERANCE_M
    }
}

impl RayTarget for Surface {
    fn intersect(&self, ray: &Ray) -> Option<f32> {
        let denom = self.normal.dot(ray.direction());
        if libm::fabsf(denom) < PARALLEL_EPSILON {
            return None;
        }

        let t = self.normal.dot(self.center - ray.origin()) / denom;
        if !t.is_finite() || t <= MIN_HIT_DISTANCE_M {
            return None;
        }

        if self.contains(ray.at(t)) {
            Some(t)
        } else {
            None
        }
    }

    fn normal_at(&self, _point: Vec3) -> Vec3 {
        self.normal
    }
}

/// Room dimensions in meters
///
/// The room spans `0..=length_m` along X, `0..=width_m` along Z and
/// `0..=height_m` along Y. Walls are `wall_thickness_m` thick on every side,
/// so the usable interior along X and Z is inset by that amount.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoomBounds {
    /// Extent along X (m)
    pub length_m: f32,
    /// Extent along Z (m)
    pub width_m: f32,
    /// Floor to ceiling (m)
    pub height_m: f32,
    /// Wall thickness (m)
    pub wall_thickness_m: f32,
}

impl RoomBounds {
    /// Room from its outer dimensions
    pub fn new(length_m: f32, width_m: f32, height_m: f32, wall_thickness_m: f32) -> Self {
        Self {
            length_m,
            width_m,
            height_m,
            wall_thickness_m,
        }
    }

    /// Non-finite and negative dimensions replaced by zero
    pub fn sanitized(self) -> Self {
        Self {
            length_m: sanitize(self.length_m).max(0.0),
            width_m: sanitize(self.width_m).max(0.0),
            height_m: sanitize(self.height_m).max(0.0),
            wall_thickness_m: sanitize(self.wall_thickness_m).max(0.0),
        }
    }

    /// Interior span along X: `[t, length - t]`
    ///
    /// When the room is thinner than two walls the upper bound collapses
    /// onto the lower one.
    pub fn x_range(&self) -> (f32, f32) {
        let b = self.sanitized();
        inset(b.length_m, b.wall_thickness_m)
    }

    /// Interior span along Z: `[t, width - t]`
    pub fn z_range(&self) -> (f32, f32) {
        let b = self.sanitized();
        inset(b.width_m, b.wall_thickness_m)
    }

    /// Interior span along Y: `[0, height]`
    pub fn y_range(&self) -> (f32, f32) {
        (0.0, self.sanitized().height_m)
    }

    /// Floor point at the middle of the interior
    pub fn floor_center(&self) -> Vec3 {
        let (x0, x1) = self.x_range();
        let (z0, z1) = self.z_range();
        Vec3::new((x0 + x1) / 2.0, 0.0, (z0 + z1) / 2.0)
    }

    /// The six inner faces, normals facing the interior
    ///
    /// Order: floor, ceiling, wall at low X, wall at high X, wall at low Z,
    /// wall at high Z.
    pub fn surfaces(&self) -> [Surface; 6] {
        let (x0, x1) = self.x_range();
        let (z0, z1) = self.z_range();
        let (_, h) = self.y_range();

        let cx = (x0 + x1) / 2.0;
        let cz = (z0 + z1) / 2.0;
        let half_x = (x1 - x0) / 2.0;
        let half_z = (z1 - z0) / 2.0;
        let half_h = h / 2.0;

        [
            Surface::from_frame(
                SurfaceKind::Floor,
                Vec3::new(cx, 0.0, cz),
                Vec3::Y,
                Vec3::X,
                half_x,
                half_z,
            ),
            Surface::from_frame(
                SurfaceKind::Ceiling,
                Vec3::new(cx, h, cz),
                -Vec3::Y,
                Vec3::X,
                half_x,
                half_z,
            ),
            Surface::from_frame(
                SurfaceKind::Wall,
                Vec3::new(x0, half_h, cz),
                Vec3::X,
                Vec3::Z,
                half_z,
                half_h,
            ),
            Surface::from_frame(
                SurfaceKind::Wall,
                Vec3::new(x1, half_h, cz),
                -Vec3::X,
                Vec3::Z,
                half_z,
                half_h,
            ),
            Surface::from_frame(
                SurfaceKind::Wall,
                Vec3::new(cx, half_h, z0),
                Vec3::Z,
                Vec3::X,
                half_x,
                half_h,
            ),
            Surface::from_frame(
                SurfaceKind::Wall,
                Vec3::new(cx, half_h, z1),
                -Vec3::Z,
                Vec3::X,
                half_x,
                half_h,
            ),
        ]
    }
}

fn inset(extent: f32, thickness: f32) -> (f32, f32) {
    let lo = thickness;
    let hi = (extent - thickness).max(lo);
    (lo, hi)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room() -> RoomBounds {
        RoomBounds::new(10.0, 8.0, 3.0, 0.2)
    }

    #[test]
    fn ray_direction_is_normalized() {
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, 5.0));
        assert_eq!(ray.direction(), Vec3::Z);
        assert!(Ray::new(Vec3::ZERO, Vec3::ZERO).is_degenerate());
        assert!(Ray::new(Vec3::ZERO, Vec3::new(f32::NAN, 0.0, 0.0)).is_degenerate());
    }

    #[test]
    fn surface_construction_errors() {
        let c = Vec3::ZERO;
        assert_eq!(
            Surface::new(SurfaceKind::Wall, c, Vec3::ZERO, Vec3::X, 1.0, 1.0),
            Err(GeometryError::ZeroNormal)
        );
        assert_eq!(
            Surface::new(SurfaceKind::Wall, c, Vec3::X, Vec3::new(2.0, 0.0, 0.0), 1.0, 1.0),
            Err(GeometryError::DegenerateAxis)
        );
        assert_eq!(
            Surface::new(SurfaceKind::Wall, c, Vec3::X, Vec3::Z, -1.0, 1.0),
            Err(GeometryError::NegativeExtent {
                field: "half_u",
                value: -1.0
            })
        );
        assert_eq!(
            Surface::new(SurfaceKind::Floor, Vec3::new(f32::NAN, 0.0, 0.0), Vec3::Y, Vec3::X, 1.0, 1.0),
            Err(GeometryError::NonFinite { field: "center" })
        );
    }

    #[test]
    fn surface_frame_is_orthonormal() {
        // Skewed u axis gets projected into the plane
        let s = Surface::new(
            SurfaceKind::Wall,
            Vec3::ZERO,
            Vec3::new(0.0, 0.0, 2.0),
            Vec3::new(1.0, 0.0, 1.0),
            1.0,
            1.0,
        )
        .unwrap();
        assert_eq!(s.normal(), Vec3::Z);
        assert!(s.u_axis.dot(s.normal()).abs() < 1e-6);
        assert!(s.v_axis.dot(s.u_axis).abs() < 1e-6);
        assert!((s.v_axis.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn intersect_inside_patch() {
        let floor = room().surfaces()[0];
        let ray = Ray::new(Vec3::new(5.0, 2.0, 4.0), -Vec3::Y);
        assert_eq!(floor.intersect(&ray), Some(2.0));
    }

    #[test]
    fn miss_outside_patch_parallel_and_behind() {
        let floor = room().surfaces()[0];

        // Lands on the floor plane but outside the interior inset
        let outside = Ray::new(Vec3::new(-1.0, 2.0, 4.0), -Vec3::Y);
        assert_eq!(floor.intersect(&outside), None);

        let parallel = Ray::new(Vec3::new(5.0, 2.0, 4.0), Vec3::X);
        assert_eq!(floor.intersect(&parallel), None);

        let away = Ray::new(Vec3::new(5.0, 2.0, 4.0), Vec3::Y);
        assert_eq!(floor.intersect(&away), None);
    }

    #[test]
    fn hit_within_tolerance_of_origin_is_a_miss() {
        let floor = room().surfaces()[0];

        // Starting on the floor and looking down through it
        let on_surface = Ray::new(Vec3::new(5.0, 0.0, 4.0), -Vec3::Y);
        assert_eq!(floor.intersect(&on_surface), None);

        let just_inside = Ray::new(Vec3::new(5.0, MIN_HIT_DISTANCE_M / 2.0, 4.0), -Vec3::Y);
        assert_eq!(floor.intersect(&just_inside), None);

        let clear = Ray::new(Vec3::new(5.0, 1e-3, 4.0), -Vec3::Y);
        assert!(floor.intersect(&clear).is_some());
    }

    #[test]
    fn room_surfaces_face_inward() {
        let bounds = room();
        let center = Vec3::new(5.0, 1.5, 4.0);
        for surface in bounds.surfaces() {
            // Interior point sits on the side the normal points to
            assert!(surface.normal().dot(center - surface.center()) > 0.0);
        }
    }

    #[test]
    fn walls_are_inset_by_thickness() {
        let surfaces = room().surfaces();
        assert_eq!(surfaces[2].center().x, 0.2);
        assert!((surfaces[3].center().x - 9.8).abs() < 1e-5);
        assert_eq!(surfaces[4].center().z, 0.2);
        assert!((surfaces[5].center().z - 7.8).abs() < 1e-5);
        assert_eq!(surfaces[1].center().y, 3.0);
    }

    #[test]
    fn degenerate_room_collapses_ranges() {
        let narrow = RoomBounds::new(0.3, 8.0, 3.0, 0.2);
        assert_eq!(narrow.x_range(), (0.2, 0.2));

        let junk = RoomBounds::new(f32::NAN, -4.0, f32::INFINITY, 0.0);
        assert_eq!(junk.x_range(), (0.0, 0.0));
        assert_eq!(junk.z_range(), (0.0, 0.0));
        assert_eq!(junk.y_range(), (0.0, 0.0));
    }
}
