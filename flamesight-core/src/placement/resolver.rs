//! Mount point resolution
//!
//! ## Resolving an aim
//!
//! 1. Cast the ray against every target and keep the nearest strictly
//!    positive hit. A later target replaces the current best only when it is
//!    *strictly* closer, so equal-distance hits go to whichever target comes
//!    first in the slice. Hits closer than
//!    [`MIN_HIT_DISTANCE_M`](crate::constants::placement::MIN_HIT_DISTANCE_M)
//!    (10 µm) count as misses for [`Surface`](super::Surface), so a ray
//!    starting on a surface does not land on that same surface.
//! 2. Take the target's normal at the hit point and flip it if it points
//!    along the ray (`dot > 0`). The result always faces back toward the
//!    operator, i.e. into the room.
//! 3. Push the hit point off the surface by the clearance along that normal.
//!
//! No hit means no placement. The caller decides whether to keep the one it
//! already has; see [`MountState`](super::MountState).
//!
//! ## Clamping
//!
//! [`clamp_to_bounds`] keeps a placement inside the room interior after the
//! room is resized. It only touches the position; the normal is kept as-is.
//! Clamping an in-bounds placement returns it unchanged.

use crate::{
    constants::SURFACE_CLEARANCE_M,
    geometry::{sanitize, Vec3},
    traits::RayTarget,
};

use super::surface::{Ray, RoomBounds};

/// Confirmed mount position and the direction the mount faces
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    /// Mount point in room space (m)
    pub position: Vec3,
    /// Unit normal pointing into the room
    pub normal: Vec3,
}

/// Ray-cast placement with a configurable surface clearance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementResolver {
    clearance_m: f32,
}

impl Default for PlacementResolver {
    fn default() -> Self {
        Self {
            clearance_m: SURFACE_CLEARANCE_M,
        }
    }
}

impl PlacementResolver {
    /// Resolver with a custom clearance; negative or non-finite becomes zero
    pub fn with_clearance(clearance_m: f32) -> Self {
        Self {
            clearance_m: sanitize(clearance_m).max(0.0),
        }
    }

    /// Offset from the surface along the normal (m)
    pub fn clearance(&self) -> f32 {
        self.clearance_m
    }

    /// Resolve an aim ray to a placement on the nearest target
    pub fn resolve<T: RayTarget>(&self, ray: &Ray, targets: &[T]) -> Option<Placement> {
        if ray.is_degenerate() {
            return None;
        }

        let Some((distance, target)) = nearest_hit(ray, targets) else {
            log_trace!("Placement: ray missed all {} targets", targets.len());
            return None;
        };

        let hit = ray.at(distance);
        let mut normal = target
            .normal_at(hit)
            .sanitized()
            .normalized()
            .unwrap_or(-ray.direction());
        if normal.dot(ray.direction()) > 0.0 {
            normal = -normal;
        }

        Some(Placement {
            position: hit + normal.scale(self.clearance_m),
            normal,
        })
    }
}

/// Nearest strictly positive hit; ties keep the earliest target
fn nearest_hit<'t, T: RayTarget>(ray: &Ray, targets: &'t [T]) -> Option<(f32, &'t T)> {
    let mut nearest: Option<(f32, &T)> = None;
    for target in targets {
        let Some(distance) = target.intersect(ray) else {
            continue;
        };
        if !distance.is_finite() || distance <= 0.0 {
            continue;
        }
        if nearest.map_or(true, |(best, _)| distance < best) {
            nearest = Some((distance, target));
        }
    }
    nearest
}

/// Resolve with the default clearance
pub fn resolve_placement<T: RayTarget>(ray: &Ray, targets: &[T]) -> Option<Placement> {
    PlacementResolver::default().resolve(ray, targets)
}

/// Clamp a placement's position into the room interior
///
/// X is kept in `[t, length - t]`, Z in `[t, width - t]` and Y in
/// `[0, height]`. The normal is preserved. Room ranges never have
/// `lo > hi`, so `f32::clamp` cannot panic here.
pub fn clamp_to_bounds(placement: Placement, bounds: &RoomBounds) -> Placement {
    let (x0, x1) = bounds.x_range();
    let (y0, y1) = bounds.y_range();
    let (z0, z1) = bounds.z_range();

    let p = placement.position.sanitized();
    Placement {
        position: Vec3::new(
            p.x.clamp(x0, x1),
            p.y.clamp(y0, y1),
            p.z.clamp(z0, z1),
        ),
        normal: placement.normal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::placement::{Surface, SurfaceKind};

    fn room() -> RoomBounds {
        RoomBounds::new(10.0, 8.0, 3.0, 0.2)
    }

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-4
    }

    #[test]
    fn aim_at_ceiling() {
        let surfaces = room().surfaces();
        let ray = Ray::new(Vec3::new(5.0, 1.0, 4.0), Vec3::Y);

        let placement = resolve_placement(&ray, &surfaces).unwrap();
        assert_eq!(placement.normal, -Vec3::Y);
        assert!(approx(placement.position, Vec3::new(5.0, 2.95, 4.0)));
    }

    #[test]
    fn aim_at_wall_uses_nearest() {
        let surfaces = room().surfaces();
        // Heads toward high X; floor and ceiling are parallel
        let ray = Ray::new(Vec3::new(5.0, 1.5, 4.0), Vec3::X);

        let placement = resolve_placement(&ray, &surfaces).unwrap();
        assert_eq!(placement.normal, -Vec3::X);
        assert!(approx(placement.position, Vec3::new(9.75, 1.5, 4.0)));
    }

    #[test]
    fn normal_is_flipped_to_face_the_ray() {
        // Surface authored with its normal facing away from the operator
        let wall = Surface::new(
            SurfaceKind::Wall,
            Vec3::new(0.0, 0.0, 5.0),
            Vec3::Z,
            Vec3::X,
            2.0,
            2.0,
        )
        .unwrap();
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);

        let placement = resolve_placement(&ray, &[wall]).unwrap();
        assert_eq!(placement.normal, -Vec3::Z);
        assert!(approx(placement.position, Vec3::new(0.0, 0.0, 4.95)));
        assert!(placement.normal.dot(ray.direction()) <= 0.0);
    }

    #[test]
    fn ties_go_to_first_target() {
        let a = Surface::new(SurfaceKind::Wall, Vec3::new(0.0, 0.0, 3.0), Vec3::Z, Vec3::X, 1.0, 1.0)
            .unwrap();
        let b = Surface::new(SurfaceKind::Floor, Vec3::new(0.0, 0.0, 3.0), -Vec3::Z, Vec3::Y, 1.0, 1.0)
            .unwrap();
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);

        let hits = [a, b];
        let first = nearest_hit(&ray, &hits).unwrap().1;
        assert_eq!(first.kind(), SurfaceKind::Wall);

        let hits = [b, a];
        let first = nearest_hit(&ray, &hits).unwrap().1;
        assert_eq!(first.kind(), SurfaceKind::Floor);
    }

    #[test]
    fn no_targets_no_hit() {
        let ray = Ray::new(Vec3::ZERO, Vec3::X);
        let none: [Surface; 0] = [];
        assert_eq!(resolve_placement(&ray, &none), None);
    }

    #[test]
    fn degenerate_ray_no_hit() {
        let ray = Ray::new(Vec3::new(5.0, 1.0, 4.0), Vec3::ZERO);
        assert_eq!(resolve_placement(&ray, &room().surfaces()), None);
    }

    #[test]
    fn custom_clearance() {
        let surfaces = room().surfaces();
        let ray = Ray::new(Vec3::new(5.0, 1.0, 4.0), -Vec3::Y);

        let flush = PlacementResolver::with_clearance(0.0).resolve(&ray, &surfaces).unwrap();
        assert_eq!(flush.position.y, 0.0);

        let far = PlacementResolver::with_clearance(0.5).resolve(&ray, &surfaces).unwrap();
        assert!((far.position.y - 0.5).abs() < 1e-6);

        assert_eq!(PlacementResolver::with_clearance(-1.0).clearance(), 0.0);
    }

    #[test]
    fn clamp_pulls_position_inside() {
        let placement = Placement {
            position: Vec3::new(12.0, 5.0, -1.0),
            normal: -Vec3::X,
        };
        let clamped = clamp_to_bounds(placement, &room());
        assert!(approx(clamped.position, Vec3::new(9.8, 3.0, 0.2)));
        assert_eq!(clamped.normal, placement.normal);
    }

    #[test]
    fn clamp_is_idempotent() {
        let inside = Placement {
            position: Vec3::new(4.0, 2.0, 3.0),
            normal: Vec3::Y,
        };
        assert_eq!(clamp_to_bounds(inside, &room()), inside);

        let outside = Placement {
            position: Vec3::new(40.0, -2.0, 30.0),
            normal: Vec3::Y,
        };
        let once = clamp_to_bounds(outside, &room());
        assert_eq!(clamp_to_bounds(once, &room()), once);
    }
}
