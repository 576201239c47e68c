//! Core traits for placement
//!
//! The room geometry belongs to the host's scene model. The resolver only
//! needs two answers from each piece of it, so that is all the trait asks
//! for. Keep it small; a wall is a wall.

use crate::geometry::Vec3;
use crate::placement::Ray;

/// Anything a mount ray can land on
pub trait RayTarget {
    /// Distance along `ray` to the first intersection, if any
    ///
    /// Implementations return only strictly positive distances; hits at or
    /// behind the ray origin count as misses.
    fn intersect(&self, ray: &Ray) -> Option<f32>;

    /// Unit normal of the target at `point`
    ///
    /// Either orientation is acceptable; the resolver flips it to face the
    /// incoming ray.
    fn normal_at(&self, point: Vec3) -> Vec3;
}

impl<T: RayTarget + ?Sized> RayTarget for &T {
    fn intersect(&self, ray: &Ray) -> Option<f32> {
        (**self).intersect(ray)
    }

    fn normal_at(&self, point: Vec3) -> Vec3 {
        (**self).normal_at(point)
    }
}
