//! Minimal 3D vector math for room-space placement
//!
//! Room coordinates are right-handed with Y up:
//! - X runs along the room length, `0..=length`
//! - Z runs along the room width, `0..=width`
//! - Y is height above the floor, `0..=height`
//!
//! All square roots go through `libm` so the crate builds without `std`.

/// Replace NaN/infinity with zero.
///
/// Every public entry point runs its numeric inputs through this before any
/// arithmetic. Non-finite values never reach the math and never produce a
/// warning of their own.
#[inline]
pub fn sanitize(value: f32) -> f32 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// A point or direction in room space (meters)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3 {
    /// Along the room length
    pub x: f32,
    /// Height above the floor
    pub y: f32,
    /// Along the room width
    pub z: f32,
}

impl Vec3 {
    /// Origin
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    /// Unit X
    pub const X: Self = Self::new(1.0, 0.0, 0.0);
    /// Unit Y (up)
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);
    /// Unit Z
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Vector from components
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Same vector with each non-finite component replaced by zero
    pub fn sanitized(self) -> Self {
        Self::new(sanitize(self.x), sanitize(self.y), sanitize(self.z))
    }

    /// No NaN or infinite component
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Dot product
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product, right-handed
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Euclidean length
    pub fn length(self) -> f32 {
        libm::sqrtf(self.dot(self))
    }

    /// Unit vector in the same direction, or `None` for (near) zero length
    pub fn normalized(self) -> Option<Self> {
        let len = self.length();
        if len.is_finite() && len > f32::EPSILON {
            Some(self.scale(1.0 / len))
        } else {
            None
        }
    }

    /// Component-wise multiply by a scalar
    pub fn scale(self, factor: f32) -> Self {
        Self::new(self.x * factor, self.y * factor, self.z * factor)
    }
}

impl core::ops::Add for Vec3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl core::ops::Sub for Vec3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl core::ops::Neg for Vec3 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_zeroes_non_finite() {
        assert_eq!(sanitize(f32::NAN), 0.0);
        assert_eq!(sanitize(f32::INFINITY), 0.0);
        assert_eq!(sanitize(f32::NEG_INFINITY), 0.0);
        assert_eq!(sanitize(-3.5), -3.5);
    }

    #[test]
    fn cross_follows_right_hand_rule() {
        assert_eq!(Vec3::X.cross(Vec3::Y), Vec3::Z);
        assert_eq!(Vec3::Y.cross(Vec3::Z), Vec3::X);
        assert_eq!(Vec3::Z.cross(Vec3::X), Vec3::Y);
    }

    #[test]
    fn normalize() {
        let v = Vec3::new(3.0, 0.0, 4.0).normalized().unwrap();
        assert!((v.length() - 1.0).abs() < 1e-6);
        assert!((v.x - 0.6).abs() < 1e-6);

        assert!(Vec3::ZERO.normalized().is_none());
        assert!(Vec3::new(f32::NAN, 0.0, 0.0).normalized().is_none());
    }

    #[test]
    fn sanitized_vector() {
        let v = Vec3::new(f32::NAN, 2.0, f32::INFINITY).sanitized();
        assert_eq!(v, Vec3::new(0.0, 2.0, 0.0));
    }
}
