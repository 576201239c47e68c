//! Advisory Input Limits
//!
//! Bounds the range estimator checks before answering. Violations never stop
//! the computation; each one adds a warning to the result.

/// Maximum supported mounting height (m). Valid range is (0, 30].
pub const MOUNTING_HEIGHT_MAX_M: f32 = 30.0;

/// Maximum lens opening angle (°). Valid range is (0, 120].
pub const OPENING_ANGLE_MAX_DEG: f32 = 120.0;

/// Number of distinct checks the estimator runs, and so the most warnings a
/// single estimate can carry.
pub const MAX_RANGE_WARNINGS: usize = 5;
