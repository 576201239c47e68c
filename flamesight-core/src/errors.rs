//! Error Types for FlameSight
//!
//! ## Design Philosophy
//!
//! The engine's core operations are total: projecting a footprint, estimating
//! detection range, resolving a placement and composing coverage always
//! produce an answer. Bad numeric input degrades to warnings or zeros instead
//! of failing, because an operator dragging a slider should always see
//! *something* on screen.
//!
//! Errors exist only at the edges where caller-supplied data could break an
//! invariant the core relies on:
//!
//! - [`GeometryError`]: building a [`Surface`](crate::placement::Surface)
//!   from a degenerate frame
//! - [`CalibrationError`]: loading a vendor table that is not strictly
//!   ascending or contains junk
//! - [`ConfigError`]: an [`EngineConfig`](crate::config::EngineConfig) whose
//!   constants would make the math meaningless
//!
//! All variants are small and `Copy`, with `&'static str` or numeric payloads
//! only, so they work unchanged on `no_std` targets.

use thiserror_no_std::Error;

/// Result type for surface construction
pub type GeometryResult<T> = Result<T, GeometryError>;

/// Result type for calibration table construction
pub type CalibrationResult<T> = Result<T, CalibrationError>;

/// Result type for configuration checks
pub type ConfigResult<T> = Result<T, ConfigError>;

/// A surface description that cannot be intersected reliably
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum GeometryError {
    /// A coordinate or extent was NaN or infinite
    #[error("Non-finite value in {field}")]
    NonFinite {
        /// Which input carried the bad value
        field: &'static str,
    },

    /// The surface normal has (near) zero length
    #[error("Surface normal has zero length")]
    ZeroNormal,

    /// The in-plane axis is parallel to the normal, so no patch frame exists
    #[error("In-plane axis is parallel to the surface normal")]
    DegenerateAxis,

    /// A half-extent was negative
    #[error("Negative extent {value} for {field}")]
    NegativeExtent {
        /// Which extent was negative
        field: &'static str,
        /// The rejected value
        value: f32,
    },
}

/// A calibration table that violates the lookup invariants
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum CalibrationError {
    /// No rows at all
    #[error("Calibration table is empty")]
    Empty,

    /// A row contains NaN or infinity
    #[error("Row {index} contains a non-finite value")]
    NonFinite {
        /// Offending row
        index: usize,
    },

    /// Heights must strictly increase row to row
    #[error("Row {index} height {height} does not exceed previous height {previous}")]
    NotAscending {
        /// Offending row
        index: usize,
        /// Its height
        height: f32,
        /// Height of the row before it
        previous: f32,
    },

    /// Distances cannot be negative
    #[error("Row {index} has a negative detection distance")]
    NegativeDistance {
        /// Offending row
        index: usize,
    },
}

/// An engine configuration that would make results meaningless
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Parameter outside its allowed range
    #[error("{name} = {value} is out of range")]
    OutOfRange {
        /// Config field name
        name: &'static str,
        /// Rejected value
        value: f32,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for GeometryError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::NonFinite { field } => defmt::write!(fmt, "Non-finite {}", field),
            Self::ZeroNormal => defmt::write!(fmt, "Zero normal"),
            Self::DegenerateAxis => defmt::write!(fmt, "Degenerate axis"),
            Self::NegativeExtent { field, value } => {
                defmt::write!(fmt, "Negative extent {} for {}", value, field)
            }
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for CalibrationError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::Empty => defmt::write!(fmt, "Empty table"),
            Self::NonFinite { index } => defmt::write!(fmt, "Row {} non-finite", index),
            Self::NotAscending { index, height, previous } => {
                defmt::write!(fmt, "Row {} height {} <= {}", index, height, previous)
            }
            Self::NegativeDistance { index } => {
                defmt::write!(fmt, "Row {} negative distance", index)
            }
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ConfigError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::OutOfRange { name, value } => defmt::write!(fmt, "{} = {} out of range", name, value),
        }
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;

    #[test]
    fn messages_are_human_readable() {
        assert_eq!(GeometryError::ZeroNormal.to_string(), "Surface normal has zero length");
        assert_eq!(
            CalibrationError::NonFinite { index: 3 }.to_string(),
            "Row 3 contains a non-finite value"
        );
        assert_eq!(
            ConfigError::OutOfRange { name: "clearance", value: -1.0 }.to_string(),
            "clearance = -1 is out of range"
        );
    }

    #[test]
    fn errors_are_small() {
        assert!(core::mem::size_of::<CalibrationError>() <= 24);
        assert!(core::mem::size_of::<GeometryError>() <= 32);
    }
}
