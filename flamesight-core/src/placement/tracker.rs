//! Placement state across aim, confirm and room edits
//!
//! The host drives a small state machine per mount:
//!
//! ```text
//!   Unset ──aim(hit)──► Placed ──aim(hit)──► Placed (moved)
//!     │                   │
//!     └─aim(miss)─► Unset └─aim(miss)──► Placed (unchanged)
//! ```
//!
//! A room resize re-clamps an existing placement so it never ends up outside
//! the new interior.

use crate::traits::RayTarget;

use super::{
    resolver::{clamp_to_bounds, Placement, PlacementResolver},
    surface::{Ray, RoomBounds},
};

/// Where a mount currently sits, if anywhere
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MountState {
    /// Not placed yet
    #[default]
    Unset,
    /// Placed at a resolved mount point
    Placed(Placement),
}

impl MountState {
    /// Current placement, if any
    pub fn placement(&self) -> Option<&Placement> {
        match self {
            Self::Unset => None,
            Self::Placed(p) => Some(p),
        }
    }

    /// Whether a placement exists
    pub fn is_placed(&self) -> bool {
        matches!(self, Self::Placed(_))
    }

    /// Aim at the room and move the mount to the hit point
    ///
    /// Returns `true` if the ray landed. A miss leaves the state untouched.
    pub fn aim<T: RayTarget>(
        &mut self,
        resolver: &PlacementResolver,
        ray: &Ray,
        targets: &[T],
    ) -> bool {
        match resolver.resolve(ray, targets) {
            Some(placement) => {
                log_debug!(
                    "Placement accepted at ({}, {}, {})",
                    placement.position.x,
                    placement.position.y,
                    placement.position.z
                );
                *self = Self::Placed(placement);
                true
            }
            None => false,
        }
    }

    /// Set a placement computed outside the resolver
    pub fn place(&mut self, placement: Placement) {
        *self = Self::Placed(placement);
    }

    /// Re-clamp after the room changed
    ///
    /// Returns `true` if the placement had to move.
    pub fn on_bounds_changed(&mut self, bounds: &RoomBounds) -> bool {
        let Self::Placed(current) = *self else {
            return false;
        };

        let clamped = clamp_to_bounds(current, bounds);
        if clamped == current {
            return false;
        }

        log_warn!(
            "Placement clamped into room: ({}, {}, {}) -> ({}, {}, {})",
            current.position.x,
            current.position.y,
            current.position.z,
            clamped.position.x,
            clamped.position.y,
            clamped.position.z
        );
        *self = Self::Placed(clamped);
        true
    }
}
