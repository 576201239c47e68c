//! Placement Resolver
//!
//! Turns an operator's aim ray into a mount point on the room's inner
//! surfaces, and keeps that mount point inside the room when the room is
//! edited.
//!
//! ## Pieces
//!
//! - [`surface`]: rays, rectangular surfaces and the room's six inner faces
//! - [`resolver`]: nearest-hit resolution and bounds clamping
//! - [`tracker`]: per-mount state across aims and room edits
//!
//! Anything implementing [`RayTarget`](crate::traits::RayTarget) can be aimed
//! at; [`Surface`] is the built-in implementation.
//!
//! ## Example
//!
//! ```
//! use flamesight_core::geometry::Vec3;
//! use flamesight_core::placement::{resolve_placement, Ray, RoomBounds};
//!
//! let room = RoomBounds::new(10.0, 8.0, 3.0, 0.2);
//! let ray = Ray::new(Vec3::new(5.0, 1.0, 4.0), Vec3::Y);
//!
//! let placement = resolve_placement(&ray, &room.surfaces()).unwrap();
//! assert_eq!(placement.normal, -Vec3::Y);
//! ```

pub mod resolver;
pub mod surface;
pub mod tracker;

pub use resolver::{clamp_to_bounds, resolve_placement, Placement, PlacementResolver};
pub use surface::{Ray, RoomBounds, Surface, SurfaceKind};
pub use tracker::MountState;
