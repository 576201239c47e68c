//! Coverage Composer
//!
//! Combines the projector's footprint with the current placement into the
//! rectangle an external renderer draws on the floor.
//!
//! ## Rules
//!
//! - Width is capped at the room length, depth at the room width
//! - Both are floored at a minimum visible size (0.1 m by default) so a
//!   zero footprint still shows up as a marker
//! - Area is recomputed from the final edges
//! - The rectangle is centered below the mount point, raised slightly off
//!   the floor so it does not z-fight with it
//!
//! The floor is applied after the cap. A room narrower than the minimum
//! visible size therefore still gets a marker of that size.

use crate::{
    constants::{MIN_VISIBLE_SIZE_M, OVERLAY_HEIGHT_M},
    footprint::Footprint,
    geometry::{sanitize, Vec3},
    placement::{Placement, RoomBounds},
    range::RangeOutputs,
};

/// Renderable floor rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoverageOverlay {
    /// Extent along X (m)
    pub width_m: f32,
    /// Extent along Z (m)
    pub depth_m: f32,
    /// `width_m * depth_m` (m²)
    pub area_m2: f32,
    /// Rectangle center in room space
    pub center: Vec3,
}

/// Everything a view needs for one camera
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoverageReport {
    /// Raw projector output
    pub footprint: Footprint,
    /// Range estimate, warnings included
    pub range: RangeOutputs,
    /// Clamped, anchored rectangle
    pub overlay: CoverageOverlay,
    /// Placement the overlay is anchored at; `None` before the first aim
    pub mount: Option<Placement>,
}

/// Overlay composer with configurable marker size and height
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoverageComposer {
    min_visible_size_m: f32,
    overlay_height_m: f32,
}

impl Default for CoverageComposer {
    fn default() -> Self {
        Self {
            min_visible_size_m: MIN_VISIBLE_SIZE_M,
            overlay_height_m: OVERLAY_HEIGHT_M,
        }
    }
}

impl CoverageComposer {
    /// Composer with a custom minimum edge and overlay height
    ///
    /// Non-finite or negative values become zero.
    pub fn new(min_visible_size_m: f32, overlay_height_m: f32) -> Self {
        Self {
            min_visible_size_m: sanitize(min_visible_size_m).max(0.0),
            overlay_height_m: sanitize(overlay_height_m).max(0.0),
        }
    }

    /// Fit a footprint into the room under a placement
    pub fn compose(
        &self,
        footprint: &Footprint,
        placement: &Placement,
        bounds: &RoomBounds,
    ) -> CoverageOverlay {
        self.anchor(footprint, placement.position, bounds)
    }

    /// Compose and bundle with the range estimate
    ///
    /// Without a placement the overlay sits at the middle of the floor.
    pub fn report(
        &self,
        footprint: Footprint,
        range: RangeOutputs,
        placement: Option<&Placement>,
        bounds: &RoomBounds,
    ) -> CoverageReport {
        let anchor = placement
            .map(|p| p.position)
            .unwrap_or_else(|| bounds.floor_center());

        CoverageReport {
            overlay: self.anchor(&footprint, anchor, bounds),
            footprint,
            range,
            mount: placement.copied(),
        }
    }

    fn anchor(&self, footprint: &Footprint, anchor: Vec3, bounds: &RoomBounds) -> CoverageOverlay {
        let bounds = bounds.sanitized();
        let anchor = anchor.sanitized();

        let width = fit(footprint.width_m, bounds.length_m, self.min_visible_size_m);
        let depth = fit(footprint.depth_m, bounds.width_m, self.min_visible_size_m);

        CoverageOverlay {
            width_m: width,
            depth_m: depth,
            area_m2: width * depth,
            center: Vec3::new(anchor.x, self.overlay_height_m, anchor.z),
        }
    }
}

/// Cap at the room extent, then floor at the visible minimum
fn fit(edge: f32, room_extent: f32, min_visible: f32) -> f32 {
    sanitize(edge).min(room_extent).max(min_visible)
}

/// Compose with the default marker size and height
pub fn compose(footprint: &Footprint, placement: &Placement, bounds: &RoomBounds) -> CoverageOverlay {
    CoverageComposer::default().compose(footprint, placement, bounds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::{estimate, RangeInputs};

    fn room() -> RoomBounds {
        RoomBounds::new(10.0, 8.0, 3.0, 0.2)
    }

    fn ceiling_mount() -> Placement {
        Placement {
            position: Vec3::new(3.0, 2.95, 5.0),
            normal: -Vec3::Y,
        }
    }

    #[test]
    fn footprint_inside_room_passes_through() {
        let fp = Footprint::from_edges(4.0, 3.0, 3.0);
        let overlay = compose(&fp, &ceiling_mount(), &room());
        assert_eq!(overlay.width_m, 4.0);
        assert_eq!(overlay.depth_m, 3.0);
        assert_eq!(overlay.area_m2, 12.0);
        assert_eq!(overlay.center, Vec3::new(3.0, 0.01, 5.0));
    }

    #[test]
    fn oversized_footprint_is_capped_by_room() {
        let fp = Footprint::from_edges(25.0, 30.0, 10.0);
        let overlay = compose(&fp, &ceiling_mount(), &room());
        assert_eq!(overlay.width_m, 10.0);
        assert_eq!(overlay.depth_m, 8.0);
        assert_eq!(overlay.area_m2, 80.0);
    }

    #[test]
    fn empty_footprint_gets_minimum_marker() {
        let overlay = compose(&Footprint::default(), &ceiling_mount(), &room());
        assert_eq!(overlay.width_m, 0.1);
        assert_eq!(overlay.depth_m, 0.1);
        assert!((overlay.area_m2 - 0.01).abs() < 1e-7);
    }

    #[test]
    fn tiny_room_still_shows_marker() {
        let closet = RoomBounds::new(0.05, 0.0, 2.0, 0.0);
        let overlay = compose(&Footprint::from_edges(4.0, 4.0, 2.0), &ceiling_mount(), &closet);
        assert_eq!(overlay.width_m, 0.1);
        assert_eq!(overlay.depth_m, 0.1);
    }

    #[test]
    fn custom_composer() {
        let composer = CoverageComposer::new(0.5, 0.0);
        let overlay = composer.compose(&Footprint::default(), &ceiling_mount(), &room());
        assert_eq!(overlay.width_m, 0.5);
        assert_eq!(overlay.center.y, 0.0);

        assert_eq!(CoverageComposer::new(f32::NAN, -1.0), CoverageComposer::new(0.0, 0.0));
    }

    #[test]
    fn report_without_placement_uses_floor_center() {
        let range = estimate(RangeInputs::new(3.0, 90.0, 8.0, 0.5, 0.75));
        let report = CoverageComposer::default().report(
            Footprint::from_edges(2.0, 2.0, 3.0),
            range.clone(),
            None,
            &room(),
        );
        assert_eq!(report.mount, None);
        assert_eq!(report.range, range);
        assert!((report.overlay.center.x - 5.0).abs() < 1e-5);
        assert!((report.overlay.center.z - 4.0).abs() < 1e-5);
    }

    #[test]
    fn report_with_placement() {
        let mount = ceiling_mount();
        let range = estimate(RangeInputs::new(3.0, 90.0, 8.0, 0.5, 0.75));
        let report = CoverageComposer::default().report(
            Footprint::from_edges(2.0, 2.0, 3.0),
            range,
            Some(&mount),
            &room(),
        );
        assert_eq!(report.mount, Some(mount));
        assert_eq!(report.overlay.center, Vec3::new(3.0, 0.01, 5.0));
    }
}
