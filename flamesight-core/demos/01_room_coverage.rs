//! Room Coverage Example
//!
//! Walks through one camera placement session the way a host application
//! drives the engine: set up a room, aim, confirm, edit the room, and render.
//!
//! ## What You'll Learn
//!
//! - How the footprint and the detection range are computed independently
//! - How an aim ray becomes a mount point and normal
//! - What happens to the mount when the room shrinks
//! - What the composer hands to a renderer
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_room_coverage
//! ```

use flamesight_core::{
    EngineConfig, FovParams, MountState, RangeInputs, Ray, RoomBounds, Vec3,
};

fn main() {
    println!("FlameSight Room Coverage Example");
    println!("================================\n");

    let config = EngineConfig::default();
    let resolver = config.resolver();
    let composer = config.composer();

    let mut room = RoomBounds::new(20.0, 12.0, 6.0, 0.3);
    let mut mount = MountState::default();
    println!(
        "Room: {} m × {} m × {} m, walls {} m",
        room.length_m, room.width_m, room.height_m, room.wall_thickness_m
    );

    // Operator stands near one end and aims at the far wall, up high
    println!("\nAiming:");
    println!("-------");
    let aim = Ray::new(Vec3::new(3.0, 1.7, 6.0), Vec3::new(1.0, 0.25, 0.0));
    if mount.aim(&resolver, &aim, &room.surfaces()) {
        print_mount(&mount);
    } else {
        println!("  Missed the room");
    }

    // An aim from outside the room pointing away from it keeps the old mount
    let stray = Ray::new(Vec3::new(30.0, 1.7, 6.0), Vec3::X);
    if !mount.aim(&resolver, &stray, &room.surfaces()) {
        println!("  Stray aim missed; mount unchanged");
    }

    let Some(placement) = mount.placement().copied() else {
        return;
    };

    println!("\nCoverage:");
    println!("---------");
    let footprint = config
        .projector()
        .project(FovParams::new(placement.position.y, 40.0, 90.0, 60.0));
    let range = config
        .estimator()
        .estimate(RangeInputs::new(placement.position.y, 90.0, 8.0, 0.3, 1.0));

    println!(
        "  Footprint: {:.2} m × {:.2} m = {:.2} m² (at {:.2} m)",
        footprint.width_m, footprint.depth_m, footprint.area_m2, footprint.projection_distance_m
    );
    println!("  Flame detected up to {:.1} m", range.flame_max_distance_m);
    println!("  Smoke detected up to {:.1} m", range.smoke_max_distance_m);
    for warning in &range.warnings {
        println!("  ⚠ {}", warning);
    }

    let report = composer.report(footprint, range, Some(&placement), &room);
    println!(
        "  Overlay: {:.2} m × {:.2} m centered at ({:.2}, {:.2}, {:.2})",
        report.overlay.width_m,
        report.overlay.depth_m,
        report.overlay.center.x,
        report.overlay.center.y,
        report.overlay.center.z
    );

    println!("\nRoom edit:");
    println!("----------");
    room.length_m = 14.0;
    println!("  Length reduced to {} m", room.length_m);
    if mount.on_bounds_changed(&room) {
        print_mount(&mount);
    } else {
        println!("  Mount still inside");
    }

    println!("\nOut-of-range inputs:");
    println!("--------------------");
    let odd = config
        .estimator()
        .estimate(RangeInputs::new(42.0, 135.0, 0.0, 0.5, 0.75));
    println!(
        "  Height 42 m → flame {:.1} m, smoke {:.1} m",
        odd.flame_max_distance_m, odd.smoke_max_distance_m
    );
    for warning in &odd.warnings {
        println!("  ⚠ {}", warning);
    }
}

fn print_mount(mount: &MountState) {
    if let Some(p) = mount.placement() {
        println!(
            "  Mount at ({:.2}, {:.2}, {:.2}), facing ({:.2}, {:.2}, {:.2})",
            p.position.x, p.position.y, p.position.z, p.normal.x, p.normal.y, p.normal.z
        );
    }
}
