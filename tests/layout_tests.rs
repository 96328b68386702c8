// Host-side tests for the layout state machine.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod sphere_core {
    pub mod config {
        include!("../src/core/config.rs");
    }
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod error {
        include!("../src/core/error.rs");
    }
    pub mod labels {
        include!("../src/core/labels.rs");
    }
    pub mod layout {
        include!("../src/core/layout.rs");
    }
    pub mod pointer {
        include!("../src/core/pointer.rs");
    }
    pub mod sphere {
        include!("../src/core/sphere.rs");
    }
}

use sphere_core::config::*;
use sphere_core::error::LayoutError;
use sphere_core::layout::*;
use sphere_core::pointer::*;
use sphere_core::sphere::*;

fn four_labels() -> SphereConfig {
    SphereConfig::default().with_labels(["Rust", "Go", "Zig", "C"])
}

fn approx(a: f32, b: f32, tol: f32) -> bool {
    (a - b).abs() <= tol
}

#[test]
fn new_layout_is_not_ready_and_has_no_placements() {
    let layout = SphereLayout::new(four_labels(), 1);
    assert!(!layout.is_ready());
    assert!(layout.points().is_empty());
    assert!(layout.placements().is_empty());
    assert_eq!(layout.labels().len(), 4);
}

#[test]
fn initial_ratio_is_small_positive_drift() {
    for seed in 0..32 {
        let r = SphereLayout::new(four_labels(), seed).ratio();
        assert!((0.0..0.5).contains(&r.x), "x={}", r.x);
        assert!((0.0..0.5).contains(&r.y), "y={}", r.y);
    }
}

#[test]
fn resize_uses_half_the_smaller_side() {
    let mut layout = SphereLayout::new(four_labels(), 1);
    assert!(layout.resize(200.0, 300.0));
    assert!(layout.is_ready());
    assert_eq!(layout.radius(), 100.0);
    assert_eq!(layout.points().len(), 4);
    for p in layout.points() {
        assert!(approx(p.length(), 75.0, 1e-3));
    }
}

#[test]
fn resize_is_idempotent_for_unchanged_dimensions() {
    let mut layout = SphereLayout::new(four_labels(), 1);
    assert!(layout.resize(200.0, 200.0));
    layout.tick();
    let before = layout.points().to_vec();
    let ratio = layout.ratio();
    assert!(!layout.resize(200.0, 200.0));
    assert_eq!(layout.points(), before.as_slice());
    assert_eq!(layout.ratio(), ratio);
    assert_eq!(layout.radius(), 100.0);
}

#[test]
fn resize_with_new_radius_regenerates_points() {
    let mut layout = SphereLayout::new(four_labels(), 1);
    layout.resize(200.0, 200.0);
    assert!(layout.resize(400.0, 500.0));
    assert_eq!(layout.radius(), 200.0);
    assert_eq!(layout.points(), fibonacci_sphere(4, 200.0, 0.75).as_slice());
}

#[test]
fn zero_sized_container_leaves_state_untouched() {
    let mut layout = SphereLayout::new(four_labels(), 1);
    assert!(!layout.resize(0.0, 300.0));
    assert!(!layout.is_ready());
    assert!(layout.points().is_empty());

    layout.resize(100.0, 100.0);
    let before = layout.points().to_vec();
    assert!(!layout.resize(0.0, 0.0));
    assert_eq!(layout.points(), before.as_slice());
    assert_eq!(layout.radius(), 50.0);
}

#[test]
fn tick_before_ready_is_a_no_op() {
    let mut layout = SphereLayout::new(four_labels(), 1);
    layout.tick();
    assert!(layout.points().is_empty());
}

#[test]
fn zero_ratio_tick_keeps_points() {
    let mut layout = SphereLayout::new(four_labels(), 1);
    layout.resize(200.0, 200.0);
    layout.set_ratio(OrientationRatio::default());
    let before = layout.points().to_vec();
    layout.tick();
    for (a, b) in before.iter().zip(layout.points()) {
        assert!((*a - *b).length() < 1e-4);
    }
}

#[test]
fn incremental_tick_matches_raw_formula() {
    let mut layout = SphereLayout::new(four_labels(), 1);
    layout.resize(200.0, 200.0);
    layout.set_ratio(OrientationRatio { x: 0.5, y: 0.25 });
    let expected = rotate_points(layout.points(), rotation_matrix(-2.5, 5.0, 0.0));
    layout.tick();
    for (a, b) in expected.iter().zip(layout.points()) {
        assert!((*a - *b).length() < 1e-4);
    }
}

#[test]
fn static_pointer_keeps_orbiting() {
    let mut layout = SphereLayout::new(four_labels(), 1);
    layout.resize(200.0, 200.0);
    layout.set_ratio(OrientationRatio { x: 0.1, y: 0.0 });
    let first = layout.points().to_vec();
    layout.tick();
    let second = layout.points().to_vec();
    layout.tick();
    assert_ne!(first, second);
    assert_ne!(second.as_slice(), layout.points());
    for p in layout.points() {
        assert!(approx(p.length(), 75.0, 1e-2));
    }
}

#[test]
fn clamped_mode_bounds_angle_per_tick() {
    let config = four_labels().with_rotation_mode(RotationMode::Clamped { max_degrees: 5.0 });
    let mut layout = SphereLayout::new(config, 1);
    layout.resize(200.0, 200.0);
    layout.set_ratio(OrientationRatio { x: 10.0, y: -40.0 });
    let expected = rotate_points(layout.points(), rotation_matrix(5.0, 5.0, 0.0));
    layout.tick();
    for (a, b) in expected.iter().zip(layout.points()) {
        assert!((*a - *b).length() < 1e-4);
    }
}

#[test]
fn step_degrees_per_mode() {
    assert_eq!(RotationMode::Incremental.step_degrees(3.0, 10.0), 30.0);
    assert_eq!(RotationMode::Incremental.step_degrees(-3.0, 10.0), -30.0);
    let clamped = RotationMode::Clamped { max_degrees: -4.0 };
    assert_eq!(clamped.step_degrees(3.0, 10.0), 4.0);
    assert_eq!(clamped.step_degrees(-3.0, 10.0), -4.0);
    assert_eq!(clamped.step_degrees(0.2, 10.0), 2.0);
}

#[test]
fn pointer_maps_offset_from_center_over_radius() {
    let mut layout = SphereLayout::new(four_labels(), 1);
    let rect = ContainerRect {
        left: 10.0,
        top: 20.0,
        width: 200.0,
        height: 200.0,
    };
    layout.resize_to_rect(&rect);

    assert!(layout.pointer_moved(110.0, 120.0, &rect));
    assert_eq!(layout.ratio(), OrientationRatio { x: 0.0, y: 0.0 });

    layout.pointer_moved(210.0, 70.0, &rect);
    assert_eq!(layout.ratio(), OrientationRatio { x: 1.0, y: -0.5 });

    // Far outside the container: not clamped
    layout.pointer_moved(410.0, 120.0, &rect);
    assert_eq!(layout.ratio().x, 3.0);
}

#[test]
fn pointer_ignored_until_sphere_has_radius() {
    let mut layout = SphereLayout::new(four_labels(), 1);
    let before = layout.ratio();
    let rect = ContainerRect::default();
    assert!(!layout.pointer_moved(50.0, 50.0, &rect));
    assert_eq!(layout.ratio(), before);
}

#[test]
fn container_rect_radius_and_center() {
    let rect = ContainerRect {
        left: 0.0,
        top: 100.0,
        width: 300.0,
        height: 180.0,
    };
    assert_eq!(rect.sphere_radius(), 90.0);
    assert_eq!(rect.center(), (150.0, 190.0));
}

#[test]
fn placements_follow_points_in_label_order() {
    let mut layout = SphereLayout::new(four_labels(), 3);
    layout.resize(200.0, 200.0);
    layout.tick();
    let placements = layout.placements();
    assert_eq!(placements.len(), layout.labels().len());
    for (p, point) in placements.iter().zip(layout.points()) {
        assert_eq!(p.x, point.x);
        assert_eq!(p.y, point.y - 20.0);
        assert!(p.opacity >= 0.1 && p.opacity <= 1.0);
    }
}

#[test]
fn missing_container_then_retry_lays_out() {
    let mut layout = SphereLayout::new(four_labels(), 1);
    let missing = Err(LayoutError::ContainerMissing("sphere".into()));
    assert!(!layout.resize_from(missing));
    assert!(!layout.is_ready());
    assert!(layout.points().is_empty());
    assert_eq!(layout.radius(), 0.0);

    assert!(layout.resize_from(Ok((200.0, 200.0))));
    assert!(layout.is_ready());
    assert_eq!(layout.radius(), 100.0);
    assert_eq!(layout.points().len(), 4);
}

#[test]
fn missing_container_after_layout_keeps_state() {
    let mut layout = SphereLayout::new(four_labels(), 1);
    layout.resize_from(Ok((300.0, 200.0)));
    layout.tick();
    let points = layout.points().to_vec();
    let ratio = layout.ratio();

    assert!(!layout.resize_from(Err(LayoutError::NoDocument)));
    assert!(layout.is_ready());
    assert_eq!(layout.radius(), 100.0);
    assert_eq!(layout.points(), points.as_slice());
    assert_eq!(layout.ratio(), ratio);
}

#[test]
fn label_elements_wanted_until_built() {
    let mut layout = SphereLayout::new(four_labels(), 1);
    assert!(!layout.needs_label_elements(0));

    layout.resize(200.0, 200.0);
    assert!(layout.needs_label_elements(0));
    // An unchanged resize still reports the missing elements
    assert!(!layout.resize(200.0, 200.0));
    assert!(layout.needs_label_elements(0));
    assert!(!layout.needs_label_elements(4));
}

#[test]
fn set_labels_before_layout_replaces_and_shuffles() {
    let mut layout = SphereLayout::new(four_labels(), 1);
    layout.set_labels(vec!["x".into(), "y".into()]);
    assert_eq!(layout.config.labels, vec!["x".to_string(), "y".to_string()]);
    let mut labels = layout.labels().to_vec();
    labels.sort();
    assert_eq!(labels, vec!["x".to_string(), "y".to_string()]);
    assert!(layout.points().is_empty());
}

#[test]
fn set_labels_after_layout_regenerates_points() {
    let mut layout = SphereLayout::new(four_labels(), 1);
    layout.resize(200.0, 200.0);
    layout.set_labels((0..7).map(|i| format!("skill-{i}")).collect());
    assert_eq!(layout.labels().len(), 7);
    assert_eq!(layout.points(), fibonacci_sphere(7, 100.0, 0.75).as_slice());
    assert!(layout.needs_label_elements(4));
}

#[test]
fn long_running_rotation_stays_on_sphere() {
    for ratio in [
        OrientationRatio { x: 0.13, y: 0.41 },
        OrientationRatio { x: 1.0, y: -1.0 },
    ] {
        let mut layout = SphereLayout::new(four_labels(), 1);
        layout.resize(400.0, 400.0);
        layout.set_ratio(ratio);
        for _ in 0..100_000 {
            layout.tick();
        }
        for p in layout.points() {
            assert!(
                approx(p.length(), 150.0, 1e-3),
                "ratio {ratio:?} drifted to {}",
                p.length()
            );
        }
    }
}
