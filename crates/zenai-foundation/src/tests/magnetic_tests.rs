use super::*;
use crate::motion_constants::OFFSET_EPSILON;
use zenai_testing::{assert_approx_eq, assert_converges};

const DT: f32 = 1.0 / 60.0;

fn button() -> Rect {
    Rect::new(100.0, 100.0, 200.0, 60.0)
}

fn run(controller: &mut MagneticController, frames: usize) -> Vec<MagneticOffset> {
    (0..frames).map(|_| controller.tick(DT)).collect()
}

#[test]
fn target_is_scaled_distance_from_center() {
    let mut controller = MagneticController::default();
    // Center is (200, 130).
    controller.pointer_move(PointerSample::new(250.0, 150.0), button());

    let target = controller.target_offset();
    assert_approx_eq(target.dx, 10.0, 1e-4, "dx");
    assert_approx_eq(target.dy, 4.0, 1e-4, "dy");
    assert!(controller.is_engaged());
}

#[test]
fn offset_is_smoothed_not_instant() {
    let mut controller = MagneticController::default();
    controller.pointer_move(PointerSample::new(290.0, 150.0), button());
    let first = controller.tick(DT);
    assert!(first.dx > 0.0 && first.dx < 18.0, "first frame {first:?}");

    run(&mut controller, 240);
    assert_approx_eq(controller.offset().dx, 18.0, 0.02, "settled dx");
    assert!(controller.is_settled());
}

#[test]
fn offset_settles_to_zero_after_leave() {
    let mut controller = MagneticController::default();
    controller.pointer_move(PointerSample::new(120.0, 110.0), button());
    run(&mut controller, 30);
    assert!(controller.offset().magnitude() > 1.0);

    controller.pointer_leave();
    run(&mut controller, 300);

    let offset = controller.offset();
    assert!(offset.is_near_zero(1e-3), "offset {offset:?}");
    assert!(controller.is_idle());
}

#[test]
fn release_is_continuous() {
    let mut controller = MagneticController::default();
    controller.pointer_move(PointerSample::new(290.0, 155.0), button());
    run(&mut controller, 20);
    let before = controller.offset();

    controller.pointer_leave();
    assert_eq!(controller.offset(), before);
    let after = controller.tick(DT);
    assert!((after.dx - before.dx).abs() < 6.0, "jumped from {before:?} to {after:?}");
}

#[test]
fn sample_outside_bounds_releases() {
    let mut controller = MagneticController::default();
    controller.pointer_move(PointerSample::new(290.0, 150.0), button());
    run(&mut controller, 30);
    assert!(!controller.offset().is_near_zero(OFFSET_EPSILON));

    controller.pointer_move(PointerSample::new(10.0, 10.0), button());
    assert!(!controller.is_engaged());
    assert_eq!(controller.target_offset(), MagneticOffset::ZERO);

    run(&mut controller, 240);
    assert!(
        controller.offset().is_near_zero(OFFSET_EPSILON),
        "offset left at {:?}",
        controller.offset()
    );
    assert!(controller.is_idle());
}

#[test]
fn critically_damped_release_does_not_overshoot() {
    let mut controller = MagneticController::new(0.5, SpringSpec::critically_damped(150.0));
    controller.pointer_move(PointerSample::new(300.0, 130.0), button());
    run(&mut controller, 240);
    controller.pointer_leave();

    let samples: Vec<f32> = run(&mut controller, 120).iter().map(|o| o.dx).collect();
    assert_converges(&samples, 0.0, "release");
    assert!(samples.iter().all(|dx| *dx >= -1e-3));
}
