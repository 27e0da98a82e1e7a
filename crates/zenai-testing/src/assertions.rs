//! Assertion helpers for animated values.

use zenai_ui_graphics::{Point, Rect};

/// Assert that a value is within `tolerance` of the expected one.
#[track_caller]
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

#[track_caller]
pub fn assert_point_approx_eq(actual: Point, expected: Point, tolerance: f32, msg: &str) {
    assert_approx_eq(actual.x, expected.x, tolerance, &format!("{} - x", msg));
    assert_approx_eq(actual.y, expected.y, tolerance, &format!("{} - y", msg));
}

/// Assert that a rectangle is approximately equal to another.
#[track_caller]
pub fn assert_rect_approx_eq(actual: Rect, expected: Rect, tolerance: f32, msg: &str) {
    assert_approx_eq(actual.x, expected.x, tolerance, &format!("{} - x", msg));
    assert_approx_eq(actual.y, expected.y, tolerance, &format!("{} - y", msg));
    assert_approx_eq(
        actual.width,
        expected.width,
        tolerance,
        &format!("{} - width", msg),
    );
    assert_approx_eq(
        actual.height,
        expected.height,
        tolerance,
        &format!("{} - height", msg),
    );
}

/// Assert that consecutive samples never move away from `target`.
#[track_caller]
pub fn assert_converges(samples: &[f32], target: f32, msg: &str) {
    for (index, pair) in samples.windows(2).enumerate() {
        let before = (pair[0] - target).abs();
        let after = (pair[1] - target).abs();
        assert!(
            after <= before + 1e-4,
            "{}: sample {} moved away from {} ({} -> {})",
            msg,
            index + 1,
            target,
            pair[0],
            pair[1]
        );
    }
}
