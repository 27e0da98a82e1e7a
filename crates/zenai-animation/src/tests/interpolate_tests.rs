use super::*;

#[test]
fn hero_translation_maps_full_range() {
    let translate = Interpolation::linear([0.0, 1.0], [0.0, -200.0]);
    assert_eq!(translate.map(0.0), 0.0);
    assert_eq!(translate.map(0.5), -100.0);
    assert_eq!(translate.map(1.0), -200.0);
}

#[test]
fn hero_opacity_fades_over_first_half() {
    let opacity = Interpolation::linear([0.0, 0.5], [1.0, 0.0]);
    assert_eq!(opacity.map(0.0), 1.0);
    assert_eq!(opacity.map(0.25), 0.5);
    assert_eq!(opacity.map(0.5), 0.0);
    assert_eq!(opacity.map(0.9), 0.0);
}

#[test]
fn clamped_by_default_and_extrapolates_when_unclamped() {
    let clamped = Interpolation::linear([0.0, 1.0], [0.0, 10.0]);
    assert_eq!(clamped.map(-1.0), 0.0);
    assert_eq!(clamped.map(2.0), 10.0);

    let free = clamped.clone().unclamped();
    assert_eq!(free.map(-1.0), -10.0);
    assert_eq!(free.map(2.0), 20.0);
}

#[test]
fn reversed_two_stop_input_is_normalized() {
    let mapping = Interpolation::linear([1.0, 0.0], [100.0, 0.0]);
    assert_eq!(mapping.map(0.25), 25.0);
}

#[test]
fn piecewise_picks_the_right_segment() {
    let pulse = Interpolation::piecewise(&[0.0, 0.5, 1.0], &[0.3, 1.0, 0.3]).unwrap();
    assert!((pulse.map(0.25) - 0.65).abs() < 1e-6);
    assert_eq!(pulse.map(0.5), 1.0);
    assert!((pulse.map(0.75) - 0.65).abs() < 1e-6);
}

#[test]
fn piecewise_rejects_bad_stops() {
    assert_eq!(
        Interpolation::piecewise(&[0.0], &[1.0]),
        Err(InterpolationError::TooFewStops { len: 1 })
    );
    assert_eq!(
        Interpolation::piecewise(&[0.0, 1.0], &[1.0]),
        Err(InterpolationError::LengthMismatch {
            input: 2,
            output: 1
        })
    );
    assert_eq!(
        Interpolation::piecewise(&[0.0, 1.0, 0.5], &[0.0, 1.0, 2.0]),
        Err(InterpolationError::UnsortedInput { index: 2 })
    );
}

#[test]
fn zero_width_segment_jumps_to_its_end() {
    let step = Interpolation::piecewise(&[0.0, 0.5, 0.5, 1.0], &[0.0, 0.0, 1.0, 1.0]).unwrap();
    assert_eq!(step.map(0.25), 0.0);
    assert_eq!(step.map(0.75), 1.0);
}

#[test]
fn easing_shapes_each_segment() {
    let eased = Interpolation::linear([0.0, 1.0], [0.0, 1.0]).with_easing(Easing::EaseIn);
    assert!(eased.map(0.5) < 0.5);
}
