use super::*;

#[test]
fn easing_linear_is_identity() {
    assert_eq!(Easing::Linear.transform(0.0), 0.0);
    assert_eq!(Easing::Linear.transform(0.5), 0.5);
    assert_eq!(Easing::Linear.transform(1.0), 1.0);
}

#[test]
fn easing_bounds_are_correct() {
    let easings = [
        Easing::Ease,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
        Easing::EaseOutQuint,
        Easing::CubicBezier(0.25, 0.1, 0.25, 1.0),
    ];

    for easing in easings {
        assert!(
            easing.transform(0.0).abs() < 0.01,
            "Start should be ~0 for {:?}",
            easing
        );
        assert!(
            (easing.transform(1.0) - 1.0).abs() < 0.01,
            "End should be ~1 for {:?}",
            easing
        );
    }
}

#[test]
fn ease_out_quint_front_loads_progress() {
    // The hero curve covers most of the distance in the first half.
    let halfway = Easing::EaseOutQuint.transform(0.5);
    assert!(halfway > 0.85, "got {halfway}");
}

#[test]
fn easing_is_monotonic() {
    for easing in [Easing::Ease, Easing::EaseInOut, Easing::EaseOutQuint] {
        let mut previous = 0.0;
        for step in 1..=20 {
            let value = easing.transform(step as f32 / 20.0);
            assert!(value + 1e-4 >= previous, "{easing:?} dipped at step {step}");
            previous = value;
        }
    }
}

#[test]
fn named_curve_matches_explicit_bezier() {
    for step in 0..=10 {
        let t = step as f32 / 10.0;
        let named = Easing::Ease.transform(t);
        let explicit = Easing::CubicBezier(0.25, 0.1, 0.25, 1.0).transform(t);
        assert!((named - explicit).abs() < 1e-6);
    }
}
