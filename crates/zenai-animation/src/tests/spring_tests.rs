use super::*;

fn run(spring: &mut Spring, seconds: f32, step: f32) -> Vec<f32> {
    let mut samples = Vec::new();
    let mut elapsed = 0.0;
    while elapsed < seconds {
        samples.push(spring.step(step));
        elapsed += step;
    }
    samples
}

#[test]
fn damping_ratio_of_presets() {
    assert!((SpringSpec::magnetic().damping_ratio() - 0.612).abs() < 0.01);
    assert!((SpringSpec::cursor().damping_ratio() - 0.626).abs() < 0.01);
    assert!((SpringSpec::critically_damped(200.0).damping_ratio() - 1.0).abs() < 1e-4);
}

#[test]
fn spring_settles_on_target() {
    let mut spring = Spring::new(SpringSpec::magnetic(), 0.0);
    spring.set_target(20.0);
    run(&mut spring, 3.0, 1.0 / 60.0);
    assert!(spring.is_at_rest());
    assert_eq!(spring.value(), 20.0);
    assert_eq!(spring.velocity(), 0.0);
}

#[test]
fn underdamped_spring_overshoots() {
    let mut spring = Spring::new(SpringSpec::new(300.0, 5.0), 0.0);
    spring.set_target(100.0);
    let samples = run(&mut spring, 1.0, 1.0 / 120.0);
    let peak = samples.iter().cloned().fold(f32::MIN, f32::max);
    assert!(peak > 100.0, "peak {peak}");
}

#[test]
fn critically_damped_spring_never_overshoots() {
    let mut spring = Spring::new(SpringSpec::critically_damped(150.0), 0.0);
    spring.set_target(100.0);
    for value in run(&mut spring, 3.0, 1.0 / 60.0) {
        assert!(value <= 100.0 + 1e-3, "overshoot to {value}");
    }
}

#[test]
fn overdamped_spring_approaches_monotonically() {
    let mut spring = Spring::new(SpringSpec::new(100.0, 60.0), 50.0);
    spring.set_target(0.0);
    let samples = run(&mut spring, 2.0, 1.0 / 60.0);
    for pair in samples.windows(2) {
        assert!(pair[1] <= pair[0] + 1e-4);
    }
    assert!(samples.iter().all(|v| *v >= -1e-4));
}

#[test]
fn step_size_does_not_change_trajectory() {
    let spec = SpringSpec::cursor();
    let mut fine = SpringState::at_rest(0.0);
    for _ in 0..100 {
        fine.advance(40.0, &spec, 0.001);
    }
    let mut coarse = SpringState::at_rest(0.0);
    coarse.advance(40.0, &spec, 0.1);

    assert!((fine.position - coarse.position).abs() < 1e-2);
    assert!((fine.velocity - coarse.velocity).abs() < 1e-1);
}

#[test]
fn closed_form_matches_small_step_integration() {
    let spec = SpringSpec::magnetic();
    let mut analytic = SpringState::at_rest(30.0);
    analytic.advance(0.0, &spec, 0.25);

    // Semi-implicit Euler with a tiny step as a reference.
    let (mut x, mut v) = (30.0f64, 0.0f64);
    let dt = 1e-5;
    let (k, c) = (spec.stiffness as f64, spec.damping as f64);
    for _ in 0..25_000 {
        v += (-k * x - c * v) * dt;
        x += v * dt;
    }
    assert!((analytic.position as f64 - x).abs() < 0.05, "{} vs {x}", analytic.position);
}

#[test]
fn retarget_keeps_velocity() {
    let mut spring = Spring::new(SpringSpec::magnetic(), 0.0);
    spring.set_target(50.0);
    spring.step(0.05);
    let velocity = spring.velocity();
    assert!(velocity > 0.0);

    spring.set_target(0.0);
    assert_eq!(spring.velocity(), velocity);
    assert!(!spring.is_at_rest());
}

#[test]
fn snap_to_stops_motion() {
    let mut spring = Spring::new(SpringSpec::slide(), 1000.0);
    spring.set_target(0.0);
    spring.step(0.016);
    spring.snap_to(0.0);
    assert!(spring.is_at_rest());
    assert_eq!(spring.step(0.016), 0.0);
}

#[test]
fn zero_time_step_leaves_state_untouched() {
    let mut state = SpringState {
        position: 5.0,
        velocity: 2.0,
    };
    let settled = state.advance(0.0, &SpringSpec::default(), 0.0);
    assert!(!settled);
    assert_eq!(state.position, 5.0);
    assert_eq!(state.velocity, 2.0);
}
