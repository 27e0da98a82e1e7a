use super::*;
use zenai_core::Runtime;

const FRAME_NANOS: u64 = 16_666_667;

fn pump(
    runtime: &Runtime,
    frames: usize,
    frame_time: &mut u64,
    animatable: &Animatable,
) -> Vec<f32> {
    let mut samples = Vec::new();
    for _ in 0..frames {
        if !runtime.has_frame_callbacks() {
            break;
        }
        *frame_time += FRAME_NANOS;
        runtime.drain_frame_callbacks(*frame_time);
        samples.push(animatable.value());
    }
    samples
}

#[test]
fn tween_interpolates_over_time() {
    let runtime = Runtime::new();
    let alpha = Animatable::new(0.0, runtime.handle());
    alpha.animate_to(1.0, AnimationType::Tween(AnimationSpec::linear(200)));
    assert!(alpha.is_running());

    let mut frame_time = 0;
    let samples = pump(&runtime, 64, &mut frame_time, &alpha);

    assert!(samples.iter().any(|v| *v > 0.0 && *v < 1.0));
    assert_eq!(*samples.last().unwrap(), 1.0);
    assert!(!alpha.is_running());
    assert!(!runtime.has_frame_callbacks());
}

#[test]
fn tween_waits_for_its_delay() {
    let runtime = Runtime::new();
    let offset = Animatable::new(50.0, runtime.handle());
    offset.animate_to(
        0.0,
        AnimationType::Tween(AnimationSpec::linear(100).with_delay(300)),
    );

    let mut frame_time = 0;
    let early = pump(&runtime, 10, &mut frame_time, &offset);
    assert!(early.iter().all(|v| *v == 50.0));

    let rest = pump(&runtime, 64, &mut frame_time, &offset);
    assert_eq!(*rest.last().unwrap(), 0.0);
}

#[test]
fn spring_animation_settles() {
    let runtime = Runtime::new();
    let x = Animatable::new(1000.0, runtime.handle());
    x.animate_to(0.0, AnimationType::Spring(SpringSpec::slide()));

    let mut frame_time = 0;
    let samples = pump(&runtime, 600, &mut frame_time, &x);

    assert!(samples.len() > 10);
    assert_eq!(x.value(), 0.0);
    assert!(!x.is_running());
}

#[test]
fn snap_cancels_running_animation() {
    let runtime = Runtime::new();
    let x = Animatable::new(0.0, runtime.handle());
    x.animate_to(10.0, AnimationType::default());
    x.snap_to(3.0);

    assert!(!x.is_running());
    assert!(!runtime.has_frame_callbacks());
    assert_eq!(x.value(), 3.0);
    assert_eq!(x.target(), 3.0);
}

#[test]
fn dropping_animatable_cancels_frames() {
    let runtime = Runtime::new();
    let x = Animatable::new(0.0, runtime.handle());
    x.animate_to(10.0, AnimationType::default());
    assert!(runtime.has_frame_callbacks());
    drop(x);
    assert!(!runtime.has_frame_callbacks());
}

#[test]
fn animating_without_a_runtime_jumps_to_target() {
    let runtime = Runtime::new();
    let x = Animatable::new(0.0, runtime.handle());
    drop(runtime);

    x.animate_to(10.0, AnimationType::default());
    assert!(!x.is_running());
    assert_eq!(x.value(), 10.0);
    assert_eq!(x.target(), 10.0);
}
