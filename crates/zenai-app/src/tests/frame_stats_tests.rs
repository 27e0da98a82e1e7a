use super::*;

#[test]
fn first_timestamp_becomes_time_zero() {
    let mut origin = FrameOrigin::new();
    assert_eq!(origin.frame_nanos(4_200.0), 0);
    assert_eq!(origin.frame_nanos(4_216.5), 16_500_000);
    assert_eq!(origin.frame_nanos(9_200.0), 5_000 * NANOS_PER_MILLI);
}

#[test]
fn timestamp_before_origin_clamps_to_zero() {
    let mut origin = FrameOrigin::new();
    origin.frame_nanos(1_000.0);
    assert_eq!(origin.frame_nanos(990.0), 0);
}

#[test]
fn tracker_averages_over_recorded_frames() {
    let mut tracker = FrameTracker::new();
    for frame in 0..=10u64 {
        tracker.record_frame(frame * 20 * NANOS_PER_MILLI);
    }
    let stats = tracker.stats();
    assert_eq!(stats.frame_count, 11);
    assert!((stats.avg_ms - 20.0).abs() < 1e-3);
    assert!((stats.fps - 50.0).abs() < 1e-3);
}
