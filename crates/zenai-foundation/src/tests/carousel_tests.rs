use super::*;
use crate::motion_constants::CAROUSEL_INTERVAL_MILLIS;
use zenai_testing::FrameDriver;

#[test]
fn empty_carousel_is_rejected() {
    assert_eq!(CarouselState::new(0), Err(CarouselError::Empty));
    assert_eq!(CarouselError::Empty.to_string(), "carousel has no items");
}

#[test]
fn next_and_prev_wrap() {
    let mut state = CarouselState::new(5).unwrap();
    for _ in 0..3 {
        state.prev();
    }
    assert_eq!(state.current_index(), 2);
    assert_eq!(state.direction(), Direction::Backward);

    for _ in 0..3 {
        state.next();
    }
    assert_eq!(state.current_index(), 0);
    assert_eq!(state.direction(), Direction::Forward);
}

#[test]
fn index_stays_in_bounds_for_any_sequence() {
    let mut state = CarouselState::new(5).unwrap();
    // Deterministic pseudo-random walk.
    let mut seed = 0x2545_f491_u32;
    for _ in 0..1_000 {
        seed ^= seed << 13;
        seed ^= seed >> 17;
        seed ^= seed << 5;
        if seed % 2 == 0 {
            state.next();
        } else {
            state.prev();
        }
        assert!(state.current_index() < 5);
    }
}

#[test]
fn go_to_uses_plain_sign_and_clamps() {
    let mut state = CarouselState::new(5).unwrap();
    state.go_to(3);
    assert_eq!((state.current_index(), state.direction()), (3, Direction::Forward));

    state.go_to(0);
    assert_eq!((state.current_index(), state.direction()), (0, Direction::Backward));

    state.go_to(0);
    assert_eq!(state.direction(), Direction::None);

    state.go_to(42);
    assert_eq!(state.current_index(), 4);
    assert_eq!(state.direction(), Direction::Forward);
}

#[test]
fn single_item_carousel_stays_put() {
    let mut state = CarouselState::new(1).unwrap();
    state.next();
    state.prev();
    assert_eq!(state.current_index(), 0);
}

#[test]
fn two_automatic_ticks_advance_by_two() {
    let mut driver = FrameDriver::new();
    let scope = MountScope::new(driver.handle());
    let carousel = Carousel::mount(5, &scope, CAROUSEL_INTERVAL_MILLIS).unwrap();

    driver.advance_by_millis(4_999);
    assert_eq!(carousel.current_index(), 0);

    driver.advance_by_millis(5_001);
    assert_eq!(carousel.current_index(), 2);
    assert_eq!(carousel.direction(), Direction::Forward);
}

#[test]
fn manual_input_does_not_reset_the_timer() {
    let mut driver = FrameDriver::new();
    let scope = MountScope::new(driver.handle());
    let carousel = Carousel::mount(5, &scope, CAROUSEL_INTERVAL_MILLIS).unwrap();

    driver.advance_by_millis(4_000);
    carousel.go_to(3);
    // The tick scheduled at 5000ms still fires 1000ms after the manual jump.
    driver.advance_by_millis(1_000);
    assert_eq!(carousel.current_index(), 4);
    assert_eq!(carousel.direction(), Direction::Forward);
}

#[test]
fn teardown_stops_timer_and_input() {
    let mut driver = FrameDriver::new();
    let scope = MountScope::new(driver.handle());
    let carousel = Carousel::mount(5, &scope, CAROUSEL_INTERVAL_MILLIS).unwrap();
    driver.advance_by_millis(5_000);
    assert_eq!(carousel.current_index(), 1);

    scope.dispose();
    assert!(!carousel.is_mounted());
    assert_eq!(driver.runtime().active_timer_count(), 0);

    driver.advance_by_millis(20_000);
    carousel.next();
    carousel.prev();
    carousel.go_to(3);
    assert_eq!(carousel.snapshot().current_index(), 1);
    assert_eq!(carousel.direction(), Direction::Forward);
}

#[test]
fn mount_rejects_empty_carousel() {
    let driver = FrameDriver::new();
    let scope = MountScope::new(driver.handle());
    assert!(matches!(
        Carousel::mount(0, &scope, CAROUSEL_INTERVAL_MILLIS),
        Err(CarouselError::Empty)
    ));
}
