use super::*;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[test]
fn advance_lands_exactly_on_requested_time() {
    let mut driver = FrameDriver::new();
    driver.advance_by_millis(5_000);
    assert_eq!(driver.now_millis(), 5_000);
    assert_eq!(driver.now_nanos(), 5_000 * NANOS_PER_MILLI);
}

#[test]
fn timers_fire_at_their_due_time() {
    let mut driver = FrameDriver::new();
    let fired = Rc::new(RefCell::new(Vec::new()));
    let _timer = {
        let fired = Rc::clone(&fired);
        let handle = driver.handle();
        let clock = driver.handle();
        handle.interval(1_000, move || fired.borrow_mut().push(clock.now_millis()))
    };

    driver.advance_by_millis(3_000);
    assert_eq!(fired.borrow().as_slice(), &[1_000, 2_000, 3_000]);
}

#[test]
fn frame_callbacks_receive_frame_time() {
    let mut driver = FrameDriver::new();
    let seen = Rc::new(Cell::new(0u64));
    let _registration = {
        let seen = Rc::clone(&seen);
        driver
            .handle()
            .frame_clock()
            .with_frame_nanos(move |nanos| seen.set(nanos))
    };
    driver.advance_frame();
    assert_eq!(seen.get(), FRAME_NANOS_60HZ);
}

#[test]
fn run_until_idle_reports_frames() {
    let mut driver = FrameDriver::new();
    assert_eq!(driver.run_until_idle(10), Some(0));

    let _registration = driver.handle().frame_clock().with_frame_nanos(|_| {});
    assert_eq!(driver.run_until_idle(10), Some(1));
}
