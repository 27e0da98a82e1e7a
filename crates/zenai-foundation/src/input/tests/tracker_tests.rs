use super::*;
use std::cell::RefCell;
use std::rc::Rc;

fn fine_tracker() -> PointerTracker {
    PointerTracker::new(PointerCapability::Fine)
}

#[test]
fn move_updates_sample_and_notifies_subscribers() {
    let mut tracker = fine_tracker();
    let seen = Rc::new(RefCell::new(Vec::new()));
    {
        let seen = Rc::clone(&seen);
        tracker.subscribe(move |sample| seen.borrow_mut().push(sample));
    }

    tracker.handle(&PointerEvent::moved(10.0, 20.0));
    tracker.handle(&PointerEvent::moved(12.0, 24.0));

    assert_eq!(tracker.sample(), Some(PointerSample::new(12.0, 24.0)));
    assert_eq!(
        seen.borrow().as_slice(),
        &[PointerSample::new(10.0, 20.0), PointerSample::new(12.0, 24.0)]
    );
}

#[test]
fn unsubscribe_stops_notifications() {
    let mut tracker = fine_tracker();
    let count = Rc::new(RefCell::new(0));
    let id = {
        let count = Rc::clone(&count);
        tracker.subscribe(move |_| *count.borrow_mut() += 1)
    };
    tracker.handle(&PointerEvent::moved(1.0, 1.0));
    assert!(tracker.unsubscribe(id));
    assert!(!tracker.unsubscribe(id));
    tracker.handle(&PointerEvent::moved(2.0, 2.0));

    assert_eq!(*count.borrow(), 1);
    assert_eq!(tracker.subscriber_count(), 0);
}

#[test]
fn last_enter_wins() {
    let mut tracker = fine_tracker();
    tracker.handle(&PointerEvent::enter(1, 0.0, 0.0));
    tracker.handle(&PointerEvent::enter(2, 0.0, 0.0));
    assert_eq!(tracker.hovered(), Some(2));

    // Leaving the outer target does not clear the inner one.
    tracker.handle(&PointerEvent::leave(1, 0.0, 0.0));
    assert_eq!(tracker.hovered(), Some(2));

    tracker.handle(&PointerEvent::leave(2, 0.0, 0.0));
    assert!(!tracker.is_hovering());
}

#[test]
fn coarse_pointer_disables_tracking() {
    let mut tracker = PointerTracker::new(PointerCapability::Coarse);
    tracker.handle(&PointerEvent::moved(5.0, 5.0));
    tracker.handle(&PointerEvent::enter(1, 5.0, 5.0));
    assert_eq!(tracker.sample(), None);
    assert_eq!(tracker.hovered(), None);
}

#[test]
fn losing_fine_pointer_drops_state() {
    let mut tracker = fine_tracker();
    tracker.handle(&PointerEvent::moved(5.0, 5.0));
    tracker.handle(&PointerEvent::enter(3, 5.0, 5.0));

    assert!(tracker.set_capability(PointerCapability::Coarse));
    assert!(!tracker.is_enabled());
    assert_eq!(tracker.sample(), None);
    assert_eq!(tracker.hovered(), None);

    assert!(!tracker.set_capability(PointerCapability::Coarse));
    assert!(tracker.set_capability(PointerCapability::Fine));
    tracker.handle(&PointerEvent::moved(6.0, 7.0));
    assert_eq!(tracker.sample(), Some(PointerSample::new(6.0, 7.0)));
}

#[test]
fn exit_and_forgotten_targets_clear_hover() {
    let mut tracker = fine_tracker();
    tracker.handle(&PointerEvent::enter(4, 0.0, 0.0));
    tracker.handle(&PointerEvent::exit());
    assert_eq!(tracker.hovered(), None);

    tracker.handle(&PointerEvent::enter(5, 0.0, 0.0));
    tracker.forget_target(6);
    assert_eq!(tracker.hovered(), Some(5));
    tracker.forget_target(5);
    assert_eq!(tracker.hovered(), None);
}

#[test]
fn capability_from_media_queries() {
    assert_eq!(
        PointerCapability::from_media_queries(true, false),
        PointerCapability::Fine
    );
    assert_eq!(
        PointerCapability::from_media_queries(false, true),
        PointerCapability::Coarse
    );
    assert_eq!(
        PointerCapability::from_media_queries(false, false),
        PointerCapability::None
    );
}
