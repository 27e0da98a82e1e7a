use super::*;
use std::cell::Cell;
use std::rc::Rc;

const VIEWPORT: Size = Size::new(1280.0, 800.0);

fn section_at(top: f32) -> Rect {
    Rect::new(0.0, top, 1280.0, 600.0)
}

#[test]
fn negative_margin_delays_entry() {
    let mut detector = VisibilityDetector::default();
    // 50px inside the viewport is still outside the shrunk root.
    assert!(!detector.observe(section_at(750.0), VIEWPORT));
    assert!(detector.is_observing());

    assert!(detector.observe(section_at(690.0), VIEWPORT));
    assert!(detector.is_seen());
}

#[test]
fn zero_margin_uses_plain_viewport() {
    let mut detector = VisibilityDetector::new(0.0);
    assert!(detector.observe(section_at(790.0), VIEWPORT));
}

#[test]
fn enter_leave_enter_fires_once() {
    let fired = Rc::new(Cell::new(0));
    let mut detector = {
        let fired = Rc::clone(&fired);
        VisibilityDetector::default().with_on_enter(move || fired.set(fired.get() + 1))
    };

    assert!(detector.observe(section_at(100.0), VIEWPORT));
    assert!(!detector.observe(section_at(5_000.0), VIEWPORT));
    assert!(!detector.observe(section_at(100.0), VIEWPORT));

    assert!(detector.is_seen());
    assert_eq!(detector.state(), Visibility::Seen);
    assert_eq!(fired.get(), 1);
}

#[test]
fn element_above_viewport_is_not_visible() {
    let mut detector = VisibilityDetector::default();
    assert!(!detector.observe(section_at(-650.0), VIEWPORT));
    assert_eq!(detector.state(), Visibility::Unseen);
}
