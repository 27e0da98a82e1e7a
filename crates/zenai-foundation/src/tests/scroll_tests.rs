use super::*;

const VIEWPORT: Size = Size::new(1280.0, 800.0);

/// Hero of `height` after scrolling the page by `scroll`.
fn hero_at(scroll: f32, height: f32) -> Rect {
    Rect::new(0.0, -scroll, VIEWPORT.width, height)
}

#[test]
fn hero_progress_spans_its_own_height() {
    let range = ScrollRange::hero();
    assert_eq!(range.progress(hero_at(0.0, 800.0), VIEWPORT), 0.0);
    assert_eq!(range.progress(hero_at(400.0, 800.0), VIEWPORT), 0.5);
    assert_eq!(range.progress(hero_at(800.0, 800.0), VIEWPORT), 1.0);
}

#[test]
fn progress_is_not_clamped() {
    let range = ScrollRange::hero();
    assert_eq!(range.progress(hero_at(1600.0, 800.0), VIEWPORT), 2.0);
    assert_eq!(range.progress(hero_at(-400.0, 800.0), VIEWPORT), -0.5);
}

#[test]
fn hero_outputs_follow_progress() {
    let mut hero = HeroScroll::new();
    assert_eq!(hero.translate_y(), 0.0);
    assert_eq!(hero.opacity(), 1.0);

    hero.update(hero_at(200.0, 800.0), VIEWPORT);
    assert_eq!(hero.progress(), 0.25);
    assert_eq!(hero.translate_y(), -50.0);
    assert_eq!(hero.opacity(), 0.5);

    hero.update(hero_at(400.0, 800.0), VIEWPORT);
    assert_eq!(hero.opacity(), 0.0);

    hero.update(hero_at(800.0, 800.0), VIEWPORT);
    assert_eq!(hero.translate_y(), -200.0);
}

#[test]
fn outputs_clamp_past_the_range() {
    let mut hero = HeroScroll::new();
    hero.update(hero_at(2400.0, 800.0), VIEWPORT);
    assert_eq!(hero.translate_y(), -200.0);
    assert_eq!(hero.opacity(), 0.0);
}

#[test]
fn unclamped_output_keeps_going() {
    let mut mapper = ScrollProgressMapper::new(ScrollRange::hero());
    let drift = mapper.add_output(Interpolation::linear([0.0, 1.0], [0.0, 100.0]).unclamped());
    mapper.update(hero_at(1200.0, 800.0), VIEWPORT);
    assert_eq!(mapper.value(drift), 150.0);
}

#[test]
fn entry_range_tracks_element_crossing_viewport() {
    // `start end` to `end start`: from entering at the bottom to leaving at the top.
    let range = ScrollRange::new(
        ScrollAnchor::new(Edge::Start, Edge::End),
        ScrollAnchor::new(Edge::End, Edge::Start),
    );
    let below = Rect::new(0.0, 800.0, 100.0, 200.0);
    let centered = Rect::new(0.0, 300.0, 100.0, 200.0);
    assert_eq!(range.progress(below, VIEWPORT), 0.0);
    assert_eq!(range.progress(centered, VIEWPORT), 0.5);
}

#[test]
fn degenerate_range_steps() {
    let range = ScrollRange::new(
        ScrollAnchor::new(Edge::Start, Edge::Start),
        ScrollAnchor::new(Edge::Start, Edge::Start),
    );
    assert_eq!(range.progress(Rect::new(0.0, 10.0, 10.0, 10.0), VIEWPORT), 0.0);
    assert_eq!(range.progress(Rect::new(0.0, -10.0, 10.0, 10.0), VIEWPORT), 1.0);
}
