use super::*;

#[test]
fn client_coordinates_are_logical_pixels() {
    let platform = WebPlatform::new();
    let event = platform.pointer_event(PointerEventKind::Move, 120.5, 48.0);
    assert_eq!(event.position, Point::new(120.5, 48.0));
    assert_eq!(event.kind, PointerEventKind::Move);
}

#[test]
fn client_rects_convert_directly() {
    let rect = rect_from_client(10.0, -250.0, 1280.0, 900.0);
    assert_eq!(rect, Rect::new(10.0, -250.0, 1280.0, 900.0));
}

#[test]
fn viewport_size_from_inner_dimensions() {
    let platform = WebPlatform::new();
    assert_eq!(platform.viewport_size(1920.0, 1080.0), Size::new(1920.0, 1080.0));
}

#[test]
fn pointer_position_keeps_fractional_css_pixels() {
    let platform = WebPlatform::new();
    assert_eq!(platform.pointer_position(0.25, 799.75), Point::new(0.25, 799.75));
}
