use crate::*;

#[test]
fn center_is_midpoint() {
    let rect = Rect::new(10.0, 20.0, 100.0, 40.0);
    assert_eq!(rect.center(), Point::new(60.0, 40.0));
}

#[test]
fn negative_outset_shrinks_each_edge() {
    let viewport = Rect::new(0.0, 0.0, 1000.0, 800.0);
    let shrunk = viewport.outset(EdgeInsets::uniform(-100.0));
    assert_eq!(shrunk, Rect::new(100.0, 100.0, 800.0, 600.0));
}

#[test]
fn outset_never_produces_negative_extent() {
    let small = Rect::new(0.0, 0.0, 50.0, 50.0);
    let shrunk = small.outset(EdgeInsets::uniform(-100.0));
    assert_eq!(shrunk.width, 0.0);
    assert_eq!(shrunk.height, 0.0);
}

#[test]
fn intersects_detects_overlap_and_touching_edges() {
    let a = Rect::new(0.0, 0.0, 100.0, 100.0);
    assert!(a.intersects(&Rect::new(50.0, 50.0, 100.0, 100.0)));
    assert!(a.intersects(&Rect::new(100.0, 0.0, 10.0, 10.0)));
    assert!(!a.intersects(&Rect::new(0.0, 101.0, 10.0, 10.0)));
}

#[test]
fn hex_colors_decode_channels() {
    let primary = Palette::PRIMARY;
    assert!((primary.r() - 126.0 / 255.0).abs() < 1e-6);
    assert!((primary.g() - 34.0 / 255.0).abs() < 1e-6);
    assert!((primary.b() - 206.0 / 255.0).abs() < 1e-6);
    assert_eq!(primary.to_css(), "rgba(126, 34, 206, 1)");
}

#[test]
fn layer_transform_renders_translation_and_scale() {
    let layer = GraphicsLayer::IDENTITY
        .translated(Point::new(4.0, -200.0))
        .with_scale(1.5);
    assert_eq!(
        layer.css_transform(),
        "translate3d(4.00px, -200.00px, 0) scale(1.5000)"
    );
}
