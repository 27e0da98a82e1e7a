//! Converts DOM coordinates and elements into foundation types.

use web_sys::{DomRect, Element, MouseEvent};
use zenai_foundation::{PointerEvent, PointerEventKind, TargetDescriptor};
use zenai_ui_graphics::{Point, Rect, Size};

/// Attribute the host stamps on interactive elements to find them again
/// after a rescan.
pub const TARGET_KEY_ATTRIBUTE: &str = "data-zenai-target";

/// Stateless: pointer and rect values from the DOM are CSS pixels already.
#[derive(Clone, Copy, Debug, Default)]
pub struct WebPlatform;

impl WebPlatform {
    pub fn new() -> Self {
        Self
    }

    pub fn pointer_position(&self, client_x: f64, client_y: f64) -> Point {
        // clientX/clientY are already CSS pixels relative to the viewport.
        Point {
            x: client_x as f32,
            y: client_y as f32,
        }
    }

    pub fn pointer_event(
        &self,
        kind: PointerEventKind,
        client_x: f64,
        client_y: f64,
    ) -> PointerEvent {
        PointerEvent::new(kind, self.pointer_position(client_x, client_y))
    }

    pub fn mouse_event(&self, kind: PointerEventKind, event: &MouseEvent) -> PointerEvent {
        self.pointer_event(kind, f64::from(event.client_x()), f64::from(event.client_y()))
    }

    /// Viewport-relative bounds, as returned by `getBoundingClientRect()`.
    pub fn rect(&self, rect: &DomRect) -> Rect {
        rect_from_client(rect.x(), rect.y(), rect.width(), rect.height())
    }

    pub fn element_rect(&self, element: &Element) -> Rect {
        self.rect(&element.get_bounding_client_rect())
    }

    pub fn viewport_size(&self, inner_width: f64, inner_height: f64) -> Size {
        Size::new(inner_width as f32, inner_height as f32)
    }
}

pub fn rect_from_client(x: f64, y: f64, width: f64, height: f64) -> Rect {
    Rect::new(x as f32, y as f32, width as f32, height as f32)
}

/// Describes an element for the interactive target registry. Elements
/// without a key attribute cannot be tracked and yield `None`.
pub fn target_descriptor(element: &Element) -> Option<TargetDescriptor> {
    let key = element.get_attribute(TARGET_KEY_ATTRIBUTE)?;
    let descriptor = TargetDescriptor::new(key, element.tag_name().to_ascii_lowercase());
    Some(match element.get_attribute("role") {
        Some(role) => descriptor.with_role(role),
        None => descriptor,
    })
}

#[cfg(test)]
#[path = "tests/web_platform_tests.rs"]
mod tests;
