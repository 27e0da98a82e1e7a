//! Pure math/data for the ZenAI site motion layer.
//!
//! Geometry primitives, theme colors and the per-element graphics layer that
//! the site shell hands to the browser host every frame.

mod color;
mod geometry;
mod layer;

pub use color::*;
pub use geometry::*;
pub use layer::*;

pub mod prelude {
    pub use crate::color::{Color, Palette};
    pub use crate::geometry::{EdgeInsets, Point, Rect, Size};
    pub use crate::layer::GraphicsLayer;
}
