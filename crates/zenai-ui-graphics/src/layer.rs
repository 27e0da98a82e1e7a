use crate::geometry::Point;

/// Transform and opacity applied to one element for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GraphicsLayer {
    pub alpha: f32,
    pub scale: f32,
    pub translation_x: f32,
    pub translation_y: f32,
}

impl Default for GraphicsLayer {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl GraphicsLayer {
    pub const IDENTITY: GraphicsLayer = GraphicsLayer {
        alpha: 1.0,
        scale: 1.0,
        translation_x: 0.0,
        translation_y: 0.0,
    };

    pub fn translated(mut self, offset: Point) -> Self {
        self.translation_x += offset.x;
        self.translation_y += offset.y;
        self
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn translation(&self) -> Point {
        Point::new(self.translation_x, self.translation_y)
    }

    /// CSS `transform` value for this layer.
    pub fn css_transform(&self) -> String {
        format!(
            "translate3d({:.2}px, {:.2}px, 0) scale({:.4})",
            self.translation_x, self.translation_y, self.scale
        )
    }
}
