//! Color representation and the studio palette

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color(pub f32, pub f32, pub f32, pub f32);

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self(r, g, b, 1.0)
    }

    pub const fn from_rgba_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    pub const fn from_rgb_u8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba_u8(r, g, b, 255)
    }

    /// Builds an opaque color from a `0xRRGGBB` literal.
    pub const fn from_hex(rgb: u32) -> Self {
        Self::from_rgb_u8((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }

    pub fn r(&self) -> f32 {
        self.0
    }

    pub fn g(&self) -> f32 {
        self.1
    }

    pub fn b(&self) -> f32 {
        self.2
    }

    pub fn a(&self) -> f32 {
        self.3
    }

    pub fn with_alpha(&self, alpha: f32) -> Self {
        Self(self.0, self.1, self.2, alpha)
    }

    /// CSS `rgba(...)` notation, channels rounded to bytes.
    pub fn to_css(&self) -> String {
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "rgba({}, {}, {}, {})",
            channel(self.0),
            channel(self.1),
            channel(self.2),
            (self.3.clamp(0.0, 1.0) * 1000.0).round() / 1000.0
        )
    }

    pub const WHITE: Color = Color(1.0, 1.0, 1.0, 1.0);
    pub const TRANSPARENT: Color = Color(0.0, 0.0, 0.0, 0.0);
}

/// Theme tokens shared by every section of the site.
pub struct Palette;

impl Palette {
    pub const PRIMARY: Color = Color::from_hex(0x7e22ce);
    pub const SECONDARY: Color = Color::from_hex(0x0a0a0a);
    pub const ACCENT: Color = Color::from_hex(0xffffff);
    /// "Learn more" badge on the service panels.
    pub const EMERALD: Color = Color::from_hex(0x10b981);

    pub const MARKETING: Color = Color::from_hex(0x7e22ce);
    pub const MARKETING_HOVER: Color = Color::from_hex(0x9333ea);
    pub const ADS: Color = Color::from_hex(0xec4899);
    pub const ADS_HOVER: Color = Color::from_hex(0xf472b6);
    pub const WEB: Color = Color::from_hex(0x06b6d4);
    pub const WEB_HOVER: Color = Color::from_hex(0x22d3ee);
}
