use zenai_ui_graphics::{Color, Palette};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,
}

/// Document title, description and theme tokens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SiteMetadata {
    pub title: &'static str,
    pub description: &'static str,
    pub studio: &'static str,
    pub tagline: &'static str,
    pub theme: Theme,
}

pub const SITE: SiteMetadata = SiteMetadata {
    title: "ZenAI - Creative x Tech Studio",
    description: "Where Creativity meets Intelligence",
    studio: "ZenAI",
    tagline: "Creative x Tech Studio",
    theme: Theme {
        primary: Palette::PRIMARY,
        secondary: Palette::SECONDARY,
        accent: Palette::ACCENT,
    },
};
