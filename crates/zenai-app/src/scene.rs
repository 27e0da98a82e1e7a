//! Per-frame presentation output and the layout reads that feed it.

use rustc_hash::FxHashMap;
use zenai_foundation::TargetId;
use zenai_ui_graphics::{GraphicsLayer, Rect, Size};

/// Landing-page sections that play an entrance when scrolled into view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionId {
    Work,
    Services,
    Testimonials,
    Footer,
}

impl SectionId {
    pub const ALL: [SectionId; 4] = [
        SectionId::Work,
        SectionId::Services,
        SectionId::Testimonials,
        SectionId::Footer,
    ];

    pub fn dom_id(self) -> &'static str {
        match self {
            SectionId::Work => "work",
            SectionId::Services => "services",
            SectionId::Testimonials => "testimonials",
            SectionId::Footer => "contact",
        }
    }
}

/// Every element the shell animates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ElementId {
    CursorOuter,
    CursorInner,
    Loader,
    Content,
    HeroBackground,
    HeroContent,
    HeroTitle,
    /// One letter of the hero wordmark.
    HeroLetter(usize),
    HeroSubtitle,
    HeroActions,
    HeroScrollHint,
    SectionHeader(SectionId),
    WorkReels,
    WorkDesign,
    WorkWebsites,
    ServicePanel(usize),
    TestimonialSlide,
    /// The card leaving while the next one enters.
    TestimonialSlideExit,
    FooterColumn(usize),
    DetailBackLink,
    DetailHeader,
    DetailBody,
    DetailItem(usize),
    DetailStep(usize),
    DetailFooter,
    /// Magnetic buttons are addressed through the interactive target
    /// registry rather than by element id.
    Magnetic(TargetId),
}

impl ElementId {
    /// The `id` attribute the browser host looks the element up by.
    pub fn dom_id(&self) -> Option<String> {
        let id = match self {
            ElementId::CursorOuter => "zenai-cursor-outer".to_string(),
            ElementId::CursorInner => "zenai-cursor-inner".to_string(),
            ElementId::Loader => "zenai-loader".to_string(),
            ElementId::Content => "zenai-content".to_string(),
            ElementId::HeroBackground => "zenai-hero-background".to_string(),
            ElementId::HeroContent => "zenai-hero-content".to_string(),
            ElementId::HeroTitle => "zenai-hero-title".to_string(),
            ElementId::HeroLetter(index) => format!("zenai-hero-letter-{index}"),
            ElementId::HeroSubtitle => "zenai-hero-subtitle".to_string(),
            ElementId::HeroActions => "zenai-hero-actions".to_string(),
            ElementId::HeroScrollHint => "zenai-hero-scroll-hint".to_string(),
            ElementId::SectionHeader(section) => format!("zenai-{}-header", section.dom_id()),
            ElementId::WorkReels => "zenai-work-reels".to_string(),
            ElementId::WorkDesign => "zenai-work-design".to_string(),
            ElementId::WorkWebsites => "zenai-work-websites".to_string(),
            ElementId::ServicePanel(index) => format!("zenai-service-panel-{index}"),
            ElementId::TestimonialSlide => "zenai-testimonial-slide".to_string(),
            ElementId::TestimonialSlideExit => "zenai-testimonial-slide-exit".to_string(),
            ElementId::FooterColumn(index) => format!("zenai-footer-column-{index}"),
            ElementId::DetailBackLink => "zenai-detail-back".to_string(),
            ElementId::DetailHeader => "zenai-detail-header".to_string(),
            ElementId::DetailBody => "zenai-detail-body".to_string(),
            ElementId::DetailItem(index) => format!("zenai-detail-item-{index}"),
            ElementId::DetailStep(index) => format!("zenai-detail-step-{index}"),
            ElementId::DetailFooter => "zenai-detail-footer".to_string(),
            ElementId::Magnetic(_) => return None,
        };
        Some(id)
    }
}

/// Bounding rectangles read from the page, in viewport coordinates.
///
/// Hosts refresh it on scroll and resize; everything derived from it is a
/// pure function of the latest snapshot.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LayoutSnapshot {
    pub viewport: Size,
    pub hero: Option<Rect>,
    pub sections: FxHashMap<SectionId, Rect>,
    pub magnetic: FxHashMap<TargetId, Rect>,
}

impl LayoutSnapshot {
    pub fn new(viewport: Size) -> Self {
        Self {
            viewport,
            ..Self::default()
        }
    }

    pub fn with_hero(mut self, bounds: Rect) -> Self {
        self.hero = Some(bounds);
        self
    }

    pub fn with_section(mut self, section: SectionId, bounds: Rect) -> Self {
        self.sections.insert(section, bounds);
        self
    }

    pub fn with_magnetic(mut self, target: TargetId, bounds: Rect) -> Self {
        self.magnetic.insert(target, bounds);
        self
    }

    pub fn section(&self, section: SectionId) -> Option<Rect> {
        self.sections.get(&section).copied()
    }
}

/// Element styles for one frame, in the order they were produced.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    layers: Vec<(ElementId, GraphicsLayer)>,
    cursor_visible: bool,
}

impl Scene {
    pub fn new(cursor_visible: bool) -> Self {
        Self {
            layers: Vec::new(),
            cursor_visible,
        }
    }

    pub fn push(&mut self, element: ElementId, layer: GraphicsLayer) {
        self.layers.push((element, layer));
    }

    pub fn layer(&self, element: ElementId) -> Option<GraphicsLayer> {
        self.layers
            .iter()
            .find(|(id, _)| *id == element)
            .map(|(_, layer)| *layer)
    }

    pub fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    pub fn iter(&self) -> impl Iterator<Item = &(ElementId, GraphicsLayer)> {
        self.layers.iter()
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}
