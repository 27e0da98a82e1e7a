//! The site shell: every motion controller of the page, advanced once per
//! frame into a [`Scene`].

use crate::cursor::CustomCursor;
use crate::entrance::{eased, Entrance};
use crate::error::HostError;
use crate::frame_stats::{FrameStats, FrameTracker};
use crate::launcher::AppSettings;
use crate::media::ReelDeck;
use crate::scene::{ElementId, LayoutSnapshot, Scene, SectionId};
use crate::transition::PageTransition;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::Rc;
use zenai_animation::{Animatable, AnimationSpec, AnimationType, Easing, SpringSpec};
use zenai_content::{copyright, Page, Route, StudioCatalog};
use zenai_core::{MountScope, RuntimeHandle};
use zenai_foundation::{
    Carousel, Direction, HeroScroll, InteractiveTargets, MagneticController, MagneticOffset,
    PointerCapability, PointerDispatcher, PointerEvent, PointerEventKind, PointerTracker,
    SubscriptionId, TargetDescriptor, TargetId, TargetSync, VisibilityDetector,
};
use zenai_ui_graphics::{GraphicsLayer, Point};

const HERO_ENTRANCE_MILLIS: u64 = 1_000;
const HERO_LETTER_MILLIS: u64 = 500;
const HERO_WORDMARK: &str = "ZENAI";
const HERO_SCROLL_HINT_DELAY_MILLIS: u64 = 1_500;
const SECTION_ENTRANCE_MILLIS: u64 = 800;
const FOOTER_ENTRANCE_MILLIS: u64 = 500;
const FOOTER_COLUMNS: usize = 5;
/// The footer reveals as soon as any of it is on screen.
const FOOTER_VISIBILITY_MARGIN: f32 = 0.0;
const SLIDE_DISTANCE: f32 = 1_000.0;
const SLIDE_FADE_MILLIS: u64 = 200;
const MAGNETIC_HOVER_SCALE: f32 = 1.05;

type Parts = SmallVec<[(ElementId, Entrance); 4]>;

/// A landing section whose entrances start the first time it is seen.
struct SectionReveal {
    section: SectionId,
    detector: VisibilityDetector,
    parts: Parts,
}

impl SectionReveal {
    fn new(section: SectionId, margin: f32, parts: Parts) -> Self {
        let pending: SmallVec<[Entrance; 4]> =
            parts.iter().map(|(_, entrance)| entrance.clone()).collect();
        let detector = VisibilityDetector::new(margin).with_on_enter(move || {
            log::debug!("revealing {:?}", section);
            for entrance in &pending {
                entrance.play();
            }
        });
        Self {
            section,
            detector,
            parts,
        }
    }
}

/// The testimonial card enters from the side the carousel moved toward while
/// the previous card leaves toward the other side.
struct SlideTransition {
    shown: usize,
    spring: SpringSpec,
    x: Animatable,
    alpha: Animatable,
    exit_x: Animatable,
    exit_alpha: Animatable,
}

impl SlideTransition {
    fn new(runtime: RuntimeHandle, shown: usize, spring: SpringSpec) -> Self {
        Self {
            shown,
            spring,
            x: Animatable::new(0.0, runtime.clone()),
            alpha: Animatable::new(1.0, runtime.clone()),
            exit_x: Animatable::new(0.0, runtime.clone()),
            exit_alpha: Animatable::new(0.0, runtime),
        }
    }

    fn show(&mut self, index: usize, direction: Direction) {
        if index == self.shown {
            return;
        }
        self.shown = index;
        let offset = direction.signum() as f32 * SLIDE_DISTANCE;
        let fade = AnimationType::Tween(eased(SLIDE_FADE_MILLIS, 0));

        self.x.snap_to(offset);
        self.x.animate_to(0.0, AnimationType::Spring(self.spring));
        self.alpha.snap_to(0.0);
        self.alpha.animate_to(1.0, fade);

        self.exit_x.snap_to(0.0);
        self.exit_x.animate_to(-offset, AnimationType::Spring(self.spring));
        self.exit_alpha.snap_to(1.0);
        self.exit_alpha.animate_to(0.0, fade);
    }

    fn layer(&self) -> GraphicsLayer {
        GraphicsLayer::IDENTITY
            .translated(Point::new(self.x.value(), 0.0))
            .with_alpha(self.alpha.value())
    }

    /// Fully transparent while no card is leaving.
    fn exit_layer(&self) -> GraphicsLayer {
        GraphicsLayer::IDENTITY
            .translated(Point::new(self.exit_x.value(), 0.0))
            .with_alpha(self.exit_alpha.value())
    }
}

/// Motion state owned by the current page. Replaced wholesale on
/// navigation, which disposes its scope and with it the carousel timer.
struct PageMotion {
    scope: MountScope,
    landing: bool,
    entrances: Vec<(ElementId, Entrance)>,
    reveals: Vec<SectionReveal>,
    testimonials: Option<Carousel>,
    slide: Option<SlideTransition>,
}

impl PageMotion {
    fn build(
        catalog: &StudioCatalog,
        route: &Route,
        settings: &AppSettings,
        runtime: &RuntimeHandle,
    ) -> Result<Self, HostError> {
        let scope = MountScope::new(runtime.clone());
        let mut motion = Self {
            scope,
            landing: false,
            entrances: Vec::new(),
            reveals: Vec::new(),
            testimonials: None,
            slide: None,
        };
        match catalog.page(route) {
            Page::Landing => motion.build_landing(catalog, settings, runtime)?,
            Page::Service { service, .. } => {
                motion.build_detail(runtime, service.features.len(), service.process.len(), 20.0)
            }
            Page::Project { project, .. } => {
                motion.build_detail(runtime, project.images.len(), 0, 50.0)
            }
        }
        for (_, entrance) in &motion.entrances {
            entrance.play();
        }
        Ok(motion)
    }

    fn build_landing(
        &mut self,
        catalog: &StudioCatalog,
        settings: &AppSettings,
        runtime: &RuntimeHandle,
    ) -> Result<(), HostError> {
        self.landing = true;
        let hero = |delay| {
            AnimationSpec::tween(HERO_ENTRANCE_MILLIS, Easing::EaseOutQuint).with_delay(delay)
        };
        self.entrances = vec![
            (ElementId::HeroTitle, Entrance::rise(runtime.clone(), 50.0, hero(0))),
            (ElementId::HeroSubtitle, Entrance::rise(runtime.clone(), 30.0, hero(300))),
            (ElementId::HeroActions, Entrance::rise(runtime.clone(), 30.0, hero(500))),
            (
                ElementId::HeroScrollHint,
                Entrance::fade(runtime.clone(), eased(300, HERO_SCROLL_HINT_DELAY_MILLIS)),
            ),
        ];
        for index in 0..HERO_WORDMARK.chars().count() {
            let spec = AnimationSpec::tween(HERO_LETTER_MILLIS, Easing::EaseOutQuint)
                .with_delay(index as u64 * 100);
            self.entrances.push((
                ElementId::HeroLetter(index),
                Entrance::rise(runtime.clone(), 50.0, spec),
            ));
        }

        let section = |distance, delay| {
            Entrance::rise(runtime.clone(), distance, eased(SECTION_ENTRANCE_MILLIS, delay))
        };
        let margin = settings.visibility_margin;

        let work: Parts = SmallVec::from_iter([
            (ElementId::SectionHeader(SectionId::Work), section(50.0, 0)),
            (ElementId::WorkReels, section(50.0, 200)),
            (ElementId::WorkDesign, section(50.0, 400)),
            (ElementId::WorkWebsites, section(50.0, 600)),
        ]);
        self.reveals.push(SectionReveal::new(SectionId::Work, margin, work));

        let mut services: Parts = SmallVec::new();
        services.push((ElementId::SectionHeader(SectionId::Services), section(-50.0, 0)));
        for index in 0..catalog.services().len() {
            let from = if index % 2 == 0 { -100.0 } else { 100.0 };
            let spec = eased(SECTION_ENTRANCE_MILLIS, index as u64 * 200);
            services.push((
                ElementId::ServicePanel(index),
                Entrance::slide(runtime.clone(), from, spec),
            ));
        }
        self.reveals
            .push(SectionReveal::new(SectionId::Services, margin, services));

        let testimonials: Parts = SmallVec::from_iter([(
            ElementId::SectionHeader(SectionId::Testimonials),
            section(50.0, 0),
        )]);
        self.reveals
            .push(SectionReveal::new(SectionId::Testimonials, margin, testimonials));

        let footer: Parts = (0..FOOTER_COLUMNS)
            .map(|index| {
                let spec = eased(FOOTER_ENTRANCE_MILLIS, index as u64 * 100);
                let entrance = if index + 1 == FOOTER_COLUMNS {
                    Entrance::fade(runtime.clone(), spec)
                } else {
                    Entrance::rise(runtime.clone(), 20.0, spec)
                };
                (ElementId::FooterColumn(index), entrance)
            })
            .collect();
        self.reveals.push(SectionReveal::new(
            SectionId::Footer,
            FOOTER_VISIBILITY_MARGIN,
            footer,
        ));

        let carousel = Carousel::mount(
            catalog.testimonials().len(),
            &self.scope,
            settings.carousel_interval_millis,
        )?;
        self.slide = Some(SlideTransition::new(
            runtime.clone(),
            carousel.current_index(),
            settings.slide_spring,
        ));
        self.testimonials = Some(carousel);
        Ok(())
    }

    /// Back link, header, body, then items and steps staggered 100 ms apart,
    /// then the closing block.
    fn build_detail(
        &mut self,
        runtime: &RuntimeHandle,
        items: usize,
        steps: usize,
        item_rise: f32,
    ) {
        let rt = || runtime.clone();
        self.entrances = vec![
            (ElementId::DetailBackLink, Entrance::slide(rt(), -20.0, eased(500, 0))),
            (ElementId::DetailHeader, Entrance::rise(rt(), 30.0, eased(600, 0))),
            (ElementId::DetailBody, Entrance::rise(rt(), 30.0, eased(600, 200))),
        ];
        for index in 0..items {
            let spec = eased(500, 300 + index as u64 * 100);
            self.entrances.push((
                ElementId::DetailItem(index),
                Entrance::rise(rt(), item_rise, spec),
            ));
        }
        for index in 0..steps {
            let spec = eased(500, 500 + index as u64 * 100);
            self.entrances.push((
                ElementId::DetailStep(index),
                Entrance::slide(rt(), -30.0, spec),
            ));
        }
        let closing_delay = if steps > 0 { 600 } else { 500 };
        self.entrances.push((
            ElementId::DetailFooter,
            Entrance::rise(rt(), 30.0, eased(600, closing_delay)),
        ));
    }
}

/// Owns the site's controllers and turns input into one [`Scene`] per frame.
///
/// Hosts feed it three kinds of input: pointer events through
/// [`dispatch`](Self::dispatch), element bounds through
/// [`set_layout`](Self::set_layout), and navigation through
/// [`navigate`](Self::navigate). Tweens and the carousel timer run on the
/// runtime; the host advances the runtime first and then calls
/// [`frame`](Self::frame) with the same frame time.
pub struct SiteShell {
    settings: AppSettings,
    runtime: RuntimeHandle,
    catalog: StudioCatalog,
    transition: PageTransition,
    page: PageMotion,
    dispatcher: PointerDispatcher,
    tracker: PointerTracker,
    cursor: Rc<RefCell<CustomCursor>>,
    cursor_subscription: SubscriptionId,
    targets: InteractiveTargets,
    magnetic: FxHashMap<TargetId, MagneticController>,
    layout: LayoutSnapshot,
    hero: HeroScroll,
    reels: ReelDeck,
    frames: FrameTracker,
    last_frame_nanos: Option<u64>,
}

impl SiteShell {
    pub fn mount(
        catalog: StudioCatalog,
        settings: AppSettings,
        runtime: RuntimeHandle,
    ) -> Result<Self, HostError> {
        let route = Route::parse(&settings.initial_path);
        let page = PageMotion::build(&catalog, &route, &settings, &runtime)?;
        let transition = PageTransition::start(runtime.clone(), route);

        let cursor = Rc::new(RefCell::new(CustomCursor::new(settings.cursor_spring)));
        let mut tracker = PointerTracker::new(PointerCapability::None);
        let cursor_subscription = {
            let cursor = Rc::clone(&cursor);
            tracker.subscribe(move |sample| cursor.borrow_mut().pointer_moved(sample))
        };

        let reels = ReelDeck::new(catalog.reels());
        let layout = LayoutSnapshot::new(settings.viewport);
        log::info!("site mounted at {}", transition.route());
        Ok(Self {
            settings,
            runtime,
            catalog,
            transition,
            page,
            dispatcher: PointerDispatcher::new(),
            tracker,
            cursor,
            cursor_subscription,
            targets: InteractiveTargets::new(),
            magnetic: FxHashMap::default(),
            layout,
            hero: HeroScroll::new(),
            reels,
            frames: FrameTracker::new(),
            last_frame_nanos: None,
        })
    }

    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    pub fn catalog(&self) -> &StudioCatalog {
        &self.catalog
    }

    pub fn route(&self) -> &Route {
        self.transition.route()
    }

    pub fn page(&self) -> Page<'_> {
        self.catalog.page(self.transition.route())
    }

    /// Switches to `path`. The old page's timers stop and the new page's
    /// entrances start. Returns false if the path resolves to the current
    /// route.
    pub fn navigate(&mut self, path: &str) -> Result<bool, HostError> {
        let route = Route::parse(path);
        if &route == self.transition.route() {
            return Ok(false);
        }
        let page = PageMotion::build(&self.catalog, &route, &self.settings, &self.runtime)?;
        self.page = page;
        self.transition.navigate(route);
        self.hero = HeroScroll::new();
        self.apply_layout();
        Ok(true)
    }

    pub fn pointer_capability(&self) -> PointerCapability {
        self.tracker.capability()
    }

    /// Called on mount and on every viewport resize with the result of the
    /// `(pointer: fine)` query. Losing the fine pointer hides the cursor and
    /// releases every magnetic element.
    pub fn set_pointer_capability(&mut self, capability: PointerCapability) {
        if !self.tracker.set_capability(capability) {
            return;
        }
        self.cursor.borrow_mut().set_visible(capability.is_fine());
        if !capability.is_fine() {
            for controller in self.magnetic.values_mut() {
                controller.pointer_leave();
            }
        }
    }

    /// Queues a pointer event for the next frame.
    pub fn dispatch(&mut self, event: PointerEvent) {
        self.dispatcher.push(event);
    }

    /// Re-synchronizes hover targets with a fresh document scan. The host
    /// binds listeners for `added` and releases them for `removed`.
    pub fn sync_targets<I>(&mut self, scan: I) -> TargetSync
    where
        I: IntoIterator<Item = TargetDescriptor>,
    {
        let sync = self.targets.sync(scan);
        for binding in &sync.removed {
            self.tracker.forget_target(binding.id);
            self.magnetic.remove(&binding.id);
            self.layout.magnetic.remove(&binding.id);
        }
        self.cursor
            .borrow_mut()
            .set_hovering(self.tracker.is_hovering());
        sync
    }

    pub fn target_id(&self, key: &str) -> Option<TargetId> {
        self.targets.id_for(key)
    }

    /// Gives a bound target the magnetic pull. Returns `None` for keys that
    /// are not currently bound.
    pub fn make_magnetic(&mut self, key: &str) -> Option<TargetId> {
        let id = self.targets.id_for(key)?;
        let (strength, spring) = (self.settings.magnetic_strength, self.settings.magnetic_spring);
        self.magnetic
            .entry(id)
            .or_insert_with(|| MagneticController::new(strength, spring));
        Some(id)
    }

    pub fn magnetic_offset(&self, target: TargetId) -> Option<MagneticOffset> {
        self.magnetic.get(&target).map(MagneticController::offset)
    }

    pub fn hovered_target(&self) -> Option<TargetId> {
        self.tracker.hovered()
    }

    pub fn cursor(&self) -> std::cell::Ref<'_, CustomCursor> {
        self.cursor.borrow()
    }

    /// Replaces the layout and recomputes scroll progress and visibility.
    pub fn set_layout(&mut self, layout: LayoutSnapshot) {
        self.layout = layout;
        self.apply_layout();
    }

    pub fn layout(&self) -> &LayoutSnapshot {
        &self.layout
    }

    pub fn hero_scroll(&self) -> &HeroScroll {
        &self.hero
    }

    pub fn is_revealed(&self, section: SectionId) -> bool {
        self.page
            .reveals
            .iter()
            .any(|reveal| reveal.section == section && reveal.detector.is_seen())
    }

    /// `None` off the landing page.
    pub fn testimonials(&self) -> Option<&Carousel> {
        self.page.testimonials.as_ref()
    }

    pub fn next_testimonial(&self) {
        if let Some(carousel) = &self.page.testimonials {
            carousel.next();
        }
    }

    pub fn prev_testimonial(&self) {
        if let Some(carousel) = &self.page.testimonials {
            carousel.prev();
        }
    }

    pub fn go_to_testimonial(&self, index: usize) {
        if let Some(carousel) = &self.page.testimonials {
            carousel.go_to(index);
        }
    }

    pub fn reels(&self) -> &ReelDeck {
        &self.reels
    }

    pub fn reels_mut(&mut self) -> &mut ReelDeck {
        &mut self.reels
    }

    pub fn copyright(&self) -> String {
        copyright(self.settings.copyright_year)
    }

    pub fn frame_stats(&self) -> FrameStats {
        self.frames.stats()
    }

    /// True while a spring driven by the shell itself is still moving.
    /// Runtime-driven tweens are reported by the runtime.
    pub fn has_pending_motion(&self) -> bool {
        !self.dispatcher.is_empty()
            || !self.cursor.borrow().is_settled()
            || self.magnetic.values().any(|controller| !controller.is_settled())
    }

    /// Handles queued input, steps the springs, and returns the scene.
    pub fn frame(&mut self, frame_time_nanos: u64) -> Scene {
        let dt_secs = self
            .last_frame_nanos
            .replace(frame_time_nanos)
            .map_or(0.0, |last| {
                frame_time_nanos.saturating_sub(last) as f32 / 1_000_000_000.0
            });

        let mut events: SmallVec<[PointerEvent; 8]> = SmallVec::new();
        self.dispatcher.drain(|event| events.push(event));
        for event in &events {
            self.handle_pointer(event);
        }

        self.cursor.borrow_mut().tick(dt_secs);
        for controller in self.magnetic.values_mut() {
            controller.tick(dt_secs);
        }

        let page = &mut self.page;
        if let (Some(carousel), Some(slide)) = (&page.testimonials, &mut page.slide) {
            slide.show(carousel.current_index(), carousel.direction());
        }

        self.frames.record_frame(frame_time_nanos);
        self.scene()
    }

    /// The scene for the current state, without advancing anything.
    pub fn scene(&self) -> Scene {
        let cursor = self.cursor.borrow();
        let mut scene = Scene::new(cursor.is_visible());
        scene.push(ElementId::CursorOuter, cursor.outer_layer());
        scene.push(ElementId::CursorInner, cursor.inner_layer());
        if self.transition.loader_visible() {
            scene.push(ElementId::Loader, self.transition.loader_layer());
        }
        scene.push(ElementId::Content, self.transition.content_layer());

        if self.page.landing {
            scene.push(
                ElementId::HeroBackground,
                GraphicsLayer::IDENTITY.translated(Point::new(0.0, self.hero.translate_y())),
            );
            scene.push(
                ElementId::HeroContent,
                GraphicsLayer::IDENTITY.with_alpha(self.hero.opacity()),
            );
        }
        for (element, entrance) in &self.page.entrances {
            scene.push(*element, entrance.layer());
        }
        for reveal in &self.page.reveals {
            for (element, entrance) in &reveal.parts {
                scene.push(*element, entrance.layer());
            }
        }
        if let Some(slide) = &self.page.slide {
            scene.push(ElementId::TestimonialSlide, slide.layer());
            scene.push(ElementId::TestimonialSlideExit, slide.exit_layer());
        }

        let mut magnetic: SmallVec<[(TargetId, MagneticOffset); 8]> = self
            .magnetic
            .iter()
            .map(|(id, controller)| (*id, controller.offset()))
            .collect();
        magnetic.sort_by_key(|(id, _)| *id);
        let hovered = self.tracker.hovered();
        for (id, offset) in magnetic {
            let scale = if hovered == Some(id) {
                MAGNETIC_HOVER_SCALE
            } else {
                1.0
            };
            scene.push(
                ElementId::Magnetic(id),
                GraphicsLayer::IDENTITY
                    .translated(offset.as_point())
                    .with_scale(scale),
            );
        }
        scene
    }

    fn handle_pointer(&mut self, event: &PointerEvent) {
        self.tracker.handle(event);
        if !self.tracker.is_enabled() {
            return;
        }
        match event.kind {
            PointerEventKind::Move => {
                let sample = event.sample();
                for (id, controller) in self.magnetic.iter_mut() {
                    let Some(bounds) = self.layout.magnetic.get(id) else {
                        continue;
                    };
                    if controller.is_engaged() || bounds.contains(sample.x, sample.y) {
                        controller.pointer_move(sample, *bounds);
                    }
                }
            }
            PointerEventKind::Enter(_) => {}
            PointerEventKind::Leave(target) => {
                if let Some(controller) = self.magnetic.get_mut(&target) {
                    controller.pointer_leave();
                }
            }
            PointerEventKind::Exit => {
                for controller in self.magnetic.values_mut() {
                    controller.pointer_leave();
                }
            }
        }
        self.cursor
            .borrow_mut()
            .set_hovering(self.tracker.is_hovering());
    }

    fn apply_layout(&mut self) {
        let viewport = self.layout.viewport;
        if self.page.landing {
            if let Some(hero) = self.layout.hero {
                self.hero.update(hero, viewport);
            }
        }
        for reveal in &mut self.page.reveals {
            if let Some(bounds) = self.layout.section(reveal.section) {
                reveal.detector.observe(bounds, viewport);
            }
        }
    }
}

impl Drop for SiteShell {
    fn drop(&mut self) {
        self.tracker.unsubscribe(self.cursor_subscription);
        self.page.scope.dispose();
        log::debug!("site shell dropped after {} frames", self.frames.stats().frame_count);
    }
}

#[cfg(test)]
#[path = "tests/shell_tests.rs"]
mod tests;
