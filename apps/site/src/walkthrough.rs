//! Scripted headless visit.
//!
//! A simulated reader lands on a page, hovers the primary call to action,
//! then scrolls down at a steady pace while the carousel runs. Time is
//! simulated, so a twelve second visit completes instantly and the same
//! script always produces the same report.

use std::time::Duration;
use zenai_app::{AppLauncher, FrameStats, HostError, LayoutSnapshot, Scene, SectionId, SiteShell};
use zenai_core::{Clock, Runtime, SystemClock, NANOS_PER_MILLI};
use zenai_foundation::motion_constants::OFFSET_EPSILON;
use zenai_foundation::{PointerCapability, PointerEvent, TargetDescriptor, TargetId};
use zenai_ui_graphics::{Rect, Size};

/// One frame at 60 Hz.
const FRAME_NANOS: u64 = 16_666_667;
const SCROLL_START_MILLIS: u64 = 2_000;
const SCROLL_PIXELS_PER_SEC: f32 = 400.0;
const HERO_HEIGHT: f32 = 800.0;
const PAGE_HEIGHT: f32 = 4_200.0;
const PRIMARY_ACTION: &str = "hero-explore";

/// Document-space top and height of each landing section.
const SECTIONS: [(SectionId, f32, f32); 4] = [
    (SectionId::Work, 900.0, 900.0),
    (SectionId::Services, 1_900.0, 900.0),
    (SectionId::Testimonials, 2_900.0, 700.0),
    (SectionId::Footer, 3_700.0, 500.0),
];
const PRIMARY_ACTION_BOUNDS: Rect = Rect::new(540.0, 600.0, 200.0, 60.0);

/// Owns a runtime and a shell and steps both at a fixed frame rate.
pub struct HeadlessHost {
    // Dropped before the runtime so the page scope can still cancel its timers.
    shell: SiteShell,
    runtime: Runtime,
    now_nanos: u64,
}

impl HeadlessHost {
    pub fn launch(launcher: AppLauncher) -> Result<Self, HostError> {
        let runtime = Runtime::new();
        let shell = launcher.launch(runtime.handle())?;
        Ok(Self {
            shell,
            runtime,
            now_nanos: 0,
        })
    }

    pub fn shell(&self) -> &SiteShell {
        &self.shell
    }

    pub fn shell_mut(&mut self) -> &mut SiteShell {
        &mut self.shell
    }

    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    pub fn now_millis(&self) -> u64 {
        self.now_nanos / NANOS_PER_MILLI
    }

    /// Timers first, then frame callbacks, then the shell: the same order the
    /// browser host uses.
    pub fn step(&mut self) -> Scene {
        self.step_to(self.now_nanos + FRAME_NANOS)
    }

    pub fn step_to(&mut self, now_nanos: u64) -> Scene {
        self.now_nanos = now_nanos.max(self.now_nanos);
        self.runtime.advance_timers_to(self.now_millis());
        self.runtime.drain_frame_callbacks(self.now_nanos);
        self.shell.frame(self.now_nanos)
    }

    /// Runs frames against the wall clock for `millis`, sleeping between
    /// them. Frame times are whatever the clock reports, so late frames
    /// show up in the frame stats.
    pub fn run_realtime(&mut self, millis: u64) -> Scene {
        let clock = SystemClock;
        let start = clock.now();
        let offset = self.now_nanos;
        let mut scene = self.shell.scene();
        while clock.elapsed_millis(start) < millis {
            scene = self.step_to(offset + clock.elapsed_nanos(start));
            std::thread::sleep(Duration::from_nanos(FRAME_NANOS));
        }
        scene
    }
}

/// What one visit looks like.
#[derive(Clone, Debug, PartialEq)]
pub struct Walkthrough {
    pub path: String,
    pub duration_millis: u64,
    pub viewport: Size,
    /// Page visited after the main script, if any.
    pub then_visit: Option<String>,
}

impl Walkthrough {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            duration_millis: 12_000,
            viewport: Size::new(1280.0, 800.0),
            then_visit: None,
        }
    }

    pub fn with_duration(mut self, millis: u64) -> Self {
        self.duration_millis = millis;
        self
    }

    pub fn then_visit(mut self, path: impl Into<String>) -> Self {
        self.then_visit = Some(path.into());
        self
    }

    pub fn run(&self) -> Result<WalkthroughReport, HostError> {
        let launcher = AppLauncher::new()
            .with_path(self.path.clone())
            .with_viewport(self.viewport.width, self.viewport.height);
        let mut host = HeadlessHost::launch(launcher)?;
        let shell = host.shell_mut();
        shell.set_pointer_capability(PointerCapability::Fine);
        shell.sync_targets([
            TargetDescriptor::new(PRIMARY_ACTION, "a"),
            TargetDescriptor::new("hero-contact", "button"),
            TargetDescriptor::new("nav-menu", "div").with_role("button"),
        ]);
        let magnet = shell.make_magnetic(PRIMARY_ACTION);

        let mut report = WalkthroughReport::default();
        let mut shown = host.shell().testimonials().map(|carousel| carousel.current_index());
        let mut scene = host.shell().scene();
        while host.now_millis() < self.duration_millis {
            let before = host.now_millis();
            scene = host.step();
            let now = host.now_millis();
            self.drive_pointer(host.shell_mut(), magnet, before, now);
            let scroll = scroll_offset(now, self.viewport);
            host.shell_mut().set_layout(self.layout(scroll, magnet));

            for section in SectionId::ALL {
                if host.shell().is_revealed(section) && !report.revealed.contains(&section) {
                    log::info!("{:>6} ms  {:?} revealed at scroll {:.0}", now, section, scroll);
                    report.revealed.push(section);
                }
            }
            let current = host.shell().testimonials().map(|carousel| carousel.current_index());
            if current != shown {
                log::info!("{:>6} ms  testimonial {:?}", now, current);
                report.carousel_advances += 1;
                shown = current;
            }
        }
        if let Some(offset) = magnet.and_then(|id| host.shell().magnetic_offset(id)) {
            report.magnetic_settled = offset.is_near_zero(OFFSET_EPSILON);
        }

        if let Some(path) = &self.then_visit {
            host.shell_mut().navigate(path)?;
            log::info!("{:>6} ms  navigated to {}", host.now_millis(), host.shell().route());
            let until = host.now_millis() + 1_000;
            while host.now_millis() < until {
                scene = host.step();
            }
        }

        report.frames = host.shell().frame_stats().frame_count;
        report.stats = host.shell().frame_stats();
        report.layers = scene.len();
        report.final_route = host.shell().route().href();
        report.active_timers = host.runtime().active_timer_count();
        Ok(report)
    }

    /// Hover the primary action at one second, nudge it, leave at 2.5 s.
    fn drive_pointer(
        &self,
        shell: &mut SiteShell,
        magnet: Option<TargetId>,
        before: u64,
        now: u64,
    ) {
        let crossed = |at: u64| before < at && now >= at;
        let center = PRIMARY_ACTION_BOUNDS.center();
        if crossed(1_000) {
            if let Some(id) = magnet {
                shell.dispatch(PointerEvent::enter(id, center.x, center.y));
            }
            shell.dispatch(PointerEvent::moved(center.x, center.y));
        }
        if crossed(1_500) {
            shell.dispatch(PointerEvent::moved(center.x + 60.0, center.y + 10.0));
        }
        if crossed(2_500) {
            if let Some(id) = magnet {
                shell.dispatch(PointerEvent::leave(id, 900.0, 400.0));
            }
            shell.dispatch(PointerEvent::moved(900.0, 400.0));
        }
    }

    fn layout(&self, scroll: f32, magnet: Option<TargetId>) -> LayoutSnapshot {
        let width = self.viewport.width;
        let mut layout = LayoutSnapshot::new(self.viewport)
            .with_hero(Rect::new(0.0, -scroll, width, HERO_HEIGHT));
        for (section, top, height) in SECTIONS {
            layout = layout.with_section(section, Rect::new(0.0, top - scroll, width, height));
        }
        if let Some(id) = magnet {
            layout = layout.with_magnetic(id, PRIMARY_ACTION_BOUNDS.translate(0.0, -scroll));
        }
        layout
    }
}

fn scroll_offset(now_millis: u64, viewport: Size) -> f32 {
    let scrolling = now_millis.saturating_sub(SCROLL_START_MILLIS) as f32 / 1_000.0;
    (scrolling * SCROLL_PIXELS_PER_SEC).min(PAGE_HEIGHT - viewport.height)
}

#[derive(Clone, Debug, Default)]
pub struct WalkthroughReport {
    pub frames: u64,
    pub carousel_advances: usize,
    /// Sections in the order they revealed.
    pub revealed: Vec<SectionId>,
    pub magnetic_settled: bool,
    pub final_route: String,
    pub stats: FrameStats,
    /// Layers in the last scene.
    pub layers: usize,
    pub active_timers: usize,
}
