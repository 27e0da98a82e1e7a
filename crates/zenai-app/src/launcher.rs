use crate::error::HostError;
use crate::shell::SiteShell;
use chrono::Datelike;
use zenai_animation::SpringSpec;
use zenai_content::StudioCatalog;
use zenai_core::RuntimeHandle;
use zenai_foundation::motion_constants::{
    CAROUSEL_INTERVAL_MILLIS, HOVER_POLL_INTERVAL_MILLIS, MAGNETIC_STRENGTH, VISIBILITY_MARGIN,
};
use zenai_ui_graphics::Size;

/// Tunables for one run of the site.
#[derive(Clone, Debug, PartialEq)]
pub struct AppSettings {
    /// Path the shell starts on, e.g. `/` or `/work/client-2`.
    pub initial_path: String,
    /// Viewport size until the host reports the real one.
    pub viewport: Size,
    pub carousel_interval_millis: u64,
    /// Margin applied to the viewport before section visibility tests.
    pub visibility_margin: f32,
    pub magnetic_strength: f32,
    pub magnetic_spring: SpringSpec,
    pub cursor_spring: SpringSpec,
    pub slide_spring: SpringSpec,
    /// Rescan period for hover targets where no mutation observer exists.
    pub hover_poll_interval_millis: u64,
    pub copyright_year: i32,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            initial_path: "/".to_string(),
            viewport: Size::new(1280.0, 800.0),
            carousel_interval_millis: CAROUSEL_INTERVAL_MILLIS,
            visibility_margin: VISIBILITY_MARGIN,
            magnetic_strength: MAGNETIC_STRENGTH,
            magnetic_spring: SpringSpec::magnetic(),
            cursor_spring: SpringSpec::cursor(),
            slide_spring: SpringSpec::slide(),
            hover_poll_interval_millis: HOVER_POLL_INTERVAL_MILLIS,
            copyright_year: current_year(),
        }
    }
}

/// Year shown in the footer, from the local clock.
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Builder for the site.
///
/// ```ignore
/// let runtime = Runtime::new();
/// let shell = AppLauncher::new()
///     .with_path("/services/ads")
///     .with_viewport(1440.0, 900.0)
///     .launch(runtime.handle())?;
/// ```
#[derive(Clone, Debug, Default)]
pub struct AppLauncher {
    settings: AppSettings,
}

impl AppLauncher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: AppSettings) -> Self {
        Self { settings }
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.settings.initial_path = path.into();
        self
    }

    pub fn with_viewport(mut self, width: f32, height: f32) -> Self {
        self.settings.viewport = Size::new(width, height);
        self
    }

    pub fn with_carousel_interval(mut self, millis: u64) -> Self {
        self.settings.carousel_interval_millis = millis;
        self
    }

    pub fn with_visibility_margin(mut self, margin: f32) -> Self {
        self.settings.visibility_margin = margin;
        self
    }

    pub fn with_magnetic_strength(mut self, strength: f32) -> Self {
        self.settings.magnetic_strength = strength;
        self
    }

    pub fn with_hover_poll_interval(mut self, millis: u64) -> Self {
        self.settings.hover_poll_interval_millis = millis;
        self
    }

    pub fn with_copyright_year(mut self, year: i32) -> Self {
        self.settings.copyright_year = year;
        self
    }

    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    /// Builds the catalog and mounts a shell driven by `runtime`.
    pub fn launch(self, runtime: RuntimeHandle) -> Result<SiteShell, HostError> {
        let catalog = StudioCatalog::studio()?;
        SiteShell::mount(catalog, self.settings, runtime)
    }

    /// Runs the site in the current browser page.
    #[cfg(feature = "web")]
    pub fn run_web(self) -> Result<(), wasm_bindgen::JsValue> {
        crate::web::run(self.settings)
    }
}
