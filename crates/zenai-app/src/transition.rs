use crate::entrance::eased;
use zenai_animation::{Animatable, AnimationType};
use zenai_content::Route;
use zenai_core::RuntimeHandle;
use zenai_ui_graphics::GraphicsLayer;

const LOADER_FADE_MILLIS: u64 = 500;
const LOADER_DELAY_MILLIS: u64 = 500;
const CONTENT_FADE_MILLIS: u64 = 300;

/// Loader overlay on first load plus a content fade on every route change.
pub struct PageTransition {
    route: Route,
    loader: Animatable,
    content: Animatable,
}

impl PageTransition {
    /// Starts both fades: the loader holds for a moment then fades out while
    /// the first page fades in underneath.
    pub fn start(runtime: RuntimeHandle, route: Route) -> Self {
        let loader = Animatable::new(1.0, runtime.clone());
        loader.animate_to(
            0.0,
            AnimationType::Tween(eased(LOADER_FADE_MILLIS, LOADER_DELAY_MILLIS)),
        );
        let content = Animatable::new(0.0, runtime);
        content.animate_to(1.0, AnimationType::Tween(eased(CONTENT_FADE_MILLIS, 0)));
        Self {
            route,
            loader,
            content,
        }
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    /// Fades the new page in. Returns false if the route did not change.
    pub fn navigate(&mut self, route: Route) -> bool {
        if route == self.route {
            return false;
        }
        log::debug!("route {} -> {}", self.route, route);
        self.route = route;
        self.content.snap_to(0.0);
        self.content
            .animate_to(1.0, AnimationType::Tween(eased(CONTENT_FADE_MILLIS, 0)));
        true
    }

    /// The overlay is removed once it has fully faded.
    pub fn loader_visible(&self) -> bool {
        self.loader.is_running() || self.loader.value() > 0.0
    }

    pub fn loader_layer(&self) -> GraphicsLayer {
        GraphicsLayer::IDENTITY.with_alpha(self.loader.value())
    }

    pub fn content_layer(&self) -> GraphicsLayer {
        GraphicsLayer::IDENTITY.with_alpha(self.content.value())
    }
}
