//! Browser host for the site shell.
//!
//! Binds DOM events to a [`SiteShell`], drives the runtime from
//! `requestAnimationFrame`, and writes each frame's [`Scene`] back to the
//! page as inline `transform`/`opacity` styles. Markup comes from the page;
//! elements are found by the ids in [`ElementId::dom_id`].
//!
//! Every listener, observer and timer is held by the host's mount scope, so
//! [`shutdown`] releases all of them.

use crate::embed::EmbedSlot;
use crate::error::HostError;
use crate::frame_stats::FrameOrigin;
use crate::launcher::{AppLauncher, AppSettings};
use crate::media::MediaCommand;
use crate::scene::{ElementId, LayoutSnapshot, Scene, SectionId};
use crate::shell::SiteShell;
use rustc_hash::FxHashMap;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, HtmlVideoElement, MouseEvent,
    MutationObserver, MutationObserverInit, Window,
};
use zenai_core::{MountScope, Runtime, NANOS_PER_MILLI};
use zenai_foundation::{PointerCapability, PointerEventKind, TargetId};
use zenai_platform_web::{target_descriptor, WebPlatform, TARGET_KEY_ATTRIBUTE};
use zenai_ui_graphics::{GraphicsLayer, Size};

const INTERACTIVE_SELECTOR: &str = r#"a, button, [role="button"]"#;
const MAGNETIC_ATTRIBUTE: &str = "data-zenai-magnetic";
const REEL_ATTRIBUTE: &str = "data-zenai-reel";
const DOT_ATTRIBUTE: &str = "data-zenai-testimonial-dot";
const HERO_ID: &str = "zenai-hero";
const EMBED_CONTAINER_ID: &str = "zenai-embed";
const EMBED_SCRIPT_ID: &str = "zenai-embed-script";
/// Names the global function the embed script installs.
const EMBED_PROCESSOR_ATTRIBUTE: &str = "data-zenai-embed-processor";

thread_local! {
    static HOST: RefCell<Option<Rc<WebHost>>> = const { RefCell::new(None) };
}

/// Mounts the site in the current page and starts the frame loop.
///
/// Called by `AppLauncher::run_web()`. The host lives until [`shutdown`].
pub fn run(settings: AppSettings) -> Result<(), JsValue> {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    let window = web_sys::window().ok_or(HostError::MissingWindow)?;
    let document = window.document().ok_or(HostError::MissingDocument)?;
    let platform = WebPlatform::new();

    let settings = AppSettings {
        initial_path: window.location().pathname()?,
        viewport: viewport_size(&window, &platform),
        ..settings
    };
    let hover_poll_interval = settings.hover_poll_interval_millis;
    let runtime = Runtime::new();
    let shell = AppLauncher::with_settings(settings).launch(runtime.handle())?;
    let scope = MountScope::new(runtime.handle());

    let host = Rc::new(WebHost {
        window,
        document,
        platform,
        runtime,
        shell: RefCell::new(shell),
        scope,
        targets: RefCell::new(FxHashMap::default()),
        applied: RefCell::new(FxHashMap::default()),
        embed: RefCell::new(None),
        next_key: Cell::new(0),
        origin: Cell::new(FrameOrigin::new()),
    });

    host.detect_capability();
    host.rescan_targets();
    host.refresh_layout();
    WebHost::bind_window(&host)?;
    WebHost::bind_testimonial_controls(&host)?;
    WebHost::bind_reels(&host)?;
    WebHost::bind_embed(&host)?;
    WebHost::observe_mutations(&host, hover_poll_interval)?;
    WebHost::start_frame_loop(&host)?;

    HOST.with(|slot| *slot.borrow_mut() = Some(host));
    log::info!("web host running");
    Ok(())
}

/// Releases every listener, observer and timer and stops the frame loop.
pub fn shutdown() {
    if let Some(host) = HOST.with(|slot| slot.borrow_mut().take()) {
        host.scope.dispose();
        host.targets.borrow_mut().clear();
        log::info!("web host shut down");
    }
}

/// `addEventListener` for the lifetime of the guard.
struct EventListener {
    target: EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl EventListener {
    fn new(
        target: &EventTarget,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, JsValue> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event,
            closure,
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

/// An interactive element with its hover listeners.
struct BoundTarget {
    element: HtmlElement,
    magnetic: bool,
    _enter: EventListener,
    _leave: EventListener,
}

struct WebHost {
    window: Window,
    document: Document,
    platform: WebPlatform,
    runtime: Runtime,
    shell: RefCell<SiteShell>,
    scope: MountScope,
    targets: RefCell<FxHashMap<TargetId, BoundTarget>>,
    applied: RefCell<FxHashMap<ElementId, GraphicsLayer>>,
    embed: RefCell<Option<EmbedSlot>>,
    next_key: Cell<u64>,
    origin: Cell<FrameOrigin>,
}

impl WebHost {
    /// Evaluated on mount and on every resize.
    fn detect_capability(&self) {
        let matches = |query: &str| {
            self.window
                .match_media(query)
                .ok()
                .flatten()
                .is_some_and(|list| list.matches())
        };
        let capability = PointerCapability::from_media_queries(
            matches("(pointer: fine)"),
            matches("(pointer: coarse)"),
        );
        self.shell.borrow_mut().set_pointer_capability(capability);
    }

    /// Stamps a key on every interactive element, diffs against the bound
    /// set, and binds or releases hover listeners accordingly.
    fn rescan_targets(self: &Rc<Self>) {
        let Ok(nodes) = self.document.query_selector_all(INTERACTIVE_SELECTOR) else {
            return;
        };
        let mut scan = Vec::with_capacity(nodes.length() as usize);
        let mut elements = FxHashMap::default();
        for index in 0..nodes.length() {
            let Some(element) = nodes.item(index).and_then(|node| node.dyn_into::<Element>().ok())
            else {
                continue;
            };
            if !element.has_attribute(TARGET_KEY_ATTRIBUTE) {
                let key = self.next_key.get() + 1;
                self.next_key.set(key);
                let _ = element.set_attribute(TARGET_KEY_ATTRIBUTE, &format!("t{key}"));
            }
            if let Some(descriptor) = target_descriptor(&element) {
                elements.insert(descriptor.key.clone(), element);
                scan.push(descriptor);
            }
        }

        let sync = self.shell.borrow_mut().sync_targets(scan);
        let mut targets = self.targets.borrow_mut();
        for binding in sync.removed {
            targets.remove(&binding.id);
        }
        for binding in sync.added {
            let Some(element) = elements.remove(&binding.key) else {
                continue;
            };
            match self.bind_target(binding.id, &binding.key, element) {
                Ok(bound) => {
                    targets.insert(binding.id, bound);
                }
                Err(err) => log::warn!("could not bind hover target {}: {err:?}", binding.key),
            }
        }
    }

    fn bind_target(
        self: &Rc<Self>,
        id: TargetId,
        key: &str,
        element: Element,
    ) -> Result<BoundTarget, JsValue> {
        let element: HtmlElement = element.dyn_into()?;
        let magnetic = element.has_attribute(MAGNETIC_ATTRIBUTE);
        if magnetic {
            self.shell.borrow_mut().make_magnetic(key);
        }
        let enter = self.pointer_listener(&element, "mouseenter", PointerEventKind::Enter(id))?;
        let leave = self.pointer_listener(&element, "mouseleave", PointerEventKind::Leave(id))?;
        Ok(BoundTarget {
            element,
            magnetic,
            _enter: enter,
            _leave: leave,
        })
    }

    fn pointer_listener(
        self: &Rc<Self>,
        target: &EventTarget,
        event: &'static str,
        kind: PointerEventKind,
    ) -> Result<EventListener, JsValue> {
        let host = Rc::downgrade(self);
        EventListener::new(target, event, move |event| {
            let (Some(host), Some(event)) = (host.upgrade(), event.dyn_ref::<MouseEvent>()) else {
                return;
            };
            let event = host.platform.mouse_event(kind, event);
            host.shell.borrow_mut().dispatch(event);
        })
    }

    /// Reads every tracked rectangle and hands the snapshot to the shell.
    fn refresh_layout(&self) {
        let mut layout = LayoutSnapshot::new(viewport_size(&self.window, &self.platform));
        if let Some(hero) = self.document.get_element_by_id(HERO_ID) {
            layout = layout.with_hero(self.platform.element_rect(&hero));
        }
        for section in SectionId::ALL {
            if let Some(element) = self.document.get_element_by_id(section.dom_id()) {
                layout = layout.with_section(section, self.platform.element_rect(&element));
            }
        }
        for (id, bound) in self.targets.borrow().iter() {
            if bound.magnetic {
                layout = layout.with_magnetic(*id, self.platform.element_rect(&bound.element));
            }
        }
        self.shell.borrow_mut().set_layout(layout);
    }

    fn bind_window(host: &Rc<Self>) -> Result<(), JsValue> {
        let window: &EventTarget = host.window.as_ref();
        host.scope
            .hold(host.pointer_listener(window, "mousemove", PointerEventKind::Move)?);
        if let Some(root) = host.document.document_element() {
            host.scope
                .hold(host.pointer_listener(&root, "mouseleave", PointerEventKind::Exit)?);
        }

        let weak = Rc::downgrade(host);
        host.scope.hold(EventListener::new(window, "scroll", move |_| {
            if let Some(host) = weak.upgrade() {
                host.refresh_layout();
            }
        })?);

        let weak = Rc::downgrade(host);
        host.scope.hold(EventListener::new(window, "resize", move |_| {
            if let Some(host) = weak.upgrade() {
                host.detect_capability();
                host.refresh_layout();
            }
        })?);

        let weak = Rc::downgrade(host);
        host.scope.hold(EventListener::new(window, "popstate", move |_| {
            let Some(host) = weak.upgrade() else {
                return;
            };
            let Ok(path) = host.window.location().pathname() else {
                return;
            };
            let navigated = host.shell.borrow_mut().navigate(&path);
            match navigated {
                Ok(true) => {
                    host.applied.borrow_mut().clear();
                    host.rescan_targets();
                    host.refresh_layout();
                }
                Ok(false) => {}
                Err(err) => log::error!("navigation to {path} failed: {err}"),
            }
        })?);
        Ok(())
    }

    fn bind_testimonial_controls(host: &Rc<Self>) -> Result<(), JsValue> {
        let click = |id: &str, action: fn(&SiteShell)| -> Result<(), JsValue> {
            let Some(button) = host.document.get_element_by_id(id) else {
                return Ok(());
            };
            let weak = Rc::downgrade(host);
            host.scope.hold(EventListener::new(&button, "click", move |_| {
                if let Some(host) = weak.upgrade() {
                    action(&host.shell.borrow());
                }
            })?);
            Ok(())
        };
        click("zenai-testimonial-prev", SiteShell::prev_testimonial)?;
        click("zenai-testimonial-next", SiteShell::next_testimonial)?;

        let dots = host
            .document
            .query_selector_all(&format!("[{DOT_ATTRIBUTE}]"))?;
        for index in 0..dots.length() {
            let Some(dot) = dots.item(index).and_then(|node| node.dyn_into::<Element>().ok()) else {
                continue;
            };
            let Some(slide) = dot
                .get_attribute(DOT_ATTRIBUTE)
                .and_then(|value| value.parse::<usize>().ok())
            else {
                continue;
            };
            let weak = Rc::downgrade(host);
            host.scope.hold(EventListener::new(&dot, "click", move |_| {
                if let Some(host) = weak.upgrade() {
                    host.shell.borrow().go_to_testimonial(slide);
                }
            })?);
        }
        Ok(())
    }

    fn bind_reels(host: &Rc<Self>) -> Result<(), JsValue> {
        let cards = host
            .document
            .query_selector_all(&format!("[{REEL_ATTRIBUTE}]"))?;
        for index in 0..cards.length() {
            let Some(card) = cards.item(index).and_then(|node| node.dyn_into::<Element>().ok())
            else {
                continue;
            };
            let Some(reel) = card
                .get_attribute(REEL_ATTRIBUTE)
                .and_then(|value| value.parse::<usize>().ok())
            else {
                continue;
            };
            let on = |event: &'static str,
                      target: &EventTarget,
                      action: fn(&mut SiteShell, usize)|
             -> Result<EventListener, JsValue> {
                let weak = Rc::downgrade(host);
                EventListener::new(target, event, move |_| {
                    if let Some(host) = weak.upgrade() {
                        action(&mut host.shell.borrow_mut(), reel);
                    }
                })
            };
            host.scope.hold(on("mouseenter", &card, |shell, reel| {
                shell.reels_mut().hover_enter(reel)
            })?);
            host.scope.hold(on("mouseleave", &card, |shell, reel| {
                shell.reels_mut().hover_leave(reel)
            })?);
            if let Some(video) = reel_video(&host.document, reel) {
                host.scope.hold(on("error", &video, |shell, reel| {
                    shell.reels_mut().load_failed(reel, "media error")
                })?);
            }
        }
        Ok(())
    }

    /// The processor runs once both the container and the script are there.
    fn bind_embed(host: &Rc<Self>) -> Result<(), JsValue> {
        let Some(container) = host.document.get_element_by_id(EMBED_CONTAINER_ID) else {
            return Ok(());
        };
        let processor = container.get_attribute(EMBED_PROCESSOR_ATTRIBUTE);
        let window = host.window.clone();
        let mut slot = EmbedSlot::new(move || {
            let Some(name) = processor else {
                log::warn!("embed container has no processor");
                return;
            };
            let function = js_sys::Reflect::get(&window, &JsValue::from_str(&name))
                .ok()
                .and_then(|value| value.dyn_into::<js_sys::Function>().ok());
            match function {
                Some(function) => {
                    if let Err(err) = function.call0(&window) {
                        log::warn!("embed processor {name} threw: {err:?}");
                    }
                }
                None => log::warn!("embed processor {name} is not defined"),
            }
        });
        slot.container_mounted();
        *host.embed.borrow_mut() = Some(slot);

        if let Some(script) = host.document.get_element_by_id(EMBED_SCRIPT_ID) {
            let weak = Rc::downgrade(host);
            host.scope.hold(EventListener::new(&script, "load", move |_| {
                if let Some(host) = weak.upgrade() {
                    if let Some(slot) = host.embed.borrow_mut().as_mut() {
                        slot.script_loaded();
                    }
                }
            })?);
        }
        Ok(())
    }

    /// Rescans hover targets on every DOM mutation, or on a timer where
    /// `MutationObserver` is unavailable.
    fn observe_mutations(host: &Rc<Self>, poll_interval_millis: u64) -> Result<(), JsValue> {
        let weak = Rc::downgrade(host);
        let callback = Closure::wrap(Box::new(move |_: JsValue, _: JsValue| {
            if let Some(host) = weak.upgrade() {
                host.rescan_targets();
                host.refresh_layout();
            }
        }) as Box<dyn FnMut(JsValue, JsValue)>);

        match MutationObserver::new(callback.as_ref().unchecked_ref()) {
            Ok(observer) => {
                let body = host.document.body().ok_or(HostError::MissingElement("body".into()))?;
                let init = MutationObserverInit::new();
                init.set_child_list(true);
                init.set_subtree(true);
                observer.observe_with_options(&body, &init)?;
                host.scope.hold(callback);
                host.scope.on_dispose(move || observer.disconnect());
            }
            Err(err) => {
                log::debug!(
                    "no MutationObserver ({err:?}), polling every {poll_interval_millis}ms"
                );
                let weak = Rc::downgrade(host);
                host.scope.interval(poll_interval_millis, move || {
                    if let Some(host) = weak.upgrade() {
                        host.rescan_targets();
                        host.refresh_layout();
                    }
                });
            }
        }
        Ok(())
    }

    fn start_frame_loop(host: &Rc<Self>) -> Result<(), JsValue> {
        let frame_loop: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
        let next = Rc::clone(&frame_loop);
        let weak: Weak<Self> = Rc::downgrade(host);

        *frame_loop.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
            let Some(host) = weak.upgrade() else {
                return;
            };
            if !host.scope.is_active() {
                return;
            }
            host.on_frame(timestamp);
            if let Some(callback) = next.borrow().as_ref() {
                if let Err(err) = host
                    .window
                    .request_animation_frame(callback.as_ref().unchecked_ref())
                {
                    log::error!("requestAnimationFrame failed: {err:?}");
                }
            }
        }) as Box<dyn FnMut(f64)>));

        if let Some(callback) = frame_loop.borrow().as_ref() {
            host.window
                .request_animation_frame(callback.as_ref().unchecked_ref())?;
        }
        Ok(())
    }

    /// `timestamp` is the rAF time in milliseconds, measured from navigation.
    fn on_frame(self: &Rc<Self>, timestamp: f64) {
        let mut origin = self.origin.get();
        let frame_nanos = origin.frame_nanos(timestamp);
        self.origin.set(origin);
        self.runtime.advance_timers_to(frame_nanos / NANOS_PER_MILLI);
        self.runtime.drain_frame_callbacks(frame_nanos);

        let (scene, commands) = {
            let mut shell = self.shell.borrow_mut();
            let scene = shell.frame(frame_nanos);
            (scene, shell.reels_mut().take_commands())
        };
        self.apply_scene(&scene);
        for command in commands {
            self.apply_media(command);
        }
    }

    fn apply_scene(&self, scene: &Scene) {
        let mut applied = self.applied.borrow_mut();
        for (element, layer) in scene.iter() {
            if applied.get(element) == Some(layer) {
                continue;
            }
            let node = match element {
                ElementId::Magnetic(id) => {
                    self.targets.borrow().get(id).map(|bound| bound.element.clone())
                }
                other => other
                    .dom_id()
                    .and_then(|id| self.document.get_element_by_id(&id))
                    .and_then(|element| element.dyn_into::<HtmlElement>().ok()),
            };
            let Some(node) = node else {
                continue;
            };
            let style = node.style();
            let written = style
                .set_property("transform", &layer.css_transform())
                .and_then(|_| style.set_property("opacity", &format!("{:.3}", layer.alpha)));
            if let Err(err) = written {
                log::trace!("style write for {element:?} failed: {err:?}");
                continue;
            }
            applied.insert(*element, *layer);
        }

        let display = if scene.cursor_visible() { "block" } else { "none" };
        for cursor in [ElementId::CursorOuter, ElementId::CursorInner] {
            if let Some(node) = cursor
                .dom_id()
                .and_then(|id| self.document.get_element_by_id(&id))
                .and_then(|element| element.dyn_into::<HtmlElement>().ok())
            {
                let _ = node.style().set_property("display", display);
            }
        }
    }

    fn apply_media(self: &Rc<Self>, command: MediaCommand) {
        let reel = match command {
            MediaCommand::Play { reel } | MediaCommand::Pause { reel } => reel,
        };
        let Some(video) = reel_video(&self.document, reel) else {
            return;
        };
        match command {
            MediaCommand::Play { .. } => {
                video.set_muted(false);
                match video.play() {
                    Ok(promise) => {
                        let weak = Rc::downgrade(self);
                        wasm_bindgen_futures::spawn_local(async move {
                            if let Err(err) = wasm_bindgen_futures::JsFuture::from(promise).await {
                                if let Some(host) = weak.upgrade() {
                                    host.shell
                                        .borrow_mut()
                                        .reels_mut()
                                        .play_rejected(reel, &format!("{err:?}"));
                                }
                            }
                        });
                    }
                    Err(err) => self
                        .shell
                        .borrow_mut()
                        .reels_mut()
                        .play_rejected(reel, &format!("{err:?}")),
                }
            }
            MediaCommand::Pause { .. } => {
                let _ = video.pause();
                video.set_muted(true);
            }
        }
    }
}

fn viewport_size(window: &Window, platform: &WebPlatform) -> Size {
    let read = |value: Result<JsValue, JsValue>| value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    platform.viewport_size(read(window.inner_width()), read(window.inner_height()))
}

fn reel_video(document: &Document, reel: usize) -> Option<HtmlVideoElement> {
    document
        .query_selector(&format!("[{REEL_ATTRIBUTE}=\"{reel}\"] video"))
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<HtmlVideoElement>().ok())
}
