//! The ZenAI site. In the browser the wasm start function mounts the
//! shell on the current page; natively the [`walkthrough`] module drives
//! the same shell through a scripted visit.

pub mod walkthrough;

pub use walkthrough::{HeadlessHost, Walkthrough, WalkthroughReport};

/// Browser entry point, run once when the module is instantiated.
#[cfg(feature = "web")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() -> Result<(), wasm_bindgen::JsValue> {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    zenai_app::AppLauncher::new().run_web()
}
