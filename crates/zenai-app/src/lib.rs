//! The ZenAI site: shell, launcher and browser host.
//!
//! [`SiteShell`] owns every motion controller of the site and turns input
//! (pointer events, element layout, route changes) into a [`Scene`] of
//! per-element transforms once per frame. [`AppLauncher`] builds a shell from
//! [`AppSettings`]; with the `web` feature it also drives one inside a browser
//! page.

mod cursor;
mod embed;
mod entrance;
mod error;
mod frame_stats;
mod launcher;
mod media;
mod scene;
mod shell;
mod transition;

#[cfg(feature = "web")]
pub mod web;

pub use cursor::{CustomCursor, CURSOR_HOVER_SCALE, CURSOR_INNER_OFFSET, CURSOR_OUTER_OFFSET};
pub use embed::EmbedSlot;
pub use entrance::Entrance;
pub use error::HostError;
pub use frame_stats::{FrameOrigin, FrameStats, FrameTracker};
pub use launcher::{current_year, AppLauncher, AppSettings};
pub use media::{MediaCommand, PlaybackState, ReelDeck};
pub use scene::{ElementId, LayoutSnapshot, Scene, SectionId};
pub use shell::SiteShell;
pub use transition::PageTransition;
