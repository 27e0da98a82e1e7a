//! Shared tuning values for the site's pointer and scroll effects.
//!
//! Values are in CSS pixels and milliseconds. The host may override most of
//! them through the app settings; these are the defaults the site ships with.

/// Fraction of the pointer's distance from an element's center that a
/// magnetic element follows.
pub const MAGNETIC_STRENGTH: f32 = 0.2;

/// Margin applied to the viewport before testing whether a section has come
/// into view. Negative values shrink the viewport, so a section has to be
/// this far inside it before its entrance plays.
pub const VISIBILITY_MARGIN: f32 = -100.0;

/// Period of the testimonial carousel's automatic advance.
pub const CAROUSEL_INTERVAL_MILLIS: u64 = 5_000;

/// Re-scan period for interactive targets when the host has no way to
/// observe document mutations.
pub const HOVER_POLL_INTERVAL_MILLIS: u64 = 1_000;

/// Distance (in pixels) under which a magnetic offset counts as settled.
pub const OFFSET_EPSILON: f32 = 0.01;
