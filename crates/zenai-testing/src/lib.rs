//! Test harness for the ZenAI motion layer.
//!
//! [`FrameDriver`] stands in for the browser's animation frame loop and
//! timers so controllers can be driven deterministically, and the
//! assertion helpers compare the floating point values springs produce.

mod assertions;
mod frame_driver;

pub use assertions::*;
pub use frame_driver::{FrameDriver, FRAME_NANOS_60HZ};
