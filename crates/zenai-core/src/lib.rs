//! Runtime services shared by the ZenAI motion layer.
//!
//! Everything here is single-threaded: callbacks run synchronously on the
//! thread that drives [`Runtime`], either from the browser's animation frame
//! loop or from a test harness advancing time by hand.

mod frame_clock;
mod platform;
mod runtime;
mod scope;

pub use frame_clock::{FrameCallbackRegistration, FrameClock, IntervalRegistration};
pub use platform::{Clock, SystemClock};
pub use runtime::{FrameCallbackId, Runtime, RuntimeHandle, TimerId};
pub use scope::{ActiveFlag, MountScope};

/// Nanoseconds per millisecond, the two units the runtime speaks.
pub const NANOS_PER_MILLI: u64 = 1_000_000;
