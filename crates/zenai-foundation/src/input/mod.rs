mod dispatcher;
mod targets;
mod tracker;
mod types;

pub use dispatcher::PointerDispatcher;
pub use targets::{is_interactive, InteractiveTargets, TargetBinding, TargetDescriptor, TargetSync};
pub use tracker::{PointerTracker, SubscriptionId};
pub use types::{PointerCapability, PointerEvent, PointerEventKind, PointerSample, TargetId};
