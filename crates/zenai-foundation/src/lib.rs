//! Interaction controllers for the ZenAI site.
//!
//! Each controller is independent: it receives plain geometry and pointer
//! data from the host, keeps its own state, and exposes the values the site
//! shell turns into element styles. None of them touch the DOM.

pub mod carousel;
pub mod input;
pub mod magnetic;
pub mod motion_constants;
pub mod scroll;
pub mod visibility;

pub use carousel::{Carousel, CarouselError, CarouselState, Direction};
pub use input::{
    is_interactive, InteractiveTargets, PointerCapability, PointerDispatcher, PointerEvent,
    PointerEventKind, PointerSample, PointerTracker, SubscriptionId, TargetBinding,
    TargetDescriptor, TargetId, TargetSync,
};
pub use magnetic::{MagneticController, MagneticOffset};
pub use scroll::{Edge, HeroScroll, ScrollAnchor, ScrollOutputId, ScrollProgressMapper, ScrollRange};
pub use visibility::{Visibility, VisibilityDetector};
