//! Static content for the ZenAI site.
//!
//! Services, projects, testimonials and reels are hard-coded tables built
//! once at start-up into a [`StudioCatalog`] and passed around by reference.
//! Lookups by slug never fail: unknown or missing slugs resolve to the
//! table's default entry.

mod catalog;
mod entries;
mod footer;
mod metadata;
mod registry;
mod route;
mod slug;

pub use catalog::{Page, StudioCatalog};
pub use entries::{ProcessStep, Project, ProjectKind, Reel, Service, Testimonial};
pub use footer::{copyright, FooterContent, FooterLink, FOOTER};
pub use metadata::{SiteMetadata, Theme, SITE};
pub use registry::{ContentRegistry, RegistryError};
pub use route::{Anchor, Route};
pub use slug::{Slug, SlugError};
