use crate::slug::{Slug, SlugError};
use indexmap::IndexMap;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    InvalidSlug(SlugError),
    Duplicate(Slug),
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::InvalidSlug(err) => write!(f, "invalid slug: {err}"),
            RegistryError::Duplicate(slug) => write!(f, "slug {slug} is registered twice"),
        }
    }
}

impl std::error::Error for RegistryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RegistryError::InvalidSlug(err) => Some(err),
            RegistryError::Duplicate(_) => None,
        }
    }
}

impl From<SlugError> for RegistryError {
    fn from(err: SlugError) -> Self {
        RegistryError::InvalidSlug(err)
    }
}

/// Immutable slug-keyed table with a designated default entry.
///
/// The default is stored apart from the other entries, so
/// [`lookup`](ContentRegistry::lookup) always has something to return.
/// Iteration yields the default first, then the rest in insertion order.
#[derive(Debug, Clone)]
pub struct ContentRegistry<E> {
    default_slug: Slug,
    default: E,
    entries: IndexMap<Slug, E>,
}

impl<E> ContentRegistry<E> {
    pub fn new(default_slug: &str, default: E) -> Result<Self, RegistryError> {
        Ok(Self {
            default_slug: Slug::parse(default_slug)?,
            default,
            entries: IndexMap::new(),
        })
    }

    pub fn with_entry(mut self, slug: &str, entry: E) -> Result<Self, RegistryError> {
        let slug = Slug::parse(slug)?;
        if slug == self.default_slug || self.entries.contains_key(&slug) {
            return Err(RegistryError::Duplicate(slug));
        }
        self.entries.insert(slug, entry);
        Ok(self)
    }

    /// Exact match only.
    pub fn get(&self, slug: &str) -> Option<&E> {
        if slug == self.default_slug.as_str() {
            Some(&self.default)
        } else {
            self.entries.get(slug)
        }
    }

    pub fn contains(&self, slug: &str) -> bool {
        self.get(slug).is_some()
    }

    /// Entry for `slug`, or the default entry when the slug is missing or
    /// unknown.
    pub fn lookup(&self, slug: Option<&str>) -> &E {
        self.resolve(slug).1
    }

    /// Like [`lookup`](ContentRegistry::lookup), also returning the slug the
    /// request resolved to.
    pub fn resolve(&self, slug: Option<&str>) -> (&Slug, &E) {
        if let Some(slug) = slug {
            if let Some((key, entry)) = self.entries.get_key_value(slug) {
                return (key, entry);
            }
            if slug != self.default_slug.as_str() {
                log::debug!("unknown slug {slug:?}, using {}", self.default_slug);
            }
        }
        (&self.default_slug, &self.default)
    }

    pub fn default_slug(&self) -> &Slug {
        &self.default_slug
    }

    pub fn default_entry(&self) -> &E {
        &self.default
    }

    pub fn len(&self) -> usize {
        self.entries.len() + 1
    }

    /// Never true; a registry always holds its default.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Slug, &E)> {
        std::iter::once((&self.default_slug, &self.default)).chain(self.entries.iter())
    }
}

#[cfg(test)]
#[path = "tests/registry_tests.rs"]
mod tests;
