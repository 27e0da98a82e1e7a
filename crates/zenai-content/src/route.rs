//! Site paths: `/`, `/services/{service}`, `/work/{project}`.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Landing,
    /// Service detail; the segment is a lookup key, unknown keys fall back.
    Service(String),
    /// Project detail; the segment is a lookup key, unknown keys fall back.
    Project(String),
    /// Any other path. Rendered as the landing page.
    NotFound(String),
}

impl Route {
    /// Parses a path, ignoring query string, fragment and trailing slashes.
    pub fn parse(path: &str) -> Route {
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .trim_end_matches('/');
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Route::Landing,
            ["services", service] => Route::Service((*service).to_string()),
            ["work", project] => Route::Project((*project).to_string()),
            _ => Route::NotFound(path.to_string()),
        }
    }

    pub fn href(&self) -> String {
        match self {
            Route::Landing => "/".to_string(),
            Route::Service(slug) => format!("/services/{slug}"),
            Route::Project(slug) => format!("/work/{slug}"),
            Route::NotFound(path) => path.clone(),
        }
    }

    /// Anchor the detail page's back link points at.
    pub fn back_anchor(&self) -> Option<Anchor> {
        match self {
            Route::Service(_) => Some(Anchor::Services),
            Route::Project(_) => Some(Anchor::Work),
            Route::Landing | Route::NotFound(_) => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.href())
    }
}

/// In-page sections of the landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    Work,
    Services,
    Contact,
}

impl Anchor {
    pub const ALL: [Anchor; 3] = [Anchor::Work, Anchor::Services, Anchor::Contact];

    pub fn id(self) -> &'static str {
        match self {
            Anchor::Work => "work",
            Anchor::Services => "services",
            Anchor::Contact => "contact",
        }
    }

    /// Same-page link, e.g. `#work`.
    pub fn href(self) -> String {
        format!("#{}", self.id())
    }

    /// Link from another page back to the landing section, e.g. `/#work`.
    pub fn landing_href(self) -> String {
        format!("/#{}", self.id())
    }

    pub fn from_fragment(fragment: &str) -> Option<Anchor> {
        let id = fragment.trim_start_matches('#');
        Anchor::ALL.into_iter().find(|anchor| anchor.id() == id)
    }
}

#[cfg(test)]
#[path = "tests/route_tests.rs"]
mod tests;
