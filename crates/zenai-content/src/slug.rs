use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlugError {
    Empty,
    /// Slugs are lowercase ASCII letters, digits and single dashes.
    InvalidCharacter { slug: String, ch: char },
    /// Leading, trailing or doubled dash.
    MisplacedDash { slug: String },
}

impl fmt::Display for SlugError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlugError::Empty => write!(f, "slug is empty"),
            SlugError::InvalidCharacter { slug, ch } => {
                write!(f, "slug {slug:?} contains invalid character {ch:?}")
            }
            SlugError::MisplacedDash { slug } => {
                write!(f, "slug {slug:?} has a leading, trailing or doubled dash")
            }
        }
    }
}

impl std::error::Error for SlugError {}

/// URL path segment naming a content entry, e.g. `web-development`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Slug(String);

impl Slug {
    pub fn parse(raw: &str) -> Result<Self, SlugError> {
        if raw.is_empty() {
            return Err(SlugError::Empty);
        }
        if let Some(ch) = raw
            .chars()
            .find(|ch| !(ch.is_ascii_lowercase() || ch.is_ascii_digit() || *ch == '-'))
        {
            return Err(SlugError::InvalidCharacter {
                slug: raw.to_string(),
                ch,
            });
        }
        if raw.starts_with('-') || raw.ends_with('-') || raw.contains("--") {
            return Err(SlugError::MisplacedDash {
                slug: raw.to_string(),
            });
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Slug {
    type Err = SlugError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::parse(raw)
    }
}

impl Borrow<str> for Slug {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
#[path = "tests/slug_tests.rs"]
mod tests;
