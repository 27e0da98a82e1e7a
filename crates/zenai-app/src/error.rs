use std::fmt;
use zenai_content::RegistryError;
use zenai_foundation::CarouselError;

/// Failures while starting or hosting the site.
#[derive(Debug)]
pub enum HostError {
    /// The content catalog could not be built.
    Catalog(RegistryError),
    /// The testimonial carousel could not be mounted.
    Carousel(CarouselError),
    /// No `window` global (not running in a browser page).
    MissingWindow,
    MissingDocument,
    /// A required element id is absent from the page.
    MissingElement(String),
    /// A browser API call threw.
    Js(String),
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostError::Catalog(err) => write!(f, "failed to build content catalog: {err}"),
            HostError::Carousel(err) => write!(f, "failed to mount testimonials: {err}"),
            HostError::MissingWindow => f.write_str("no window available"),
            HostError::MissingDocument => f.write_str("no document available"),
            HostError::MissingElement(id) => write!(f, "element #{id} not found"),
            HostError::Js(message) => write!(f, "browser call failed: {message}"),
        }
    }
}

impl std::error::Error for HostError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HostError::Catalog(err) => Some(err),
            HostError::Carousel(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RegistryError> for HostError {
    fn from(err: RegistryError) -> Self {
        HostError::Catalog(err)
    }
}

impl From<CarouselError> for HostError {
    fn from(err: CarouselError) -> Self {
        HostError::Carousel(err)
    }
}

#[cfg(feature = "web")]
impl From<HostError> for wasm_bindgen::JsValue {
    fn from(err: HostError) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}
