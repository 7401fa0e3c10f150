//! Page modules: one full-page view per module, looked up by name through the
//! registry. Pages render to maud markup and never see the HTTP layer.

pub mod about;
pub mod index;

use crate::error::ApiError;
use crate::models::Props;
use maud::Markup;
use std::collections::HashMap;

/// A full-page view, looked up by name from a render instruction.
pub trait Page: Send + Sync {
    /// Page title, composed with the application name into the document title.
    fn title(&self) -> &'static str;

    /// Render the page body for the given request props.
    fn render(&self, props: &Props) -> Markup;
}

/// Name -> page module registry. Assembled once at startup, read-only after.
pub struct PageRegistry {
    pages: HashMap<&'static str, Box<dyn Page>>,
}

impl PageRegistry {
    pub fn new() -> Self {
        PageRegistry {
            pages: HashMap::new(),
        }
    }

    pub fn register(mut self, name: &'static str, page: Box<dyn Page>) -> Self {
        self.pages.insert(name, page);
        self
    }

    /// All page modules the application ships with.
    pub fn with_default_pages() -> Self {
        PageRegistry::new()
            .register("Index", Box::new(index::Index))
            .register("About", Box::new(about::About))
    }

    /// Resolve a view name to its page module. No match means the mount
    /// cannot proceed; the error is fatal to that attempt.
    pub fn resolve(&self, name: &str) -> Result<&dyn Page, ApiError> {
        self.pages
            .get(name)
            .map(|page| page.as_ref())
            .ok_or_else(|| ApiError::UnresolvedPage(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.pages.contains_key(name)
    }
}

impl Default for PageRegistry {
    fn default() -> Self {
        PageRegistry::new()
    }
}
