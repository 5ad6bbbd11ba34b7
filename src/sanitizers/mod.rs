//! Site-specific article sanitizers.
//!
//! A sanitizer turns one site's raw article HTML into plain article text.
//! Each site has its own markup, so sanitizers are registered per site key
//! and looked up at analysis time:
//!
//! | Site | Key | Module |
//! |------|-----|--------|
//! | inosmi.ru | `inosmi_ru` | [`inosmi`] |
//!
//! The registry is populated at startup and read-only afterwards. A URL whose
//! site has no registered sanitizer, or whose HTML the sanitizer does not
//! recognize, is reported as a parsing failure.

use crate::error::ArticleNotFound;
use std::collections::HashMap;
use url::Url;

pub mod inosmi;

pub use inosmi::InosmiSanitizer;

/// Extracts article text from one site's HTML.
pub trait Sanitize: Send + Sync {
    /// Extract the article from `html`.
    ///
    /// With `plaintext` set, returns the article as plain text; otherwise
    /// returns the article's markup with surrounding page chrome removed.
    /// Fails with [`ArticleNotFound`] when the expected article structure is
    /// absent.
    fn sanitize(&self, html: &str, plaintext: bool) -> Result<String, ArticleNotFound>;
}

/// Mapping from site key to sanitizer, built once at startup.
pub struct SanitizerRegistry {
    by_site: HashMap<String, Box<dyn Sanitize>>,
}

impl SanitizerRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self {
            by_site: HashMap::new(),
        }
    }

    /// Registry with every built-in sanitizer registered.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register("inosmi_ru", Box::new(InosmiSanitizer));
        registry
    }

    /// Register a sanitizer under a site key, replacing any previous one.
    pub fn register(&mut self, site_key: impl Into<String>, sanitizer: Box<dyn Sanitize>) {
        self.by_site.insert(site_key.into(), sanitizer);
    }

    /// Look up the sanitizer for a site key.
    pub fn get(&self, site_key: &str) -> Option<&dyn Sanitize> {
        self.by_site.get(site_key).map(|s| s.as_ref())
    }

    /// Number of registered sanitizers.
    pub fn len(&self) -> usize {
        self.by_site.len()
    }

    /// True when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.by_site.is_empty()
    }
}

impl Default for SanitizerRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Derive the registry key for a URL: the host with dots as underscores
/// (`inosmi.ru` → `inosmi_ru`). URLs without a host have no site key.
pub fn site_key(url: &Url) -> Option<String> {
    url.host_str().map(|host| host.replace('.', "_"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_key_replaces_dots() {
        let url = Url::parse("https://inosmi.ru/20230213/luna-260489924.html").unwrap();
        assert_eq!(site_key(&url), Some("inosmi_ru".to_string()));

        let url = Url::parse("http://127.0.0.1:4545/article").unwrap();
        assert_eq!(site_key(&url), Some("127_0_0_1".to_string()));
    }

    #[test]
    fn test_site_key_absent_without_host() {
        let url = Url::parse("data:text/plain,hello").unwrap();
        assert_eq!(site_key(&url), None);
    }

    #[test]
    fn test_defaults_cover_inosmi() {
        let registry = SanitizerRegistry::with_defaults();
        assert!(registry.get("inosmi_ru").is_some());
        assert!(registry.get("lenta_ru").is_none());
    }

    #[test]
    fn test_register_replaces_existing_entry() {
        let mut registry = SanitizerRegistry::new();
        assert!(registry.is_empty());
        registry.register("inosmi_ru", Box::new(InosmiSanitizer));
        registry.register("inosmi_ru", Box::new(InosmiSanitizer));
        assert_eq!(registry.len(), 1);
    }
}
