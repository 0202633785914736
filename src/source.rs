//! Interfaces implemented by the host page model
//!
//! Pages are read through [`MetaSource`], a capability trait where every
//! method defaults to "not supported". A page model implements only the
//! fields it actually has; the rest resolve to nothing and fall through to
//! the next candidate in each field's fallback chain.

use serde::{Deserialize, Serialize};
use url::Url;

/// A content value for one Open Graph property.
///
/// Lists fan out into one tag per element, in order, recursively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetaValue {
    Text(String),
    List(Vec<MetaValue>),
}

impl MetaValue {
    /// True when the value would produce no tags at all.
    pub fn is_empty(&self) -> bool {
        match self {
            MetaValue::Text(text) => text.is_empty(),
            MetaValue::List(values) => values.iter().all(MetaValue::is_empty),
        }
    }

    /// The first non-empty text in the value, if any.
    pub fn first(&self) -> Option<&str> {
        match self {
            MetaValue::Text(text) if !text.is_empty() => Some(text),
            MetaValue::Text(_) => None,
            MetaValue::List(values) => values.iter().find_map(MetaValue::first),
        }
    }

    /// Every non-empty text in the value, flattened in order.
    pub fn texts(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_texts(&mut out);
        out
    }

    fn collect_texts<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            MetaValue::Text(text) if !text.is_empty() => out.push(text),
            MetaValue::Text(_) => {}
            MetaValue::List(values) => {
                for value in values {
                    value.collect_texts(out);
                }
            }
        }
    }
}

impl From<String> for MetaValue {
    fn from(text: String) -> Self {
        MetaValue::Text(text)
    }
}

impl From<&str> for MetaValue {
    fn from(text: &str) -> Self {
        MetaValue::Text(text.to_string())
    }
}

impl<T: Into<MetaValue>> From<Vec<T>> for MetaValue {
    fn from(values: Vec<T>) -> Self {
        MetaValue::List(values.into_iter().map(Into::into).collect())
    }
}

/// A reference to a stored file, such as an uploaded image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    /// Public URL of the file, absolute or relative to the site
    pub url: String,

    /// Whether the referenced file is actually present
    #[serde(default = "default_exists")]
    pub exists: bool,
}

fn default_exists() -> bool {
    true
}

impl Asset {
    /// An existing asset at the given URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            exists: true,
        }
    }

    /// A dangling reference whose file is gone.
    pub fn missing(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            exists: false,
        }
    }

    /// True when the file exists and has a usable URL.
    pub fn exists(&self) -> bool {
        self.exists && !self.url.is_empty()
    }

    /// The asset URL, made absolute against `base` when it is relative.
    ///
    /// Relative URLs are returned unchanged when there is no base or the join
    /// fails.
    pub fn absolute_url(&self, base: Option<&Url>) -> String {
        if Url::parse(&self.url).is_ok() {
            return self.url.clone();
        }
        match base {
            Some(base) => base
                .join(&self.url)
                .map(|u| u.to_string())
                .unwrap_or_else(|_| self.url.clone()),
            None => self.url.clone(),
        }
    }
}

/// Key into the configured type mappings: a semantic name and optional sub-name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeKey {
    pub name: String,
    pub subname: Option<String>,
}

impl TypeKey {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            subname: None,
        }
    }

    pub fn with_subname(name: impl Into<String>, subname: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            subname: Some(subname.into()),
        }
    }
}

impl Default for TypeKey {
    fn default() -> Self {
        Self::new("default")
    }
}

/// Read-only view of a page, as supplied by the host.
///
/// Every method is optional. `None` (or an empty string) means the page has
/// nothing for that field.
pub trait MetaSource {
    /// Plain page title
    fn title(&self) -> Option<String> {
        None
    }

    /// Title override for metadata
    fn meta_title(&self) -> Option<String> {
        None
    }

    /// Absolute link override for metadata
    fn meta_absolute_link(&self) -> Option<String> {
        None
    }

    /// The page's own absolute link
    fn absolute_link(&self) -> Option<String> {
        None
    }

    /// Site-relative link, resolved against the site base URL as a last resort
    fn link(&self) -> Option<String> {
        None
    }

    /// Image(s) chosen for metadata
    fn meta_image(&self) -> Option<Vec<Asset>> {
        None
    }

    /// Description override for metadata
    fn meta_description(&self) -> Option<String> {
        None
    }

    /// Length-limited summary of the page content
    fn meta_summary_limited(&self) -> Option<String> {
        None
    }

    /// Explicit Open Graph type, bypassing the configured mappings
    fn og_type(&self) -> Option<String> {
        None
    }

    /// Which configured type mapping applies to this page
    fn og_type_key(&self) -> TypeKey {
        TypeKey::default()
    }

    /// Host-defined field named by a custom tag mapping entry
    fn field(&self, _name: &str) -> Option<MetaValue> {
        None
    }
}

/// Resolves the content locale for a page (e.g. `"en_US"`).
///
/// Hosts usually back this with their routing layer, which knows which locale
/// a page is served under.
pub trait LocaleResolver {
    fn content_locale_for(&self, subject: &dyn MetaSource) -> Option<String>;
}

impl<F> LocaleResolver for F
where
    F: Fn(&dyn MetaSource) -> Option<String>,
{
    fn content_locale_for(&self, subject: &dyn MetaSource) -> Option<String> {
        self(subject)
    }
}

/// Locale resolver that answers the same locale for every page.
#[derive(Debug, Clone, Default)]
pub struct SiteLocale(pub Option<String>);

impl LocaleResolver for SiteLocale {
    fn content_locale_for(&self, _subject: &dyn MetaSource) -> Option<String> {
        self.0.clone()
    }
}
