//! Open Graph and site configuration
//!
//! Both configurations are plain values loaded once at application setup and
//! handed to [`TagMapper`](crate::TagMapper). They deserialize from JSON and,
//! with the `toml` feature, from TOML.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::fs;
use std::path::Path;

use serde::de::{DeserializeOwned, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use url::Url;

use crate::error::{Error, Result};
use crate::source::Asset;
use crate::types::{DEFAULT_TYPE, NamespaceRegistry};

/// Where a tag's content comes from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Accessor {
    /// `OGTitle`
    Title,
    /// `OGType`
    Type,
    /// `OGURL`
    Url,
    /// `OGImage`
    Image,
    /// `OGDescription`
    Description,
    /// `OGSiteName`
    SiteName,
    /// `OGLocale`
    Locale,
    /// `OGTypeNamespace`
    TypeNamespace,
    /// Any other name, answered by [`MetaSource::field`](crate::MetaSource::field)
    Custom(String),
}

impl Accessor {
    pub fn name(&self) -> &str {
        match self {
            Accessor::Title => "OGTitle",
            Accessor::Type => "OGType",
            Accessor::Url => "OGURL",
            Accessor::Image => "OGImage",
            Accessor::Description => "OGDescription",
            Accessor::SiteName => "OGSiteName",
            Accessor::Locale => "OGLocale",
            Accessor::TypeNamespace => "OGTypeNamespace",
            Accessor::Custom(name) => name,
        }
    }
}

impl From<&str> for Accessor {
    fn from(name: &str) -> Self {
        match name {
            "OGTitle" => Accessor::Title,
            "OGType" => Accessor::Type,
            "OGURL" => Accessor::Url,
            "OGImage" => Accessor::Image,
            "OGDescription" => Accessor::Description,
            "OGSiteName" => Accessor::SiteName,
            "OGLocale" => Accessor::Locale,
            "OGTypeNamespace" => Accessor::TypeNamespace,
            other => Accessor::Custom(other.to_string()),
        }
    }
}

impl fmt::Display for Accessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Ordered mapping from tag suffix (`"title"`) to the accessor supplying it.
///
/// Document order is kept when deserializing, and tags are emitted in that
/// order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagMapping {
    entries: Vec<(String, Accessor)>,
}

impl Default for TagMapping {
    fn default() -> Self {
        Self::new()
            .with("title", Accessor::Title)
            .with("type", Accessor::Type)
            .with("url", Accessor::Url)
            .with("image", Accessor::Image)
            .with("description", Accessor::Description)
            .with("site_name", Accessor::SiteName)
            .with("locale", Accessor::Locale)
    }
}

impl TagMapping {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add an entry, replacing the accessor of an existing suffix in place.
    pub fn with(mut self, suffix: impl Into<String>, accessor: impl Into<Accessor>) -> Self {
        self.insert(suffix.into(), accessor.into());
        self
    }

    fn insert(&mut self, suffix: String, accessor: Accessor) {
        match self.entries.iter_mut().find(|(s, _)| *s == suffix) {
            Some(entry) => entry.1 = accessor,
            None => self.entries.push((suffix, accessor)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Accessor)> {
        self.entries.iter().map(|(s, a)| (s.as_str(), a))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for TagMapping {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (suffix, accessor) in &self.entries {
            map.serialize_entry(suffix, accessor.name())?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for TagMapping {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct TagMappingVisitor;

        impl<'de> Visitor<'de> for TagMappingVisitor {
            type Value = TagMapping;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of tag suffixes to accessor names")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut access: A,
            ) -> std::result::Result<Self::Value, A::Error> {
                let mut mapping = TagMapping::new();
                while let Some((suffix, accessor)) = access.next_entry::<String, String>()? {
                    mapping.insert(suffix, Accessor::from(accessor.as_str()));
                }
                Ok(mapping)
            }
        }

        deserializer.deserialize_map(TagMappingVisitor)
    }
}

/// A configured type: a single value, or values keyed by sub-name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TypeMapping {
    Single(String),
    Nested(BTreeMap<String, String>),
}

/// Semantic names (`"default"`, `"blog"`, ...) mapped to Open Graph types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeMappings {
    mappings: HashMap<String, TypeMapping>,
}

impl Default for TypeMappings {
    fn default() -> Self {
        Self::new().with("default", TypeMapping::Single(DEFAULT_TYPE.to_string()))
    }
}

impl TypeMappings {
    /// Create an empty set of mappings.
    pub fn new() -> Self {
        Self {
            mappings: HashMap::new(),
        }
    }

    pub fn with(mut self, name: impl Into<String>, mapping: TypeMapping) -> Self {
        self.mappings.insert(name.into(), mapping);
        self
    }

    /// Look up the type for a name and optional sub-name.
    ///
    /// A single mapping answers regardless of sub-name. A nested mapping only
    /// answers when a sub-name is given and present.
    pub fn lookup(&self, name: &str, subname: Option<&str>) -> Option<&str> {
        match (self.mappings.get(name)?, subname) {
            (TypeMapping::Single(value), _) => Some(value.as_str()),
            (TypeMapping::Nested(values), Some(sub)) => values.get(sub).map(String::as_str),
            (TypeMapping::Nested(_), None) => None,
        }
    }
}

/// Host-level Open Graph configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpenGraphConfig {
    /// Type mappings consulted for `og:type`
    pub types: TypeMappings,

    /// Which tags to emit, in order, and where each gets its content
    pub metadata: TagMapping,

    /// Namespaces added to (or overriding) the standard registry
    pub namespaces: BTreeMap<String, String>,
}

impl OpenGraphConfig {
    /// Parse configuration from a JSON string.
    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Parse configuration from a TOML string.
    #[cfg(feature = "toml")]
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Load configuration from a `.json` or `.toml` file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        load_file(path.as_ref())
    }

    /// The standard namespace registry extended with configured namespaces.
    pub fn registry(&self) -> NamespaceRegistry {
        NamespaceRegistry::default().extended(self.namespaces.clone())
    }
}

/// Site-wide settings read during resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site title, used as `og:site_name`
    pub title: Option<String>,

    /// Large application icon, the fallback `og:image`
    pub app_icon_large: Option<Asset>,

    /// Base URL for resolving relative page links and asset URLs
    pub base_url: Option<Url>,

    /// Content locale served when no other resolver is configured
    pub locale: Option<String>,
}

impl SiteConfig {
    /// Parse site settings from a JSON string.
    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Parse site settings from a TOML string.
    #[cfg(feature = "toml")]
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Load site settings from a `.json` or `.toml` file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        load_file(path.as_ref())
    }

    /// The large icon, when it is set and its file exists.
    pub fn app_icon_large(&self) -> Option<&Asset> {
        self.app_icon_large.as_ref().filter(|icon| icon.exists())
    }
}

fn load_file<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path)?;
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(serde_json::from_str(&content)?),
        #[cfg(feature = "toml")]
        Some("toml") => Ok(toml::from_str(&content)?),
        other => Err(Error::UnsupportedFormat(
            other.unwrap_or_default().to_string(),
        )),
    }
}
