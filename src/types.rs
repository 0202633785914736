//! Open Graph object types and namespace registry
//!
//! Type names follow the [Open Graph protocol](https://ogp.me/#types). A type is
//! either a bare word (`"article"`) or a dotted `<namespace>.<subtype>` pair
//! (`"video.movie"`), and its namespace segment is what gets declared in the
//! `<head prefix="...">` attribute.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Type used when neither the page nor the configuration names one.
pub const DEFAULT_TYPE: &str = "website";

pub const MUSIC_SONG: &str = "music.song";
pub const MUSIC_ALBUM: &str = "music.album";
pub const MUSIC_PLAYLIST: &str = "music.playlist";
pub const MUSIC_RADIO_STATION: &str = "music.radio_station";

pub const VIDEO_MOVIE: &str = "video.movie";
pub const VIDEO_EPISODE: &str = "video.episode";
pub const VIDEO_TV_SHOW: &str = "video.tv_show";
pub const VIDEO_OTHER: &str = "video.other";

pub const BOOK: &str = "book";
pub const ARTICLE: &str = "article";
pub const PROFILE: &str = "profile";
pub const WEBSITE: &str = "website";

/// Prefix of the base Open Graph namespace.
pub const OG_PREFIX: &str = "og";

/// URI of the base Open Graph namespace, always declared.
pub const OG_NAMESPACE_URI: &str = "http://ogp.me/ns";

const DEFAULT_NAMESPACES: &[(&str, &str)] = &[
    (OG_PREFIX, OG_NAMESPACE_URI),
    ("book", "http://ogp.me/ns/book"),
    ("music", "http://ogp.me/ns/music"),
    ("video", "http://ogp.me/ns/video"),
    ("article", "http://ogp.me/ns/article"),
    ("profile", "http://ogp.me/ns/profile"),
    ("website", "http://ogp.me/ns/website"),
];

/// Mapping from namespace prefix to namespace URI.
///
/// Built once at setup time and read-only afterwards. Host configuration can
/// layer additional prefixes on top of the defaults with [`extended`].
///
/// [`extended`]: NamespaceRegistry::extended
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NamespaceRegistry {
    namespaces: HashMap<String, String>,
}

impl Default for NamespaceRegistry {
    fn default() -> Self {
        Self {
            namespaces: DEFAULT_NAMESPACES
                .iter()
                .map(|(prefix, uri)| (prefix.to_string(), uri.to_string()))
                .collect(),
        }
    }
}

impl NamespaceRegistry {
    /// Create a registry seeded with the standard Open Graph namespaces.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a copy of this registry with the given entries added.
    ///
    /// Entries with an existing prefix replace the previous URI.
    pub fn extended<I, K, V>(&self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut namespaces = self.namespaces.clone();
        namespaces.extend(entries.into_iter().map(|(k, v)| (k.into(), v.into())));
        Self { namespaces }
    }

    /// Look up the namespace URI for a prefix.
    ///
    /// Unknown prefixes answer `None`; callers omit the namespace rather than
    /// treating it as an error.
    pub fn namespace_uri(&self, prefix: &str) -> Option<&str> {
        self.namespaces.get(prefix).map(String::as_str)
    }

    /// Number of registered prefixes.
    pub fn len(&self) -> usize {
        self.namespaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.namespaces.is_empty()
    }
}

/// Namespace segment of an Open Graph type.
///
/// Returns the text before the first `.`, or the whole input when there is no
/// dot. The result is not checked against any registry.
///
/// ```
/// use og_meta::top_level_namespace;
///
/// assert_eq!(top_level_namespace("video.movie"), "video");
/// assert_eq!(top_level_namespace("website"), "website");
/// ```
pub fn top_level_namespace(og_type: &str) -> &str {
    og_type.split_once('.').map_or(og_type, |(ns, _)| ns)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_namespaces() {
        let registry = NamespaceRegistry::default();
        assert_eq!(registry.len(), 7);
        assert_eq!(registry.namespace_uri("og"), Some("http://ogp.me/ns"));
        for prefix in ["book", "music", "video", "article", "profile", "website"] {
            assert_eq!(
                registry.namespace_uri(prefix),
                Some(format!("http://ogp.me/ns/{prefix}").as_str())
            );
        }
    }

    #[test]
    fn test_unknown_prefix() {
        let registry = NamespaceRegistry::default();
        assert_eq!(registry.namespace_uri("fb"), None);
        assert_eq!(registry.namespace_uri(""), None);
        assert_eq!(registry.namespace_uri("OG"), None);
    }

    #[test]
    fn test_extended_registry() {
        let base = NamespaceRegistry::default();
        let registry = base.extended([
            ("fb", "http://ogp.me/ns/fb"),
            ("book", "https://example.org/ns/book"),
        ]);

        assert_eq!(registry.namespace_uri("fb"), Some("http://ogp.me/ns/fb"));
        assert_eq!(
            registry.namespace_uri("book"),
            Some("https://example.org/ns/book")
        );
        // Source registry is left untouched
        assert_eq!(base.namespace_uri("fb"), None);
        assert_eq!(base.namespace_uri("book"), Some("http://ogp.me/ns/book"));
    }

    #[test]
    fn test_top_level_namespace() {
        assert_eq!(top_level_namespace(VIDEO_MOVIE), "video");
        assert_eq!(top_level_namespace(MUSIC_RADIO_STATION), "music");
        assert_eq!(top_level_namespace(WEBSITE), "website");
        assert_eq!(top_level_namespace("a.b.c"), "a");
        assert_eq!(top_level_namespace(""), "");
        assert_eq!(top_level_namespace(".hidden"), "");
    }
}
