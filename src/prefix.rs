//! `<head prefix="...">` attribute construction

use crate::render::escape_attr;
use crate::types::{NamespaceRegistry, OG_NAMESPACE_URI, OG_PREFIX, top_level_namespace};

/// Build the `prefix` attribute for a page's opening `<head>` tag.
///
/// The base `og` namespace is always declared first. The namespace of
/// `page_type` follows when it differs from `og` and the registry knows it;
/// unknown namespaces are left out. The result starts with a space so it can
/// be written straight after the tag name.
///
/// ```
/// use og_meta::{build_prefix_attribute, NamespaceRegistry};
///
/// let registry = NamespaceRegistry::default();
/// assert_eq!(
///     build_prefix_attribute(&registry, "article"),
///     r#" prefix="og: http://ogp.me/ns# article: http://ogp.me/ns/article#""#
/// );
/// ```
pub fn build_prefix_attribute(registry: &NamespaceRegistry, page_type: &str) -> String {
    let og_uri = registry.namespace_uri(OG_PREFIX).unwrap_or(OG_NAMESPACE_URI);
    let mut entries = vec![(OG_PREFIX, og_uri)];

    let ns = top_level_namespace(page_type);
    if !ns.is_empty()
        && ns != OG_PREFIX
        && let Some(uri) = registry.namespace_uri(ns)
    {
        entries.push((ns, uri));
    }

    let joined = entries
        .iter()
        .map(|(name, uri)| format!("{name}: {uri}#"))
        .collect::<Vec<_>>()
        .join(" ");

    format!(" prefix=\"{}\"", escape_attr(&joined))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{MUSIC_SONG, VIDEO_MOVIE, WEBSITE};

    #[test]
    fn test_article_prefix() {
        let registry = NamespaceRegistry::default();
        assert_eq!(
            build_prefix_attribute(&registry, "article"),
            " prefix=\"og: http://ogp.me/ns# article: http://ogp.me/ns/article#\""
        );
    }

    #[test]
    fn test_empty_type() {
        let registry = NamespaceRegistry::default();
        assert_eq!(
            build_prefix_attribute(&registry, ""),
            " prefix=\"og: http://ogp.me/ns#\""
        );
    }

    #[test]
    fn test_dotted_types() {
        let registry = NamespaceRegistry::default();
        assert_eq!(
            build_prefix_attribute(&registry, VIDEO_MOVIE),
            " prefix=\"og: http://ogp.me/ns# video: http://ogp.me/ns/video#\""
        );
        assert_eq!(
            build_prefix_attribute(&registry, MUSIC_SONG),
            " prefix=\"og: http://ogp.me/ns# music: http://ogp.me/ns/music#\""
        );
        assert_eq!(
            build_prefix_attribute(&registry, WEBSITE),
            " prefix=\"og: http://ogp.me/ns# website: http://ogp.me/ns/website#\""
        );
    }

    #[test]
    fn test_unknown_namespace_omitted() {
        let registry = NamespaceRegistry::default();
        assert_eq!(
            build_prefix_attribute(&registry, "restaurant.menu"),
            " prefix=\"og: http://ogp.me/ns#\""
        );
    }

    #[test]
    fn test_og_not_repeated() {
        let registry = NamespaceRegistry::default();
        assert_eq!(
            build_prefix_attribute(&registry, "og.thing"),
            " prefix=\"og: http://ogp.me/ns#\""
        );
    }

    #[test]
    fn test_extended_registry() {
        let registry = NamespaceRegistry::default().extended([
            ("restaurant", "http://ogp.me/ns/restaurant"),
        ]);
        assert_eq!(
            build_prefix_attribute(&registry, "restaurant.menu"),
            " prefix=\"og: http://ogp.me/ns# restaurant: http://ogp.me/ns/restaurant#\""
        );
    }

    #[test]
    fn test_og_always_declared() {
        let registry = NamespaceRegistry::default().extended([("og", "https://ogp.me/ns")]);
        assert_eq!(
            build_prefix_attribute(&registry, ""),
            " prefix=\"og: https://ogp.me/ns#\""
        );
    }

    #[test]
    fn test_namespace_uri_is_escaped() {
        let registry = NamespaceRegistry::default()
            .extended([("shop", "https://example.org/ns?a=1&b=\"2\"")]);
        assert_eq!(
            build_prefix_attribute(&registry, "shop.product"),
            " prefix=\"og: http://ogp.me/ns# shop: https://example.org/ns?a=1&amp;b=&quot;2&quot;#\""
        );
    }
}
