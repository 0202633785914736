//! Resolved meta tags

use serde::{Deserialize, Serialize};

use crate::render;

/// A single `property`/`content` pair, ready to render.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MetaTag {
    /// Full property name (e.g., "og:title")
    pub property: String,

    /// Unescaped content value
    pub content: String,
}

impl MetaTag {
    /// Create a tag from a property name and content value.
    pub fn new(property: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            content: content.into(),
        }
    }
}

/// Ordered tags produced for one page render.
///
/// Order follows the tag mapping, with list-valued fields expanded in place.
/// A property may appear more than once (e.g. several `og:image` tags).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetaTagSet {
    tags: Vec<MetaTag>,
}

impl MetaTagSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a tag.
    pub fn push(&mut self, tag: MetaTag) {
        self.tags.push(tag);
    }

    /// Content of the first tag with the given property.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.tags
            .iter()
            .find(|tag| tag.property == property)
            .map(|tag| tag.content.as_str())
    }

    /// Content of every tag with the given property, in order.
    pub fn get_all<'a>(&'a self, property: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.tags
            .iter()
            .filter(move |tag| tag.property == property)
            .map(|tag| tag.content.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MetaTag> {
        self.tags.iter()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Render the whole set as `<meta>` lines.
    pub fn render(&self) -> String {
        render::render(&self.tags)
    }
}

impl FromIterator<MetaTag> for MetaTagSet {
    fn from_iter<I: IntoIterator<Item = MetaTag>>(iter: I) -> Self {
        Self {
            tags: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for MetaTagSet {
    type Item = MetaTag;
    type IntoIter = std::vec::IntoIter<MetaTag>;

    fn into_iter(self) -> Self::IntoIter {
        self.tags.into_iter()
    }
}

impl<'a> IntoIterator for &'a MetaTagSet {
    type Item = &'a MetaTag;
    type IntoIter = std::slice::Iter<'a, MetaTag>;

    fn into_iter(self) -> Self::IntoIter {
        self.tags.iter()
    }
}
