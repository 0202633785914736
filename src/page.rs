//! Per-page access to resolved Open Graph values

use crate::mapper::TagMapper;
use crate::source::{MetaSource, MetaValue};
use crate::tags::MetaTagSet;

/// Open Graph values for a single page.
///
/// Templates and other host code read individual values from here, and the
/// head assembly step calls [`meta_tags`](PageTags::meta_tags).
#[derive(Clone, Copy)]
pub struct PageTags<'a> {
    mapper: &'a TagMapper,
    subject: &'a dyn MetaSource,
}

impl<'a> PageTags<'a> {
    pub(crate) fn new(mapper: &'a TagMapper, subject: &'a dyn MetaSource) -> Self {
        Self { mapper, subject }
    }

    pub fn og_type(&self) -> String {
        self.mapper.og_type(self.subject)
    }

    pub fn og_type_namespace(&self) -> Option<String> {
        self.mapper.og_type_namespace(self.subject)
    }

    pub fn og_title(&self) -> Option<String> {
        self.mapper.og_title(self.subject)
    }

    pub fn og_url(&self) -> Option<String> {
        self.mapper.og_url(self.subject)
    }

    pub fn og_image(&self) -> Option<MetaValue> {
        self.mapper.og_image(self.subject)
    }

    pub fn og_description(&self) -> Option<String> {
        self.mapper.og_description(self.subject)
    }

    pub fn og_site_name(&self) -> Option<String> {
        self.mapper.og_site_name()
    }

    pub fn og_locale(&self) -> Option<String> {
        self.mapper.og_locale(self.subject)
    }

    /// The ` prefix="..."` attribute for the opening `<head>` tag.
    pub fn og_prefix(&self) -> String {
        self.mapper.og_prefix(self.subject)
    }

    /// All configured tags for the page.
    pub fn tags(&self) -> MetaTagSet {
        self.mapper.resolve(self.subject)
    }

    /// Head assembly hook: append the page's tags to `markup`.
    pub fn meta_tags(&self, markup: &mut String) {
        self.mapper.meta_tags(self.subject, markup);
    }
}
