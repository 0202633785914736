//! Tag resolution
//!
//! [`TagMapper`] turns a page into an ordered [`MetaTagSet`]. Each Open Graph
//! field has its own fallback policy, expressed as a [`FallbackChain`]:
//!
//! | Field         | Candidates, in order                                        |
//! |---------------|-------------------------------------------------------------|
//! | `title`       | meta title, page title                                      |
//! | `url`         | meta absolute link, absolute link, link joined to base URL  |
//! | `image`       | existing meta images, site large icon                       |
//! | `description` | meta description, limited summary                           |
//! | `site_name`   | site title                                                  |
//! | `locale`      | locale resolver                                             |
//! | `type`        | page override, page's type mapping, `default` mapping, `"website"` |

use tracing::debug;

use crate::config::{Accessor, OpenGraphConfig, SiteConfig, TagMapping};
use crate::fallback::FallbackChain;
use crate::page::PageTags;
use crate::prefix::build_prefix_attribute;
use crate::render::append_to_head;
use crate::source::{LocaleResolver, MetaSource, MetaValue, SiteLocale};
use crate::tags::{MetaTag, MetaTagSet};
use crate::types::{DEFAULT_TYPE, NamespaceRegistry, top_level_namespace};

/// Resolves Open Graph values and tags for pages.
///
/// Built once from configuration at application setup and shared across
/// renders; resolution holds no mutable state.
///
/// # Example
///
/// ```
/// use og_meta::{MetaSource, OpenGraphConfig, SiteConfig, TagMapper};
///
/// struct Page;
///
/// impl MetaSource for Page {
///     fn title(&self) -> Option<String> {
///         Some("About us".to_string())
///     }
/// }
///
/// let site = SiteConfig {
///     title: Some("Example".to_string()),
///     ..Default::default()
/// };
/// let mapper = TagMapper::new(OpenGraphConfig::default(), site);
///
/// let tags = mapper.resolve(&Page);
/// assert_eq!(tags.get("og:title"), Some("About us"));
/// assert_eq!(tags.get("og:type"), Some("website"));
/// assert_eq!(tags.get("og:site_name"), Some("Example"));
/// ```
pub struct TagMapper {
    config: OpenGraphConfig,
    site: SiteConfig,
    registry: NamespaceRegistry,
    locales: Box<dyn LocaleResolver + Send + Sync>,
}

impl TagMapper {
    /// Create a mapper whose locale comes from the site configuration.
    pub fn new(config: OpenGraphConfig, site: SiteConfig) -> Self {
        let registry = config.registry();
        let locales = Box::new(SiteLocale(site.locale.clone()));
        Self {
            config,
            site,
            registry,
            locales,
        }
    }

    /// Use a host-supplied locale resolver.
    pub fn with_locale_resolver(
        mut self,
        resolver: impl LocaleResolver + Send + Sync + 'static,
    ) -> Self {
        self.locales = Box::new(resolver);
        self
    }

    pub fn config(&self) -> &OpenGraphConfig {
        &self.config
    }

    pub fn site(&self) -> &SiteConfig {
        &self.site
    }

    pub fn registry(&self) -> &NamespaceRegistry {
        &self.registry
    }

    /// View of the Open Graph values for one page.
    pub fn page<'a>(&'a self, subject: &'a dyn MetaSource) -> PageTags<'a> {
        PageTags::new(self, subject)
    }

    pub fn og_title(&self, subject: &dyn MetaSource) -> Option<String> {
        FallbackChain::new("title")
            .or("meta_title", || subject.meta_title())
            .or("title", || subject.title())
            .resolve()
    }

    /// The page's type. Never empty.
    pub fn og_type(&self, subject: &dyn MetaSource) -> String {
        let key = subject.og_type_key();
        let types = &self.config.types;

        FallbackChain::new("type")
            .or("og_type", || subject.og_type())
            .or("type_mapping", || {
                types
                    .lookup(&key.name, key.subname.as_deref())
                    .map(str::to_string)
            })
            .or("default_mapping", || {
                types.lookup("default", None).map(str::to_string)
            })
            .resolve()
            .unwrap_or_else(|| DEFAULT_TYPE.to_string())
    }

    /// Namespace segment of the page's type (`"video"` for `"video.movie"`).
    pub fn og_type_namespace(&self, subject: &dyn MetaSource) -> Option<String> {
        let og_type = self.og_type(subject);
        Some(top_level_namespace(&og_type))
            .filter(|ns| !ns.is_empty())
            .map(str::to_string)
    }

    pub fn og_url(&self, subject: &dyn MetaSource) -> Option<String> {
        let base = self.site.base_url.as_ref();

        FallbackChain::new("url")
            .or("meta_absolute_link", || subject.meta_absolute_link())
            .or("absolute_link", || subject.absolute_link())
            .or("link", || {
                let link = subject.link()?;
                base?.join(&link).ok().map(|url| url.to_string())
            })
            .resolve()
    }

    /// Image URL(s). Several existing meta images produce a list.
    pub fn og_image(&self, subject: &dyn MetaSource) -> Option<MetaValue> {
        let base = self.site.base_url.as_ref();

        FallbackChain::new("image")
            .or("meta_image", || {
                let urls: Vec<String> = subject
                    .meta_image()?
                    .iter()
                    .filter(|asset| asset.exists())
                    .map(|asset| asset.absolute_url(base))
                    .collect();
                Some(MetaValue::from(urls))
            })
            .or("app_icon_large", || {
                self.site
                    .app_icon_large()
                    .map(|icon| MetaValue::from(icon.absolute_url(base)))
            })
            .resolve()
    }

    pub fn og_description(&self, subject: &dyn MetaSource) -> Option<String> {
        FallbackChain::new("description")
            .or("meta_description", || subject.meta_description())
            .or("meta_summary_limited", || subject.meta_summary_limited())
            .resolve()
    }

    /// Always the site title; pages cannot override it.
    pub fn og_site_name(&self) -> Option<String> {
        FallbackChain::new("site_name")
            .or("site_title", || self.site.title.clone())
            .resolve()
    }

    pub fn og_locale(&self, subject: &dyn MetaSource) -> Option<String> {
        FallbackChain::new("locale")
            .or("locale_resolver", || self.locales.content_locale_for(subject))
            .resolve()
    }

    /// The `prefix` attribute for the page's `<head>` tag.
    pub fn og_prefix(&self, subject: &dyn MetaSource) -> String {
        build_prefix_attribute(&self.registry, &self.og_type(subject))
    }

    /// Content for one accessor, or `None` when there is nothing to emit.
    pub fn value_for(&self, accessor: &Accessor, subject: &dyn MetaSource) -> Option<MetaValue> {
        match accessor {
            Accessor::Title => self.og_title(subject).map(MetaValue::from),
            Accessor::Type => Some(MetaValue::from(self.og_type(subject))),
            Accessor::Url => self.og_url(subject).map(MetaValue::from),
            Accessor::Image => self.og_image(subject),
            Accessor::Description => self.og_description(subject).map(MetaValue::from),
            Accessor::SiteName => self.og_site_name().map(MetaValue::from),
            Accessor::Locale => self.og_locale(subject).map(MetaValue::from),
            Accessor::TypeNamespace => self.og_type_namespace(subject).map(MetaValue::from),
            Accessor::Custom(name) => {
                let value = subject.field(name);
                if value.is_none() {
                    debug!(accessor = %name, "page does not supply custom field");
                }
                value
            }
        }
    }

    /// Resolve the configured tags for a page.
    pub fn resolve(&self, subject: &dyn MetaSource) -> MetaTagSet {
        self.resolve_with(subject, &self.config.metadata)
    }

    /// Resolve tags for a page using an explicit tag mapping.
    ///
    /// Tags follow mapping order. Empty values are skipped, and list values
    /// produce one tag per element.
    pub fn resolve_with(&self, subject: &dyn MetaSource, mapping: &TagMapping) -> MetaTagSet {
        let mut tags = MetaTagSet::new();

        for (suffix, accessor) in mapping.iter() {
            let property = format!("og:{suffix}");
            match self.value_for(accessor, subject) {
                Some(value) if !value.is_empty() => push_value(&mut tags, &property, value),
                _ => debug!(%property, %accessor, "omitting tag without content"),
            }
        }

        tags
    }

    /// Append the page's tags to existing head markup.
    pub fn meta_tags(&self, subject: &dyn MetaSource, markup: &mut String) {
        append_to_head(markup, &self.resolve(subject));
    }
}

fn push_value(tags: &mut MetaTagSet, property: &str, value: MetaValue) {
    match value {
        MetaValue::Text(content) => {
            if !content.is_empty() {
                tags.push(MetaTag::new(property, content));
            }
        }
        MetaValue::List(values) => {
            for value in values {
                push_value(tags, property, value);
            }
        }
    }
}
