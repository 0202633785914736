//! # og-meta
//!
//! Render [Open Graph](https://ogp.me/) meta tags for pages served by a
//! content management system.
//!
//! ## Features
//!
//! - Resolve `og:title`, `og:type`, `og:url`, `og:image`, `og:description`,
//!   `og:site_name` and `og:locale` from a page with per-field fallbacks
//! - Configurable tag mapping, type mappings and extra namespaces (JSON/TOML)
//! - Escaped `<meta property="..." content="..." />` rendering
//! - `<head prefix="...">` attribute built from the page's type
//!
//! ## Quick Start
//!
//! ```rust
//! use og_meta::{Asset, MetaSource, OpenGraphConfig, SiteConfig, TagMapper};
//!
//! struct Article {
//!     title: String,
//!     summary: String,
//! }
//!
//! impl MetaSource for Article {
//!     fn title(&self) -> Option<String> {
//!         Some(self.title.clone())
//!     }
//!
//!     fn absolute_link(&self) -> Option<String> {
//!         Some("https://example.org/news/launch/".to_string())
//!     }
//!
//!     fn meta_summary_limited(&self) -> Option<String> {
//!         Some(self.summary.clone())
//!     }
//! }
//!
//! let site = SiteConfig {
//!     title: Some("Example".to_string()),
//!     app_icon_large: Some(Asset::new("https://example.org/icon.png")),
//!     locale: Some("en_US".to_string()),
//!     ..Default::default()
//! };
//! let mapper = TagMapper::new(OpenGraphConfig::default(), site);
//!
//! let article = Article {
//!     title: "Launch".to_string(),
//!     summary: "We launched.".to_string(),
//! };
//!
//! let mut head = "<title>Launch</title>".to_string();
//! mapper.page(&article).meta_tags(&mut head);
//!
//! assert!(head.contains("<meta property=\"og:title\" content=\"Launch\" />"));
//! assert!(head.contains("<meta property=\"og:description\" content=\"We launched.\" />"));
//! assert_eq!(
//!     mapper.page(&article).og_prefix(),
//!     " prefix=\"og: http://ogp.me/ns# website: http://ogp.me/ns/website#\""
//! );
//! ```
//!
//! ## Configuration
//!
//! ```rust
//! use og_meta::OpenGraphConfig;
//!
//! let config = OpenGraphConfig::from_json_str(r#"{
//!     "types": { "default": "website", "blog": { "post": "article" } },
//!     "metadata": { "title": "OGTitle", "type": "OGType", "url": "OGURL" }
//! }"#).unwrap();
//!
//! assert_eq!(config.types.lookup("blog", Some("post")), Some("article"));
//! assert_eq!(config.metadata.len(), 3);
//! ```

mod config;
mod error;
mod fallback;
mod mapper;
mod page;
mod prefix;
mod render;
mod source;
mod tags;
pub mod types;

pub use config::{Accessor, OpenGraphConfig, SiteConfig, TagMapping, TypeMapping, TypeMappings};
pub use error::{Error, Result};
pub use fallback::{Blank, FallbackChain};
pub use mapper::TagMapper;
pub use page::PageTags;
pub use prefix::build_prefix_attribute;
pub use render::{append_to_head, escape_attr, render, render_tag};
pub use source::{Asset, LocaleResolver, MetaSource, MetaValue, SiteLocale, TypeKey};
pub use tags::{MetaTag, MetaTagSet};
pub use types::{NamespaceRegistry, top_level_namespace};
