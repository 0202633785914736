//! Meta tag serialization
//!
//! Renders resolved tags as `<meta property="..." content="..." />` lines and
//! appends them to existing head markup.

use std::borrow::Cow;

use crate::tags::{MetaTag, MetaTagSet};

const ESCAPE_CHARS: [char; 5] = ['&', '<', '>', '"', '\''];

/// Escape a value for use inside a double-quoted HTML attribute.
///
/// Borrows the input when nothing needs escaping.
///
/// ```
/// use og_meta::escape_attr;
///
/// assert_eq!(escape_attr("A & B"), "A &amp; B");
/// assert_eq!(escape_attr("it's \"<b>\""), "it&#039;s &quot;&lt;b&gt;&quot;");
/// ```
pub fn escape_attr(s: &str) -> Cow<'_, str> {
    if !s.contains(ESCAPE_CHARS) {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len() + 16);
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#039;"),
            _ => result.push(c),
        }
    }
    Cow::Owned(result)
}

/// Render a single meta tag line, including the trailing newline.
pub fn render_tag(property: &str, content: &str) -> String {
    let mut out = String::with_capacity(property.len() + content.len() + 32);
    write_tag(&mut out, property, content);
    out
}

fn write_tag(out: &mut String, property: &str, content: &str) {
    out.push_str("<meta property=\"");
    out.push_str(&escape_attr(property));
    out.push_str("\" content=\"");
    out.push_str(&escape_attr(content));
    out.push_str("\" />\n");
}

/// Render every tag in order as one block of lines.
///
/// ```
/// use og_meta::{render, MetaTag};
///
/// let tags = [MetaTag::new("og:title", "A & B")];
/// assert_eq!(render(&tags), "<meta property=\"og:title\" content=\"A &amp; B\" />\n");
/// ```
pub fn render<'a, I>(tags: I) -> String
where
    I: IntoIterator<Item = &'a MetaTag>,
{
    let mut out = String::new();
    for tag in tags {
        write_tag(&mut out, &tag.property, &tag.content);
    }
    out
}

/// Append rendered tags to existing head markup.
///
/// The markup is first terminated with a newline if it does not already end
/// with one, so the new block always starts on its own line.
pub fn append_to_head(markup: &mut String, tags: &MetaTagSet) {
    if !markup.ends_with('\n') {
        markup.push('\n');
    }
    for tag in tags {
        write_tag(markup, &tag.property, &tag.content);
    }
}

#[cfg(test)]
mod tests {
    use scraper::{Html, Selector};

    use super::*;

    #[test]
    fn test_escape_attr() {
        assert_eq!(escape_attr("plain text"), "plain text");
        assert!(matches!(escape_attr("plain text"), Cow::Borrowed(_)));
        assert_eq!(escape_attr("<&>\"'"), "&lt;&amp;&gt;&quot;&#039;");
        assert_eq!(escape_attr("&amp;"), "&amp;amp;");
        assert_eq!(escape_attr("Café ☕ & co"), "Café ☕ &amp; co");
    }

    #[test]
    fn test_render_tag() {
        assert_eq!(
            render_tag("og:title", "A & B"),
            "<meta property=\"og:title\" content=\"A &amp; B\" />\n"
        );
        assert_eq!(
            render_tag("og:\"x\"", "y"),
            "<meta property=\"og:&quot;x&quot;\" content=\"y\" />\n"
        );
    }

    #[test]
    fn test_render_preserves_order() {
        let tags = vec![
            MetaTag::new("og:title", "Home"),
            MetaTag::new("og:image", "https://example.org/a.png"),
            MetaTag::new("og:image", "https://example.org/b.png"),
        ];

        assert_eq!(
            render(&tags),
            "<meta property=\"og:title\" content=\"Home\" />\n\
             <meta property=\"og:image\" content=\"https://example.org/a.png\" />\n\
             <meta property=\"og:image\" content=\"https://example.org/b.png\" />\n"
        );
        assert_eq!(render(&Vec::<MetaTag>::new()), "");
    }

    #[test]
    fn test_append_inserts_newline() {
        let tags: MetaTagSet = vec![MetaTag::new("og:title", "X")].into_iter().collect();

        let mut markup = "<title>X</title>".to_string();
        append_to_head(&mut markup, &tags);
        assert_eq!(
            markup,
            "<title>X</title>\n<meta property=\"og:title\" content=\"X\" />\n"
        );
    }

    #[test]
    fn test_append_keeps_existing_newline() {
        let tags: MetaTagSet = vec![MetaTag::new("og:title", "X")].into_iter().collect();

        let mut markup = "<title>X</title>\n".to_string();
        append_to_head(&mut markup, &tags);
        assert_eq!(
            markup,
            "<title>X</title>\n<meta property=\"og:title\" content=\"X\" />\n"
        );
    }

    #[test]
    fn test_append_empty_set_still_terminates_line() {
        let mut markup = "<title>X</title>".to_string();
        append_to_head(&mut markup, &MetaTagSet::new());
        assert_eq!(markup, "<title>X</title>\n");
    }

    #[test]
    fn test_append_to_empty_markup() {
        let tags: MetaTagSet = vec![MetaTag::new("og:title", "X")].into_iter().collect();

        let mut markup = String::new();
        append_to_head(&mut markup, &tags);
        assert_eq!(markup, "\n<meta property=\"og:title\" content=\"X\" />\n");

        let mut markup = String::new();
        append_to_head(&mut markup, &MetaTagSet::new());
        assert_eq!(markup, "\n");
    }

    #[test]
    fn test_rendered_markup_parses_back() {
        let tags = vec![
            MetaTag::new("og:title", "Tom & Jerry's \"Show\" <live>"),
            MetaTag::new("og:site_name", "Example"),
        ];
        let html = format!("<html><head>{}</head></html>", render(&tags));

        let document = Html::parse_document(&html);
        let selector = Selector::parse("meta[property]").unwrap();
        let parsed: Vec<(String, String)> = document
            .select(&selector)
            .map(|el| {
                let el = el.value();
                (
                    el.attr("property").unwrap().to_string(),
                    el.attr("content").unwrap().to_string(),
                )
            })
            .collect();

        assert_eq!(
            parsed,
            vec![
                (
                    "og:title".to_string(),
                    "Tom & Jerry's \"Show\" <live>".to_string()
                ),
                ("og:site_name".to_string(), "Example".to_string()),
            ]
        );
    }
}
