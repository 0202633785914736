//! Example: Render Open Graph tags for a blog post

use og_meta::{Asset, MetaSource, OpenGraphConfig, SiteConfig, TagMapper, TypeKey, escape_attr};

struct BlogPost {
    title: &'static str,
    url_segment: &'static str,
    summary: &'static str,
    images: Vec<Asset>,
}

impl MetaSource for BlogPost {
    fn title(&self) -> Option<String> {
        Some(self.title.to_string())
    }

    fn link(&self) -> Option<String> {
        Some(format!("/blog/{}/", self.url_segment))
    }

    fn meta_image(&self) -> Option<Vec<Asset>> {
        Some(self.images.clone())
    }

    fn meta_summary_limited(&self) -> Option<String> {
        Some(self.summary.to_string())
    }

    fn og_type_key(&self) -> TypeKey {
        TypeKey::with_subname("blog", "post")
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = OpenGraphConfig::from_json_str(
        r#"{
            "types": {
                "default": "website",
                "blog": { "post": "article", "author": "profile" }
            }
        }"#,
    )?;

    let site = SiteConfig::from_json_str(
        r#"{
            "title": "Praxis Journal",
            "app_icon_large": { "url": "/assets/icon-large.png" },
            "base_url": "https://journal.example.org/",
            "locale": "en_AU"
        }"#,
    )?;

    let mapper = TagMapper::new(config, site);

    let post = BlogPost {
        title: "Cats & Dogs: A \"Friendly\" Rivalry",
        url_segment: "cats-and-dogs",
        summary: "Why the <oldest> rivalry isn't what it seems.",
        images: vec![
            Asset::new("/assets/blog/cats.jpg"),
            Asset::missing("/assets/blog/removed.jpg"),
            Asset::new("/assets/blog/dogs.jpg"),
        ],
    };

    let page = mapper.page(&post);

    println!("=== Values ===");
    println!("Type: {}", page.og_type());
    println!("Namespace: {:?}", page.og_type_namespace());
    println!("Title: {:?}", page.og_title());
    println!("URL: {:?}", page.og_url());
    println!("Description: {:?}", page.og_description());
    println!("Site name: {:?}", page.og_site_name());
    println!("Locale: {:?}", page.og_locale());

    println!("\n=== Head ===");
    let mut head = format!("<head{}>\n<title>{}</title>", page.og_prefix(), escape_attr(post.title));
    page.meta_tags(&mut head);
    head.push_str("</head>");
    println!("{head}");

    Ok(())
}
