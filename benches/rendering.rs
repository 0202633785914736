//! Benchmarks for tag resolution and rendering

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use og_meta::{Asset, MetaSource, MetaTag, OpenGraphConfig, SiteConfig, TagMapper, render};

struct Page {
    images: usize,
}

impl MetaSource for Page {
    fn title(&self) -> Option<String> {
        Some("Benchmarks & \"Measurements\"".to_string())
    }

    fn absolute_link(&self) -> Option<String> {
        Some("https://example.com/benchmarks/".to_string())
    }

    fn meta_image(&self) -> Option<Vec<Asset>> {
        Some(
            (0..self.images)
                .map(|i| Asset::new(format!("/assets/image-{i}.png")))
                .collect(),
        )
    }

    fn meta_summary_limited(&self) -> Option<String> {
        Some("A page with <markup> that needs escaping & more.".to_string())
    }
}

fn mapper() -> TagMapper {
    let site = SiteConfig {
        title: Some("Example".to_string()),
        app_icon_large: Some(Asset::new("/assets/icon.png")),
        base_url: "https://example.com/".parse().ok(),
        locale: Some("en_US".to_string()),
    };
    TagMapper::new(OpenGraphConfig::default(), site)
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");
    let mapper = mapper();

    for images in [0, 1, 10, 100] {
        let page = Page { images };
        group.throughput(Throughput::Elements(images as u64));
        group.bench_with_input(BenchmarkId::new("images", images), &page, |b, page| {
            b.iter(|| mapper.resolve(black_box(page)))
        });
    }

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");

    let plain: Vec<_> = (0..50)
        .map(|i| MetaTag::new("og:image", format!("https://example.com/{i}.png")))
        .collect();
    let escaped: Vec<_> = (0..50)
        .map(|i| MetaTag::new("og:description", format!("Tom & Jerry's <episode> \"{i}\"")))
        .collect();

    group.bench_function("plain", |b| b.iter(|| render(black_box(&plain))));
    group.bench_function("escaped", |b| b.iter(|| render(black_box(&escaped))));

    group.finish();
}

fn bench_head_hook(c: &mut Criterion) {
    let mapper = mapper();
    let page = Page { images: 3 };

    c.bench_function("meta_tags_hook", |b| {
        b.iter(|| {
            let mut head = String::from("<title>Benchmarks</title>");
            mapper.page(black_box(&page)).meta_tags(&mut head);
            head
        })
    });
}

criterion_group!(benches, bench_resolve, bench_render, bench_head_hook);
criterion_main!(benches);
