//! Parsing throughput for catalog pages
//!
//! Measures extraction over already fetched markup, so network latency is
//! excluded. Fixtures are shared with the integration tests.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lecture_catalog_scraper::infrastructure::parsing::{
    ContextualParser, CourseListParser, Document, LectureParser, ParseContext, SelectorMap,
    VideoIdExtractor,
};
use lecture_catalog_scraper::infrastructure::UrlResolver;
use lecture_catalog_scraper::CatalogScraper;
use std::sync::Arc;

const SUBJECT_PAGE: &str = include_str!("../tests/fixtures/subject_page.html");
const LISTING_PAGE_1: &str = include_str!("../tests/fixtures/listing_page_1.html");
const SUBJECT_SHOWALL: &str = include_str!("../tests/fixtures/subject_showall.html");
const COURSE_PAGE: &str = include_str!("../tests/fixtures/course_page.html");
const LECTURE_PAGE: &str = include_str!("../tests/fixtures/lecture_page.html");
const WATCH_URL: &str = "http://www.academicearth.org/watch?v=7emS3ye3cVU";

/// Show-all page with `copies` lecture lists, approximating a large subject
fn large_showall_page(copies: usize) -> String {
    let start = SUBJECT_SHOWALL.find("<div class=\"lectures-list\">").unwrap_or(0);
    let end = SUBJECT_SHOWALL.rfind("</body>").unwrap_or(SUBJECT_SHOWALL.len());
    let lists = &SUBJECT_SHOWALL[start..end];

    format!("<html><body>{}</body></html>", lists.repeat(copies))
}

fn course_listing(c: &mut Criterion) {
    let selectors = SelectorMap::default();
    let video_ids = Arc::new(VideoIdExtractor::with_config(&selectors.player).unwrap());
    let lectures = Arc::new(LectureParser::with_config(&selectors.lecture, video_ids).unwrap());
    let parser = CourseListParser::with_config(&selectors.course, lectures).unwrap();
    let context = ParseContext::new(
        "http://www.academicearth.org/subjects/history/".to_string(),
        UrlResolver::new("http://www.academicearth.org").unwrap(),
    );

    c.bench_function("courses - subject page", |b| {
        b.iter(|| {
            let document = Document::parse(black_box(SUBJECT_PAGE));
            black_box(parser.parse_with_context(&document, &context).unwrap())
        })
    });

    c.bench_function("courses - pagination links", |b| {
        b.iter(|| {
            let document = Document::parse(black_box(LISTING_PAGE_1));
            black_box(parser.pagination_urls(&document, &context))
        })
    });
}

fn lecture_extraction(c: &mut Criterion) {
    let scraper = CatalogScraper::with_defaults().unwrap();
    let large_page = large_showall_page(200);

    c.bench_function("lectures - show-all page", |b| {
        b.iter(|| black_box(scraper.get_lectures(black_box(SUBJECT_SHOWALL), None)))
    });

    c.bench_function("lectures - course page with name filter", |b| {
        b.iter(|| {
            black_box(
                scraper.get_lectures(black_box(COURSE_PAGE), Some("Introduction to Psychology")),
            )
        })
    });

    c.bench_function("lectures - 600 entry page", |b| {
        b.iter(|| black_box(scraper.get_lectures(black_box(&large_page), None)))
    });
}

fn video_id_extraction(c: &mut Criterion) {
    let extractor = VideoIdExtractor::with_config(&SelectorMap::default().player).unwrap();
    let document = Document::parse(LECTURE_PAGE);

    c.bench_function("video id - from url", |b| {
        b.iter(|| black_box(extractor.from_url(black_box(WATCH_URL))))
    });

    c.bench_function("video id - from embedded player", |b| {
        b.iter(|| black_box(extractor.from_page(&document)))
    });
}

criterion_group!(benches, course_listing, lecture_extraction, video_id_extraction);
criterion_main!(benches);
