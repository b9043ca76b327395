//! Catalog scraper service
//!
//! Composes fetch → parse → extract for every catalog operation. Parsed
//! documents are never held across an `.await`, which keeps every returned
//! future `Send`.

use crate::domain::{Course, CourseMetadata, Lecture, LectureMetadata, Subject, SubjectStub};
use crate::infrastructure::config::ScraperConfig;
use crate::infrastructure::parsing::{
    ContextualParser, CourseListParser, CoursePageParser, Document, LectureDetailParser,
    LectureParser, ParseContext, SubjectDetailParser, SubjectListParser, VideoIdExtractor,
};
use crate::infrastructure::scrape_error::ScrapeResult;
use crate::infrastructure::simple_http_client::HttpClient;
use crate::infrastructure::url_resolver::UrlResolver;
use std::sync::Arc;
use tracing::{debug, info, warn};
use url::Url;

pub struct CatalogScraper {
    config: ScraperConfig,
    client: HttpClient,
    resolver: UrlResolver,
    video_ids: Arc<VideoIdExtractor>,
    subject_list_parser: SubjectListParser,
    subject_detail_parser: SubjectDetailParser,
    course_list_parser: CourseListParser,
    course_page_parser: CoursePageParser,
    lecture_parser: Arc<LectureParser>,
    lecture_detail_parser: LectureDetailParser,
}

impl CatalogScraper {
    /// Create a scraper; fails on an invalid base URL or selector map
    pub fn new(config: ScraperConfig) -> ScrapeResult<Self> {
        config.validate()?;

        let selectors = &config.selectors;
        let video_ids = Arc::new(VideoIdExtractor::with_config(&selectors.player)?);
        let lecture_parser = Arc::new(LectureParser::with_config(
            &selectors.lecture,
            Arc::clone(&video_ids),
        )?);

        Ok(Self {
            client: HttpClient::with_config(&config.http)?,
            resolver: UrlResolver::new(&config.base_url)?,
            subject_list_parser: SubjectListParser::with_config(&selectors.subject_list)?,
            subject_detail_parser: SubjectDetailParser::with_config(&selectors.subject_detail)?,
            course_list_parser: CourseListParser::with_config(
                &selectors.course,
                Arc::clone(&lecture_parser),
            )?,
            course_page_parser: CoursePageParser::with_config(&selectors.course_page)?,
            lecture_detail_parser: LectureDetailParser::with_config(
                &selectors.lecture_detail,
                Arc::clone(&video_ids),
            )?,
            lecture_parser,
            video_ids,
            config,
        })
    }

    pub fn with_defaults() -> ScrapeResult<Self> {
        Self::new(ScraperConfig::default())
    }

    pub const fn config(&self) -> &ScraperConfig {
        &self.config
    }

    pub const fn resolver(&self) -> &UrlResolver {
        &self.resolver
    }

    /// Absolute URL of the subject index page
    pub fn subjects_url(&self) -> String {
        self.resolver.resolve(&self.config.subjects_path)
    }

    /// Subject URL variant that lists every lecture on one page.
    ///
    /// The show-all query is appended to any existing query; a fragment
    /// stays last. Unparseable URLs come back unchanged.
    pub fn showall_url(&self, subject_url: &str) -> String {
        let extra = self.config.showall_query.trim_start_matches('?');
        if extra.is_empty() {
            return subject_url.to_string();
        }

        let Ok(mut url) = Url::parse(subject_url) else {
            warn!("Cannot build show-all URL from '{}'", subject_url);
            return subject_url.to_string();
        };

        let query = match url.query() {
            Some(existing) if !existing.is_empty() => format!("{existing}&{extra}"),
            _ => extra.to_string(),
        };
        url.set_query(Some(&query));
        url.to_string()
    }

    /// Every subject on the catalog index, in page order.
    ///
    /// URLs are absolute and unique; entries without a name are dropped.
    pub async fn list_subjects(&self) -> ScrapeResult<Vec<SubjectStub>> {
        let url = self.subjects_url();
        let body = self.client.fetch_html_string(&url).await?;

        let subjects = self.parse_subject_list(&body, &url)?;
        info!("Listed {} subjects", subjects.len());
        Ok(subjects)
    }

    /// Subject heading, description, paginated courses and the flat
    /// lecture list from the show-all page.
    pub async fn get_subject_metadata(&self, subject_url: &str) -> ScrapeResult<Subject> {
        let body = self.client.fetch_html_string(subject_url).await?;
        let page = {
            let document = Document::parse(&body);
            self.subject_detail_parser
                .parse_with_context(&document, &self.context(subject_url))?
        };

        let courses = self.get_courses(subject_url).await?;

        let showall_url = self.showall_url(subject_url);
        let body = self.client.fetch_html_string(&showall_url).await?;
        let lectures = self.get_lectures(&body, None);

        info!(
            "Subject '{}': {} courses, {} lectures",
            page.name,
            courses.len(),
            lectures.len()
        );

        Ok(Subject {
            name: page.name,
            url: subject_url.to_string(),
            description: page.description,
            courses,
            lectures,
        })
    }

    /// Courses across every page of a subject listing
    pub async fn get_courses(&self, subject_url: &str) -> ScrapeResult<Vec<Course>> {
        let body = self.client.fetch_html_string(subject_url).await?;
        let (mut courses, other_pages) = self.parse_course_listing(&body, subject_url)?;

        if !other_pages.is_empty() {
            debug!("Subject listing has {} more pages", other_pages.len());
        }

        for page_url in &other_pages {
            let body = self.client.fetch_html_string(page_url).await?;
            let (page_courses, _) = self.parse_course_listing(&body, subject_url)?;
            courses.extend(page_courses);
        }

        info!("Collected {} courses from {}", courses.len(), subject_url);
        Ok(courses)
    }

    /// Lectures on a course page, minus those whose name contains
    /// `course_name`.
    ///
    /// A blank `course_name` falls back to the name in the page's
    /// navigation bar.
    pub async fn get_course_metadata(
        &self,
        course_url: &str,
        course_name: &str,
    ) -> ScrapeResult<CourseMetadata> {
        let body = self.client.fetch_html_string(course_url).await?;
        let document = Document::parse(&body);

        let name = if course_name.trim().is_empty() {
            self.course_page_parser
                .parse_with_context(&document, &self.context(course_url))?
                .unwrap_or_default()
        } else {
            if let Some(page_name) = self
                .course_page_parser
                .course_name(&document)
                .filter(|page_name| page_name != course_name)
            {
                debug!("Course page names '{}', caller gave '{}'", page_name, course_name);
            }
            course_name.to_string()
        };

        let filter = Some(name.as_str()).filter(|n| !n.is_empty());
        let lectures = self.lecture_parser.lectures_from_lists(&document, filter);

        Ok(CourseMetadata { name, lectures })
    }

    pub async fn get_lecture_metadata(
        &self,
        lecture_url: &str,
        course_name: Option<&str>,
    ) -> ScrapeResult<LectureMetadata> {
        let body = self.client.fetch_html_string(lecture_url).await?;
        let detail = {
            let document = Document::parse(&body);
            self.lecture_detail_parser
                .parse_with_context(&document, &self.context(lecture_url))?
        };

        Ok(LectureMetadata {
            name: detail.name,
            youtube_id: detail.youtube_id,
            course_name: course_name.map(ToString::to_string),
        })
    }

    /// Lecture-list extraction over already fetched markup.
    ///
    /// With `course_name` set, lectures whose name contains it are
    /// excluded.
    pub fn get_lectures(&self, html: &str, course_name: Option<&str>) -> Vec<Lecture> {
        let document = Document::parse(html);
        self.lecture_parser.lectures_from_lists(&document, course_name)
    }

    /// Course name from already fetched course page markup
    pub fn get_course_name(&self, html: &str) -> Option<String> {
        self.course_page_parser.course_name(&Document::parse(html))
    }

    /// Video id from a lecture URL (text after the `v=` marker)
    pub fn parse_youtube_id(&self, lecture_url: &str) -> Option<String> {
        self.video_ids.from_url(lecture_url)
    }

    /// Video id from the embedded player of a fetched lecture page
    pub fn parse_youtube_id_from_page(&self, html: &str) -> Option<String> {
        self.video_ids.from_page(&Document::parse(html))
    }

    fn context(&self, page_url: &str) -> ParseContext {
        ParseContext::new(page_url.to_string(), self.resolver.clone())
    }

    fn parse_subject_list(&self, body: &str, page_url: &str) -> ScrapeResult<Vec<SubjectStub>> {
        let document = Document::parse(body);
        self.subject_list_parser
            .parse_with_context(&document, &self.context(page_url))
    }

    /// Courses on one listing page plus the URLs of the other pages
    fn parse_course_listing(
        &self,
        body: &str,
        subject_url: &str,
    ) -> ScrapeResult<(Vec<Course>, Vec<String>)> {
        let document = Document::parse(body);
        let context = self.context(subject_url);

        let courses = self.course_list_parser.parse_with_context(&document, &context)?;
        let other_pages = self.course_list_parser.pagination_urls(&document, &context);
        Ok((courses, other_pages))
    }
}
