//! Subject index and subject detail page parsers

use super::config::{SubjectDetailSelectors, SubjectListSelectors};
use super::{compile_selector, ContextualParser, Document, ParseContext};
use crate::domain::SubjectStub;
use crate::infrastructure::scrape_error::ScrapeResult;
use scraper::Selector;
use std::collections::HashSet;
use tracing::{debug, warn};

/// Parser for the catalog index page listing every subject
pub struct SubjectListParser {
    content_selector: Selector,
    link_selector: Selector,
}

impl SubjectListParser {
    pub fn with_config(selectors: &SubjectListSelectors) -> ScrapeResult<Self> {
        Ok(Self {
            content_selector: compile_selector(&selectors.content)?,
            link_selector: compile_selector(&selectors.link)?,
        })
    }
}

impl ContextualParser for SubjectListParser {
    type Output = Vec<SubjectStub>;
    type Context = ParseContext;

    /// Deduplicates by resolved URL before dropping unnamed entries, so an
    /// unnamed anchor still claims its URL.
    fn parse_with_context(
        &self,
        document: &Document,
        context: &Self::Context,
    ) -> ScrapeResult<Self::Output> {
        let content = document.required(&self.content_selector, "primary content")?;

        let mut seen = HashSet::new();
        let mut subjects = Vec::new();

        for link in content.find_all(&self.link_selector) {
            let Some(href) = link.attr("href") else {
                continue;
            };

            let url = context.resolver.resolve(href);
            if seen.insert(url.clone()) {
                subjects.push(SubjectStub {
                    name: link.own_string().map(|s| s.trim().to_string()).unwrap_or_default(),
                    url,
                });
            }
        }

        subjects.retain(|subject| !subject.name.is_empty() && !subject.url.is_empty());
        debug!("Found {} subjects on {}", subjects.len(), context.page_url);
        Ok(subjects)
    }
}

/// Heading and description of a subject page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectPage {
    pub name: String,
    pub description: String,
}

pub struct SubjectDetailParser {
    name_selector: Selector,
    description_selector: Selector,
}

impl SubjectDetailParser {
    pub fn with_config(selectors: &SubjectDetailSelectors) -> ScrapeResult<Self> {
        Ok(Self {
            name_selector: compile_selector(&selectors.name)?,
            description_selector: compile_selector(&selectors.description)?,
        })
    }
}

impl ContextualParser for SubjectDetailParser {
    type Output = SubjectPage;
    type Context = ParseContext;

    fn parse_with_context(
        &self,
        document: &Document,
        context: &Self::Context,
    ) -> ScrapeResult<Self::Output> {
        let name = document
            .find_first(&self.name_selector)
            .map(|heading| heading.text())
            .unwrap_or_else(|| {
                warn!("Subject heading not found on {}", context.page_url);
                String::new()
            });

        // One line per child that carries text of its own
        let description = document
            .find_first(&self.description_selector)
            .map(|block| block.child_strings().join("\n"))
            .unwrap_or_else(|| {
                warn!("Subject description not found on {}", context.page_url);
                String::new()
            });

        Ok(SubjectPage { name, description })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::parsing::SelectorMap;
    use crate::infrastructure::scrape_error::ScrapeError;
    use crate::infrastructure::url_resolver::UrlResolver;

    const BASE: &str = "http://www.academicearth.org";

    fn context() -> ParseContext {
        ParseContext::new(
            format!("{BASE}/online-college-courses"),
            UrlResolver::new(BASE).unwrap(),
        )
    }

    fn list_parser() -> SubjectListParser {
        SubjectListParser::with_config(&SelectorMap::default().subject_list).unwrap()
    }

    fn detail_parser() -> SubjectDetailParser {
        SubjectDetailParser::with_config(&SelectorMap::default().subject_detail).unwrap()
    }

    #[test]
    fn test_subject_list_dedupes_and_filters() {
        let doc = Document::parse(
            r#"<html><body>
                 <nav><a href="/outside">Outside</a></nav>
                 <article>
                   <a href="/subjects/physics">Physics</a>
                   <a href="http://www.academicearth.org/subjects/physics">Physics again</a>
                   <a href="/subjects/math"><img src="math.png"></a>
                   <a href="/subjects/history">History</a>
                   <a>No link</a>
                   <a href="/subjects/art"><b>Art</b> &amp; <i>Design</i></a>
                 </article>
               </body></html>"#,
        );

        let subjects = list_parser().parse_with_context(&doc, &context()).unwrap();
        assert_eq!(
            subjects,
            vec![
                SubjectStub {
                    name: "Physics".to_string(),
                    url: format!("{BASE}/subjects/physics"),
                },
                SubjectStub {
                    name: "History".to_string(),
                    url: format!("{BASE}/subjects/history"),
                },
            ]
        );
    }

    #[test]
    fn test_subject_list_urls_unique_and_named() {
        let doc = Document::parse(
            r#"<article>
                 <a href="a">A</a><a href="/a">A2</a><a href="b">B</a><a href="b">B2</a>
               </article>"#,
        );
        let subjects = list_parser().parse_with_context(&doc, &context()).unwrap();

        let urls: HashSet<_> = subjects.iter().map(|s| s.url.as_str()).collect();
        assert_eq!(urls.len(), subjects.len());
        assert!(subjects.iter().all(|s| !s.name.is_empty() && !s.url.is_empty()));
        assert_eq!(subjects.len(), 2);
    }

    #[test]
    fn test_subject_list_drops_wrapped_link_text() {
        let doc = Document::parse(
            r#"<article>
                 <a href="/subjects/math"><span>Mathematics</span></a>
                 <a href="/subjects/math">Mathematics</a>
                 <a href="/subjects/law">Law</a>
               </article>"#,
        );
        let subjects = list_parser().parse_with_context(&doc, &context()).unwrap();

        assert_eq!(
            subjects,
            vec![SubjectStub {
                name: "Law".to_string(),
                url: format!("{BASE}/subjects/law"),
            }]
        );
    }

    #[test]
    fn test_subject_list_requires_content_element() {
        let doc = Document::parse(r#"<html><body><a href="/x">X</a></body></html>"#);
        let err = list_parser().parse_with_context(&doc, &context()).unwrap_err();
        assert!(matches!(err, ScrapeError::MissingElement { .. }));
    }

    #[test]
    fn test_subject_detail() {
        let doc = Document::parse(
            r#"<html><body>
                 <article><h1>Computer Science</h1></article>
                 <div itemprop="description">
                   <p>Learn about algorithms.</p>
                   <p>And data structures.</p>
                 </div>
               </body></html>"#,
        );
        let parser = detail_parser();

        let page = parser.parse_with_context(&doc, &context()).unwrap();
        assert_eq!(page.name, "Computer Science");
        assert_eq!(page.description, "Learn about algorithms.\nAnd data structures.");
    }

    #[test]
    fn test_subject_detail_missing_parts_are_empty() {
        let doc = Document::parse("<html><body><p>Nothing here</p></body></html>");
        let parser = detail_parser();

        let page = parser.parse_with_context(&doc, &context()).unwrap();
        assert_eq!(page, SubjectPage { name: String::new(), description: String::new() });
    }
}
