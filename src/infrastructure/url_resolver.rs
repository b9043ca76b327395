//! Absolute URL resolution against the catalog origin

use super::scrape_error::{ScrapeError, ScrapeResult};
use tracing::debug;
use url::Url;

/// Joins catalog paths onto a fixed base origin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlResolver {
    base: Url,
}

impl UrlResolver {
    pub fn new(base_url: &str) -> ScrapeResult<Self> {
        let base = Url::parse(base_url).map_err(|e| ScrapeError::InvalidUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self { base })
    }

    /// Resolve `path` against the base origin.
    ///
    /// Absolute URLs come back unchanged, root-relative paths are appended
    /// to the origin and anything else is joined like a browser would.
    /// Paths that cannot be joined are passed through as-is.
    pub fn resolve(&self, path: &str) -> String {
        Self::join(&self.base, path)
    }

    /// Resolve `path` against an arbitrary page URL instead of the origin
    pub fn resolve_against(&self, page_url: &str, path: &str) -> String {
        match Url::parse(page_url) {
            Ok(page) => Self::join(&page, path),
            Err(_) => self.resolve(path),
        }
    }

    fn join(base: &Url, path: &str) -> String {
        if Url::parse(path).is_ok() {
            return path.to_string();
        }

        match base.join(path) {
            Ok(url) => url.to_string(),
            Err(e) => {
                debug!("Passing through unresolvable path '{}': {}", path, e);
                path.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    const ORIGIN: &str = "http://www.academicearth.org";

    #[rstest]
    #[case(
        "http://www.academicearth.org/subjects/physics",
        "http://www.academicearth.org/subjects/physics"
    )]
    #[case("https://other.example.com/x?y=1", "https://other.example.com/x?y=1")]
    #[case("/subjects/physics", "http://www.academicearth.org/subjects/physics")]
    #[case("online-college-courses", "http://www.academicearth.org/online-college-courses")]
    #[case("/courses/?page=2", "http://www.academicearth.org/courses/?page=2")]
    fn test_resolve(#[case] path: &str, #[case] expected: &str) {
        let resolver = UrlResolver::new(ORIGIN).unwrap();
        assert_eq!(resolver.resolve(path), expected);
    }

    #[test]
    fn test_resolve_against_page() {
        let resolver = UrlResolver::new(ORIGIN).unwrap();
        assert_eq!(
            resolver.resolve_against("http://www.academicearth.org/subjects/physics/", "page/2/"),
            "http://www.academicearth.org/subjects/physics/page/2/"
        );
        assert_eq!(
            resolver.resolve_against("http://www.academicearth.org/subjects/physics", "?page=3"),
            "http://www.academicearth.org/subjects/physics?page=3"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let result = UrlResolver::new("not a url");
        assert!(matches!(result, Err(ScrapeError::InvalidUrl { .. })));
    }

    proptest! {
        #[test]
        fn prop_root_relative_paths_append_to_origin(
            segments in proptest::collection::vec("[a-z0-9-]{1,12}", 1..5)
        ) {
            let resolver = UrlResolver::new(ORIGIN).unwrap();
            let path = format!("/{}", segments.join("/"));
            prop_assert_eq!(resolver.resolve(&path), format!("{ORIGIN}{path}"));
        }

        #[test]
        fn prop_absolute_urls_unchanged(host in "[a-z]{1,10}", path in "[a-z0-9]{1,10}") {
            let resolver = UrlResolver::new(ORIGIN).unwrap();
            let absolute = format!("https://{host}.com/{path}");
            prop_assert_eq!(resolver.resolve(&absolute), absolute.clone());
        }
    }
}
