//! Typed wrapper over the parsed HTML tree
//!
//! Absence semantics: `find_first` and `attr` return `None`, `find_all`
//! returns an empty vector. Only [`Document::required`] turns absence into
//! an error.

use crate::infrastructure::scrape_error::{ScrapeError, ScrapeResult};
use scraper::{ElementRef, Html, Selector};

/// Parsed page. Never fails to build; malformed markup is recovered by
/// the html5ever tree builder and entities are decoded during parsing.
pub struct Document {
    html: Html,
}

impl Document {
    pub fn parse(html: &str) -> Self {
        Self {
            html: Html::parse_document(html),
        }
    }

    pub fn root(&self) -> Node<'_> {
        Node {
            element: self.html.root_element(),
        }
    }

    pub fn find_first(&self, selector: &Selector) -> Option<Node<'_>> {
        self.html.select(selector).next().map(Node::from)
    }

    pub fn find_all(&self, selector: &Selector) -> Vec<Node<'_>> {
        self.html.select(selector).map(Node::from).collect()
    }

    /// Like `find_first`, but a missing element is a fault
    pub fn required(&self, selector: &Selector, element: &str) -> ScrapeResult<Node<'_>> {
        self.find_first(selector)
            .ok_or_else(|| ScrapeError::missing_element(element, None))
    }
}

/// Element node within a [`Document`]
#[derive(Debug, Clone, Copy)]
pub struct Node<'a> {
    element: ElementRef<'a>,
}

impl<'a> From<ElementRef<'a>> for Node<'a> {
    fn from(element: ElementRef<'a>) -> Self {
        Self { element }
    }
}

impl<'a> Node<'a> {
    /// First matching descendant
    pub fn find_first(&self, selector: &Selector) -> Option<Node<'a>> {
        self.element.select(selector).next().map(Node::from)
    }

    /// All matching descendants in document order
    pub fn find_all(&self, selector: &Selector) -> Vec<Node<'a>> {
        self.element.select(selector).map(Node::from).collect()
    }

    pub fn contains(&self, selector: &Selector) -> bool {
        self.element.select(selector).next().is_some()
    }

    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.element.value().attr(name)
    }

    /// All descendant text, concatenated and trimmed
    pub fn text(&self) -> String {
        self.element.text().collect::<String>().trim().to_string()
    }

    /// Non-empty text, or `None`
    pub fn non_empty_text(&self) -> Option<String> {
        Some(self.text()).filter(|text| !text.is_empty())
    }

    /// Text of a node whose only child is a text node. `None` when the
    /// text is wrapped in another element or mixed with elements.
    pub fn own_string(&self) -> Option<String> {
        element_string(self.element)
    }

    /// `own_string` of each direct child, trimmed, skipping children
    /// without text
    pub fn child_strings(&self) -> Vec<String> {
        self.element
            .children()
            .filter_map(|child| match child.value().as_text() {
                Some(text) => Some((**text).to_owned()),
                None => ElementRef::wrap(child).and_then(element_string),
            })
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty())
            .collect()
    }
}

fn element_string(element: ElementRef<'_>) -> Option<String> {
    let mut children = element.children();
    match (children.next(), children.next()) {
        (Some(only), None) => only.value().as_text().map(|text| (**text).to_owned()),
        _ => None,
    }
}
