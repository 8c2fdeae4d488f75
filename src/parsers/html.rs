use scraper::{ElementRef, Html, Selector};

use crate::domain::ParsedContent;
use crate::errors::ReaderResult;
use crate::parsers::traits::ContentParser;

pub const HTML_CONTENT_TYPE: &str = "text/html";

const PARAGRAPH_SELECTOR: &str = "p";

/// Extracts the text of every `<p>` element of an HTML fragment
pub struct HtmlContentParser {
    paragraph: Selector,
}

impl HtmlContentParser {
    pub fn new() -> Self {
        Self {
            paragraph: Selector::parse(PARAGRAPH_SELECTOR).unwrap(),
        }
    }

    /// Flatten an element's text, collapsing whitespace runs and trimming
    fn element_text(element: ElementRef<'_>) -> String {
        let mut text = String::new();

        for node in element.descendants() {
            if let Some(text_node) = node.value().as_text() {
                text.push_str(text_node);
            }
            // Line breaks separate words
            if let Some(child) = node.value().as_element() {
                if child.name() == "br" {
                    text.push(' ');
                }
            }
        }

        text.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

impl Default for HtmlContentParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentParser for HtmlContentParser {
    fn parse(&self, raw: &str) -> ReaderResult<ParsedContent> {
        // html5ever recovers from malformed markup instead of failing
        let document = Html::parse_fragment(raw);

        let values = document
            .select(&self.paragraph)
            .map(Self::element_text)
            .collect();

        Ok(ParsedContent::new(values))
    }
}
