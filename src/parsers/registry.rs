use std::collections::HashMap;

use crate::parsers::html::{HtmlContentParser, HTML_CONTENT_TYPE};
use crate::parsers::traits::ContentParser;

/// Maps a content MIME type to the parser that understands it
pub struct ParserRegistry {
    parsers: HashMap<String, Box<dyn ContentParser>>,
}

impl ParserRegistry {
    pub fn new() -> Self {
        let mut registry = Self::empty();

        registry.register(HTML_CONTENT_TYPE, Box::new(HtmlContentParser::new()));

        registry
    }

    pub fn empty() -> Self {
        Self {
            parsers: HashMap::new(),
        }
    }

    /// Register a parser for a MIME type, replacing any earlier one
    pub fn register(&mut self, content_type: &str, parser: Box<dyn ContentParser>) {
        self.parsers.insert(content_type.to_string(), parser);
    }

    /// Exact-match lookup, no wildcards
    pub fn lookup(&self, content_type: &str) -> Option<&dyn ContentParser> {
        self.parsers.get(content_type).map(|p| p.as_ref())
    }
}

impl Default for ParserRegistry {
    fn default() -> Self {
        Self::new()
    }
}
