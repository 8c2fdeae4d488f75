use std::io::Write;

use crate::domain::{Entry, Feed};
use crate::errors::ReaderResult;
use crate::parsers::ParserRegistry;
use crate::sources::FeedSource;

pub struct ReaderService<S: FeedSource> {
    source: S,
    parser_registry: ParserRegistry,
}

impl<S: FeedSource> ReaderService<S> {
    pub fn new(source: S, parser_registry: ParserRegistry) -> Self {
        Self {
            source,
            parser_registry,
        }
    }

    /// Fetch the feed once
    pub fn load(&self, url: &str) -> ReaderResult<Feed> {
        self.source.fetch(url)
    }

    /// Write the feed header and every entry to `out`, in feed order
    pub fn render<W: Write>(&self, feed: &Feed, out: &mut W) -> ReaderResult<()> {
        write!(out, "Reading RSS feed at [{}]...\n\n", feed.description)?;

        for entry in &feed.entries {
            writeln!(out)?;

            let body = self.entry_body(entry)?;
            write!(out, "Entry [{} - {}] \n{}", entry.title, entry.link, body)?;
        }

        out.flush()?;
        Ok(())
    }

    /// Paragraphs joined by newlines plus a trailing blank line, or empty
    /// when the content type has no parser or nothing was extracted
    fn entry_body(&self, entry: &Entry) -> ReaderResult<String> {
        let Some(content) = &entry.description else {
            return Ok(String::new());
        };

        let Some(parser) = self.parser_registry.lookup(&content.content_type) else {
            tracing::debug!(
                content_type = %content.content_type,
                title = %entry.title,
                "No parser registered, skipping body"
            );
            return Ok(String::new());
        };

        let values = parser.parse(&content.value)?.into_values();

        let mut body = values.join("\n");
        if !body.is_empty() {
            body.push_str("\n\n");
        }

        Ok(body)
    }
}
