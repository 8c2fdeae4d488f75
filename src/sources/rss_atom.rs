use feed_rs::model::{Link, Text};
use feed_rs::parser;
use reqwest::blocking::Client;
use url::Url;

use crate::domain::{Content, Entry, Feed};
use crate::errors::{ReaderError, ReaderResult};
use crate::sources::traits::FeedSource;

/// Reads RSS and Atom documents over HTTP(S) or from `file:` URLs
pub struct RssAtomSource {
    client: Client,
}

impl RssAtomSource {
    pub fn new() -> Self {
        Self {
            client: Client::builder()
                .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
                .build()
                .unwrap_or_else(|_| Client::new()),
        }
    }

    fn fetch_bytes(&self, url: &Url) -> ReaderResult<Vec<u8>> {
        match url.scheme() {
            "http" | "https" => {
                let response = self.client.get(url.as_str()).send()?.error_for_status()?;
                Ok(response.bytes()?.to_vec())
            }
            "file" => {
                let path = url
                    .to_file_path()
                    .map_err(|_| ReaderError::InvalidUrl(format!("Not a local path: {}", url)))?;
                Ok(std::fs::read(path)?)
            }
            scheme => Err(ReaderError::InvalidUrl(format!(
                "Unsupported scheme '{}' in {}",
                scheme, url
            ))),
        }
    }

    fn parse_bytes(bytes: &[u8]) -> ReaderResult<feed_rs::model::Feed> {
        parser::parse(bytes).map_err(|e| ReaderError::FeedParse(e.to_string()))
    }

    /// Parse a feed document held in memory
    pub fn feed_from_bytes(bytes: &[u8]) -> ReaderResult<Feed> {
        let parsed = Self::parse_bytes(bytes)?;

        let entries: Vec<Entry> = parsed
            .entries
            .into_iter()
            .map(|entry| {
                let title = entry.title.map(|t| t.content).unwrap_or_default();

                let link = Self::entry_link(entry.links);

                // RSS <description> and Atom <summary> both land in summary
                let description = entry.summary.map(Self::content_from_text);

                Entry::new(title, link).with_description(description)
            })
            .collect();

        let title = parsed.title.map(|t| t.content).unwrap_or_default();
        let description = parsed.description.map(|d| d.content).unwrap_or_default();

        Ok(Feed::new(title, description).with_entries(entries))
    }

    /// The entry's alternate link, else whatever link comes first
    fn entry_link(links: Vec<Link>) -> String {
        let alternate = links
            .iter()
            .position(|l| matches!(l.rel.as_deref(), None | Some("alternate")))
            .unwrap_or(0);

        links
            .into_iter()
            .nth(alternate)
            .map(|l| l.href)
            .unwrap_or_default()
    }

    /// Keyed by the bare media type; parameters such as charset are dropped
    fn content_from_text(text: Text) -> Content {
        Content::new(text.content_type.essence().to_string(), text.content)
    }
}

impl Default for RssAtomSource {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedSource for RssAtomSource {
    fn fetch(&self, url: &str) -> ReaderResult<Feed> {
        let url = Url::parse(url).map_err(|e| ReaderError::InvalidUrl(format!("{}: {}", url, e)))?;

        tracing::debug!(%url, "Fetching feed");
        let bytes = self.fetch_bytes(&url)?;
        tracing::debug!(bytes = bytes.len(), "Feed document received");

        let feed = Self::feed_from_bytes(&bytes)?;
        tracing::info!(title = %feed.title, entries = feed.entries.len(), "Parsed feed");

        Ok(feed)
    }
}
