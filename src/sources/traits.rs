use crate::domain::Feed;
use crate::errors::ReaderResult;

#[cfg_attr(test, mockall::automock)]
pub trait FeedSource: Send + Sync {
    /// Retrieve the document at `url` and parse it into a [`Feed`]
    fn fetch(&self, url: &str) -> ReaderResult<Feed>;
}
