use crate::domain::ParsedContent;
use crate::errors::ReaderResult;

#[cfg_attr(test, mockall::automock)]
pub trait ContentParser: Send + Sync {
    /// Extract the text fragments of a raw content value
    fn parse(&self, raw: &str) -> ReaderResult<ParsedContent>;
}
