pub mod feed;
pub mod content;

pub use feed::{Entry, Feed};
pub use content::{Content, ParsedContent};
