pub mod traits;
pub mod rss_atom;

pub use traits::FeedSource;
pub use rss_atom::RssAtomSource;
