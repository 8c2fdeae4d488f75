pub mod traits;
pub mod html;
pub mod registry;

pub use traits::ContentParser;
pub use html::HtmlContentParser;
pub use registry::ParserRegistry;
