use clap::Parser;

#[derive(Parser)]
#[command(name = "rss-reader")]
#[command(about = "Reads an RSS/Atom feed and prints the paragraph text of every entry")]
#[command(version)]
pub struct Cli {
    /// Feed URL to read (falls back to EXTERNAL_RSS_FEED_URL)
    pub url: Option<String>,
}
