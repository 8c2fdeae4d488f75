use std::io;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use rss_reader::cli::Cli;
use rss_reader::config::Config;
use rss_reader::errors::ReaderResult;
use rss_reader::parsers::ParserRegistry;
use rss_reader::services::ReaderService;
use rss_reader::sources::RssAtomSource;

fn main() {
    // Diagnostics go to stderr so stdout only carries the feed report
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> ReaderResult<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.url)?;

    let service = ReaderService::new(RssAtomSource::new(), ParserRegistry::new());

    let feed = service.load(&config.feed_url)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    service.render(&feed, &mut out)
}
