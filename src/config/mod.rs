use crate::errors::{ReaderError, ReaderResult};

pub const FEED_URL_VAR: &str = "EXTERNAL_RSS_FEED_URL";

#[derive(Debug, Clone)]
pub struct Config {
    pub feed_url: String,
}

impl Config {
    /// Get the directory where the executable is located
    fn exe_dir() -> Option<std::path::PathBuf> {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
    }

    /// Resolve configuration, preferring a URL given on the command line
    pub fn load(url_override: Option<String>) -> ReaderResult<Self> {
        match url_override {
            Some(feed_url) => Self::from_url(feed_url),
            None => Self::from_env(),
        }
    }

    pub fn from_env() -> ReaderResult<Self> {
        // Try to load .env from executable's directory first
        if let Some(dir) = Self::exe_dir() {
            let env_path = dir.join(".env");
            if env_path.exists() {
                dotenvy::from_path(&env_path).ok();
            }
        }
        // Fall back to current directory
        dotenvy::dotenv().ok();

        let feed_url = std::env::var(FEED_URL_VAR)
            .map_err(|_| ReaderError::MissingEnvVar(FEED_URL_VAR.to_string()))?;

        Self::from_url(feed_url)
    }

    fn from_url(feed_url: String) -> ReaderResult<Self> {
        let feed_url = feed_url.trim().to_string();
        if feed_url.is_empty() {
            return Err(ReaderError::Config("feed URL is empty".to_string()));
        }

        Ok(Self { feed_url })
    }
}
