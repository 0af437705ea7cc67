//! Configuration from environment variables (and `.env`, loaded in `main`).

use std::env;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_HANDLE: &str = "realDonaldTrump";
const DEFAULT_API_BASE: &str = "https://api.twitter.com";
const DEFAULT_FEED_TIMEOUT_SECS: u64 = 10;

/// Consumer credentials for the timeline feed. Never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub consumer_key: String,
    pub consumer_secret: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("consumer_key", &"<redacted>")
            .field("consumer_secret", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct FeedConfig {
    pub enabled: bool,
    pub handle: String,
    pub api_base: String,
    pub timeout: Duration,
    pub credentials: Option<Credentials>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub quotes_file: Option<PathBuf>,
    pub feed: FeedConfig,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be a whole number of seconds, got {value:?}")]
    InvalidSeconds { var: &'static str, value: String },
}

/// Load configuration from the process environment.
pub fn load() -> Result<Config, ConfigError> {
    load_from(|key| env::var(key).ok())
}

/// Load configuration from any key lookup. Empty values count as unset.
pub fn load_from<F>(lookup: F) -> Result<Config, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    let timeout_secs = match get("TRUMP_SAYS_FEED_TIMEOUT_SECS") {
        Some(value) => value
            .trim()
            .parse::<u64>()
            .map_err(|_| ConfigError::InvalidSeconds {
                var: "TRUMP_SAYS_FEED_TIMEOUT_SECS",
                value,
            })?,
        None => DEFAULT_FEED_TIMEOUT_SECS,
    };

    let credentials = match (get("TWITTER_CONSUMER_KEY"), get("TWITTER_CONSUMER_SECRET")) {
        (Some(consumer_key), Some(consumer_secret)) => Some(Credentials {
            consumer_key,
            consumer_secret,
        }),
        (None, None) => None,
        _ => {
            log::warn!(
                "Only one of TWITTER_CONSUMER_KEY / TWITTER_CONSUMER_SECRET is set; feed disabled"
            );
            None
        }
    };

    Ok(Config {
        quotes_file: get("TRUMP_SAYS_QUOTES_FILE").map(PathBuf::from),
        feed: FeedConfig {
            enabled: true,
            handle: get("TRUMP_SAYS_HANDLE").unwrap_or_else(|| DEFAULT_HANDLE.to_string()),
            api_base: get("TWITTER_API_BASE")
                .map(|base| base.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            timeout: Duration::from_secs(timeout_secs),
            credentials,
        },
    })
}
