//! Timeline feed: recent posts for a handle, used as extra quote candidates.
//!
//! Authenticates with an application-only OAuth2 bearer token, then reads the
//! handle's user timeline. Failures never reach the renderer: the caller gets
//! an empty list and a log record.

use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::core::config::{Credentials, FeedConfig};

const TOKEN_PATH: &str = "/oauth2/token";
const TIMELINE_PATH: &str = "/1.1/statuses/user_timeline.json";

/// Errors from the timeline feed.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Feed returned status {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("Invalid feed response: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Token response has no bearer token")]
    MissingToken,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    #[serde(default)]
    token_type: Option<String>,
    #[serde(default)]
    access_token: Option<String>,
}

/// One timeline item. Extended mode names the text `full_text`.
#[derive(Debug, Deserialize)]
pub struct Post {
    #[serde(alias = "full_text")]
    pub text: String,
}

pub struct FeedClient {
    client: Client,
    api_base: String,
    credentials: Credentials,
}

impl FeedClient {
    pub fn new(config: &FeedConfig, credentials: Credentials) -> Result<Self, FeedError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client,
            api_base: config.api_base.clone(),
            credentials,
        })
    }

    /// Exchange the consumer credentials for a bearer token.
    pub async fn bearer_token(&self) -> Result<String, FeedError> {
        let response = self
            .client
            .post(format!("{}{}", self.api_base, TOKEN_PATH))
            .basic_auth(
                &self.credentials.consumer_key,
                Some(&self.credentials.consumer_secret),
            )
            .header(
                reqwest::header::CONTENT_TYPE,
                "application/x-www-form-urlencoded;charset=UTF-8",
            )
            .body("grant_type=client_credentials")
            .send()
            .await?;
        let body = success_body(response).await?;
        parse_token(&body)
    }

    /// Recent posts for `handle`.
    pub async fn user_timeline(&self, token: &str, handle: &str) -> Result<Vec<Post>, FeedError> {
        let response = self
            .client
            .get(format!("{}{}", self.api_base, TIMELINE_PATH))
            .query(&[("screen_name", handle)])
            .bearer_auth(token)
            .send()
            .await?;
        let body = success_body(response).await?;
        parse_timeline(&body)
    }
}

async fn success_body(response: reqwest::Response) -> Result<String, FeedError> {
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(FeedError::Status { status, body });
    }
    Ok(body)
}

fn parse_token(body: &str) -> Result<String, FeedError> {
    let token: TokenResponse = serde_json::from_str(body)?;
    if let Some(kind) = &token.token_type
        && !kind.eq_ignore_ascii_case("bearer")
    {
        log::warn!("Unexpected token type {:?}", kind);
    }
    token
        .access_token
        .filter(|t| !t.is_empty())
        .ok_or(FeedError::MissingToken)
}

fn parse_timeline(body: &str) -> Result<Vec<Post>, FeedError> {
    Ok(serde_json::from_str(body)?)
}

/// Keep ASCII graphic characters and spaces; drop newlines and everything else.
pub fn sanitize(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_graphic() || *c == ' ')
        .collect()
}

/// Sanitised posts for the configured handle, or an empty list on any failure.
pub async fn fetch_candidates(config: &FeedConfig) -> Vec<String> {
    if !config.enabled {
        log::debug!("Feed disabled");
        return Vec::new();
    }
    let Some(credentials) = config.credentials.clone() else {
        log::info!("Feed credentials not set (TWITTER_CONSUMER_KEY / TWITTER_CONSUMER_SECRET)");
        return Vec::new();
    };
    match fetch_posts(config, credentials).await {
        Ok(posts) => {
            log::info!("Fetched {} posts for @{}", posts.len(), config.handle);
            candidates_from(posts)
        }
        Err(e) => {
            log::warn!("Feed unavailable for @{}: {}", config.handle, e);
            Vec::new()
        }
    }
}

async fn fetch_posts(config: &FeedConfig, credentials: Credentials) -> Result<Vec<Post>, FeedError> {
    let client = FeedClient::new(config, credentials)?;
    let token = client.bearer_token().await?;
    client.user_timeline(&token, &config.handle).await
}

fn candidates_from(posts: Vec<Post>) -> Vec<String> {
    posts
        .into_iter()
        .map(|post| sanitize(&post.text))
        .filter(|text| !text.trim().is_empty())
        .collect()
}
