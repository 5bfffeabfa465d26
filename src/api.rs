//! Joke API
//!
//! Source of single jokes. The HTTP implementation talks to the public
//! dad-joke endpoint through reqwest (fetch-backed on wasm32).

use async_trait::async_trait;
use reqwest::header::ACCEPT;

use crate::error::FetchError;
use crate::models::ApiJoke;

/// Anything that can hand out one joke at a time
#[async_trait(?Send)]
pub trait JokeSource {
    /// Fetch one candidate joke
    async fn fetch_joke(&self) -> Result<ApiJoke, FetchError>;
}

// ========================
// HTTP Source
// ========================

#[derive(Clone, Debug)]
pub struct HttpJokeSource {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpJokeSource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait(?Send)]
impl JokeSource for HttpJokeSource {
    async fn fetch_joke(&self) -> Result<ApiJoke, FetchError> {
        let response = self
            .client
            .get(&self.endpoint)
            .header(ACCEPT, "application/json")
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json::<ApiJoke>().await?)
    }
}
