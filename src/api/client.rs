//! PokeAPI client
//!
//! Fetches raw response bodies through the response cache and decodes them
//! into the models the REPL works with.

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::api::{LocationArea, NamedResource, Page, Pokemon};
use crate::cache::ResponseCache;
use crate::config::Config;
use crate::error::{PokedexError, Result};

/// Cached client for the PokeAPI REST endpoints.
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    http: Client,
    cache: ResponseCache,
    base_url: String,
    page_size: u32,
}

impl PokeApiClient {
    /// Creates a client using the configured base URL, page size and timeout.
    pub fn new(config: &Config, cache: ResponseCache) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.request_timeout())
            .build()?;
        Ok(Self::with_client(http, config, cache))
    }

    /// Creates a client around an existing HTTP client.
    pub fn with_client(http: Client, config: &Config, cache: ResponseCache) -> Self {
        Self {
            http,
            cache,
            base_url: config.base_url.clone(),
            page_size: config.page_size,
        }
    }

    /// The response cache shared by this client.
    pub fn cache(&self) -> &ResponseCache {
        &self.cache
    }

    /// URL of the first page of location areas.
    pub fn first_location_page_url(&self) -> String {
        format!(
            "{}/location-area/?offset=0&limit={}",
            self.base_url, self.page_size
        )
    }

    /// Returns the body at `url`, from cache when possible.
    ///
    /// Only successful, non-empty responses are cached.
    pub async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        if let Some(body) = self.cache.get(url).await {
            debug!("Cache hit for {}", url);
            return Ok(body);
        }
        debug!("Cache miss for {}, fetching", url);

        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(PokedexError::Status {
                status,
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?.to_vec();
        if body.is_empty() {
            return Err(PokedexError::EmptyBody(url.to_string()));
        }

        self.cache.put(url, body.clone()).await;
        Ok(body)
    }

    /// Fetches `url` and decodes it as JSON.
    pub async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let body = self.fetch(url).await?;
        serde_json::from_slice(&body).map_err(|source| PokedexError::Decode {
            url: url.to_string(),
            source,
        })
    }

    /// Fetches a page of location areas; `None` means the first page.
    pub async fn location_areas(&self, url: Option<&str>) -> Result<Page<NamedResource>> {
        match url {
            Some(url) => self.fetch_json(url).await,
            None => self.fetch_json(&self.first_location_page_url()).await,
        }
    }

    /// Fetches one location area with its encounters.
    pub async fn location_area(&self, name: &str) -> Result<LocationArea> {
        let url = format!("{}/location-area/{}", self.base_url, name);
        self.fetch_json(&url).await
    }

    /// Fetches one Pokemon by name.
    pub async fn pokemon(&self, name: &str) -> Result<Pokemon> {
        let url = format!("{}/pokemon/{}", self.base_url, name);
        self.fetch_json(&url).await
    }
}
