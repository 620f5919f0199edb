//! HTTP implementation of the PoxBase API client

use std::num::NonZeroU32;
use std::time::Duration;

use async_trait::async_trait;
use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;

use crate::client::PoxBaseApi;
use crate::client::models::{Envelope, Id, TypeaheadResponse};
use crate::error::{ApiError, Result};

/// Default PoxBase API base URL
pub const API_BASE_URL: &str = "https://poxbase.net/api";

/// Request timeout in seconds
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Client-side rate limit
///
/// Typeahead is debounced upstream, so this ceiling only matters when a
/// sync drains a large batch of scheduled fetches at once.
const RATE_LIMIT_PER_SECOND: u32 = 25;

/// HTTP client for the PoxBase API
pub struct PoxBaseClient {
    http: Client,

    base_url: Url,

    rate_limiter: RateLimiter<NotKeyed, InMemoryState, DefaultClock>,
}

impl PoxBaseClient {
    /// Create a new client, optionally overriding the API base URL
    pub fn new(base_url: Option<&str>) -> Result<Self> {
        let base_url = Url::parse(base_url.unwrap_or(API_BASE_URL))
            .map_err(|e| ApiError::InvalidUrl(format!("Invalid API base URL: {e}")))?;

        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| ApiError::Network(format!("Failed to create HTTP client: {e}")))?;

        let quota = Quota::per_second(NonZeroU32::new(RATE_LIMIT_PER_SECOND).unwrap());

        Ok(PoxBaseClient {
            http,
            base_url,
            rate_limiter: RateLimiter::direct(quota),
        })
    }

    /// Build an endpoint URL from path segments
    ///
    /// Segments are percent-encoded, so raw typeahead input is safe to
    /// pass through.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(format!("API base URL cannot be a base: {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Issue a GET request and parse the JSON response
    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        self.rate_limiter.until_ready().await;

        log::debug!("GET {url}");

        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(ApiError::from)?;

        match response.status() {
            StatusCode::OK => response
                .json::<T>()
                .await
                .map_err(|e| ApiError::InvalidResponse(format!("Failed to parse response: {e}")).into()),
            StatusCode::NOT_FOUND => {
                let message = match response.text().await {
                    Ok(body) if !body.is_empty() => body,
                    _ => format!("Resource not found: {}", url.path()),
                };
                Err(ApiError::NotFound(message).into())
            }
            StatusCode::BAD_REQUEST => {
                let message = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Bad request".to_string());
                Err(ApiError::BadRequest(message).into())
            }
            status if status.is_server_error() => {
                Err(ApiError::ServerError(format!("Server error: {status}")).into())
            }
            status => {
                Err(ApiError::InvalidResponse(format!("Unexpected status code: {status}")).into())
            }
        }
    }
}

#[async_trait]
impl PoxBaseApi for PoxBaseClient {
    async fn init(&self) -> Result<Envelope> {
        self.get_json(self.endpoint(&["init"])?).await
    }

    async fn champ(&self, id: Id) -> Result<Envelope> {
        self.get_json(self.endpoint(&["champ", &id.to_string()])?).await
    }

    async fn spell(&self, id: Id) -> Result<Envelope> {
        self.get_json(self.endpoint(&["spell", &id.to_string()])?).await
    }

    async fn equip(&self, id: Id) -> Result<Envelope> {
        self.get_json(self.endpoint(&["equip", &id.to_string()])?).await
    }

    async fn relic(&self, id: Id) -> Result<Envelope> {
        self.get_json(self.endpoint(&["relic", &id.to_string()])?).await
    }

    async fn ability(&self, id: Id) -> Result<Envelope> {
        self.get_json(self.endpoint(&["ability", &id.to_string()])?).await
    }

    async fn typeahead(&self, query: &str) -> Result<TypeaheadResponse> {
        self.get_json(self.endpoint(&["typeahead", query])?).await
    }
}
