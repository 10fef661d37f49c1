use std::future::Future;
use std::time::Duration;

use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::CONFIG;
use crate::data_models::{Listing, ListingId};
use crate::filter::FilterState;

pub mod error;
pub mod models;

pub use error::ApiError;
use models::SearchParams;

/// Endpoint path segments, appended to the base URL's own path.
pub mod paths {
    pub const GIFTS: &[&str] = &["api", "gifts"];
    pub const SEARCH: &[&str] = &["api", "search"];
}

/// The remote listing service as seen by the search page.
pub trait ListingsApi: Send + Sync {
    /// `GET /api/gifts`
    fn list_all(&self) -> impl Future<Output = Result<Vec<Listing>, ApiError>> + Send;

    /// `GET /api/search` with every filter field encoded as a query parameter.
    fn search(
        &self,
        filter: &FilterState,
    ) -> impl Future<Output = Result<Vec<Listing>, ApiError>> + Send;

    /// `GET /api/gifts/{id}`
    fn get(&self, id: &ListingId) -> impl Future<Output = Result<Listing, ApiError>> + Send;
}

#[derive(Debug, Clone)]
pub struct HttpListingsApi {
    client: Client,
    base_url: Url,
}

impl HttpListingsApi {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        Self::with_timeout(base_url, None)
    }

    pub fn with_timeout(base_url: &str, timeout: Option<Duration>) -> Result<Self, ApiError> {
        let invalid = |reason: String| ApiError::InvalidUrl {
            url: base_url.to_string(),
            reason,
        };
        let parsed = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
        if parsed.cannot_be_a_base() {
            return Err(invalid("cannot be a base".to_string()));
        }
        if parsed.query().is_some() || parsed.fragment().is_some() {
            return Err(invalid("must not carry a query or fragment".to_string()));
        }

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: parsed,
        })
    }

    /// Build a client from the environment configuration
    pub fn from_config() -> Result<Self, ApiError> {
        Self::with_timeout(&CONFIG.backend_url, CONFIG.request_timeout)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl {
                url: self.base_url.to_string(),
                reason: "cannot be a base".to_string(),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn fetch_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

impl ListingsApi for HttpListingsApi {
    async fn list_all(&self) -> Result<Vec<Listing>, ApiError> {
        let url = self.endpoint(paths::GIFTS)?;
        debug!(%url, "fetching all listings");
        self.fetch_json(self.client.get(url)).await
    }

    async fn search(&self, filter: &FilterState) -> Result<Vec<Listing>, ApiError> {
        let url = self.endpoint(paths::SEARCH)?;
        let params = SearchParams::from(filter);
        debug!(%url, ?params, "searching listings");
        self.fetch_json(self.client.get(url).query(&params)).await
    }

    async fn get(&self, id: &ListingId) -> Result<Listing, ApiError> {
        let url = self.endpoint(&[paths::GIFTS, &[id.as_str()]].concat())?;
        debug!(%url, "fetching listing");
        self.fetch_json(self.client.get(url)).await
    }
}
