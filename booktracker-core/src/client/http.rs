//! reqwest-backed implementation of the catalog and account seams

use super::{effective_search_query, AccountService, CatalogSource};
use crate::config::ClientConfig;
use crate::error::{CatalogError, Result};
use crate::types::{LocalPage, LoginRequest, RegisterRequest, Volume, VolumeSearch};
use async_trait::async_trait;
use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;

/// HTTP client for the first-party backend and the external search source
pub struct HttpCatalogClient {
    client: reqwest::Client,
    config: ClientConfig,
}

impl HttpCatalogClient {
    /// Build a client from an explicit configuration
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| CatalogError::Config(e.to_string()))?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Attach the bearer token for first-party calls
    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.config.auth_token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Attach the API key for external search calls
    fn keyed(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.config.api_key {
            Some(key) => builder.query(&[("key", key.as_str())]),
            None => builder,
        }
    }

    async fn check(resp: Response) -> Result<Response> {
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(CatalogError::Api {
                status: status.as_u16(),
                message: body,
            });
        }
        Ok(resp)
    }

    /// Read the body as text first so decode failures are reported as such
    async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T> {
        let body = Self::check(resp).await?.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogClient {
    async fn list_local(&self, query: &str, page: usize, size: usize) -> Result<LocalPage> {
        let url = self.config.api_endpoint(&self.config.books_path)?;
        let mut request = self
            .client
            .get(url)
            .query(&[("page", page), ("size", size)]);
        let query = query.trim();
        if !query.is_empty() {
            request = request.query(&[("q", query)]);
        }

        tracing::debug!(query, page, size, "Fetching local catalog page");
        let resp = self.authorized(request).send().await?;
        let listing: LocalPage = Self::decode(resp).await?;
        tracing::debug!(count = listing.content.len(), "Local catalog page received");
        Ok(listing)
    }

    async fn search_external(
        &self,
        query: &str,
        page: usize,
        size: usize,
    ) -> Result<VolumeSearch> {
        let url = self.config.search_endpoint()?;
        let q = effective_search_query(query);
        let request = self
            .client
            .get(url)
            .query(&[("q", q)])
            .query(&[("page", page), ("size", size)])
            // Volume APIs that page by offset ignore page/size
            .query(&[
                ("startIndex", page.saturating_mul(size)),
                ("maxResults", size),
            ]);

        tracing::debug!(q, page, size, "Searching external source");
        let resp = self.keyed(request).send().await?;
        let search: VolumeSearch = Self::decode(resp).await?;
        tracing::debug!(count = search.items.len(), "External search results received");
        Ok(search)
    }

    async fn get_volume(&self, id: &str) -> Result<Volume> {
        let id = id.trim();
        if id.is_empty() {
            return Err(CatalogError::Validation("volume id must not be empty".to_string()));
        }
        let mut url = self.config.search_endpoint()?;
        url.path_segments_mut()
            .map_err(|_| CatalogError::Config("search_url cannot be a base".to_string()))?
            .push(id);

        tracing::debug!(id, "Fetching volume");
        let resp = self.keyed(self.client.get(url)).send().await?;
        Self::decode(resp).await
    }
}

#[async_trait]
impl AccountService for HttpCatalogClient {
    async fn login(&self, request: &LoginRequest) -> Result<()> {
        let url = self.config.api_endpoint(&self.config.login_path)?;
        tracing::debug!(username = %request.username, "Posting login");
        let resp = self
            .authorized(self.client.post(url).json(request))
            .send()
            .await?;
        Self::check(resp).await?;
        Ok(())
    }

    async fn register(&self, request: &RegisterRequest) -> Result<()> {
        let url = self.config.api_endpoint(&self.config.register_path)?;
        tracing::debug!(username = %request.username, "Posting registration");
        let resp = self
            .authorized(self.client.post(url).json(request))
            .send()
            .await?;
        Self::check(resp).await?;
        Ok(())
    }
}
