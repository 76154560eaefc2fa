// SPDX-License-Identifier: MPL-2.0
//! HTTP client for the storefront's AJAX endpoints.

use super::filter::FilterValues;
use super::model::{FavoriteResponse, ListingsPage};
use crate::config::ServerConfig;
use crate::error::{Error, Result};
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Request, Url};

const REQUESTED_WITH: &str = "x-requested-with";
const XML_HTTP_REQUEST: &str = "XMLHttpRequest";
const CSRF_HEADER: &str = "x-csrftoken";

#[derive(Debug, Clone)]
pub struct ListingsClient {
    client: reqwest::Client,
    base_url: Url,
    listings_url: Url,
    headers: HeaderMap,
}

impl ListingsClient {
    /// Builds a client from the `[server]` settings.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] for an unusable base URL, listings path, or
    /// CSRF token, and [`Error::Network`] when the HTTP client cannot be built.
    pub fn new(server: &ServerConfig) -> Result<Self> {
        let base_url = Url::parse(&server.base_url)
            .map_err(|err| Error::Config(format!("invalid base_url {:?}: {err}", server.base_url)))?;
        let listings_url = base_url.join(&server.listings_path).map_err(|err| {
            Error::Config(format!(
                "invalid listings_path {:?}: {err}",
                server.listings_path
            ))
        })?;

        let mut headers = HeaderMap::new();
        headers.insert(REQUESTED_WITH, HeaderValue::from_static(XML_HTTP_REQUEST));
        if let Some(token) = server.csrf_token.as_deref().filter(|t| !t.is_empty()) {
            let value = HeaderValue::from_str(token)
                .map_err(|err| Error::Config(format!("invalid csrf_token: {err}")))?;
            headers.insert(CSRF_HEADER, value);
        }

        let client = reqwest::Client::builder()
            .timeout(server.request_timeout())
            .build()?;

        Ok(Self {
            client,
            base_url,
            listings_url,
            headers,
        })
    }

    /// Listings URL carrying the filter query, the panel's "current URL".
    #[must_use]
    pub fn listings_url(&self, filters: &FilterValues) -> Url {
        let mut url = self.listings_url.clone();
        url.query_pairs_mut()
            .clear()
            .extend_pairs(filters.query_pairs());
        url
    }

    /// Builds the GET request for one page of listings.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Network`] if the request cannot be assembled.
    pub fn listings_request(&self, filters: &FilterValues) -> Result<Request> {
        Ok(self
            .client
            .get(self.listings_url(filters))
            .headers(self.headers.clone())
            .build()?)
    }

    /// Builds the POST request toggling a listing's favorite flag.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when the endpoint URL cannot be formed.
    pub fn favorite_request(&self, listing_id: u64) -> Result<Request> {
        let url = self
            .base_url
            .join(&format!("/listing/{listing_id}/toggle_favorite/"))
            .map_err(|err| Error::Config(err.to_string()))?;
        Ok(self
            .client
            .post(url)
            .headers(self.headers.clone())
            .build()?)
    }

    /// Fetches one page of listings.
    ///
    /// # Errors
    ///
    /// Transport failures, non-success statuses, and undecodable bodies.
    pub async fn fetch_listings(&self, filters: &FilterValues) -> Result<ListingsPage> {
        let request = self.listings_request(filters)?;
        let url = request.url().to_string();
        tracing::debug!(%url, "fetching listings");
        let response = self.client.execute(request).await?.error_for_status()?;
        Ok(response.json::<ListingsPage>().await?)
    }

    /// Toggles a listing's favorite flag.
    ///
    /// # Errors
    ///
    /// Transport failures, non-success statuses, and undecodable bodies.
    pub async fn toggle_favorite(&self, listing_id: u64) -> Result<FavoriteResponse> {
        let request = self.favorite_request(listing_id)?;
        tracing::debug!(listing_id, "toggling favorite");
        let response = self.client.execute(request).await?.error_for_status()?;
        Ok(response.json::<FavoriteResponse>().await?)
    }
}
