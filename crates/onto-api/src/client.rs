//! Typed HTTP client for the catalog's read-only endpoints.

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use onto_model::{Page, Taxonomy, TaxonomyQuery, TopicOverview, TopicQuery};

use crate::config::ApiConfig;
use crate::error::{ApiError, normalize_error_body};

/// Per-request timeout; requests that exceed it surface as network errors.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the catalog API. Cheap to clone: the underlying connection
/// pool is shared between clones.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|err| ApiError::Network(err.to_string()))?;
        Ok(Self {
            http,
            base_url: config.base_url().to_string(),
        })
    }

    /// `GET /taxonomies`
    pub async fn list_taxonomies(
        &self,
        query: &TaxonomyQuery,
    ) -> Result<Page<Taxonomy>, ApiError> {
        self.request("/taxonomies", &query.to_pairs())
            .await?
            .ok_or(ApiError::EmptyBody)
    }

    /// `GET /taxonomies/{taxonomy_id}/topics`
    pub async fn list_taxonomy_topics(
        &self,
        taxonomy_id: &str,
        query: &TopicQuery,
    ) -> Result<Page<TopicOverview>, ApiError> {
        let path = format!("/taxonomies/{taxonomy_id}/topics");
        self.request(&path, &query.to_pairs())
            .await?
            .ok_or(ApiError::EmptyBody)
    }

    /// `GET /topics/{topic_id}` — single-entity lookup; 404 carries a
    /// `{detail}` body that surfaces verbatim as the error message.
    pub async fn get_topic(&self, topic_id: &str) -> Result<TopicOverview, ApiError> {
        let path = format!("/topics/{topic_id}");
        self.request(&path, &[]).await?.ok_or(ApiError::EmptyBody)
    }

    /// Issue exactly one GET request.
    ///
    /// Query pairs with empty values are dropped before the URL is built;
    /// the server reads an absent parameter as "no filter". Returns
    /// `Ok(None)` on HTTP 204.
    async fn request<T: DeserializeOwned>(
        &self,
        path: &str,
        pairs: &[(&str, String)],
    ) -> Result<Option<T>, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let pairs: Vec<&(&str, String)> = pairs
            .iter()
            .filter(|(_, value)| !value.is_empty())
            .collect();
        debug!(%url, params = pairs.len(), "catalog request");

        let response = self
            .http
            .get(&url)
            .query(&pairs)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;

        let status = response.status();
        if status == StatusCode::NO_CONTENT {
            return Ok(None);
        }

        let body = response
            .bytes()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;

        if !status.is_success() {
            return Err(ApiError::Api {
                status: status.as_u16(),
                message: normalize_error_body(status, &body),
            });
        }

        serde_json::from_slice(&body)
            .map(Some)
            .map_err(|err| ApiError::Decode(err.to_string()))
    }
}
