//! REST backend for the content store.
//!
//! Speaks the headless CMS's read dialect: bracketed filter/populate query
//! pairs on `GET /api/words`, single records at `GET /api/words/{id}`, and a
//! `{ "data": ... }` response envelope. No retries and no timeout beyond the
//! transport default; failures surface as [`StoreError`] at the fetch
//! boundary.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::debug;

use crate::config::Config;
use crate::query::{Populate, WordQuery};
use crate::store::{ContentStore, StoreError};
use crate::word::{Word, WordId};

/// Response envelope for collection endpoints.
#[derive(Debug, Deserialize)]
struct ListEnvelope {
    #[serde(default)]
    data: Option<Vec<Word>>,
}

/// Response envelope for single-record endpoints.
#[derive(Debug, Deserialize)]
struct RecordEnvelope {
    #[serde(default)]
    data: Option<Word>,
}

/// Content store backed by the headless CMS REST API.
#[derive(Debug, Clone)]
pub struct HttpStore {
    http: reqwest::Client,
    base_url: String,
}

impl HttpStore {
    /// Creates a store client against the given base URL (no trailing
    /// slash), e.g. `http://localhost:1337`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Connection`] if the underlying HTTP client
    /// cannot be constructed.
    pub fn new(base_url: impl Into<String>) -> Result<Self, StoreError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| StoreError::Connection(e.to_string()))?;
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Ok(Self { http, base_url })
    }

    /// Creates a store client from process configuration.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Connection`] if the underlying HTTP client
    /// cannot be constructed.
    pub fn from_config(config: &Config) -> Result<Self, StoreError> {
        Self::new(config.base_url.clone())
    }

    /// The configured base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_envelope<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        pairs: &[(String, String)],
    ) -> Result<Option<T>, StoreError> {
        let response = self
            .http
            .get(url)
            .query(pairs)
            .send()
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(StoreError::Status {
                status: status.as_u16(),
            });
        }

        response
            .json::<T>()
            .await
            .map(Some)
            .map_err(|e| StoreError::Envelope(e.to_string()))
    }
}

#[async_trait]
impl ContentStore for HttpStore {
    async fn search(&self, query: &WordQuery) -> Result<Vec<Word>, StoreError> {
        let url = format!("{}/api/words", self.base_url);
        let pairs = query.to_query_pairs();
        debug!(request_id = %query.request_id, %url, "content store search");

        let envelope: Option<ListEnvelope> = self.get_envelope(&url, &pairs).await?;
        // A 404 on the collection endpoint means the store is misrouted.
        let envelope = envelope.ok_or(StoreError::Status { status: 404 })?;
        Ok(envelope.data.unwrap_or_default())
    }

    async fn fetch_by_id(
        &self,
        id: WordId,
        populate: Populate,
    ) -> Result<Option<Word>, StoreError> {
        let url = format!("{}/api/words/{id}", self.base_url);
        let pairs = populate.to_query_pairs();
        debug!(%id, %url, "content store fetch");

        let envelope: Option<RecordEnvelope> = self.get_envelope(&url, &pairs).await?;
        Ok(envelope.and_then(|envelope| envelope.data))
    }
}
