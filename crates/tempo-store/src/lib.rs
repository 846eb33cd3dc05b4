//! # tempo-store
//!
//! Record store HTTP client for Tempo.
//!
//! Talks to a Notion database over its REST API:
//! - `POST /databases/{id}/query` to list a day's entries ([`query`])
//! - `GET /databases/{id}` to read select-option vocabularies ([`schema`])
//! - `PATCH /pages/{id}` to write classifications back ([`update`])
//!
//! Every request carries the bearer credential and `Notion-Version` header
//! from [`NotionConfig`].

pub mod query;
pub mod schema;
pub mod update;

mod error;
mod http;
mod wire;

pub use error::StoreError;

use std::time::Duration;

use tempo_config::{NotionConfig, PropertyNames};
use tempo_core::enums::Attribute;

// ── Client ─────────────────────────────────────────────────────────

/// HTTP client for one time-tracking database.
pub struct RecordStoreClient {
    http: reqwest::Client,
    base_url: String,
    database_id: String,
    token: String,
    version: String,
    properties: PropertyNames,
}

impl RecordStoreClient {
    /// Create a client from validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Http`] if the underlying `reqwest::Client`
    /// fails to build.
    pub fn new(config: &NotionConfig) -> Result<Self, StoreError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("tempo/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        tracing::debug!(base_url = %config.base_url, "record store client initialized");

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            database_id: config.database_id.clone(),
            token: config.token.clone(),
            version: config.version.clone(),
            properties: config.properties.clone(),
        })
    }

    /// Property names this client reads and writes.
    #[must_use]
    pub const fn properties(&self) -> &PropertyNames {
        &self.properties
    }

    /// Store property backing `attribute`.
    #[must_use]
    pub fn property_for(&self, attribute: Attribute) -> &str {
        match attribute {
            Attribute::Category => &self.properties.category,
            Attribute::TimeType => &self.properties.time_type,
        }
    }

    fn database_url(&self) -> String {
        format!(
            "{}/databases/{}",
            self.base_url,
            urlencoding::encode(&self.database_id)
        )
    }

    fn page_url(&self, page_id: &str) -> String {
        format!("{}/pages/{}", self.base_url, urlencoding::encode(page_id))
    }

    /// Attach authentication and version headers to a request.
    fn request(&self, method: reqwest::Method, url: &str) -> reqwest::RequestBuilder {
        self.http
            .request(method, url)
            .bearer_auth(&self.token)
            .header("Notion-Version", &self.version)
    }
}
