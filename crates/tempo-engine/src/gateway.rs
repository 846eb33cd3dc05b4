//! Seams between the engine and its two external collaborators.
//!
//! The engine is generic over these traits so runs can be driven against the
//! real HTTP clients or in-memory doubles.

#![allow(async_fn_in_trait)]

use chrono::NaiveDate;
use tempo_core::entities::{Classification, Entry, Vocabulary};
use tempo_core::enums::Attribute;
use tempo_llm::ChatClient;
use tempo_store::{RecordStoreClient, StoreError};

/// Reads entries and vocabularies; writes classifications back.
pub trait RecordStore {
    /// All entries dated `date`. Zero matches is `Ok(vec![])`.
    async fn fetch_entries(&self, date: NaiveDate) -> Result<Vec<Entry>, StoreError>;

    /// Allowed labels for `attribute`, in store order. Missing → empty.
    async fn fetch_vocabulary(&self, attribute: Attribute) -> Result<Vocabulary, StoreError>;

    /// Partial update of the `Some` attributes only. `false` on any failure.
    async fn persist_classification(&self, entry_id: &str, classification: &Classification)
    -> bool;
}

/// Free-text answer for a prompt; `None` when unavailable for any reason.
pub trait TextClassifier {
    async fn classify(&self, prompt: &str) -> Option<String>;
}

impl RecordStore for RecordStoreClient {
    async fn fetch_entries(&self, date: NaiveDate) -> Result<Vec<Entry>, StoreError> {
        Self::fetch_entries(self, date).await
    }

    async fn fetch_vocabulary(&self, attribute: Attribute) -> Result<Vocabulary, StoreError> {
        Self::fetch_vocabulary(self, attribute).await
    }

    async fn persist_classification(
        &self,
        entry_id: &str,
        classification: &Classification,
    ) -> bool {
        Self::persist_classification(self, entry_id, classification).await
    }
}

impl TextClassifier for ChatClient {
    async fn classify(&self, prompt: &str) -> Option<String> {
        Self::classify(self, prompt).await
    }
}
