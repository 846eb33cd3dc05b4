//! Engine error types.

use tempo_core::enums::Attribute;
use tempo_store::StoreError;

/// Conditions that abort a whole run.
///
/// Per-entry problems never surface here; they are logged and counted in
/// [`RunSummary`](crate::RunSummary).
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// A mandatory vocabulary has no labels.
    #[error("No {attribute} options found in database")]
    MissingVocabulary { attribute: Attribute },

    /// Vocabulary or entry fetch failed during setup.
    #[error("record store error: {0}")]
    Store(#[from] StoreError),
}
