//! # tempo-engine
//!
//! Classification engine for Tempo.
//!
//! A run for one date:
//! 1. reads the category and time-type vocabularies from the store schema
//!    (an empty category vocabulary aborts the run);
//! 2. fetches the day's entries;
//! 3. for each entry still missing an attribute, builds a prompt per missing
//!    attribute ([`prompt`]), asks the classifier, and resolves the answer
//!    against the vocabulary ([`matching`]);
//! 4. writes back only what resolved.
//!
//! The store and classifier are reached through the [`RecordStore`] and
//! [`TextClassifier`] traits ([`gateway`]).

pub mod engine;
pub mod gateway;
pub mod matching;
pub mod prompt;

mod error;

pub use engine::{ClassificationEngine, EntryOutcome, RunSummary, Vocabularies};
pub use error::EngineError;
pub use gateway::{RecordStore, TextClassifier};
pub use matching::{LabelMatch, MatchTier, resolve_label};
