//! One classification run for one target date.

use chrono::NaiveDate;
use serde::Serialize;
use tempo_core::dates::format_date;
use tempo_core::entities::{Classification, Entry, Vocabulary};
use tempo_core::enums::Attribute;

use crate::error::EngineError;
use crate::gateway::{RecordStore, TextClassifier};
use crate::matching::resolve_label;
use crate::prompt::build_prompt;

/// Both vocabularies, read once at the start of a run and shared read-only.
#[derive(Debug, Clone, Default)]
pub struct Vocabularies {
    pub category: Vocabulary,
    pub time_type: Vocabulary,
}

impl Vocabularies {
    #[must_use]
    pub const fn get(&self, attribute: Attribute) -> &Vocabulary {
        match attribute {
            Attribute::Category => &self.category,
            Attribute::TimeType => &self.time_type,
        }
    }
}

/// What happened to a single entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryOutcome {
    /// Both attributes were already set; nothing was sent anywhere.
    AlreadyComplete,
    /// Content was blank; nothing to classify.
    BlankContent,
    /// Every missing attribute has an empty vocabulary, so nothing was asked.
    NothingToClassify,
    /// At least one attribute was resolved and written.
    Updated(Classification),
    /// Nothing resolved, so no write was issued.
    Unresolved,
    /// Something resolved but the store rejected the write.
    PersistFailed(Classification),
}

/// Counts reported at the end of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub date: String,
    pub total: usize,
    pub updated: usize,
    pub already_complete: usize,
    pub skipped_blank: usize,
    pub skipped_no_options: usize,
    pub unresolved: usize,
    pub failed: usize,
}

impl RunSummary {
    fn new(date: NaiveDate, total: usize) -> Self {
        Self {
            date: format_date(date),
            total,
            ..Default::default()
        }
    }

    fn record(&mut self, outcome: &EntryOutcome) {
        match outcome {
            EntryOutcome::AlreadyComplete => self.already_complete += 1,
            EntryOutcome::BlankContent => self.skipped_blank += 1,
            EntryOutcome::NothingToClassify => self.skipped_no_options += 1,
            EntryOutcome::Updated(_) => self.updated += 1,
            EntryOutcome::Unresolved => self.unresolved += 1,
            EntryOutcome::PersistFailed(_) => self.failed += 1,
        }
    }

    /// Entries that were sent to the classifier.
    #[must_use]
    pub const fn processed(&self) -> usize {
        self.updated + self.unresolved + self.failed
    }
}

/// Drives classification runs against a record store and a classifier.
pub struct ClassificationEngine<S, C> {
    store: S,
    classifier: C,
}

impl<S: RecordStore, C: TextClassifier> ClassificationEngine<S, C> {
    pub const fn new(store: S, classifier: C) -> Self {
        Self { store, classifier }
    }

    pub const fn store(&self) -> &S {
        &self.store
    }

    pub const fn classifier(&self) -> &C {
        &self.classifier
    }

    /// Classify every incomplete entry dated `date`.
    ///
    /// Entries are handled one at a time; a failure on one entry is logged
    /// and counted without affecting the rest.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::MissingVocabulary`] if the category vocabulary
    /// is empty (no entries are fetched in that case), and
    /// [`EngineError::Store`] if a vocabulary or the entry list cannot be
    /// fetched.
    pub async fn process(&self, date: NaiveDate) -> Result<RunSummary, EngineError> {
        tracing::info!(date = %format_date(date), "processing time records");

        let vocabularies = self.load_vocabularies().await?;

        let entries = self.store.fetch_entries(date).await?;
        let mut summary = RunSummary::new(date, entries.len());
        if entries.is_empty() {
            tracing::info!(date = %summary.date, "no time records found");
            return Ok(summary);
        }
        tracing::info!(count = entries.len(), date = %summary.date, "found time records");

        for entry in &entries {
            let outcome = self.process_entry(entry, &vocabularies).await;
            summary.record(&outcome);
        }

        tracing::info!(
            total = summary.total,
            updated = summary.updated,
            already_complete = summary.already_complete,
            skipped_blank = summary.skipped_blank,
            skipped_no_options = summary.skipped_no_options,
            unresolved = summary.unresolved,
            failed = summary.failed,
            "processing complete"
        );
        Ok(summary)
    }

    async fn load_vocabularies(&self) -> Result<Vocabularies, EngineError> {
        let category = self.store.fetch_vocabulary(Attribute::Category).await?;
        if category.is_empty() {
            tracing::error!("no classification options found in database");
            return Err(EngineError::MissingVocabulary {
                attribute: Attribute::Category,
            });
        }
        tracing::info!(options = ?category.labels(), "available classification options");

        let time_type = self.store.fetch_vocabulary(Attribute::TimeType).await?;
        if time_type.is_empty() {
            tracing::warn!("no time type options found in database; time type will not be set");
        } else {
            tracing::info!(options = ?time_type.labels(), "available time type options");
        }

        Ok(Vocabularies {
            category,
            time_type,
        })
    }

    /// Classify and persist the missing attributes of one entry.
    ///
    /// Attributes already set on the entry are never re-classified or
    /// re-written.
    pub async fn process_entry(&self, entry: &Entry, vocabularies: &Vocabularies) -> EntryOutcome {
        if entry.is_complete() {
            tracing::info!(
                entry_id = %entry.id,
                category = entry.category.as_deref().unwrap_or_default(),
                time_type = entry.time_type.as_deref().unwrap_or_default(),
                "record already classified and typed"
            );
            return EntryOutcome::AlreadyComplete;
        }

        let content = entry.trimmed_content();
        if content.is_empty() {
            tracing::warn!(entry_id = %entry.id, "record has no content, skipping");
            return EntryOutcome::BlankContent;
        }
        tracing::info!(entry_id = %entry.id, content = %preview(content, 100), "processing record");

        let mut classification = Classification::default();
        let mut attempted = false;
        for attribute in entry.missing_attributes() {
            let vocabulary = vocabularies.get(attribute);
            if vocabulary.is_empty() {
                continue;
            }
            attempted = true;
            if let Some(label) = self.classify_attribute(attribute, content, vocabulary).await {
                classification.set(attribute, label);
            }
        }

        if !attempted {
            tracing::info!(entry_id = %entry.id, "no options for missing attributes, skipping");
            return EntryOutcome::NothingToClassify;
        }
        if classification.is_empty() {
            tracing::warn!(entry_id = %entry.id, "no attribute resolved, record left unchanged");
            return EntryOutcome::Unresolved;
        }

        if self
            .store
            .persist_classification(&entry.id, &classification)
            .await
        {
            tracing::info!(
                entry_id = %entry.id,
                category = classification.category.as_deref().unwrap_or_default(),
                time_type = classification.time_type.as_deref().unwrap_or_default(),
                "successfully classified record"
            );
            EntryOutcome::Updated(classification)
        } else {
            tracing::error!(entry_id = %entry.id, "failed to update record");
            EntryOutcome::PersistFailed(classification)
        }
    }

    async fn classify_attribute(
        &self,
        attribute: Attribute,
        content: &str,
        vocabulary: &Vocabulary,
    ) -> Option<String> {
        let prompt = build_prompt(attribute, content, vocabulary);

        let Some(raw) = self.classifier.classify(&prompt).await else {
            tracing::warn!(
                %attribute,
                content = %preview(content, 50),
                "classifier returned no {}",
                attribute.display_name()
            );
            return None;
        };

        match resolve_label(&raw, vocabulary) {
            Some(matched) => {
                tracing::info!(%attribute, label = matched.label, tier = %matched.tier, "match found");
                Some(matched.label.to_string())
            }
            None => {
                tracing::warn!(
                    %attribute,
                    raw = %raw,
                    options = ?vocabulary.labels(),
                    "no matching {} found",
                    attribute.display_name()
                );
                None
            }
        }
    }
}

/// First `max_chars` characters of `text`, for log lines.
fn preview(text: &str, max_chars: usize) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}
