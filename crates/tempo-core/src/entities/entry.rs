use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::enums::Attribute;

/// One time-tracking record from the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Entry {
    /// Opaque identifier assigned by the store.
    pub id: String,
    /// Free-text description. May be empty.
    pub content: String,
    pub date: NaiveDate,
    pub category: Option<String>,
    pub time_type: Option<String>,
}

impl Entry {
    /// Current value of `attribute`, if set.
    #[must_use]
    pub fn value(&self, attribute: Attribute) -> Option<&str> {
        match attribute {
            Attribute::Category => self.category.as_deref(),
            Attribute::TimeType => self.time_type.as_deref(),
        }
    }

    /// Whether both attributes are already set.
    ///
    /// An entry with only one attribute set is not complete and is still
    /// processed for the missing one.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.category.is_some() && self.time_type.is_some()
    }

    /// Attributes that still need a value, in processing order.
    #[must_use]
    pub fn missing_attributes(&self) -> Vec<Attribute> {
        Attribute::ALL
            .into_iter()
            .filter(|attribute| self.value(*attribute).is_none())
            .collect()
    }

    /// Content with surrounding whitespace removed; empty when there is nothing to classify.
    #[must_use]
    pub fn trimmed_content(&self) -> &str {
        self.content.trim()
    }
}
