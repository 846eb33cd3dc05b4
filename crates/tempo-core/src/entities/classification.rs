use serde::{Deserialize, Serialize};

use crate::enums::Attribute;

/// Attribute values resolved for one entry during a run.
///
/// A `None` field means "leave untouched in the store", never "clear".
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Classification {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_type: Option<String>,
}

impl Classification {
    #[must_use]
    pub fn get(&self, attribute: Attribute) -> Option<&str> {
        match attribute {
            Attribute::Category => self.category.as_deref(),
            Attribute::TimeType => self.time_type.as_deref(),
        }
    }

    pub fn set(&mut self, attribute: Attribute, label: impl Into<String>) {
        let label = Some(label.into());
        match attribute {
            Attribute::Category => self.category = label,
            Attribute::TimeType => self.time_type = label,
        }
    }

    /// Whether nothing was resolved, in which case no write is issued.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.category.is_none() && self.time_type.is_none()
    }

    /// Resolved `(attribute, label)` pairs in processing order.
    pub fn iter(&self) -> impl Iterator<Item = (Attribute, &str)> {
        Attribute::ALL
            .into_iter()
            .filter_map(|attribute| self.get(attribute).map(|label| (attribute, label)))
    }
}
