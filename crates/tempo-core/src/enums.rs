//! Enums shared across Tempo crates.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Attribute
// ---------------------------------------------------------------------------

/// One of the two entry attributes inferred by the classifier.
///
/// Both attributes draw their values from a [`Vocabulary`](crate::entities::Vocabulary)
/// read from the store schema at the start of every run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    /// Topical category of the entry. Mandatory for a run to proceed.
    Category,
    /// Time-use type of the entry. Optional; skipped when its vocabulary is empty.
    TimeType,
}

impl Attribute {
    /// Both attributes, in processing order.
    pub const ALL: [Self; 2] = [Self::Category, Self::TimeType];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Category => "category",
            Self::TimeType => "time_type",
        }
    }

    /// Human-readable label used in log lines.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Category => "classification",
            Self::TimeType => "time type",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
