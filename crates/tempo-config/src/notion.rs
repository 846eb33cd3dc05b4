//! Record store (Notion) configuration.

use serde::{Deserialize, Serialize};

fn default_base_url() -> String {
    "https://api.notion.com/v1".to_string()
}

fn default_version() -> String {
    "2022-06-28".to_string()
}

/// Default request timeout in seconds.
const fn default_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NotionConfig {
    /// Integration token, sent as a bearer credential.
    #[serde(default)]
    pub token: String,

    /// Identifier of the time-tracking database.
    #[serde(default)]
    pub database_id: String,

    /// API root, overridable for compatible proxies and tests.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Value of the `Notion-Version` header.
    #[serde(default = "default_version")]
    pub version: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default)]
    pub properties: PropertyNames,
}

impl Default for NotionConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            database_id: String::new(),
            base_url: default_base_url(),
            version: default_version(),
            timeout_secs: default_timeout_secs(),
            properties: PropertyNames::default(),
        }
    }
}

impl NotionConfig {
    /// Check if the credential and database identifier are both present.
    pub fn is_configured(&self) -> bool {
        !self.token.is_empty() && !self.database_id.is_empty()
    }
}

fn default_category_property() -> String {
    "分类".to_string()
}

fn default_time_type_property() -> String {
    "时间类型".to_string()
}

fn default_content_property() -> String {
    "记录".to_string()
}

fn default_date_property() -> String {
    "时间段".to_string()
}

/// Names of the database properties Tempo reads and writes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PropertyNames {
    /// Select property holding the category.
    #[serde(default = "default_category_property")]
    pub category: String,

    /// Select property holding the time-use type.
    #[serde(default = "default_time_type_property")]
    pub time_type: String,

    /// Title or rich-text property holding the entry description.
    #[serde(default = "default_content_property")]
    pub content: String,

    /// Date property used to select a day's entries.
    #[serde(default = "default_date_property")]
    pub date: String,
}

impl Default for PropertyNames {
    fn default() -> Self {
        Self {
            category: default_category_property(),
            time_type: default_time_type_property(),
            content: default_content_property(),
            date: default_date_property(),
        }
    }
}
