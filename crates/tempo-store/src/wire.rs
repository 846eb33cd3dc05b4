//! Serde shapes for the subset of the Notion API Tempo consumes.

use std::collections::HashMap;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct QueryResponse {
    #[serde(default)]
    pub results: Vec<Page>,
    #[serde(default)]
    pub has_more: bool,
    pub next_cursor: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Page {
    pub id: String,
    #[serde(default)]
    pub properties: HashMap<String, PageProperty>,
}

/// A page property value, tagged by its `type` field.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PageProperty {
    Title {
        #[serde(default)]
        title: Vec<RichText>,
    },
    RichText {
        #[serde(default)]
        rich_text: Vec<RichText>,
    },
    Select {
        select: Option<SelectOption>,
    },
    Date {
        date: Option<DateValue>,
    },
    #[serde(other)]
    Other,
}

#[derive(Debug, Deserialize)]
pub struct RichText {
    #[serde(default)]
    pub plain_text: String,
}

#[derive(Debug, Deserialize)]
pub struct SelectOption {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct DateValue {
    pub start: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Database {
    #[serde(default)]
    pub title: Vec<RichText>,
    #[serde(default)]
    pub properties: HashMap<String, SchemaProperty>,
}

/// A database schema property, tagged by its `type` field.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SchemaProperty {
    Select { select: SelectSchema },
    #[serde(other)]
    Other,
}

#[derive(Debug, Deserialize)]
pub struct SelectSchema {
    #[serde(default)]
    pub options: Vec<SelectOption>,
}

/// Concatenate the plain text of every segment.
pub fn plain_text(segments: &[RichText]) -> String {
    segments.iter().map(|s| s.plain_text.as_str()).collect()
}
