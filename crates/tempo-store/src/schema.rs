//! Database schema reads: vocabularies and connection checks.

use tempo_core::entities::Vocabulary;
use tempo_core::enums::Attribute;

use crate::wire::{Database, SchemaProperty, plain_text};
use crate::{RecordStoreClient, error::StoreError, http::check_response};

impl RecordStoreClient {
    /// Read the allowed labels for `attribute` from the database schema.
    ///
    /// Labels keep store-declared order. A property that is absent or not a
    /// select yields an empty [`Vocabulary`].
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on transport, status, or parse failure.
    pub async fn fetch_vocabulary(&self, attribute: Attribute) -> Result<Vocabulary, StoreError> {
        let property = self.property_for(attribute);
        tracing::info!(%attribute, property, "fetching options from database schema");

        let database = self.fetch_database().await?;
        let vocabulary = vocabulary_from_schema(&database, property);
        if vocabulary.is_empty() {
            tracing::warn!(property, "field not found or not a select field");
        } else {
            tracing::info!(
                property,
                count = vocabulary.len(),
                options = ?vocabulary.labels(),
                "found options"
            );
        }
        Ok(vocabulary)
    }

    /// Verify the credential and database identifier by reading the schema.
    ///
    /// Returns the database title, or `"Unknown"` when it has none.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on transport, status, or parse failure.
    pub async fn test_connection(&self) -> Result<String, StoreError> {
        let database = self.fetch_database().await?;
        let title = plain_text(&database.title);
        let title = if title.trim().is_empty() {
            "Unknown".to_string()
        } else {
            title
        };
        tracing::info!(%title, "record store connection test successful");
        Ok(title)
    }

    async fn fetch_database(&self) -> Result<Database, StoreError> {
        let resp = self
            .request(reqwest::Method::GET, &self.database_url())
            .send()
            .await?;
        let resp = check_response(resp).await.inspect_err(|e| {
            tracing::error!(error = %e, "failed to get database schema");
        })?;
        resp.json()
            .await
            .map_err(|e| StoreError::Parse(format!("database schema: {e}")))
    }
}

fn vocabulary_from_schema(database: &Database, property: &str) -> Vocabulary {
    match database.properties.get(property) {
        Some(SchemaProperty::Select { select }) => {
            select.options.iter().map(|o| o.name.as_str()).collect()
        }
        _ => Vocabulary::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const FIXTURE: &str = r#"{
        "object": "database",
        "id": "db-1",
        "title": [{ "type": "text", "plain_text": "Time Log" }],
        "properties": {
            "分类": {
                "id": "c1",
                "name": "分类",
                "type": "select",
                "select": {
                    "options": [
                        { "id": "1", "name": "工作", "color": "red" },
                        { "id": "2", "name": "学习", "color": "blue" },
                        { "id": "3", "name": "", "color": "gray" },
                        { "id": "4", "name": "工作", "color": "red" }
                    ]
                }
            },
            "时间类型": {
                "id": "t1",
                "name": "时间类型",
                "type": "multi_select",
                "multi_select": { "options": [{ "name": "Deep" }] }
            },
            "记录": { "id": "title", "name": "记录", "type": "title", "title": {} }
        }
    }"#;

    #[test]
    fn select_options_become_vocabulary() {
        let database: Database = serde_json::from_str(FIXTURE).unwrap();
        let vocabulary = vocabulary_from_schema(&database, "分类");
        assert_eq!(vocabulary.labels(), ["工作", "学习"]);
    }

    #[test]
    fn non_select_or_missing_property_is_empty() {
        let database: Database = serde_json::from_str(FIXTURE).unwrap();
        assert!(vocabulary_from_schema(&database, "时间类型").is_empty());
        assert!(vocabulary_from_schema(&database, "记录").is_empty());
        assert!(vocabulary_from_schema(&database, "missing").is_empty());
    }

    #[test]
    fn database_title_is_plain_text() {
        let database: Database = serde_json::from_str(FIXTURE).unwrap();
        assert_eq!(plain_text(&database.title), "Time Log");
    }
}
