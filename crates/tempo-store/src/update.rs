//! Partial page updates.

use serde_json::{Map, Value, json};
use tempo_core::entities::Classification;

use crate::{RecordStoreClient, error::StoreError, http::check_response};

impl RecordStoreClient {
    /// Write the resolved attributes of `classification` onto one entry.
    ///
    /// Only attributes that are `Some` are sent; everything else on the page
    /// is left untouched. Returns `false` on any failure after logging it, so
    /// a single rejected write never aborts a run.
    pub async fn persist_classification(
        &self,
        entry_id: &str,
        classification: &Classification,
    ) -> bool {
        tracing::info!(
            entry_id,
            category = classification.category.as_deref().unwrap_or(""),
            time_type = classification.time_type.as_deref().unwrap_or(""),
            "updating record"
        );

        match self.try_persist(entry_id, classification).await {
            Ok(()) => {
                tracing::info!(entry_id, "successfully updated record");
                true
            }
            Err(StoreError::Api { status, message }) => {
                tracing::error!(entry_id, status, body = %message, "failed to update record");
                false
            }
            Err(e) => {
                tracing::error!(entry_id, error = %e, "error updating record");
                false
            }
        }
    }

    async fn try_persist(
        &self,
        entry_id: &str,
        classification: &Classification,
    ) -> Result<(), StoreError> {
        let body = update_body(self, classification);
        let resp = self
            .request(reqwest::Method::PATCH, &self.page_url(entry_id))
            .json(&body)
            .send()
            .await?;
        check_response(resp).await?;
        Ok(())
    }
}

fn update_body(client: &RecordStoreClient, classification: &Classification) -> Value {
    let properties: Map<String, Value> = classification
        .iter()
        .map(|(attribute, label)| {
            (
                client.property_for(attribute).to_string(),
                json!({ "select": { "name": label } }),
            )
        })
        .collect();
    json!({ "properties": properties })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempo_config::NotionConfig;
    use tempo_core::enums::Attribute;

    fn client() -> RecordStoreClient {
        RecordStoreClient::new(&NotionConfig::default()).unwrap()
    }

    #[test]
    fn body_contains_only_resolved_attributes() {
        let mut classification = Classification::default();
        classification.set(Attribute::Category, "学习");

        assert_eq!(
            update_body(&client(), &classification),
            json!({ "properties": { "分类": { "select": { "name": "学习" } } } })
        );
    }

    #[test]
    fn body_with_both_attributes() {
        let classification = Classification {
            category: Some("工作".into()),
            time_type: Some("Deep".into()),
        };
        let body = update_body(&client(), &classification);
        assert_eq!(body["properties"]["分类"]["select"]["name"], "工作");
        assert_eq!(body["properties"]["时间类型"]["select"]["name"], "Deep");
    }
}
