//! Entry queries by date.

use chrono::NaiveDate;
use serde_json::json;
use tempo_config::PropertyNames;
use tempo_core::dates::{format_date, parse_date};
use tempo_core::entities::Entry;

use crate::wire::{Page, PageProperty, QueryResponse, plain_text};
use crate::{RecordStoreClient, error::StoreError, http::check_response};

/// Maximum page size accepted by the query endpoint.
const PAGE_SIZE: u32 = 100;

impl RecordStoreClient {
    /// Fetch every entry whose date property equals `date`.
    ///
    /// Follows `next_cursor` until the store reports no more results. Zero
    /// matches is an empty vector, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the HTTP request fails, the store returns a
    /// non-success status, or the response cannot be parsed.
    pub async fn fetch_entries(&self, date: NaiveDate) -> Result<Vec<Entry>, StoreError> {
        let date_str = format_date(date);
        tracing::info!(date = %date_str, "fetching time records");

        let url = format!("{}/query", self.database_url());
        let mut entries = Vec::new();
        let mut cursor: Option<String> = None;

        loop {
            let body = query_body(&self.properties.date, &date_str, cursor.as_deref());
            let resp = self
                .request(reqwest::Method::POST, &url)
                .json(&body)
                .send()
                .await?;
            let resp = check_response(resp).await.inspect_err(|e| {
                tracing::error!(error = %e, "failed to fetch records");
            })?;

            let data: QueryResponse = resp
                .json()
                .await
                .map_err(|e| StoreError::Parse(format!("query response: {e}")))?;

            entries.extend(
                data.results
                    .into_iter()
                    .map(|page| page_to_entry(page, &self.properties, date)),
            );

            match (data.has_more, data.next_cursor) {
                (true, Some(next)) => cursor = Some(next),
                _ => break,
            }
        }

        tracing::info!(count = entries.len(), "fetched time records");
        Ok(entries)
    }
}

fn query_body(date_property: &str, date: &str, cursor: Option<&str>) -> serde_json::Value {
    let mut body = json!({
        "filter": {
            "property": date_property,
            "date": { "equals": date }
        },
        "page_size": PAGE_SIZE,
    });
    if let Some(cursor) = cursor {
        body["start_cursor"] = json!(cursor);
    }
    body
}

/// Map a raw page onto an [`Entry`].
///
/// Content comes from a `title` or `rich_text` property; any other shape
/// yields empty content. Select properties that are unset map to `None`.
fn page_to_entry(page: Page, names: &PropertyNames, queried: NaiveDate) -> Entry {
    let content = match page.properties.get(&names.content) {
        Some(PageProperty::Title { title }) => plain_text(title),
        Some(PageProperty::RichText { rich_text }) => plain_text(rich_text),
        _ => {
            tracing::warn!(entry_id = %page.id, property = %names.content, "no content property found in record");
            String::new()
        }
    };

    let date = match page.properties.get(&names.date) {
        Some(PageProperty::Date {
            date: Some(value), ..
        }) => value
            .start
            .as_deref()
            .and_then(|start| start.get(..10))
            .and_then(|day| parse_date(day).ok())
            .unwrap_or(queried),
        _ => queried,
    };

    Entry {
        content: content.trim().to_string(),
        date,
        category: select_name(&page, &names.category),
        time_type: select_name(&page, &names.time_type),
        id: page.id,
    }
}

fn select_name(page: &Page, property: &str) -> Option<String> {
    match page.properties.get(property) {
        Some(PageProperty::Select {
            select: Some(option),
        }) if !option.name.is_empty() => Some(option.name.clone()),
        _ => None,
    }
}
