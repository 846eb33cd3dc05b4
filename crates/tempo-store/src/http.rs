//! Status handling for Notion responses.
//!
//! Notion reports failures as `{"object":"error","status":..,"code":..,"message":..}`.
//! Those fields become [`StoreError::Api`]; a body that is not such an object is
//! kept raw.

use serde::Deserialize;

use crate::error::StoreError;

/// Seconds to wait when a 429 carries no usable `Retry-After`.
const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

#[derive(Debug, Deserialize)]
struct NotionErrorBody {
    code: String,
    message: String,
}

/// Pass a successful response through, or turn it into a [`StoreError`].
///
/// 429 maps to [`StoreError::RateLimited`]. Any other non-2xx maps to
/// [`StoreError::Api`] with the message formatted as `code: message`.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, StoreError> {
    let status = resp.status();
    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        return Err(StoreError::RateLimited {
            retry_after_secs: parse_retry_after(&resp),
        });
    }
    if status.is_success() {
        return Ok(resp);
    }

    let body = resp.text().await.unwrap_or_default();
    Err(StoreError::Api {
        status: status.as_u16(),
        message: error_message(&body),
    })
}

fn error_message(body: &str) -> String {
    serde_json::from_str::<NotionErrorBody>(body).map_or_else(
        |_| body.to_string(),
        |error| format!("{}: {}", error.code, error.message),
    )
}

fn parse_retry_after(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse::<u64>().ok())
        .unwrap_or(DEFAULT_RETRY_AFTER_SECS)
}
