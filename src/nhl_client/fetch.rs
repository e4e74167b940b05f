//! JSON fetching with HTTP status and body error classification

use reqwest::Client;
use serde_json::Value;
use tracing::{debug, error, info, instrument};

use crate::error::AppError;

/// Fetches `url` with the given query parameters and parses the body as JSON.
///
/// Makes exactly one request. Non-success statuses, transport failures and
/// unparsable bodies are mapped to specific [`AppError`] variants:
/// - 404 → `ApiNotFound`, 429 → `ApiRateLimit`, other 4xx → `ApiClientError`
/// - 502/503 → `ApiServiceUnavailable`, other 5xx → `ApiServerError`
/// - timeouts → `NetworkTimeout`, connect failures → `NetworkConnection`
/// - empty body → `ApiNoData`, non-JSON body → `ApiMalformedJson`
#[instrument(skip(client, query))]
pub async fn fetch_json(
    client: &Client,
    url: &str,
    query: &[(&str, String)],
) -> Result<Value, AppError> {
    info!("Fetching data from URL: {url}");

    let mut request = client.get(url);
    if !query.is_empty() {
        debug!("Query parameters: {:?}", query);
        request = request.query(query);
    }

    let response = match request.send().await {
        Ok(resp) => resp,
        Err(e) => {
            error!("Request failed for URL {}: {}", url, e);
            return if e.is_timeout() {
                Err(AppError::network_timeout(url))
            } else if e.is_connect() {
                Err(AppError::network_connection(url, e.to_string()))
            } else {
                Err(AppError::ApiFetch(e))
            };
        }
    };

    let status = response.status();
    debug!("Response status: {status}");

    if !status.is_success() {
        let status_code = status.as_u16();
        let reason = status.canonical_reason().unwrap_or("Unknown error");

        error!("HTTP {} - {} (URL: {})", status_code, reason, url);

        return Err(match status_code {
            404 => AppError::api_not_found(url),
            429 => AppError::api_rate_limit(reason, url),
            400..=499 => AppError::api_client_error(status_code, reason, url),
            502 | 503 => AppError::api_service_unavailable(status_code, reason, url),
            _ => AppError::api_server_error(status_code, reason, url),
        });
    }

    let response_text = match response.text().await {
        Ok(text) => text,
        Err(e) => {
            error!("Failed to read response text from URL {}: {}", url, e);
            return Err(AppError::ApiFetch(e));
        }
    };

    debug!("Response length: {} bytes", response_text.len());

    if response_text.trim().is_empty() {
        return Err(AppError::api_no_data("Response body is empty", url));
    }

    serde_json::from_str::<Value>(&response_text).map_err(|e| {
        error!("Failed to parse API response: {} (URL: {})", e, url);
        error!(
            "Response text (first 200 chars): {}",
            &response_text.chars().take(200).collect::<String>()
        );
        AppError::api_malformed_json(e.to_string(), url)
    })
}

/// Takes the named field out of a JSON object payload.
///
/// Used for endpoints whose useful content sits under a wrapper key such as
/// `data`, `seasons`, `games` or `gameLog`.
pub fn take_field(mut payload: Value, field: &str, url: &str) -> Result<Value, AppError> {
    match payload.get_mut(field) {
        Some(value) => Ok(value.take()),
        None => Err(AppError::api_unexpected_structure(
            format!("missing `{field}` field"),
            url,
        )),
    }
}
