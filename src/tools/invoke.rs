use serde_json::Value;
use std::future::Future;
use tracing::{debug, info, warn};

use super::envelope::Envelope;
use crate::error::AppError;

/// Awaits one client call and normalizes its outcome into an envelope.
///
/// Success wraps the payload under `result_key` untouched; any error becomes
/// `{"error": <message>}`. Nothing is retried.
pub async fn invoke<F>(result_key: &'static str, call: F) -> Envelope
where
    F: Future<Output = Result<Value, AppError>>,
{
    normalize(result_key, call.await)
}

/// Maps an already computed client result to an envelope.
pub fn normalize(result_key: &'static str, result: Result<Value, AppError>) -> Envelope {
    match result {
        Ok(payload) => {
            debug!("Call for `{result_key}` succeeded");
            Envelope::success(result_key, payload)
        }
        Err(e) => {
            if e.is_not_found() {
                info!("Call for `{result_key}` found nothing: {e}");
            } else {
                warn!("Call for `{result_key}` failed: {e}");
            }
            Envelope::from_error(&e)
        }
    }
}
