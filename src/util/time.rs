//! Timer and date formatting helpers shared by the poller and the views.

use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::model::de::parse_timestamp;

/// Suspends the current task for `duration`.
///
/// Uses the browser's `setTimeout` on wasm and the tokio timer everywhere else.
#[cfg(target_arch = "wasm32")]
pub async fn sleep(duration: Duration) {
    gloo_timers::future::sleep(duration).await;
}

/// Suspends the current task for `duration`.
///
/// Uses the browser's `setTimeout` on wasm and the tokio timer everywhere else.
#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

/// Formats a timestamp as `May 1, 2024`, or `-` when absent.
pub fn format_date(datetime: Option<&DateTime<Utc>>) -> String {
    match datetime {
        Some(datetime) => datetime.format("%b %-d, %Y").to_string(),
        None => "-".to_string(),
    }
}

/// Formats a raw date string from the backend, or `-` when absent or unparseable.
pub fn format_date_str(raw: Option<&str>) -> String {
    format_date(raw.and_then(parse_timestamp).as_ref())
}
