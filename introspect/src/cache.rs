//! Reading the JSON caches Meson writes under `meson-info/`.

use std::path::Path;

use serde::de::DeserializeOwned;

/// Reads `path` and parses it as JSON.
///
/// Returns `None` when the file is missing, unreadable, or not valid JSON of
/// the expected shape; callers fall back to invoking the tool directly.
pub(crate) async fn read_json_if_exists<T: DeserializeOwned>(path: &Path) -> Option<T> {
    let text = match tokio::fs::read_to_string(path).await {
        Ok(text) => text,
        Err(err) => {
            tracing::debug!("no usable cache at {}: {err}", path.display());
            return None;
        }
    };
    match serde_json::from_str(&text) {
        Ok(parsed) => Some(parsed),
        Err(err) => {
            tracing::debug!("skipping invalid cache at {}: {err}", path.display());
            None
        }
    }
}
