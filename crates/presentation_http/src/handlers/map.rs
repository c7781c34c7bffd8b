//! Route map artifact handler

use std::io::ErrorKind;

use axum::{extract::State, response::Html};
use tracing::debug;

use crate::{error::ApiError, state::AppState};

/// Serve the most recently rendered route map
///
/// The file is read on every request so a new render is visible without a
/// restart.
pub async fn route_map(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let path = state.artifact_path();
    match tokio::fs::read_to_string(path).await {
        Ok(html) => {
            debug!(bytes = html.len(), "Serving route map");
            Ok(Html(html))
        },
        Err(e) if e.kind() == ErrorKind::NotFound => Err(ApiError::NotFound(
            "No route map has been rendered yet".to_string(),
        )),
        Err(e) => Err(ApiError::Internal(format!(
            "failed to read {}: {e}",
            path.display()
        ))),
    }
}
