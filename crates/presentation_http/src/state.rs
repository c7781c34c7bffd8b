//! Application state shared across handlers

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

/// Shared application state
#[derive(Debug, Clone)]
pub struct AppState {
    artifact_path: Arc<PathBuf>,
}

impl AppState {
    /// State serving the artifact at `artifact_path`
    #[must_use]
    pub fn new(artifact_path: impl Into<PathBuf>) -> Self {
        Self {
            artifact_path: Arc::new(artifact_path.into()),
        }
    }

    /// Location of the route map artifact
    #[must_use]
    pub fn artifact_path(&self) -> &Path {
        &self.artifact_path
    }
}
