//! Map artifact settings.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Where and how the route map is written
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    /// Fixed artifact path, overwritten on every render
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,

    /// Initial zoom level of the rendered map
    #[serde(default = "default_zoom")]
    pub zoom: u8,
}

fn default_output_path() -> PathBuf {
    PathBuf::from("route_map.html")
}

const fn default_zoom() -> u8 {
    12
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            output_path: default_output_path(),
            zoom: default_zoom(),
        }
    }
}

impl MapConfig {
    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error message if the path is empty or the zoom is outside
    /// the 0-19 range of standard OpenStreetMap tiles.
    pub fn validate(&self) -> Result<(), String> {
        if self.output_path.as_os_str().is_empty() {
            return Err("map.output_path must not be empty".to_string());
        }
        if self.zoom > 19 {
            return Err(format!("map.zoom must be at most 19, got {}", self.zoom));
        }
        Ok(())
    }
}
