//! API endpoint configuration

use tracing::info;

/// Environment variable holding the backend base URL, captured at build time
pub const API_BASE_ENV: &str = "RADAR_API_BASE";

const ARTISTS_PATH: &str = "/api/artists";

/// Backend location, read once at startup
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Load from the build environment.
    ///
    /// The web bundle has no process environment at runtime, so the base
    /// is baked in when the crate is compiled. Unset means same-origin.
    pub fn load() -> Self {
        let config = Self::new(option_env!("RADAR_API_BASE").unwrap_or_default());
        if config.base_url.is_empty() {
            info!("{API_BASE_ENV} not set, using same-origin API");
        } else {
            info!("Using API at {}", config.base_url);
        }
        config
    }

    /// Full URL of the artist list endpoint
    pub fn artists_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), ARTISTS_PATH)
    }
}
