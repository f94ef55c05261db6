//! Application configuration loaded from environment variables.

/// Driver configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `CHECKOUT_BASE_URL` — origin of the storefront backend (default: `"http://localhost:3000"`)
/// - `CHECKOUT_PATH` — path of the checkout endpoint (default: `"/api/checkout"`)
/// - `RUST_LOG` — tracing filter directive (default: `"info"`)
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub checkout_path: String,
    pub log_level: String,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: std::env::var("CHECKOUT_BASE_URL").unwrap_or(defaults.base_url),
            checkout_path: std::env::var("CHECKOUT_PATH").unwrap_or(defaults.checkout_path),
            log_level: std::env::var("RUST_LOG").unwrap_or(defaults.log_level),
        }
    }

    /// Returns the full checkout endpoint URL.
    pub fn endpoint(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        if self.checkout_path.starts_with('/') {
            format!("{base}{}", self.checkout_path)
        } else {
            format!("{base}/{}", self.checkout_path)
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            checkout_path: submission::DEFAULT_CHECKOUT_PATH.to_string(),
            log_level: "info".to_string(),
        }
    }
}
