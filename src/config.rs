use std::env;

/// Runtime configuration handed to the router at startup instead of living in
/// process-wide globals.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Shared secret for the delete endpoint, compared byte-for-byte.
    pub api_key: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let api_key = env::var("API_KEY").expect("API_KEY must be set");

        Self { api_key }
    }
}
