//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Console configuration read from `LIKEAT_*` environment variables.
pub struct AppConfig {
    /// Base URL of the Likeat API, e.g. `http://localhost:8080`.
    pub api_base_url: String,
    /// Optional pre-issued access token for authenticated requests.
    #[serde(default)]
    pub access_token: Option<String>,
}
