use serde::Deserialize;
use std::time::Duration;

/// Service settings, read from `Rocket.toml` and `ROCKET_*` environment variables (a `.env`
/// file is loaded first).
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Config {
    /// Required in the `X-API-Key` header of every API route when set.
    #[serde(default)]
    pub(crate) api_key: Option<String>,
    #[serde(default = "default_espn_base")]
    pub(crate) espn_base: String,
    #[serde(default = "default_feed_timeout_secs")]
    pub(crate) feed_timeout_secs: u64,
    #[serde(default = "default_cors_origins")]
    pub(crate) cors_origins: Vec<String>,
}

fn default_espn_base() -> String {
    "https://site.web.api.espn.com".into()
}

fn default_feed_timeout_secs() -> u64 {
    12
}

fn default_cors_origins() -> Vec<String> {
    vec!["*".into()]
}

impl Config {
    pub(crate) fn feed_timeout(&self) -> Duration {
        Duration::from_secs(self.feed_timeout_secs)
    }

    /// The value for `Access-Control-Allow-Origin`, if this origin may read responses.
    pub(crate) fn allowed_origin<'a>(&'a self, origin: Option<&'a str>) -> Option<&'a str> {
        if self.cors_origins.iter().any(|o| o == "*") {
            return Some("*");
        }
        let origin = origin?;
        self.cors_origins
            .iter()
            .any(|o| o == origin)
            .then(|| origin)
    }
}

impl Default for Config {
    fn default() -> Config {
        Config {
            api_key: None,
            espn_base: default_espn_base(),
            feed_timeout_secs: default_feed_timeout_secs(),
            cors_origins: default_cors_origins(),
        }
    }
}
