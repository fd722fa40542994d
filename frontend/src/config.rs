use thiserror::Error;
use url::Url;

const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} is not a valid URL ({value:?}): {source}")]
    InvalidUrl {
        name: &'static str,
        value: String,
        #[source]
        source: url::ParseError,
    },
}

/// Where the backend lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Origin serving `/api/me` and `/logout`, without a trailing slash
    pub api_base_url: String,
    /// Endpoint that starts the Google OAuth flow
    pub login_url: String,
}

impl AppConfig {
    /// Load configuration baked in when the wasm bundle was built.
    ///
    /// Optional env vars:
    /// - `PORTAL_API_BASE_URL`: backend origin (default `http://localhost:5000`)
    /// - `PORTAL_LOGIN_URL`: login endpoint (default `{PORTAL_API_BASE_URL}/login`)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(
            option_env!("PORTAL_API_BASE_URL"),
            option_env!("PORTAL_LOGIN_URL"),
        )
    }

    pub fn from_values(
        api_base_url: Option<&str>,
        login_url: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let api_base_url = api_base_url
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_string();
        validate_url("PORTAL_API_BASE_URL", &api_base_url)?;

        let login_url = match login_url {
            Some(url) => url.to_string(),
            None => format!("{}/login", api_base_url),
        };
        validate_url("PORTAL_LOGIN_URL", &login_url)?;

        Ok(Self {
            api_base_url,
            login_url,
        })
    }

    /// Like [`AppConfig::from_env`], falling back to defaults on a bad override.
    pub fn load() -> Self {
        Self::from_env().unwrap_or_else(|e| {
            tracing::error!("Invalid configuration, using defaults: {}", e);
            Self::default()
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            login_url: format!("{}/login", DEFAULT_API_BASE_URL),
        }
    }
}

fn validate_url(name: &'static str, value: &str) -> Result<(), ConfigError> {
    Url::parse(value)
        .map(|_| ())
        .map_err(|source| ConfigError::InvalidUrl {
            name,
            value: value.to_string(),
            source,
        })
}
