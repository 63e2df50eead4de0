use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub service: ServiceConfig,
    pub external: ExternalConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub name: String,
    pub version: String,
    /// Raises log verbosity to debug
    pub debug: bool,
    pub http: HttpConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub bind: String,
    pub port: u16,
    /// Prefix the session routes are mounted under (health stays at the root)
    pub api_prefix: String,
    /// CORS allow-list
    pub allowed_origins: Vec<String>,
}

/// API keys for downstream voice and transcription services. Carried in the
/// deployment surface but unused by the session core.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ExternalConfig {
    pub elevenlabs_api_key: String,
    pub openai_api_key: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            name: "duolog-sessions".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            debug: false,
            http: HttpConfig::default(),
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0".to_string(),
            port: 8000,
            api_prefix: "/api/v1".to_string(),
            allowed_origins: vec![
                "http://localhost:3000".to_string(),
                "http://localhost:3001".to_string(),
            ],
        }
    }
}

impl Config {
    /// Load configuration from an optional file plus environment variables.
    ///
    /// Every field has a default, so the service runs with no file and no
    /// environment. Environment variables use the `DUOLOG` prefix with `__`
    /// as the section separator, e.g. `DUOLOG__SERVICE__HTTP__PORT=9000`.
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(config::Environment::with_prefix("DUOLOG").separator("__"))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}
