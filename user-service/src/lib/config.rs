use std::env;

use auth::ConfigurationError;
use auth::SigningConfig;
use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub jwt: JwtConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
}

#[derive(Deserialize, Clone)]
pub struct JwtConfig {
    pub signing_key: String,
    pub issuer: String,
    pub audience: String,
    /// May be zero or negative; tokens are then issued already expired
    pub token_lifetime_minutes: i64,
    /// Re-read the user on every authenticated request instead of trusting
    /// the name and email carried by the token
    #[serde(default)]
    pub refresh_identity: bool,
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("signing_key", &"<redacted>")
            .field("issuer", &self.issuer)
            .field("audience", &self.audience)
            .field("token_lifetime_minutes", &self.token_lifetime_minutes)
            .field("refresh_identity", &self.refresh_identity)
            .finish()
    }
}

impl JwtConfig {
    /// Build the validated signing configuration.
    ///
    /// # Errors
    /// * `KeyTooShort` - `signing_key` is shorter than 32 bytes
    /// * `LifetimeOutOfRange` - `token_lifetime_minutes` does not fit a `Duration`
    pub fn signing_config(&self) -> Result<SigningConfig, ConfigurationError> {
        SigningConfig::from_settings(
            &self.signing_key,
            &self.issuer,
            &self.audience,
            self.token_lifetime_minutes,
        )
    }
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (JWT__SIGNING_KEY, SERVER__HTTP_PORT, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on environment-specific configuration
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Layer on environment variables (with __ as separator)
            // Example: JWT__SIGNING_KEY=... overrides jwt.signing_key
            .add_source(Environment::with_prefix("").separator("__"))
            .build()?;

        let config: Config = configuration.try_deserialize()?;

        Ok(config)
    }
}
