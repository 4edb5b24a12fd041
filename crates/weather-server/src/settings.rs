//! Server configuration
//!
//! Layered with the `config` crate: built-in defaults, then an optional
//! `weather-server.{toml,yaml,json}` in the working directory, then
//! `WEATHER_*` environment variables.

use anyhow::{Context, Result};
use axum::http::HeaderValue;
use config::builder::DefaultState;
use config::{ConfigBuilder, Environment, File};
use serde::Deserialize;
use std::net::SocketAddr;
use std::time::Duration;
use url::Url;

pub const CONFIG_FILE: &str = "weather-server";
pub const ENV_PREFIX: &str = "WEATHER";

pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8000";
pub const DEFAULT_PROVIDER_URL: &str = "http://api.weatherstack.com";
/// Weatherstack metric units
pub const DEFAULT_UNITS: &str = "m";
pub const DEFAULT_PROVIDER_TIMEOUT_SECS: i64 = 10;
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub bind_address: String,
    pub provider_url: String,
    pub provider_access_key: String,
    pub units: String,
    pub provider_timeout_secs: u64,
    pub cors_origin: String,
}

impl Settings {
    /// Load settings from the config file and environment
    pub fn load() -> Result<Self> {
        let builder = config::Config::builder()
            .add_source(File::with_name(CONFIG_FILE).required(false))
            .add_source(env_source());
        Self::from_builder(builder)
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self> {
        let settings: Settings = builder
            .set_default("bind_address", DEFAULT_BIND_ADDRESS)?
            .set_default("provider_url", DEFAULT_PROVIDER_URL)?
            .set_default("units", DEFAULT_UNITS)?
            .set_default("provider_timeout_secs", DEFAULT_PROVIDER_TIMEOUT_SECS)?
            .set_default("cors_origin", DEFAULT_CORS_ORIGIN)?
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration (is WEATHER_PROVIDER_ACCESS_KEY set?)")?;

        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<()> {
        if self.provider_access_key.trim().is_empty() {
            anyhow::bail!("provider_access_key must not be empty");
        }
        self.socket_addr()?;
        self.cors_origin_header()?;
        Ok(())
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.bind_address
            .parse()
            .with_context(|| format!("Failed to parse bind address: {}", self.bind_address))
    }

    /// The configured origin as sent in `Origin` headers, `scheme://host[:port]`
    pub fn cors_origin_header(&self) -> Result<HeaderValue> {
        let url = Url::parse(&self.cors_origin)
            .with_context(|| format!("Invalid CORS origin: {}", self.cors_origin))?;

        if !matches!(url.scheme(), "http" | "https") {
            anyhow::bail!("CORS origin must use http or https: {}", self.cors_origin);
        }
        if url.host().is_none()
            || url.path() != "/"
            || url.query().is_some()
            || url.fragment().is_some()
            || !url.username().is_empty()
            || url.password().is_some()
        {
            anyhow::bail!(
                "CORS origin must be scheme://host[:port] only: {}",
                self.cors_origin
            );
        }

        HeaderValue::from_str(&url.origin().ascii_serialization())
            .with_context(|| format!("Invalid CORS origin: {}", self.cors_origin))
    }

    pub fn provider_timeout(&self) -> Duration {
        Duration::from_secs(self.provider_timeout_secs)
    }
}

/// `WEATHER_*` variables, kept as strings. Numeric fields still convert on
/// deserialize, and access keys keep their exact digits.
fn env_source() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(vars: &[(&str, &str)]) -> Environment {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        env_source().source(Some(map))
    }

    fn builder() -> ConfigBuilder<DefaultState> {
        config::Config::builder()
    }

    #[test]
    fn test_defaults() {
        let settings =
            Settings::from_builder(builder().set_override("provider_access_key", "KEY").unwrap())
                .unwrap();

        assert_eq!(settings.bind_address, DEFAULT_BIND_ADDRESS);
        assert_eq!(settings.provider_url, DEFAULT_PROVIDER_URL);
        assert_eq!(settings.units, "m");
        assert_eq!(settings.provider_timeout(), Duration::from_secs(10));
        assert_eq!(settings.cors_origin, "http://localhost:3000");
        assert_eq!(settings.socket_addr().unwrap().port(), 8000);
    }

    #[test]
    fn test_overrides() {
        let settings = Settings::from_builder(
            builder()
                .set_override("provider_access_key", "KEY")
                .unwrap()
                .set_override("bind_address", "127.0.0.1:9000")
                .unwrap()
                .set_override("provider_timeout_secs", 3i64)
                .unwrap(),
        )
        .unwrap();

        assert_eq!(settings.socket_addr().unwrap().to_string(), "127.0.0.1:9000");
        assert_eq!(settings.provider_timeout(), Duration::from_secs(3));
    }

    #[test]
    fn test_missing_access_key() {
        assert!(Settings::from_builder(builder()).is_err());
    }

    #[test]
    fn test_blank_access_key() {
        let err = Settings::from_builder(builder().set_override("provider_access_key", "  ").unwrap())
            .unwrap_err();
        assert!(err.to_string().contains("provider_access_key"));
    }

    #[test]
    fn test_bad_bind_address() {
        let res = Settings::from_builder(
            builder()
                .set_override("provider_access_key", "KEY")
                .unwrap()
                .set_override("bind_address", "not-an-address")
                .unwrap(),
        );
        assert!(res.is_err());
    }

    #[test]
    fn test_bad_cors_origin() {
        for origin in [
            "not an origin at all",
            "localhost:3000",
            "ftp://localhost:3000",
            "http://localhost:3000/app",
            "http://localhost:3000?x=1",
        ] {
            let res = Settings::from_builder(
                builder()
                    .set_override("provider_access_key", "KEY")
                    .unwrap()
                    .set_override("cors_origin", origin)
                    .unwrap(),
            );
            assert!(res.is_err(), "accepted {}", origin);
        }
    }

    #[test]
    fn test_cors_origin_header() {
        let settings = Settings::from_builder(
            builder()
                .set_override("provider_access_key", "KEY")
                .unwrap()
                .set_override("cors_origin", "https://weather.example.com:8443/")
                .unwrap(),
        )
        .unwrap();

        assert_eq!(
            settings.cors_origin_header().unwrap(),
            "https://weather.example.com:8443"
        );
    }

    #[test]
    fn test_env_keeps_numeric_access_key() {
        let settings = Settings::from_builder(builder().add_source(env(&[
            ("WEATHER_PROVIDER_ACCESS_KEY", "0012345"),
            ("WEATHER_PROVIDER_TIMEOUT_SECS", "15"),
        ])))
        .unwrap();

        assert_eq!(settings.provider_access_key, "0012345");
        assert_eq!(settings.provider_timeout(), Duration::from_secs(15));
    }

    #[test]
    fn test_env_keeps_long_digit_access_key() {
        let key = "98765432109876543210987654321098";
        let settings = Settings::from_builder(
            builder().add_source(env(&[("WEATHER_PROVIDER_ACCESS_KEY", key)])),
        )
        .unwrap();

        assert_eq!(settings.provider_access_key, key);
    }
}
