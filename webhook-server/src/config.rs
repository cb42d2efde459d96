//! Configuration for the webhook server.

use clap::Parser;
use crystalpay::CrystalPay;
use crystalpay::CrystalPayError;
use crystalpay_types::config::LiteralOrEnv;
use serde::Deserialize;
use std::fs;
use std::net::IpAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

/// CLI arguments for the webhook server.
#[derive(Parser, Debug)]
#[command(name = "crystalpay-webhook")]
#[command(about = "CrystalPay payment webhook server")]
struct CliArgs {
    /// Path to the JSON configuration file
    #[arg(long, short, env = "CONFIG", default_value = "config.json")]
    config: PathBuf,
}

/// Server configuration.
///
/// `host` and `port` fall back to `$HOST` and `$PORT`, then to hardcoded defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "config_defaults::default_port")]
    port: u16,
    #[serde(default = "config_defaults::default_host")]
    host: IpAddr,
    #[serde(default = "config_defaults::default_webhook_path")]
    webhook_path: String,
    auth_login: LiteralOrEnv<String>,
    auth_secret: LiteralOrEnv<String>,
    /// Enables signature checks on incoming notifications.
    #[serde(default)]
    salt: Option<LiteralOrEnv<String>>,
    #[serde(default)]
    base_url: Option<Url>,
    #[serde(default)]
    timeout_secs: Option<u64>,
}

pub mod config_defaults {
    use std::env;
    use std::net::{IpAddr, Ipv4Addr};

    pub const DEFAULT_PORT: u16 = 8080;
    pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

    /// `$PORT`, then 8080.
    pub fn default_port() -> u16 {
        env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_PORT)
    }

    /// `$HOST`, then `0.0.0.0`.
    pub fn default_host() -> IpAddr {
        env::var("HOST")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_HOST)
    }

    pub fn default_webhook_path() -> String {
        crystalpay_axum::DEFAULT_WEBHOOK_PATH.to_string()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {0}: {1}")]
    FileRead(PathBuf, std::io::Error),
    #[error("Failed to parse config file: {0}")]
    JsonParse(#[from] serde_json::Error),
    #[error("Invalid CrystalPay client settings: {0}")]
    Client(#[from] CrystalPayError),
}

impl Config {
    /// Loads the file named by `--config` / `$CONFIG`.
    pub fn load() -> Result<Self, ConfigError> {
        let cli = CliArgs::parse();
        Self::load_from_path(&cli.config)
    }

    fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|e| ConfigError::FileRead(path.to_path_buf(), e))?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn host(&self) -> IpAddr {
        self.host
    }

    pub fn webhook_path(&self) -> &str {
        &self.webhook_path
    }

    pub fn salt(&self) -> Option<&str> {
        self.salt.as_ref().map(|salt| salt.as_str())
    }

    /// Builds the API client from the credentials and overrides in this config.
    pub fn client(&self) -> Result<CrystalPay, ConfigError> {
        let mut client = CrystalPay::new(self.auth_login.inner(), self.auth_secret.inner());
        if let Some(base_url) = &self.base_url {
            client = client.with_base_url(base_url.as_str())?;
        }
        if let Some(secs) = self.timeout_secs {
            client = client.with_timeout(Duration::from_secs(secs));
        }
        Ok(client)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config: Config =
            serde_json::from_str(r#"{ "auth_login": "shop", "auth_secret": "secret" }"#).unwrap();
        assert_eq!(config.webhook_path(), "/payment-webhook");
        assert!(config.salt().is_none());
        assert_eq!(
            config.client().unwrap().executor().base_url().as_str(),
            crystalpay::DEFAULT_BASE_URL
        );
    }

    #[test]
    fn test_full_config() {
        let config: Config = serde_json::from_str(
            r#"{
                "host": "127.0.0.1",
                "port": 9000,
                "webhook_path": "/hooks/crystalpay",
                "auth_login": "shop",
                "auth_secret": "secret",
                "salt": "salt",
                "base_url": "http://localhost:4000/v2",
                "timeout_secs": 5
            }"#,
        )
        .unwrap();
        assert_eq!(config.port(), 9000);
        assert_eq!(config.host(), "127.0.0.1".parse::<IpAddr>().unwrap());
        assert_eq!(config.salt(), Some("salt"));

        let client = config.client().unwrap();
        assert_eq!(
            client.executor().base_url().as_str(),
            "http://localhost:4000/v2/"
        );
        assert_eq!(client.executor().timeout(), Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_credentials_are_required() {
        let err = serde_json::from_str::<Config>(r#"{ "auth_login": "shop" }"#).unwrap_err();
        assert!(err.to_string().contains("auth_secret"));
    }
}
