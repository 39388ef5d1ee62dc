//! Configuration loading utilities
//!
//! Layering: built-in defaults, then an optional YAML file named by
//! `STELLAR_CONFIG_FILE`, then individual environment variables.

use super::models::*;
use crate::utils::error::{Result, StellarError};
use std::path::Path;
use tracing::{debug, info, warn};

/// Environment variable naming an optional YAML configuration file
pub const CONFIG_FILE_ENV: &str = "STELLAR_CONFIG_FILE";

impl StellarConfig {
    /// Load `.env`, the optional config file and environment overrides, then validate
    pub fn load() -> Result<Self> {
        if let Ok(path) = dotenvy::dotenv() {
            debug!("Loaded environment from {:?}", path);
        }

        let mut config = match std::env::var(CONFIG_FILE_ENV) {
            Ok(path) => Self::from_file(&path)?,
            Err(_) => Self::default(),
        };

        config.apply_env_with(|key| std::env::var(key).ok())?;
        config.validate()?;

        info!(
            network = %config.network.network,
            horizon = %config.network.horizon_url,
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Read a YAML configuration file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = std::fs::read_to_string(path)
            .inspect_err(|e| warn!("Failed to read config file {}: {}", path.display(), e))?;
        let config = serde_yaml::from_str(&content)
            .inspect_err(|e| warn!("Failed to parse config file {}: {}", path.display(), e))?;
        Ok(config)
    }

    /// Apply overrides from a variable lookup
    ///
    /// Selecting a network without explicit URLs resets the endpoints to that
    /// network's defaults.
    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(network) = lookup("STELLAR_NETWORK") {
            let network: Network = network.parse()?;
            if network != self.network.network {
                let NetworkConfig {
                    request_timeout,
                    tx_timeout,
                    ..
                } = self.network;
                self.network = NetworkConfig {
                    request_timeout,
                    tx_timeout,
                    ..NetworkConfig::for_network(network)
                };
            }
        }
        if let Some(url) = lookup("STELLAR_HORIZON_URL") {
            self.network.horizon_url = url;
        }
        if let Some(url) = lookup("STELLAR_FRIENDBOT_URL") {
            self.network.friendbot_url = Some(url);
        }
        if let Some(timeout) = lookup("STELLAR_REQUEST_TIMEOUT") {
            self.network.request_timeout = timeout
                .parse()
                .map_err(|e| StellarError::Config(format!("Invalid request timeout: {}", e)))?;
        }
        if let Some(timeout) = lookup("STELLAR_TX_TIMEOUT") {
            self.network.tx_timeout = timeout
                .parse()
                .map_err(|e| StellarError::Config(format!("Invalid transaction timeout: {}", e)))?;
        }
        // An empty value, as left by a copied .env.example, counts as unset
        if let Some(secret) = lookup("STELLAR_SECRET_KEY").filter(|s| !s.trim().is_empty()) {
            self.secret_key = Some(SecretSeed::new(secret));
        }
        Ok(())
    }

    /// Check URLs, timeouts and network consistency
    pub fn validate(&self) -> Result<()> {
        let network = &self.network;

        if !crate::utils::is_valid_url(&network.horizon_url) {
            return Err(StellarError::Config(format!(
                "Invalid Horizon URL: {}",
                network.horizon_url
            )));
        }

        for other in [Network::Testnet, Network::Public] {
            if other != network.network
                && network.horizon_url.trim_end_matches('/') == other.default_horizon_url()
            {
                return Err(StellarError::Config(format!(
                    "Horizon URL {} serves the {} network, but {} is selected",
                    network.horizon_url, other, network.network
                )));
            }
        }

        if let Some(friendbot) = &network.friendbot_url {
            if network.network == Network::Public {
                return Err(StellarError::Config(
                    "Friendbot is only available on the test network".to_string(),
                ));
            }
            if !crate::utils::is_valid_url(friendbot) {
                return Err(StellarError::Config(format!(
                    "Invalid Friendbot URL: {}",
                    friendbot
                )));
            }
        }

        if network.request_timeout == 0 {
            return Err(StellarError::Config(
                "Request timeout must be greater than zero".to_string(),
            ));
        }
        if network.tx_timeout == 0 {
            return Err(StellarError::Config(
                "Transaction timeout must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }

    /// The configured source secret, or a configuration error naming the variable
    pub fn require_secret_key(&self) -> Result<&SecretSeed> {
        self.secret_key.as_ref().ok_or_else(|| {
            StellarError::Config(
                "No source account configured. Set STELLAR_SECRET_KEY (see .env.example)."
                    .to_string(),
            )
        })
    }
}
