//! Friendbot faucet client (test network only)

use super::client::{build_http_client, parse_base_url};
use super::error_mapper::{ErrorMapper, FriendbotErrorMapper};
use super::traits::FundingService;
use super::types::FundingReceipt;
use crate::config::{Network, NetworkConfig};
use crate::core::keys::parse_public_key;
use crate::utils::error::{Result, StellarError};
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info};
use url::Url;

/// Lumens Friendbot credits to a new account
pub const FRIENDBOT_FUNDING_XLM: f64 = 10_000.0;

/// Client for the Friendbot faucet
#[derive(Debug, Clone)]
pub struct FriendbotClient {
    http: Client,
    base_url: Url,
    mapper: FriendbotErrorMapper,
}

impl FriendbotClient {
    /// Create a client; fails on networks without a faucet
    pub fn new(config: &NetworkConfig) -> Result<Self> {
        let raw = match (&config.friendbot_url, config.network) {
            (Some(url), Network::Testnet) => url,
            _ => {
                return Err(StellarError::Config(format!(
                    "Friendbot is not available on the {} network",
                    config.network
                )));
            }
        };

        Ok(Self {
            http: build_http_client(config.request_timeout)?,
            base_url: parse_base_url(raw)?,
            mapper: FriendbotErrorMapper,
        })
    }
}

#[async_trait]
impl FundingService for FriendbotClient {
    async fn fund(&self, public_key: &str) -> Result<FundingReceipt> {
        parse_public_key(public_key)?;

        let mut url = self.base_url.clone();
        url.query_pairs_mut().append_pair("addr", public_key);
        debug!("GET {}", url);

        let response = self.http.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        // Funded when the status is 2xx or the body reports `successful: true`
        let receipt = if status.is_success() {
            FundingReceipt {
                successful: true,
                ..serde_json::from_str(&body)?
            }
        } else {
            match serde_json::from_str::<FundingReceipt>(&body) {
                Ok(receipt) if receipt.successful => receipt,
                _ => return Err(self.mapper.map_http_error(status.as_u16(), &body)),
            }
        };

        info!(account = %public_key, hash = ?receipt.hash, "account funded");
        Ok(receipt)
    }
}
