//! Horizon HTTP client
//!
//! Implements account queries and payment submission against a Horizon
//! server.

use super::error_mapper::{ErrorMapper, HorizonErrorMapper};
use super::traits::{AccountQuery, PaymentSubmitter};
use super::types::{AccountRecord, HorizonAccount, PaymentReceipt};
use crate::config::{Network, NetworkConfig, SecretSeed};
use crate::core::keys::{Keypair, parse_public_key};
use crate::core::payment::{PaymentRequest, build_signed_envelope};
use crate::utils::error::{Result, StellarError};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

/// Build an HTTP client with the configured request timeout
pub(crate) fn build_http_client(timeout_secs: u64) -> Result<Client> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| StellarError::Config(format!("Failed to create HTTP client: {}", e)))
}

/// Parse a base URL, making sure relative joins append to its path
pub(crate) fn parse_base_url(raw: &str) -> Result<Url> {
    let mut url =
        Url::parse(raw).map_err(|e| StellarError::Config(format!("Invalid URL {}: {}", raw, e)))?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

/// Client for one Horizon server
#[derive(Debug, Clone)]
pub struct HorizonClient {
    http: Client,
    base_url: Url,
    network: Network,
    mapper: HorizonErrorMapper,
}

impl HorizonClient {
    /// Create a client from network settings
    pub fn new(config: &NetworkConfig) -> Result<Self> {
        let http = build_http_client(config.request_timeout)?;
        let base_url = parse_base_url(&config.horizon_url)?;

        info!("Horizon client created for {} ({})", base_url, config.network);

        Ok(Self {
            http,
            base_url,
            network: config.network,
            mapper: HorizonErrorMapper,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn network(&self) -> Network {
        self.network
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| StellarError::Config(format!("Invalid endpoint {}: {}", path, e)))
    }

    /// Submit a base64 transaction envelope
    async fn submit_envelope(&self, envelope: &str) -> Result<PaymentReceipt> {
        let url = self.endpoint("transactions")?;
        debug!("POST {}", url);

        let response = self
            .http
            .post(url)
            .form(&[("tx", envelope)])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(self.mapper.map_submission_error(status.as_u16(), &body));
        }

        let receipt: PaymentReceipt = serde_json::from_str(&body)?;
        Ok(receipt)
    }
}

#[async_trait]
impl AccountQuery for HorizonClient {
    async fn load_account(&self, public_key: &str) -> Result<AccountRecord> {
        parse_public_key(public_key)?;

        let url = self.endpoint(&format!("accounts/{}", public_key))?;
        debug!("GET {}", url);

        let response = self.http.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(self.mapper.map_http_error(status.as_u16(), &body));
        }

        let account: HorizonAccount = serde_json::from_str(&body)?;
        AccountRecord::try_from(account)
    }
}

#[async_trait]
impl PaymentSubmitter for HorizonClient {
    async fn build_and_submit(
        &self,
        source_secret: &SecretSeed,
        payment: &PaymentRequest,
        timeout_seconds: u64,
    ) -> Result<PaymentReceipt> {
        payment.validate()?;
        let source = Keypair::from_secret(source_secret)?;

        // The next transaction must carry the account's current sequence + 1
        let account = self.load_account(&source.public_key()).await?;
        let source_balance = account.native_balance().map(|b| b.balance.clone());

        let envelope = build_signed_envelope(
            &source,
            account.sequence + 1,
            payment,
            timeout_seconds,
            self.network,
        )?;

        let mut receipt = self.submit_envelope(&envelope).await?;
        receipt.source_balance = source_balance;

        info!(
            hash = %receipt.hash,
            destination = %payment.destination,
            amount = %payment.amount,
            "payment submitted"
        );
        Ok(receipt)
    }
}
