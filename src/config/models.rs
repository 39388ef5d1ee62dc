//! Configuration models
//!
//! Every field has a default so a partial YAML file, or none at all, still
//! yields a runnable configuration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::utils::error::StellarError;

/// Public Horizon instance for the test network
pub const TESTNET_HORIZON_URL: &str = "https://horizon-testnet.stellar.org";
/// Public Horizon instance for the main network
pub const PUBLIC_HORIZON_URL: &str = "https://horizon.stellar.org";
/// Friendbot faucet (test network only)
pub const TESTNET_FRIENDBOT_URL: &str = "https://friendbot.stellar.org";

/// Stellar network selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    /// Test network (Friendbot available)
    #[default]
    Testnet,
    /// Public main network
    Public,
}

impl Network {
    /// Passphrase that transactions are signed against
    pub fn passphrase(&self) -> &'static str {
        match self {
            Network::Testnet => "Test SDF Network ; September 2015",
            Network::Public => "Public Global Stellar Network ; September 2015",
        }
    }

    /// Network handle understood by the SDK
    pub fn sdk_network(&self) -> stellar_base::Network {
        match self {
            Network::Testnet => stellar_base::Network::new_test(),
            Network::Public => stellar_base::Network::new_public(),
        }
    }

    pub fn default_horizon_url(&self) -> &'static str {
        match self {
            Network::Testnet => TESTNET_HORIZON_URL,
            Network::Public => PUBLIC_HORIZON_URL,
        }
    }

    pub fn default_friendbot_url(&self) -> Option<&'static str> {
        match self {
            Network::Testnet => Some(TESTNET_FRIENDBOT_URL),
            Network::Public => None,
        }
    }

    /// Path segment used by the stellar.expert explorer
    pub fn explorer_segment(&self) -> &'static str {
        match self {
            Network::Testnet => "testnet",
            Network::Public => "public",
        }
    }

    /// Explorer link for a transaction hash
    pub fn explorer_tx_url(&self, hash: &str) -> String {
        format!(
            "https://stellar.expert/explorer/{}/tx/{}",
            self.explorer_segment(),
            hash
        )
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.explorer_segment())
    }
}

impl FromStr for Network {
    type Err = StellarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "testnet" | "test" => Ok(Network::Testnet),
            "public" | "mainnet" | "pubnet" => Ok(Network::Public),
            other => Err(StellarError::Config(format!("Unknown network: {}", other))),
        }
    }
}

/// A secret seed that never shows up in `Debug` output
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct SecretSeed(String);

impl SecretSeed {
    pub fn new(seed: impl Into<String>) -> Self {
        Self(seed.into())
    }

    /// The raw `S...` seed
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SecretSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretSeed(***)")
    }
}

/// Network and transport settings
///
/// Endpoints left out of a configuration file follow the selected network.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "NetworkConfigFile")]
pub struct NetworkConfig {
    /// Which network to talk to
    pub network: Network,
    /// Horizon base URL
    pub horizon_url: String,
    /// Friendbot base URL, absent on the public network
    pub friendbot_url: Option<String>,
    /// HTTP request timeout in seconds
    pub request_timeout: u64,
    /// Transaction validity window in seconds
    pub tx_timeout: u64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self::for_network(Network::Testnet)
    }
}

impl NetworkConfig {
    /// Default endpoints for a network
    pub fn for_network(network: Network) -> Self {
        Self {
            network,
            horizon_url: network.default_horizon_url().to_string(),
            friendbot_url: network.default_friendbot_url().map(str::to_string),
            request_timeout: 30,
            tx_timeout: 30,
        }
    }
}

/// `network` section as written in a configuration file
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct NetworkConfigFile {
    network: Network,
    horizon_url: Option<String>,
    friendbot_url: Option<String>,
    request_timeout: Option<u64>,
    tx_timeout: Option<u64>,
}

impl From<NetworkConfigFile> for NetworkConfig {
    fn from(file: NetworkConfigFile) -> Self {
        let defaults = NetworkConfig::for_network(file.network);
        Self {
            network: file.network,
            horizon_url: file.horizon_url.unwrap_or(defaults.horizon_url),
            friendbot_url: file.friendbot_url.or(defaults.friendbot_url),
            request_timeout: file.request_timeout.unwrap_or(defaults.request_timeout),
            tx_timeout: file.tx_timeout.unwrap_or(defaults.tx_timeout),
        }
    }
}

/// Single payment scenario
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentScenario {
    pub destination: String,
    pub amount: String,
    pub memo: Option<String>,
}

impl Default for PaymentScenario {
    fn default() -> Self {
        Self {
            destination: "GDBURBUQHHVDKFYP53446SWBQ2Q3ULA4OKDFDWQPCMUPXTZ7PZWRFOLY".to_string(),
            amount: "25".to_string(),
            memo: Some("My first coded payment".to_string()),
        }
    }
}

/// One recipient of the batch payment scenario
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Recipient {
    pub public_key: String,
    pub memo: String,
}

impl Recipient {
    pub fn new(public_key: impl Into<String>, memo: impl Into<String>) -> Self {
        Self {
            public_key: public_key.into(),
            memo: memo.into(),
        }
    }
}

/// Item lists and constants for the six scenarios
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    /// Account inspected by the single balance check
    pub balance_account: String,
    /// Accounts watched by the balance monitor, in report order
    pub monitored_accounts: Vec<String>,
    /// Single payment
    pub payment: PaymentScenario,
    /// Batch payment recipients, in submission order
    pub recipients: Vec<Recipient>,
    /// Amount sent to every batch recipient
    pub batch_amount: String,
    /// Number of accounts created by the mass creation scenario
    pub batch_account_count: usize,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            balance_account: "GAJBWEMXZW6I77IBUBLLIZZVOL73K2PD5XLCS3OCKP6QJG5RLJKL2W4Z".to_string(),
            monitored_accounts: vec![
                "GB5UVSQLG3R7WD76GFZKBNDI4JJ4BPBHD5PE4JJ56U7SP46NYGQ7M3DQ".to_string(),
                "GCDIJ4WO6FF6XCZ5RDI5XGCVC6TFZA63EFLY5O6I4USJNFQLJ4OYVIC3".to_string(),
                "GCQIVKWPLYGR3EK2JHUAJZIS4HMTO7FGDHQMUUE5SBHTWXXZQF7MZ7RK".to_string(),
                "GDCV4NX7DT6YANGJPB3LAXMYRLKU4ZVXVQKVYZM2IRFX6M4W6KKB3K7E".to_string(),
                "GDMMJR4A3DDPTNWY7ACIX5GYKZ6LPXABKDL465HEMJK4XYXRIL3WL7NL".to_string(),
            ],
            payment: PaymentScenario::default(),
            recipients: vec![
                Recipient::new(
                    "GCDIJ4WO6FF6XCZ5RDI5XGCVC6TFZA63EFLY5O6I4USJNFQLJ4OYVIC3",
                    "Payment-001",
                ),
                Recipient::new(
                    "GCQIVKWPLYGR3EK2JHUAJZIS4HMTO7FGDHQMUUE5SBHTWXXZQF7MZ7RK",
                    "Payment-002",
                ),
                Recipient::new(
                    "GDCV4NX7DT6YANGJPB3LAXMYRLKU4ZVXVQKVYZM2IRFX6M4W6KKB3K7E",
                    "Payment-003",
                ),
            ],
            batch_amount: "2".to_string(),
            batch_account_count: 5,
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StellarConfig {
    pub network: NetworkConfig,
    pub scenario: ScenarioConfig,
    /// Source account secret for payments; normally taken from the environment
    #[serde(skip_serializing)]
    pub secret_key: Option<SecretSeed>,
}
