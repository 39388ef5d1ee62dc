//! Keypair generation and parsing
//!
//! Thin wrapper over the SDK key types so the rest of the crate deals in
//! `G...` account ids and `S...` secret seeds.

use crate::config::SecretSeed;
use crate::utils::error::{Result, StellarError};
use stellar_base::crypto::{PublicKey, SodiumKeyPair};

/// A Stellar signing keypair
pub struct Keypair {
    inner: SodiumKeyPair,
}

impl Keypair {
    /// Generate a new random keypair
    pub fn random() -> Result<Self> {
        let inner = SodiumKeyPair::random()?;
        Ok(Self { inner })
    }

    /// Parse an `S...` secret seed
    pub fn from_secret(seed: &SecretSeed) -> Result<Self> {
        let inner = SodiumKeyPair::from_secret_seed(seed.expose())
            .map_err(|e| StellarError::InvalidInput(format!("Invalid secret key: {}", e)))?;
        Ok(Self { inner })
    }

    /// Account id (`G...`), safe to share
    pub fn public_key(&self) -> String {
        self.inner.public_key().account_id()
    }

    /// Secret seed (`S...`); controls the account's funds
    pub fn secret_seed(&self) -> SecretSeed {
        SecretSeed::new(self.inner.secret_key().secret_seed())
    }

    pub(crate) fn sdk_keypair(&self) -> &SodiumKeyPair {
        &self.inner
    }
}

impl std::fmt::Debug for Keypair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Keypair")
            .field("public_key", &self.public_key())
            .finish_non_exhaustive()
    }
}

/// Parse a `G...` account id
pub fn parse_public_key(account_id: &str) -> Result<PublicKey> {
    PublicKey::from_account_id(account_id).map_err(|e| {
        StellarError::InvalidInput(format!("Invalid public key {}: {}", account_id, e))
    })
}
