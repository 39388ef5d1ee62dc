//! Network collaborators
//!
//! Traits the scenarios depend on, the Horizon and Friendbot HTTP adapters
//! that implement them, and the response types they exchange.

mod client;
mod error_mapper;
mod friendbot;
mod traits;
mod types;

pub use client::HorizonClient;
pub use error_mapper::{ErrorMapper, FriendbotErrorMapper, HorizonErrorMapper};
pub use friendbot::{FRIENDBOT_FUNDING_XLM, FriendbotClient};
pub use traits::{AccountQuery, FundingService, PaymentSubmitter};
pub use types::{
    AccountRecord, Balance, FundingReceipt, HorizonAccount, NATIVE_ASSET_TYPE, PaymentReceipt,
    Problem,
};

#[cfg(test)]
pub use traits::{MockAccountQuery, MockFundingService, MockPaymentSubmitter};
