//! Test fixtures
//!
//! Horizon and Friendbot response bodies, built the way the live services
//! shape them.

use serde_json::{Value, json};
use stellar_first_flight::Keypair;

/// A valid, random public key
pub fn random_public_key() -> String {
    Keypair::random().unwrap().public_key()
}

/// `GET /accounts/{id}` body with a native balance and `credits` trustlines
pub fn account_json(account_id: &str, sequence: &str, native: &str, credits: usize) -> Value {
    let mut balances: Vec<Value> = (0..credits)
        .map(|i| {
            json!({
                "balance": "1.0000000",
                "limit": "922337203685.4775807",
                "asset_type": "credit_alphanum4",
                "asset_code": format!("TK{}", i),
                "asset_issuer": "GBBD47IF6LWK7P7MDEVSCWR7DPUWV3NY3DTQEVFL4NAT4AQH3ZLLFLA5"
            })
        })
        .collect();
    balances.push(json!({ "balance": native, "asset_type": "native" }));

    json!({
        "id": account_id,
        "account_id": account_id,
        "sequence": sequence,
        "subentry_count": credits,
        "thresholds": { "low_threshold": 0, "med_threshold": 0, "high_threshold": 0 },
        "balances": balances
    })
}

/// Horizon's 404 problem document
pub fn not_found_json() -> Value {
    json!({
        "type": "https://stellar.org/horizon-errors/not_found",
        "title": "Resource Missing",
        "status": 404,
        "detail": "The resource at the url requested was not found."
    })
}

/// `POST /transactions` 400 body for a failed transaction
pub fn transaction_failed_json(operation_code: &str) -> Value {
    json!({
        "type": "https://stellar.org/horizon-errors/transaction_failed",
        "title": "Transaction Failed",
        "status": 400,
        "detail": "The transaction failed when submitted to the stellar network.",
        "extras": {
            "envelope_xdr": "AAAA",
            "result_codes": {
                "transaction": "tx_failed",
                "operations": [operation_code]
            }
        }
    })
}

/// Successful `POST /transactions` body
pub fn transaction_success_json(hash: &str, ledger: u32) -> Value {
    json!({
        "hash": hash,
        "ledger": ledger,
        "successful": true,
        "envelope_xdr": "AAAA",
        "result_xdr": "AAAA"
    })
}

/// Friendbot's answer for a funded account
pub fn friendbot_success_json(hash: &str) -> Value {
    json!({
        "hash": hash,
        "ledger": 1,
        "successful": true
    })
}

/// Friendbot's answer for an account that already exists
pub fn friendbot_already_funded_json() -> Value {
    json!({
        "type": "https://stellar.org/horizon-errors/bad_request",
        "title": "Bad Request",
        "status": 400,
        "detail": "createAccountAlreadyExist (AAAAAAAAAGT/////AAAAAQAAAAAAAAAA/////AAAAAA=)"
    })
}
