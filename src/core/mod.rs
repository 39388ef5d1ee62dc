//! Core functionality
//!
//! - **batch**: sequential batch runner with per-item error isolation
//! - **horizon**: collaborator traits and their HTTP adapters
//! - **keys**: keypair generation and parsing
//! - **payment**: payment validation and signed envelopes
//! - **reserve**: minimum balance arithmetic

pub mod batch;
pub mod horizon;
pub mod keys;
pub mod payment;
pub mod reserve;
