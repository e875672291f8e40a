//! The `tokenbridge` crate applies verified token bridge VAAs to a local bank ledger.
//!
//! VAAs reaching this crate have already been decoded and had their guardian signatures checked.
//! What remains is to decide which ledger mutation a VAA authorizes and to apply it exactly once:
//!
//! - Replay protection keyed by the VAA digest.
//! - Emitter checks against the registered token bridge of the emitting chain.
//! - Transfers, which mint wrapped assets and pay out the recipient and the relayer.
//! - Asset metadata registration for wrapped assets, with rollback protection.
//!
//! Every operation runs inside a storage transaction, so a failed VAA leaves no trace and may
//! be retried.

#![deny(unused_results)]

pub mod bank;
mod byte_utils;
pub mod contract;
pub mod denom;
mod error;
pub mod event;
pub mod msg;
pub mod normalize;
pub mod payload;
pub mod state;
pub mod transaction;

pub use contract::{
    execute_governance_vaa, execute_vaa, instantiate, query_all_chain_registrations,
    query_chain_registration, query_coin_meta_rollback_protection, query_config,
    query_replay_protection, register_chain,
};
pub use error::TokenBridgeError;
