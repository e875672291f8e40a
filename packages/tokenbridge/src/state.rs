use anyhow::Context;
use cosmwasm_std::{Empty, Storage};
use cw_storage_plus::{Item, Map};

mod addr;
mod config;

pub use addr::TokenAddress;
pub use config::{Config, NativeToken};

use crate::TokenBridgeError;

pub const CONFIG: Item<Config> = Item::new("tokenbridge/config");

/// Trusted token bridge emitter for each foreign chain.
pub const CHAIN_REGISTRATIONS: Map<u16, TokenAddress> =
    Map::new("tokenbridge/chain_registrations");

/// Digests of VAAs that have been executed. Entries are never removed.
pub const REPLAY_PROTECTION: Map<&[u8], Empty> = Map::new("tokenbridge/replay_protection");

/// Sequence of the last asset metadata update applied to each wrapped asset identifier.
pub const COIN_META_ROLLBACK_PROTECTION: Map<&str, u64> =
    Map::new("tokenbridge/coin_meta_rollback_protection");

pub fn load_config(storage: &dyn Storage) -> anyhow::Result<Config> {
    CONFIG
        .may_load(storage)
        .context("failed to load `Config`")?
        .ok_or_else(|| TokenBridgeError::NoConfig.into())
}
