//! Local denominations for tokens named by `(token_chain, token_address)`.

use crate::{byte_utils::trim_nul, state::Config, state::TokenAddress};

/// Prefix of every wrapped asset identifier.
pub const WRAPPED_PREFIX: &str = "wh";

/// Prefix that turns a wrapped asset identifier into the base unit actually minted.
pub const BASE_DENOM_PREFIX: &str = "b";

/// The local denomination a token resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalDenom {
    /// Denomination moved on the bank ledger.
    pub identifier: String,

    /// Whether transfers of this denomination are minted rather than paid out of custody.
    pub wrapped: bool,
}

/// Identifier of the wrapped asset for a foreign token, `wh/{chain:05}/{address as hex}`.
///
/// The chain id is fixed width and the address is the full 32 bytes in hex, so distinct
/// `(token_chain, token_address)` pairs always produce distinct identifiers.
pub fn wrapped_coin_identifier(token_chain: u16, token_address: &TokenAddress) -> String {
    format!("{WRAPPED_PREFIX}/{token_chain:05}/{token_address}")
}

/// The base unit (exponent 0) for a wrapped asset identifier.
pub fn base_denom(identifier: &str) -> String {
    format!("{BASE_DENOM_PREFIX}{identifier}")
}

/// Resolves the local denomination of a token.
///
/// - The system's own token maps to its configured denom and is minted.
/// - Tokens from other chains map to the base unit of their wrapped asset and are minted.
/// - Tokens native to this chain carry their denom name in the address, NUL padded.
pub fn resolve(cfg: &Config, token_chain: u16, token_address: &TokenAddress) -> LocalDenom {
    if cfg.is_native_token(token_chain, token_address) {
        LocalDenom {
            identifier: cfg.native_token.denom.clone(),
            wrapped: true,
        }
    } else if token_chain != cfg.chain_id {
        LocalDenom {
            identifier: base_denom(&wrapped_coin_identifier(token_chain, token_address)),
            wrapped: true,
        }
    } else {
        LocalDenom {
            identifier: String::from_utf8_lossy(trim_nul(&token_address[..])).into_owned(),
            wrapped: false,
        }
    }
}
