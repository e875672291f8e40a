use anyhow::Context;
use bech32::{ToBase32, Variant};
use cosmwasm_schema::cw_serde;
use cosmwasm_std::CanonicalAddr;

use super::TokenAddress;

#[cw_serde]
pub struct Config {
    /// Wormhole chain id of this chain.
    pub chain_id: u16,

    /// The system's own token. It is never held natively here: transfers of it are minted
    /// like any wrapped asset, and it can never be registered as one.
    pub native_token: NativeToken,

    /// Holding account that mints wrapped assets and pays out transfers.
    pub module_address: CanonicalAddr,

    /// bech32 human readable part used when rendering local addresses.
    pub address_prefix: String,

    pub governance_chain: u16,
    pub governance_address: TokenAddress,
}

#[cw_serde]
pub struct NativeToken {
    pub chain: u16,
    pub address: TokenAddress,
    pub denom: String,
}

impl Config {
    pub fn is_native_token(&self, token_chain: u16, token_address: &TokenAddress) -> bool {
        self.native_token.chain == token_chain && self.native_token.address == *token_address
    }

    pub fn is_governance_emitter(&self, emitter_chain: u16, emitter_address: &TokenAddress) -> bool {
        self.governance_chain == emitter_chain && self.governance_address == *emitter_address
    }

    /// Renders a local account address as bech32.
    pub fn humanize(&self, addr: &CanonicalAddr) -> anyhow::Result<String> {
        bech32::encode(
            &self.address_prefix,
            addr.as_slice().to_base32(),
            Variant::Bech32,
        )
        .with_context(|| format!("failed to encode {addr} as bech32"))
    }
}
