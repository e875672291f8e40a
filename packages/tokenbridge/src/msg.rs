use cosmwasm_schema::cw_serde;
use cosmwasm_std::Binary;

use crate::state::TokenAddress;

/// A VAA whose signatures have already been verified by the core bridge.
#[cw_serde]
pub struct VerifiedVaa {
    /// Hash of the VAA body. Identifies the message for replay protection.
    pub digest: Binary,
    pub emitter_chain: u16,
    pub emitter_address: TokenAddress,
    pub sequence: u64,
    pub payload: Binary,
}

impl VerifiedVaa {
    pub fn hex_digest(&self) -> String {
        hex::encode(self.digest.as_slice())
    }
}

#[cw_serde]
pub struct ChainRegistrationResponse {
    pub chain: u16,
    pub address: TokenAddress,
}

#[cw_serde]
pub struct AllChainRegistrationsResponse {
    pub registrations: Vec<ChainRegistrationResponse>,
}
