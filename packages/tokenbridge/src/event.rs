//! Domain events emitted by successfully executed VAAs.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Event, Uint256};

use crate::state::TokenAddress;

#[cw_serde]
pub struct TransferReceived {
    pub token_chain: u16,
    pub token_address: TokenAddress,
    /// bech32 address of the recipient.
    pub to: String,
    /// bech32 address of the account that submitted the VAA and collected the fee.
    pub fee_recipient: String,
    /// Native precision amount, fee included.
    pub amount: Uint256,
    pub fee: Uint256,
    pub local_denom: String,
}

impl From<TransferReceived> for Event {
    fn from(e: TransferReceived) -> Event {
        Event::new("TransferReceived")
            .add_attribute("token_chain", e.token_chain.to_string())
            .add_attribute("token_address", e.token_address.to_string())
            .add_attribute("to", e.to)
            .add_attribute("fee_recipient", e.fee_recipient)
            .add_attribute("amount", e.amount.to_string())
            .add_attribute("fee", e.fee.to_string())
            .add_attribute("local_denom", e.local_denom)
    }
}

#[cw_serde]
pub struct AssetRegistrationUpdate {
    pub token_chain: u16,
    pub token_address: TokenAddress,
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
}

impl From<AssetRegistrationUpdate> for Event {
    fn from(e: AssetRegistrationUpdate) -> Event {
        Event::new("AssetRegistrationUpdate")
            .add_attribute("token_chain", e.token_chain.to_string())
            .add_attribute("token_address", e.token_address.to_string())
            .add_attribute("name", e.name)
            .add_attribute("symbol", e.symbol)
            .add_attribute("decimals", e.decimals.to_string())
    }
}

#[cw_serde]
pub struct RegisterChain {
    pub chain: u16,
    pub emitter_address: TokenAddress,
}

impl From<RegisterChain> for Event {
    fn from(e: RegisterChain) -> Event {
        Event::new("RegisterChain")
            .add_attribute("chain", e.chain.to_string())
            .add_attribute("emitter_address", e.emitter_address.to_string())
    }
}
