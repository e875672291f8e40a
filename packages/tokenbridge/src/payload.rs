//! Wire layouts of token bridge payloads. All multi-byte integers are big-endian.
//!
//! A token bridge payload is a one byte type tag followed by a fixed length body:
//!
//! ```markdown
//! Transfer (tag 1, 132 byte body)
//! 0   .. 32:  amount
//! 32  .. 64:  token_address
//! 64  .. 66:  token_chain
//! 66  .. 78:  reserved
//! 78  .. 98:  recipient
//! 98  .. 100: recipient_chain
//! 100 .. 132: fee
//!
//! AssetMeta (tag 2, 99 byte body)
//! 0  .. 32: token_address
//! 32 .. 34: token_chain
//! 34 .. 35: decimals
//! 35 .. 67: symbol
//! 67 .. 99: name
//! ```

use anyhow::{bail, ensure};
use cosmwasm_std::{CanonicalAddr, Uint256};

use crate::{
    byte_utils::{get_string_from_32, ByteUtils},
    state::TokenAddress,
    TokenBridgeError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum PayloadId {
    Transfer = 1,
    AssetMeta = 2,
}

impl TryFrom<u8> for PayloadId {
    type Error = TokenBridgeError;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            1 => Ok(PayloadId::Transfer),
            2 => Ok(PayloadId::AssetMeta),
            other => Err(TokenBridgeError::UnknownPayloadType(other)),
        }
    }
}

/// A decoded token bridge instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instruction {
    Transfer(TransferInfo),
    AssetMeta(AssetMeta),
}

impl Instruction {
    /// Splits off the type tag and decodes the body it selects.
    pub fn deserialize(payload: &[u8]) -> anyhow::Result<Self> {
        let Some((&tag, body)) = payload.split_first() else {
            bail!(TokenBridgeError::PayloadInvalid);
        };

        match PayloadId::try_from(tag)? {
            PayloadId::Transfer => TransferInfo::deserialize(body).map(Instruction::Transfer),
            PayloadId::AssetMeta => AssetMeta::deserialize(body).map(Instruction::AssetMeta),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferInfo {
    /// Amount at wire precision.
    pub amount: Uint256,
    pub token_address: TokenAddress,
    pub token_chain: u16,
    pub recipient: CanonicalAddr,
    pub recipient_chain: u16,
    /// Relayer fee at wire precision.
    pub fee: Uint256,
}

impl TransferInfo {
    pub const PAYLOAD_LEN: usize = 132;

    pub fn deserialize(data: &[u8]) -> anyhow::Result<Self> {
        ensure!(
            data.len() == Self::PAYLOAD_LEN,
            TokenBridgeError::PayloadInvalid
        );

        Ok(TransferInfo {
            amount: Uint256::from_be_bytes(data.get_const_bytes(0)),
            token_address: data.get_const_bytes::<32>(32).into(),
            token_chain: data.get_u16(64),
            recipient: CanonicalAddr::from(data.get_const_bytes::<20>(78).to_vec()),
            recipient_chain: data.get_u16(98),
            fee: Uint256::from_be_bytes(data.get_const_bytes(100)),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetMeta {
    pub token_address: TokenAddress,
    pub token_chain: u16,
    pub decimals: u8,
    pub symbol: String,
    pub name: String,
}

impl AssetMeta {
    pub const PAYLOAD_LEN: usize = 99;

    pub fn deserialize(data: &[u8]) -> anyhow::Result<Self> {
        ensure!(
            data.len() == Self::PAYLOAD_LEN,
            TokenBridgeError::PayloadInvalid
        );

        Ok(AssetMeta {
            token_address: data.get_const_bytes::<32>(0).into(),
            token_chain: data.get_u16(32),
            decimals: data.get_u8(34),
            symbol: get_string_from_32(&data.get_const_bytes(35)),
            name: get_string_from_32(&data.get_const_bytes(67)),
        })
    }
}

/// Header shared by every governance payload.
///
/// ```markdown
/// 0  .. 32: module (left zero padded)
/// 32 .. 33: action
/// 33 .. 35: target chain (0 for all chains)
/// 35 ..   : action payload
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GovernancePacket {
    pub module: [u8; 32],
    pub action: u8,
    pub chain: u16,
    pub payload: Vec<u8>,
}

impl GovernancePacket {
    pub const HEADER_LEN: usize = 35;

    /// `"TokenBridge"`, left zero padded to 32 bytes.
    pub const MODULE: [u8; 32] = *b"\0\0\0\0\0\0\0\0\0\0\0\0\0\0\0\0\0\0\0\0\0TokenBridge";

    pub fn deserialize(data: &[u8]) -> anyhow::Result<Self> {
        ensure!(
            data.len() >= Self::HEADER_LEN,
            TokenBridgeError::PayloadInvalid
        );

        Ok(GovernancePacket {
            module: data.get_const_bytes(0),
            action: data.get_u8(32),
            chain: data.get_u16(33),
            payload: data[Self::HEADER_LEN..].to_vec(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterChain {
    pub chain_id: u16,
    pub emitter_address: TokenAddress,
}

impl RegisterChain {
    pub const ACTION: u8 = 1;
    pub const PAYLOAD_LEN: usize = 34;

    pub fn deserialize(data: &[u8]) -> anyhow::Result<Self> {
        ensure!(
            data.len() == Self::PAYLOAD_LEN,
            TokenBridgeError::PayloadInvalid
        );

        Ok(RegisterChain {
            chain_id: data.get_u16(0),
            emitter_address: data.get_const_bytes::<32>(2).into(),
        })
    }
}
