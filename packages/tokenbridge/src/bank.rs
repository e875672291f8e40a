//! The bank ledger the token bridge moves value on.
//!
//! `BankKeeper` is the interface the executor consumes. Every method takes the storage it must
//! persist through: the executor hands in its transaction overlay, so ledger writes commit or
//! roll back together with the rest of the VAA.

use std::fmt;

use anyhow::{ensure, Context};
use cosmwasm_schema::cw_serde;
use cosmwasm_std::{CanonicalAddr, StdResult, Storage, Uint256};
use cw_storage_plus::Map;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BankError {
    #[error("invalid denom: {0}")]
    InvalidDenom(String),
    #[error("insufficient funds: {balance} < {required}")]
    InsufficientFunds { balance: Coin, required: Coin },
}

#[cw_serde]
#[derive(Eq)]
pub struct Coin {
    pub denom: String,
    pub amount: Uint256,
}

impl Coin {
    pub fn new(amount: Uint256, denom: impl Into<String>) -> Coin {
        Coin {
            denom: denom.into(),
            amount,
        }
    }

    /// Checks that the denom is well formed: `[a-zA-Z][a-zA-Z0-9/:._-]{2,127}`.
    pub fn validate(&self) -> Result<(), BankError> {
        let mut chars = self.denom.chars();
        let valid = self.denom.len() >= 3
            && self.denom.len() <= 128
            && chars.next().is_some_and(|c| c.is_ascii_alphabetic())
            && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '/' | ':' | '.' | '_' | '-'));

        if valid {
            Ok(())
        } else {
            Err(BankError::InvalidDenom(self.denom.clone()))
        }
    }

    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}

/// Mirrors cosmos.bank.v1beta1.Metadata.
#[cw_serde]
#[derive(Default)]
pub struct Metadata {
    pub description: String,
    pub denom_units: Vec<DenomUnit>,
    /// The denom unit with exponent 0.
    pub base: String,
    /// The denom unit clients display.
    pub display: String,
    pub name: String,
    pub symbol: String,
}

#[cw_serde]
pub struct DenomUnit {
    pub denom: String,
    /// 1 `denom` = 10^exponent `base`.
    pub exponent: u32,
    pub aliases: Vec<String>,
}

impl Metadata {
    /// Exponent of the display unit, i.e. the number of decimals of this denomination.
    pub fn display_exponent(&self) -> Option<u32> {
        self.denom_units
            .iter()
            .find(|u| u.denom == self.display)
            .map(|u| u.exponent)
    }
}

pub trait BankKeeper {
    fn denom_metadata(&self, storage: &dyn Storage, denom: &str) -> StdResult<Option<Metadata>>;

    fn set_denom_metadata(&self, storage: &mut dyn Storage, metadata: &Metadata) -> StdResult<()>;

    fn mint_coins(
        &self,
        storage: &mut dyn Storage,
        to: &CanonicalAddr,
        coin: &Coin,
    ) -> anyhow::Result<()>;

    fn send_coins(
        &self,
        storage: &mut dyn Storage,
        from: &CanonicalAddr,
        to: &CanonicalAddr,
        coin: &Coin,
    ) -> anyhow::Result<()>;
}

const BALANCES: Map<(&[u8], &str), Uint256> = Map::new("bank/balances");
const SUPPLY: Map<&str, Uint256> = Map::new("bank/supply");
const DENOM_METADATA: Map<&str, Metadata> = Map::new("bank/denom_metadata");

/// A `BankKeeper` that keeps balances, supply and metadata in the provided storage.
#[derive(Debug, Default, Clone, Copy)]
pub struct StorageBank;

impl StorageBank {
    pub fn balance(
        &self,
        storage: &dyn Storage,
        addr: &CanonicalAddr,
        denom: &str,
    ) -> StdResult<Uint256> {
        BALANCES
            .may_load(storage, (addr.as_slice(), denom))
            .map(Option::unwrap_or_default)
    }

    pub fn supply(&self, storage: &dyn Storage, denom: &str) -> StdResult<Uint256> {
        SUPPLY.may_load(storage, denom).map(Option::unwrap_or_default)
    }

    fn add_balance(
        &self,
        storage: &mut dyn Storage,
        addr: &CanonicalAddr,
        coin: &Coin,
    ) -> anyhow::Result<()> {
        let balance = self.balance(storage, addr, &coin.denom)?;
        let updated = balance
            .checked_add(coin.amount)
            .context("balance overflow")?;
        BALANCES
            .save(storage, (addr.as_slice(), &coin.denom), &updated)
            .context("failed to save balance")
    }
}

impl BankKeeper for StorageBank {
    fn denom_metadata(&self, storage: &dyn Storage, denom: &str) -> StdResult<Option<Metadata>> {
        DENOM_METADATA.may_load(storage, denom)
    }

    fn set_denom_metadata(&self, storage: &mut dyn Storage, metadata: &Metadata) -> StdResult<()> {
        DENOM_METADATA.save(storage, &metadata.base, metadata)
    }

    fn mint_coins(
        &self,
        storage: &mut dyn Storage,
        to: &CanonicalAddr,
        coin: &Coin,
    ) -> anyhow::Result<()> {
        coin.validate()?;

        let supply = self
            .supply(storage, &coin.denom)?
            .checked_add(coin.amount)
            .context("supply overflow")?;
        SUPPLY
            .save(storage, &coin.denom, &supply)
            .context("failed to save supply")?;

        self.add_balance(storage, to, coin)
    }

    fn send_coins(
        &self,
        storage: &mut dyn Storage,
        from: &CanonicalAddr,
        to: &CanonicalAddr,
        coin: &Coin,
    ) -> anyhow::Result<()> {
        coin.validate()?;

        let balance = self.balance(storage, from, &coin.denom)?;
        ensure!(
            balance >= coin.amount,
            BankError::InsufficientFunds {
                balance: Coin::new(balance, coin.denom.clone()),
                required: coin.clone(),
            }
        );

        BALANCES
            .save(storage, (from.as_slice(), &coin.denom), &(balance - coin.amount))
            .context("failed to save balance")?;
        self.add_balance(storage, to, coin)
    }
}
