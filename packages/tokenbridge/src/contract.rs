use anyhow::{ensure, Context};
use cosmwasm_std::{CanonicalAddr, Empty, Event, Order, StdResult, Storage, Uint256};
use cw_storage_plus::Bound;
use tracing::{debug, info};

use crate::{
    bank::{BankKeeper, Coin},
    event,
    msg::{AllChainRegistrationsResponse, ChainRegistrationResponse, VerifiedVaa},
    payload::Instruction,
    state::{
        load_config, Config, TokenAddress, CHAIN_REGISTRATIONS, COIN_META_ROLLBACK_PROTECTION,
        CONFIG, REPLAY_PROTECTION,
    },
    transaction::transactional,
    TokenBridgeError,
};

mod asset_meta;
mod governance;
mod transfer;

pub use governance::execute_governance_vaa;

/// Stores the token bridge configuration. Overwrites any existing configuration.
pub fn instantiate(storage: &mut dyn Storage, cfg: Config) -> anyhow::Result<Event> {
    Coin::new(Uint256::zero(), cfg.native_token.denom.as_str())
        .validate()
        .context("invalid native token denom")?;
    let module = cfg
        .humanize(&cfg.module_address)
        .context("invalid address prefix")?;

    CONFIG
        .save(storage, &cfg)
        .context("failed to save `Config`")?;

    info!(chain_id = cfg.chain_id, module = %module, "instantiated token bridge");

    Ok(Event::new("InstantiateTokenBridge")
        .add_attribute("chain_id", cfg.chain_id.to_string())
        .add_attribute("native_denom", cfg.native_token.denom)
        .add_attribute("module_address", module))
}

/// Executes a verified token bridge VAA submitted by `sender`.
///
/// The VAA must come from the registered token bridge of its emitter chain and must not have
/// been executed before. Either every effect of the VAA is applied and its digest is recorded,
/// or nothing is written at all. If an error occurs that is not due to the storage or the bank
/// ledger, the returned error is downcastable to `TokenBridgeError`.
pub fn execute_vaa<B: BankKeeper + ?Sized>(
    storage: &mut dyn Storage,
    bank: &B,
    vaa: &VerifiedVaa,
    sender: &CanonicalAddr,
) -> anyhow::Result<Event> {
    let res = transactional(storage, |storage| {
        let cfg = load_config(storage)?;

        ensure_not_executed(storage, vaa)?;

        let registered = CHAIN_REGISTRATIONS
            .may_load(storage, vaa.emitter_chain)
            .context("failed to load chain registration")?
            .ok_or(TokenBridgeError::UnregisteredChain)?;
        ensure!(
            registered == vaa.emitter_address,
            TokenBridgeError::UnregisteredEmitter
        );

        let evt = match Instruction::deserialize(&vaa.payload)? {
            Instruction::Transfer(t) => {
                transfer::complete_transfer(storage, bank, &cfg, &t, sender)?
            }
            Instruction::AssetMeta(m) => {
                asset_meta::register_asset_meta(storage, bank, &cfg, vaa.sequence, &m)?
            }
        };

        mark_executed(storage, vaa)?;

        Ok(evt)
    });

    if let Err(e) = &res {
        debug!(
            digest = %vaa.hex_digest(),
            emitter_chain = vaa.emitter_chain,
            sequence = vaa.sequence,
            error = %format!("{e:#}"),
            "rejected token bridge VAA"
        );
    }

    res
}

/// Registers the trusted token bridge emitter for `chain`. Each chain may only be registered
/// once.
pub fn register_chain(
    storage: &mut dyn Storage,
    chain: u16,
    emitter_address: TokenAddress,
) -> anyhow::Result<Event> {
    transactional(storage, |storage| {
        save_chain_registration(storage, chain, emitter_address)
    })
}

fn save_chain_registration(
    storage: &mut dyn Storage,
    chain: u16,
    emitter_address: TokenAddress,
) -> anyhow::Result<Event> {
    ensure!(
        !CHAIN_REGISTRATIONS.has(storage, chain),
        TokenBridgeError::ChainAlreadyRegistered(chain)
    );

    CHAIN_REGISTRATIONS
        .save(storage, chain, &emitter_address)
        .context("failed to save chain registration")?;

    info!(chain, emitter_address = %emitter_address, "registered chain");

    Ok(event::RegisterChain {
        chain,
        emitter_address,
    }
    .into())
}

fn ensure_not_executed(storage: &dyn Storage, vaa: &VerifiedVaa) -> anyhow::Result<()> {
    ensure!(
        !REPLAY_PROTECTION.has(storage, vaa.digest.as_slice()),
        TokenBridgeError::AlreadyExecuted
    );
    Ok(())
}

// Must be the last write of a VAA so that a failed VAA can be submitted again.
fn mark_executed(storage: &mut dyn Storage, vaa: &VerifiedVaa) -> anyhow::Result<()> {
    REPLAY_PROTECTION
        .save(storage, vaa.digest.as_slice(), &Empty {})
        .context("failed to save replay protection")
}

pub fn query_config(storage: &dyn Storage) -> anyhow::Result<Config> {
    load_config(storage)
}

pub fn query_chain_registration(
    storage: &dyn Storage,
    chain: u16,
) -> anyhow::Result<ChainRegistrationResponse> {
    CHAIN_REGISTRATIONS
        .may_load(storage, chain)
        .context("failed to load chain registration")?
        .map(|address| ChainRegistrationResponse { chain, address })
        .ok_or_else(|| TokenBridgeError::UnregisteredChain.into())
}

pub fn query_all_chain_registrations(
    storage: &dyn Storage,
    start_after: Option<u16>,
    limit: Option<u32>,
) -> StdResult<AllChainRegistrationsResponse> {
    let start = start_after.map(Bound::exclusive);
    let iter = CHAIN_REGISTRATIONS
        .range(storage, start, None, Order::Ascending)
        .map(|item| item.map(|(chain, address)| ChainRegistrationResponse { chain, address }));

    let registrations = if let Some(lim) = limit {
        iter.take(lim as usize).collect::<StdResult<Vec<_>>>()
    } else {
        iter.collect()
    }?;

    Ok(AllChainRegistrationsResponse { registrations })
}

pub fn query_replay_protection(storage: &dyn Storage, digest: &[u8]) -> bool {
    REPLAY_PROTECTION.has(storage, digest)
}

pub fn query_coin_meta_rollback_protection(
    storage: &dyn Storage,
    identifier: &str,
) -> StdResult<Option<u64>> {
    COIN_META_ROLLBACK_PROTECTION.may_load(storage, identifier)
}
