use anyhow::{ensure, Context};
use cosmwasm_std::{Event, Storage};
use tracing::info;

use crate::{
    bank::{BankKeeper, DenomUnit, Metadata},
    denom::{base_denom, wrapped_coin_identifier},
    event::AssetRegistrationUpdate,
    payload::AssetMeta,
    state::{Config, CHAIN_REGISTRATIONS, COIN_META_ROLLBACK_PROTECTION},
    TokenBridgeError,
};

/// Creates or updates the bank metadata of the wrapped asset described by `m`.
///
/// Only messages with a sequence strictly greater than the last applied one may update an
/// asset, and the number of decimals of an asset can never change.
pub(super) fn register_asset_meta<B: BankKeeper + ?Sized>(
    storage: &mut dyn Storage,
    bank: &B,
    cfg: &Config,
    sequence: u64,
    m: &AssetMeta,
) -> anyhow::Result<Event> {
    ensure!(
        m.token_chain != cfg.chain_id && !cfg.is_native_token(m.token_chain, &m.token_address),
        TokenBridgeError::NativeAssetRegistration
    );

    ensure!(
        CHAIN_REGISTRATIONS.has(storage, m.token_chain),
        TokenBridgeError::UnregisteredEmitter
    );

    let identifier = wrapped_coin_identifier(m.token_chain, &m.token_address);
    let base = base_denom(&identifier);

    if let Some(last) = COIN_META_ROLLBACK_PROTECTION
        .may_load(storage, &identifier)
        .context("failed to load rollback protection")?
    {
        ensure!(last < sequence, TokenBridgeError::AssetMetaRollback);
    }

    let decimals = u32::from(m.decimals);
    if let Some(existing) = bank
        .denom_metadata(storage, &base)
        .context("failed to load denom metadata")?
    {
        ensure!(
            existing.display == identifier,
            TokenBridgeError::MismatchedDisplayDenom {
                found: existing.display,
                expected: identifier,
            }
        );
        ensure!(
            existing
                .denom_units
                .iter()
                .filter(|u| u.denom == identifier)
                .all(|u| u.exponent == decimals),
            TokenBridgeError::ChangeDecimals
        );
    }

    let metadata = Metadata {
        description: format!(
            "Wrapped asset from chain {} with address {}",
            m.token_chain, m.token_address
        ),
        denom_units: vec![
            DenomUnit {
                denom: base.clone(),
                exponent: 0,
                aliases: Vec::new(),
            },
            DenomUnit {
                denom: identifier.clone(),
                exponent: decimals,
                aliases: Vec::new(),
            },
        ],
        base,
        display: identifier.clone(),
        name: m.name.clone(),
        symbol: m.symbol.clone(),
    };
    bank.set_denom_metadata(storage, &metadata)
        .context("failed to save denom metadata")?;

    COIN_META_ROLLBACK_PROTECTION
        .save(storage, &identifier, &sequence)
        .context("failed to save rollback protection")?;

    info!(
        identifier = %identifier,
        sequence,
        decimals = m.decimals,
        symbol = %m.symbol,
        "updated wrapped asset metadata"
    );

    Ok(AssetRegistrationUpdate {
        token_chain: m.token_chain,
        token_address: m.token_address,
        name: m.name.clone(),
        symbol: m.symbol.clone(),
        decimals: m.decimals,
    }
    .into())
}
