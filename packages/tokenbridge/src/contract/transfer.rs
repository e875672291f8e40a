use anyhow::{ensure, Context};
use cosmwasm_std::{CanonicalAddr, Event, Storage, Uint256};
use tracing::info;

use crate::{
    bank::{BankKeeper, Coin},
    denom::{self, LocalDenom},
    event::TransferReceived,
    normalize,
    payload::TransferInfo,
    state::Config,
    TokenBridgeError,
};

/// Pays out a transfer to its recipient, less the fee, which goes to `sender`.
///
/// Tokens that are not held natively by this chain are first minted into the module account.
pub(super) fn complete_transfer<B: BankKeeper + ?Sized>(
    storage: &mut dyn Storage,
    bank: &B,
    cfg: &Config,
    t: &TransferInfo,
    sender: &CanonicalAddr,
) -> anyhow::Result<Event> {
    ensure!(
        t.recipient_chain == cfg.chain_id,
        TokenBridgeError::InvalidTargetChain
    );

    let LocalDenom {
        identifier,
        wrapped,
    } = denom::resolve(cfg, t.token_chain, &t.token_address);

    let meta = bank
        .denom_metadata(storage, &identifier)
        .context("failed to load denom metadata")?
        .ok_or(if wrapped {
            TokenBridgeError::AssetNotRegistered
        } else {
            TokenBridgeError::NoDenomMetadata
        })?;
    let decimals = meta
        .display_exponent()
        .ok_or_else(|| TokenBridgeError::MissingDisplayUnit(meta.display.clone()))?;

    let amount =
        untruncate_coin(&identifier, t.amount, decimals).context(TokenBridgeError::InvalidAmount)?;
    let fee = untruncate_coin(&identifier, t.fee, decimals).context(TokenBridgeError::InvalidFee)?;

    ensure!(amount.amount >= fee.amount, TokenBridgeError::FeeTooHigh);

    if wrapped {
        bank.mint_coins(storage, &cfg.module_address, &amount)
            .with_context(|| format!("failed to mint coins ({amount})"))?;
    }

    let amt_less_fees = Coin::new(amount.amount - fee.amount, identifier.as_str());
    bank.send_coins(storage, &cfg.module_address, &t.recipient, &amt_less_fees)
        .with_context(|| format!("failed to send coins ({amt_less_fees}) to recipient"))?;

    if !fee.is_zero() {
        bank.send_coins(storage, &cfg.module_address, sender, &fee)
            .with_context(|| format!("failed to send fees ({fee}) to tx sender"))?;
    }

    let to = cfg.humanize(&t.recipient)?;
    let fee_recipient = cfg.humanize(sender)?;

    info!(
        token_chain = t.token_chain,
        denom = %identifier,
        amount = %amount.amount,
        fee = %fee.amount,
        to = %to,
        "completed transfer"
    );

    Ok(TransferReceived {
        token_chain: t.token_chain,
        token_address: t.token_address,
        to,
        fee_recipient,
        amount: amount.amount,
        fee: fee.amount,
        local_denom: identifier,
    }
    .into())
}

// Checks that `wire` is a valid amount of `denom` and converts it to native precision.
fn untruncate_coin(denom: &str, wire: Uint256, decimals: u32) -> anyhow::Result<Coin> {
    Coin::new(wire, denom).validate()?;
    let amount = normalize::untruncate(wire, decimals)?;
    Ok(Coin::new(amount, denom))
}
