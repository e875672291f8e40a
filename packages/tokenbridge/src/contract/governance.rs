use anyhow::{bail, ensure};
use cosmwasm_std::{Event, Storage};
use tracing::debug;

use super::{ensure_not_executed, mark_executed, save_chain_registration};
use crate::{
    msg::VerifiedVaa,
    payload::{GovernancePacket, RegisterChain},
    state::load_config,
    transaction::transactional,
    TokenBridgeError,
};

/// Executes a verified token bridge governance VAA. Only chain registrations are supported.
pub fn execute_governance_vaa(
    storage: &mut dyn Storage,
    vaa: &VerifiedVaa,
) -> anyhow::Result<Event> {
    let res = transactional(storage, |storage| {
        let cfg = load_config(storage)?;

        ensure_not_executed(storage, vaa)?;

        ensure!(
            cfg.is_governance_emitter(vaa.emitter_chain, &vaa.emitter_address),
            TokenBridgeError::InvalidGovernanceEmitter
        );

        let packet = GovernancePacket::deserialize(&vaa.payload)?;
        ensure!(
            packet.module == GovernancePacket::MODULE,
            TokenBridgeError::InvalidGovernanceModule
        );
        ensure!(
            packet.chain == 0 || packet.chain == cfg.chain_id,
            TokenBridgeError::InvalidGovernanceTarget
        );

        let evt = match packet.action {
            RegisterChain::ACTION => {
                let RegisterChain {
                    chain_id,
                    emitter_address,
                } = RegisterChain::deserialize(&packet.payload)?;
                save_chain_registration(storage, chain_id, emitter_address)?
            }
            other => bail!(TokenBridgeError::UnknownGovernanceAction(other)),
        };

        mark_executed(storage, vaa)?;

        Ok(evt)
    });

    if let Err(e) = &res {
        debug!(
            digest = %vaa.hex_digest(),
            sequence = vaa.sequence,
            error = %format!("{e:#}"),
            "rejected governance VAA"
        );
    }

    res
}
