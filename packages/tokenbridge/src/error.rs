use thiserror::Error;

/// Failure kinds reported while executing a VAA.
///
/// Operations in this crate return `anyhow::Error`. When the failure is not caused by the
/// underlying storage or ledger, the error is downcastable to `TokenBridgeError`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenBridgeError {
    #[error("token bridge config not found")]
    NoConfig,
    #[error("VAA was already executed")]
    AlreadyExecuted,
    #[error("chain is not registered")]
    UnregisteredChain,
    #[error("emitter is not registered")]
    UnregisteredEmitter,
    #[error("chain {0} is already registered")]
    ChainAlreadyRegistered(u16),
    #[error("invalid VAA payload")]
    PayloadInvalid,
    #[error("unknown payload type {0}")]
    UnknownPayloadType(u8),
    #[error("invalid target chain")]
    InvalidTargetChain,
    #[error("no denom metadata for local token")]
    NoDenomMetadata,
    #[error("asset not registered")]
    AssetNotRegistered,
    #[error("denom metadata has no unit for display denom {0}")]
    MissingDisplayUnit(String),
    #[error("invalid amount")]
    InvalidAmount,
    #[error("invalid fee")]
    InvalidFee,
    #[error("fee higher than transferred amount")]
    FeeTooHigh,
    #[error("cannot register native asset as wrapped asset")]
    NativeAssetRegistration,
    #[error("asset meta rollback")]
    AssetMetaRollback,
    #[error("mis-matched display denom; {found} != {expected}")]
    MismatchedDisplayDenom { found: String, expected: String },
    #[error("cannot change decimals of registered asset metadata")]
    ChangeDecimals,
    #[error("governance VAA not sent by the governance emitter")]
    InvalidGovernanceEmitter,
    #[error("governance VAA is not for the token bridge module")]
    InvalidGovernanceModule,
    #[error("governance VAA is for another chain")]
    InvalidGovernanceTarget,
    #[error("unknown governance action {0}")]
    UnknownGovernanceAction(u8),
}
