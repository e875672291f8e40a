#![allow(dead_code)]

use cosmwasm_std::{testing::MockStorage, Binary, CanonicalAddr, Event, Uint256};
use tokenbridge::{
    bank::{BankKeeper, Coin, DenomUnit, Metadata, StorageBank},
    execute_governance_vaa, execute_vaa, instantiate,
    msg::VerifiedVaa,
    register_chain,
    state::{Config, NativeToken, TokenAddress},
    TokenBridgeError,
};

pub const CHAIN_ID: u16 = 3104;
pub const SOLANA: u16 = 1;
pub const ETHEREUM: u16 = 2;

pub const NATIVE_DENOM: &str = "uworm";

pub fn native_token_address() -> TokenAddress {
    TokenAddress::new([
        0x16, 0x58, 0x09, 0x73, 0x9d, 0x0e, 0x6c, 0x6e, 0x16, 0xea, 0x6a, 0x3a, 0x38, 0xfc, 0x86,
        0x3b, 0x93, 0x2f, 0x6c, 0x15, 0x40, 0x0e, 0x1a, 0x3a, 0x7b, 0x9d, 0x59, 0xe8, 0x57, 0x40,
        0x31, 0x4b,
    ])
}

pub fn governance_emitter() -> TokenAddress {
    let mut addr = [0u8; 32];
    addr[31] = 4;
    addr.into()
}

pub fn ethereum_emitter() -> TokenAddress {
    TokenAddress::new([
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x3e, 0xe1, 0x8b,
        0x22, 0x14, 0xaf, 0xf9, 0x70, 0x00, 0xd9, 0x74, 0xcf, 0x64, 0x7e, 0x7c, 0x34, 0x7e, 0x8f,
        0xa5, 0x85,
    ])
}

pub fn weth_address() -> TokenAddress {
    TokenAddress::new([
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xc0, 0x2a, 0xaa,
        0x39, 0xb2, 0x23, 0xfe, 0x8d, 0x0a, 0x0e, 0x5c, 0x4f, 0x27, 0xea, 0xd9, 0x08, 0x3c, 0x75,
        0x6c, 0xc2,
    ])
}

pub fn module_address() -> CanonicalAddr {
    CanonicalAddr::from(vec![0x01; 20])
}

pub fn relayer() -> CanonicalAddr {
    CanonicalAddr::from(vec![0x0e; 20])
}

pub fn recipient() -> CanonicalAddr {
    CanonicalAddr::from(vec![0x7a; 20])
}

pub fn config() -> Config {
    Config {
        chain_id: CHAIN_ID,
        native_token: NativeToken {
            chain: SOLANA,
            address: native_token_address(),
            denom: NATIVE_DENOM.into(),
        },
        module_address: module_address(),
        address_prefix: "wormhole".into(),
        governance_chain: SOLANA,
        governance_address: governance_emitter(),
    }
}

/// Left pads a local denom into a token address, the way foreign chains encode it.
pub fn denom_address(denom: &str) -> TokenAddress {
    let mut addr = [0u8; 32];
    addr[32 - denom.len()..].copy_from_slice(denom.as_bytes());
    addr.into()
}

pub fn string_to_32(s: &str) -> [u8; 32] {
    let mut out = [0u8; 32];
    out[..s.len()].copy_from_slice(s.as_bytes());
    out
}

#[derive(Debug, Clone)]
pub struct Transfer {
    pub amount: Uint256,
    pub token_address: TokenAddress,
    pub token_chain: u16,
    pub recipient: CanonicalAddr,
    pub recipient_chain: u16,
    pub fee: Uint256,
}

impl Transfer {
    pub fn new(amount: u128, token_chain: u16, token_address: TokenAddress) -> Self {
        Transfer {
            amount: Uint256::from(amount),
            token_address,
            token_chain,
            recipient: recipient(),
            recipient_chain: CHAIN_ID,
            fee: Uint256::zero(),
        }
    }

    pub fn with_fee(mut self, fee: u128) -> Self {
        self.fee = Uint256::from(fee);
        self
    }

    pub fn payload(&self) -> Vec<u8> {
        let mut p = vec![1u8];
        p.extend(self.amount.to_be_bytes());
        p.extend(*self.token_address);
        p.extend(self.token_chain.to_be_bytes());
        p.extend([0u8; 12]);
        p.extend(self.recipient.as_slice());
        p.extend(self.recipient_chain.to_be_bytes());
        p.extend(self.fee.to_be_bytes());
        assert_eq!(133, p.len());
        p
    }
}

#[derive(Debug, Clone)]
pub struct AssetMeta {
    pub token_address: TokenAddress,
    pub token_chain: u16,
    pub decimals: u8,
    pub symbol: String,
    pub name: String,
}

impl AssetMeta {
    pub fn weth() -> Self {
        AssetMeta {
            token_address: weth_address(),
            token_chain: ETHEREUM,
            decimals: 18,
            symbol: "WETH".into(),
            name: "Wrapped Ether".into(),
        }
    }

    pub fn payload(&self) -> Vec<u8> {
        let mut p = vec![2u8];
        p.extend(*self.token_address);
        p.extend(self.token_chain.to_be_bytes());
        p.push(self.decimals);
        p.extend(string_to_32(&self.symbol));
        p.extend(string_to_32(&self.name));
        assert_eq!(100, p.len());
        p
    }
}

pub fn register_chain_payload(target: u16, chain: u16, emitter: TokenAddress) -> Vec<u8> {
    let mut p = vec![0u8; 21];
    p.extend(b"TokenBridge");
    p.push(1);
    p.extend(target.to_be_bytes());
    p.extend(chain.to_be_bytes());
    p.extend(*emitter);
    p
}

/// Builds a VAA whose digest and sequence are both derived from `i`.
pub fn create_vaa(
    i: u64,
    emitter_chain: u16,
    emitter_address: TokenAddress,
    payload: Vec<u8>,
) -> VerifiedVaa {
    let mut digest = [0xd1u8; 32];
    digest[24..].copy_from_slice(&i.to_be_bytes());
    VerifiedVaa {
        digest: Binary::from(digest.to_vec()),
        emitter_chain,
        emitter_address,
        sequence: i,
        payload: Binary::from(payload),
    }
}

pub fn ethereum_vaa(i: u64, payload: Vec<u8>) -> VerifiedVaa {
    create_vaa(i, ETHEREUM, ethereum_emitter(), payload)
}

pub fn governance_vaa(i: u64, payload: Vec<u8>) -> VerifiedVaa {
    create_vaa(i, SOLANA, governance_emitter(), payload)
}

pub struct TestBridge {
    pub storage: MockStorage,
    pub bank: StorageBank,
}

impl TestBridge {
    pub fn execute(&mut self, vaa: &VerifiedVaa) -> anyhow::Result<Event> {
        execute_vaa(&mut self.storage, &self.bank, vaa, &relayer())
    }

    pub fn execute_governance(&mut self, vaa: &VerifiedVaa) -> anyhow::Result<Event> {
        execute_governance_vaa(&mut self.storage, vaa)
    }

    pub fn balance(&self, addr: &CanonicalAddr, denom: &str) -> Uint256 {
        self.bank.balance(&self.storage, addr, denom).unwrap()
    }

    pub fn supply(&self, denom: &str) -> Uint256 {
        self.bank.supply(&self.storage, denom).unwrap()
    }

    pub fn metadata(&self, denom: &str) -> Option<Metadata> {
        self.bank.denom_metadata(&self.storage, denom).unwrap()
    }

    /// Registers bank metadata for a denom native to this chain.
    pub fn set_native_metadata(&mut self, base: &str, display: &str, exponent: u32) {
        let meta = Metadata {
            description: String::new(),
            denom_units: vec![
                DenomUnit {
                    denom: base.into(),
                    exponent: 0,
                    aliases: Vec::new(),
                },
                DenomUnit {
                    denom: display.into(),
                    exponent,
                    aliases: Vec::new(),
                },
            ],
            base: base.into(),
            display: display.into(),
            name: display.into(),
            symbol: display.to_uppercase(),
        };
        self.bank.set_denom_metadata(&mut self.storage, &meta).unwrap();
    }

    /// Puts `amount` of a native denom into custody of the module account.
    pub fn fund_module(&mut self, amount: u128, denom: &str) {
        self.bank
            .mint_coins(
                &mut self.storage,
                &module_address(),
                &Coin::new(Uint256::from(amount), denom),
            )
            .unwrap();
    }
}

pub fn proper_instantiate() -> TestBridge {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();

    let mut bridge = TestBridge {
        storage: MockStorage::new(),
        bank: StorageBank,
    };

    instantiate(&mut bridge.storage, config()).unwrap();
    register_chain(&mut bridge.storage, ETHEREUM, ethereum_emitter()).unwrap();

    bridge
}

pub fn expect_err(res: anyhow::Result<Event>, expected: TokenBridgeError) {
    let err = res.expect_err("VAA executed unexpectedly");
    assert_eq!(
        Some(&expected),
        err.downcast_ref::<TokenBridgeError>(),
        "unexpected error: {err:#}"
    );
}

pub fn attribute<'a>(evt: &'a Event, key: &str) -> &'a str {
    evt.attributes
        .iter()
        .find(|a| a.key == key)
        .map(|a| a.value.as_str())
        .unwrap_or_else(|| panic!("missing attribute {key}"))
}
