use crate::utils::constants::NATIVE_DENOM;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

/// Identity of a token inside the routing graph.
///
/// Every native token maps to the same `Native` key regardless of its denomination,
/// custom tokens are keyed by their contract address.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenKey {
    Native,
    Custom(String),
}

impl TokenKey {
    pub fn is_native(&self) -> bool {
        matches!(self, TokenKey::Native)
    }

    // Bytes fed into the route hash. The leading tag keeps native and custom keys apart.
    pub(crate) fn hash_bytes(&self) -> Vec<u8> {
        match self {
            TokenKey::Native => vec![0u8],
            TokenKey::Custom(address) => {
                let mut bytes = Vec::with_capacity(address.len() + 1);
                bytes.push(1u8);
                bytes.extend_from_slice(address.as_bytes());
                bytes
            }
        }
    }
}

impl Display for TokenKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKey::Native => write!(f, "native"),
            TokenKey::Custom(address) => write!(f, "{}", address),
        }
    }
}

/// A token tradable on the exchange, serialized the way the pair and router contracts expect it:
/// `{"native_token":{"denom":..}}` or `{"custom_token":{"contract_addr":..,"token_code_hash":..}}`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Token {
    NativeToken { denom: String },
    CustomToken { contract_addr: String, token_code_hash: String },
}

impl Token {
    pub fn native<S: Into<String>>(denom: S) -> Token {
        Token::NativeToken { denom: denom.into() }
    }

    /// The chain native fee asset
    pub fn default_native() -> Token {
        Token::native(NATIVE_DENOM)
    }

    pub fn custom<A: Into<String>, H: Into<String>>(contract_addr: A, token_code_hash: H) -> Token {
        Token::CustomToken { contract_addr: contract_addr.into(), token_code_hash: token_code_hash.into() }
    }

    pub fn canonical_key(&self) -> TokenKey {
        match self {
            Token::NativeToken { .. } => TokenKey::Native,
            Token::CustomToken { contract_addr, .. } => TokenKey::Custom(contract_addr.clone()),
        }
    }

    pub fn is_native(&self) -> bool {
        matches!(self, Token::NativeToken { .. })
    }

    pub fn get_code_hash(&self) -> Option<&str> {
        match self {
            Token::NativeToken { .. } => None,
            Token::CustomToken { token_code_hash, .. } => Some(token_code_hash),
        }
    }
}

impl Hash for Token {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical_key().hash(state)
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.canonical_key() == other.canonical_key()
    }
}

impl Eq for Token {}

impl Ord for Token {
    fn cmp(&self, other: &Self) -> Ordering {
        self.canonical_key().cmp(&other.canonical_key())
    }
}

impl PartialOrd for Token {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::NativeToken { denom } => write!(f, "{}", denom),
            Token::CustomToken { contract_addr, .. } => write!(f, "{}", contract_addr),
        }
    }
}

/// Address and code hash of an on-chain contract.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContractLink {
    pub address: String,
    pub code_hash: String,
}

impl ContractLink {
    pub fn new<A: Into<String>, H: Into<String>>(address: A, code_hash: H) -> Self {
        Self { address: address.into(), code_hash: code_hash.into() }
    }
}
