use super::error::RoutingError;
use crate::utils::{ContractLink, Token};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// An undirected pair registered on the exchange, serviced by a single pair contract.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TradingPair {
    pub token_0: Token,
    pub token_1: Token,
    pub contract: ContractLink,
}

impl TradingPair {
    pub fn new(token_0: Token, token_1: Token, contract: ContractLink) -> Result<Self, RoutingError> {
        let pair = Self { token_0, token_1, contract };
        if !pair.is_valid() {
            return Err(RoutingError::InvalidPair(pair.contract.address));
        }
        Ok(pair)
    }

    /// A pair is usable only if it connects two distinct tokens
    pub fn is_valid(&self) -> bool {
        self.token_0 != self.token_1
    }

    /// Whether both pairs connect the same two tokens, in either order
    pub fn same_tokens(&self, other: &TradingPair) -> bool {
        (self.token_0 == other.token_0 && self.token_1 == other.token_1) || (self.token_0 == other.token_1 && self.token_1 == other.token_0)
    }

    /// Both swap directions of the pair, forward first
    pub fn directions(&self) -> [DirectedPair; 2] {
        let forward = DirectedPair { origin: self.token_0.clone(), destination: self.token_1.clone(), contract: self.contract.clone() };
        let reverse = forward.reverse();
        [forward, reverse]
    }
}

impl Display for TradingPair {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}@{}", self.token_0, self.token_1, self.contract.address)
    }
}

/// One swap direction of a trading pair.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DirectedPair {
    pub origin: Token,
    pub destination: Token,
    pub contract: ContractLink,
}

impl DirectedPair {
    /// The same pair contract services both directions
    pub fn reverse(&self) -> DirectedPair {
        DirectedPair { origin: self.destination.clone(), destination: self.origin.clone(), contract: self.contract.clone() }
    }

    pub fn to_hop(&self) -> Hop {
        Hop { from_token: self.origin.clone(), pair_address: self.contract.address.clone(), pair_code_hash: self.contract.code_hash.clone() }
    }
}

impl Display for DirectedPair {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.origin, self.destination)
    }
}

/// A single leg of a route as consumed by the router contract.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hop {
    pub from_token: Token,
    pub pair_address: String,
    pub pair_code_hash: String,
}

impl Hop {
    pub fn pair_contract(&self) -> ContractLink {
        ContractLink::new(self.pair_address.clone(), self.pair_code_hash.clone())
    }
}
