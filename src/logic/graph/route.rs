use crate::logic::types::Hop;
use crate::utils::Token;
use alloy_primitives::hex;
use serde::{Deserialize, Serialize};
use sha2::digest::Update;
use sha2::{Digest, Sha256};
use std::fmt::{Display, Formatter};

/// Ordered hops converting the first hop's token into the requested destination.
/// The destination itself is implied by the last pair and is not stored.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Route {
    pub hops: Vec<Hop>,
}

impl Route {
    pub fn new(hops: Vec<Hop>) -> Self {
        Self { hops }
    }

    /// The hop count of the route
    pub fn len(&self) -> usize {
        self.hops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hops.is_empty()
    }

    pub fn first_token(&self) -> Option<&Token> {
        self.hops.first().map(|hop| &hop.from_token)
    }

    pub fn route_hash(&self) -> RouteHash {
        generate_route_hash(&self.hops)
    }
}

impl Display for Route {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Route(hops={:?})",
            self.hops.iter().map(|hop| format!("{}@{}", hop.from_token, hop.pair_address)).collect::<Vec<String>>()
        )
    }
}

/// Identifies a route by the tokens and pair contracts it walks through, shown as a `0x` hex string.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RouteHash([u8; 32]);

impl Display for RouteHash {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", hex::encode_prefixed(self.0))
    }
}

impl Serialize for RouteHash {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Hash the origin token identity and the pair address of every hop to a sha256 hash.
/// Code hashes and denominations do not take part, so equal routes hash equally.
pub fn generate_route_hash(hops: &[Hop]) -> RouteHash {
    let mut hasher = Sha256::new();

    for hop in hops.iter() {
        Update::update(&mut hasher, &hop.from_token.canonical_key().hash_bytes());
        Update::update(&mut hasher, hop.pair_address.as_bytes());
        // separator so that address boundaries can not shift between hops
        Update::update(&mut hasher, &[0xff]);
    }

    let hash_slice: [u8; 32] = hasher.finalize().into();
    RouteHash(hash_slice)
}
