use super::route::Route;
use crate::logic::error::RoutingError;
use crate::logic::types::DirectedPair;
use crate::utils::TokenKey;

/// A swap direction with an optional, exclusively owned continuation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchNode {
    pub pair: DirectedPair,
    pub next: Option<Box<SearchNode>>,
}

impl SearchNode {
    /// Terminal node without a continuation
    pub fn leaf(pair: DirectedPair) -> Self {
        Self { pair, next: None }
    }

    pub fn with_next(pair: DirectedPair, next: SearchNode) -> Self {
        Self { pair, next: Some(Box::new(next)) }
    }

    pub fn iter(&self) -> SearchNodeIter<'_> {
        SearchNodeIter { current: Some(self) }
    }

    pub fn hop_count(&self) -> usize {
        self.iter().count()
    }

    pub fn tail(&self) -> &SearchNode {
        let mut node = self;
        while let Some(next) = node.next.as_deref() {
            node = next;
        }
        node
    }
}

pub struct SearchNodeIter<'a> {
    current: Option<&'a SearchNode>,
}

impl<'a> Iterator for SearchNodeIter<'a> {
    type Item = &'a SearchNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.current?;
        self.current = node.next.as_deref();
        Some(node)
    }
}

/// A chain of search nodes together with the destination it was assembled for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchChain {
    pub head: SearchNode,
    pub destination: TokenKey,
}

impl SearchChain {
    pub fn new(head: SearchNode, destination: TokenKey) -> Self {
        Self { head, destination }
    }

    /// A chain is solved when it ends at the requested destination and the native token
    /// is not the origin of any hop but the first one.
    pub fn is_solved(&self) -> bool {
        let mut reached: Option<TokenKey> = None;

        for (position, node) in self.head.iter().enumerate() {
            let origin = node.pair.origin.canonical_key();
            if position > 0 && origin.is_native() {
                return false;
            }
            // hand-built chains may be disconnected
            if reached.as_ref().is_some_and(|previous| *previous != origin) {
                return false;
            }
            reached = Some(node.pair.destination.canonical_key());
        }

        reached.is_some_and(|destination| destination == self.destination)
    }

    pub fn hop_count(&self) -> usize {
        self.head.hop_count()
    }

    pub fn to_route(&self) -> Result<Route, RoutingError> {
        if !self.is_solved() {
            return Err(RoutingError::UnsolvedChain);
        }
        Ok(Route::new(self.head.iter().map(|node| node.pair.to_hop()).collect()))
    }

    /// Human readable trace of every hop, also for unsolved chains
    pub fn describe(&self) -> Vec<String> {
        self.head.iter().map(|node| node.pair.to_string()).collect()
    }
}
