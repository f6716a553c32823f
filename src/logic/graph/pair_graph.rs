use crate::logic::types::{DirectedPair, TradingPair};
use crate::utils::{Token, TokenKey};
use ahash::RandomState;
use eyre::eyre;
use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;
use std::collections::HashMap;
use tracing::{debug, warn};

pub type FastHasher = RandomState;
/// FastHashMap using ahash
pub type FastHashMap<K, V> = HashMap<K, V, FastHasher>;

#[derive(Debug, Clone)]
pub struct TokenNode {
    pub token: Token,
}

impl TokenNode {
    pub fn new(token: Token) -> Self {
        Self { token }
    }
}

/// Directed graph of tokens (nodes) and swap directions (edges).
///
/// Every registered trading pair contributes two edges, one per direction, both carrying the
/// same pair contract. Nodes and edges are never removed, so indices stay valid for the
/// lifetime of the graph.
#[derive(Debug, Clone, Default)]
pub struct PairGraph {
    pub graph: DiGraph<TokenNode, DirectedPair, usize>,
    // token key -> node index
    pub token_index: FastHashMap<TokenKey, NodeIndex<usize>>,
    // pair contract address -> pairs registered under it
    pub pairs: FastHashMap<String, Vec<TradingPair>>,
}

impl PairGraph {
    pub fn new() -> Self {
        Self { graph: DiGraph::default(), token_index: FastHashMap::default(), pairs: FastHashMap::default() }
    }

    /// Build a graph from the pairs of a registry. Pairs that connect a token with itself are skipped.
    pub fn from_pairs(pairs: &[TradingPair]) -> Self {
        let mut pair_graph = PairGraph::new();
        for pair in pairs {
            if let Err(e) = pair_graph.add_pair(pair) {
                warn!("Skipping trading pair {}: {}", pair, e);
            }
        }
        debug!("Pair graph built with {} tokens and {} pairs", pair_graph.token_count(), pair_graph.pair_count());
        pair_graph
    }

    pub fn add_or_get_token_idx(&mut self, token: &Token) -> NodeIndex<usize> {
        *self.token_index.entry(token.canonical_key()).or_insert_with(|| self.graph.add_node(TokenNode::new(token.clone())))
    }

    /// Add both directions of a pair. A pair already registered under the same contract address
    /// with the same two tokens is ignored; any other pair is registered even if its address is shared.
    pub fn add_pair(&mut self, pair: &TradingPair) -> eyre::Result<()> {
        if !pair.is_valid() {
            return Err(eyre!("Pair connects token {} with itself", pair.token_0));
        }
        let registered = self.pairs.entry(pair.contract.address.clone()).or_default();
        if registered.iter().any(|known| known.same_tokens(pair)) {
            debug!("Pair {} already registered", pair);
            return Ok(());
        }
        if !registered.is_empty() {
            warn!("Pair contract {} is shared by {} pairs", pair.contract.address, registered.len() + 1);
        }
        registered.push(pair.clone());

        for directed_pair in pair.directions() {
            let node_from = self.add_or_get_token_idx(&directed_pair.origin);
            let node_to = self.add_or_get_token_idx(&directed_pair.destination);
            self.graph.add_edge(node_from, node_to, directed_pair);
        }

        Ok(())
    }

    pub fn get_token_idx(&self, token_key: &TokenKey) -> Option<NodeIndex<usize>> {
        self.token_index.get(token_key).copied()
    }

    pub fn get_token(&self, node: NodeIndex<usize>) -> eyre::Result<&Token> {
        self.graph.node_weight(node).map(|node| &node.token).ok_or_else(|| eyre!("Token node not found in graph: {:?}", node))
    }

    /// Swap directions leaving `node`, in the order their pairs were registered.
    pub fn outgoing(&self, node: NodeIndex<usize>) -> Vec<(NodeIndex<usize>, &DirectedPair)> {
        let mut edges: Vec<(EdgeIndex<usize>, NodeIndex<usize>, &DirectedPair)> =
            self.graph.edges(node).map(|edge| (edge.id(), edge.target(), edge.weight())).collect();
        // petgraph walks the adjacency list newest first
        edges.sort_by_key(|(edge_index, _, _)| *edge_index);
        edges.into_iter().map(|(_, target, directed_pair)| (target, directed_pair)).collect()
    }

    pub fn token_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn pair_count(&self) -> usize {
        self.pairs.values().map(Vec::len).sum()
    }
}
