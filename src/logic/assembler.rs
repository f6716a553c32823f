use super::error::RoutingError;
use super::graph::pair_graph::FastHasher;
use super::graph::{PairGraph, SearchChain, SearchNode};
use crate::utils::{Token, TokenKey};
use petgraph::graph::NodeIndex;
use std::collections::{HashSet, VecDeque};
use tracing::{debug, trace};

/// Token keys already committed to the current search branch.
pub type ExclusionSet = HashSet<TokenKey, FastHasher>;

/// Builds the shortest chain of swap directions between two tokens.
///
/// The search is a depth-first walk over the pair graph. Each branch carries its own copy of the
/// exclusion set, so a token is never visited twice in one chain and siblings do not interfere.
/// A direct pair to the destination is accepted without looking further, otherwise the shortest
/// extension among the candidates wins and earlier candidates win ties.
///
/// Branches are bounded by the hop distance to the destination. The bound only discards branches
/// that could not beat the chain already found, it never changes which chain is returned.
pub struct Assembler<'a> {
    pair_graph: &'a PairGraph,
    max_hops: Option<u8>,
}

impl<'a> Assembler<'a> {
    pub fn new(pair_graph: &'a PairGraph, max_hops: Option<u8>) -> Self {
        Self { pair_graph, max_hops }
    }

    pub fn assemble(&self, source: &Token, destination: &Token) -> Result<SearchChain, RoutingError> {
        self.assemble_excluding(source, destination, &ExclusionSet::default())
    }

    /// Like [`Assembler::assemble`], with tokens that must not appear anywhere in the chain.
    pub fn assemble_excluding(&self, source: &Token, destination: &Token, excluded: &ExclusionSet) -> Result<SearchChain, RoutingError> {
        if source == destination {
            return Err(RoutingError::InvalidRequest);
        }

        let source_key = source.canonical_key();
        let destination_key = destination.canonical_key();
        let not_found = || RoutingError::RouteNotFound { from: source_key.clone(), to: destination_key.clone() };

        debug!("Assembling route from {} to {} with {} excluded tokens", source, destination, excluded.len());

        let (Some(source_node), Some(destination_node)) =
            (self.pair_graph.get_token_idx(&source_key), self.pair_graph.get_token_idx(&destination_key))
        else {
            debug!("Token {} or {} is not part of any pair", source, destination);
            return Err(not_found());
        };

        let distances = self.distances_to(destination_node, excluded);
        let Some(shortest) = distances.get(source_node.index()).copied().flatten() else {
            debug!("{} is not connected to {}", source, destination);
            return Err(not_found());
        };

        // simple chains never have more hops than there are tokens
        let mut ceiling = self.pair_graph.token_count();
        if let Some(max_hops) = self.max_hops {
            ceiling = ceiling.min(max_hops as usize);
        }

        let search = Search { pair_graph: self.pair_graph, destination: &destination_key, distances: &distances };
        for limit in shortest..=ceiling {
            if let Some(head) = search.extend(&source_key, excluded, limit) {
                let chain = SearchChain::new(head, destination_key.clone());
                if !chain.is_solved() {
                    debug!("Discarding unsolved chain {:?}", chain.describe());
                    return Err(not_found());
                }
                debug!("Found route with {} hops: {:?}", chain.hop_count(), chain.describe());
                return Ok(chain);
            }
        }

        debug!("No route from {} to {} within {} hops", source, destination, ceiling);
        Err(not_found())
    }

    /// Hop distance of every token to `destination`, ignoring the per-branch exclusions. The native
    /// token can only be the first or the last token of a chain, so no distance is propagated through it.
    fn distances_to(&self, destination: NodeIndex<usize>, excluded: &ExclusionSet) -> Vec<Option<usize>> {
        let graph = &self.pair_graph.graph;
        let mut distances = vec![None; graph.node_count()];

        let is_excluded = |node: NodeIndex<usize>| graph.node_weight(node).is_none_or(|n| excluded.contains(&n.token.canonical_key()));
        if is_excluded(destination) {
            return distances;
        }

        distances[destination.index()] = Some(0);
        let mut queue = VecDeque::from([destination]);

        while let Some(node) = queue.pop_front() {
            let Some(distance) = distances[node.index()] else {
                continue;
            };
            if node != destination && graph.node_weight(node).is_some_and(|n| n.token.is_native()) {
                continue;
            }
            for neighbor in graph.neighbors(node) {
                if distances[neighbor.index()].is_none() && !is_excluded(neighbor) {
                    distances[neighbor.index()] = Some(distance + 1);
                    queue.push_back(neighbor);
                }
            }
        }

        distances
    }
}

struct Search<'a> {
    pair_graph: &'a PairGraph,
    destination: &'a TokenKey,
    distances: &'a [Option<usize>],
}

impl Search<'_> {
    /// Shortest chain from `source` to the destination with at most `remaining` hops.
    fn extend(&self, source: &TokenKey, excluded: &ExclusionSet, remaining: usize) -> Option<SearchNode> {
        if remaining == 0 || excluded.contains(source) {
            return None;
        }
        let source_node = self.pair_graph.get_token_idx(source)?;

        let mut working = excluded.clone();
        working.insert(source.clone());

        let candidates: Vec<_> =
            self.pair_graph.outgoing(source_node).into_iter().filter(|(_, pair)| !working.contains(&pair.destination.canonical_key())).collect();

        if let Some((_, direct)) = candidates.iter().find(|(_, pair)| pair.destination.canonical_key() == *self.destination) {
            return Some(SearchNode::leaf((*direct).clone()));
        }

        let mut best: Option<SearchNode> = None;
        for (via_node, candidate) in candidates {
            if candidate.destination.is_native() {
                trace!("Not passing through native token via {}", candidate);
                continue;
            }
            // hops left for the continuation, it must also beat the best chain so far
            let budget = best.as_ref().map_or(remaining, |b| b.hop_count().saturating_sub(1)).saturating_sub(1);
            match self.distances.get(via_node.index()).copied().flatten() {
                Some(distance) if distance <= budget => {}
                _ => continue,
            }

            match self.extend(&candidate.destination.canonical_key(), &working, budget) {
                Some(next) => best = Some(SearchNode::with_next(candidate.clone(), next)),
                None => trace!("No continuation for {}", candidate),
            }
        }

        best
    }
}
