use super::assembler::{Assembler, ExclusionSet};
use super::error::RoutingError;
use super::graph::{PairGraph, Route, SearchChain};
use super::router_config::RouterConfigSection;
use super::types::TradingPair;
use crate::utils::Token;
use tracing::debug;

/// Entry point for callers that turn a registry of trading pairs into routes.
#[derive(Clone, Debug, Default)]
pub struct Router {
    config: RouterConfigSection,
}

impl Router {
    pub fn new(config: RouterConfigSection) -> Self {
        Self { config }
    }

    /// Find the shortest route from `source` to `destination` over the given pairs.
    pub fn find_route(&self, pairs: &[TradingPair], source: &Token, destination: &Token) -> Result<Route, RoutingError> {
        let pair_graph = PairGraph::from_pairs(pairs);
        self.find_route_in(&pair_graph, source, destination)
    }

    /// Same as [`Router::find_route`] on a graph that is built once and reused between requests.
    pub fn find_route_in(&self, pair_graph: &PairGraph, source: &Token, destination: &Token) -> Result<Route, RoutingError> {
        let route = self.find_chain(pair_graph, source, destination, &ExclusionSet::default())?.to_route()?;
        debug!("Route {} from {} to {}", route.route_hash(), source, destination);
        Ok(route)
    }

    /// The assembled chain before it is flattened into hops.
    pub fn find_chain(&self, pair_graph: &PairGraph, source: &Token, destination: &Token, excluded: &ExclusionSet) -> Result<SearchChain, RoutingError> {
        Assembler::new(pair_graph, self.config.max_hops).assemble_excluding(source, destination, excluded)
    }
}

/// Find a route with the default router configuration.
pub fn find_route(pairs: &[TradingPair], source: &Token, destination: &Token) -> Result<Route, RoutingError> {
    Router::default().find_route(pairs, source, destination)
}
