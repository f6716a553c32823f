//! Routing logic
//!
//! - token pairs and their swap directions
//! - the pair graph and the chains assembled on top of it
//! - the router entry point turning a chain into a list of hops

pub mod assembler;
pub mod error;
pub mod graph;
pub mod router;
pub mod router_config;
pub mod types;

pub use assembler::{Assembler, ExclusionSet};
pub use error::RoutingError;
pub use graph::{PairGraph, Route, RouteHash, SearchChain, SearchNode, generate_route_hash};
pub use router::{Router, find_route};
pub use router_config::{RouterConfigRoot, RouterConfigSection};
pub use types::{DirectedPair, Hop, TradingPair};
