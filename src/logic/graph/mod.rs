pub mod pair_graph;
pub mod route;
pub mod search_node;

pub use pair_graph::{FastHashMap, PairGraph, TokenNode};
pub use route::{Route, RouteHash, generate_route_hash};
pub use search_node::{SearchChain, SearchNode};
