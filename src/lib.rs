// Routing logic: pair graph, chain assembly and route extraction
pub mod logic;

// Common utilities and types
pub mod utils;

// Re-export key components
pub use logic::{
    Assembler, DirectedPair, ExclusionSet, Hop, PairGraph, Route, RouteHash, Router, RouterConfigSection, RoutingError, SearchChain, SearchNode,
    TradingPair, find_route,
};
pub use utils::{ContractLink, LoadConfigError, RouteConfigLoader, RouteConfigLoaderSync, Token, TokenKey};
