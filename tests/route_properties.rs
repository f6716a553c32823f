use proptest::prelude::*;
use std::collections::HashSet;
use swap_route::{ContractLink, PairGraph, Router, RoutingError, Token, TokenKey, TradingPair, find_route};

fn token(index: usize) -> Token {
    // token 0 is the native asset
    if index == 0 { Token::default_native() } else { Token::custom(format!("secret1token{}", index), format!("hash{}", index)) }
}

fn build_pairs(edges: &[(usize, usize)]) -> Vec<TradingPair> {
    edges
        .iter()
        .enumerate()
        .filter(|(_, (a, b))| a != b)
        .map(|(i, (a, b))| TradingPair { token_0: token(*a), token_1: token(*b), contract: ContractLink::new(format!("secret1pair{}", i), "pair_hash") })
        .collect()
}

fn graph_strategy() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (2usize..50).prop_flat_map(|token_count| (Just(token_count), prop::collection::vec((0..token_count, 0..token_count), 0..200)))
}

/// The tokens a route walks through, destination included.
fn walked_tokens(pairs: &[TradingPair], route_hops: &[swap_route::Hop], destination: &Token) -> Vec<TokenKey> {
    let mut keys: Vec<TokenKey> = route_hops.iter().map(|hop| hop.from_token.canonical_key()).collect();
    keys.push(destination.canonical_key());

    // every hop must use a registered pair touching its origin
    for hop in route_hops {
        let registered = pairs.iter().find(|pair| pair.contract.address == hop.pair_address);
        assert!(registered.is_some_and(|pair| pair.token_0 == hop.from_token || pair.token_1 == hop.from_token));
    }
    keys
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn terminates_and_yields_valid_routes((token_count, edges) in graph_strategy(), source in 0usize..50, destination in 0usize..50) {
        let source = source % token_count;
        let destination = destination % token_count;
        let pairs = build_pairs(&edges);

        match find_route(&pairs, &token(source), &token(destination)) {
            Ok(route) => {
                prop_assert!(!route.is_empty());
                prop_assert_eq!(route.first_token(), Some(&token(source)));

                let keys = walked_tokens(&pairs, &route.hops, &token(destination));
                let unique: HashSet<&TokenKey> = keys.iter().collect();
                prop_assert_eq!(unique.len(), keys.len(), "route revisits a token");
                prop_assert!(keys[1..keys.len() - 1].iter().all(|key| !key.is_native()), "native token inside the route");
            }
            Err(RoutingError::InvalidRequest) => prop_assert_eq!(source, destination),
            Err(RoutingError::RouteNotFound { .. }) => prop_assert_ne!(source, destination),
            Err(e) => prop_assert!(false, "unexpected error {}", e),
        }
    }

    #[test]
    fn symmetric_and_idempotent((token_count, edges) in graph_strategy(), source in 0usize..50, destination in 0usize..50) {
        let source = token(source % token_count);
        let destination = token(destination % token_count);
        let pair_graph = PairGraph::from_pairs(&build_pairs(&edges));
        let router = Router::default();

        let forward = router.find_route_in(&pair_graph, &source, &destination);
        let again = router.find_route_in(&pair_graph, &source, &destination);
        prop_assert_eq!(&forward, &again);

        let backward = router.find_route_in(&pair_graph, &destination, &source);
        prop_assert_eq!(forward.is_ok(), backward.is_ok());
        if let (Ok(forward), Ok(backward)) = (&forward, &backward) {
            // both are shortest routes over the same undirected pairs
            prop_assert_eq!(forward.len(), backward.len());
        }
    }

    #[test]
    fn direct_pair_is_one_hop((token_count, mut edges) in graph_strategy(), a in 1usize..50, b in 1usize..50) {
        let a = a % token_count;
        let b = b % token_count;
        prop_assume!(a != b);
        edges.push((a, b));

        let route = find_route(&build_pairs(&edges), &token(a), &token(b));
        prop_assert!(route.is_ok());
        let route = route.unwrap();
        prop_assert_eq!(route.len(), 1);
        prop_assert_eq!(route.first_token(), Some(&token(a)));
    }
}
