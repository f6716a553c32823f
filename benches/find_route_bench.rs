use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use swap_route::{ContractLink, PairGraph, Router, Token, TradingPair};

fn token(index: usize) -> Token {
    Token::custom(format!("secret1token{}", index), format!("hash{}", index))
}

// A ring of tokens with a chord every few tokens and the native asset attached to the first one
fn ring_pairs(token_count: usize) -> Vec<TradingPair> {
    let mut pairs = vec![TradingPair { token_0: Token::default_native(), token_1: token(0), contract: ContractLink::new("secret1pair_native", "h") }];
    for i in 0..token_count {
        let next = (i + 1) % token_count;
        pairs.push(TradingPair { token_0: token(i), token_1: token(next), contract: ContractLink::new(format!("secret1pair_ring{}", i), "h") });
        if i % 4 == 0 {
            let chord = (i + token_count / 3) % token_count;
            if chord != i {
                pairs.push(TradingPair { token_0: token(i), token_1: token(chord), contract: ContractLink::new(format!("secret1pair_chord{}", i), "h") });
            }
        }
    }
    pairs
}

fn benchmark_find_route(c: &mut Criterion) {
    let pairs = ring_pairs(50);
    let router = Router::default();
    let destination = token(25);

    c.bench_function("find_route", |b| {
        b.iter(|| {
            router.find_route(black_box(&pairs), black_box(&Token::default_native()), black_box(&destination)).unwrap();
        })
    });

    let pair_graph = PairGraph::from_pairs(&pairs);
    c.bench_function("find_route_in_prebuilt_graph", |b| {
        b.iter(|| {
            router.find_route_in(black_box(&pair_graph), black_box(&Token::default_native()), black_box(&destination)).unwrap();
        })
    });
}

criterion_group!(benches, benchmark_find_route);
criterion_main!(benches);
