use std::str::FromStr;

use alloy::primitives::{Address, U256};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::prelude::*;
use weir::config::AddressMap;
use weir::entities::{compute_pair_address, Pair, Token, TokenAmount};
use weir::utils::logger::setup_logger;

/// Generate a new random token address
fn generate_random_address(rng: &mut ThreadRng) -> Address {
    let addr_str = format!("0x{:040x}", rng.random::<u64>());
    Address::from_str(&addr_str).unwrap()
}

/// Factory/template tables for the synthetic chain used by the benches
fn address_tables(rng: &mut ThreadRng) -> (AddressMap, AddressMap) {
    let mut factories = AddressMap::new();
    let mut templates = AddressMap::new();
    factories.insert(1, generate_random_address(rng));
    templates.insert(1, generate_random_address(rng));
    (factories, templates)
}

/// Generate synthetic token sets for benchmarking
fn generate_benchmark_tokens(rng: &mut ThreadRng, token_count: usize) -> Vec<Token> {
    (0..token_count)
        .map(|_| Token::new(1, generate_random_address(rng), 18))
        .collect()
}

/// Benchmark pair address derivation over generated token sets
fn bench_compute_pair_address(c: &mut Criterion) {
    setup_logger().ok();
    let mut rng = rand::rng();

    let mut group = c.benchmark_group("compute_pair_address");
    group.sample_size(100);

    for token_count in [10, 100, 1000] {
        let tokens = generate_benchmark_tokens(&mut rng, token_count);
        let factory = generate_random_address(&mut rng);
        let template = generate_random_address(&mut rng);

        group.throughput(criterion::Throughput::Elements(token_count as u64 - 1));
        group.bench_with_input(
            BenchmarkId::from_parameter(token_count),
            &token_count,
            |b, _| {
                b.iter(|| {
                    // derive every pair along a chain of tokens
                    for window in tokens.windows(2) {
                        black_box(compute_pair_address(
                            factory,
                            template,
                            &window[0],
                            &window[1],
                        ));
                    }
                });
            },
        );
    }

    group.finish();
}

/// Benchmark the mint and value-out paths of the liquidity math
fn bench_liquidity_math(c: &mut Criterion) {
    let mut rng = rand::rng();
    let (factories, templates) = address_tables(&mut rng);

    let token_a = Token::new(1, generate_random_address(&mut rng), 18);
    let token_b = Token::new(1, generate_random_address(&mut rng), 18);

    let reserve = U256::from(rng.random_range(1_000_000u64..1_000_000_000));
    let pair = Pair::new(
        TokenAmount::new(token_a.clone(), reserve),
        TokenAmount::new(token_b.clone(), reserve * U256::from(3)),
        &factories,
        &templates,
    )
    .unwrap();

    let supply = TokenAmount::new(pair.liquidity_token().clone(), reserve);
    let deposit_a = TokenAmount::new(token_a.clone(), U256::from(50_000));
    let deposit_b = TokenAmount::new(token_b, U256::from(150_000));

    c.bench_function("liquidity_minted", |b| {
        b.iter(|| {
            black_box(
                pair.liquidity_minted(
                    black_box(&supply),
                    black_box(&deposit_a),
                    black_box(&deposit_b),
                )
                .unwrap(),
            )
        });
    });

    let position = TokenAmount::new(pair.liquidity_token().clone(), reserve / U256::from(10));
    let k_last = reserve * reserve;

    c.bench_function("liquidity_value_fee_on", |b| {
        b.iter(|| {
            black_box(
                pair.liquidity_value(
                    black_box(&token_a),
                    black_box(&supply),
                    black_box(&position),
                    true,
                    Some(black_box(k_last)),
                )
                .unwrap(),
            )
        });
    });
}

// Criterion setup
criterion_group!(benches, bench_compute_pair_address, bench_liquidity_math);
criterion_main!(benches);
