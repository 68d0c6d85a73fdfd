// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Ecliptix Security — SRP-6a
// Licensed under the MIT License

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use num_bigint::BigUint;
use rand_core::OsRng;
use srp_core::params::SrpParameters;
use srp_core::protocol;
use srp_core::routines::{DefaultScrambling, IdentityBoundPasswordKey, PasswordKeyRoutine, ScramblingRoutine};
use srp_core::verifier::VerifierGenerator;

const IDENTITY: &[u8] = b"bench@example.com";
const PASSWORD: &[u8] = b"benchmark password";

fn bench_verifier_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("verifier");
    for bitsize in [256u32, 512, 1024] {
        let params = SrpParameters::for_bit_size(bitsize).unwrap();
        let generator = VerifierGenerator::new(params);
        let salt = VerifierGenerator::generate_salt();
        group.bench_with_input(BenchmarkId::new("generate", bitsize), &salt, |b, salt| {
            b.iter(|| generator.generate_verifier(salt, IDENTITY, PASSWORD))
        });
    }
    group.finish();
}

fn bench_private_value(c: &mut Criterion) {
    let params = SrpParameters::for_bit_size(1024).unwrap();
    let mut group = c.benchmark_group("protocol");
    group.bench_function("private_value_1024", |b| {
        b.iter(|| protocol::generate_private_value(params.n(), &mut OsRng).unwrap())
    });
    group.finish();
}

fn handshake_inputs(params: &SrpParameters) -> (BigUint, BigUint, BigUint, BigUint, BigUint) {
    let salt = VerifierGenerator::generate_salt();
    let x = IdentityBoundPasswordKey.compute_x(params.hash(), &salt, IDENTITY, PASSWORD);
    let v = protocol::compute_verifier(params, &x);
    let k = protocol::compute_k(params).unwrap();
    let a = protocol::generate_private_value(params.n(), &mut OsRng).unwrap();
    let b = protocol::generate_private_value(params.n(), &mut OsRng).unwrap();
    (x, v, k, a, b)
}

fn bench_session_keys(c: &mut Criterion) {
    let mut group = c.benchmark_group("session_key");
    for bitsize in [256u32, 1024] {
        let params = SrpParameters::for_bit_size(bitsize).unwrap();
        let n = params.n();
        let g = params.g();
        let (x, v, k, a, b) = handshake_inputs(&params);
        let a_pub = protocol::compute_public_client_value(n, g, &a);
        let b_pub = protocol::compute_public_server_value(n, g, &k, &v, &b);
        let u = DefaultScrambling.compute_u(&params, &a_pub, &b_pub).unwrap();

        group.bench_function(BenchmarkId::new("client", bitsize), |bench| {
            bench.iter(|| protocol::compute_session_key_client(n, g, &k, &x, &u, &a, &b_pub))
        });
        group.bench_function(BenchmarkId::new("server", bitsize), |bench| {
            bench.iter(|| protocol::compute_session_key_server(n, &v, &u, &a_pub, &b))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_verifier_generation,
    bench_private_value,
    bench_session_keys
);
criterion_main!(benches);
