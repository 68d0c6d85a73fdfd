// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Ecliptix Security — SRP-6a
// Licensed under the MIT License

//! The pure SRP-6a computations, per RFC 5054.
//!
//! Every function here is a pure function of its explicit inputs; session
//! sequencing, timeouts, and validity enforcement live in the `srp-client`
//! and `srp-server` state machines.

use num_bigint::BigUint;
use num_traits::Zero;
use rand_core::{CryptoRng, RngCore};

use crate::bigint::{hash_padded_pair, random_in_range};
use crate::params::SrpParameters;
use crate::types::{SrpError, SrpResult};

/// Computes the multiplier `k = H(PAD(N) | PAD(g))`.
///
/// # Errors
///
/// Propagates [`crate::types::SrpError::InvalidInput`] from the padding
/// step; this cannot occur for parameters validated at construction.
pub fn compute_k(params: &SrpParameters) -> SrpResult<BigUint> {
    hash_padded_pair(params.hash(), params.n(), params.n(), params.g())
}

/// Computes a verifier `v = g^x mod N`.
pub fn compute_verifier(params: &SrpParameters, x: &BigUint) -> BigUint {
    params.g().modpow(x, params.n())
}

/// Generates a random client or server private value ('a' or 'b') with
/// bit length at least `min(256, bits(N) / 2)`, drawn from
/// `[2^(min_bits - 1), N - 1]`.
///
/// # Errors
///
/// Returns [`SrpError::InvalidInput`] if `n < 2`, which leaves no value
/// to draw; this cannot occur for parameters validated at construction.
pub fn generate_private_value<R: RngCore + CryptoRng>(
    n: &BigUint,
    rng: &mut R,
) -> SrpResult<BigUint> {
    if n.is_zero() {
        return Err(SrpError::InvalidInput);
    }
    let min_bits = 256.min(n.bits() / 2).max(1);
    let min = BigUint::from(1u32) << (min_bits - 1);
    let max = n - 1u32;
    random_in_range(&min, &max, rng)
}

/// Computes the public client value `A = g^a mod N`.
pub fn compute_public_client_value(n: &BigUint, g: &BigUint, a: &BigUint) -> BigUint {
    g.modpow(a, n)
}

/// Computes the public server value `B = (g^b + k·v) mod N`.
pub fn compute_public_server_value(
    n: &BigUint,
    g: &BigUint,
    k: &BigUint,
    v: &BigUint,
    b: &BigUint,
) -> BigUint {
    (g.modpow(b, n) + v * k) % n
}

/// Validates a peer public value ('A' or 'B'): it must not be congruent
/// to zero mod N, which would collapse the shared secret to a known
/// constant. Both sides must reject the peer's value before using it.
pub fn is_valid_public_value(n: &BigUint, value: &BigUint) -> bool {
    !(value % n).is_zero()
}

/// Computes the session key `S = (B - k·g^x)^(a + u·x) mod N` from
/// client-side parameters.
///
/// The subtraction is performed mod N, as `B` may be smaller than
/// `k·g^x`.
#[allow(clippy::too_many_arguments)]
pub fn compute_session_key_client(
    n: &BigUint,
    g: &BigUint,
    k: &BigUint,
    x: &BigUint,
    u: &BigUint,
    a: &BigUint,
    b_pub: &BigUint,
) -> BigUint {
    let exp = u * x + a;
    let kgx = g.modpow(x, n) * k % n;
    let base = (b_pub % n + n - kgx) % n;
    base.modpow(&exp, n)
}

/// Computes the session key `S = (A · v^u)^b mod N` from server-side
/// parameters.
pub fn compute_session_key_server(
    n: &BigUint,
    v: &BigUint,
    u: &BigUint,
    a_pub: &BigUint,
    b: &BigUint,
) -> BigUint {
    (v.modpow(u, n) * a_pub).modpow(b, n)
}
