// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Ecliptix Security — SRP-6a
// Licensed under the MIT License

//! Pluggable strategy contracts for the SRP-6a variable computations.
//!
//! Four independent contracts cover the hash H, the password key x, the
//! scrambling parameter u, and the evidence messages M1/M2. Every
//! implementation is a pure function of its explicit inputs; the provided
//! strategies are zero-field values and can be shared freely.
//!
//! Client and server must agree on identical strategies for every contract.
//! A mismatch does not raise a configuration error; it deterministically
//! fails authentication at the evidence-comparison step.

use std::sync::Arc;

use digest::Digest;
use num_bigint::BigUint;
use sha1::Sha1;
use sha2::{Sha256, Sha512};

use crate::bigint::{hash_padded_pair, to_unsigned_bytes};
use crate::params::SrpParameters;
use crate::types::{SrpError, SrpResult};

/// The principal hash function H.
pub trait HashRoutine: Send + Sync {
    /// Hashes `input` and returns the digest bytes.
    fn digest(&self, input: &[u8]) -> Vec<u8>;

    /// The digest output size in bits.
    fn output_bits(&self) -> u64;

    /// A short algorithm identifier for diagnostics.
    fn name(&self) -> &'static str;
}

/// SHA-1, the hash the original protocol vectors were produced with.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha1Hash;

impl HashRoutine for Sha1Hash {
    fn digest(&self, input: &[u8]) -> Vec<u8> {
        Sha1::digest(input).to_vec()
    }

    fn output_bits(&self) -> u64 {
        160
    }

    fn name(&self) -> &'static str {
        "SHA-1"
    }
}

/// SHA-256.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256Hash;

impl HashRoutine for Sha256Hash {
    fn digest(&self, input: &[u8]) -> Vec<u8> {
        Sha256::digest(input).to_vec()
    }

    fn output_bits(&self) -> u64 {
        256
    }

    fn name(&self) -> &'static str {
        "SHA-256"
    }
}

/// SHA-512.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha512Hash;

impl HashRoutine for Sha512Hash {
    fn digest(&self, input: &[u8]) -> Vec<u8> {
        Sha512::digest(input).to_vec()
    }

    fn output_bits(&self) -> u64 {
        512
    }

    fn name(&self) -> &'static str {
        "SHA-512"
    }
}

/// Computes the password key x from the salt, identity, and password.
pub trait PasswordKeyRoutine: Send + Sync {
    /// Derives `x` using the session hash `hash`.
    fn compute_x(
        &self,
        hash: &dyn HashRoutine,
        salt: &[u8],
        identity: &[u8],
        password: &[u8],
    ) -> BigUint;
}

/// Default password key routine: `x = H(s | H(P))`.
///
/// Ignores the identity, so a user can change it without re-provisioning
/// the verifier. Use [`IdentityBoundPasswordKey`] for the RFC 5054 form.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultPasswordKey;

impl PasswordKeyRoutine for DefaultPasswordKey {
    fn compute_x(
        &self,
        hash: &dyn HashRoutine,
        salt: &[u8],
        _identity: &[u8],
        password: &[u8],
    ) -> BigUint {
        let inner = hash.digest(password);
        let mut input = salt.to_vec();
        input.extend_from_slice(&inner);
        BigUint::from_bytes_be(&hash.digest(&input))
    }
}

/// RFC 5054 password key routine: `x = H(s | H(I ":" P))`.
///
/// Binds the identity into the key, so changing the identity requires a
/// fresh verifier.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityBoundPasswordKey;

impl PasswordKeyRoutine for IdentityBoundPasswordKey {
    fn compute_x(
        &self,
        hash: &dyn HashRoutine,
        salt: &[u8],
        identity: &[u8],
        password: &[u8],
    ) -> BigUint {
        let mut inner_input = identity.to_vec();
        inner_input.push(b':');
        inner_input.extend_from_slice(password);
        let inner = hash.digest(&inner_input);

        let mut input = salt.to_vec();
        input.extend_from_slice(&inner);
        BigUint::from_bytes_be(&hash.digest(&input))
    }
}

/// PBKDF2-based password key routine: `x = PBKDF2-HMAC-SHA1(P, s, c)`.
///
/// A slow key-derivation drop-in for brute-force resistance. The derived
/// key length is 160 bits; the session hash and the identity are not used.
#[derive(Debug, Clone, Copy)]
pub struct Pbkdf2PasswordKey {
    iterations: u32,
}

impl Pbkdf2PasswordKey {
    /// The default iteration count.
    pub const DEFAULT_ITERATIONS: u32 = 20_000;

    /// PBKDF2-HMAC-SHA1 derived key length in bytes.
    const DERIVED_KEY_LENGTH: usize = 20;

    /// Creates a PBKDF2 password key routine with the given iteration
    /// count.
    ///
    /// # Errors
    ///
    /// Returns [`SrpError::InvalidConfig`] if `iterations` is below 1000.
    pub fn new(iterations: u32) -> SrpResult<Self> {
        if iterations < 1000 {
            return Err(SrpError::InvalidConfig);
        }
        Ok(Self { iterations })
    }

    /// Returns the configured iteration count.
    pub fn iterations(&self) -> u32 {
        self.iterations
    }
}

impl Default for Pbkdf2PasswordKey {
    fn default() -> Self {
        Self {
            iterations: Self::DEFAULT_ITERATIONS,
        }
    }
}

impl PasswordKeyRoutine for Pbkdf2PasswordKey {
    fn compute_x(
        &self,
        _hash: &dyn HashRoutine,
        salt: &[u8],
        _identity: &[u8],
        password: &[u8],
    ) -> BigUint {
        let mut key = [0u8; Self::DERIVED_KEY_LENGTH];
        pbkdf2::pbkdf2_hmac::<Sha1>(password, salt, self.iterations, &mut key);
        BigUint::from_bytes_be(&key)
    }
}

/// Computes the scrambling parameter u from both public values.
pub trait ScramblingRoutine: Send + Sync {
    /// Derives `u` from the public values A and B.
    ///
    /// # Errors
    ///
    /// Returns [`SrpError::InvalidInput`] if a public value does not fit
    /// the pad length of N.
    fn compute_u(
        &self,
        params: &SrpParameters,
        a_pub: &BigUint,
        b_pub: &BigUint,
    ) -> SrpResult<BigUint>;
}

/// Default scrambling routine: `u = H(PAD(A) | PAD(B))`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultScrambling;

impl ScramblingRoutine for DefaultScrambling {
    fn compute_u(
        &self,
        params: &SrpParameters,
        a_pub: &BigUint,
        b_pub: &BigUint,
    ) -> SrpResult<BigUint> {
        hash_padded_pair(params.hash(), params.n(), a_pub, b_pub)
    }
}

/// Computes the client evidence message M1.
pub trait ClientEvidenceRoutine: Send + Sync {
    /// Derives `M1` from A, B, and the shared secret S.
    fn compute_m1(
        &self,
        params: &SrpParameters,
        a_pub: &BigUint,
        b_pub: &BigUint,
        secret: &BigUint,
    ) -> BigUint;
}

/// Computes the server evidence message M2.
pub trait ServerEvidenceRoutine: Send + Sync {
    /// Derives `M2` from A, M1, and the shared secret S.
    fn compute_m2(
        &self,
        params: &SrpParameters,
        a_pub: &BigUint,
        m1: &BigUint,
        secret: &BigUint,
    ) -> BigUint;
}

/// Default client evidence routine: `M1 = H(A | B | S)` over the minimal
/// unsigned big-endian encodings.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultClientEvidence;

impl ClientEvidenceRoutine for DefaultClientEvidence {
    fn compute_m1(
        &self,
        params: &SrpParameters,
        a_pub: &BigUint,
        b_pub: &BigUint,
        secret: &BigUint,
    ) -> BigUint {
        let mut input = to_unsigned_bytes(a_pub);
        input.extend_from_slice(&to_unsigned_bytes(b_pub));
        input.extend_from_slice(&to_unsigned_bytes(secret));
        BigUint::from_bytes_be(&params.hash().digest(&input))
    }
}

/// Default server evidence routine: `M2 = H(A | M1 | S)` over the minimal
/// unsigned big-endian encodings.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultServerEvidence;

impl ServerEvidenceRoutine for DefaultServerEvidence {
    fn compute_m2(
        &self,
        params: &SrpParameters,
        a_pub: &BigUint,
        m1: &BigUint,
        secret: &BigUint,
    ) -> BigUint {
        let mut input = to_unsigned_bytes(a_pub);
        input.extend_from_slice(&to_unsigned_bytes(m1));
        input.extend_from_slice(&to_unsigned_bytes(secret));
        BigUint::from_bytes_be(&params.hash().digest(&input))
    }
}

fn lowercase_hex(n: &BigUint) -> Vec<u8> {
    format!("{n:x}").into_bytes()
}

/// Client evidence routine for peers limited to hexadecimal string
/// hashing: `M1 = H(HEX(A) | HEX(B) | HEX(S))`.
///
/// The hex encodings are minimal lowercase strings. Both sides must use
/// the hex routines together; mixing raw-byte and hex evidence between
/// peers fails authentication without any other signal.
#[derive(Debug, Clone, Copy, Default)]
pub struct HexClientEvidence;

impl ClientEvidenceRoutine for HexClientEvidence {
    fn compute_m1(
        &self,
        params: &SrpParameters,
        a_pub: &BigUint,
        b_pub: &BigUint,
        secret: &BigUint,
    ) -> BigUint {
        let mut input = lowercase_hex(a_pub);
        input.extend_from_slice(&lowercase_hex(b_pub));
        input.extend_from_slice(&lowercase_hex(secret));
        BigUint::from_bytes_be(&params.hash().digest(&input))
    }
}

/// Server evidence routine for peers limited to hexadecimal string
/// hashing: `M2 = H(HEX(A) | HEX(M1) | HEX(S))`.
#[derive(Debug, Clone, Copy, Default)]
pub struct HexServerEvidence;

impl ServerEvidenceRoutine for HexServerEvidence {
    fn compute_m2(
        &self,
        params: &SrpParameters,
        a_pub: &BigUint,
        m1: &BigUint,
        secret: &BigUint,
    ) -> BigUint {
        let mut input = lowercase_hex(a_pub);
        input.extend_from_slice(&lowercase_hex(m1));
        input.extend_from_slice(&lowercase_hex(secret));
        BigUint::from_bytes_be(&params.hash().digest(&input))
    }
}

/// The strategy bundle a session computes with.
///
/// Defaults to the raw-byte routines above. Client and server must hold
/// equivalent bundles for authentication to succeed.
#[derive(Clone)]
pub struct Routines {
    /// Password key x strategy.
    pub password_key: Arc<dyn PasswordKeyRoutine>,
    /// Scrambling parameter u strategy.
    pub scrambling: Arc<dyn ScramblingRoutine>,
    /// Client evidence M1 strategy.
    pub client_evidence: Arc<dyn ClientEvidenceRoutine>,
    /// Server evidence M2 strategy.
    pub server_evidence: Arc<dyn ServerEvidenceRoutine>,
}

impl Default for Routines {
    fn default() -> Self {
        Self {
            password_key: Arc::new(DefaultPasswordKey),
            scrambling: Arc::new(DefaultScrambling),
            client_evidence: Arc::new(DefaultClientEvidence),
            server_evidence: Arc::new(DefaultServerEvidence),
        }
    }
}

impl std::fmt::Debug for Routines {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Routines { .. }")
    }
}
