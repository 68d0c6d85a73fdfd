// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Ecliptix Security — SRP-6a
// Licensed under the MIT License

use std::sync::Arc;

use num_bigint::BigUint;
use rand_core::OsRng;

use crate::bigint::random_salt;
use crate::params::SrpParameters;
use crate::protocol::compute_verifier;
use crate::routines::{DefaultPasswordKey, PasswordKeyRoutine};

/// Default salt length in bytes for [`VerifierGenerator::generate_salt`].
pub const DEFAULT_SALT_LENGTH: usize = 16;

/// Generator of password verifier 'v' values for provisioning.
///
/// Provisioning happens out-of-band, before any authentication session:
/// the server stores `(identity, salt, v)` and never sees the password.
/// The configured password key routine must match the one the client
/// authenticates with, or authentication will deterministically fail.
pub struct VerifierGenerator {
    params: SrpParameters,
    password_key: Arc<dyn PasswordKeyRoutine>,
}

impl VerifierGenerator {
    /// Creates a generator over the given parameters with the default
    /// password key routine `x = H(s | H(P))`.
    pub fn new(params: SrpParameters) -> Self {
        Self {
            params,
            password_key: Arc::new(DefaultPasswordKey),
        }
    }

    /// Replaces the password key routine.
    pub fn set_password_key_routine(&mut self, routine: Arc<dyn PasswordKeyRoutine>) {
        self.password_key = routine;
    }

    /// Generates a random salt 's' of `len` bytes.
    pub fn generate_salt_of_length(len: usize) -> Vec<u8> {
        random_salt(len, &mut OsRng)
    }

    /// Generates a random salt 's' of [`DEFAULT_SALT_LENGTH`] bytes.
    pub fn generate_salt() -> Vec<u8> {
        Self::generate_salt_of_length(DEFAULT_SALT_LENGTH)
    }

    /// Computes a verifier `v = g^x mod N` for the given credentials.
    ///
    /// The identity may be empty when the configured x-routine ignores it.
    pub fn generate_verifier(&self, salt: &[u8], identity: &[u8], password: &[u8]) -> BigUint {
        let x = self
            .password_key
            .compute_x(self.params.hash(), salt, identity, password);
        compute_verifier(&self.params, &x)
    }
}
