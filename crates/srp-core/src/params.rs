// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Ecliptix Security — SRP-6a
// Licensed under the MIT License

use std::sync::Arc;

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::routines::{HashRoutine, Sha1Hash};
use crate::types::{SrpError, SrpResult};

// Precomputed safe primes, from the SRP-6a demo at
// http://srp.stanford.edu/demo/demo.html, as decimal strings.

const N_256: &[u8] =
    b"125617018995153554710546479714086468244499594888726646874671447258204721048803";

const N_512: &[u8] =
    b"1114425243914953341783574955616899173693915777892494703720026835861386335004033901709779\
0259154750906072491181606044774215413467851989724116331597513345603";

const N_768: &[u8] =
    b"1087179135105457859072065649059069760280540086975817629066444682366896187793570736574549\
9814888682178436270948679248003428870960648442278367356671683199812887653774998063854899133414\
88724152562880918438701129530606139552645689583147";

const N_1024: &[u8] =
    b"1676094344103350613451395237643500902601355253298139045574209303098008658594735515315515\
2380001391657389186478993474703901054632848084897951663767377660561037466942621477619782849269\
1384519453218253702788022233205683635831626913357154941914129985489522629902540768368409482248\
290641036967659389658897350067939";

/// The common generator for all precomputed primes.
const G_COMMON: u32 = 2;

/// The immutable SRP-6a crypto parameter triple: a large safe prime N, a
/// corresponding generator g, and the principal hash algorithm H.
///
/// These must be agreed between client and server prior to authentication.
/// The practical approach is to have the server manage them and publish
/// them to clients on request. An instance is read-only after construction
/// and can be shared across any number of concurrent sessions.
#[derive(Clone)]
pub struct SrpParameters {
    n: BigUint,
    g: BigUint,
    hash: Arc<dyn HashRoutine>,
}

impl SrpParameters {
    /// Creates a new parameter triple.
    ///
    /// `n` is trusted to be a safe prime; primality is not verified
    /// computationally.
    ///
    /// # Errors
    ///
    /// Returns [`SrpError::InvalidConfig`] if `n` is zero or even, if `g`
    /// is outside `[2, n - 2]`, or if the bit length of `n` is smaller
    /// than the digest size of `hash`.
    pub fn new(n: BigUint, g: BigUint, hash: Arc<dyn HashRoutine>) -> SrpResult<Self> {
        if n.is_zero() || !n.bit(0) {
            return Err(SrpError::InvalidConfig);
        }
        let n_minus_one = &n - 1u32;
        if g.is_zero() || g.is_one() || g >= n_minus_one {
            return Err(SrpError::InvalidConfig);
        }
        if n.bits() < hash.output_bits() {
            return Err(SrpError::InvalidConfig);
        }
        Ok(Self { n, g, hash })
    }

    /// Returns the parameter instance with the precomputed safe prime of
    /// the given bit size (256, 512, 768, or 1024), the common generator
    /// g = 2, and SHA-1 as the hash, or `None` for unsupported sizes.
    ///
    /// Only the four Stanford demo groups are precomputed; larger groups
    /// such as the RFC 5054 2048-8192 bit primes go through
    /// [`SrpParameters::new`] with caller-supplied values.
    pub fn for_bit_size(bitsize: u32) -> Option<Self> {
        let n_decimal = match bitsize {
            256 => N_256,
            512 => N_512,
            768 => N_768,
            1024 => N_1024,
            _ => return None,
        };
        let n = BigUint::parse_bytes(n_decimal, 10)?;
        Self::new(n, BigUint::from(G_COMMON), Arc::new(Sha1Hash)).ok()
    }

    /// The safe prime N.
    pub fn n(&self) -> &BigUint {
        &self.n
    }

    /// The generator g.
    pub fn g(&self) -> &BigUint {
        &self.g
    }

    /// The principal hash routine H.
    pub fn hash(&self) -> &dyn HashRoutine {
        self.hash.as_ref()
    }

    /// The byte length values are padded to when hashed in pairs.
    pub fn pad_length(&self) -> usize {
        self.n.bits().div_ceil(8) as usize
    }
}

impl std::fmt::Debug for SrpParameters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SrpParameters")
            .field("n_bits", &self.n.bits())
            .field("g", &self.g)
            .field("hash", &self.hash.name())
            .finish()
    }
}
