// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Ecliptix Security — SRP-6a
// Licensed under the MIT License

use num_bigint::BigUint;
use num_traits::Zero;
use rand_core::{CryptoRng, RngCore};

use crate::routines::HashRoutine;
use crate::types::{SrpError, SrpResult};

/// Upper bound on rejection-sampling attempts before [`random_in_range`]
/// falls back to a restricted-bit-length draw.
const MAX_SAMPLING_ATTEMPTS: usize = 1000;

/// Encodes a big unsigned integer as its minimal big-endian byte string,
/// with no sign byte.
pub fn to_unsigned_bytes(n: &BigUint) -> Vec<u8> {
    n.to_bytes_be()
}

/// Left-zero-pads the minimal unsigned encoding of `n` to exactly `length`
/// bytes.
///
/// # Errors
///
/// Returns [`SrpError::InvalidInput`] if the minimal encoding of `n` is
/// already longer than `length`.
pub fn pad_to_length(n: &BigUint, length: usize) -> SrpResult<Vec<u8>> {
    let bytes = to_unsigned_bytes(n);
    if bytes.len() > length {
        return Err(SrpError::InvalidInput);
    }
    let mut padded = vec![0u8; length];
    padded[length - bytes.len()..].copy_from_slice(&bytes);
    Ok(padded)
}

/// Computes `H(PAD(n1) | PAD(n2))` interpreted as an unsigned integer,
/// where the pad length is the byte length of `n`.
///
/// Both the multiplier k and the scrambling parameter u are derived through
/// this primitive. Peers that pad inconsistently derive different values
/// without any error signal, so the pad length is always taken from N.
///
/// # Errors
///
/// Returns [`SrpError::InvalidInput`] if `n1` or `n2` does not fit in the
/// pad length.
pub fn hash_padded_pair(
    hash: &dyn HashRoutine,
    n: &BigUint,
    n1: &BigUint,
    n2: &BigUint,
) -> SrpResult<BigUint> {
    let pad_length = n.bits().div_ceil(8) as usize;

    let mut input = pad_to_length(n1, pad_length)?;
    input.extend_from_slice(&pad_to_length(n2, pad_length)?);

    Ok(BigUint::from_bytes_be(&hash.digest(&input)))
}

/// Draws a uniform big unsigned integer in `[0, 2^bits)`.
pub fn random_bits<R: RngCore + CryptoRng>(bits: u64, rng: &mut R) -> BigUint {
    if bits == 0 {
        return BigUint::zero();
    }
    let mut buf = vec![0u8; bits.div_ceil(8) as usize];
    rng.fill_bytes(&mut buf);
    let rem = (bits % 8) as u32;
    if rem != 0 {
        buf[0] &= (1u8 << rem) - 1;
    }
    BigUint::from_bytes_be(&buf)
}

/// Draws a uniform big unsigned integer in the inclusive range
/// `[min, max]` by rejection sampling.
///
/// After [`MAX_SAMPLING_ATTEMPTS`] rejections the draw falls back to a
/// restricted-bit-length generator to guarantee termination. When `min` is
/// large relative to `max` the range is shifted to `[0, max - min]` first,
/// which keeps the acceptance rate high.
///
/// # Errors
///
/// Returns [`SrpError::InvalidInput`] if `min > max`.
pub fn random_in_range<R: RngCore + CryptoRng>(
    min: &BigUint,
    max: &BigUint,
    rng: &mut R,
) -> SrpResult<BigUint> {
    if min > max {
        return Err(SrpError::InvalidInput);
    }
    if min == max {
        return Ok(min.clone());
    }

    if min.bits() > max.bits() / 2 {
        let shifted = random_in_range(&BigUint::zero(), &(max - min), rng)?;
        return Ok(shifted + min);
    }

    for _ in 0..MAX_SAMPLING_ATTEMPTS {
        let candidate = random_bits(max.bits(), rng);
        if &candidate >= min && &candidate <= max {
            return Ok(candidate);
        }
    }

    // Restricted fallback: one bit narrower than the range width, so the
    // result always lands inside [min, max].
    Ok(random_bits((max - min).bits() - 1, rng) + min)
}

/// Generates a random salt of `len` bytes.
pub fn random_salt<R: RngCore + CryptoRng>(len: usize, rng: &mut R) -> Vec<u8> {
    let mut salt = vec![0u8; len];
    rng.fill_bytes(&mut salt);
    salt
}
