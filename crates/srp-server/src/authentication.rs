// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Ecliptix Security — SRP-6a Server
// Licensed under the MIT License

use std::time::Instant;

use num_bigint::BigUint;
use rand_core::OsRng;

use srp_core::bigint::to_unsigned_bytes;
use srp_core::protocol;
use srp_core::types::{constant_time_eq, SrpError, SrpResult};

use crate::state::{ServerPhase, ServerSession};

/// Issues the challenge for the identity 'I' from its stored salt and
/// verifier.
///
/// Generates the ephemeral pair (b, B) with `B = (g^b + k·v) mod N`.
/// Valid only in the [`Init`](ServerPhase::Init) state; advances the
/// session to [`Step1`](ServerPhase::Step1) and returns B for
/// transmission alongside the salt.
///
/// # Errors
///
/// Returns [`SrpError::IllegalState`] if invoked out of sequence, or
/// [`SrpError::InvalidInput`] if the identity is empty. The session is
/// not mutated on failure.
pub fn step1(
    session: &mut ServerSession,
    identity: &str,
    salt: &[u8],
    verifier: &BigUint,
) -> SrpResult<BigUint> {
    if session.phase != ServerPhase::Init {
        return Err(SrpError::IllegalState);
    }
    if identity.is_empty() {
        return Err(SrpError::InvalidInput);
    }

    let k = protocol::compute_k(&session.params)?;
    let b_priv = protocol::generate_private_value(session.params.n(), &mut OsRng)?;
    let b_pub = protocol::compute_public_server_value(
        session.params.n(),
        session.params.g(),
        &k,
        verifier,
        &b_priv,
    );

    session.user_id = Some(identity.to_owned());
    session.salt = Some(salt.to_vec());
    session.verifier = Some(verifier.clone());
    session.b_priv = Some(b_priv);
    session.b_pub = Some(b_pub.clone());
    session.phase = ServerPhase::Step1;
    session.last_activity = Instant::now();

    Ok(b_pub)
}

/// Verifies the client credentials `(A, M1)` and produces the server
/// evidence M2.
///
/// This is the server's sole authentication decision point: M2 is
/// computed only after the supplied M1 matched. Valid only in the
/// [`Step1`](ServerPhase::Step1) state; advances the session to the
/// terminal [`Step2`](ServerPhase::Step2) state and returns M2 for
/// transmission.
///
/// # Errors
///
/// Returns [`SrpError::IllegalState`] if invoked out of sequence,
/// [`SrpError::Timeout`] if the session has expired, or
/// [`SrpError::BadCredentials`] if `A mod N == 0` or the evidence did not
/// match. The session is not mutated on failure.
pub fn step2(session: &mut ServerSession, a_pub: &BigUint, m1: &BigUint) -> SrpResult<BigUint> {
    if session.phase != ServerPhase::Step1 {
        return Err(SrpError::IllegalState);
    }
    if session.has_timed_out() {
        return Err(SrpError::Timeout);
    }
    if !protocol::is_valid_public_value(session.params.n(), a_pub) {
        return Err(SrpError::BadCredentials);
    }

    // Step1 always populates these; unreachable outside that state.
    let (verifier, b_priv, b_pub) = match (&session.verifier, &session.b_priv, &session.b_pub) {
        (Some(verifier), Some(b_priv), Some(b_pub)) => (verifier, b_priv, b_pub),
        _ => return Err(SrpError::IllegalState),
    };

    let u = session
        .routines
        .scrambling
        .compute_u(&session.params, a_pub, b_pub)?;
    let secret =
        protocol::compute_session_key_server(session.params.n(), verifier, &u, a_pub, b_priv);

    let expected_m1 = session
        .routines
        .client_evidence
        .compute_m1(&session.params, a_pub, b_pub, &secret);

    if !constant_time_eq(&to_unsigned_bytes(&expected_m1), &to_unsigned_bytes(m1)) {
        return Err(SrpError::BadCredentials);
    }

    let m2 = session
        .routines
        .server_evidence
        .compute_m2(&session.params, a_pub, &expected_m1, &secret);

    session.a_pub = Some(a_pub.clone());
    session.secret = Some(secret);
    session.m1 = Some(expected_m1);
    session.m2 = Some(m2.clone());
    session.phase = ServerPhase::Step2;
    session.last_activity = Instant::now();

    Ok(m2)
}
