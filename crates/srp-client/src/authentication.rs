// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Ecliptix Security — SRP-6a Client
// Licensed under the MIT License

use std::time::Instant;

use num_bigint::BigUint;
use rand_core::OsRng;

use srp_core::bigint::to_unsigned_bytes;
use srp_core::params::SrpParameters;
use srp_core::protocol;
use srp_core::types::{constant_time_eq, SecureBytes, SrpError, SrpResult};

use crate::state::{ClientCredentials, ClientPhase, ClientSession};

/// Records the user identity 'I' and password 'P'.
///
/// Valid only in the [`Init`](ClientPhase::Init) state; advances the
/// session to [`Step1`](ClientPhase::Step1).
///
/// # Errors
///
/// Returns [`SrpError::IllegalState`] if invoked out of sequence, or
/// [`SrpError::InvalidInput`] if the identity or password is empty. The
/// session is not mutated on failure.
pub fn step1(session: &mut ClientSession, identity: &str, password: &str) -> SrpResult<()> {
    if session.phase != ClientPhase::Init {
        return Err(SrpError::IllegalState);
    }
    if identity.is_empty() || password.is_empty() {
        return Err(SrpError::InvalidInput);
    }

    session.user_id = Some(identity.to_owned());
    session.password = Some(SecureBytes::from_slice(password.as_bytes()));
    session.phase = ClientPhase::Step1;
    session.last_activity = Instant::now();
    Ok(())
}

/// Answers the server challenge `(s, B)`.
///
/// Computes the password key x, generates the ephemeral pair (a, A),
/// derives u, k, and the shared secret S, and produces the client
/// evidence message M1. Valid only in the [`Step1`](ClientPhase::Step1)
/// state; advances the session to [`Step2`](ClientPhase::Step2) and
/// returns the credentials `(A, M1)` for transmission.
///
/// # Errors
///
/// Returns [`SrpError::IllegalState`] if invoked out of sequence,
/// [`SrpError::Timeout`] if the session has expired, or
/// [`SrpError::BadCredentials`] if `B mod N == 0`. The session is not
/// mutated on failure.
pub fn step2(
    session: &mut ClientSession,
    params: &SrpParameters,
    salt: &[u8],
    b_pub: &BigUint,
) -> SrpResult<ClientCredentials> {
    if session.phase != ClientPhase::Step1 {
        return Err(SrpError::IllegalState);
    }
    if session.has_timed_out() {
        return Err(SrpError::Timeout);
    }
    if !protocol::is_valid_public_value(params.n(), b_pub) {
        return Err(SrpError::BadCredentials);
    }

    // Step1 always records both; unreachable outside that state.
    let (user_id, password) = match (&session.user_id, &session.password) {
        (Some(user_id), Some(password)) => (user_id.clone(), password.clone()),
        _ => return Err(SrpError::IllegalState),
    };

    let x = session.routines.password_key.compute_x(
        params.hash(),
        salt,
        user_id.as_bytes(),
        password.data(),
    );
    let k = protocol::compute_k(params)?;
    let a_priv = protocol::generate_private_value(params.n(), &mut OsRng)?;
    let a_pub = protocol::compute_public_client_value(params.n(), params.g(), &a_priv);
    let u = session.routines.scrambling.compute_u(params, &a_pub, b_pub)?;
    let secret =
        protocol::compute_session_key_client(params.n(), params.g(), &k, &x, &u, &a_priv, b_pub);
    let m1 = session
        .routines
        .client_evidence
        .compute_m1(params, &a_pub, b_pub, &secret);

    session.params = Some(params.clone());
    session.salt = Some(salt.to_vec());
    session.b_pub = Some(b_pub.clone());
    session.a_pub = Some(a_pub.clone());
    session.secret = Some(secret);
    session.m1 = Some(m1.clone());
    session.phase = ClientPhase::Step2;
    session.last_activity = Instant::now();

    Ok(ClientCredentials { a_pub, m1 })
}

/// Verifies the server evidence message M2.
///
/// This is the only point at which the client detects an authentication
/// failure: a mismatch means the server is not authentic or the password
/// was wrong. Valid only in the [`Step2`](ClientPhase::Step2) state;
/// advances the session to the terminal [`Step3`](ClientPhase::Step3)
/// state on success.
///
/// # Errors
///
/// Returns [`SrpError::IllegalState`] if invoked out of sequence,
/// [`SrpError::Timeout`] if the session has expired, or
/// [`SrpError::BadCredentials`] on evidence mismatch. The session is not
/// mutated on failure.
pub fn step3(session: &mut ClientSession, m2: &BigUint) -> SrpResult<()> {
    if session.phase != ClientPhase::Step2 {
        return Err(SrpError::IllegalState);
    }
    if session.has_timed_out() {
        return Err(SrpError::Timeout);
    }

    // Step2 always populates these; unreachable outside that state.
    let (params, a_pub, m1, secret) = match (
        &session.params,
        &session.a_pub,
        &session.m1,
        &session.secret,
    ) {
        (Some(params), Some(a_pub), Some(m1), Some(secret)) => (params, a_pub, m1, secret),
        _ => return Err(SrpError::IllegalState),
    };

    let expected = session
        .routines
        .server_evidence
        .compute_m2(params, a_pub, m1, secret);

    if !constant_time_eq(&to_unsigned_bytes(&expected), &to_unsigned_bytes(m2)) {
        return Err(SrpError::BadCredentials);
    }

    session.m2 = Some(m2.clone());
    session.phase = ClientPhase::Step3;
    session.last_activity = Instant::now();
    Ok(())
}
