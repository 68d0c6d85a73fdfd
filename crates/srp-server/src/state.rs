// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Ecliptix Security — SRP-6a Server
// Licensed under the MIT License

use std::sync::Arc;
use std::time::{Duration, Instant};

use num_bigint::BigUint;
use srp_core::bigint::to_unsigned_bytes;
use srp_core::params::SrpParameters;
use srp_core::routines::{
    ClientEvidenceRoutine, Routines, ScramblingRoutine, ServerEvidenceRoutine,
};

/// The server session states, advanced monotonically by the step
/// functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerPhase {
    /// Session created; no challenge issued yet.
    Init,
    /// Challenge B issued.
    Step1,
    /// Client evidence verified, own evidence produced; terminal.
    Step2,
}

/// Server-side SRP-6a authentication session.
///
/// Holds the per-attempt mutable state, including the verifier looked up
/// from the credential store, and is driven by the
/// [`step1`](crate::step1) and [`step2`](crate::step2) functions. The
/// session is single-threaded; independent sessions share nothing mutable
/// beyond the read-only parameters.
pub struct ServerSession {
    pub(crate) params: SrpParameters,
    pub(crate) phase: ServerPhase,
    timeout: Duration,
    created_at: Instant,
    pub(crate) last_activity: Instant,
    pub(crate) routines: Routines,
    pub(crate) user_id: Option<String>,
    pub(crate) salt: Option<Vec<u8>>,
    pub(crate) verifier: Option<BigUint>,
    pub(crate) b_priv: Option<BigUint>,
    pub(crate) b_pub: Option<BigUint>,
    pub(crate) a_pub: Option<BigUint>,
    pub(crate) secret: Option<BigUint>,
    pub(crate) m1: Option<BigUint>,
    pub(crate) m2: Option<BigUint>,
}

impl ServerSession {
    /// Creates a new session over the given parameters with the given
    /// inactivity timeout in seconds. Zero disables the timeout.
    pub fn new(params: SrpParameters, timeout_secs: u64) -> Self {
        let now = Instant::now();
        Self {
            params,
            phase: ServerPhase::Init,
            timeout: Duration::from_secs(timeout_secs),
            created_at: now,
            last_activity: now,
            routines: Routines::default(),
            user_id: None,
            salt: None,
            verifier: None,
            b_priv: None,
            b_pub: None,
            a_pub: None,
            secret: None,
            m1: None,
            m2: None,
        }
    }

    /// The current session state.
    pub fn phase(&self) -> ServerPhase {
        self.phase
    }

    /// The crypto parameters for this session.
    pub fn params(&self) -> &SrpParameters {
        &self.params
    }

    /// The configured inactivity timeout. Zero means no timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// When the session was created.
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// When the session last completed a step.
    pub fn last_activity_at(&self) -> Instant {
        self.last_activity
    }

    /// Returns `true` if the inactivity timeout has elapsed. Checked
    /// lazily at each step; there is no background eviction.
    pub fn has_timed_out(&self) -> bool {
        !self.timeout.is_zero() && self.last_activity.elapsed() > self.timeout
    }

    /// The identity 'I' supplied in step 1.
    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    /// The salt 's' supplied in step 1.
    pub fn salt(&self) -> Option<&[u8]> {
        self.salt.as_deref()
    }

    /// The public server value B, available after step 1.
    pub fn public_server_value(&self) -> Option<&BigUint> {
        self.b_pub.as_ref()
    }

    /// The public client value A, available after step 2.
    pub fn public_client_value(&self) -> Option<&BigUint> {
        self.a_pub.as_ref()
    }

    /// The verified client evidence message M1, available after step 2.
    pub fn client_evidence(&self) -> Option<&BigUint> {
        self.m1.as_ref()
    }

    /// The server evidence message M2, available after step 2.
    pub fn server_evidence(&self) -> Option<&BigUint> {
        self.m2.as_ref()
    }

    /// The raw shared secret S, available after step 2.
    pub fn session_key_raw(&self) -> Option<&BigUint> {
        self.secret.as_ref()
    }

    /// The hash H(S) of the shared secret, suitable as a symmetric key.
    /// Available after step 2.
    pub fn session_key_hash(&self) -> Option<Vec<u8>> {
        let secret = self.secret.as_ref()?;
        Some(self.params.hash().digest(&to_unsigned_bytes(secret)))
    }

    /// Replaces the scrambling parameter u routine. Must be set before
    /// step 2.
    pub fn set_scrambling_routine(&mut self, routine: Arc<dyn ScramblingRoutine>) {
        self.routines.scrambling = routine;
    }

    /// Replaces the client evidence M1 routine. Must be set before step 2.
    pub fn set_client_evidence_routine(&mut self, routine: Arc<dyn ClientEvidenceRoutine>) {
        self.routines.client_evidence = routine;
    }

    /// Replaces the server evidence M2 routine. Must be set before step 2.
    pub fn set_server_evidence_routine(&mut self, routine: Arc<dyn ServerEvidenceRoutine>) {
        self.routines.server_evidence = routine;
    }
}

impl std::fmt::Debug for ServerSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerSession")
            .field("phase", &self.phase)
            .field("user_id", &self.user_id)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}
