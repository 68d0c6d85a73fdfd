// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Ecliptix Security — SRP-6a Client
// Licensed under the MIT License

use std::sync::Arc;
use std::time::{Duration, Instant};

use num_bigint::BigUint;
use srp_core::bigint::to_unsigned_bytes;
use srp_core::params::SrpParameters;
use srp_core::routines::{
    ClientEvidenceRoutine, PasswordKeyRoutine, Routines, ScramblingRoutine,
    ServerEvidenceRoutine,
};
use srp_core::types::SecureBytes;

/// The client session states, advanced monotonically by the step
/// functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientPhase {
    /// Session created; no credentials recorded yet.
    Init,
    /// Identity and password recorded.
    Step1,
    /// Ephemeral pair generated, secret derived, evidence M1 produced.
    Step2,
    /// Server evidence M2 verified; authentication complete.
    Step3,
}

/// The credentials the client transmits in response to the server
/// challenge: the public value A and the evidence message M1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientCredentials {
    /// The public client value `A = g^a mod N`.
    pub a_pub: BigUint,
    /// The client evidence message M1.
    pub m1: BigUint,
}

/// Client-side SRP-6a authentication session.
///
/// Holds the per-attempt mutable state and is driven by the
/// [`step1`](crate::step1), [`step2`](crate::step2), and
/// [`step3`](crate::step3) functions. Protocol variables are populated
/// incrementally as the state machine advances. The session is
/// single-threaded; independent sessions share nothing mutable.
pub struct ClientSession {
    pub(crate) phase: ClientPhase,
    timeout: Duration,
    created_at: Instant,
    pub(crate) last_activity: Instant,
    pub(crate) routines: Routines,
    pub(crate) user_id: Option<String>,
    pub(crate) password: Option<SecureBytes>,
    pub(crate) params: Option<SrpParameters>,
    pub(crate) salt: Option<Vec<u8>>,
    pub(crate) a_pub: Option<BigUint>,
    pub(crate) b_pub: Option<BigUint>,
    pub(crate) secret: Option<BigUint>,
    pub(crate) m1: Option<BigUint>,
    pub(crate) m2: Option<BigUint>,
}

impl ClientSession {
    /// Creates a new session with the given inactivity timeout in
    /// seconds. Zero disables the timeout.
    pub fn new(timeout_secs: u64) -> Self {
        let now = Instant::now();
        Self {
            phase: ClientPhase::Init,
            timeout: Duration::from_secs(timeout_secs),
            created_at: now,
            last_activity: now,
            routines: Routines::default(),
            user_id: None,
            password: None,
            params: None,
            salt: None,
            a_pub: None,
            b_pub: None,
            secret: None,
            m1: None,
            m2: None,
        }
    }

    /// The current session state.
    pub fn phase(&self) -> ClientPhase {
        self.phase
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

    /// The identity 'I' recorded in step 1.
    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    /// The crypto parameters supplied in step 2.
    pub fn params(&self) -> Option<&SrpParameters> {
        self.params.as_ref()
    }

    /// The salt 's' supplied in step 2.
    pub fn salt(&self) -> Option<&[u8]> {
        self.salt.as_deref()
    }

    /// The public client value A, available after step 2.
    pub fn public_client_value(&self) -> Option<&BigUint> {
        self.a_pub.as_ref()
    }

    /// The server public value B, available after step 2.
    pub fn public_server_value(&self) -> Option<&BigUint> {
        self.b_pub.as_ref()
    }

    /// The client evidence message M1, available after step 2.
    pub fn client_evidence(&self) -> Option<&BigUint> {
        self.m1.as_ref()
    }

    /// The verified server evidence message M2, available after step 3.
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
        let params = self.params.as_ref()?;
        let secret = self.secret.as_ref()?;
        Some(params.hash().digest(&to_unsigned_bytes(secret)))
    }

    /// Replaces the password key x routine. Must be set before step 2.
    pub fn set_password_key_routine(&mut self, routine: Arc<dyn PasswordKeyRoutine>) {
        self.routines.password_key = routine;
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

    /// Replaces the server evidence M2 routine. Must be set before step 3.
    pub fn set_server_evidence_routine(&mut self, routine: Arc<dyn ServerEvidenceRoutine>) {
        self.routines.server_evidence = routine;
    }
}

impl std::fmt::Debug for ClientSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientSession")
            .field("phase", &self.phase)
            .field("user_id", &self.user_id)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}
