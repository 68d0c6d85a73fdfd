// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Ecliptix Security — SRP-6a Server
// Licensed under the MIT License

//! Server-side SRP-6a authentication session.
//!
//! This crate implements the server role of the SRP-6a protocol as a
//! single-use state machine: issue the challenge B from a stored verifier,
//! then verify the client evidence M1 and answer with the server evidence
//! M2. The server's sole authentication decision happens at the M1 check;
//! M2 is never revealed to a client that failed it. A session that fails
//! any step must be discarded and a fresh one created.

/// Server authentication steps.
mod authentication;
/// Server session state.
mod state;

pub use authentication::{step1, step2};
pub use state::{ServerPhase, ServerSession};
