// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Ecliptix Security — SRP-6a Client
// Licensed under the MIT License

//! Client-side SRP-6a authentication session.
//!
//! This crate implements the client role of the SRP-6a protocol as a
//! single-use state machine: record the credentials, answer the server
//! challenge with the public value A and evidence M1, then verify the
//! server evidence M2. A session that fails any step must be discarded
//! and a fresh one created; there is no retry-in-place.

/// Client authentication steps.
mod authentication;
/// Client session state and message containers.
mod state;

pub use authentication::{step1, step2, step3};
pub use state::{ClientCredentials, ClientPhase, ClientSession};
