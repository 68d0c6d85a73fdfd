// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Ecliptix Security — SRP-6a
// Licensed under the MIT License

//! Core library for the Ecliptix SRP-6a protocol engine.
//!
//! Implements the Secure Remote Password protocol, revision 6a: a
//! zero-knowledge password-authenticated key exchange in which a client
//! proves knowledge of a password without transmitting it, and both parties
//! derive an identical shared secret usable as a session key.
//!
//! This crate contains only the protocol engine. It operates on
//! already-decoded big integers and byte strings; wire encoding, transport,
//! and verifier persistence belong to the calling application. The client
//! and server session state machines live in the companion `srp-client` and
//! `srp-server` crates.
//!
//! # Crate layout
//!
//! * [`types`] -- error type, result alias, and secure byte containers.
//! * [`bigint`] -- unsigned big-integer encoding, padding, the hashed
//!   padded pair primitive, and random generation.
//! * [`params`] -- the (N, g, H) crypto parameter triple and the registry
//!   of precomputed safe primes.
//! * [`routines`] -- pluggable strategy contracts for the hash H, the
//!   password key x, the scrambling parameter u, and the evidence messages
//!   M1/M2, with default and alternate implementations.
//! * [`protocol`] -- the pure SRP-6a computations over parameters and
//!   routines.
//! * [`verifier`] -- verifier generation for provisioning.

/// Unsigned big-integer encoding, padding, and random generation.
pub mod bigint;
/// Crypto parameters (N, g, H) and the precomputed prime registry.
pub mod params;
/// Pure SRP-6a protocol computations.
pub mod protocol;
/// Pluggable routine contracts and their default implementations.
pub mod routines;
/// Error type, result alias, and secure byte containers.
pub mod types;
/// Password verifier generation for provisioning.
pub mod verifier;
