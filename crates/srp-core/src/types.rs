// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Ecliptix Security — SRP-6a
// Licensed under the MIT License

use subtle::ConstantTimeEq;
use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Enumerates all error conditions that can arise during SRP-6a operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SrpError {
    /// The crypto parameters or a routine configuration are invalid.
    /// Raised at construction time; never recoverable by retry.
    #[error("invalid SRP-6a configuration")]
    InvalidConfig,
    /// An input parameter has an invalid value or length.
    #[error("invalid input parameter")]
    InvalidInput,
    /// A session step was invoked out of the required order.
    #[error("session step invoked out of sequence")]
    IllegalState,
    /// The session exceeded its configured inactivity timeout.
    #[error("session has timed out")]
    Timeout,
    /// Authentication failed: an evidence message did not match or a peer
    /// public value was degenerate. The two causes are deliberately not
    /// distinguished in the error surface.
    #[error("bad credentials")]
    BadCredentials,
}

/// Convenience alias for `Result<T, SrpError>`.
pub type SrpResult<T> = Result<T, SrpError>;

/// A heap-allocated byte buffer that is zeroized on drop.
///
/// Wraps a `Vec<u8>` and implements `Zeroize + ZeroizeOnDrop` so that
/// sensitive material such as the client-held password is scrubbed from
/// memory when no longer needed. The `Debug` implementation redacts the
/// contents.
#[derive(Clone, Default, Zeroize, ZeroizeOnDrop)]
pub struct SecureBytes(Vec<u8>);

impl SecureBytes {
    /// Creates a buffer by copying the given slice.
    pub fn from_slice(data: &[u8]) -> Self {
        Self(data.to_vec())
    }

    /// Returns an immutable reference to the underlying bytes.
    pub fn data(&self) -> &[u8] {
        &self.0
    }

    /// Returns the number of bytes in the buffer.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the buffer contains no bytes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<[u8]> for SecureBytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for SecureBytes {
    fn from(v: Vec<u8>) -> Self {
        Self(v)
    }
}

impl std::fmt::Debug for SecureBytes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecureBytes([REDACTED; {}])", self.0.len())
    }
}

/// Compares two byte slices in constant time.
///
/// Returns `true` if the slices are equal. Differing lengths compare
/// unequal (length itself is not secret).
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    a.ct_eq(b).into()
}
