//! Signature engine traits
//!
//! The DSA mathematics and the digest are not part of this library. They are
//! supplied by the caller as an *engine*: an opaque capability that has
//! already been initialized with key material and fed the message, and that
//! speaks ASN.1 DER `SEQUENCE { r INTEGER, s INTEGER }`.
//!
//! # Lifetime
//!
//! An engine is bound to one key and one digest and is not reentrant. Both
//! traits therefore take `self` by value: an engine is acquired, used for
//! exactly one sign or verify call, and released. Pooling or reusing an
//! engine across calls is not expressible through these traits.

use crate::error::EngineResult;
use alloc::vec::Vec;

/// An engine able to produce a DER encoded (r, s) signature
pub trait SigningEngine {
    /// Produce the signature over everything fed to the engine so far
    ///
    /// The returned bytes must be a DER `SEQUENCE` of two `INTEGER`s.
    fn sign_der(self) -> EngineResult<Vec<u8>>;
}

/// An engine able to check a DER encoded (r, s) signature
pub trait VerifyingEngine {
    /// Check `der` against everything fed to the engine so far
    ///
    /// Returns `Ok(false)` for a well-formed signature that does not verify.
    fn verify_der(self, der: &[u8]) -> EngineResult<bool>;
}

/// Adapter turning a closure into a [`SigningEngine`]
///
/// Created by [`sign_fn`].
#[derive(Debug, Clone, Copy)]
pub struct SignFn<F>(F);

/// Wrap a closure returning DER bytes as a [`SigningEngine`]
pub fn sign_fn<F>(f: F) -> SignFn<F>
where
    F: FnOnce() -> EngineResult<Vec<u8>>,
{
    SignFn(f)
}

impl<F> SigningEngine for SignFn<F>
where
    F: FnOnce() -> EngineResult<Vec<u8>>,
{
    fn sign_der(self) -> EngineResult<Vec<u8>> {
        (self.0)()
    }
}

/// Adapter turning a closure into a [`VerifyingEngine`]
///
/// Created by [`verify_fn`].
#[derive(Debug, Clone, Copy)]
pub struct VerifyFn<F>(F);

/// Wrap a closure deciding on DER bytes as a [`VerifyingEngine`]
pub fn verify_fn<F>(f: F) -> VerifyFn<F>
where
    F: FnOnce(&[u8]) -> EngineResult<bool>,
{
    VerifyFn(f)
}

impl<F> VerifyingEngine for VerifyFn<F>
where
    F: FnOnce(&[u8]) -> EngineResult<bool>,
{
    fn verify_der(self, der: &[u8]) -> EngineResult<bool> {
        (self.0)(der)
    }
}
