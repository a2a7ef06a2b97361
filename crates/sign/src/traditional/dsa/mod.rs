//! DSA signatures in the SSH `ssh-dss` wire format
//!
//! SSH carries a DSA signature as 40 bytes, r and s each as a 20-byte
//! unsigned big-endian field. Signature engines produce and consume ASN.1
//! DER instead. [`DsaSignatureCodec`] transcodes between the two around a
//! caller supplied engine.
//!
//! # Verification order
//!
//! A blob of exactly 40 bytes is always taken as a raw signature. Only
//! blobs of any other length are sniffed for an algorithm-name envelope,
//! and the envelope payload must then itself be exactly 40 bytes.

#[cfg(feature = "dsa")]
pub mod backend;
mod common;

pub use common::{Component, RawSignature};

use crate::envelope;
use alloc::vec::Vec;
use dsswire_api::{Error, Result, SigningEngine, VerifyingEngine};
use dsswire_internal::hex::HexDisplay;
use dsswire_params::traditional::dsa::{DSA_SIGNATURE_LENGTH, SSH_DSS};
use tracing::{debug, trace};

/// Transcoder between `ssh-dss` wire signatures and DER engines
///
/// The codec holds no key material and no state besides the key type it
/// accepts in envelopes, so one value can be shared freely across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DsaSignatureCodec {
    key_type: &'static str,
}

impl Default for DsaSignatureCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl DsaSignatureCodec {
    /// Codec accepting envelopes labelled `ssh-dss`
    pub const fn new() -> Self {
        Self { key_type: SSH_DSS }
    }

    /// Codec accepting envelopes labelled `key_type` instead
    pub const fn with_key_type(key_type: &'static str) -> Self {
        Self { key_type }
    }

    /// Key type accepted in envelopes
    pub fn key_type(&self) -> &'static str {
        self.key_type
    }

    /// Run `engine` and convert its DER output to the wire format
    pub fn sign<E: SigningEngine>(&self, engine: E) -> Result<RawSignature> {
        let der = engine.sign_der()?;
        let sig = RawSignature::from_der(&der).map_err(|e| {
            debug!(error = %e, der = %HexDisplay::new(&der, Some(':')), "engine produced unusable DER");
            e
        })?;
        let wire = sig.to_bytes();
        trace!(signature = %HexDisplay::new(&wire, None), "signed");
        Ok(sig)
    }

    /// Like [`sign`](Self::sign), wrapped in an envelope naming the key type
    pub fn sign_enveloped<E: SigningEngine>(&self, engine: E) -> Result<Vec<u8>> {
        let sig = self.sign(engine)?;
        envelope::encode_envelope(self.key_type, &sig.to_bytes())
    }

    /// Resolve a received blob to a raw signature without touching an engine
    ///
    /// Fails with [`Error::KeyTypeMismatch`] when an envelope names another
    /// algorithm and with [`Error::LengthMismatch`] when no 40-byte candidate
    /// can be found.
    pub fn decode(&self, signature: &[u8]) -> Result<RawSignature> {
        if signature.len() == DSA_SIGNATURE_LENGTH {
            return RawSignature::from_slice(signature);
        }

        let candidate = match envelope::extract(signature) {
            Some(encoded) => {
                if encoded.key_type != self.key_type {
                    debug!(
                        expected = self.key_type,
                        actual = %encoded.key_type,
                        "rejecting enveloped signature"
                    );
                    return Err(Error::KeyTypeMismatch {
                        expected: self.key_type,
                        actual: encoded.key_type_owned(),
                    });
                }
                encoded.data
            }
            None => signature,
        };

        if candidate.len() != DSA_SIGNATURE_LENGTH {
            debug!(
                expected = DSA_SIGNATURE_LENGTH,
                actual = candidate.len(),
                signature = %HexDisplay::new(candidate, Some(':')),
                "bad signature length"
            );
            return Err(Error::LengthMismatch {
                context: "ssh-dss signature",
                expected: DSA_SIGNATURE_LENGTH,
                actual: candidate.len(),
            });
        }

        RawSignature::from_slice(candidate)
    }

    /// Convert a received blob to DER and let `engine` decide
    ///
    /// The engine's answer is returned unchanged. It is not called at all
    /// when the blob is rejected by [`decode`](Self::decode).
    pub fn verify<E: VerifyingEngine>(&self, engine: E, signature: &[u8]) -> Result<bool> {
        let sig = self.decode(signature)?;
        let der = sig.to_der();
        let verdict = engine.verify_der(&der)?;
        trace!(verdict = verdict, der = %HexDisplay::new(&der, None), "verified");
        Ok(verdict)
    }
}
