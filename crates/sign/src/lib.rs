//! ssh-dss signature transcoding
//!
//! This crate converts DSA signatures between the fixed-width SSH wire
//! format and the ASN.1 DER structure produced and consumed by signature
//! engines, and recognises the algorithm-name envelope some peers wrap
//! signatures in.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod der;
pub mod envelope;
pub mod traditional;

// Re-exports from traditional schemes
pub use envelope::{encode_envelope, extract, EncodedSignature};
pub use traditional::dsa::{Component, DsaSignatureCodec, RawSignature};

#[cfg(feature = "dsa")]
pub use traditional::dsa::backend::{DsaSha1Signer, DsaSha1Verifier};
