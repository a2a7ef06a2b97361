//! # dsswire
//!
//! Transcoding of DSA signatures between the SSH `ssh-dss` wire format and
//! ASN.1 DER.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! dsswire = "0.4"
//! ```
//!
//! ```
//! use dsswire::prelude::*;
//!
//! let codec = DsaSignatureCodec::new();
//! let wire = [0x11u8; 40];
//!
//! // the engine receives `SEQUENCE { r INTEGER, s INTEGER }`
//! let ok = codec
//!     .verify(verify_fn(|der: &[u8]| Ok(der[0] == 0x30)), &wire)
//!     .unwrap();
//! assert!(ok);
//! ```
//!
//! ## Features
//!
//! - `std` (default): Standard library support
//! - `dsa`: DSA/SHA-1 engines backed by the RustCrypto `dsa` crate
//! - `full`: All features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`dsswire-api`]: Error type and engine traits
//! - [`dsswire-internal`]: Big-endian, hex and comparison helpers
//! - [`dsswire-params`]: Wire constants
//! - [`dsswire-sign`]: DER codec, envelopes and the `ssh-dss` codec

#![cfg_attr(not(feature = "std"), no_std)]

// Core re-exports (always available)
pub use dsswire_api as api;
pub use dsswire_internal as internal;
pub use dsswire_params as params;
pub use dsswire_sign as sign;

/// Common imports for dsswire users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, ErrorKind, Result, ResultExt};

    // Re-export engine traits and adapters
    pub use crate::api::{sign_fn, verify_fn, SigningEngine, VerifyingEngine};

    // Re-export the codec
    pub use crate::sign::{DsaSignatureCodec, EncodedSignature, RawSignature};

    #[cfg(feature = "dsa")]
    pub use crate::sign::{DsaSha1Signer, DsaSha1Verifier};
}
