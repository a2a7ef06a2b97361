//! Public API traits and types for the dsswire codec
//!
//! This crate provides the public API surface shared by the dsswire crates:
//! the closed error enumeration and the engine traits through which the
//! external DSA primitive is consumed.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, ErrorKind, Result, ResultExt};

pub use traits::{sign_fn, verify_fn, SigningEngine, VerifyingEngine};
