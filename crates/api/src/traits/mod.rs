//! Traits for the collaborators of the codec

pub mod engine;

pub use engine::{sign_fn, verify_fn, SignFn, SigningEngine, VerifyFn, VerifyingEngine};
