//! Minimal ASN.1 DER support for DSA signatures
//!
//! Only what a `SEQUENCE { r INTEGER, s INTEGER }` needs: definite lengths in
//! short and long form, non-negative INTEGERs with their guard byte, and a
//! SEQUENCE wrapper.

pub mod reader;
pub mod writer;

pub use reader::{parse_sequence_of_two_integers, DerReader};
pub use writer::{encode_integer, encode_sequence, needs_guard, DerWriter};
