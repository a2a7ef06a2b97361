//! Traditional signature schemes

pub mod dsa;

pub use self::dsa::{DsaSignatureCodec, RawSignature};
