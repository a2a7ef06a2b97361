//! The fixed-width `ssh-dss` wire signature and its DER form

use crate::der::{self, DerWriter};
use alloc::format;
use alloc::vec::Vec;
use core::fmt;
use dsswire_api::{Error, Result};
use dsswire_internal::hex::append_hex;
use dsswire_params::traditional::dsa::{DSA_SIGNATURE_LENGTH, MAX_SIGNATURE_VALUE_LENGTH};

/// One of r or s, unsigned big-endian, left-padded with zeros
pub type Component = [u8; MAX_SIGNATURE_VALUE_LENGTH];

/// `ssh-dss` wire signature: `r (20 bytes) || s (20 bytes)`
///
/// No other length is representable.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct RawSignature {
    r: Component,
    s: Component,
}

impl RawSignature {
    /// Wire length in bytes
    pub const LENGTH: usize = DSA_SIGNATURE_LENGTH;

    pub fn from_components(r: Component, s: Component) -> Self {
        Self { r, s }
    }

    pub fn from_bytes(bytes: &[u8; DSA_SIGNATURE_LENGTH]) -> Self {
        let mut r = [0u8; MAX_SIGNATURE_VALUE_LENGTH];
        let mut s = [0u8; MAX_SIGNATURE_VALUE_LENGTH];
        r.copy_from_slice(&bytes[..MAX_SIGNATURE_VALUE_LENGTH]);
        s.copy_from_slice(&bytes[MAX_SIGNATURE_VALUE_LENGTH..]);
        Self { r, s }
    }

    /// Fails with [`Error::LengthMismatch`] unless `bytes` is exactly 40 bytes
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let bytes: &[u8; DSA_SIGNATURE_LENGTH] =
            bytes.try_into().map_err(|_| Error::LengthMismatch {
                context: "RawSignature::from_slice",
                expected: DSA_SIGNATURE_LENGTH,
                actual: bytes.len(),
            })?;
        Ok(Self::from_bytes(bytes))
    }

    pub fn r(&self) -> &Component {
        &self.r
    }

    pub fn s(&self) -> &Component {
        &self.s
    }

    pub fn to_bytes(&self) -> [u8; DSA_SIGNATURE_LENGTH] {
        let mut out = [0u8; DSA_SIGNATURE_LENGTH];
        out[..MAX_SIGNATURE_VALUE_LENGTH].copy_from_slice(&self.r);
        out[MAX_SIGNATURE_VALUE_LENGTH..].copy_from_slice(&self.s);
        out
    }

    /// Parse a DER `SEQUENCE { r INTEGER, s INTEGER }`
    ///
    /// Each INTEGER value is fitted into 20 bytes: a longer value loses its
    /// first byte (normally the 0x00 guard); a shorter one is left-padded with
    /// zeros.
    pub fn from_der(der: &[u8]) -> Result<Self> {
        let (r, s) = der::parse_sequence_of_two_integers(der)?;
        Ok(Self {
            r: normalize_component(r, "DSA r")?,
            s: normalize_component(s, "DSA s")?,
        })
    }

    /// Encode as a DER `SEQUENCE { r INTEGER, s INTEGER }`
    ///
    /// Each 20-byte field is encoded as is, leading zero bytes included, with
    /// a guard byte when its high bit is set.
    pub fn to_der(&self) -> Vec<u8> {
        let r = der::encode_integer(&self.r);
        let s = der::encode_integer(&self.s);
        // 0x30, a short-form length and both TLVs always fit in this
        let mut w = DerWriter::with_capacity(2 + r.len() + s.len());
        w.write_sequence(&[&r, &s]);
        w.finish()
    }
}

/// Fit a DER INTEGER value into exactly 20 bytes
///
/// A value longer than 20 bytes loses its first byte; whatever is left must
/// then fit.
pub(crate) fn normalize_component(value: &[u8], context: &'static str) -> Result<Component> {
    let digits = if value.len() > MAX_SIGNATURE_VALUE_LENGTH {
        &value[1..]
    } else {
        value
    };

    if digits.len() > MAX_SIGNATURE_VALUE_LENGTH {
        return Err(Error::malformed(
            context,
            format!(
                "INTEGER of {} bytes does not fit in {} bytes",
                value.len(),
                MAX_SIGNATURE_VALUE_LENGTH
            ),
        ));
    }

    let mut out = [0u8; MAX_SIGNATURE_VALUE_LENGTH];
    out[MAX_SIGNATURE_VALUE_LENGTH - digits.len()..].copy_from_slice(digits);
    Ok(out)
}

impl From<[u8; DSA_SIGNATURE_LENGTH]> for RawSignature {
    fn from(bytes: [u8; DSA_SIGNATURE_LENGTH]) -> Self {
        Self::from_bytes(&bytes)
    }
}

impl From<RawSignature> for [u8; DSA_SIGNATURE_LENGTH] {
    fn from(sig: RawSignature) -> Self {
        sig.to_bytes()
    }
}

impl TryFrom<&[u8]> for RawSignature {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::from_slice(bytes)
    }
}

impl fmt::Debug for RawSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RawSignature { r: ")?;
        append_hex(f, &self.r, None)?;
        f.write_str(", s: ")?;
        append_hex(f, &self.s, None)?;
        f.write_str(" }")
    }
}

impl fmt::LowerHex for RawSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        append_hex(f, &self.to_bytes(), None)
    }
}
