//! DSA engines backed by the RustCrypto `dsa` crate
//!
//! `ssh-dss` signs the SHA-1 digest of the data. Both engines buffer the
//! data through [`update`](DsaSha1Signer::update) and are consumed by the
//! single sign or verify call they are used for.

use crate::der;
use alloc::vec::Vec;
use dsa::{BigUint, Components, SigningKey, VerifyingKey};
use dsswire_api::{Error, Result, SigningEngine, VerifyingEngine};
use dsswire_internal::endian::get_u32_be;
use dsswire_params::traditional::dsa::SSH_DSS;
use sha1::{Digest, Sha1};
use signature::{DigestSigner, DigestVerifier};
use tracing::debug;

/// Signing engine: DSA over SHA-1
pub struct DsaSha1Signer {
    key: SigningKey,
    digest: Sha1,
}

impl DsaSha1Signer {
    pub fn new(key: SigningKey) -> Self {
        Self {
            key,
            digest: Sha1::new(),
        }
    }

    /// Feed data to be signed
    pub fn update(&mut self, data: &[u8]) {
        self.digest.update(data);
    }
}

impl SigningEngine for DsaSha1Signer {
    fn sign_der(self) -> Result<Vec<u8>> {
        let sig: dsa::Signature = self
            .key
            .try_sign_digest(self.digest)
            .map_err(|e| Error::engine("DSA sign", alloc::format!("{}", e)))?;

        let r = der::encode_integer(&sig.r().to_bytes_be());
        let s = der::encode_integer(&sig.s().to_bytes_be());
        Ok(der::encode_sequence(&[&r, &s]))
    }
}

/// Verifying engine: DSA over SHA-1
pub struct DsaSha1Verifier {
    key: VerifyingKey,
    digest: Sha1,
}

impl DsaSha1Verifier {
    pub fn new(key: VerifyingKey) -> Self {
        Self {
            key,
            digest: Sha1::new(),
        }
    }

    /// Verifier for an `ssh-dss` public key blob
    pub fn from_ssh_blob(blob: &[u8]) -> Result<Self> {
        Ok(Self::new(verifying_key_from_ssh_blob(blob)?))
    }

    /// Feed data that was signed
    pub fn update(&mut self, data: &[u8]) {
        self.digest.update(data);
    }
}

impl VerifyingEngine for DsaSha1Verifier {
    /// DER is read leniently: INTEGERs with superfluous leading zeros, as
    /// produced from fixed-width wire fields, are accepted.
    fn verify_der(self, der_bytes: &[u8]) -> Result<bool> {
        let (r, s) = der::parse_sequence_of_two_integers(der_bytes)?;
        let sig = match dsa::Signature::from_components(
            BigUint::from_bytes_be(r),
            BigUint::from_bytes_be(s),
        ) {
            Ok(sig) => sig,
            Err(_) => {
                debug!("zero r or s");
                return Ok(false);
            }
        };

        Ok(self.key.verify_digest(self.digest, &sig).is_ok())
    }
}

/// Read one SSH `string` (or `mpint`) field, advancing `pos`
fn read_string<'a>(blob: &'a [u8], pos: &mut usize) -> Result<&'a [u8]> {
    let available = blob.len().saturating_sub(*pos);
    let len = get_u32_be(blob, *pos, available)? as usize;
    let start = *pos + 4;
    let field = start
        .checked_add(len)
        .and_then(|end| blob.get(start..end))
        .ok_or(Error::InsufficientBuffer {
            context: "ssh-dss public key",
            required: len,
            available: available - 4,
        })?;
    *pos = start + len;
    Ok(field)
}

fn key_error(e: signature::Error) -> Error {
    Error::engine("ssh-dss public key", alloc::format!("{}", e))
}

/// Parse `string "ssh-dss" | mpint p | mpint q | mpint g | mpint y`
pub fn verifying_key_from_ssh_blob(blob: &[u8]) -> Result<VerifyingKey> {
    let mut pos = 0;
    let key_type = read_string(blob, &mut pos)?;
    if key_type != SSH_DSS.as_bytes() {
        return Err(Error::KeyTypeMismatch {
            expected: SSH_DSS,
            actual: alloc::string::String::from_utf8_lossy(key_type).into_owned(),
        });
    }

    let mut next = || read_string(blob, &mut pos).map(BigUint::from_bytes_be);
    let p = next()?;
    let q = next()?;
    let g = next()?;
    let y = next()?;

    let components = Components::from_components(p, q, g).map_err(key_error)?;
    VerifyingKey::from_components(components, y).map_err(key_error)
}

/// Signing key for secret `x` over the domain parameters of `components`
///
/// The public value is derived as `y = g^x mod p`.
pub fn signing_key_from_secret(components: Components, x: BigUint) -> Result<SigningKey> {
    let y = components.g().modpow(&x, components.p());
    let verifying_key = VerifyingKey::from_components(components, y).map_err(key_error)?;
    SigningKey::from_components(verifying_key, x).map_err(key_error)
}
