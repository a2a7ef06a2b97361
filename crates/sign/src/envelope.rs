//! Algorithm-name-prefixed signature envelopes
//!
//! Some peers send the signature blob as it appears inside an SSH message:
//!
//! ```text
//! uint32 key_type_len | key_type (UTF-8) | uint32 data_len | data
//! ```
//!
//! [`extract`] sniffs for that layout. It is a best-effort structural check,
//! not a validator: it may fail to recognise an envelope, but it never reads
//! past the end of the blob.

use alloc::borrow::Cow;
use alloc::string::String;
use alloc::vec::Vec;
use dsswire_api::{Error, Result};
use dsswire_internal::endian::{get_u32_be, put_u32_be_prefix};
use dsswire_params::utils::wire::{MIN_ENVELOPE_LENGTH, UINT32_SIZE};

/// Contents of a recognised envelope
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedSignature<'a> {
    /// Algorithm name; invalid UTF-8 is replaced, never rejected
    pub key_type: Cow<'a, str>,
    /// Payload, borrowed from the blob
    pub data: &'a [u8],
}

impl EncodedSignature<'_> {
    /// Copy of the key type, detached from the blob
    pub fn key_type_owned(&self) -> String {
        self.key_type.clone().into_owned()
    }
}

/// Try to read `blob` as an envelope
///
/// Returns `None` when the blob is shorter than two `uint32` fields or when
/// either length field would run past the end. Bytes after `data` are
/// ignored.
pub fn extract(blob: &[u8]) -> Option<EncodedSignature<'_>> {
    let total = blob.len();
    if total < MIN_ENVELOPE_LENGTH {
        return None;
    }

    let key_type_len = usize::try_from(get_u32_be(blob, 0, total).ok()?).ok()?;
    // after the key type there must still be room for the data length
    if key_type_len >= total - UINT32_SIZE {
        return None;
    }

    let key_type_end = UINT32_SIZE + key_type_len;
    let remain = total - key_type_end;
    if remain < UINT32_SIZE {
        return None;
    }

    let data_len = usize::try_from(get_u32_be(blob, key_type_end, remain).ok()?).ok()?;
    if data_len > remain - UINT32_SIZE {
        return None;
    }

    let data_start = key_type_end + UINT32_SIZE;
    Some(EncodedSignature {
        key_type: String::from_utf8_lossy(&blob[UINT32_SIZE..key_type_end]),
        data: &blob[data_start..data_start + data_len],
    })
}

fn length_prefix(len: usize, field: &'static str) -> Result<[u8; UINT32_SIZE]> {
    let len = u32::try_from(len)
        .map_err(|_| Error::malformed(field, "too long for a uint32 length prefix"))?;
    let mut prefix = [0u8; UINT32_SIZE];
    put_u32_be_prefix(len, &mut prefix)?;
    Ok(prefix)
}

/// Wrap `data` in an envelope naming `key_type`
pub fn encode_envelope(key_type: &str, data: &[u8]) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(MIN_ENVELOPE_LENGTH + key_type.len() + data.len());
    out.extend_from_slice(&length_prefix(key_type.len(), "envelope key type")?);
    out.extend_from_slice(key_type.as_bytes());
    out.extend_from_slice(&length_prefix(data.len(), "envelope data")?);
    out.extend_from_slice(data);
    Ok(out)
}
