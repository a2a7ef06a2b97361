//! DER writer for INTEGER and SEQUENCE structures

use alloc::vec::Vec;
use dsswire_params::utils::der::{
    INTEGER_GUARD_BYTE, INTEGER_SIGN_BIT, LONG_FORM_LENGTH, MAX_SHORT_FORM_LENGTH, TAG_INTEGER,
    TAG_SEQUENCE,
};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Scoped DER buffer builder
///
/// Bytes are appended incrementally and taken out exactly once with
/// [`DerWriter::finish`]. A writer dropped without finishing (an early
/// return, a `?`, a panic) wipes whatever it had buffered.
#[derive(Default, Zeroize, ZeroizeOnDrop)]
pub struct DerWriter {
    buf: Vec<u8>,
}

impl DerWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Writer with room for `capacity` bytes before reallocating
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    /// Number of bytes written so far
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn write_byte(&mut self, byte: u8) {
        self.buf.push(byte);
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Write a definite length
    ///
    /// Lengths up to 127 use the short form. Longer ones use the long form:
    /// `0x80 | k` followed by the `k` big-endian bytes of the length, with no
    /// leading zero bytes.
    pub fn write_length(&mut self, length: usize) {
        if length <= MAX_SHORT_FORM_LENGTH {
            self.buf.push(length as u8);
            return;
        }

        let bytes = length.to_be_bytes();
        let skip = bytes.iter().take_while(|&&b| b == 0).count();
        let significant = &bytes[skip..];
        self.buf.push(LONG_FORM_LENGTH | significant.len() as u8);
        self.buf.extend_from_slice(significant);
    }

    /// Write an INTEGER TLV holding the non-negative big-endian `value`
    ///
    /// A 0x00 guard byte is inserted when the first value byte has its high
    /// bit set. Leading zero bytes already present in `value` are kept.
    pub fn write_integer(&mut self, value: &[u8]) {
        let guard = needs_guard(value);
        self.buf.push(TAG_INTEGER);
        self.write_length(value.len() + usize::from(guard));
        if guard {
            self.buf.push(INTEGER_GUARD_BYTE);
        }
        self.buf.extend_from_slice(value);
    }

    /// Write a SEQUENCE whose payload is the concatenation of `tlvs`
    pub fn write_sequence(&mut self, tlvs: &[&[u8]]) {
        let length = tlvs.iter().map(|tlv| tlv.len()).sum();
        self.buf.push(TAG_SEQUENCE);
        self.write_length(length);
        for tlv in tlvs {
            self.buf.extend_from_slice(tlv);
        }
    }

    /// Take the encoded bytes out of the writer
    pub fn finish(mut self) -> Vec<u8> {
        core::mem::take(&mut self.buf)
    }
}

/// True when a non-negative INTEGER with this value needs a guard byte
pub fn needs_guard(value: &[u8]) -> bool {
    value.first().map_or(false, |&b| b & INTEGER_SIGN_BIT != 0)
}

/// Number of bytes `write_length(length)` emits
pub fn length_of_length(length: usize) -> usize {
    if length <= MAX_SHORT_FORM_LENGTH {
        1
    } else {
        let significant = core::mem::size_of::<usize>() - (length.leading_zeros() as usize / 8);
        1 + significant
    }
}

/// Encode a single INTEGER TLV
pub fn encode_integer(value: &[u8]) -> Vec<u8> {
    let content = value.len() + usize::from(needs_guard(value));
    let mut w = DerWriter::with_capacity(1 + length_of_length(content) + content);
    w.write_integer(value);
    w.finish()
}

/// Encode a SEQUENCE around already encoded TLVs
pub fn encode_sequence(tlvs: &[&[u8]]) -> Vec<u8> {
    let content: usize = tlvs.iter().map(|tlv| tlv.len()).sum();
    let mut w = DerWriter::with_capacity(1 + length_of_length(content) + content);
    w.write_sequence(tlvs);
    w.finish()
}
