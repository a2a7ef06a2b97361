//! DER reader for a SEQUENCE of exactly two INTEGERs
//!
//! This is not a general ASN.1 parser. It recognises the one shape DSA
//! engines exchange, `SEQUENCE { r INTEGER, s INTEGER }`, and returns the
//! raw INTEGER value bytes (guard byte included) without interpreting them.

use alloc::format;
use dsswire_api::{Error, Result, ResultExt};
use dsswire_params::utils::der::{LONG_FORM_LENGTH, TAG_INTEGER, TAG_SEQUENCE};

/// Cursor over a DER input
#[derive(Debug, Clone)]
pub struct DerReader<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> DerReader<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        Self { input, pos: 0 }
    }

    /// Bytes not consumed yet
    pub fn remaining(&self) -> usize {
        self.input.len() - self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    fn read_byte(&mut self) -> Result<u8> {
        let byte = *self
            .input
            .get(self.pos)
            .ok_or_else(|| Error::malformed("DER", "unexpected end of input"))?;
        self.pos += 1;
        Ok(byte)
    }

    fn read_slice(&mut self, length: usize) -> Result<&'a [u8]> {
        if length > self.remaining() {
            return Err(Error::malformed(
                "DER",
                format!(
                    "declared length {} exceeds remaining {} bytes",
                    length,
                    self.remaining()
                ),
            ));
        }
        let slice = &self.input[self.pos..self.pos + length];
        self.pos += length;
        Ok(slice)
    }

    /// Read a definite length in short or long form
    ///
    /// Non-minimal long forms are accepted. The indefinite form (`0x80`) and
    /// lengths that do not fit in `usize` are rejected.
    pub fn read_length(&mut self) -> Result<usize> {
        let first = self.read_byte()?;
        if first & LONG_FORM_LENGTH == 0 {
            return Ok(usize::from(first));
        }

        let count = usize::from(first & !LONG_FORM_LENGTH);
        if count == 0 {
            return Err(Error::malformed("DER", "indefinite length"));
        }
        if count > core::mem::size_of::<usize>() {
            return Err(Error::malformed(
                "DER",
                format!("length needs {} bytes", count),
            ));
        }

        let mut length = 0usize;
        for &b in self.read_slice(count)? {
            length = (length << 8) | usize::from(b);
        }
        Ok(length)
    }

    /// Read one TLV with the expected tag and return its value bytes
    pub fn read_tlv(&mut self, tag: u8) -> Result<&'a [u8]> {
        let actual = self.read_byte()?;
        if actual != tag {
            return Err(Error::malformed(
                "DER",
                format!("expected tag 0x{:02x}, found 0x{:02x}", tag, actual),
            ));
        }
        let length = self.read_length()?;
        self.read_slice(length)
    }

    /// Fail unless every byte has been consumed
    pub fn finish(&self) -> Result<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(Error::malformed(
                "DER",
                format!("{} trailing bytes", self.remaining()),
            ))
        }
    }
}

/// Parse `SEQUENCE { r INTEGER, s INTEGER }` into the value bytes of r and s
///
/// Fails with [`Error::MalformedEncoding`] on a wrong tag, on a declared
/// length running past the input, and on any byte left over, whether after
/// the SEQUENCE or inside it after `s`.
pub fn parse_sequence_of_two_integers(der: &[u8]) -> Result<(&[u8], &[u8])> {
    let mut outer = DerReader::new(der);
    let body = outer.read_tlv(TAG_SEQUENCE).with_context("DER SEQUENCE")?;
    outer.finish().with_context("DER SEQUENCE")?;

    let mut inner = DerReader::new(body);
    let r = inner.read_tlv(TAG_INTEGER).with_context("DER INTEGER r")?;
    let s = inner.read_tlv(TAG_INTEGER).with_context("DER INTEGER s")?;
    inner.finish().with_context("DER SEQUENCE body")?;

    Ok((r, s))
}
