//! Deterministic lowercase hex formatting
//!
//! The separator is placed between bytes only, never before the first or
//! after the last one. `None` means no separator at all.

use alloc::string::String;
use core::fmt;

/// Hex digits used for every nibble
pub const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Separator value meaning "no separator"
pub const EMPTY_HEX_SEPARATOR: Option<char> = None;

/// Append the hex form of `bytes` to any formatting sink
pub fn append_hex<W: fmt::Write>(out: &mut W, bytes: &[u8], separator: Option<char>) -> fmt::Result {
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 {
            if let Some(sep) = separator {
                out.write_char(sep)?;
            }
        }
        out.write_char(HEX_DIGITS[usize::from(b >> 4)] as char)?;
        out.write_char(HEX_DIGITS[usize::from(b & 0x0F)] as char)?;
    }
    Ok(())
}

/// Hex form of `bytes` as an owned string
pub fn to_hex(bytes: &[u8], separator: Option<char>) -> String {
    let width = if separator.is_some() { 3 } else { 2 };
    let mut out = String::with_capacity(bytes.len() * width);
    // Writing into a String cannot fail
    let _ = append_hex(&mut out, bytes, separator);
    out
}

/// Lazily formatted hex, for log fields that may never be rendered
#[derive(Clone, Copy)]
pub struct HexDisplay<'a> {
    bytes: &'a [u8],
    separator: Option<char>,
}

impl<'a> HexDisplay<'a> {
    pub fn new(bytes: &'a [u8], separator: Option<char>) -> Self {
        Self { bytes, separator }
    }
}

impl fmt::Display for HexDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        append_hex(f, self.bytes, self.separator)
    }
}

impl fmt::Debug for HexDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
