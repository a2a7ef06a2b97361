//! Big-endian `uint32` access over byte ranges
//!
//! SSH encodes every length prefix as a network-order `uint32`. These helpers
//! read and write such values at an offset, given how many bytes the caller
//! considers available from that offset. They never index past the end of
//! the slice: a short buffer is reported as [`Error::InsufficientBuffer`].

use dsswire_api::{Error, Result};
use dsswire_params::utils::wire::UINT32_SIZE;

fn insufficient(context: &'static str, available: usize) -> Error {
    Error::InsufficientBuffer {
        context,
        required: UINT32_SIZE,
        available,
    }
}

/// Read a big-endian `uint32` at `offset`
///
/// Fails if `available` is less than 4. If more than 4 bytes are available
/// only the first 4 are used. A slice that is physically shorter than
/// `offset + 4` is also rejected, whatever `available` claims.
pub fn get_u32_be(buf: &[u8], offset: usize, available: usize) -> Result<u32> {
    if available < UINT32_SIZE {
        return Err(insufficient("get_u32_be", available));
    }

    let bytes = offset
        .checked_add(UINT32_SIZE)
        .and_then(|end| buf.get(offset..end))
        .ok_or_else(|| insufficient("get_u32_be", buf.len().saturating_sub(offset)))?;

    Ok(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
}

/// Read a big-endian `uint32` from the start of `buf`
pub fn get_u32_be_prefix(buf: &[u8]) -> Result<u32> {
    get_u32_be(buf, 0, buf.len())
}

/// Write `value` as a big-endian `uint32` at `offset`
///
/// Returns the number of bytes written, which is always 4.
pub fn put_u32_be(value: u32, buf: &mut [u8], offset: usize, available: usize) -> Result<usize> {
    if available < UINT32_SIZE {
        return Err(insufficient("put_u32_be", available));
    }

    let room = buf.len().saturating_sub(offset);
    let dst = offset
        .checked_add(UINT32_SIZE)
        .and_then(|end| buf.get_mut(offset..end))
        .ok_or_else(|| insufficient("put_u32_be", room))?;

    dst.copy_from_slice(&value.to_be_bytes());
    Ok(UINT32_SIZE)
}

/// Write `value` as a big-endian `uint32` at the start of `buf`
pub fn put_u32_be_prefix(value: u32, buf: &mut [u8]) -> Result<usize> {
    let available = buf.len();
    put_u32_be(value, buf, 0, available)
}
