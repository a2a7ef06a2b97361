//! Byte range comparison
//!
//! [`ranges_equal`] short-circuits on the first differing byte and is
//! therefore not timing-safe. [`ct_ranges_equal`] has the same range
//! semantics but compares the bytes in constant time.

use subtle::ConstantTimeEq;

fn range(buf: &[u8], offset: usize, length: usize) -> Option<&[u8]> {
    offset.checked_add(length).and_then(|end| buf.get(offset..end))
}

/// Compare `a[a_offset..a_offset + length]` with `b[b_offset..b_offset + length]`
///
/// Returns false when either range runs past the end of its buffer.
pub fn ranges_equal(a: &[u8], a_offset: usize, b: &[u8], b_offset: usize, length: usize) -> bool {
    match (range(a, a_offset, length), range(b, b_offset, length)) {
        (Some(x), Some(y)) => x.iter().zip(y).all(|(l, r)| l == r),
        _ => false,
    }
}

/// Whole-slice equality, not timing-safe
pub fn bytes_equal(a: &[u8], b: &[u8]) -> bool {
    a.len() == b.len() && ranges_equal(a, 0, b, 0, a.len())
}

/// Constant-time comparison of two byte slices
///
/// Returns true if the slices are equal, false otherwise. Only the length
/// check is allowed to exit early.
pub fn ct_eq<A, B>(a: A, b: B) -> bool
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    let a = a.as_ref();
    let b = b.as_ref();

    if a.len() != b.len() {
        return false;
    }

    a.ct_eq(b).into()
}

/// Timing-safe variant of [`ranges_equal`]
///
/// Range bounds are checked first and may exit early; the bytes inside the
/// ranges are compared in constant time.
pub fn ct_ranges_equal(
    a: &[u8],
    a_offset: usize,
    b: &[u8],
    b_offset: usize,
    length: usize,
) -> bool {
    match (range(a, a_offset, length), range(b, b_offset, length)) {
        (Some(x), Some(y)) => ct_eq(x, y),
        _ => false,
    }
}
