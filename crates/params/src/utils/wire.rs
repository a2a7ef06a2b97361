//! SSH wire-format constants

/// Size of a `uint32` length prefix
pub const UINT32_SIZE: usize = 4;

/// Smallest possible envelope: two empty length-prefixed fields
pub const MIN_ENVELOPE_LENGTH: usize = 2 * UINT32_SIZE;
