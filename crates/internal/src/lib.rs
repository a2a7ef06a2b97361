//! Internal byte utilities for the dsswire codec
//!
//! Big-endian `uint32` access over byte ranges, hex formatting and byte
//! range comparison. Every other dsswire crate builds on these.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod compare;
pub mod endian;
pub mod hex;

pub use compare::{bytes_equal, ct_eq, ct_ranges_equal, ranges_equal};
pub use endian::{get_u32_be, get_u32_be_prefix, put_u32_be, put_u32_be_prefix};
pub use hex::{append_hex, to_hex, HexDisplay};
