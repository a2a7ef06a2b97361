//! Constant values for the dsswire codec
//!
//! Wire layouts and identifiers shared by the dsswire crates.

#![no_std]

pub mod traditional;
pub mod utils;
