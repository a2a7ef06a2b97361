//! Constants for traditional signature algorithms

pub mod dsa;
