//! Encoding constants shared by the dsswire crates

pub mod der;
pub mod wire;
