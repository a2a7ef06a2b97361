//! Test vectors and fixtures for the dsswire integration tests
pub mod vectors;
