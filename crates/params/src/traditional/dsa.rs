//! Constants for the Digital Signature Algorithm (DSA) over SSH

/// SSH public key algorithm name for DSA (`ssh-dss`)
pub const SSH_DSS: &str = "ssh-dss";

/// Size of an `ssh-dss` wire signature in bytes (r and s concatenated)
pub const DSA_SIGNATURE_LENGTH: usize = 40;

/// Size of each of r and s in the wire signature
///
/// A DER INTEGER may be one byte longer than this because of its guard byte.
pub const MAX_SIGNATURE_VALUE_LENGTH: usize = DSA_SIGNATURE_LENGTH / 2;
