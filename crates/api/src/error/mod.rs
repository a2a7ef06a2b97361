//! Error handling for the dsswire codec

pub mod traits;
pub mod types;

// Re-export the primary error type and result
pub use types::{Error, ErrorKind, Result};

// Re-export error traits
pub use traits::ResultExt;

// Implement standard Error trait when std is available
#[cfg(feature = "std")]
impl std::error::Error for Error {}

// Result of a call into an external engine
pub type EngineResult<T> = Result<T>;
