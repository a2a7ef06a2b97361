//! Error type definitions for signature transcoding

use alloc::string::String;

/// Primary error type for signature transcoding operations
///
/// The set of variants is closed: callers branch on the failure category
/// (see [`Error::kind`]) rather than on message text. None of these errors
/// is transient, so none of them should be retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The candidate signature is not exactly the expected wire length,
    /// even after any envelope was unwrapped
    LengthMismatch {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// An enveloped signature names a different algorithm
    KeyTypeMismatch {
        expected: &'static str,
        actual: String,
    },

    /// DER bytes are not a SEQUENCE of exactly two INTEGERs, or an
    /// integer component cannot be reduced to the fixed field width
    MalformedEncoding {
        context: &'static str,
        message: String,
    },

    /// A fixed-width integer read or write does not have enough room
    InsufficientBuffer {
        context: &'static str,
        required: usize,
        available: usize,
    },

    /// The external signing or verification engine reported a failure
    Engine {
        context: &'static str,
        message: String,
    },
}

/// Fieldless category of an [`Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    LengthMismatch,
    KeyTypeMismatch,
    MalformedEncoding,
    InsufficientBuffer,
    Engine,
}

/// Result type for signature transcoding operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Shorthand for a [`Error::MalformedEncoding`]
    pub fn malformed(context: &'static str, message: impl Into<String>) -> Self {
        Self::MalformedEncoding {
            context,
            message: message.into(),
        }
    }

    /// Shorthand for an [`Error::Engine`]
    pub fn engine(context: &'static str, message: impl Into<String>) -> Self {
        Self::Engine {
            context,
            message: message.into(),
        }
    }

    /// Category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::LengthMismatch { .. } => ErrorKind::LengthMismatch,
            Self::KeyTypeMismatch { .. } => ErrorKind::KeyTypeMismatch,
            Self::MalformedEncoding { .. } => ErrorKind::MalformedEncoding,
            Self::InsufficientBuffer { .. } => ErrorKind::InsufficientBuffer,
            Self::Engine { .. } => ErrorKind::Engine,
        }
    }

    /// Replace the context of an existing error
    ///
    /// `KeyTypeMismatch` carries no context and is returned unchanged.
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::LengthMismatch { expected, actual, .. } => Self::LengthMismatch {
                context,
                expected,
                actual,
            },
            Self::KeyTypeMismatch { expected, actual } => {
                Self::KeyTypeMismatch { expected, actual }
            }
            Self::MalformedEncoding { message, .. } => {
                Self::MalformedEncoding { context, message }
            }
            Self::InsufficientBuffer {
                required, available, ..
            } => Self::InsufficientBuffer {
                context,
                required,
                available,
            },
            Self::Engine { message, .. } => Self::Engine { context, message },
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::LengthMismatch {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "{}: bad signature length (expected {}, got {})",
                    context, expected, actual
                )
            }
            Self::KeyTypeMismatch { expected, actual } => {
                write!(f, "Mismatched key type: {} (expected {})", actual, expected)
            }
            Self::MalformedEncoding { context, message } => {
                write!(f, "Malformed encoding: {}: {}", context, message)
            }
            Self::InsufficientBuffer {
                context,
                required,
                available,
            } => {
                write!(
                    f,
                    "{}: not enough data (required {}, available {})",
                    context, required, available
                )
            }
            Self::Engine { context, message } => {
                write!(f, "Signature engine failure: {}: {}", context, message)
            }
        }
    }
}
