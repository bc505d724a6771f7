use std::fmt;

/// Error kind for codec errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Type,
    Parse,
    Range,
}

/// Codec error — returned by [`Codec`](crate::codec::Codec) methods.
///
/// The conversion engine forwards these to the caller without wrapping.
#[derive(Debug)]
pub struct CodecError {
    pub kind: ErrorKind,
    pub message: String,
}

impl CodecError {
    pub fn type_mismatch(msg: impl Into<String>) -> Self {
        Self { kind: ErrorKind::Type, message: msg.into() }
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        Self { kind: ErrorKind::Parse, message: msg.into() }
    }

    pub fn range(msg: impl Into<String>) -> Self {
        Self { kind: ErrorKind::Range, message: msg.into() }
    }

    /// Add context to the error, preserving the original ErrorKind.
    ///
    /// Produces: `"context: original message"`.
    pub fn with_context(self, ctx: impl fmt::Display) -> Self {
        Self {
            kind: self.kind,
            message: format!("{ctx}: {}", self.message),
        }
    }
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl std::error::Error for CodecError {}

// ---------------------------------------------------------------------------
// From impls: standard error types → CodecError with correct ErrorKind
// ---------------------------------------------------------------------------

impl From<chrono::ParseError> for CodecError {
    fn from(e: chrono::ParseError) -> Self {
        Self::parse(e.to_string())
    }
}

impl From<std::str::Utf8Error> for CodecError {
    fn from(e: std::str::Utf8Error) -> Self {
        Self::parse(e.to_string())
    }
}

impl From<std::string::FromUtf8Error> for CodecError {
    fn from(e: std::string::FromUtf8Error) -> Self {
        Self::parse(e.to_string())
    }
}

impl From<std::num::ParseIntError> for CodecError {
    fn from(e: std::num::ParseIntError) -> Self {
        Self::parse(e.to_string())
    }
}

impl From<std::num::ParseFloatError> for CodecError {
    fn from(e: std::num::ParseFloatError) -> Self {
        Self::parse(e.to_string())
    }
}

impl From<std::num::TryFromIntError> for CodecError {
    fn from(e: std::num::TryFromIntError) -> Self {
        Self::range(e.to_string())
    }
}
