//! Error kinds for cir operations

use strum_macros::{Display, IntoStaticStr};

/// The kind of error that occurred.
///
/// This enum categorizes errors to help callers write clear error handling
/// logic. Callers can match on `ErrorKind` to decide how to handle specific
/// error cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr, Display)]
#[non_exhaustive]
pub enum ErrorKind {
    // =========================================================================
    // General errors
    // =========================================================================
    /// An unexpected error occurred - catch-all for unhandled cases
    Unexpected,

    /// Invalid configuration or parameters
    ConfigInvalid,

    /// Invalid input to an operation
    InvalidInput,

    // =========================================================================
    // Parse errors
    // =========================================================================
    /// Failed to parse source code
    ParseFailed,

    /// Invalid syntax in source file
    SyntaxError,

    /// Encoding error (invalid UTF-8, etc.)
    EncodingError,

    // =========================================================================
    // Resolution errors
    // =========================================================================
    /// Symbol resolution failed
    ResolutionFailed,

    /// Symbol not found in scope
    SymbolNotFound,

    /// Ambiguous symbol reference
    AmbiguousSymbol,

    // =========================================================================
    // Graph errors
    // =========================================================================
    /// Graph construction failed
    GraphBuildFailed,

    // =========================================================================
    // File/IO errors
    // =========================================================================
    /// File not found
    FileNotFound,

    /// Permission denied
    PermissionDenied,

    /// IO operation failed
    Io,

    // =========================================================================
    // Language-specific errors
    // =========================================================================
    /// Unsupported language
    UnsupportedLanguage,

    /// Unsupported diagram type
    UnsupportedDiagramType,

    /// Language detection failed
    LanguageDetectionFailed,

    // =========================================================================
    // Serialization errors
    // =========================================================================
    /// Serialization failed
    SerializationFailed,

    // =========================================================================
    // Validation errors
    // =========================================================================
    /// PlantUML output failed validation
    ValidationFailed,

    /// Invalid argument passed to a function
    InvalidArgument,
}

impl ErrorKind {
    /// Returns the error kind as a static string
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }

    /// Check if this error kind is retryable by default.
    ///
    /// Only I/O failures are worth retrying; everything else in this crate
    /// family is a data or contract problem that will not resolve itself.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ErrorKind::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_display() {
        assert_eq!(ErrorKind::ParseFailed.to_string(), "ParseFailed");
        assert_eq!(ErrorKind::SymbolNotFound.to_string(), "SymbolNotFound");
    }

    #[test]
    fn test_is_retryable() {
        assert!(ErrorKind::Io.is_retryable());
        assert!(!ErrorKind::ParseFailed.is_retryable());
        assert!(!ErrorKind::SymbolNotFound.is_retryable());
        assert!(!ErrorKind::UnsupportedLanguage.is_retryable());
    }
}
