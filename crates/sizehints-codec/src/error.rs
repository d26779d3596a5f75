//! Error types for size hints decoding.

use thiserror::Error;

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors raised while decoding a size hints property.
///
/// Encoding is infallible, so every variant here comes from `decode`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// The buffer ended before `field` could be read in full.
    #[error("truncated size hints: reading {field} needs {needed} bytes at offset {offset}, only {available} available")]
    TruncatedInput {
        field: &'static str,
        offset: usize,
        needed: usize,
        available: usize,
    },
}
