//! Error and warning types for the pipewav core library.
//!
//! Header construction never fails: the two overflow conditions are recovered
//! locally and reported as [`HeaderWarning`] values through the injected
//! [`DiagnosticSink`](crate::diagnostics::DiagnosticSink). The only hard errors
//! come from parsing user-facing text into core types.

use thiserror::Error;

/// Trait for error types that provide machine-readable error codes.
///
/// Implement this trait to provide consistent codes for logs and tooling
/// that should not match on display strings.
pub trait ErrorCode {
    /// Returns a machine-readable error code.
    fn code(&self) -> &'static str;
}

/// Recoverable conditions hit while deriving header sizes.
///
/// Each variant corresponds to a clamp the builder applied. The header is
/// still structurally valid; the numbers in it are saturated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeaderWarning {
    /// The per-channel sample count does not fit the 32-bit fact field.
    /// The fact sample count was clamped to `u32::MAX`.
    #[error("audio sample number over 32-bit limit ({samples} samples)")]
    SampleCountOverflow { samples: u64 },

    /// The payload (plus header) does not fit the 32-bit RIFF size fields.
    /// Both RIFF and data sizes were forced to `u32::MAX`.
    #[error("audio size over 32-bit limit (4GB), clients may truncate audio ({bytes} bytes)")]
    PayloadSizeOverflow { bytes: u128 },
}

impl ErrorCode for HeaderWarning {
    fn code(&self) -> &'static str {
        match self {
            Self::SampleCountOverflow { .. } => "sample_count_overflow",
            Self::PayloadSizeOverflow { .. } => "payload_size_overflow",
        }
    }
}

/// Failure to parse a core type from text (CLI flags, config values).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Not a known format name and not a numeric 16-bit tag.
    #[error("unknown sample format: {0}")]
    UnknownFormat(String),

    /// Not one of `auto`, `canonical`, `extensible`.
    #[error("unknown header layout: {0}")]
    UnknownLayout(String),
}

impl ErrorCode for ParseError {
    fn code(&self) -> &'static str {
        match self {
            Self::UnknownFormat(_) => "unknown_format",
            Self::UnknownLayout(_) => "unknown_layout",
        }
    }
}

/// Convenient Result alias for parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;
