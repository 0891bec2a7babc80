//! Pipewav Core - RIFF/WAVE header construction for piped audio streams.
//!
//! A muxing pipeline writes one header per output stream and then streams
//! raw interleaved samples straight after it. This crate produces that
//! header: given a handful of stream parameters it derives every field,
//! accounts for chunk sizes, and saturates cleanly when a stream outgrows
//! 32-bit WAVE.
//!
//! # Architecture
//!
//! - [`wav`]: header model, builders, channel masks and byte encoding
//! - [`diagnostics`]: injected sink for overflow warnings
//! - [`protocol_constants`]: fixed RIFF/WAVE identifiers and sizes
//! - [`error`]: warning and parse error types
//!
//! # Abstraction Traits
//!
//! - [`DiagnosticSink`](diagnostics::DiagnosticSink): receives the warnings a
//!   build produces. [`LogSink`](diagnostics::LogSink) forwards them to `log`.
//!
//! Builders perform no I/O and hold no state beyond their sink.

#![warn(clippy::all)]

pub mod diagnostics;
pub mod error;
pub mod protocol_constants;
pub mod wav;

// Re-export commonly used types at the crate root
pub use diagnostics::{CollectingSink, DiagnosticSink, LogSink, NoopSink};
pub use error::{ErrorCode, HeaderWarning, ParseError, ParseResult};
pub use wav::{
    build_canonical_header, build_extensible_header, channel_mask, CanonicalHeader,
    ExtensibleHeader, Guid, HeaderBuilder, HeaderLayout, SampleFormat, StreamParameters,
    WaveHeader,
};
