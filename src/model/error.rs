//! Error types for comicframe.
//!
//! A hierarchical taxonomy using `thiserror`, composing via `?` and `From`.
//!
//! # Error Recovery Strategy
//!
//! [`FetchError`] is **contained**: every variant aborts a single refresh
//! attempt, is logged, and leaves the displayed card untouched; the
//! controller simply retries on the next interval tick. [`AppError`] is
//! fatal and propagates to `main` for graceful shutdown.
//!
//! Source errors from the transport and codec crates are flattened to
//! message strings rather than wrapped, so the model does not carry
//! `reqwest`/`image` error state across the completion channel.

use thiserror::Error;

/// Top-level application error encompassing all fatal failure modes.
///
/// Everything here means the process cannot meaningfully continue:
/// a broken config file, a logging subsystem that cannot start, or a
/// screen backend that lost its output device. Refresh failures are
/// deliberately *not* represented; see [`FetchError`].
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration file could not be loaded or parsed.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Tracing subscriber initialization failed.
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// The HTTP client could not be constructed.
    ///
    /// Construction happens once at startup; a failure here (TLS backend
    /// missing, system config unreadable) is unrecoverable.
    #[error("Failed to build HTTP client: {reason}")]
    HttpClient {
        /// Builder error message from the transport crate.
        reason: String,
    },

    /// Screen backend error (terminal setup, output I/O).
    #[error("Display error: {0}")]
    Display(#[from] crate::display::DisplayError),
}

/// Errors produced by one run of the fetch pipeline.
///
/// Each variant marks a distinct pipeline stage so failures are reported
/// individually. All variants are recoverable: the record being built is
/// discarded, the pending slot keeps its prior state, and the displayed
/// card is never disturbed.
///
/// Identifier-parse failure is *not* a variant: a canonical URL whose last
/// segment is not an integer degrades to `id = 0` with a warning, and the
/// fetch still succeeds.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    /// The source document request itself failed (DNS, connect, TLS).
    #[error("Can't request source document: {reason}")]
    Request {
        /// Transport error message.
        reason: String,
    },

    /// The response body could not be read to completion.
    #[error("Can't read source response: {reason}")]
    Read {
        /// Transport error message.
        reason: String,
    },

    /// The document yielded no usable metadata (no title, image, or
    /// canonical URL). Contained like every other stage failure; the
    /// next interval retries.
    #[error("Source document has no usable metadata")]
    Metadata,

    /// The referenced comic image could not be downloaded.
    #[error("Can't download comic image from {url}: {reason}")]
    ImageDownload {
        /// Image URL that failed.
        url: String,
        /// Transport error message.
        reason: String,
    },

    /// The downloaded bytes could not be decoded as an image.
    #[error("Can't decode comic image: {reason}")]
    ImageDecode {
        /// Codec error message.
        reason: String,
    },
}
