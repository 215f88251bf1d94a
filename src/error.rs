//! Error types.
//!
//! Three layers, from most to least recoverable:
//!
//! * [`ImageFetchError`]: a single image could not be fetched or decoded. Gallery
//!   images are logged and skipped; only a snapshot report fails on one.
//! * [`PdfError`]: the low-level writer failed to encode something.
//! * [`GenerationError`]: the whole report failed. This is the only error report
//!   callers see; no partial document accompanies it.
//!
//! Running out of vertical space is not an error at all: layout resolves it by
//! starting a new page.

use std::path::PathBuf;
use thiserror::Error;

use crate::image::ImageError;

/// Errors from the PDF writer itself
#[derive(Error, Debug)]
pub enum PdfError {
    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// An embedded image could not be encoded
    Image(#[from] ImageError),

    #[error("page {0} is referenced but missing from the document")]
    /// The page order refers to a page that isn't in the arena
    PageMissing(usize),
}

/// An image that could not be used. The gallery logs and skips it.
#[derive(Error, Debug)]
pub enum ImageFetchError {
    #[error("request for '{url}' failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("'{url}' answered with HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("timed out after {secs}s fetching '{url}'")]
    Timeout { url: String, secs: u64 },

    #[error("could not decode '{url}': {source}")]
    Decode {
        url: String,
        #[source]
        source: ImageError,
    },

    #[error("could not read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("'{url}' is not an http(s) or file URL")]
    Unsupported { url: String },
}

/// The report could not be produced
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("PDF generation failed: no properties were provided")]
    NoProperties,

    #[error("PDF generation failed: {0}")]
    Pdf(#[from] PdfError),

    /// The image a snapshot report is made of could not be used. Unlike gallery
    /// images, there is nothing to fall back to.
    #[error("PDF generation failed: {0}")]
    Image(#[from] ImageFetchError),

    #[error("could not save report to '{}': {source}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A report configuration file could not be used
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not read config '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid report config: {0}")]
    Parse(#[from] serde_json::Error),
}
