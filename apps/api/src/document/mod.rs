//! Document Text Extractor: turns an uploaded document into plain text.
//!
//! The handler only sees the `TextExtractor` trait; `AppState` carries an
//! `Arc<dyn TextExtractor>` so the PDF backend can be swapped or stubbed.

pub mod pdf;

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

use crate::errors::AppError;

pub use pdf::PdfTextExtractor;

/// The uploaded bytes could not be parsed as the expected document format.
/// Carries a human-readable cause; the whole request fails with it.
#[derive(Debug, Error)]
#[error("{cause}")]
pub struct DocumentParseError {
    cause: String,
}

impl DocumentParseError {
    pub fn new(cause: impl Into<String>) -> Self {
        Self {
            cause: cause.into(),
        }
    }
}

/// Parse failures surface as `AppError::DocumentParse`; anything else the
/// backend hits is `AppError::Internal`.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    /// Extracts plain text from all pages, concatenated in page order.
    async fn extract_text(&self, document: Bytes) -> Result<String, AppError>;
}
