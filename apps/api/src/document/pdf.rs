//! PDF backend for `TextExtractor`, built on `pdf-extract`.
//!
//! Parsing is CPU-bound, so it runs inside `tokio::task::spawn_blocking`. The
//! byte buffer moves into the closure and the parsed document never leaves it:
//! everything the parser opened is dropped when the closure returns, whether it
//! succeeded or failed.

use async_trait::async_trait;
use bytes::Bytes;
use tracing::debug;

use crate::document::{DocumentParseError, TextExtractor};
use crate::errors::AppError;

pub struct PdfTextExtractor;

#[async_trait]
impl TextExtractor for PdfTextExtractor {
    async fn extract_text(&self, document: Bytes) -> Result<String, AppError> {
        let size = document.len();

        let text = tokio::task::spawn_blocking(move || extract_pdf_text(&document))
            .await
            .map_err(|e| {
                if e.is_panic() {
                    // pdf-extract can panic on hostile input instead of returning an error.
                    AppError::DocumentParse(DocumentParseError::new(
                        "the PDF parser aborted on malformed input",
                    ))
                } else {
                    AppError::Internal(anyhow::anyhow!("spawn_blocking failed in PDF extraction: {e}"))
                }
            })??;

        debug!(bytes = size, chars = text.chars().count(), "PDF text extracted");
        Ok(text)
    }
}

/// Extracts text from every page of an in-memory PDF, in page order.
fn extract_pdf_text(data: &[u8]) -> Result<String, DocumentParseError> {
    pdf_extract::extract_text_from_mem(data).map_err(|e| DocumentParseError::new(e.to_string()))
}
