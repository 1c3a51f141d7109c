use std::sync::Arc;

use crate::analysis::analyzer::ResumeAnalyzer;
use crate::config::Config;
use crate::document::TextExtractor;

/// Shared application state injected into route handlers via Axum extractors.
/// Read-only after startup; requests never share mutable state.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Document text backend. Default: PdfTextExtractor.
    pub extractor: Arc<dyn TextExtractor>,
    /// Pluggable analyzer. Default: KeywordOverlapAnalyzer.
    pub analyzer: Arc<dyn ResumeAnalyzer>,
}
