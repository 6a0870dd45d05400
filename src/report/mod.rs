pub mod chart;
pub mod json;
pub mod terminal;

use crate::api::{AnalysisRequest, AnalysisResponse};
use std::path::Path;

/// Result type for report operations
pub type ReportResult<T> = Result<T, ReportError>;

/// Errors that can occur during report generation
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Chart decode error: {0}")]
    ChartDecodeError(#[from] base64::DecodeError),
}

/// A completed analysis: what was asked and what the backend answered
#[derive(Debug, Clone, Copy)]
pub struct AnalysisReport<'a> {
    pub request: &'a AnalysisRequest,
    pub response: &'a AnalysisResponse,
}

impl<'a> AnalysisReport<'a> {
    pub fn new(request: &'a AnalysisRequest, response: &'a AnalysisResponse) -> Self {
        Self { request, response }
    }
}

/// Trait for report generators that write to a file
pub trait ReportGenerator {
    /// Generate a report file for an analysis
    fn generate(&self, report: &AnalysisReport<'_>, output_path: &Path) -> ReportResult<()>;

    /// Get generator name
    fn name(&self) -> &'static str;
}
