pub mod api;
pub mod cli;
pub mod report;

pub use api::{AnalysisRequest, AnalysisResponse, AnalyzerClient, ApiConfig, ApiError};
