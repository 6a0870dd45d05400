pub mod client;
pub mod config;
pub mod types;

pub use client::{AnalyzerClient, ApiError};
pub use config::ApiConfig;
pub use types::{AnalysisRequest, AnalysisResponse};
