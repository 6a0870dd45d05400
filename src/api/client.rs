use crate::api::config::ApiConfig;
use crate::api::types::{AnalysisRequest, AnalysisResponse};
use thiserror::Error;
use tracing::{debug, error};

/// Errors that can occur when talking to the analysis backend
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Configuration error: {0}")]
    Config(String),

    /// Transport failure, non-success status, or an undecodable body
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Client that forwards analysis requests to the backend
#[derive(Debug, Clone)]
pub struct AnalyzerClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl AnalyzerClient {
    /// Create a new client from configuration
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        config.validate().map_err(ApiError::Config)?;

        Ok(Self {
            http: reqwest::Client::new(),
            config,
        })
    }

    /// Create a client from environment variables
    pub fn from_env() -> Result<Self, ApiError> {
        let config = ApiConfig::from_env().map_err(ApiError::Config)?;
        Self::new(config)
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Analyze a subreddit, using the default sampling parameters for any
    /// that are omitted
    pub async fn analyze_subreddit(
        &self,
        subreddit: &str,
        top_n: u32,
        temperature: Option<f32>,
        max_tokens: Option<u32>,
    ) -> Result<AnalysisResponse, ApiError> {
        let mut request = AnalysisRequest::new(subreddit, top_n);
        if let Some(temperature) = temperature {
            request = request.with_temperature(temperature);
        }
        if let Some(max_tokens) = max_tokens {
            request = request.with_max_tokens(max_tokens);
        }

        self.send(&request).await
    }

    /// Post a prebuilt request and return the response body unmodified
    pub async fn send(&self, request: &AnalysisRequest) -> Result<AnalysisResponse, ApiError> {
        let endpoint = self.config.endpoint();

        debug!(
            "POST {}: subreddit={}, top_n={}, temperature={}, max_tokens={}",
            endpoint, request.subreddit, request.top_n, request.temperature, request.max_tokens
        );

        match self.post(&endpoint, request).await {
            Ok(response) => Ok(response),
            Err(e) => {
                error!("Error calling {}: {}", endpoint, e);
                Err(e.into())
            }
        }
    }

    async fn post(
        &self,
        endpoint: &str,
        request: &AnalysisRequest,
    ) -> Result<AnalysisResponse, reqwest::Error> {
        let response = self
            .http
            .post(endpoint)
            .json(request)
            .send()
            .await?
            .error_for_status()?;

        debug!("Received response: status={}", response.status());

        response.json::<AnalysisResponse>().await
    }
}
