use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Sampling temperature sent when the caller does not choose one
pub const DEFAULT_TEMPERATURE: f32 = 0.5;

/// Generation length cap sent when the caller does not choose one
pub const DEFAULT_MAX_TOKENS: u32 = 150;

/// Payload posted to the analysis endpoint.
///
/// Fields are forwarded as-is; the backend is responsible for validating them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub subreddit: String,
    pub top_n: u32,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl AnalysisRequest {
    pub fn new(subreddit: impl Into<String>, top_n: u32) -> Self {
        Self {
            subreddit: subreddit.into(),
            top_n,
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}

/// Response body of the analysis endpoint, kept exactly as the backend sent it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnalysisResponse(Value);

impl AnalysisResponse {
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_inner(self) -> Value {
        self.0
    }

    /// Summary text, when the backend produced one
    pub fn summary(&self) -> Option<&str> {
        self.0.get("summary").and_then(Value::as_str)
    }

    /// Base64-encoded PNG of the sentiment chart, when present
    pub fn sentiment_graph(&self) -> Option<&str> {
        self.0.get("sentiment_graph").and_then(Value::as_str)
    }
}

impl From<Value> for AnalysisResponse {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl From<AnalysisResponse> for Value {
    fn from(response: AnalysisResponse) -> Self {
        response.0
    }
}
