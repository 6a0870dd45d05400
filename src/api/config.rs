use serde::{Deserialize, Serialize};
use std::env;

/// Environment variable holding the backend base URL
pub const BASE_URL_ENV: &str = "VITE_API_BASE_URL";

/// Path of the analysis endpoint, relative to the base URL
pub const ANALYZE_PATH: &str = "/analyze";

/// Configuration for the analysis backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Root address of the backend service (e.g. "http://127.0.0.1:8000")
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, String> {
        Self::from_env_internal(true)
    }

    /// Load configuration from environment variables without reading `.env`
    #[cfg(test)]
    fn from_env_no_dotenv() -> Result<Self, String> {
        Self::from_env_internal(false)
    }

    fn from_env_internal(load_dotenv: bool) -> Result<Self, String> {
        if load_dotenv {
            let _ = dotenv::dotenv();
        }

        let base_url = env::var(BASE_URL_ENV).map_err(|_| {
            format!(
                "{} not found in environment. Please set it in .env file or environment variables.",
                BASE_URL_ENV
            )
        })?;

        if base_url.trim().is_empty() {
            return Err(format!("{} is empty", BASE_URL_ENV));
        }

        Ok(Self::new(base_url))
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("Base URL is empty".to_string());
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(format!(
                "Base URL must start with http:// or https://, got '{}'",
                self.base_url
            ));
        }

        Ok(())
    }

    /// Full URL of the analysis endpoint
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, ANALYZE_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    #[test]
    fn test_new_trims_trailing_slash() {
        let config = ApiConfig::new("http://localhost:8000/");
        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.endpoint(), "http://localhost:8000/analyze");

        let config = ApiConfig::new("  https://api.example.com//  ");
        assert_eq!(config.endpoint(), "https://api.example.com/analyze");
    }

    #[test]
    fn test_validate_success() {
        assert!(ApiConfig::new("http://127.0.0.1:8000").validate().is_ok());
        assert!(ApiConfig::new("https://analyzer.example.com/api").validate().is_ok());
    }

    #[test]
    fn test_validate_empty_base_url() {
        let result = ApiConfig::new("").validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Base URL is empty"));
    }

    #[test]
    fn test_validate_missing_scheme() {
        let result = ApiConfig::new("localhost:8000").validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("must start with http"));
    }

    #[test]
    #[serial]
    fn test_from_env_missing_base_url() {
        env::remove_var(BASE_URL_ENV);

        let result = ApiConfig::from_env_no_dotenv();
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("VITE_API_BASE_URL not found"));
    }

    #[test]
    #[serial]
    fn test_from_env_blank_base_url() {
        env::set_var(BASE_URL_ENV, "   ");

        let result = ApiConfig::from_env_no_dotenv();
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("is empty"));

        env::remove_var(BASE_URL_ENV);
    }

    #[test]
    #[serial]
    fn test_from_env_with_base_url() {
        env::set_var(BASE_URL_ENV, "http://127.0.0.1:8000/");

        let config = ApiConfig::from_env_no_dotenv().unwrap();
        assert_eq!(config.base_url, "http://127.0.0.1:8000");
        assert_eq!(config.endpoint(), "http://127.0.0.1:8000/analyze");

        env::remove_var(BASE_URL_ENV);
    }
}
