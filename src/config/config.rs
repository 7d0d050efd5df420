use std::path::Path;
use anyhow::{Context, Error};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VisionConfig {
    pub endpoint: String,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    #[serde(default = "default_max_results")]
    pub max_results: u32,
}

fn default_timeout() -> u64 {
    20
}

fn default_max_results() -> u32 {
    20
}

impl VisionConfig {
    pub fn new() -> Self {
        VisionConfig {
            endpoint: "https://vision.googleapis.com/v1/images:annotate".to_string(),
            api_key: None,
            timeout: default_timeout(),
            max_results: default_max_results(),
        }
    }

    pub fn from_json_str(content: &str) -> Result<Self, Error> {
        serde_json::from_str(content).context("invalid vision config")
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read vision config {}", path.display()))?;
        Self::from_json_str(&content)
    }

    /// The endpoint with the api key appended as a `key` query parameter, if any.
    pub fn request_url(&self) -> String {
        match &self.api_key {
            Some(key) => {
                let sep = if self.endpoint.contains('?') { '&' } else { '?' };
                format!("{}{}key={}", self.endpoint, sep, key)
            }
            None => self.endpoint.clone(),
        }
    }
}

impl Default for VisionConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use crate::config::config::VisionConfig;

    #[test]
    fn test_vision_config_defaults() {
        let config = VisionConfig::new();
        assert_eq!(config.max_results, 20);
        assert_eq!(config.timeout, 20);
        assert_eq!(config.request_url(), "https://vision.googleapis.com/v1/images:annotate");
    }

    #[test]
    fn test_vision_config_from_json() {
        let config = VisionConfig::from_json_str(r#"{"endpoint":"http://localhost:8080/api/visions","api_key":"abc"}"#).unwrap();
        assert_eq!(config.max_results, 20);
        assert_eq!(config.request_url(), "http://localhost:8080/api/visions?key=abc");

        let config = VisionConfig::from_json_str(r#"{"endpoint":"http://h/v?alt=json","api_key":"k","max_results":5}"#).unwrap();
        assert_eq!(config.max_results, 5);
        assert_eq!(config.request_url(), "http://h/v?alt=json&key=k");

        assert!(VisionConfig::from_json_str(r#"{"timeout":3}"#).is_err());
    }

    #[test]
    fn test_vision_config_from_missing_file() {
        let err = VisionConfig::from_json_file("/nonexistent/vision.json").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/vision.json"));
    }
}
