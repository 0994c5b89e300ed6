use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Invalid value for parameter {parameter}: {reason}")]
    InvalidParameter {
        parameter: &'static str,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    pub endpoint: String,
    pub timeout: Duration,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RankingConfig {
    pub copies: usize,
    pub cache_dir: PathBuf,
    /// Resolve predictions from the cache only; a miss is a service error.
    pub offline: bool,
    pub service: ServiceConfig,
}

#[derive(Default)]
pub struct RankingConfigBuilder {
    copies: Option<usize>,
    cache_dir: Option<PathBuf>,
    offline: Option<bool>,
    endpoint: Option<String>,
    timeout: Option<Duration>,
}

impl RankingConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn copies(mut self, copies: usize) -> Self {
        self.copies = Some(copies);
        self
    }
    pub fn cache_dir(mut self, path: PathBuf) -> Self {
        self.cache_dir = Some(path);
        self
    }
    pub fn offline(mut self, offline: bool) -> Self {
        self.offline = Some(offline);
        self
    }
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> Result<RankingConfig, ConfigError> {
        let endpoint = self
            .endpoint
            .ok_or(ConfigError::MissingParameter("endpoint"))?;
        if endpoint.trim().is_empty() {
            return Err(ConfigError::InvalidParameter {
                parameter: "endpoint",
                reason: "must not be empty".to_string(),
            });
        }
        let timeout = self.timeout.ok_or(ConfigError::MissingParameter("timeout"))?;
        if timeout.is_zero() {
            return Err(ConfigError::InvalidParameter {
                parameter: "timeout",
                reason: "must be greater than zero".to_string(),
            });
        }

        Ok(RankingConfig {
            copies: self.copies.ok_or(ConfigError::MissingParameter("copies"))?,
            cache_dir: self
                .cache_dir
                .ok_or(ConfigError::MissingParameter("cache_dir"))?,
            offline: self.offline.unwrap_or(false),
            service: ServiceConfig { endpoint, timeout },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_builder() -> RankingConfigBuilder {
        RankingConfigBuilder::new()
            .copies(10)
            .cache_dir(PathBuf::from("pdbs"))
            .endpoint("http://localhost:8080/fold")
            .timeout(Duration::from_secs(30))
    }

    #[test]
    fn build_with_all_parameters_succeeds() {
        let config = complete_builder().offline(true).build().unwrap();
        assert_eq!(config.copies, 10);
        assert_eq!(config.cache_dir, PathBuf::from("pdbs"));
        assert!(config.offline);
        assert_eq!(config.service.endpoint, "http://localhost:8080/fold");
        assert_eq!(config.service.timeout, Duration::from_secs(30));
    }

    #[test]
    fn offline_defaults_to_false() {
        assert!(!complete_builder().build().unwrap().offline);
    }

    #[test]
    fn missing_copies_is_reported() {
        let result = RankingConfigBuilder::new()
            .cache_dir(PathBuf::from("pdbs"))
            .endpoint("http://localhost")
            .timeout(Duration::from_secs(1))
            .build();
        assert_eq!(result, Err(ConfigError::MissingParameter("copies")));
    }

    #[test]
    fn missing_endpoint_is_reported() {
        let result = RankingConfigBuilder::new()
            .copies(2)
            .cache_dir(PathBuf::from("pdbs"))
            .timeout(Duration::from_secs(1))
            .build();
        assert_eq!(result, Err(ConfigError::MissingParameter("endpoint")));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let result = complete_builder().timeout(Duration::ZERO).build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidParameter {
                parameter: "timeout",
                ..
            })
        ));
    }

    #[test]
    fn blank_endpoint_is_rejected() {
        let result = complete_builder().endpoint("  ").build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidParameter {
                parameter: "endpoint",
                ..
            })
        ));
    }
}
