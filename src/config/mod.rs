//! Configuration loading and management

use crate::core::error::{ConfigError, DashError, DashResult};
use crate::core::query::DEFAULT_PAGE_SIZE;
use serde::{Deserialize, Serialize};
use std::path::Path;
use validator::Validate;

/// Server configuration
///
/// Every field has a default, so an empty YAML document is a valid config.
///
/// ```yaml
/// host: 0.0.0.0
/// port: 4000
/// default_page_size: 10
/// max_page_size: 100
/// seed_records: 250
/// seed: 42
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind
    #[validate(length(min = 1))]
    pub host: String,

    /// TCP port to listen on
    pub port: u16,

    /// Rows per page when a request does not specify `limit`
    #[validate(range(min = 1, max = 500))]
    pub default_page_size: usize,

    /// Largest `limit` a request may ask for
    #[validate(range(min = 1, max = 1000))]
    pub max_page_size: usize,

    /// Number of mock transactions loaded at start-up (0 = start empty)
    #[validate(range(max = 1_000_000))]
    pub seed_records: usize,

    /// RNG seed for the mock transactions
    pub seed: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 4000,
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: 100,
            seed_records: 0,
            seed: 42,
        }
    }
}

impl ServerConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> DashResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound {
                path: path.display().to_string(),
            }
            .into());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content).map_err(|e| ConfigError::ParseError {
            file: Some(path.display().to_string()),
            message: e.to_string(),
        })?;
        config.validate_config()?;
        Ok(config)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> DashResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate_config()?;
        Ok(config)
    }

    /// Check field ranges and cross-field constraints
    pub fn validate_config(&self) -> DashResult<()> {
        if let Err(errors) = self.validate() {
            let field_errors = errors.field_errors();
            let mut fields: Vec<&str> = field_errors.keys().map(|f| f.as_ref()).collect();
            fields.sort_unstable();
            let field = fields
                .first()
                .copied()
                .ok_or_else(|| DashError::Internal("empty validation report".to_string()))?;
            let value = match field {
                "host" => self.host.clone(),
                "default_page_size" => self.default_page_size.to_string(),
                "max_page_size" => self.max_page_size.to_string(),
                "seed_records" => self.seed_records.to_string(),
                _ => String::new(),
            };
            return Err(ConfigError::InvalidValue {
                field: field.to_string(),
                value,
                message: errors.to_string(),
            }
            .into());
        }

        if self.default_page_size > self.max_page_size {
            return Err(ConfigError::InvalidValue {
                field: "default_page_size".to_string(),
                value: self.default_page_size.to_string(),
                message: format!("must not exceed max_page_size ({})", self.max_page_size),
            }
            .into());
        }

        Ok(())
    }

    /// `host:port` string for binding
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
