use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub aws: AwsConfig,
    pub auth: AuthConfig,
    pub api: ApiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AwsConfig {
    pub access_key_id: Option<String>,
    pub secret_access_key: Option<String>,
    pub region: String,
    /// Override the SQS endpoint, e.g. for LocalStack. Normal deployments
    /// leave this unset and the SDK resolves the regional endpoint.
    pub endpoint_url: Option<String>,
    pub request_timeout_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Shared secret for protected routes. `None` disables authentication
    /// entirely (open mode) - an intentional default, not a bug.
    pub api_password: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                port: 8000,
                host: "0.0.0.0".to_string(),
            },
            aws: AwsConfig {
                access_key_id: None,
                secret_access_key: None,
                region: "us-east-2".to_string(),
                endpoint_url: None,
                request_timeout_seconds: 30,
            },
            auth: AuthConfig { api_password: None },
            api: ApiConfig {
                title: "AWS SQS Delete Service".to_string(),
                version: "1.0.2".to_string(),
                description: "API to delete messages from Amazon SQS".to_string(),
            },
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;

        let config: Config =
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn load_with_overrides() -> Result<Self, ConfigError> {
        let mut config = if Path::new("sqs-delete.toml").exists() {
            Self::load_from_file("sqs-delete.toml")?
        } else {
            Self::default()
        };

        // Apply environment variable overrides
        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(port) = std::env::var("SQS_DELETE_PORT")
            && let Ok(port_num) = port.parse::<u16>()
        {
            self.server.port = port_num;
        }

        if let Ok(host) = std::env::var("SQS_DELETE_HOST") {
            self.server.host = host;
        }

        if let Ok(access_key) = std::env::var("AWS_ACCESS_KEY_ID") {
            self.aws.access_key_id = Some(access_key);
        }

        if let Ok(secret_key) = std::env::var("AWS_SECRET_ACCESS_KEY") {
            self.aws.secret_access_key = Some(secret_key);
        }

        if let Ok(region) = std::env::var("AWS_DEFAULT_REGION") {
            self.aws.region = region;
        }

        if let Ok(endpoint) = std::env::var("AWS_ENDPOINT_URL") {
            self.aws.endpoint_url = Some(endpoint);
        }

        if let Ok(password) = std::env::var("API_PASSWORD") {
            self.auth.api_password = Some(password);
        }

        if let Ok(title) = std::env::var("API_TITLE") {
            self.api.title = title;
        }

        if let Ok(version) = std::env::var("API_VERSION") {
            self.api.version = version;
        }

        if let Ok(description) = std::env::var("API_DESCRIPTION") {
            self.api.description = description;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation(
                "Server port cannot be 0".to_string(),
            ));
        }

        if self.server.host.is_empty() {
            return Err(ConfigError::Validation(
                "Server host cannot be empty".to_string(),
            ));
        }

        if self.aws.region.is_empty() {
            return Err(ConfigError::Validation(
                "AWS region cannot be empty".to_string(),
            ));
        }

        if self.aws.request_timeout_seconds == 0 {
            return Err(ConfigError::Validation(
                "Request timeout must be > 0".to_string(),
            ));
        }

        if self.aws.access_key_id.is_some() != self.aws.secret_access_key.is_some() {
            return Err(ConfigError::Validation(
                "AWS access key and secret key must be configured together".to_string(),
            ));
        }

        Ok(())
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(String),
    Parse(String),
    Validation(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(msg) => write!(f, "IO error: {}", msg),
            ConfigError::Parse(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::Validation(msg) => write!(f, "Validation error: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.aws.region, "us-east-2");
        assert_eq!(config.aws.request_timeout_seconds, 30);
        assert!(config.auth.api_password.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_port_zero_rejected() {
        let mut config = Config::default();
        config.server.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_credentials_rejected() {
        let mut config = Config::default();
        config.aws.access_key_id = Some("AKIAEXAMPLE".to_string());
        assert!(config.validate().is_err());

        config.aws.secret_access_key = Some("secret".to_string());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
        write!(
            file,
            r#"
[server]
port = 9000
host = "127.0.0.1"

[aws]
region = "eu-west-1"
request_timeout_seconds = 10

[auth]
api_password = "hunter2"

[api]
title = "AWS SQS Delete Service"
version = "1.0.2"
description = "API to delete messages from Amazon SQS"
"#
        )
        .expect("Failed to write config");

        let config = Config::load_from_file(file.path()).expect("Failed to load config");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.aws.region, "eu-west-1");
        assert_eq!(config.auth.api_password.as_deref(), Some("hunter2"));
    }

    #[test]
    fn test_load_from_missing_file() {
        let result = Config::load_from_file("does-not-exist.toml");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
