//! Application configuration module
//!
//! Handles loading configuration from environment variables and `.env`.

use std::net::Ipv4Addr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: Ipv4Addr,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: Ipv4Addr::new(0, 0, 0, 0), // Bind to 0.0.0.0 for Docker
            port: 8000,
        }
    }
}

/// Credentials and region handed to the catalog client.
///
/// None of these are required here. Missing values fall through to the
/// SDK default provider chain and show up as failed catalog calls.
#[derive(Clone, Default)]
pub struct AwsConfig {
    pub access_key_id: Option<String>,
    pub secret_access_key: Option<String>,
    pub region: Option<String>,
}

impl AwsConfig {
    /// Static credentials, if both halves are present
    pub fn static_credentials(&self) -> Option<(&str, &str)> {
        match (&self.access_key_id, &self.secret_access_key) {
            (Some(id), Some(secret)) => Some((id.as_str(), secret.as_str())),
            _ => None,
        }
    }
}

impl std::fmt::Debug for AwsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AwsConfig")
            .field("access_key_id", &self.access_key_id.as_ref().map(|_| "***"))
            .field("secret_access_key", &self.secret_access_key.as_ref().map(|_| "***"))
            .field("region", &self.region)
            .finish()
    }
}

/// CORS configuration
#[derive(Debug, Clone, Default)]
pub struct CorsConfig {
    /// Empty means any origin
    pub allowed_origins: Vec<String>,
}

/// Complete application settings
#[derive(Debug, Clone)]
pub struct Settings {
    pub server: ServerConfig,
    pub aws: AwsConfig,
    pub cors: CorsConfig,
}

impl Settings {
    /// Load settings from environment variables
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if it exists (ignore errors if file not found)
        let _ = dotenvy::dotenv();

        let server = ServerConfig {
            host: match std::env::var("HOST") {
                Ok(h) => h
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue(format!("HOST={}", h)))?,
                Err(_) => ServerConfig::default().host,
            },
            port: match std::env::var("PORT") {
                Ok(p) => p
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue(format!("PORT={}", p)))?,
                Err(_) => ServerConfig::default().port,
            },
        };

        // The .env file uses lowercase keys; the usual uppercase names work too
        let aws = AwsConfig {
            access_key_id: env_either("aws_access_key_id", "AWS_ACCESS_KEY_ID"),
            secret_access_key: env_either("aws_secret_access_key", "AWS_SECRET_ACCESS_KEY"),
            region: env_either("aws_region", "AWS_REGION"),
        };

        let cors = CorsConfig {
            allowed_origins: std::env::var("ALLOWED_ORIGINS")
                .map(|s| parse_origins(&s))
                .unwrap_or_default(),
        };

        Ok(Self { server, aws, cors })
    }
}

fn env_either(primary: &str, fallback: &str) -> Option<String> {
    std::env::var(primary)
        .or_else(|_| std::env::var(fallback))
        .ok()
        .filter(|v| !v.trim().is_empty())
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty() && *s != "*")
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_server_config() {
        let config = ServerConfig::default();
        assert_eq!(config.host, Ipv4Addr::new(0, 0, 0, 0));
        assert_eq!(config.port, 8000);
    }

    #[test]
    fn test_parse_origins() {
        assert_eq!(
            parse_origins("http://a.example, http://b.example ,"),
            vec!["http://a.example", "http://b.example"]
        );
        assert!(parse_origins("*").is_empty());
    }

    #[test]
    fn test_static_credentials_need_both_halves() {
        let mut aws = AwsConfig {
            access_key_id: Some("AKIA".to_string()),
            ..Default::default()
        };
        assert!(aws.static_credentials().is_none());

        aws.secret_access_key = Some("secret".to_string());
        assert_eq!(aws.static_credentials(), Some(("AKIA", "secret")));
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let aws = AwsConfig {
            access_key_id: Some("AKIAEXAMPLE".to_string()),
            secret_access_key: Some("hunter2".to_string()),
            region: Some("eu-west-1".to_string()),
        };
        let printed = format!("{:?}", aws);
        assert!(!printed.contains("hunter2"));
        assert!(!printed.contains("AKIAEXAMPLE"));
        assert!(printed.contains("eu-west-1"));
    }
}
