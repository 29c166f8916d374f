// Centralized configuration management for PhishGuard Core
// All env vars are read once at startup by `AppConfig::from_env`

use serde::{Deserialize, Serialize};
use std::env;
use thiserror::Error;
use url::Url;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

/// Complete application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub backend: BackendConfig,
    pub analysis: AnalysisConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub bind_address: String,
    pub cors_allowed_origins: Vec<String>,
}

/// Remote analysis backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL, without trailing slash, e.g. `https://api.example.com/api`
    pub api_url: String,
    #[serde(skip_serializing)]
    pub api_token: Option<String>,
    pub timeout_secs: u64,
    pub user_agent: String,
}

/// Analysis behavior switches
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Run the secondary ML content pass on URLs
    pub enable_secondary_ml: bool,
}

/// Environment type
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Environment {
    Development,
    Test,
    Staging,
    Production,
}

impl From<String> for Environment {
    fn from(s: String) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            "production" | "prod" => Environment::Production,
            _ => Environment::Development,
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Staging => write!(f, "staging"),
            Environment::Production => write!(f, "production"),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        // Helper function to get optional env var with default
        let get_or_default = |key: &str, default: &str| -> String {
            env::var(key).unwrap_or_else(|_| default.to_string())
        };

        let parse_u64_or_default = |key: &str, default: &str| -> Result<u64, ConfigError> {
            get_or_default(key, default).parse().map_err(|_| {
                ConfigError::InvalidValue(key.to_string(), "not a valid u64".to_string())
            })
        };

        let parse_bool_or_default = |key: &str, default: &str| -> bool {
            get_or_default(key, default).to_lowercase() == "true"
        };

        let environment = Environment::from(get_or_default("ENVIRONMENT", "development"));

        // host:port, port must be numeric
        let bind_address = get_or_default("BIND_ADDRESS", "0.0.0.0:8080");
        match bind_address.rsplit_once(':') {
            Some((host, port)) if !host.is_empty() && port.parse::<u16>().is_ok() => {},
            _ => {
                return Err(ConfigError::InvalidValue(
                    "BIND_ADDRESS".to_string(),
                    format!("expected host:port, got {}", bind_address),
                ))
            },
        }

        let cors_allowed_origins: Vec<String> = get_or_default("CORS_ALLOWED_ORIGINS", "*")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let api_url = get_or_default("BACKEND_API_URL", "http://localhost:8000/api");
        match Url::parse(&api_url) {
            Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => {},
            _ => {
                return Err(ConfigError::InvalidValue(
                    "BACKEND_API_URL".to_string(),
                    "must be an absolute http(s) URL".to_string(),
                ))
            },
        }
        let api_url = api_url.trim_end_matches('/').to_string();

        let api_token = env::var("BACKEND_API_TOKEN")
            .ok()
            .filter(|token| !token.trim().is_empty());

        let timeout_secs = parse_u64_or_default("BACKEND_TIMEOUT_SECS", "15")?;
        if timeout_secs == 0 {
            return Err(ConfigError::InvalidValue(
                "BACKEND_TIMEOUT_SECS".to_string(),
                "must be greater than zero".to_string(),
            ));
        }

        let user_agent = get_or_default("BACKEND_USER_AGENT", "PhishGuard-Core/1.0");
        let enable_secondary_ml = parse_bool_or_default("ENABLE_SECONDARY_ML", "true");

        if environment == Environment::Production && api_token.is_none() {
            return Err(ConfigError::MissingVar("BACKEND_API_TOKEN".to_string()));
        }

        Ok(Self {
            environment,
            server: ServerConfig {
                bind_address,
                cors_allowed_origins,
            },
            backend: BackendConfig {
                api_url,
                api_token,
                timeout_secs,
                user_agent,
            },
            analysis: AnalysisConfig {
                enable_secondary_ml,
            },
        })
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:8000/api".to_string(),
            api_token: None,
            timeout_secs: 15,
            user_agent: "PhishGuard-Core/1.0".to_string(),
        }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            enable_secondary_ml: true,
        }
    }
}
