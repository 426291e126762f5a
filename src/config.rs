use anyhow::{Context, Result};
use std::env;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub divide: DivideConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub instance_id: String,
}

#[derive(Debug, Clone)]
pub struct DivideConfig {
    pub mode: DivisionMode,
}

/// How `/divide` turns two integers into a quotient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DivisionMode {
    /// Widen both operands first: 7 / 2 = 3.5
    #[default]
    Exact,
    /// Integer division, then widen: 7 / 2 = 3.0
    Truncate,
}

#[derive(Debug, Error)]
#[error("unknown division mode '{0}', expected 'exact' or 'truncate'")]
pub struct ParseDivisionModeError(String);

impl FromStr for DivisionMode {
    type Err = ParseDivisionModeError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "exact" => Ok(Self::Exact),
            "truncate" => Ok(Self::Truncate),
            _ => Err(ParseDivisionModeError(s.to_string())),
        }
    }
}

impl fmt::Display for DivisionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact => write!(f, "exact"),
            Self::Truncate => write!(f, "truncate"),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        Ok(Config {
            server: ServerConfig {
                host: env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env::var("API_PORT")
                    .unwrap_or_else(|_| "8080".to_string())
                    .parse()
                    .context("API_PORT must be a valid port number")?,
                // Reported by /health. Falls back to HOSTNAME (Docker/Kubernetes), then "unknown".
                instance_id: env::var("INSTANCE_ID")
                    .or_else(|_| env::var("HOSTNAME"))
                    .unwrap_or_else(|_| "unknown".to_string()),
            },
            divide: DivideConfig {
                mode: env::var("DIVISION_MODE")
                    .unwrap_or_else(|_| "exact".to_string())
                    .parse()
                    .context("DIVISION_MODE must be 'exact' or 'truncate'")?,
            },
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
