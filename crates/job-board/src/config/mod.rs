use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

use crate::board::{BoardOptions, LatencyProfile, PaginationMode, WritePolicy};

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub board: BoardOptions,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            board: board_options_from_env()?,
        })
    }
}

fn board_options_from_env() -> Result<BoardOptions, ConfigError> {
    let simulate_latency = match env::var("APP_SIMULATE_LATENCY") {
        Ok(raw) => parse_flag(&raw).ok_or(ConfigError::InvalidFlag {
            name: "APP_SIMULATE_LATENCY",
            value: raw,
        })?,
        Err(_) => true,
    };

    let write_policy = match env::var("APP_WRITE_POLICY") {
        Ok(raw) => WritePolicy::parse(&raw).ok_or(ConfigError::InvalidWritePolicy(raw))?,
        Err(_) => WritePolicy::default(),
    };

    let pagination = match env::var("APP_PAGINATION") {
        Ok(raw) => PaginationMode::parse(&raw).ok_or(ConfigError::InvalidPagination(raw))?,
        Err(_) => PaginationMode::default(),
    };

    Ok(BoardOptions {
        latency: if simulate_latency {
            LatencyProfile::standard()
        } else {
            LatencyProfile::instant()
        },
        write_policy,
        pagination,
    })
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing and metrics controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidFlag { name: &'static str, value: String },
    InvalidWritePolicy(String),
    InvalidPagination(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidFlag { name, value } => {
                write!(f, "{name} must be true or false, got '{value}'")
            }
            ConfigError::InvalidWritePolicy(value) => {
                write!(f, "APP_WRITE_POLICY must be 'persist' or 'echo', got '{value}'")
            }
            ConfigError::InvalidPagination(value) => {
                write!(f, "APP_PAGINATION must be 'unsliced' or 'sliced', got '{value}'")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPort
            | ConfigError::InvalidFlag { .. }
            | ConfigError::InvalidWritePolicy(_)
            | ConfigError::InvalidPagination(_) => None,
        }
    }
}
