use std::env;

use clap::Parser;

use crate::error::{AppError, AppResult};

/// Application configuration loaded from environment variables
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub display: DisplayConfig,
}

/// HTTP listener configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

/// Log output format
#[derive(Debug, Clone, PartialEq)]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Thought display configuration
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayConfig {
    /// Whether recorded thoughts are printed to stdout
    pub enabled: bool,
    /// Whether headers are colorized
    pub color: bool,
}

/// Command-line overrides for the environment configuration
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "sequential-thinking-server", version, about)]
pub struct CliArgs {
    /// Address to bind (overrides HOST)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on (overrides PORT)
    #[arg(long)]
    pub port: Option<u16>,

    /// Log filter level (overrides LOG_LEVEL)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Print thoughts without color
    #[arg(long)]
    pub no_color: bool,

    /// Do not print recorded thoughts
    #[arg(long, short)]
    pub quiet: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> AppResult<Self> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let server = ServerConfig {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: match env::var("PORT") {
                Ok(raw) => raw.trim().parse().map_err(|_| AppError::Config {
                    message: format!("PORT must be a port number, got '{}'", raw),
                })?,
                Err(_) => 8000,
            },
        };

        let logging = LoggingConfig {
            level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            format: match env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "pretty".to_string())
                .to_lowercase()
                .as_str()
            {
                "json" => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
        };

        let display = DisplayConfig {
            enabled: !env_flag("DISABLE_THOUGHT_LOGGING", false)?,
            color: env_flag("THOUGHT_COLOR", true)?,
        };

        Ok(Config {
            server,
            logging,
            display,
        })
    }

    /// Apply command-line overrides on top of the environment
    pub fn with_overrides(mut self, args: &CliArgs) -> Self {
        if let Some(host) = &args.host {
            self.server.host = host.clone();
        }
        if let Some(port) = args.port {
            self.server.port = port;
        }
        if let Some(level) = &args.log_level {
            self.logging.level = level.clone();
        }
        if args.no_color {
            self.display.color = false;
        }
        if args.quiet {
            self.display.enabled = false;
        }
        self
    }
}

impl ServerConfig {
    /// `host:port` string handed to the listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            color: true,
        }
    }
}

fn env_flag(name: &str, default: bool) -> AppResult<bool> {
    match env::var(name) {
        Ok(raw) => parse_flag(&raw).ok_or_else(|| AppError::Config {
            message: format!("{} must be a boolean, got '{}'", name, raw),
        }),
        Err(_) => Ok(default),
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
