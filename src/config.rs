use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};

// ============================================
// Environment variable name constants
// Shared between config parsing and the /api/config endpoint
// ============================================
pub mod env {
    pub const PORT: &str = "PORT";
    pub const BIND_ADDRESS: &str = "BIND_ADDRESS";
    pub const HEALTH_PORT: &str = "HEALTH_PORT";
    pub const LOG_FORMAT: &str = "LOG_FORMAT";
    pub const LOG_LEVEL: &str = "LOG_LEVEL";
    pub const ID_STRATEGY: &str = "ID_STRATEGY";
}

/// How record identifiers are generated
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    /// Random UUID v4
    Uuid,
    /// Monotonic counter starting at 1
    Sequential,
}

impl std::fmt::Display for IdStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IdStrategy::Uuid => write!(f, "uuid"),
            IdStrategy::Sequential => write!(f, "sequential"),
        }
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Show version information
    Version,
}

#[derive(Parser, Debug, Clone)]
#[command(
    name = "cyberguardian",
    version,
    about = "Cybersecurity education dashboard API",
    long_about = "Serves an in-memory catalog of threats, security tools, glossary terms, blog posts and analytics samples over REST, plus a password strength checker."
)]
pub struct Config {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// API server port
    #[arg(long, env = env::PORT, default_value = "3000")]
    pub port: u16,

    /// Address the API server binds to
    #[arg(long, env = env::BIND_ADDRESS, default_value = "0.0.0.0")]
    pub bind_address: String,

    /// Probe server port (0 to disable)
    #[arg(long, env = env::HEALTH_PORT, default_value = "8080")]
    pub health_port: u16,

    /// Log format: json or pretty
    #[arg(long, env = env::LOG_FORMAT, default_value = "json")]
    pub log_format: String,

    /// Log level: trace, debug, info, warn, error
    #[arg(long, env = env::LOG_LEVEL, default_value = "info")]
    pub log_level: String,

    /// Identifier generation strategy
    #[arg(long, env = env::ID_STRATEGY, value_enum, default_value = "uuid")]
    pub id_strategy: IdStrategy,
}

impl Config {
    pub fn from_args() -> Self {
        Config::parse()
    }

    /// Validate settings that clap cannot check on its own
    pub fn validate(&self) -> Result<(), String> {
        if self.bind_address.parse::<IpAddr>().is_err() {
            return Err(format!(
                "{} is not a valid IP address: {}",
                env::BIND_ADDRESS,
                self.bind_address
            ));
        }
        if self.health_port != 0 && self.health_port == self.port {
            return Err(format!(
                "{} and {} must differ",
                env::PORT,
                env::HEALTH_PORT
            ));
        }
        Ok(())
    }

    /// Socket address of the API server
    pub fn api_addr(&self) -> Result<SocketAddr, String> {
        let ip: IpAddr = self
            .bind_address
            .parse()
            .map_err(|e| format!("invalid bind address {}: {e}", self.bind_address))?;
        Ok(SocketAddr::new(ip, self.port))
    }

    /// Whether the probe server should be started
    pub fn probes_enabled(&self) -> bool {
        self.health_port != 0
    }
}
