//! Application state shared across handlers

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::config::{Config, IdStrategy};
use crate::storage::Store;

/// Snapshot of the effective configuration, exposed by `/api/config`
#[derive(Debug, Clone)]
pub struct ConfigInfo {
    pub port: u16,
    pub bind_address: String,
    pub health_port: u16,
    pub log_format: String,
    pub log_level: String,
    pub id_strategy: IdStrategy,
}

impl From<&Config> for ConfigInfo {
    fn from(config: &Config) -> Self {
        Self {
            port: config.port,
            bind_address: config.bind_address.clone(),
            health_port: config.health_port,
            log_format: config.log_format.clone(),
            log_level: config.log_level.clone(),
            id_strategy: config.id_strategy,
        }
    }
}

/// Process facts gathered once at startup
#[derive(Debug)]
pub struct RuntimeInfo {
    pub hostname: String,
    started_at: Instant,
}

impl RuntimeInfo {
    pub fn new() -> Self {
        let hostname = hostname::get()
            .ok()
            .and_then(|h| h.into_string().ok())
            .filter(|h| !h.is_empty())
            .unwrap_or_else(|| "unknown".to_string());
        Self {
            hostname,
            started_at: Instant::now(),
        }
    }

    pub fn uptime(&self) -> Duration {
        self.started_at.elapsed()
    }

    pub fn uptime_string(&self) -> String {
        format_uptime(self.uptime())
    }
}

impl Default for RuntimeInfo {
    fn default() -> Self {
        Self::new()
    }
}

/// "3d 4h 5m 6s", omitting leading zero units
pub(crate) fn format_uptime(uptime: Duration) -> String {
    let secs = uptime.as_secs();
    let (days, hours, minutes, seconds) =
        (secs / 86_400, (secs % 86_400) / 3600, (secs % 3600) / 60, secs % 60);

    if days > 0 {
        format!("{days}d {hours}h {minutes}m {seconds}s")
    } else if hours > 0 {
        format!("{hours}h {minutes}m {seconds}s")
    } else if minutes > 0 {
        format!("{minutes}m {seconds}s")
    } else {
        format!("{seconds}s")
    }
}

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Store>,
    pub config: Arc<ConfigInfo>,
    pub runtime: Arc<RuntimeInfo>,
}

impl AppState {
    pub fn new(store: Store, config: ConfigInfo) -> Self {
        Self {
            store: Arc::new(store),
            config: Arc::new(config),
            runtime: Arc::new(RuntimeInfo::new()),
        }
    }
}
