//! Configuration loading and resolution
//!
//! Every service setting resolves in the same priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable
//! 3. TOML config file
//! 4. Compiled default (fallback)
//!
//! A missing TOML file is not an error: the service starts on defaults.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};

pub const ENV_BIND_ADDRESS: &str = "GALLERY_BIND_ADDRESS";
pub const ENV_PORT: &str = "GALLERY_PORT";
pub const ENV_LOG_LEVEL: &str = "GALLERY_LOG_LEVEL";
/// Extra CORS origin for a deployed frontend
pub const ENV_FRONTEND_URL: &str = "GALLERY_FRONTEND_URL";

/// Compiled-in fallback values
#[derive(Debug, Clone)]
pub struct CompiledDefaults {
    pub bind_address: String,
    pub port: u16,
    pub log_level: String,
    pub cors_allowed_origins: Vec<String>,
}

impl Default for CompiledDefaults {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1".to_string(),
            port: 3001,
            log_level: "info".to_string(),
            cors_allowed_origins: vec!["http://localhost:3000".to_string()],
        }
    }
}

/// `[logging]` table of the TOML file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// tracing filter level (trace, debug, info, warn, error)
    pub level: Option<String>,
}

/// On-disk configuration file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub bind_address: Option<String>,
    pub port: Option<u16>,
    pub cors_allowed_origins: Vec<String>,
    pub logging: LoggingConfig,
}

/// Values supplied on the command line
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub bind_address: Option<String>,
    pub port: Option<u16>,
    pub log_level: Option<String>,
}

/// Fully resolved service configuration
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceConfig {
    pub bind_address: String,
    pub port: u16,
    pub log_level: String,
    pub cors_allowed_origins: Vec<String>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        let defaults = CompiledDefaults::default();
        Self {
            bind_address: defaults.bind_address,
            port: defaults.port,
            log_level: defaults.log_level,
            cors_allowed_origins: defaults.cors_allowed_origins,
        }
    }
}

impl ServiceConfig {
    /// Socket address the HTTP listener binds to
    ///
    /// `bind_address` is a bare IPv4 or IPv6 address (`127.0.0.1`, `::1`).
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self.bind_address.parse().map_err(|e| {
            Error::Config(format!("Invalid bind address {:?}: {}", self.bind_address, e))
        })?;
        Ok(SocketAddr::new(ip, self.port))
    }

    /// TOML form of the resolved configuration, suitable for `write_toml_config`
    pub fn to_toml(&self) -> TomlConfig {
        TomlConfig {
            bind_address: Some(self.bind_address.clone()),
            port: Some(self.port),
            cors_allowed_origins: self.cors_allowed_origins.clone(),
            logging: LoggingConfig {
                level: Some(self.log_level.clone()),
            },
        }
    }
}

/// Default config file location for the platform
///
/// `~/.config/gallery/config.toml` on Linux, the equivalent per-user config
/// directory elsewhere.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("gallery").join("config.toml"))
}

/// Load a TOML config file.
///
/// Missing file → `TomlConfig::default()`.
/// Unreadable or malformed file → error.
///
/// Runs before logging is initialized, so the caller reports which file was used.
pub fn load_toml_config(path: &Path) -> Result<TomlConfig> {
    if !path.exists() {
        return Ok(TomlConfig::default());
    }

    let content = std::fs::read_to_string(path)?;
    let config: TomlConfig = toml::from_str(&content)?;
    Ok(config)
}

/// Write a TOML config file atomically (temp file + rename)
pub fn write_toml_config(config: &TomlConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let content = toml::to_string_pretty(config)
        .map_err(|e| Error::Config(format!("Serialize TOML failed: {}", e)))?;

    let tmp_path = path.with_extension("toml.tmp");
    std::fs::write(&tmp_path, content)?;
    std::fs::rename(&tmp_path, path)?;

    Ok(())
}

fn env_value(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Resolve the service configuration from all tiers
pub fn resolve_service_config(
    overrides: &ConfigOverrides,
    toml_config: &TomlConfig,
) -> Result<ServiceConfig> {
    let defaults = CompiledDefaults::default();

    let bind_address = overrides
        .bind_address
        .clone()
        .or_else(|| env_value(ENV_BIND_ADDRESS))
        .or_else(|| toml_config.bind_address.clone())
        .unwrap_or(defaults.bind_address);

    let env_port = match env_value(ENV_PORT) {
        Some(raw) => Some(raw.parse::<u16>().map_err(|e| {
            Error::Config(format!("{} must be a port number, got {:?}: {}", ENV_PORT, raw, e))
        })?),
        None => None,
    };
    let port = overrides
        .port
        .or(env_port)
        .or(toml_config.port)
        .unwrap_or(defaults.port);

    let log_level = overrides
        .log_level
        .clone()
        .or_else(|| env_value(ENV_LOG_LEVEL))
        .or_else(|| toml_config.logging.level.clone())
        .unwrap_or(defaults.log_level);

    let mut cors_allowed_origins = if toml_config.cors_allowed_origins.is_empty() {
        defaults.cors_allowed_origins
    } else {
        toml_config.cors_allowed_origins.clone()
    };
    if let Some(frontend) = env_value(ENV_FRONTEND_URL) {
        if !cors_allowed_origins.contains(&frontend) {
            cors_allowed_origins.push(frontend);
        }
    }

    Ok(ServiceConfig {
        bind_address,
        port,
        log_level,
        cors_allowed_origins,
    })
}
