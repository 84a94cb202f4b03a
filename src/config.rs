use serde::{Deserialize, Serialize};
use std::{
    fs,
    net::Ipv4Addr,
    path::{Path, PathBuf},
};
use tracing::Level;

use super::{IoResult, MergingtonResult};

pub const DEFAULT_CONFIG_PATH: &str = "mergington.toml";
pub const DEFAULT_DATABASE_URL: &str = "sqlite://mergington.db?mode=rwc";

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    pub site: SiteConfig,
    pub database: DatabaseConfig,
    pub tls: TlsConfig,
    pub network: NetworkConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct SiteConfig {
    /// Directory served under `/static`.
    pub root: PathBuf,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TlsConfig {
    pub cert: Option<PathBuf>,
    pub key: Option<PathBuf>,
    pub enable: bool,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct NetworkConfig {
    pub ip: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            site: SiteConfig {
                root: PathBuf::from("static"),
            },
            database: DatabaseConfig {
                url: DEFAULT_DATABASE_URL.to_string(),
                max_connections: 10,
                min_connections: 1,
            },
            tls: TlsConfig {
                cert: None,
                key: None,
                enable: false,
            },
            network: NetworkConfig {
                ip: "0.0.0.0".to_string(),
                port: 8000,
            },
            logging: LoggingConfig {
                level: "INFO".to_string(),
            },
        }
    }
}

impl Config {
    /// Reads the config at `path`, writing out the defaults first if the
    /// file does not exist yet.
    pub fn load_from_file(path: &Path) -> MergingtonResult<Self> {
        let config = match fs::read_to_string(path) {
            Ok(config) => config,
            Err(e) => {
                if e.kind() == std::io::ErrorKind::NotFound {
                    let config = Config::default();
                    config.write_to(path)?;
                    return Ok(config);
                }
                return Err(e.into());
            }
        };

        let config: Config = toml::from_str(&config)?;

        Ok(config)
    }

    /// `DATABASE_URL` wins over whatever the file says. Returns whether it
    /// was applied.
    pub fn apply_env(&mut self) -> bool {
        match std::env::var("DATABASE_URL") {
            Ok(url) if !url.trim().is_empty() => {
                self.database.url = url;
                true
            }
            _ => false,
        }
    }

    pub fn site(&self) -> &SiteConfig {
        &self.site
    }

    pub fn database(&self) -> &DatabaseConfig {
        &self.database
    }

    pub fn tls(&self) -> &TlsConfig {
        &self.tls
    }

    pub fn network(&self) -> &NetworkConfig {
        &self.network
    }

    pub fn logging(&self) -> &LoggingConfig {
        &self.logging
    }

    pub fn level(&self) -> MergingtonResult<Level> {
        Ok(self.logging.level.trim().parse::<Level>()?)
    }

    pub fn write_to(&self, path: &Path) -> IoResult<()> {
        let config = toml::to_string_pretty(self).map_err(std::io::Error::other)?;

        fs::write(path, config)?;
        Ok(())
    }
}

pub fn string_to_ip(ip: &str) -> Result<Ipv4Addr, String> {
    ip.trim()
        .parse::<Ipv4Addr>()
        .map_err(|e| format!("invalid ip address {ip:?}: {e}"))
}
