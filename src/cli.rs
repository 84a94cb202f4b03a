use super::{
    MergingtonResult,
    config::{Config, DEFAULT_CONFIG_PATH},
};
use clap::Parser;
use dotenvy::dotenv;

use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(
    author = "Mergington High School",
    version,
    about = "View and sign up for extracurricular activities at Mergington High School",
    help_template = r#"
{name} v{version} by {author}
{about}

{usage-heading} {usage}

{all-args}
"#
)]
pub struct Cli {
    #[clap(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,
    #[clap(short, long, help = "Toggle TLS")]
    pub tls: bool,
    #[clap(short, long, help = "Port to listen on")]
    pub port: Option<u16>,
    #[clap(short, long, help = "IP to listen on")]
    pub ip: Option<String>,
    #[clap(short, long, help = "Database connection string, overrides DATABASE_URL")]
    pub database_url: Option<String>,
}

/// A loaded config plus a description of every value that did not come from
/// the config file, logged once the subscriber is up.
#[derive(Debug)]
pub struct LoadedConfig {
    pub config: Config,
    pub overrides: Vec<String>,
}

impl Cli {
    /// Layers the sources in order: config file, then environment, then flags.
    pub fn into_config(self) -> MergingtonResult<LoadedConfig> {
        let mut config = Config::load_from_file(&self.config)?;
        let mut overrides = Vec::new();

        if config.apply_env() {
            overrides.push("database url: from DATABASE_URL".to_string());
        }

        if self.tls {
            config.tls.enable = true;
            overrides.push("tls: true".to_string());
        }

        if let Some(port) = self.port {
            config.network.port = port;
            overrides.push(format!("port: {port}"));
        }

        if let Some(ip) = self.ip {
            overrides.push(format!("ip: {ip}"));
            config.network.ip = ip;
        }

        if let Some(url) = self.database_url {
            config.database.url = url;
            overrides.push("database url: from --database-url".to_string());
        }

        Ok(LoadedConfig { config, overrides })
    }
}

pub fn init() -> MergingtonResult<LoadedConfig> {
    dotenv().ok();
    Cli::parse().into_config()
}
