pub mod toml_config;

pub use toml_config::TomlConfig;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_bind_address, validate_port, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_BIND: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "receipt-points")]
#[command(about = "HTTP service that scores receipts and serves the points back by id")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_BIND)]
    pub bind: String,

    #[arg(long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    #[arg(long, help = "Load server settings from a TOML file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl ConfigProvider for CliConfig {
    fn bind_address(&self) -> &str {
        &self.bind
    }

    fn port(&self) -> u16 {
        self.port
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_bind_address("bind", &self.bind)?;
        validate_port("port", self.port)?;
        Ok(())
    }
}
