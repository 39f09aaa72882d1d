//! Command line interface.
//!
//! `-h` is taken by `--header`, so clap's automatic help flag is replaced
//! with a long-only `--help`.

use clap::{ArgAction, Parser};
use std::path::PathBuf;

use crate::config::{load_config, ConfigError, ServerConfig};

#[derive(Debug, Parser)]
#[command(name = "in2http")]
#[command(version, about = "Serve standard input as the body of every HTTP response", long_about = None)]
#[command(disable_help_flag = true)]
pub struct Cli {
    /// Serve on this port [default: 8080]
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Additional header(s) as "Name: Value"; may be repeated
    #[arg(short = 'h', long = "header", value_name = "NAME: VALUE", action = ArgAction::Append)]
    pub headers: Vec<String>,

    /// IP address to bind; the default `::` also accepts IPv4 [default: ::]
    #[arg(long)]
    pub host: Option<String>,

    /// TOML config file; command line flags take precedence
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print help
    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,
}

impl Cli {
    /// Build the effective config: defaults, then the config file, then flags.
    pub fn into_config(self) -> Result<ServerConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => ServerConfig::default(),
        };

        config.apply_overrides(self.host, self.port, self.headers);

        // Flags may have replaced validated file values.
        crate::config::validation::validate_config(&config).map_err(ConfigError::Validation)?;

        Ok(config)
    }
}
