use anyhow::{Context, Result};
use clap::Parser;
use std::env;
use std::path::PathBuf;

/// Command line overrides for the environment configuration
#[derive(Debug, Default, Parser)]
#[command(name = "route-data-server")]
#[command(about = "Mock REST data server backed by a JSON file", long_about = None)]
pub struct Cli {
    /// Path of the JSON data file, used for both load and save
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub host: Option<String>,

    #[arg(short, long)]
    pub port: Option<u16>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub data_file: PathBuf,
    pub service_port: u16,
    pub service_host: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup
    pub fn from_vars<F>(var: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let data_file = var("DATA_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("./config.json"));

        let service_port = var("SERVICE_PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse::<u16>()
            .context("SERVICE_PORT must be a valid port number (0-65535)")?;

        let service_host = var("SERVICE_HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        Ok(Config {
            data_file,
            service_port,
            service_host,
        })
    }

    /// Apply command line overrides on top of this configuration
    pub fn with_cli(mut self, cli: Cli) -> Self {
        if let Some(path) = cli.config {
            self.data_file = path;
        }
        if let Some(host) = cli.host {
            self.service_host = host;
        }
        if let Some(port) = cli.port {
            self.service_port = port;
        }
        self
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.service_host, self.service_port)
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Data file: {}", self.data_file.display());
        tracing::info!("  Service listening on: {}", self.bind_address());
    }
}
