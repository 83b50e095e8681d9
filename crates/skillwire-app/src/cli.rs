//! Command-line interface

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use shared::ServerConfig;

#[derive(Debug, Parser)]
#[command(name = "skillwire")]
#[command(about = "Skillwire - explicit dependency wiring demo with an HTTP facade")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// YAML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// Run the console demo once (default)
    Run,
    /// Print the API summary and serve the HTTP facade
    Serve(ServeArgs),
    /// List the skills that can be configured
    Skills,
}

#[derive(Debug, Clone, PartialEq, Eq, Args)]
pub struct ServeArgs {
    /// Interface to bind, overrides server.host
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind, overrides server.port
    #[arg(short, long)]
    pub port: Option<u16>,
}

impl ServeArgs {
    /// Apply command-line overrides on top of the file configuration
    pub fn apply(&self, server: &mut ServerConfig) {
        if let Some(host) = &self.host {
            server.host = host.clone();
        }
        if let Some(port) = self.port {
            server.port = port;
        }
    }
}
