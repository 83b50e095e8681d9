//! # Skillwire - Explicit Dependency Wiring Demo
//!
//! This is the main entry point that wires everything together.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  main.rs (this file) - Dependency Injection & Wiring           │
//! │    │                                                            │
//! │    ├── Loads: AppConfig (shared)                               │
//! │    ├── Creates: skills via SkillCatalog (skills)               │
//! │    ├── Creates: Employee (domain aggregate)                    │
//! │    ├── Creates: StdoutOutput (adapter)                         │
//! │    └── Runs: DemoRunner, or OpenApiDemoRunner + HTTP server    │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

mod cli;
mod wiring;

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use shared::{AppConfig, LogConfig};
use skills::SkillCatalog;
use skillwire_adapter::controller::http;
use skillwire_adapter::output::StdoutOutput;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use wiring::Wiring;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref()).with_context(|| match &cli.config {
        Some(path) => format!("failed to load configuration from {}", path.display()),
        None => "failed to load default configuration".to_string(),
    })?;

    if let Err(e) = init_logging(&config.log) {
        eprintln!("tracing init failed: {}", e);
    }

    let catalog = SkillCatalog::builtin();

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => {
            let wiring = Wiring::build(&config, &catalog, Arc::new(StdoutOutput::new()))?;
            wiring.demo_runner().run()?;
        }

        Commands::Serve(args) => {
            args.apply(&mut config.server);
            config.validate()?;

            let wiring = Wiring::build(&config, &catalog, Arc::new(StdoutOutput::new()))?;
            let bind_addr = config.server.bind_addr();
            let server = http::bind(&bind_addr, wiring.http_state())
                .with_context(|| format!("failed to bind {}", bind_addr))?;

            wiring.openapi_runner(config.server.base_url()).run()?;
            server.await?;
            info!("HTTP server stopped");
        }

        Commands::Skills => {
            for id in catalog.ids() {
                let skill = catalog.create(id)?;
                println!("{:<10} {}", id, skill.name());
            }
        }
    }

    Ok(())
}

/// Initialize logging
///
/// `RUST_LOG` takes precedence over `log.filter`. Logs always go to stderr;
/// stdout carries only the demo transcript. Fails when a global subscriber
/// is already installed.
fn init_logging(log: &LogConfig) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.filter));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if log.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    }
}
