//! # arke-zod
//!
//! Turns the structs of an Arke project into Zod validation schemas.
//!
//! ## Quick Start
//!
//! ```bash
//! # Register a project
//! arke-zod project create
//!
//! # Generate schemas into lib/validations/arke
//! arke-zod pull my-project
//! ```
//!
//! ## Configuration
//!
//! Projects and their session tokens are stored in
//! `~/.config/arke-zod/projects.yaml`, or in the file named by
//! `ARKE_ZOD_CONFIG_PATH`. Log verbosity follows `RUST_LOG`.

use anyhow::Result;
use arke_zod::{commands, Cli};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let cmd = cli.cmd.unwrap_or_else(|| {
        eprintln!("No command provided. Use --help to see available commands.");
        std::process::exit(1);
    });
    commands::run(cmd).await
}
