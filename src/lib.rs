//! # Arke zod CLI Library
//!
//! Core library functionality for the `arke-zod` CLI tool.

use clap::Parser;

pub mod client;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod model;
pub mod output_path;
pub mod schema;

/// CLI tool that turns Arke structs into Zod schemas
///
/// Every arke of a project is fetched from its backend and written out as a
/// TypeScript module exporting a Zod schema and its inferred type.
#[derive(Parser)]
#[command(
    name = "arke-zod",
    version,
    about = "Turn arke structs into zod schemas",
    long_about = "Fetches the struct of every arke in a project from its Arke backend and\ngenerates one Zod schema module per struct, plus built-in schemas such as the unit envelope."
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Option<commands::Commands>,
}
