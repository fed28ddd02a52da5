//! To-do MCP Server - Main Entry Point
//!
//! This is the main entry point for the to-do MCP server application.
//! The actual implementation is in the `todo_mcp` library.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use mcp_attr::server::serve_stdio;
use todo_mcp::TodoServerHandler;
use todo_mcp::storage::DEFAULT_KEY;
use tracing_subscriber::EnvFilter;

/// To-do MCP Server - single-list to-do management via Model Context Protocol
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the store file (TOML)
    file: String,

    /// Name of the record holding the item list
    #[arg(long, default_value = DEFAULT_KEY)]
    key: String,

    /// Initial filter location (#/, #/active, #/completed)
    #[arg(long, default_value = "#/")]
    filter: String,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

/// Log to stderr; stdout carries the MCP protocol
fn init_logging(default_level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .with_context(|| format!("Invalid log level '{}'", default_level))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Check if no arguments were provided (except the program name)
    if std::env::args().len() == 1 {
        // No arguments provided, show help and exit with error code
        let mut cmd = Args::command();
        cmd.print_help().ok();
        println!(); // Add a newline after help
        std::process::exit(2);
    }

    let args = Args::parse();
    init_logging(&args.log_level)?;

    let handler = TodoServerHandler::new(&args.file, &args.key, &args.filter)?;
    tracing::info!("serving MCP over stdio");
    serve_stdio(handler).await?;
    Ok(())
}
