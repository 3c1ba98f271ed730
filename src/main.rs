//! Mavvrik Cost Intelligence MCP server.
//!
//! Runs the FinOps tool surface over stdio for MCP-capable hosts (VS Code
//! Copilot, Claude Desktop, and friends).
//!
//! ## Usage
//!
//! ```bash
//! # Serve on stdio (the normal mode; the host spawns this)
//! mavvrik-mcp
//!
//! # With verbose logging on stderr
//! mavvrik-mcp -v
//! ```
//!
//! Configuration comes from the environment (or a `.env` file):
//! `MAVVRIK_API_URL`, `MAVVRIK_API_KEY`, `MAVVRIK_TENANT_ID`.

use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

use mavvrik_client::GraphqlClient;
use mavvrik_core::{init_logging, Settings};
use mavvrik_finops::FinopsTools;

mod server;

use server::MavvrikServer;

/// Mavvrik Cost Intelligence MCP server
#[derive(Parser, Debug)]
#[command(name = "mavvrik-mcp")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging (stderr; stdout carries the protocol)
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // .env first, so from_env sees it; a missing file is fine.
    dotenvy::dotenv().ok();

    if let Err(e) = init_logging(cli.verbose) {
        eprintln!("Failed to initialize logging: {e}");
        return ExitCode::from(1);
    }

    match run().await {
        Ok(()) => {
            info!("Mavvrik MCP server exited normally");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Mavvrik MCP server error: {e}");
            eprintln!("Error: {e}");
            ExitCode::from(1)
        }
    }
}

async fn run() -> anyhow::Result<()> {
    info!("Initializing Mavvrik MCP server (service mode)");

    let settings = Settings::from_env();
    let client = GraphqlClient::new(&settings)?;
    let finops = FinopsTools::new(client, &settings);

    info!("FinOps tools registered; serving on stdio");
    MavvrikServer::new(finops).serve_stdio().await
}
