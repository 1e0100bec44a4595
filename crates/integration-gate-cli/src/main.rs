// crates/integration-gate-cli/src/main.rs
// ============================================================================
// Module: Integration Gate CLI Entry Point
// Description: Command dispatcher for the mock integration gateway.
// Purpose: Provide a small CLI for running the local HTTP gateway.
// Dependencies: clap, integration-gate-server, tokio
// ============================================================================

//! ## Overview
//! The CLI boots the gateway HTTP server. The gateway needs no environment
//! configuration; only the bind address and body limit are adjustable.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::process::ExitCode;

use clap::Args;
use clap::Parser;
use clap::Subcommand;
use integration_gate_server::DEFAULT_BIND;
use integration_gate_server::DEFAULT_MAX_BODY_BYTES;
use integration_gate_server::GatewayConfig;
use integration_gate_server::GatewayServer;
use integration_gate_server::ServerError;

// ============================================================================
// SECTION: CLI Definition
// ============================================================================

/// Top-level CLI arguments.
#[derive(Debug, Parser)]
#[command(name = "integration-gate", version, about = "Mock integration gateway")]
struct Cli {
    /// Command to run.
    #[command(subcommand)]
    command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
enum Command {
    /// Runs the gateway HTTP server.
    Serve(ServeArgs),
}

/// Arguments for the serve command.
#[derive(Debug, Args)]
struct ServeArgs {
    /// Socket address to bind.
    #[arg(long, default_value = DEFAULT_BIND)]
    bind: String,
    /// Maximum request body size in bytes.
    #[arg(long, default_value_t = DEFAULT_MAX_BODY_BYTES)]
    max_body_bytes: usize,
}

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point.
#[allow(clippy::print_stderr, reason = "CLI error reporting goes to stderr.")]
#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("integration-gate: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Dispatches the parsed command.
async fn run(cli: Cli) -> Result<(), ServerError> {
    match cli.command {
        Command::Serve(args) => {
            let config = GatewayConfig {
                bind: args.bind,
                max_body_bytes: args.max_body_bytes,
            };
            GatewayServer::from_config(config)?.serve().await
        }
    }
}
