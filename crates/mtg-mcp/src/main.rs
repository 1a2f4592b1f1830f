//! Magic: The Gathering MCP Server
//!
//! A Model Context Protocol server answering card and Comprehensive Rules
//! questions.
//!
//! # Usage
//!
//! ```bash
//! mtg-mcp [--config <file>] [--data-root <dir>] [--scryfall-url <url>]
//! mtg-mcp build-corpus [--input <file> | --url <url>] [--out <dir>]
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Control log verbosity (default: `mtg_mcp=info`)
//!
//! # Protocol
//!
//! The server communicates via JSON-RPC 2.0 over stdio:
//! - Requests/responses go through stdout
//! - Logs go to stderr (to avoid interfering with the protocol)

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use mtg_corpus::DEFAULT_RULES_URL;
use mtg_mcp::corpus_build::{RulesSource, build_corpus};
use mtg_mcp::{MtgMcpServer, ServerConfig, ToolContext};

/// MCP server for Magic: The Gathering cards and rules
#[derive(Parser, Debug)]
#[command(name = "mtg-mcp")]
#[command(about = "MCP server for Magic: The Gathering cards and rules")]
#[command(version)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Rules corpus root (overrides the configuration file)
    #[arg(long)]
    data_root: Option<PathBuf>,

    /// Scryfall API base URL (overrides the configuration file)
    #[arg(long)]
    scryfall_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
enum Commands {
    /// Build the rules corpus from the published Comprehensive Rules text
    BuildCorpus {
        /// Local copy of the rules text
        #[arg(short, long, conflicts_with = "url")]
        input: Option<PathBuf>,

        /// Download the rules text from this URL
        #[arg(long)]
        url: Option<String>,

        /// Output directory (defaults to the configured data root)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging to stderr (stdout is reserved for MCP protocol)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("mtg_mcp=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = ServerConfig::load_or_default(cli.config.as_deref())?;
    if let Some(data_root) = cli.data_root {
        config.data_root = data_root;
    }
    if let Some(url) = cli.scryfall_url {
        config.scryfall.base_url = url;
    }

    match cli.command {
        Some(Commands::BuildCorpus { input, url, out }) => {
            let source = match input {
                Some(path) => RulesSource::File(path),
                None => RulesSource::Url(url.unwrap_or_else(|| DEFAULT_RULES_URL.to_string())),
            };
            let out = out.unwrap_or(config.data_root);
            let summary = build_corpus(&source, &out).await?;
            eprintln!(
                "Wrote {} rules and {} glossary terms to {}",
                summary.rules,
                summary.glossary_terms,
                out.display()
            );
        }
        None => {
            tracing::info!(
                data_root = %config.data_root.display(),
                scryfall = %config.scryfall.base_url,
                "Starting mtg-mcp server"
            );
            let context = ToolContext::from_config(&config)?;
            MtgMcpServer::new(context).run().await?;
        }
    }

    Ok(())
}
