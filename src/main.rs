mod cli;
mod commands;
mod error;
mod mcp;
mod page_range;
mod pdf;
mod splitter;
#[cfg(test)]
mod test_pdf;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Log to stderr so MCP stdio stays clean
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Mcp => {
            mcp::run_server().await?;
        }
        Commands::Plan { path, chunk_size } => {
            commands::plan::run(&path, chunk_size)?;
        }
        Commands::Split {
            path,
            output_dir,
            chunk_size,
        } => {
            commands::split::run(&path, &output_dir, chunk_size)?;
        }
    }

    Ok(())
}
