use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pdfsplit")]
#[command(about = "Split PDFs into fixed-size page chunks with MCP server support")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run as MCP server (primary mode)
    Mcp,

    /// Show the chunks a split would produce without writing anything
    Plan {
        /// PDF file to inspect
        path: PathBuf,

        /// Pages per chunk (1-12)
        #[arg(short = 'n', long, default_value = "1")]
        chunk_size: u32,
    },

    /// Split a PDF into chunks of consecutive pages
    Split {
        /// PDF file to split
        path: PathBuf,

        /// Output directory
        #[arg(short, long)]
        output_dir: PathBuf,

        /// Pages per chunk (1-12)
        #[arg(short = 'n', long, default_value = "1")]
        chunk_size: u32,
    },
}
