use anyhow::Result;
use rmcp::{
    ServerHandler, ServiceExt,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{ServerCapabilities, ServerInfo},
    schemars, tool, tool_router,
};
use serde::{Deserialize, Serialize};

use crate::page_range::plan_chunks;
use crate::pdf::PdfDocument;
use crate::splitter::{self, chunk_dir_name, chunk_file_name};

// Request structs for tools

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SplitPlanRequest {
    #[schemars(description = "Path to the PDF file")]
    pub path: String,
    #[schemars(description = "Pages per chunk, between 1 and 12 (default: 1)")]
    #[serde(default = "default_chunk_size")]
    pub chunk_size: u32,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SplitRequest {
    #[schemars(description = "Path to the source PDF file")]
    pub path: String,
    #[schemars(description = "Directory to write folder_<n>/output_<n>.pdf chunks into")]
    pub output_dir: String,
    #[schemars(description = "Pages per chunk, between 1 and 12 (default: 1)")]
    #[serde(default = "default_chunk_size")]
    pub chunk_size: u32,
}

fn default_chunk_size() -> u32 {
    1
}

#[derive(Debug, Clone)]
pub struct SplitServer {
    #[allow(dead_code)]
    tool_router: ToolRouter<Self>,
}

impl SplitServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }
}

impl Default for SplitServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl SplitServer {
    #[tool(description = "Preview the chunks a split would produce, with page ranges and output names, without writing any files")]
    fn pdf_split_plan(&self, Parameters(req): Parameters<SplitPlanRequest>) -> String {
        if let Err(e) = splitter::check_chunk_size(req.chunk_size) {
            return format!("Error: {}", e.chain());
        }

        let doc = match PdfDocument::open(&req.path) {
            Ok(d) => d,
            Err(e) => return format!("Error: {}", e.chain()),
        };
        let total_pages = doc.page_count();

        let ranges = match plan_chunks(total_pages, req.chunk_size) {
            Ok(r) => r,
            Err(e) => return format!("Error: {}", e.chain()),
        };

        let chunks: Vec<PlannedChunk> = ranges
            .iter()
            .enumerate()
            .map(|(idx, range)| {
                let ordinal = idx + 1;
                PlannedChunk {
                    ordinal,
                    first_page: range.first_page(),
                    last_page: range.last_page(),
                    page_count: range.len(),
                    path: format!("{}/{}", chunk_dir_name(ordinal), chunk_file_name(ordinal)),
                }
            })
            .collect();

        let result = SplitPlanResult {
            path: req.path,
            total_pages,
            chunk_size: req.chunk_size,
            chunks,
        };
        serde_json::to_string_pretty(&result).unwrap_or_else(|e| format!("Error: {}", e))
    }

    #[tool(description = "Split a PDF into chunks of consecutive pages, writing the chunk at position n to <output_dir>/folder_n/output_n.pdf")]
    fn pdf_split(&self, Parameters(req): Parameters<SplitRequest>) -> String {
        if let Err(e) = splitter::check_chunk_size(req.chunk_size) {
            return format!("Error: {}", e.chain());
        }

        let report = match splitter::split(&req.path, &req.output_dir, req.chunk_size) {
            Ok(r) => r,
            Err(e) => return format!("Error: {}", e.chain()),
        };

        let chunks: Vec<ChunkResult> = report
            .chunks
            .iter()
            .map(|c| ChunkResult {
                ordinal: c.ordinal,
                first_page: c.range.first_page(),
                last_page: c.range.last_page(),
                path: c.path.display().to_string(),
                error: c.error.as_ref().map(|e| e.chain()),
            })
            .collect();

        let result = SplitResult {
            source: report.source.display().to_string(),
            total_pages: report.total_pages,
            chunk_size: report.chunk_size,
            chunks_attempted: report.attempted(),
            chunks_written: report.succeeded(),
            chunks,
        };
        serde_json::to_string_pretty(&result).unwrap_or_else(|e| format!("Error: {}", e))
    }
}

// Result types for MCP tools

#[derive(Debug, Serialize, Deserialize, schemars::JsonSchema)]
pub struct PlannedChunk {
    pub ordinal: usize,
    pub first_page: u32,
    pub last_page: u32,
    pub page_count: u32,
    pub path: String,
}

#[derive(Debug, Serialize, Deserialize, schemars::JsonSchema)]
pub struct SplitPlanResult {
    pub path: String,
    pub total_pages: u32,
    pub chunk_size: u32,
    pub chunks: Vec<PlannedChunk>,
}

#[derive(Debug, Serialize, Deserialize, schemars::JsonSchema)]
pub struct ChunkResult {
    pub ordinal: usize,
    pub first_page: u32,
    pub last_page: u32,
    pub path: String,
    pub error: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, schemars::JsonSchema)]
pub struct SplitResult {
    pub source: String,
    pub total_pages: u32,
    pub chunk_size: u32,
    pub chunks_attempted: usize,
    pub chunks_written: usize,
    pub chunks: Vec<ChunkResult>,
}

impl ServerHandler for SplitServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "PDF splitting tools. Use pdf_split_plan to preview how a document divides \
                 into fixed-size chunks, and pdf_split to write each chunk to \
                 folder_<n>/output_<n>.pdf under an output directory."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

pub async fn run_server() -> Result<()> {
    let server = SplitServer::new();

    // Serve using stdin/stdout as a tuple
    let service = server.serve((tokio::io::stdin(), tokio::io::stdout())).await?;

    service.waiting().await?;

    Ok(())
}
