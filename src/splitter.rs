use crate::error::{Result, SplitError};
use crate::page_range::{plan_chunks, PageRange};
use crate::pdf::PdfDocument;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Outcome of one attempted chunk.
#[derive(Debug)]
pub struct ChunkReport {
    /// 1-based position of the chunk within the plan.
    pub ordinal: usize,
    pub range: PageRange,
    /// File the chunk was (or would have been) written to.
    pub path: PathBuf,
    pub error: Option<SplitError>,
}

impl ChunkReport {
    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

/// Summary of a whole split operation.
#[derive(Debug)]
pub struct SplitReport {
    pub source: PathBuf,
    pub total_pages: u32,
    pub chunk_size: u32,
    pub chunks: Vec<ChunkReport>,
}

impl SplitReport {
    pub fn attempted(&self) -> usize {
        self.chunks.len()
    }

    pub fn succeeded(&self) -> usize {
        self.chunks.iter().filter(|c| c.succeeded()).count()
    }

    /// True when chunks were attempted and none could be written.
    pub fn all_failed(&self) -> bool {
        !self.chunks.is_empty() && self.succeeded() == 0
    }
}

/// Directory name for the chunk at the given 1-based position.
pub fn chunk_dir_name(ordinal: usize) -> String {
    format!("folder_{}", ordinal)
}

/// File name for the chunk at the given 1-based position.
pub fn chunk_file_name(ordinal: usize) -> String {
    format!("output_{}.pdf", ordinal)
}

/// Surface-level bound on chunk sizes; the planner itself only rejects 0.
pub fn check_chunk_size(chunk_size: u32) -> Result<()> {
    if (1..=12).contains(&chunk_size) {
        Ok(())
    } else {
        Err(SplitError::InvalidInput(format!(
            "chunk size must be between 1 and 12 (got {})",
            chunk_size
        )))
    }
}

/// Split `source` into documents of at most `chunk_size` consecutive pages,
/// writing the chunk at position `n` to `dest_root/folder_n/output_n.pdf`.
///
/// Chunks are exported best-effort: a chunk that cannot be written is
/// recorded in the report and the remaining chunks are still attempted.
/// `Err` is returned only for problems that prevent the operation from
/// starting at all (bad arguments, missing or unparsable source, a
/// destination root that cannot be created).
pub fn split<P: AsRef<Path>, Q: AsRef<Path>>(
    source: P,
    dest_root: Q,
    chunk_size: u32,
) -> Result<SplitReport> {
    let source = source.as_ref();
    let dest_root = dest_root.as_ref();

    if source.as_os_str().is_empty() {
        return Err(SplitError::InvalidInput(
            "No source PDF specified".to_string(),
        ));
    }
    if dest_root.as_os_str().is_empty() {
        return Err(SplitError::InvalidInput(
            "No output directory specified".to_string(),
        ));
    }
    if !source.is_file() {
        return Err(SplitError::SourceNotFound {
            path: source.to_path_buf(),
        });
    }

    std::fs::create_dir_all(dest_root).map_err(|e| SplitError::CreateDir {
        path: dest_root.to_path_buf(),
        source: e,
    })?;

    let doc = PdfDocument::open(source)?;
    let total_pages = doc.page_count();
    let ranges = plan_chunks(total_pages, chunk_size)?;
    debug!(
        "planned {} chunk(s) of at most {} page(s) from {} page(s)",
        ranges.len(),
        chunk_size,
        total_pages
    );

    let mut chunks = Vec::with_capacity(ranges.len());
    for (idx, range) in ranges.into_iter().enumerate() {
        let ordinal = idx + 1;
        let dir = dest_root.join(chunk_dir_name(ordinal));
        let path = dir.join(chunk_file_name(ordinal));

        let error = write_chunk(&doc, range, &dir, &path).err();
        match &error {
            None => debug!(
                "wrote pages {}-{} to {}",
                range.first_page(),
                range.last_page(),
                path.display()
            ),
            Some(e) => warn!("chunk {} failed: {}", ordinal, e.chain()),
        }
        chunks.push(ChunkReport {
            ordinal,
            range,
            path,
            error,
        });
    }

    Ok(SplitReport {
        source: source.to_path_buf(),
        total_pages,
        chunk_size,
        chunks,
    })
}

fn write_chunk(doc: &PdfDocument, range: PageRange, dir: &Path, path: &Path) -> Result<()> {
    std::fs::create_dir_all(dir).map_err(|e| SplitError::CreateDir {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut chunk = doc.extract_range(range.first_page(), range.last_page())?;
    PdfDocument::save(&mut chunk, path)
}
