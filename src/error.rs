use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SplitError>;

/// Failures raised while planning or performing a split.
///
/// The first four variants are fatal to the whole operation; `CreateDir` and
/// `SaveDocument` are scoped to a single chunk once exporting has started.
#[derive(Debug, Error)]
pub enum SplitError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("Chunk size must be at least 1 (got {given})")]
    InvalidChunkSize { given: u32 },

    #[error("Source PDF not found: {path}")]
    SourceNotFound { path: PathBuf },

    #[error("Failed to open PDF: {path}")]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: lopdf::Error,
    },

    #[error("Page {page} is out of range (1-{total})")]
    PageOutOfRange { page: u32, total: u32 },

    #[error("Failed to create directory: {path}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to save PDF: {path}")]
    SaveDocument {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SplitError {
    /// Render the message together with the underlying cause, if any.
    pub fn chain(&self) -> String {
        match std::error::Error::source(self) {
            Some(cause) => format!("{}: {}", self, cause),
            None => self.to_string(),
        }
    }
}
