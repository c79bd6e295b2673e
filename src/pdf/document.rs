use crate::error::{Result, SplitError};
use lopdf::Document;
use std::path::Path;

/// A parsed source PDF. Read-only for the lifetime of a split operation.
pub struct PdfDocument {
    doc: Document,
}

impl PdfDocument {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let doc = Document::load(path).map_err(|source| SplitError::SourceUnreadable {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(PdfDocument { doc })
    }

    pub fn page_count(&self) -> u32 {
        self.doc.get_pages().len() as u32
    }

    /// Copy a contiguous run of pages (1-based, inclusive) into a new document.
    ///
    /// The copy keeps the original page objects untouched; everything outside
    /// the run is deleted and orphaned objects are pruned.
    pub fn extract_range(&self, first_page: u32, last_page: u32) -> Result<Document> {
        let total = self.page_count();

        if first_page == 0 || first_page > last_page {
            return Err(SplitError::PageOutOfRange {
                page: first_page,
                total,
            });
        }
        if last_page > total {
            return Err(SplitError::PageOutOfRange {
                page: last_page,
                total,
            });
        }

        let mut new_doc = self.doc.clone();

        let pages_to_delete: Vec<u32> = (1..=total)
            .filter(|p| *p < first_page || *p > last_page)
            .collect();
        if !pages_to_delete.is_empty() {
            new_doc.delete_pages(&pages_to_delete);
        }
        new_doc.prune_objects();

        Ok(new_doc)
    }

    /// Save an assembled document to a file.
    pub fn save<P: AsRef<Path>>(doc: &mut Document, path: P) -> Result<()> {
        let path = path.as_ref();
        doc.save(path).map_err(|source| SplitError::SaveDocument {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(())
    }
}
