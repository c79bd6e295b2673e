use crate::page_range::plan_chunks;
use crate::pdf::PdfDocument;
use crate::splitter::{check_chunk_size, chunk_dir_name, chunk_file_name};
use anyhow::Result;
use std::path::Path;

pub fn run<P: AsRef<Path>>(path: P, chunk_size: u32) -> Result<()> {
    check_chunk_size(chunk_size)?;

    let doc = PdfDocument::open(&path)?;
    let total_pages = doc.page_count();
    let ranges = plan_chunks(total_pages, chunk_size)?;

    if ranges.is_empty() {
        println!("Document has no pages; nothing to split.");
        return Ok(());
    }

    for (idx, range) in ranges.iter().enumerate() {
        let ordinal = idx + 1;
        println!(
            "{}/{}: pages {}-{} ({} page(s))",
            chunk_dir_name(ordinal),
            chunk_file_name(ordinal),
            range.first_page(),
            range.last_page(),
            range.len()
        );
    }
    println!("{} page(s) in {} chunk(s)", total_pages, ranges.len());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_rejects_out_of_window_chunk_size_before_opening() {
        let err = run("no-such.pdf", 13).unwrap_err();
        assert!(err.to_string().contains("between 1 and 12 (got 13)"));
    }
}
