use crate::splitter;
use anyhow::Result;
use std::path::Path;

pub fn run<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output_dir: Q, chunk_size: u32) -> Result<()> {
    let output_dir = output_dir.as_ref();

    splitter::check_chunk_size(chunk_size)?;

    let report = splitter::split(input, output_dir, chunk_size)?;

    for chunk in &report.chunks {
        match &chunk.error {
            None => println!("Saved {}", chunk.path.display()),
            Some(e) => eprintln!("Failed {}: {}", chunk.path.display(), e.chain()),
        }
    }

    println!(
        "Split {} page(s) into {} of {} chunk(s) under {}",
        report.total_pages,
        report.succeeded(),
        report.attempted(),
        output_dir.display()
    );

    if report.all_failed() {
        anyhow::bail!("no chunks could be written to {}", output_dir.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_pdf::write_sample_pdf;

    #[test]
    fn test_run_rejects_out_of_window_chunk_size() {
        let dir = tempfile::tempdir().unwrap();
        let source = write_sample_pdf(dir.path(), "doc.pdf", 3);
        let dest = dir.path().join("out");

        for bad in [0, 13] {
            let err = run(&source, &dest, bad).unwrap_err();
            assert!(err.to_string().contains("between 1 and 12"));
            assert!(!dest.exists());
        }
    }
}
