use crate::error::{Result, SplitError};

/// A contiguous half-open run `[start, end)` of zero-based page indices.
///
/// lopdf numbers pages from 1, so the conversion helpers hand out the
/// equivalent 1-based inclusive run for the document boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRange {
    pub start: u32,
    pub end: u32,
}

impl PageRange {
    /// Number of pages covered by this range.
    pub fn len(&self) -> u32 {
        self.end - self.start
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// First covered page as a 1-based page number.
    pub fn first_page(&self) -> u32 {
        self.start + 1
    }

    /// Last covered page as a 1-based page number.
    pub fn last_page(&self) -> u32 {
        self.end
    }
}

/// Partition `0..total_pages` into consecutive ranges of at most `chunk_size`
/// pages each.
///
/// Every page lands in exactly one range, order is preserved, and only the
/// final range may be shorter than `chunk_size`. A document with no pages
/// yields no ranges.
pub fn plan_chunks(total_pages: u32, chunk_size: u32) -> Result<Vec<PageRange>> {
    if chunk_size == 0 {
        return Err(SplitError::InvalidChunkSize { given: chunk_size });
    }

    let mut ranges = Vec::new();
    let mut start = 0;
    while start < total_pages {
        let end = total_pages.min(start.saturating_add(chunk_size));
        ranges.push(PageRange { start, end });
        start = end;
    }

    Ok(ranges)
}
