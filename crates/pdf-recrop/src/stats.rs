use crate::options::PageRange;
use crate::types::*;
use lopdf::Document;

/// Page counts for a crop run
#[derive(Debug, Clone, PartialEq)]
pub struct CropStatistics {
    /// Pages in the input document
    pub source_pages: usize,
    /// Pages the run will emit
    pub output_pages: usize,
}

/// Statistics for split mode: every source page yields two slices.
pub fn calculate_split_statistics(doc: &Document) -> Result<CropStatistics> {
    let source_pages = doc.get_pages().len();
    if source_pages == 0 {
        return Err(RecropError::NoPages);
    }

    Ok(CropStatistics {
        source_pages,
        output_pages: source_pages * 2,
    })
}

/// Statistics for trim mode: one output page per processed page.
pub fn calculate_trim_statistics(doc: &Document, pages: PageRange) -> Result<CropStatistics> {
    let source_pages = doc.get_pages().len();
    if source_pages == 0 {
        return Err(RecropError::NoPages);
    }

    let output_pages = match pages {
        PageRange::First => 1,
        PageRange::All => source_pages,
    };

    Ok(CropStatistics {
        source_pages,
        output_pages,
    })
}
