//! Layout accessor abstraction.
//!
//! Provides a trait-based interface for page geometry, isolating the
//! structure analysis from wherever the layout came from.

use super::document::{LayoutBlock, LayoutDocument};

/// Read-only access to a document's page layout.
///
/// Page indices are 0-based.
pub trait LayoutSource {
    /// Number of pages in the document.
    fn page_count(&self) -> usize;

    /// Height of a page, or `None` when the index is out of range.
    fn page_height(&self, index: usize) -> Option<f64>;

    /// Blocks of a page in reading order. Out-of-range pages have no blocks.
    fn page_blocks(&self, index: usize) -> &[LayoutBlock];

    /// Title from the document metadata, if any.
    fn metadata_title(&self) -> Option<&str>;
}

impl LayoutSource for LayoutDocument {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page_height(&self, index: usize) -> Option<f64> {
        self.pages.get(index).map(|p| p.height)
    }

    fn page_blocks(&self, index: usize) -> &[LayoutBlock] {
        self.pages
            .get(index)
            .map(|p| p.blocks.as_slice())
            .unwrap_or(&[])
    }

    fn metadata_title(&self) -> Option<&str> {
        self.metadata.title.as_deref()
    }
}
