//! # pdf-outline
//!
//! Rule-based title and heading outline inference from PDF page layout.
//!
//! The input is a layout dump produced by an upstream text extractor: pages
//! of blocks, lines and spans with bounding boxes, font names and sizes. No
//! tagging or bookmarks are needed; headings are inferred from size, weight
//! and spacing relative to the body text.
//!
//! ## Quick Start
//!
//! ```no_run
//! use pdf_outline::{analyze_file, render};
//!
//! fn main() -> pdf_outline::Result<()> {
//!     let result = analyze_file("report.layout.json")?;
//!     println!("{}", render::to_json(&result, render::JsonFormat::Pretty)?);
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Body style detection**: dominant font size from sampled pages
//! - **Cover pages**: title pages are detected and excluded from pagination
//! - **Footer suppression**: running headers/footers never become headings
//! - **Heading levels**: styles ranked by size and weight into `H1`..`Hn`
//! - **Title fallback chain**: page 1, metadata, first heading
//! - **Batch processing**: parallel directory runs with per-file isolation

pub mod analysis;
pub mod batch;
pub mod error;
pub mod layout;
pub mod model;
pub mod render;

// Re-export commonly used types
pub use analysis::{AnalysisConfig, AnalysisReport, StructureAnalyzer, TextLine};
pub use batch::{run_batch, BatchOptions, BatchReport, DocumentOutcome};
pub use error::{Error, Result};
pub use layout::{
    BBox, LayoutBlock, LayoutDocument, LayoutLine, LayoutPage, LayoutSource, LayoutSpan,
};
pub use model::{DocumentResult, HeadingLevel, OutlineEntry};
pub use render::JsonFormat;

use std::io::Read;
use std::path::Path;

/// Infer the title and outline of an in-memory layout with default settings.
///
/// # Example
///
/// ```
/// use pdf_outline::{analyze, LayoutDocument};
///
/// let result = analyze(&LayoutDocument::new());
/// assert_eq!(result.title, "Untitled Document");
/// assert!(result.outline.is_empty());
/// ```
pub fn analyze<S: LayoutSource + ?Sized>(source: &S) -> DocumentResult {
    StructureAnalyzer::new().analyze(source)
}

/// Read a layout dump from a JSON file and analyze it.
///
/// # Example
///
/// ```no_run
/// use pdf_outline::analyze_file;
///
/// let result = analyze_file("report.layout.json").unwrap();
/// for entry in &result.outline {
///     println!("{} {} (p. {})", entry.level, entry.text, entry.page);
/// }
/// ```
pub fn analyze_file<P: AsRef<Path>>(path: P) -> Result<DocumentResult> {
    let layout = LayoutDocument::open(path)?;
    Ok(analyze(&layout))
}

/// Analyze a layout dump file with custom thresholds.
pub fn analyze_file_with_config<P: AsRef<Path>>(
    path: P,
    config: AnalysisConfig,
) -> Result<DocumentResult> {
    let layout = LayoutDocument::open(path)?;
    Ok(StructureAnalyzer::with_config(config).analyze(&layout))
}

/// Parse a layout dump from a JSON string and analyze it.
pub fn analyze_str(json: &str) -> Result<DocumentResult> {
    let layout = LayoutDocument::from_json_str(json)?;
    Ok(analyze(&layout))
}

/// Read a layout dump from a reader and analyze it.
pub fn analyze_reader<R: Read>(reader: R) -> Result<DocumentResult> {
    let layout = LayoutDocument::from_reader(reader)?;
    Ok(analyze(&layout))
}

/// Analyze a layout dump file and render the result as JSON.
///
/// # Example
///
/// ```no_run
/// use pdf_outline::{to_json, JsonFormat};
///
/// let json = to_json("report.layout.json", JsonFormat::Pretty).unwrap();
/// std::fs::write("report.json", json).unwrap();
/// ```
pub fn to_json<P: AsRef<Path>>(path: P, format: JsonFormat) -> Result<String> {
    let result = analyze_file(path)?;
    render::to_json(&result, format)
}
