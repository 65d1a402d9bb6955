//! Serializable page-layout dump.
//!
//! The layout dump is what an upstream PDF text extractor produces for each
//! page: blocks of lines, each line made of spans that share one font and
//! size. Coordinates use a top-left origin with y growing downwards.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Axis-aligned bounding box, serialized as `[x0, y0, x1, y1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "[f64; 4]", into = "[f64; 4]")]
pub struct BBox {
    /// Left edge
    pub x0: f64,
    /// Top edge
    pub y0: f64,
    /// Right edge
    pub x1: f64,
    /// Bottom edge
    pub y1: f64,
}

impl BBox {
    /// Create a new bounding box.
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Smallest box containing both boxes.
    pub fn union(&self, other: &BBox) -> BBox {
        BBox {
            x0: self.x0.min(other.x0),
            y0: self.y0.min(other.y0),
            x1: self.x1.max(other.x1),
            y1: self.y1.max(other.y1),
        }
    }
}

impl From<[f64; 4]> for BBox {
    fn from([x0, y0, x1, y1]: [f64; 4]) -> Self {
        Self::new(x0, y0, x1, y1)
    }
}

impl From<BBox> for [f64; 4] {
    fn from(bbox: BBox) -> Self {
        [bbox.x0, bbox.y0, bbox.x1, bbox.y1]
    }
}

/// A run of text sharing one font and size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutSpan {
    /// The text content
    pub text: String,
    /// Font size in points
    pub size: f64,
    /// Font name (e.g., "Helvetica-Bold")
    #[serde(default)]
    pub font: String,
    /// Span bounds
    pub bbox: BBox,
}

impl LayoutSpan {
    /// Create a new span.
    pub fn new(text: impl Into<String>, size: f64, font: impl Into<String>, bbox: BBox) -> Self {
        Self {
            text: text.into(),
            size,
            font: font.into(),
            bbox,
        }
    }
}

/// A visual line of spans.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutLine {
    /// Line bounds
    pub bbox: BBox,
    /// Spans in reading order
    #[serde(default)]
    pub spans: Vec<LayoutSpan>,
}

impl LayoutLine {
    /// Create a line whose bounds enclose all of its spans.
    pub fn from_spans(spans: Vec<LayoutSpan>) -> Self {
        let bbox = spans
            .iter()
            .map(|s| s.bbox)
            .reduce(|acc, b| acc.union(&b))
            .unwrap_or_default();
        Self { bbox, spans }
    }
}

/// A block of lines (usually a paragraph or a heading).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutBlock {
    /// Lines in reading order; image blocks have none
    #[serde(default)]
    pub lines: Vec<LayoutLine>,
}

impl LayoutBlock {
    /// Create a block from lines.
    pub fn new(lines: Vec<LayoutLine>) -> Self {
        Self { lines }
    }
}

/// One page of the layout dump.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutPage {
    /// Page width in points
    pub width: f64,
    /// Page height in points
    pub height: f64,
    /// Blocks in reading order
    #[serde(default)]
    pub blocks: Vec<LayoutBlock>,
}

impl LayoutPage {
    /// Create an empty page with the given dimensions.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            blocks: Vec::new(),
        }
    }

    /// Create an empty US Letter page (8.5 x 11 inches).
    pub fn letter() -> Self {
        Self::new(612.0, 792.0)
    }

    /// Create an empty A4 page (210 x 297 mm).
    pub fn a4() -> Self {
        Self::new(595.0, 842.0)
    }

    /// Add a block to the page.
    pub fn add_block(&mut self, block: LayoutBlock) {
        self.blocks.push(block);
    }

    /// Builder-style variant of [`LayoutPage::add_block`].
    pub fn with_block(mut self, block: LayoutBlock) -> Self {
        self.add_block(block);
        self
    }
}

/// Document-level metadata carried by the layout dump.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutMetadata {
    /// Title from the document information dictionary
    #[serde(default)]
    pub title: Option<String>,
}

/// A whole document's layout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutDocument {
    /// Document metadata
    #[serde(default)]
    pub metadata: LayoutMetadata,
    /// Pages in order
    #[serde(default)]
    pub pages: Vec<LayoutPage>,
}

impl LayoutDocument {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a layout dump from a JSON file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Read a layout dump from any reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Parse a layout dump from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set the metadata title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.metadata.title = Some(title.into());
        self
    }

    /// Add a page to the document.
    pub fn add_page(&mut self, page: LayoutPage) {
        self.pages.push(page);
    }

    /// Builder-style variant of [`LayoutDocument::add_page`].
    pub fn with_page(mut self, page: LayoutPage) -> Self {
        self.add_page(page);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bbox_union() {
        let a = BBox::new(10.0, 20.0, 50.0, 30.0);
        let b = BBox::new(40.0, 18.0, 90.0, 29.0);
        assert_eq!(a.union(&b), BBox::new(10.0, 18.0, 90.0, 30.0));
    }

    #[test]
    fn test_line_bbox_from_spans() {
        let line = LayoutLine::from_spans(vec![
            LayoutSpan::new("Hello", 12.0, "Helvetica", BBox::new(72.0, 100.0, 110.0, 112.0)),
            LayoutSpan::new("world", 12.0, "Helvetica", BBox::new(114.0, 101.0, 150.0, 113.0)),
        ]);
        assert_eq!(line.bbox, BBox::new(72.0, 100.0, 150.0, 113.0));

        let empty = LayoutLine::from_spans(vec![]);
        assert_eq!(empty.bbox, BBox::default());
    }

    #[test]
    fn test_parse_layout_json() {
        let json = r#"{
            "metadata": {"title": "Annual Report"},
            "pages": [{
                "width": 612, "height": 792,
                "blocks": [
                    {"lines": [{"bbox": [72, 90, 300, 114], "spans": [
                        {"text": "Overview", "size": 24.0, "font": "Arial-Bold", "bbox": [72, 90, 300, 114]}
                    ]}]},
                    {}
                ]
            }]
        }"#;

        let doc = LayoutDocument::from_json_str(json).unwrap();
        assert_eq!(doc.metadata.title.as_deref(), Some("Annual Report"));
        assert_eq!(doc.pages.len(), 1);
        assert_eq!(doc.pages[0].blocks.len(), 2);
        assert!(doc.pages[0].blocks[1].lines.is_empty());

        let span = &doc.pages[0].blocks[0].lines[0].spans[0];
        assert_eq!(span.font, "Arial-Bold");
        assert_eq!(span.bbox.y0, 90.0);
    }

    #[test]
    fn test_parse_minimal_document() {
        let doc = LayoutDocument::from_json_str("{}").unwrap();
        assert!(doc.pages.is_empty());
        assert!(doc.metadata.title.is_none());
    }

    #[test]
    fn test_parse_rejects_bad_bbox() {
        let json = r#"{"pages": [{"width": 1, "height": 1, "blocks": [
            {"lines": [{"bbox": [1, 2, 3], "spans": []}]}
        ]}]}"#;
        assert!(LayoutDocument::from_json_str(json).is_err());
    }

    #[test]
    fn test_builders() {
        let doc = LayoutDocument::new()
            .with_title("Design Notes")
            .with_page(LayoutPage::a4().with_block(LayoutBlock::default()))
            .with_page(LayoutPage::letter());

        assert_eq!(doc.pages.len(), 2);
        assert_eq!(doc.pages[0].height, 842.0);
        assert_eq!(doc.pages[1].width, 612.0);
        assert_eq!(doc.metadata.title.as_deref(), Some("Design Notes"));
    }
}
