//! Line reconstruction from the layout dump.

use crate::layout::{LayoutLine, LayoutSource};

/// Lines shorter than this (in characters, after trimming) are dropped.
const MIN_LINE_CHARS: usize = 2;

/// A logical text line with the style and spacing used by the heuristics.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    /// Page number (1-indexed)
    pub page: u32,
    /// Span texts joined by single spaces, trimmed
    pub text: String,
    /// Rounded size of the first span
    pub size: i32,
    /// Font of the first span
    pub font: String,
    /// Whether the first span's font looks bold
    pub is_bold: bool,
    /// Distance from the previous line's bottom in the same block
    pub space_above: f64,
    /// Top edge of the line
    pub y0: f64,
}

impl TextLine {
    /// Number of whitespace-separated words.
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }

    /// Number of characters in the text.
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}

/// Round a font size to the nearest integer, halves to even.
pub fn round_size(size: f64) -> i32 {
    size.round_ties_even() as i32
}

/// Whether a font name indicates bold weight.
pub fn is_bold_font(font: &str) -> bool {
    font.to_lowercase().contains("bold")
}

/// Flatten every page into reading-order lines.
///
/// Spacing is tracked per block: the first line of a block is measured
/// against a baseline of 0, so gaps between blocks are not visible here.
pub fn reconstruct_lines<S: LayoutSource + ?Sized>(source: &S) -> Vec<TextLine> {
    let mut lines = Vec::new();

    for index in 0..source.page_count() {
        let page = index as u32 + 1;
        for block in source.page_blocks(index) {
            let mut last_bottom = 0.0;
            for layout_line in &block.lines {
                if let Some(line) = build_line(page, layout_line, last_bottom) {
                    last_bottom = layout_line.bbox.y1;
                    lines.push(line);
                }
            }
        }
    }

    lines
}

fn build_line(page: u32, layout_line: &LayoutLine, last_bottom: f64) -> Option<TextLine> {
    let first = layout_line.spans.first()?;

    let text = layout_line
        .spans
        .iter()
        .map(|s| s.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string();
    if text.chars().count() < MIN_LINE_CHARS {
        return None;
    }

    let y0 = layout_line.bbox.y0;
    Some(TextLine {
        page,
        text,
        size: round_size(first.size),
        font: first.font.clone(),
        is_bold: is_bold_font(&first.font),
        space_above: y0 - last_bottom,
        y0,
    })
}
