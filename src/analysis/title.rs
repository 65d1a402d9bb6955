//! Title extraction and sanitization.

use std::collections::HashSet;

use regex::Regex;

use super::lines::TextLine;
use super::options::AnalysisConfig;
use crate::model::{OutlineEntry, UNTITLED};

/// Sanitized titles shorter than this are rejected.
const MIN_TITLE_CHARS: usize = 5;

/// Cleans candidate titles.
#[derive(Debug, Clone)]
pub struct TitleSanitizer {
    disallowed: Regex,
    whitespace: Regex,
}

impl TitleSanitizer {
    /// Create a sanitizer with compiled patterns.
    pub fn new() -> Self {
        Self {
            disallowed: Regex::new(r"[^\w\s\-:.]").expect("title pattern is valid"),
            whitespace: Regex::new(r"\s+").expect("whitespace pattern is valid"),
        }
    }

    /// Strip symbols and collapse whitespace.
    ///
    /// Keeps word characters, whitespace, hyphens, colons and periods.
    /// Returns `None` when what is left is too short or has no ASCII letters.
    pub fn clean(&self, title: &str) -> Option<String> {
        let stripped = self.disallowed.replace_all(title.trim(), "");
        let collapsed = self.whitespace.replace_all(&stripped, " ");

        if collapsed.chars().count() < MIN_TITLE_CHARS
            || !collapsed.chars().any(|c| c.is_ascii_alphabetic())
        {
            return None;
        }
        Some(collapsed.into_owned())
    }

    /// Pick the first usable title.
    ///
    /// Order: extracted title, metadata title, first heading, then
    /// [`UNTITLED`].
    pub fn resolve(
        &self,
        extracted: &str,
        metadata_title: Option<&str>,
        outline: &[OutlineEntry],
    ) -> String {
        if let Some(title) = self.clean(extracted) {
            return title;
        }
        if let Some(title) = metadata_title.and_then(|t| self.clean(t)) {
            log::debug!("Using metadata title");
            return title;
        }
        if let Some(first) = outline.first() {
            log::debug!("Using first heading as title");
            return first.text.clone();
        }
        UNTITLED.to_string()
    }
}

impl Default for TitleSanitizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Title from a cover page: every large page-1 line.
pub fn extract_cover_title(lines: &[TextLine], body_size: i32, config: &AnalysisConfig) -> String {
    let threshold = f64::from(body_size) * config.title_size_ratio;
    lines
        .iter()
        .filter(|l| l.page == 1 && f64::from(l.size) > threshold)
        .map(|l| l.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}

/// Title from an ordinary first page: the leading run of large lines.
///
/// Lines before the run are skipped; the first non-qualifying line after it
/// ends the title.
pub fn extract_leading_title(
    lines: &[TextLine],
    body_size: i32,
    footers: &HashSet<String>,
    config: &AnalysisConfig,
) -> String {
    let threshold = f64::from(body_size) * config.title_size_ratio;
    let mut parts: Vec<&str> = Vec::new();
    let mut started = false;

    for line in lines.iter().filter(|l| l.page == 1) {
        let qualifies = f64::from(line.size) > threshold && !footers.contains(&line.text);
        if qualifies {
            parts.push(&line.text);
            started = true;
        } else if started {
            break;
        }
    }

    parts.join(" ").trim().to_string()
}
