//! End-to-end structure inference for one document.

use super::body::detect_body_size;
use super::cover::looks_like_cover_page;
use super::footer::detect_footers;
use super::levels::assign_levels;
use super::lines::reconstruct_lines;
use super::options::AnalysisConfig;
use super::scorer::HeadingScorer;
use super::title::{extract_cover_title, extract_leading_title, TitleSanitizer};
use crate::layout::LayoutSource;
use crate::model::DocumentResult;

/// Intermediate findings of one analysis, for diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisReport {
    /// Number of pages in the source
    pub page_count: usize,
    /// Estimated body font size
    pub body_size: i32,
    /// Whether page 1 was treated as a cover page
    pub is_cover: bool,
    /// Number of reconstructed lines
    pub line_count: usize,
    /// Suppressed header/footer texts, sorted
    pub footers: Vec<String>,
    /// Number of lines that scored as headings, before deduplication
    pub candidate_count: usize,
    /// The inferred title and outline
    pub result: DocumentResult,
}

/// Infers a title and heading outline from page layout.
///
/// The analyzer holds only configuration and compiled patterns, so one
/// instance can be shared across threads.
#[derive(Debug, Clone)]
pub struct StructureAnalyzer {
    config: AnalysisConfig,
    scorer: HeadingScorer,
    sanitizer: TitleSanitizer,
}

impl StructureAnalyzer {
    /// Create an analyzer with default thresholds.
    pub fn new() -> Self {
        Self::with_config(AnalysisConfig::default())
    }

    /// Create an analyzer with custom thresholds.
    pub fn with_config(config: AnalysisConfig) -> Self {
        Self {
            config,
            scorer: HeadingScorer::new(),
            sanitizer: TitleSanitizer::new(),
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Infer the title and outline of a document.
    pub fn analyze<S: LayoutSource + ?Sized>(&self, source: &S) -> DocumentResult {
        self.inspect(source).result
    }

    /// Run the analysis and keep the intermediate findings.
    pub fn inspect<S: LayoutSource + ?Sized>(&self, source: &S) -> AnalysisReport {
        let page_count = source.page_count();
        if page_count == 0 {
            return AnalysisReport {
                page_count,
                body_size: self.config.default_body_size,
                is_cover: false,
                line_count: 0,
                footers: Vec::new(),
                candidate_count: 0,
                result: DocumentResult::untitled(),
            };
        }

        let config = &self.config;
        let body_size = detect_body_size(source, config.default_body_size);
        let lines = reconstruct_lines(source);
        let is_cover = looks_like_cover_page(&lines, body_size, config);
        let footers = detect_footers(source, &lines, config);

        log::debug!(
            "{} pages, {} lines, body size {}, cover page: {}",
            page_count,
            lines.len(),
            body_size,
            is_cover
        );

        let candidates = self
            .scorer
            .candidates(&lines, body_size, &footers, config);
        let outline = assign_levels(&candidates, is_cover);

        let extracted = if is_cover {
            extract_cover_title(&lines, body_size, config)
        } else {
            extract_leading_title(&lines, body_size, &footers, config)
        };
        let title = self
            .sanitizer
            .resolve(&extracted, source.metadata_title(), &outline);

        let mut footers: Vec<String> = footers.into_iter().collect();
        footers.sort();

        AnalysisReport {
            page_count,
            body_size,
            is_cover,
            line_count: lines.len(),
            footers,
            candidate_count: candidates.len(),
            result: DocumentResult::new(title, outline),
        }
    }
}

impl Default for StructureAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
