//! Analysis thresholds and configuration.
//!
//! The defaults are empirically tuned; changing them changes which lines
//! become headings.

/// Body size assumed when no sampled span carries text.
pub const DEFAULT_BODY_SIZE: i32 = 10;

/// Configuration for [`StructureAnalyzer`](super::StructureAnalyzer).
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    /// Body size used when the sampled pages contain no text
    pub default_body_size: i32,

    /// Page-1 lines larger than `body * ratio` count as cover lines
    pub cover_size_ratio: f64,

    /// Minimum number of large lines on a cover page
    pub cover_min_lines: usize,

    /// Every large cover line after the first must have more space above it
    pub cover_min_gap: f64,

    /// Page-1 lines larger than `body * ratio` contribute to the title
    pub title_size_ratio: f64,

    /// Lines larger than `body * ratio` get the size bonus
    pub heading_size_ratio: f64,

    /// Lines with more than `body * ratio` space above get the spacing bonus
    pub heading_gap_ratio: f64,

    /// Minimum score for a line to become a heading
    pub min_heading_score: i32,

    /// Footer zone starts at `page height * ratio`
    pub footer_zone_ratio: f64,

    /// Sample each footer page only once, even in very short documents
    pub dedup_footer_pages: bool,
}

impl AnalysisConfig {
    /// Create a configuration with the default thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fallback body size.
    pub fn with_default_body_size(mut self, size: i32) -> Self {
        self.default_body_size = size;
        self
    }

    /// Set the cover-page size ratio.
    pub fn with_cover_size_ratio(mut self, ratio: f64) -> Self {
        self.cover_size_ratio = ratio;
        self
    }

    /// Set the minimum number of large lines on a cover page.
    pub fn with_cover_min_lines(mut self, lines: usize) -> Self {
        self.cover_min_lines = lines;
        self
    }

    /// Set the minimum gap between large cover lines.
    pub fn with_cover_min_gap(mut self, gap: f64) -> Self {
        self.cover_min_gap = gap;
        self
    }

    /// Set the title size ratio.
    pub fn with_title_size_ratio(mut self, ratio: f64) -> Self {
        self.title_size_ratio = ratio;
        self
    }

    /// Set the heading size ratio.
    pub fn with_heading_size_ratio(mut self, ratio: f64) -> Self {
        self.heading_size_ratio = ratio;
        self
    }

    /// Set the heading spacing ratio.
    pub fn with_heading_gap_ratio(mut self, ratio: f64) -> Self {
        self.heading_gap_ratio = ratio;
        self
    }

    /// Set the acceptance score.
    pub fn with_min_heading_score(mut self, score: i32) -> Self {
        self.min_heading_score = score;
        self
    }

    /// Set where the footer zone begins, as a fraction of page height.
    pub fn with_footer_zone_ratio(mut self, ratio: f64) -> Self {
        self.footer_zone_ratio = ratio;
        self
    }

    /// Enable or disable deduplication of the footer sample pages.
    pub fn with_dedup_footer_pages(mut self, dedup: bool) -> Self {
        self.dedup_footer_pages = dedup;
        self
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            default_body_size: DEFAULT_BODY_SIZE,
            cover_size_ratio: 1.3,
            cover_min_lines: 3,
            cover_min_gap: 5.0,
            title_size_ratio: 1.2,
            heading_size_ratio: 1.1,
            heading_gap_ratio: 0.8,
            min_heading_score: 4,
            footer_zone_ratio: 0.85,
            dedup_footer_pages: false,
        }
    }
}
