//! Cover page detection.

use super::lines::TextLine;
use super::options::AnalysisConfig;

/// Whether page 1 looks like a title page.
///
/// A cover has a few large lines (title, subtitle, author) that are spread
/// out vertically, rather than dense large-font text.
pub fn looks_like_cover_page(lines: &[TextLine], body_size: i32, config: &AnalysisConfig) -> bool {
    let threshold = f64::from(body_size) * config.cover_size_ratio;
    let large: Vec<&TextLine> = lines
        .iter()
        .filter(|l| l.page == 1 && f64::from(l.size) > threshold)
        .collect();

    large.len() >= config.cover_min_lines
        && large
            .iter()
            .skip(1)
            .all(|l| l.space_above > config.cover_min_gap)
}
