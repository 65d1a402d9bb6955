//! Running header/footer suppression.

use std::collections::{HashMap, HashSet};

use super::lines::TextLine;
use super::options::AnalysisConfig;
use crate::layout::LayoutSource;

/// Pages sampled for footers: first, second, second-to-last and last.
///
/// Without `dedup`, short documents visit some pages more than once, which
/// doubles the counts of their footer-zone lines.
pub fn footer_sample_pages(page_count: usize, dedup: bool) -> Vec<usize> {
    let mut pages: Vec<usize> = [0, 1, page_count as isize - 2, page_count as isize - 1]
        .into_iter()
        .filter(|&p| p >= 0 && (p as usize) < page_count)
        .map(|p| p as usize)
        .collect();

    if dedup {
        let mut seen = HashSet::new();
        pages.retain(|p| seen.insert(*p));
    }
    pages
}

/// Collect text that repeats in the footer zone of the sampled pages.
pub fn detect_footers<S: LayoutSource + ?Sized>(
    source: &S,
    lines: &[TextLine],
    config: &AnalysisConfig,
) -> HashSet<String> {
    let mut counts: HashMap<&str, usize> = HashMap::new();

    for index in footer_sample_pages(source.page_count(), config.dedup_footer_pages) {
        let Some(height) = source.page_height(index) else {
            continue;
        };
        let zone_start = height * config.footer_zone_ratio;
        let page = index as u32 + 1;

        for line in lines.iter().filter(|l| l.page == page && l.y0 >= zone_start) {
            *counts.entry(line.text.as_str()).or_insert(0) += 1;
        }
    }

    let footers: HashSet<String> = counts
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(text, _)| text.to_string())
        .collect();

    log::debug!("Found {} repeating footer lines", footers.len());
    footers
}
