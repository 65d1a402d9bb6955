//! Body text size estimation.

use std::collections::BTreeSet;

use super::lines::round_size;
use crate::layout::LayoutSource;

/// Size histogram in first-seen order.
///
/// Ties on frequency go to the size that was seen first, so the result does
/// not depend on hashing.
#[derive(Debug, Clone, Default)]
pub struct SizeHistogram {
    counts: Vec<(i32, usize)>,
}

impl SizeHistogram {
    /// Create an empty histogram.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one observation of a rounded size.
    pub fn add(&mut self, size: i32) {
        match self.counts.iter_mut().find(|(s, _)| *s == size) {
            Some((_, count)) => *count += 1,
            None => self.counts.push((size, 1)),
        }
    }

    /// Most frequent size, earliest-seen on ties.
    pub fn most_common(&self) -> Option<i32> {
        let mut best: Option<(i32, usize)> = None;
        for &(size, count) in &self.counts {
            if best.map_or(true, |(_, c)| count > c) {
                best = Some((size, count));
            }
        }
        best.map(|(size, _)| size)
    }

    /// Total number of observations.
    pub fn total(&self) -> usize {
        self.counts.iter().map(|(_, c)| c).sum()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// Pages sampled for the body size: first, second, middle and last.
pub fn body_sample_pages(page_count: usize) -> BTreeSet<usize> {
    if page_count == 0 {
        return BTreeSet::new();
    }
    [0, 1, page_count / 2, page_count - 1]
        .into_iter()
        .filter(|&p| p < page_count)
        .collect()
}

/// Estimate the dominant body font size from a sample of pages.
pub fn detect_body_size<S: LayoutSource + ?Sized>(source: &S, default_size: i32) -> i32 {
    let mut histogram = SizeHistogram::new();

    for index in body_sample_pages(source.page_count()) {
        for block in source.page_blocks(index) {
            for line in &block.lines {
                for span in &line.spans {
                    if !span.text.trim().is_empty() {
                        histogram.add(round_size(span.size));
                    }
                }
            }
        }
    }

    let body_size = histogram.most_common().unwrap_or(default_size);
    log::debug!(
        "Body size {} from {} sampled spans",
        body_size,
        histogram.total()
    );
    body_size
}
