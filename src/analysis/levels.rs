//! Heading level assignment.

use std::cmp::Reverse;
use std::collections::{BTreeSet, HashMap, HashSet};

use super::scorer::HeadingCandidate;
use crate::model::{HeadingLevel, OutlineEntry};

/// Level reported for a style missing from the style map.
const FALLBACK_LEVEL: u32 = 4;

/// A heading style: rounded size and emphasis.
pub type HeadingStyle = (i32, bool);

/// Rank distinct heading styles, largest and boldest first.
///
/// Returns the style → level map. Sizes sort descending; at equal size,
/// bold ranks above plain.
pub fn rank_styles(candidates: &[HeadingCandidate]) -> HashMap<HeadingStyle, HeadingLevel> {
    let styles: BTreeSet<Reverse<HeadingStyle>> = candidates
        .iter()
        .map(|c| Reverse((c.line.size, c.line.is_bold)))
        .collect();

    styles
        .into_iter()
        .enumerate()
        .map(|(rank, Reverse(style))| (style, HeadingLevel::new(rank as u32 + 1)))
        .collect()
}

/// Turn candidates into outline entries.
///
/// Entries keep document order; a repeated (text, page) pair is dropped.
/// For documents with a cover page, page-1 candidates belong to the title
/// and are skipped, and later pages are renumbered so the cover is page 0.
pub fn assign_levels(candidates: &[HeadingCandidate], is_cover: bool) -> Vec<OutlineEntry> {
    let levels = rank_styles(candidates);
    let mut seen: HashSet<(&str, u32)> = HashSet::new();
    let mut outline = Vec::new();

    for candidate in candidates {
        let line = &candidate.line;
        if is_cover && line.page <= 1 {
            continue;
        }
        if !seen.insert((line.text.as_str(), line.page)) {
            continue;
        }

        let level = levels
            .get(&(line.size, line.is_bold))
            .copied()
            .unwrap_or(HeadingLevel::new(FALLBACK_LEVEL));
        let page = if is_cover { line.page - 1 } else { line.page };

        outline.push(OutlineEntry::new(level, line.text.clone(), page));
    }

    outline
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::TextLine;

    fn candidate(text: &str, page: u32, size: i32, is_bold: bool) -> HeadingCandidate {
        HeadingCandidate {
            line: TextLine {
                page,
                text: text.to_string(),
                size,
                font: "Arial".to_string(),
                is_bold,
                space_above: 12.0,
                y0: 100.0,
            },
            score: 5,
        }
    }

    #[test]
    fn test_styles_ranked_by_size_then_bold() {
        let candidates = vec![
            candidate("a", 1, 12, false),
            candidate("b", 1, 16, false),
            candidate("c", 1, 12, true),
            candidate("d", 1, 16, true),
            candidate("e", 1, 12, true),
        ];
        let levels = rank_styles(&candidates);

        assert_eq!(levels.len(), 4);
        assert_eq!(levels[&(16, true)].to_string(), "H1");
        assert_eq!(levels[&(16, false)].to_string(), "H2");
        assert_eq!(levels[&(12, true)].to_string(), "H3");
        assert_eq!(levels[&(12, false)].to_string(), "H4");
    }

    #[test]
    fn test_assign_levels_in_document_order() {
        let candidates = vec![
            candidate("1. Introduction", 1, 14, true),
            candidate("1.1 Background", 2, 12, true),
            candidate("2. Methods", 3, 14, true),
        ];
        let outline = assign_levels(&candidates, false);

        let summary: Vec<(String, &str, u32)> = outline
            .iter()
            .map(|e| (e.level.to_string(), e.text.as_str(), e.page))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("H1".to_string(), "1. Introduction", 1),
                ("H2".to_string(), "1.1 Background", 2),
                ("H1".to_string(), "2. Methods", 3),
            ]
        );
    }

    #[test]
    fn test_duplicates_keep_first_occurrence() {
        let candidates = vec![
            candidate("Summary", 2, 12, false),
            candidate("Summary", 2, 16, true),
            candidate("Summary", 3, 12, false),
        ];
        let outline = assign_levels(&candidates, false);

        assert_eq!(outline.len(), 2);
        assert_eq!(outline[0].page, 2);
        assert_eq!(outline[0].level.to_string(), "H2");
        assert_eq!(outline[1].page, 3);
    }

    #[test]
    fn test_cover_offsets_pages() {
        let candidates = vec![
            candidate("Annual Report", 1, 24, true),
            candidate("Overview", 2, 14, true),
            candidate("Financials", 3, 14, true),
        ];
        let outline = assign_levels(&candidates, true);

        assert_eq!(outline.len(), 2);
        assert_eq!(outline[0].text, "Overview");
        assert_eq!(outline[0].page, 1);
        assert_eq!(outline[1].text, "Financials");
        assert_eq!(outline[1].page, 2);
    }

    #[test]
    fn test_empty_candidates() {
        assert!(assign_levels(&[], false).is_empty());
        assert!(rank_styles(&[]).is_empty());
    }
}
