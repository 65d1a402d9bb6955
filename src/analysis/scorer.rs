//! Heading candidate filtering and scoring.

use std::collections::HashSet;

use regex::Regex;

use super::lines::TextLine;
use super::options::AnalysisConfig;

/// Lines shorter than this are never headings.
const MIN_HEADING_CHARS: usize = 4;

/// Enumerated lines with more words than this are list items, not headings.
const MAX_LIST_ITEM_WORDS: usize = 10;

/// Lines with fewer words than this get the short-line bonus.
const SHORT_LINE_WORDS: usize = 15;

/// Numbered headings with at most this many words get the structure bonus.
const MAX_STRUCTURED_WORDS: usize = 10;

/// Period-terminated lines with more words than this read as prose.
const SENTENCE_MIN_WORDS: usize = 8;

const BOLD_BONUS: i32 = 3;
const SIZE_BONUS: i32 = 3;
const SPACING_BONUS: i32 = 2;
const SHORT_LINE_BONUS: i32 = 1;
const STRUCTURE_BONUS: i32 = 2;
const SENTENCE_PENALTY: i32 = 3;

/// A line accepted as a heading.
#[derive(Debug, Clone, PartialEq)]
pub struct HeadingCandidate {
    /// The underlying line
    pub line: TextLine,
    /// Score the line reached
    pub score: i32,
}

/// Why a line was rejected before scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Repeating header/footer text
    Footer,
    /// Dot leaders, rules or bullets only
    Leader,
    /// A bare page or list number
    BareNumber,
    /// Too short to be a heading
    TooShort,
    /// A table of contents caption
    TableOfContents,
    /// A long enumerated sentence
    ListItem,
}

/// Scores lines against the body style.
///
/// Patterns are compiled once; the scorer is shared read-only across threads.
#[derive(Debug, Clone)]
pub struct HeadingScorer {
    leader: Regex,
    bare_number: Regex,
    list_item: Regex,
    structured: Regex,
}

impl HeadingScorer {
    /// Create a scorer with compiled patterns.
    pub fn new() -> Self {
        Self {
            leader: compile(r"^[.\-–—•\s]{5,}$"),
            bare_number: compile(r"^\d+[.:]?$"),
            list_item: compile(r"^\s*(?:\d+|[A-Za-z])[.):]\s+"),
            structured: compile(r"^\s*(?:\d+(?:\.\d+)*|[A-Z])[.):\-]\s+[A-Z]"),
        }
    }

    /// Check the junk filters in order, returning the first that applies.
    pub fn rejection(&self, line: &TextLine, footers: &HashSet<String>) -> Option<Rejection> {
        let text = line.text.trim();

        if footers.contains(text) {
            return Some(Rejection::Footer);
        }
        if self.leader.is_match(text) {
            return Some(Rejection::Leader);
        }
        if self.bare_number.is_match(text) {
            return Some(Rejection::BareNumber);
        }
        if text.chars().count() < MIN_HEADING_CHARS {
            return Some(Rejection::TooShort);
        }
        if text.to_lowercase().starts_with("table of contents") {
            return Some(Rejection::TableOfContents);
        }
        if self.list_item.is_match(text) && word_count(text) > MAX_LIST_ITEM_WORDS {
            return Some(Rejection::ListItem);
        }
        None
    }

    /// Additive heading score for a line that passed the junk filters.
    pub fn score(&self, line: &TextLine, body_size: i32, config: &AnalysisConfig) -> i32 {
        let text = line.text.trim();
        let words = word_count(text);
        let body = f64::from(body_size);
        let mut score = 0;

        if line.is_bold {
            score += BOLD_BONUS;
        }
        if f64::from(line.size) > body * config.heading_size_ratio {
            score += SIZE_BONUS;
        }
        if line.space_above > body * config.heading_gap_ratio {
            score += SPACING_BONUS;
        }
        if words < SHORT_LINE_WORDS {
            score += SHORT_LINE_BONUS;
        }
        if self.structured.is_match(text) && words <= MAX_STRUCTURED_WORDS {
            score += STRUCTURE_BONUS;
        }
        if text.ends_with('.') && words > SENTENCE_MIN_WORDS {
            score -= SENTENCE_PENALTY;
        }

        score
    }

    /// Filter and score every line, keeping those at or above the threshold.
    pub fn candidates(
        &self,
        lines: &[TextLine],
        body_size: i32,
        footers: &HashSet<String>,
        config: &AnalysisConfig,
    ) -> Vec<HeadingCandidate> {
        let mut candidates = Vec::new();

        for line in lines {
            if let Some(reason) = self.rejection(line, footers) {
                log::trace!("Rejected {:?} ({:?})", line.text, reason);
                continue;
            }

            let score = self.score(line, body_size, config);
            if score >= config.min_heading_score {
                candidates.push(HeadingCandidate {
                    line: line.clone(),
                    score,
                });
            }
        }

        log::debug!(
            "{} of {} lines accepted as headings",
            candidates.len(),
            lines.len()
        );
        candidates
    }
}

impl Default for HeadingScorer {
    fn default() -> Self {
        Self::new()
    }
}

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("heading pattern is valid")
}

fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(text: &str, size: i32, is_bold: bool, space_above: f64) -> TextLine {
        TextLine {
            page: 1,
            text: text.to_string(),
            size,
            font: if is_bold { "Arial-Bold" } else { "Arial" }.to_string(),
            is_bold,
            space_above,
            y0: 200.0,
        }
    }

    #[test]
    fn test_junk_rejections() {
        let scorer = HeadingScorer::new();
        let none = HashSet::new();
        let reject = |text: &str| scorer.rejection(&line(text, 20, true, 30.0), &none);

        assert_eq!(reject("........"), Some(Rejection::Leader));
        assert_eq!(reject("— — — — —"), Some(Rejection::Leader));
        assert_eq!(reject("• • •"), Some(Rejection::Leader));
        assert_eq!(reject("12"), Some(Rejection::BareNumber));
        assert_eq!(reject("104."), Some(Rejection::BareNumber));
        assert_eq!(reject("3:"), Some(Rejection::BareNumber));
        assert_eq!(reject("Abc"), Some(Rejection::TooShort));
        assert_eq!(
            reject("Table of Contents ....... 3"),
            Some(Rejection::TableOfContents)
        );
        assert_eq!(reject("TABLE OF CONTENTS"), Some(Rejection::TableOfContents));
        assert_eq!(reject("Overview"), None);
        assert_eq!(reject("1.2.3"), None);
    }

    #[test]
    fn test_footer_rejected_first() {
        let scorer = HeadingScorer::new();
        let footers: HashSet<String> = ["Company Confidential".to_string()].into();
        assert_eq!(
            scorer.rejection(&line("Company Confidential", 20, true, 30.0), &footers),
            Some(Rejection::Footer)
        );
    }

    #[test]
    fn test_long_list_items_rejected() {
        let scorer = HeadingScorer::new();
        let none = HashSet::new();
        let long = "2) This report is expected to be delivered to the board by the end of March";
        assert_eq!(
            scorer.rejection(&line(long, 10, false, 0.0), &none),
            Some(Rejection::ListItem)
        );
        let lettered = "b. the vendor shall provide weekly status reports to the steering committee";
        assert_eq!(
            scorer.rejection(&line(lettered, 10, false, 0.0), &none),
            Some(Rejection::ListItem)
        );
        assert_eq!(
            scorer.rejection(&line("2. Scope of Work", 10, true, 0.0), &none),
            None
        );
    }

    #[test]
    fn test_score_components() {
        let scorer = HeadingScorer::new();
        let config = AnalysisConfig::default();

        // bold + larger + spaced + short + structured
        assert_eq!(
            scorer.score(&line("1. Introduction", 14, true, 20.0), 10, &config),
            11
        );
        // plain body line: only the short-line bonus
        assert_eq!(
            scorer.score(&line("Some ordinary words here", 10, false, 2.0), 10, &config),
            1
        );
        // size must exceed 1.1x body, spacing must exceed 0.8x body
        assert_eq!(
            scorer.score(&line("Edge values", 11, false, 8.0), 10, &config),
            1
        );
    }

    #[test]
    fn test_structured_pattern() {
        let scorer = HeadingScorer::new();
        let config = AnalysisConfig::default();
        let plain = |text: &str| scorer.score(&line(text, 10, false, 0.0), 10, &config);

        assert_eq!(plain("2.3.1. Results"), 3);
        assert_eq!(plain("2.3.1 Results"), 1);
        assert_eq!(plain("A) Background"), 3);
        assert_eq!(plain("4- Methods"), 3);
        assert_eq!(plain("4: Methods"), 3);
        assert_eq!(plain("2.3 results"), 1);
        assert_eq!(plain("Appendix A"), 1);
    }

    #[test]
    fn test_sentence_penalty() {
        let scorer = HeadingScorer::new();
        let config = AnalysisConfig::default();
        let prose = "The committee reviewed all of the submitted proposals last year.";
        assert_eq!(scorer.score(&line(prose, 10, true, 0.0), 10, &config), 1);
    }

    #[test]
    fn test_threshold_boundary() {
        let scorer = HeadingScorer::new();
        let config = AnalysisConfig::default();
        let none = HashSet::new();

        // bold only, fifteen words: 3
        let bold_long = line(
            "one two three four five six seven eight nine ten eleven twelve thirteen fourteen fifteen",
            10,
            true,
            0.0,
        );
        // bold and short: 4
        let bold_short = line("Project Timeline", 10, true, 0.0);

        assert_eq!(scorer.score(&bold_long, 10, &config), 3);
        assert_eq!(scorer.score(&bold_short, 10, &config), 4);

        let candidates = scorer.candidates(&[bold_long, bold_short], 10, &none, &config);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].line.text, "Project Timeline");
        assert_eq!(candidates[0].score, 4);
    }
}
