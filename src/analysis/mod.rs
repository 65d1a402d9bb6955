//! Document structure inference.
//!
//! The pipeline runs in stages over one document:
//!
//! 1. [`reconstruct_lines`] flattens the layout into [`TextLine`]s.
//! 2. [`detect_body_size`] estimates the body font size from sampled pages.
//! 3. [`looks_like_cover_page`] decides whether page 1 is a title page.
//! 4. [`detect_footers`] collects repeating footer-zone text.
//! 5. [`HeadingScorer`] filters junk and scores the rest.
//! 6. [`assign_levels`] ranks heading styles and builds the outline.
//! 7. [`TitleSanitizer`] picks the title.
//!
//! [`StructureAnalyzer`] ties the stages together.

mod body;
mod cover;
mod footer;
mod levels;
mod lines;
mod options;
mod pipeline;
mod scorer;
mod title;

pub use body::{body_sample_pages, detect_body_size, SizeHistogram};
pub use cover::looks_like_cover_page;
pub use footer::{detect_footers, footer_sample_pages};
pub use levels::{assign_levels, rank_styles, HeadingStyle};
pub use lines::{is_bold_font, reconstruct_lines, round_size, TextLine};
pub use options::{AnalysisConfig, DEFAULT_BODY_SIZE};
pub use pipeline::{AnalysisReport, StructureAnalyzer};
pub use scorer::{HeadingCandidate, HeadingScorer, Rejection};
pub use title::{extract_cover_title, extract_leading_title, TitleSanitizer};
