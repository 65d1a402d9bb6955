//! Result model for inferred document structure.
//!
//! These are the types the analysis produces and the renderers serialize.

mod outline;

pub use outline::{DocumentResult, HeadingLevel, OutlineEntry, UNTITLED};
