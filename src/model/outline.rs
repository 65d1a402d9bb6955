//! Document-level result types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Title used when nothing better can be derived.
pub const UNTITLED: &str = "Untitled Document";

/// Heading depth, rendered as `H1`, `H2`, ...
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HeadingLevel(u32);

impl HeadingLevel {
    /// Create a level from a 1-based rank. Rank 0 is clamped to 1.
    pub fn new(rank: u32) -> Self {
        Self(rank.max(1))
    }

    /// The 1-based depth.
    pub fn depth(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for HeadingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "H{}", self.0)
    }
}

impl FromStr for HeadingLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix('H')
            .ok_or_else(|| format!("heading level must start with 'H': {}", s))?;
        match digits.parse::<u32>() {
            Ok(rank) if rank >= 1 && !digits.starts_with('0') => Ok(Self(rank)),
            _ => Err(format!("invalid heading level: {}", s)),
        }
    }
}

impl Serialize for HeadingLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for HeadingLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A single heading in the inferred outline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineEntry {
    /// Heading depth
    pub level: HeadingLevel,
    /// Heading text, verbatim
    pub text: String,
    /// Page number (1-indexed, after cover adjustment)
    pub page: u32,
}

impl OutlineEntry {
    /// Create a new outline entry.
    pub fn new(level: HeadingLevel, text: impl Into<String>, page: u32) -> Self {
        Self {
            level,
            text: text.into(),
            page,
        }
    }
}

/// Title and outline inferred for one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentResult {
    /// Sanitized document title
    pub title: String,
    /// Headings in reading order
    pub outline: Vec<OutlineEntry>,
}

impl DocumentResult {
    /// Create a new result.
    pub fn new(title: impl Into<String>, outline: Vec<OutlineEntry>) -> Self {
        Self {
            title: title.into(),
            outline,
        }
    }

    /// Result for a document with nothing to analyze.
    pub fn untitled() -> Self {
        Self::new(UNTITLED, Vec::new())
    }

    /// Number of outline entries.
    pub fn heading_count(&self) -> usize {
        self.outline.len()
    }
}

impl Default for DocumentResult {
    fn default() -> Self {
        Self::untitled()
    }
}
