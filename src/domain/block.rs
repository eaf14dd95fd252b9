//! Content blocks: the units a document is assembled from

use std::fmt;

use crate::domain::error::{DomainError, DomainResult};

/// Section nesting depth of a heading (1 = top-level section, 2 = subsection).
///
/// Only levels `1..=9` exist in the output format's heading style hierarchy,
/// so anything else is rejected at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HeadingLevel(u8);

impl HeadingLevel {
    /// Deepest heading level supported by the style table.
    pub const MAX: u8 = 9;

    /// Top-level section heading.
    pub const SECTION: HeadingLevel = HeadingLevel(1);

    /// Subsection heading.
    pub const SUBSECTION: HeadingLevel = HeadingLevel(2);

    pub fn new(level: u8) -> DomainResult<Self> {
        if (1..=Self::MAX).contains(&level) {
            Ok(Self(level))
        } else {
            Err(DomainError::InvalidHeadingLevel(level))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for HeadingLevel {
    type Error = DomainError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Self::new(level)
    }
}

impl fmt::Display for HeadingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One unit of document content.
///
/// Text is stored verbatim: embedded `\n` and bullet glyphs are plain
/// characters, there is no structured list model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentBlock {
    Heading { level: HeadingLevel, text: String },
    Paragraph { text: String },
}

impl ContentBlock {
    pub fn text(&self) -> &str {
        match self {
            ContentBlock::Heading { text, .. } | ContentBlock::Paragraph { text } => text,
        }
    }

    /// Heading level, `None` for paragraphs.
    pub fn level(&self) -> Option<HeadingLevel> {
        match self {
            ContentBlock::Heading { level, .. } => Some(*level),
            ContentBlock::Paragraph { .. } => None,
        }
    }
}
