//! Append-only document model

use std::slice;

use tracing::trace;

use crate::domain::block::{ContentBlock, HeadingLevel};

/// Ordered sequence of content blocks.
///
/// Blocks keep exactly their append order. There is no removal, editing or
/// lookup; the only consumer of the sequence is the renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    blocks: Vec<ContentBlock>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a heading block.
    pub fn add_heading(&mut self, text: impl Into<String>, level: HeadingLevel) {
        let text = text.into();
        trace!("add_heading: level={}, text={:?}", level, text);
        self.blocks.push(ContentBlock::Heading { level, text });
    }

    /// Append a paragraph block. Line breaks stay inside the paragraph.
    pub fn add_paragraph(&mut self, text: impl Into<String>) {
        let text = text.into();
        trace!("add_paragraph: {} chars", text.len());
        self.blocks.push(ContentBlock::Paragraph { text });
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub(crate) fn blocks(&self) -> slice::Iter<'_, ContentBlock> {
        self.blocks.iter()
    }
}
