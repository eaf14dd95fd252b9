//! Static heading style table
//!
//! Maps a heading level to the paragraph style it is rendered with. Values
//! follow Word's built-in "Heading N" styles.

use crate::domain::block::HeadingLevel;

/// Paragraph style used for one heading level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadingStyle {
    /// Style id referenced from `<w:pStyle>`
    pub id: &'static str,
    /// Display name shown in Word's style gallery
    pub name: &'static str,
    /// Font size in half-points
    pub size: usize,
    pub bold: bool,
    /// RGB hex without leading `#`
    pub color: &'static str,
}

const fn style(
    id: &'static str,
    name: &'static str,
    size: usize,
    color: &'static str,
) -> HeadingStyle {
    HeadingStyle {
        id,
        name,
        size,
        bold: true,
        color,
    }
}

/// Indexed by `level - 1`.
pub const HEADING_STYLES: [HeadingStyle; HeadingLevel::MAX as usize] = [
    style("Heading1", "Heading 1", 28, "365F91"),
    style("Heading2", "Heading 2", 26, "4F81BD"),
    style("Heading3", "Heading 3", 22, "4F81BD"),
    style("Heading4", "Heading 4", 22, "4F81BD"),
    style("Heading5", "Heading 5", 22, "243F60"),
    style("Heading6", "Heading 6", 22, "243F60"),
    style("Heading7", "Heading 7", 22, "404040"),
    style("Heading8", "Heading 8", 20, "4F81BD"),
    style("Heading9", "Heading 9", 20, "404040"),
];

pub fn heading_style(level: HeadingLevel) -> &'static HeadingStyle {
    &HEADING_STYLES[usize::from(level.get()) - 1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_each_level_when_looking_up_then_id_carries_level() {
        for raw in 1..=HeadingLevel::MAX {
            let level = HeadingLevel::new(raw).unwrap();
            assert_eq!(heading_style(level).id, format!("Heading{raw}"));
            assert_eq!(heading_style(level).name, format!("Heading {raw}"));
        }
    }

    #[test]
    fn given_section_levels_then_top_level_is_largest() {
        let h1 = heading_style(HeadingLevel::SECTION);
        let h2 = heading_style(HeadingLevel::SUBSECTION);
        assert!(h1.size > h2.size);
        assert!(h1.bold && h2.bold);
    }
}
