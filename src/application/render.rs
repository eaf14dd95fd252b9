//! Rendering of a [`Document`] into an Office Open XML (`.docx`) package
//!
//! Each block maps to one docx paragraph: headings get the `HeadingN` style
//! from the static style table, paragraphs keep the default style. Embedded
//! `\n` become line breaks inside a single run, so a multi-line paragraph is
//! never split into separate paragraphs.

use std::collections::BTreeSet;
use std::io::Cursor;

use docx_rs::{BreakType, Docx, Paragraph, Run, RunFonts, Style, StyleType};
use tracing::{debug, instrument};

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::{heading_style, ContentBlock, Document, HeadingLevel, HeadingStyle};

/// Body font of the document defaults
pub const DEFAULT_FONT: &str = "Calibri";

/// Body size in half-points (11 pt)
pub const DEFAULT_SIZE: usize = 22;

/// Render all blocks, in order, into the bytes of a `.docx` file.
#[instrument(level = "debug", skip(document), fields(blocks = document.len()))]
pub fn render_docx(document: &Document) -> ApplicationResult<Vec<u8>> {
    let docx = document.blocks().fold(base_docx(document), |docx, block| {
        docx.add_paragraph(paragraph(block))
    });

    let mut buf = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buf)
        .map_err(|e| ApplicationError::OperationFailed {
            context: "pack docx archive".to_string(),
            source: Box::new(e),
        })?;

    let bytes = buf.into_inner();
    debug!("render_docx: {} bytes", bytes.len());
    Ok(bytes)
}

/// Empty package with document defaults and the heading styles the document uses.
fn base_docx(document: &Document) -> Docx {
    let fonts = RunFonts::new()
        .ascii(DEFAULT_FONT)
        .hi_ansi(DEFAULT_FONT)
        .cs(DEFAULT_FONT);

    let levels: BTreeSet<HeadingLevel> = document
        .blocks()
        .filter_map(ContentBlock::level)
        .collect();

    levels
        .into_iter()
        .map(heading_style)
        .fold(
            Docx::new().default_fonts(fonts).default_size(DEFAULT_SIZE),
            |docx, style| docx.add_style(docx_style(style)),
        )
}

fn docx_style(style: &HeadingStyle) -> Style {
    let s = Style::new(style.id, StyleType::Paragraph)
        .name(style.name)
        .size(style.size)
        .color(style.color);
    if style.bold {
        s.bold()
    } else {
        s
    }
}

fn paragraph(block: &ContentBlock) -> Paragraph {
    let p = Paragraph::new().add_run(text_run(block.text()));
    match block {
        ContentBlock::Heading { level, .. } => p.style(heading_style(*level).id),
        ContentBlock::Paragraph { .. } => p,
    }
}

/// One run per block; lines are joined by text-wrapping breaks.
fn text_run(text: &str) -> Run {
    text.split('\n')
        .enumerate()
        .fold(Run::new(), |run, (i, line)| {
            let run = if i > 0 {
                run.add_break(BreakType::TextWrapping)
            } else {
                run
            };
            run.add_text(line)
        })
}
