//! Shared helpers: read a saved .docx back into (style, text) pairs

#![allow(dead_code)]

use std::path::Path;

use docx_rs::{DocumentChild, Paragraph, ParagraphChild, RunChild};

/// One paragraph of a saved document as seen by a reader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadBlock {
    /// Paragraph style id, `None` for the default style
    pub style: Option<String>,
    /// Run text with line breaks as `\n`
    pub text: String,
}

impl ReadBlock {
    pub fn heading(level: u8, text: &str) -> Self {
        Self {
            style: Some(format!("Heading{level}")),
            text: text.to_string(),
        }
    }

    pub fn paragraph(text: &str) -> Self {
        Self {
            style: None,
            text: text.to_string(),
        }
    }
}

pub fn read_blocks(path: &Path) -> Vec<ReadBlock> {
    let bytes = std::fs::read(path).expect("read docx file");
    let docx = docx_rs::read_docx(&bytes).expect("parse docx");

    docx.document
        .children
        .iter()
        .filter_map(|child| match child {
            DocumentChild::Paragraph(p) => Some(ReadBlock {
                style: p
                    .property
                    .style
                    .as_ref()
                    .map(|s| s.val.clone())
                    .filter(|s| s != "Normal"),
                text: paragraph_text(p),
            }),
            _ => None,
        })
        .collect()
}

fn paragraph_text(p: &Paragraph) -> String {
    let mut text = String::new();
    for child in &p.children {
        if let ParagraphChild::Run(run) = child {
            for run_child in &run.children {
                match run_child {
                    RunChild::Text(t) => text.push_str(&t.text),
                    RunChild::Break(_) => text.push('\n'),
                    _ => {}
                }
            }
        }
    }
    text
}
