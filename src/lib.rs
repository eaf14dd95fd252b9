//! reportdoc: builds a Word (`.docx`) report from an ordered list of
//! headings and paragraphs.
//!
//! ```no_run
//! use std::path::Path;
//! use std::sync::Arc;
//!
//! use reportdoc::application::services::DocumentService;
//! use reportdoc::domain::{Document, HeadingLevel};
//! use reportdoc::infrastructure::traits::RealFileSystem;
//!
//! let mut doc = Document::new();
//! doc.add_heading("Title", HeadingLevel::SECTION);
//! doc.add_paragraph("Body text");
//!
//! let service = DocumentService::new(Arc::new(RealFileSystem));
//! service.save(&doc, Path::new("report.docx")).unwrap();
//! ```

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;

pub use domain::{ContentBlock, Document, HeadingLevel};
