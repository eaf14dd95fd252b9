//! Domain layer: document model and style table
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod block;
pub mod document;
pub mod error;
pub mod styles;

pub use block::{ContentBlock, HeadingLevel};
pub use document::Document;
pub use error::{DomainError, DomainResult};
pub use styles::{heading_style, HeadingStyle, HEADING_STYLES};
