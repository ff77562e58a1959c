//! # edgequake-html2md
//!
//! Pull the text, images and captioned figures out of an HTML document so
//! they can be reassembled downstream (a Markdown file, a search index, an
//! LLM prompt).
//!
//! ## Pipeline Overview
//!
//! ```text
//! URL / file / string
//!  │
//!  ├─ 1. Input   one GET, one file read, or the string itself
//!  ├─ 2. Parse   lenient HTML5 tree (scraper / html5ever)
//!  └─ 3. Select  <p> text · every <img> · <figure> image + caption pairs
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use edgequake_html2md::DocumentSource;
//!
//! // (location, is_file, is_text): inline markup here; (url, false, false)
//! // fetches a page and (path, true, false) reads a file.
//! let doc = DocumentSource::new(
//!     "<p>Intro</p>\
//!      <figure><img src='a.png'>caption-A</figure>\
//!      <figure><img src='b.png'></figure>",
//!     false,
//!     true,
//! )?;
//!
//! assert_eq!(doc.text_list(), vec!["Intro"]);
//!
//! let figures = doc.figures();
//! assert_eq!(figures.image_only(), ["a.png", "b.png"]);
//! assert_eq!(figures.captions(), [Some("caption-A".to_string()), None]);
//! assert_eq!(figures.index()[&1].image, "a.png");
//! # Ok::<(), edgequake_html2md::Html2MdError>(())
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `html2md` binary (clap + anyhow + tracing-subscriber) |
//!
//! Disable `cli` when using only the library:
//! ```toml
//! edgequake-html2md = { version = "0.1", default-features = false }
//! ```

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod document;
pub mod error;
pub mod extract;
pub mod output;
pub mod pipeline;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{SourceConfig, SourceConfigBuilder};
pub use document::DocumentSource;
pub use error::Html2MdError;
pub use extract::{extract, extract_sync, extract_to_file, inspect};
pub use output::{
    DocumentMetadata, ExtractionOutput, Figure, FigureIndex, Figures, ImageRef, SourceInfo,
};
pub use pipeline::input::{InputMode, InputSpec};
pub use pipeline::parse::{ParsedDocument, Tag};
