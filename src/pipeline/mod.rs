//! Pipeline stages for HTML extraction.
//!
//! Each submodule implements exactly one step, so each is testable on its
//! own.
//!
//! ## Data Flow
//!
//! ```text
//! input ──▶ parse ──▶ select
//! (URL/path/string)  (html5ever)  (p / img / figure)
//! ```
//!
//! 1. [`input`]  resolve the location to raw markup (one GET, one file read,
//!    or the string itself)
//! 2. [`parse`]  build the lenient parse tree and expose tag lookup and
//!    flattened text
//! 3. [`select`] the paragraph, image and figure views over that tree

pub mod input;
pub mod parse;
pub mod select;
