//! Parsed markup and the two tree operations extraction needs.
//!
//! `scraper` wraps html5ever, which recovers from malformed markup the way a
//! browser does (unclosed tags, stray end tags, missing `<html>`/`<body>`),
//! so parsing itself never fails. Extraction only ever asks two questions
//! of the tree: "every element with this tag, in document order" and "the
//! flattened text under this element".

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use std::fmt;

static P_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("p").expect("static `p` selector is valid"));
static IMG_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("img").expect("static `img` selector is valid"));
static FIGURE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("figure").expect("static `figure` selector is valid"));
static TITLE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("title").expect("static `title` selector is valid"));

/// The tags extraction filters on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Paragraph,
    Image,
    Figure,
    Title,
}

impl Tag {
    pub fn name(self) -> &'static str {
        match self {
            Tag::Paragraph => "p",
            Tag::Image => "img",
            Tag::Figure => "figure",
            Tag::Title => "title",
        }
    }

    fn selector(self) -> &'static Selector {
        match self {
            Tag::Paragraph => &P_SELECTOR,
            Tag::Image => &IMG_SELECTOR,
            Tag::Figure => &FIGURE_SELECTOR,
            Tag::Title => &TITLE_SELECTOR,
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An immutable, queryable HTML tree.
#[derive(Clone)]
pub struct ParsedDocument {
    html: Html,
}

impl ParsedDocument {
    /// Parse a full document leniently. Never fails.
    pub fn parse(markup: &str) -> Self {
        Self {
            html: Html::parse_document(markup),
        }
    }

    /// Every element named `tag` anywhere in the document, in document order.
    ///
    /// Walks the tree from the root element rather than `Html::select`, which
    /// follows node creation order and can diverge from document order once
    /// the parser has re-parented misnested content.
    pub fn find_all(&self, tag: Tag) -> impl Iterator<Item = ElementRef<'_>> + '_ {
        self.html.root_element().select(tag.selector())
    }

    /// Non-fatal parse problems html5ever recovered from.
    pub fn parse_errors(&self) -> usize {
        self.html.errors.len()
    }

    pub fn html(&self) -> &Html {
        &self.html
    }
}

impl fmt::Debug for ParsedDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParsedDocument")
            .field("nodes", &self.html.tree.nodes().count())
            .field("parse_errors", &self.parse_errors())
            .finish()
    }
}

/// Every descendant element of `root` named `tag`, in document order.
pub fn find_within<'a>(
    root: ElementRef<'a>,
    tag: Tag,
) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    root.select(tag.selector())
}

/// All descendant text of `element` concatenated, tags stripped.
///
/// Whitespace is kept as written; entities are already decoded by the parser.
pub fn flattened_text(element: ElementRef<'_>) -> String {
    element.text().collect()
}
