//! Output types produced by extraction.
//!
//! Everything here is plain owned data (`Serialize` + `Deserialize`), detached
//! from the parse tree, so results can outlive the [`crate::DocumentSource`]
//! they came from and be written out as JSON.

use crate::pipeline::input::InputMode;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single `<img>` element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    /// The `src` attribute, `None` when the element has none.
    pub src: Option<String>,
    /// The `alt` attribute, if any.
    pub alt: Option<String>,
    /// Every attribute on the element, including `src` and `alt`.
    pub attributes: BTreeMap<String, String>,
}

impl ImageRef {
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

/// One image inside a `<figure>` and the caption of that figure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Figure {
    /// The image's `src` value.
    pub image: String,
    /// Flattened text of the enclosing `<figure>`; `None` when it has none.
    pub caption: Option<String>,
}

/// Figures keyed by 1-based position in document order.
pub type FigureIndex = BTreeMap<usize, Figure>;

/// Images found inside `<figure>` blocks and their captions.
///
/// `images[i]` and `captions[i]` always describe the same image; both
/// vectors have the same length.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Figures {
    images: Vec<String>,
    captions: Vec<Option<String>>,
}

impl Figures {
    pub(crate) fn push(&mut self, image: String, caption: Option<String>) {
        self.images.push(image);
        self.captions.push(caption);
    }

    /// `src` of every figure image, in document order.
    pub fn image_only(&self) -> &[String] {
        &self.images
    }

    /// Caption for each entry of [`Figures::image_only`], aligned by position.
    pub fn captions(&self) -> &[Option<String>] {
        &self.captions
    }

    /// Image/caption pairs keyed `1..=len()`.
    pub fn index(&self) -> FigureIndex {
        self.iter()
            .enumerate()
            .map(|(i, figure)| (i + 1, figure))
            .collect()
    }

    /// Image/caption pairs in document order.
    pub fn iter(&self) -> impl Iterator<Item = Figure> + '_ {
        self.images
            .iter()
            .zip(&self.captions)
            .map(|(image, caption)| Figure {
                image: image.clone(),
                caption: caption.clone(),
            })
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

/// Everything extracted from one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionOutput {
    /// How the markup was obtained.
    pub source: SourceInfo,
    /// Flattened text of each `<p>`, in document order.
    pub paragraphs: Vec<String>,
    /// Every `<img>` in the document.
    pub images: Vec<ImageRef>,
    /// Figure images and captions keyed from 1.
    pub figures: FigureIndex,
}

/// Origin of a document. Inline markup is not repeated here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceInfo {
    pub mode: InputMode,
    /// URL or path; `None` for inline markup.
    pub location: Option<String>,
    /// Size of the raw markup in bytes.
    pub markup_bytes: usize,
}

/// Summary of a document without its content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub source: SourceInfo,
    /// Trimmed `<title>` text; `None` when missing or blank.
    pub title: Option<String>,
    pub paragraph_count: usize,
    pub image_count: usize,
    /// Number of figure images with a `src` (length of the figure index).
    pub figure_count: usize,
    /// Malformed-markup problems the parser recovered from.
    pub parse_errors: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Figures {
        let mut f = Figures::default();
        f.push("a.png".into(), Some("caption-A".into()));
        f.push("b.png".into(), None);
        f
    }

    #[test]
    fn views_stay_aligned() {
        let f = sample();
        assert_eq!(f.image_only(), ["a.png", "b.png"]);
        assert_eq!(f.captions(), [Some("caption-A".to_string()), None]);
        assert_eq!(f.len(), 2);
        assert!(!f.is_empty());
    }

    #[test]
    fn index_is_one_based_and_contiguous() {
        let index = sample().index();
        assert_eq!(index.keys().copied().collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(index[&1].image, "a.png");
        assert_eq!(index[&1].caption.as_deref(), Some("caption-A"));
        assert_eq!(index[&2].caption, None);
    }

    #[test]
    fn empty_figures_have_empty_index() {
        let f = Figures::default();
        assert!(f.is_empty());
        assert!(f.index().is_empty());
    }

    #[test]
    fn figure_index_serialises_with_numeric_keys() {
        let json = serde_json::to_value(sample().index()).unwrap();
        assert_eq!(json["1"]["image"], "a.png");
        assert!(json["2"]["caption"].is_null());
    }

    #[test]
    fn image_attr_lookup() {
        let mut img = ImageRef::default();
        img.attributes.insert("width".into(), "640".into());
        assert_eq!(img.attr("width"), Some("640"));
        assert_eq!(img.attr("height"), None);
    }
}
