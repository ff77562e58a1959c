//! The three extraction views: paragraph text, all images, figures.
//!
//! Each function is a pure read over a [`ParsedDocument`]; calling it twice
//! returns the same result.

use crate::output::{Figures, ImageRef};
use crate::pipeline::parse::{find_within, flattened_text, ParsedDocument, Tag};
use scraper::ElementRef;

/// Flattened text of every `<p>` in document order. Empty paragraphs are kept as `""`.
pub fn paragraph_text(doc: &ParsedDocument) -> Vec<String> {
    doc.find_all(Tag::Paragraph).map(flattened_text).collect()
}

/// Every `<img>` in document order, whatever contains it.
pub fn all_images(doc: &ParsedDocument) -> Vec<ImageRef> {
    doc.find_all(Tag::Image).map(image_ref).collect()
}

/// Images with a `src` inside `<figure>` blocks, each paired with its figure's text.
///
/// An `<img>` without `src` is skipped outright, so it leaves no gap in
/// either view. All images of one figure share that figure's caption.
pub fn figures(doc: &ParsedDocument) -> Figures {
    let mut figures = Figures::default();

    for figure in doc.find_all(Tag::Figure) {
        let text = flattened_text(figure);
        let caption = (!text.is_empty()).then_some(text);

        for img in find_within(figure, Tag::Image) {
            let Some(src) = img.value().attr("src") else {
                continue;
            };
            figures.push(src.to_string(), caption.clone());
        }
    }

    figures
}

/// Trimmed text of the first `<title>`; `None` when absent or blank.
pub fn title(doc: &ParsedDocument) -> Option<String> {
    doc.find_all(Tag::Title)
        .next()
        .map(|t| flattened_text(t).trim().to_string())
        .filter(|t| !t.is_empty())
}

fn image_ref(img: ElementRef<'_>) -> ImageRef {
    let element = img.value();
    ImageRef {
        src: element.attr("src").map(str::to_string),
        alt: element.attr("alt").map(str::to_string),
        attributes: element
            .attrs()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(markup: &str) -> ParsedDocument {
        ParsedDocument::parse(markup)
    }

    #[test]
    fn paragraphs_keep_empty_entries() {
        assert_eq!(paragraph_text(&doc("<p>A</p><p></p><p>B</p>")), vec!["A", "", "B"]);
    }

    #[test]
    fn no_paragraphs_is_empty() {
        assert!(paragraph_text(&doc("<div>just a div</div>")).is_empty());
        assert!(paragraph_text(&doc("")).is_empty());
    }

    #[test]
    fn images_regardless_of_container() {
        let images = all_images(&doc(
            "<div><img src='x.png'></div><figure><img src='y.png'></figure>",
        ));
        let srcs: Vec<_> = images.iter().map(|i| i.src.as_deref()).collect();
        assert_eq!(srcs, vec![Some("x.png"), Some("y.png")]);
    }

    #[test]
    fn image_without_src_is_still_listed() {
        let images = all_images(&doc("<img alt='logo' width=10>"));
        assert_eq!(images.len(), 1);
        assert_eq!(images[0].src, None);
        assert_eq!(images[0].alt.as_deref(), Some("logo"));
        assert_eq!(images[0].attr("width"), Some("10"));
    }

    #[test]
    fn figures_pair_images_and_captions() {
        let f = figures(&doc(
            "<figure><img src='a.png'>caption-A</figure><figure><img src='b.png'></figure>",
        ));
        assert_eq!(f.image_only(), ["a.png", "b.png"]);
        assert_eq!(f.captions(), [Some("caption-A".to_string()), None]);
        let index = f.index();
        assert_eq!(index[&1].image, "a.png");
        assert_eq!(index[&1].caption.as_deref(), Some("caption-A"));
        assert_eq!(index[&2].image, "b.png");
        assert_eq!(index[&2].caption, None);
    }

    #[test]
    fn figure_image_without_src_is_skipped() {
        let f = figures(&doc(
            "<figure><img alt='no source'>first</figure>\
             <figure><img src='b.png'>second</figure>",
        ));
        assert_eq!(f.image_only(), ["b.png"]);
        assert_eq!(f.captions(), [Some("second".to_string())]);
        assert_eq!(f.index().keys().copied().collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn caption_is_shared_by_all_images_of_a_figure() {
        let f = figures(&doc("<figure><img src='1.png'><img src='2.png'>shared</figure>"));
        let index = f.index();
        assert_eq!(index.len(), 2);
        assert_eq!(index[&1].caption.as_deref(), Some("shared"));
        assert_eq!(index[&2].caption.as_deref(), Some("shared"));
        assert_eq!(index[&2].image, "2.png");
    }

    #[test]
    fn figcaption_text_becomes_caption() {
        let f = figures(&doc(
            "<figure><img src='c.png'><figcaption>Fig. 1: <em>cats</em></figcaption></figure>",
        ));
        assert_eq!(f.captions(), [Some("Fig. 1: cats".to_string())]);
    }

    #[test]
    fn empty_src_counts_as_present() {
        let f = figures(&doc("<figure><img src=''></figure>"));
        assert_eq!(f.image_only(), [""]);
        assert_eq!(f.captions(), [None::<String>]);
    }

    #[test]
    fn images_outside_figures_are_ignored() {
        let f = figures(&doc("<img src='ad.png'><p>text</p>"));
        assert!(f.is_empty());
    }

    #[test]
    fn title_is_trimmed() {
        assert_eq!(
            title(&doc("<html><head><title>  Hello </title></head></html>")).as_deref(),
            Some("Hello")
        );
        assert_eq!(title(&doc("<title>   </title>")), None);
        assert_eq!(title(&doc("<p>x</p>")), None);
    }
}
