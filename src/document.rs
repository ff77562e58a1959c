//! [`DocumentSource`]: one resolved, parsed HTML document and its queries.

use crate::config::SourceConfig;
use crate::error::Html2MdError;
use crate::output::{DocumentMetadata, ExtractionOutput, Figures, ImageRef, SourceInfo};
use crate::pipeline::input::{self, InputMode, InputSpec};
use crate::pipeline::parse::ParsedDocument;
use crate::pipeline::select;
use tracing::debug;

/// A parsed HTML document together with the input it came from.
///
/// The parse tree is built once, at construction, and only read afterwards;
/// every query can be called any number of times with identical results.
///
/// # Example
/// ```rust
/// use edgequake_html2md::DocumentSource;
///
/// let doc = DocumentSource::new(
///     "<figure><img src='a.png'>caption-A</figure><p>Hello</p>",
///     false,
///     true,
/// )
/// .unwrap();
///
/// assert_eq!(doc.text_list(), vec!["Hello"]);
/// assert_eq!(doc.figures().image_only(), ["a.png"]);
/// ```
#[derive(Debug)]
pub struct DocumentSource {
    input: InputSpec,
    markup_bytes: usize,
    document: ParsedDocument,
}

impl DocumentSource {
    /// Resolve `location` and parse it, choosing the mode from two flags.
    ///
    /// | `is_file` | `is_text` | `location` is |
    /// |---|---|---|
    /// | false | false | a URL, fetched with one GET |
    /// | true  | false | a file path, read whole |
    /// | false | true  | the markup itself |
    /// | true  | true  | rejected: [`Html2MdError::InvalidInput`] |
    ///
    /// Remote and file inputs block on a private current-thread runtime, so
    /// this must not be called from inside an async context; use
    /// [`DocumentSource::open`] there.
    pub fn new(
        location: impl Into<String>,
        is_file: bool,
        is_text: bool,
    ) -> Result<Self, Html2MdError> {
        let input = InputSpec::from_flags(location, is_file, is_text)?;
        Self::open_sync(input, &SourceConfig::default())
    }

    /// Parse inline markup. No I/O, cannot fail.
    pub fn from_text(markup: impl Into<String>) -> Self {
        Self::from_spec_inline(InputSpec::inline(markup))
    }

    /// Resolve and parse `input` asynchronously.
    pub async fn open(input: InputSpec, config: &SourceConfig) -> Result<Self, Html2MdError> {
        if input.mode() == InputMode::Inline {
            return Ok(Self::from_spec_inline(input));
        }
        let markup = input::resolve_markup(&input, config).await?;
        Ok(Self::from_markup(input, &markup))
    }

    /// Blocking form of [`DocumentSource::open`].
    ///
    /// Inline input is parsed directly; other modes run on a temporary
    /// current-thread tokio runtime.
    pub fn open_sync(input: InputSpec, config: &SourceConfig) -> Result<Self, Html2MdError> {
        if input.mode() == InputMode::Inline {
            return Ok(Self::from_spec_inline(input));
        }
        let markup = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| Html2MdError::Internal(format!("Failed to create tokio runtime: {}", e)))?
            .block_on(input::resolve_markup(&input, config))?;
        Ok(Self::from_markup(input, &markup))
    }

    fn from_spec_inline(input: InputSpec) -> Self {
        let document = ParsedDocument::parse(input.location());
        Self::assemble(input.location().len(), input, document)
    }

    fn from_markup(input: InputSpec, markup: &str) -> Self {
        Self::assemble(markup.len(), input, ParsedDocument::parse(markup))
    }

    fn assemble(markup_bytes: usize, input: InputSpec, document: ParsedDocument) -> Self {
        debug!(
            "Parsed {} ({} bytes, {} recovered parse errors)",
            input.label(),
            markup_bytes,
            document.parse_errors()
        );
        Self {
            input,
            markup_bytes,
            document,
        }
    }

    pub fn input(&self) -> &InputSpec {
        &self.input
    }

    pub fn document(&self) -> &ParsedDocument {
        &self.document
    }

    /// The markup itself, when the input was inline.
    pub fn markup(&self) -> Option<&str> {
        (self.input.mode() == InputMode::Inline).then(|| self.input.location())
    }

    /// Flattened text of every `<p>`, in document order; empty paragraphs give `""`.
    pub fn text_list(&self) -> Vec<String> {
        select::paragraph_text(&self.document)
    }

    /// Every `<img>`, in document order.
    pub fn images(&self) -> Vec<ImageRef> {
        select::all_images(&self.document)
    }

    /// Images inside `<figure>` blocks with their captions.
    pub fn figures(&self) -> Figures {
        select::figures(&self.document)
    }

    /// Trimmed `<title>` text.
    pub fn title(&self) -> Option<String> {
        select::title(&self.document)
    }

    /// All three views at once, as owned serialisable data.
    pub fn extract(&self) -> ExtractionOutput {
        let output = ExtractionOutput {
            source: self.source_info(),
            paragraphs: self.text_list(),
            images: self.images(),
            figures: self.figures().index(),
        };
        debug!(
            "Extracted {} paragraphs, {} images, {} figure images from {}",
            output.paragraphs.len(),
            output.images.len(),
            output.figures.len(),
            self.input.label()
        );
        output
    }

    /// Counts and title, without the content.
    pub fn metadata(&self) -> DocumentMetadata {
        DocumentMetadata {
            source: self.source_info(),
            title: self.title(),
            paragraph_count: self.text_list().len(),
            image_count: self.images().len(),
            figure_count: self.figures().len(),
            parse_errors: self.document.parse_errors(),
        }
    }

    fn source_info(&self) -> SourceInfo {
        SourceInfo {
            mode: self.input.mode(),
            location: match self.input.mode() {
                InputMode::Inline => None,
                _ => Some(self.input.location().to_string()),
            },
            markup_bytes: self.markup_bytes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_flags_fail_before_any_io() {
        let err = DocumentSource::new("https://unreachable.invalid/", true, true).unwrap_err();
        assert!(matches!(err, Html2MdError::InvalidInput(_)));
    }

    #[test]
    fn inline_markup_used_verbatim() {
        let markup = "<p>A</p><p></p><p>B</p>";
        let doc = DocumentSource::new(markup, false, true).unwrap();
        assert_eq!(doc.markup(), Some(markup));
        assert_eq!(doc.input().mode(), InputMode::Inline);
        assert_eq!(doc.text_list(), vec!["A", "", "B"]);
    }

    #[test]
    fn queries_are_idempotent() {
        let doc = DocumentSource::from_text(
            "<p>x</p><figure><img src='a.png'>cap</figure><img src='b.png'>",
        );
        assert_eq!(doc.text_list(), doc.text_list());
        assert_eq!(doc.images(), doc.images());
        assert_eq!(doc.figures(), doc.figures());
        assert_eq!(doc.extract(), doc.extract());
    }

    #[test]
    fn extract_bundles_all_views() {
        let doc = DocumentSource::from_text(
            "<title>T</title><p>one</p><figure><img src='a.png'>cap</figure><img src='b.png'>",
        );
        let out = doc.extract();
        assert_eq!(out.paragraphs, vec!["one"]);
        assert_eq!(out.images.len(), 2);
        assert_eq!(out.figures.len(), 1);
        assert_eq!(out.source.mode, InputMode::Inline);
        assert_eq!(out.source.location, None);
    }

    #[test]
    fn metadata_counts() {
        let doc = DocumentSource::from_text(
            "<title> Page </title><p>a</p><p>b</p>\
             <figure><img src='1.png'><img>two</figure><img src='x.png'>",
        );
        let meta = doc.metadata();
        assert_eq!(meta.title.as_deref(), Some("Page"));
        assert_eq!(meta.paragraph_count, 2);
        assert_eq!(meta.image_count, 3);
        assert_eq!(meta.figure_count, 1);
    }

    #[test]
    fn open_inline_needs_no_runtime_io() {
        let doc = tokio_test::block_on(DocumentSource::open(
            InputSpec::inline("<p>async</p>"),
            &SourceConfig::default(),
        ))
        .unwrap();
        assert_eq!(doc.text_list(), vec!["async"]);
    }
}
