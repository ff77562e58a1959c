//! One-call entry points: resolve, parse, extract.
//!
//! These wrap [`DocumentSource`] for callers that only want the results.
//! Keep a `DocumentSource` instead when you need several views over the same
//! document without re-fetching it.

use crate::config::SourceConfig;
use crate::document::DocumentSource;
use crate::error::Html2MdError;
use crate::output::{DocumentMetadata, ExtractionOutput};
use crate::pipeline::input::InputSpec;
use std::io::Write;
use std::path::Path;
use std::time::Instant;
use tracing::info;

/// Resolve `input` and extract paragraphs, images and figures.
///
/// # Errors
/// - [`Html2MdError::FetchFailed`] / [`Html2MdError::HttpStatus`] for remote inputs
/// - [`Html2MdError::ReadFailed`] for file inputs
///
/// Malformed markup is never an error.
pub async fn extract(
    input: InputSpec,
    config: &SourceConfig,
) -> Result<ExtractionOutput, Html2MdError> {
    let start = Instant::now();
    info!("Starting extraction: {}", input.label());

    let output = DocumentSource::open(input, config).await?.extract();

    info!(
        "Extraction complete: {} paragraphs, {} images, {} figures in {}ms",
        output.paragraphs.len(),
        output.images.len(),
        output.figures.len(),
        start.elapsed().as_millis()
    );
    Ok(output)
}

/// Synchronous wrapper around [`extract`].
///
/// Creates a temporary tokio runtime internally.
pub fn extract_sync(
    input: InputSpec,
    config: &SourceConfig,
) -> Result<ExtractionOutput, Html2MdError> {
    Ok(DocumentSource::open_sync(input, config)?.extract())
}

/// Extract and write the result as pretty-printed JSON.
///
/// Uses atomic write (temp file in the target directory + rename) so a
/// failed run never leaves a truncated file behind.
pub async fn extract_to_file(
    input: InputSpec,
    output_path: impl AsRef<Path>,
    config: &SourceConfig,
) -> Result<ExtractionOutput, Html2MdError> {
    let output = extract(input, config).await?;
    let path = output_path.as_ref();
    write_json_atomic(path, &output)?;
    info!("Wrote {}", path.display());
    Ok(output)
}

/// Resolve `input` and summarise it without returning the content.
pub async fn inspect(
    input: InputSpec,
    config: &SourceConfig,
) -> Result<DocumentMetadata, Html2MdError> {
    Ok(DocumentSource::open(input, config).await?.metadata())
}

fn write_json_atomic(path: &Path, output: &ExtractionOutput) -> Result<(), Html2MdError> {
    let write_err = |source: std::io::Error| Html2MdError::OutputWriteFailed {
        path: path.to_path_buf(),
        source,
    };

    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent).map_err(write_err)?;

    let json = serde_json::to_vec_pretty(output)
        .map_err(|e| Html2MdError::Internal(format!("Failed to serialise output: {e}")))?;

    let mut tmp = tempfile::NamedTempFile::new_in(parent).map_err(write_err)?;
    tmp.write_all(&json).map_err(write_err)?;
    tmp.write_all(b"\n").map_err(write_err)?;
    tmp.persist(path).map_err(|e| write_err(e.error))?;
    Ok(())
}
