//! Input resolution: turn a location string plus mode into raw markup.
//!
//! Three modes mirror the three places HTML usually lives. Remote inputs are
//! fetched with a single GET (no retry; redirects follow reqwest's default
//! policy), files are read whole, and inline strings are used verbatim
//! without touching the network or disk.

use crate::config::SourceConfig;
use crate::error::Html2MdError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use tracing::{debug, info};

/// Where the markup for a document comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    /// `location` is a URL; the response body is the markup. (default)
    #[default]
    Remote,
    /// `location` is a filesystem path; the file contents are the markup.
    File,
    /// `location` is the markup itself.
    Inline,
}

impl fmt::Display for InputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            InputMode::Remote => "remote",
            InputMode::File => "file",
            InputMode::Inline => "inline",
        })
    }
}

/// The caller's chosen content source. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputSpec {
    location: String,
    mode: InputMode,
}

impl InputSpec {
    /// Build an input from the `file` / `text` flag pair.
    ///
    /// Neither flag means remote. Setting both is rejected with
    /// [`Html2MdError::InvalidInput`].
    pub fn from_flags(
        location: impl Into<String>,
        is_file: bool,
        is_text: bool,
    ) -> Result<Self, Html2MdError> {
        let mode = match (is_file, is_text) {
            (false, false) => InputMode::Remote,
            (true, false) => InputMode::File,
            (false, true) => InputMode::Inline,
            (true, true) => return Err(Html2MdError::conflicting_modes()),
        };
        Ok(Self::new(location, mode))
    }

    pub fn new(location: impl Into<String>, mode: InputMode) -> Self {
        Self {
            location: location.into(),
            mode,
        }
    }

    pub fn remote(url: impl Into<String>) -> Self {
        Self::new(url, InputMode::Remote)
    }

    pub fn file(path: impl Into<String>) -> Self {
        Self::new(path, InputMode::File)
    }

    pub fn inline(markup: impl Into<String>) -> Self {
        Self::new(markup, InputMode::Inline)
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    /// Short human-readable label for logs: inline markup is not echoed.
    pub fn label(&self) -> String {
        match self.mode {
            InputMode::Inline => format!("<inline markup, {} bytes>", self.location.len()),
            _ => self.location.clone(),
        }
    }
}

/// Resolve the input to raw markup.
pub async fn resolve_markup(
    input: &InputSpec,
    config: &SourceConfig,
) -> Result<String, Html2MdError> {
    match input.mode {
        InputMode::Remote => fetch_url(&input.location, config).await,
        InputMode::File => read_file(&input.location).await,
        InputMode::Inline => Ok(input.location.clone()),
    }
}

/// Read a local file as UTF-8 text. The handle is closed before returning.
async fn read_file(path_str: &str) -> Result<String, Html2MdError> {
    let path = PathBuf::from(path_str);
    info!("Reading HTML file: {}", path.display());

    let markup = tokio::fs::read_to_string(&path)
        .await
        .map_err(|source| Html2MdError::ReadFailed { path: path.clone(), source })?;

    debug!("Read {} bytes from {}", markup.len(), path.display());
    Ok(markup)
}

/// Issue exactly one GET and return the decoded body.
async fn fetch_url(url: &str, config: &SourceConfig) -> Result<String, Html2MdError> {
    info!("Fetching HTML from: {}", url);

    let fetch_err = |source: reqwest::Error| Html2MdError::FetchFailed {
        url: url.to_string(),
        source,
    };

    let client = reqwest::Client::builder()
        .user_agent(config.user_agent.as_str())
        .build()
        .map_err(fetch_err)?;

    let response = client.get(url).send().await.map_err(fetch_err)?;

    let status = response.status();
    if config.error_for_status && !status.is_success() {
        return Err(Html2MdError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let markup = response.text().await.map_err(fetch_err)?;
    debug!("Fetched {} bytes (HTTP {}) from {}", markup.len(), status, url);
    Ok(markup)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_select_mode() {
        assert_eq!(
            InputSpec::from_flags("https://a.b", false, false).unwrap().mode(),
            InputMode::Remote
        );
        assert_eq!(
            InputSpec::from_flags("page.html", true, false).unwrap().mode(),
            InputMode::File
        );
        assert_eq!(
            InputSpec::from_flags("<p>x</p>", false, true).unwrap().mode(),
            InputMode::Inline
        );
    }

    #[test]
    fn both_flags_rejected() {
        for location in ["", "page.html", "https://example.com", "<p>x</p>"] {
            let err = InputSpec::from_flags(location, true, true).unwrap_err();
            assert!(matches!(err, Html2MdError::InvalidInput(_)), "{location:?}");
        }
    }

    #[test]
    fn label_hides_inline_markup() {
        assert_eq!(InputSpec::inline("<p>secret</p>").label(), "<inline markup, 13 bytes>");
        assert_eq!(InputSpec::file("a.html").label(), "a.html");
    }

    #[test]
    fn inline_resolves_verbatim() {
        let markup = "  <p>unparsed &amp; untouched</p>\n";
        let resolved = tokio_test::block_on(resolve_markup(
            &InputSpec::inline(markup),
            &SourceConfig::default(),
        ))
        .unwrap();
        assert_eq!(resolved, markup);
    }

    #[tokio::test]
    async fn missing_file_is_read_failed() {
        let err = resolve_markup(
            &InputSpec::file("/definitely/not/here.html"),
            &SourceConfig::default(),
        )
        .await
        .unwrap_err();
        match err {
            Html2MdError::ReadFailed { source, .. } => {
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound)
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn mode_display() {
        assert_eq!(InputMode::Remote.to_string(), "remote");
        assert_eq!(InputMode::File.to_string(), "file");
        assert_eq!(InputMode::Inline.to_string(), "inline");
    }
}
