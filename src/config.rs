//! Configuration for resolving remote HTML inputs.
//!
//! File and inline inputs need no configuration; every knob here applies to
//! the single HTTP request made in remote mode. Build a [`SourceConfig`] via
//! [`SourceConfig::builder()`] or take [`SourceConfig::default()`].

use crate::error::Html2MdError;
use serde::{Deserialize, Serialize};

/// Default `User-Agent` header sent with remote requests.
pub const DEFAULT_USER_AGENT: &str = concat!("edgequake-html2md/", env!("CARGO_PKG_VERSION"));

/// Configuration for document resolution.
///
/// # Example
/// ```rust
/// use edgequake_html2md::SourceConfig;
///
/// let config = SourceConfig::builder()
///     .user_agent("my-crawler/1.0")
///     .error_for_status(true)
///     .build()
///     .unwrap();
/// assert!(config.error_for_status);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// `User-Agent` header for remote requests. Default: [`DEFAULT_USER_AGENT`].
    ///
    /// Some sites serve a stripped page (or a 403) to clients without one.
    pub user_agent: String,

    /// Treat non-2xx responses as [`Html2MdError::HttpStatus`]. Default: false.
    ///
    /// When false the response body is parsed whatever the status, so a
    /// custom 404 page still yields its paragraphs and images.
    pub error_for_status: bool,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            error_for_status: false,
        }
    }
}

impl SourceConfig {
    /// Create a new builder for `SourceConfig`.
    pub fn builder() -> SourceConfigBuilder {
        SourceConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`SourceConfig`].
#[derive(Debug)]
pub struct SourceConfigBuilder {
    config: SourceConfig,
}

impl SourceConfigBuilder {
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.config.user_agent = ua.into();
        self
    }

    pub fn error_for_status(mut self, v: bool) -> Self {
        self.config.error_for_status = v;
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<SourceConfig, Html2MdError> {
        let ua = self.config.user_agent.trim();
        if ua.is_empty() {
            return Err(Html2MdError::InvalidConfig(
                "User-Agent must not be empty".into(),
            ));
        }
        if ua.chars().any(|c| c.is_control()) {
            return Err(Html2MdError::InvalidConfig(format!(
                "User-Agent contains control characters: {:?}",
                self.config.user_agent
            )));
        }
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let c = SourceConfig::default();
        assert!(c.user_agent.starts_with("edgequake-html2md/"));
        assert!(!c.error_for_status);
    }

    #[test]
    fn builder_sets_fields() {
        let c = SourceConfig::builder()
            .user_agent("bot/2")
            .error_for_status(true)
            .build()
            .unwrap();
        assert_eq!(c.user_agent, "bot/2");
        assert!(c.error_for_status);
    }

    #[test]
    fn builder_rejects_blank_user_agent() {
        let err = SourceConfig::builder().user_agent("   ").build().unwrap_err();
        assert!(matches!(err, Html2MdError::InvalidConfig(_)));
    }

    #[test]
    fn builder_rejects_header_breaking_user_agent() {
        let err = SourceConfig::builder()
            .user_agent("bot\r\nX-Evil: 1")
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("control characters"));
    }
}
