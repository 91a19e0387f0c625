//! Configuration types for the Analytics API client.
//!
//! This module provides the configuration used to construct an
//! [`HttpClient`](crate::clients::HttpClient) and the [`Analytics`](crate::Analytics)
//! service root.
//!
//! # Overview
//!
//! - [`AnalyticsConfig`]: The configuration struct holding all client settings
//! - [`AnalyticsConfigBuilder`]: A builder for constructing [`AnalyticsConfig`] instances
//! - [`BaseUrl`]: A validated, slash-terminated base URL
//!
//! # Example
//!
//! ```rust
//! use analytics_api::{AnalyticsConfig, BaseUrl};
//!
//! let config = AnalyticsConfig::builder()
//!     .base_url(BaseUrl::new("https://www.googleapis.com/analytics/v3/").unwrap())
//!     .user_agent_prefix("ReportingJob/2.1")
//!     .header("X-Goog-User-Project", "billing-project")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.user_agent_prefix(), Some("ReportingJob/2.1"));
//! ```

mod newtypes;

pub use newtypes::BaseUrl;

use crate::error::ConfigError;

/// Default base URL for JSON endpoints.
pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/analytics/v3/";

/// Default base URL for media upload endpoints.
pub const DEFAULT_UPLOAD_BASE_URL: &str = "https://www.googleapis.com/upload/analytics/v3/";

/// Resumable chunks (except the last one) must be a multiple of this size.
pub const MIN_CHUNK_SIZE: usize = 256 * 1024;

/// Default resumable upload chunk size (8 MiB).
pub const DEFAULT_CHUNK_SIZE: usize = 8 * 1024 * 1024;

/// Configuration for the Analytics API client.
///
/// Authentication is not part of this configuration: the caller supplies a
/// `reqwest::Client` that already attaches valid credentials (see
/// [`HttpClient::new`](crate::clients::HttpClient::new)).
///
/// # Thread Safety
///
/// `AnalyticsConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct AnalyticsConfig {
    base_url: BaseUrl,
    upload_base_url: BaseUrl,
    user_agent_prefix: Option<String>,
    headers: Vec<(String, String)>,
    chunk_size: usize,
}

impl AnalyticsConfig {
    /// Creates a new builder for constructing an `AnalyticsConfig`.
    #[must_use]
    pub fn builder() -> AnalyticsConfigBuilder {
        AnalyticsConfigBuilder::new()
    }

    /// Returns the base URL for JSON endpoints.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the base URL for media upload endpoints.
    #[must_use]
    pub const fn upload_base_url(&self) -> &BaseUrl {
        &self.upload_base_url
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the outbound header fragment sent with every request.
    #[must_use]
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Returns the resumable upload chunk size in bytes.
    #[must_use]
    pub const fn chunk_size(&self) -> usize {
        self.chunk_size
    }
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            base_url: default_url(DEFAULT_BASE_URL),
            upload_base_url: default_url(DEFAULT_UPLOAD_BASE_URL),
            user_agent_prefix: None,
            headers: Vec::new(),
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

fn default_url(url: &'static str) -> BaseUrl {
    BaseUrl::new(url).unwrap_or_else(|_| unreachable!("default base URLs are valid"))
}

// Verify AnalyticsConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AnalyticsConfig>();
};

/// Builder for constructing [`AnalyticsConfig`] instances.
///
/// # Defaults
///
/// - `base_url`: [`DEFAULT_BASE_URL`]
/// - `upload_base_url`: [`DEFAULT_UPLOAD_BASE_URL`]
/// - `user_agent_prefix`: `None`
/// - `headers`: empty
/// - `chunk_size`: [`DEFAULT_CHUNK_SIZE`]
#[derive(Debug, Default)]
pub struct AnalyticsConfigBuilder {
    base_url: Option<BaseUrl>,
    upload_base_url: Option<BaseUrl>,
    user_agent_prefix: Option<String>,
    headers: Vec<(String, String)>,
    chunk_size: Option<usize>,
}

impl AnalyticsConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base URL for JSON endpoints.
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the base URL for media upload endpoints.
    #[must_use]
    pub fn upload_base_url(mut self, url: BaseUrl) -> Self {
        self.upload_base_url = Some(url);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Adds a header to the outbound header fragment.
    ///
    /// Setting the same header name twice keeps the last value.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        self.headers.retain(|(n, _)| !n.eq_ignore_ascii_case(&name));
        self.headers.push((name, value.into()));
        self
    }

    /// Sets the resumable upload chunk size.
    ///
    /// The size is rounded down to a multiple of [`MIN_CHUNK_SIZE`].
    #[must_use]
    pub const fn chunk_size(mut self, size: usize) -> Self {
        self.chunk_size = Some(size);
        self
    }

    /// Builds the [`AnalyticsConfig`], validating headers and chunk size.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidHeader`] if a header name or value cannot
    /// be sent, or [`ConfigError::InvalidChunkSize`] if the chunk size is below
    /// [`MIN_CHUNK_SIZE`].
    pub fn build(self) -> Result<AnalyticsConfig, ConfigError> {
        for (name, value) in &self.headers {
            reqwest::header::HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
                ConfigError::InvalidHeader {
                    name: name.clone(),
                    reason: e.to_string(),
                }
            })?;
            reqwest::header::HeaderValue::from_str(value).map_err(|e| {
                ConfigError::InvalidHeader {
                    name: name.clone(),
                    reason: e.to_string(),
                }
            })?;
        }

        let chunk_size = match self.chunk_size {
            Some(size) if size < MIN_CHUNK_SIZE => {
                return Err(ConfigError::InvalidChunkSize {
                    size,
                    minimum: MIN_CHUNK_SIZE,
                })
            }
            Some(size) => size - size % MIN_CHUNK_SIZE,
            None => DEFAULT_CHUNK_SIZE,
        };

        let defaults = AnalyticsConfig::default();
        Ok(AnalyticsConfig {
            base_url: self.base_url.unwrap_or(defaults.base_url),
            upload_base_url: self.upload_base_url.unwrap_or(defaults.upload_base_url),
            user_agent_prefix: self.user_agent_prefix,
            headers: self.headers,
            chunk_size,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = AnalyticsConfig::builder().build().unwrap();

        assert_eq!(config.base_url().as_ref(), DEFAULT_BASE_URL);
        assert_eq!(config.upload_base_url().as_ref(), DEFAULT_UPLOAD_BASE_URL);
        assert!(config.user_agent_prefix().is_none());
        assert!(config.headers().is_empty());
        assert_eq!(config.chunk_size(), DEFAULT_CHUNK_SIZE);
    }

    #[test]
    fn test_builder_with_all_optional_fields() {
        let config = AnalyticsConfig::builder()
            .base_url(BaseUrl::new("http://localhost:1234/analytics/v3").unwrap())
            .upload_base_url(BaseUrl::new("http://localhost:1234/upload/analytics/v3").unwrap())
            .user_agent_prefix("MyApp/1.0")
            .header("X-Goog-User-Project", "project-1")
            .chunk_size(MIN_CHUNK_SIZE * 3)
            .build()
            .unwrap();

        assert_eq!(
            config.base_url().as_ref(),
            "http://localhost:1234/analytics/v3/"
        );
        assert_eq!(
            config.upload_base_url().as_ref(),
            "http://localhost:1234/upload/analytics/v3/"
        );
        assert_eq!(config.user_agent_prefix(), Some("MyApp/1.0"));
        assert_eq!(
            config.headers(),
            &[("X-Goog-User-Project".to_string(), "project-1".to_string())]
        );
        assert_eq!(config.chunk_size(), MIN_CHUNK_SIZE * 3);
    }

    #[test]
    fn test_header_last_write_wins() {
        let config = AnalyticsConfig::builder()
            .header("X-Trace", "one")
            .header("x-trace", "two")
            .build()
            .unwrap();

        assert_eq!(
            config.headers(),
            &[("x-trace".to_string(), "two".to_string())]
        );
    }

    #[test]
    fn test_builder_rejects_invalid_header() {
        let result = AnalyticsConfig::builder()
            .header("Bad Header", "value")
            .build();
        assert!(matches!(result, Err(ConfigError::InvalidHeader { .. })));

        let result = AnalyticsConfig::builder()
            .header("X-Ok", "line\nbreak")
            .build();
        assert!(matches!(result, Err(ConfigError::InvalidHeader { .. })));
    }

    #[test]
    fn test_chunk_size_is_rounded_and_bounded() {
        let config = AnalyticsConfig::builder()
            .chunk_size(MIN_CHUNK_SIZE * 2 + 100)
            .build()
            .unwrap();
        assert_eq!(config.chunk_size(), MIN_CHUNK_SIZE * 2);

        let result = AnalyticsConfig::builder().chunk_size(1024).build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidChunkSize { size: 1024, .. })
        ));
    }

    #[test]
    fn test_config_is_clone_and_debug() {
        let config = AnalyticsConfig::builder().build().unwrap();
        let cloned = config.clone();
        assert_eq!(cloned.base_url(), config.base_url());
        assert!(format!("{config:?}").contains("AnalyticsConfig"));
    }
}
