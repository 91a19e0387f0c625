//! Error types for client configuration.
//!
//! This module contains error types used when building an
//! [`AnalyticsConfig`](crate::AnalyticsConfig) and its validated newtypes.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use analytics_api::{BaseUrl, ConfigError};
//!
//! let result = BaseUrl::new("not a url");
//! assert!(matches!(result, Err(ConfigError::InvalidBaseUrl { .. })));
//! ```

use thiserror::Error;

/// Errors that can occur during client configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Base URL is invalid.
    #[error("Invalid base URL '{url}'. Please provide an absolute http(s) URL (e.g., 'https://www.googleapis.com/analytics/v3/').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// An outbound header name or value cannot be sent over HTTP.
    #[error("Invalid header '{name}': {reason}")]
    InvalidHeader {
        /// The header name that was provided.
        name: String,
        /// Why the header was rejected.
        reason: String,
    },

    /// Resumable upload chunk size is below the protocol minimum.
    #[error("Invalid chunk size {size}. Resumable upload chunks must be at least {minimum} bytes.")]
    InvalidChunkSize {
        /// The rejected chunk size.
        size: usize,
        /// The smallest accepted chunk size.
        minimum: usize,
    },
}
