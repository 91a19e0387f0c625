//! HTTP-specific error types for the Analytics API client.
//!
//! This module contains error types for HTTP operations, including response
//! errors, conditional-fetch short circuits, and request validation failures.
//!
//! # Error Handling
//!
//! The client uses specific error types for different failure scenarios:
//!
//! - [`HttpResponseError`]: Non-2xx HTTP responses from the API
//! - [`NotModifiedError`]: A `304 Not Modified` reply to a conditional fetch
//! - [`InvalidHttpRequestError`]: When a request fails validation before sending
//! - [`HttpError`]: Unified error type encompassing all HTTP-related errors
//!
//! Nothing is retried. Every error is returned to the immediate caller.
//!
//! # Example
//!
//! ```rust,ignore
//! use analytics_api::clients::HttpError;
//!
//! match analytics.management().accounts().list().send().await {
//!     Ok(accounts) => println!("{} accounts", accounts.items.len()),
//!     Err(HttpError::NotModified(_)) => println!("unchanged"),
//!     Err(HttpError::Response(e)) => println!("API error {}: {}", e.code, e.message),
//!     Err(HttpError::Cancelled) => println!("cancelled"),
//!     Err(e) => println!("request failed: {e}"),
//! }
//! ```

use std::collections::HashMap;

use serde::Deserialize;
use thiserror::Error;

/// A single entry of the `errors` array in an API error envelope.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ErrorItem {
    /// The error domain (e.g., `global`).
    #[serde(default)]
    pub domain: String,
    /// A machine-readable reason (e.g., `insufficientPermissions`).
    #[serde(default)]
    pub reason: String,
    /// A human-readable message.
    #[serde(default)]
    pub message: String,
    /// The request location the error relates to, if any.
    #[serde(default)]
    pub location: Option<String>,
    /// The kind of location (e.g., `parameter`).
    #[serde(default)]
    pub location_type: Option<String>,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
    #[serde(default)]
    errors: Vec<ErrorItem>,
}

/// Error returned when an HTTP request receives a non-successful response.
///
/// The message and per-item errors are read from the standard
/// `{"error": {"code", "message", "errors": [...]}}` envelope. When the body
/// is not such an envelope, the raw body text becomes the message.
///
/// # Example
///
/// ```rust
/// use analytics_api::clients::HttpResponseError;
///
/// let error = HttpResponseError::from_parts(
///     403,
///     br#"{"error":{"code":403,"message":"User does not have permission"}}"#.to_vec(),
///     Default::default(),
/// );
///
/// assert_eq!(error.code, 403);
/// assert_eq!(error.message, "User does not have permission");
/// ```
#[derive(Debug, Error)]
#[error("googleapi: Error {code}: {message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The error message from the envelope, or the raw body.
    pub message: String,
    /// Individual error items from the envelope.
    pub errors: Vec<ErrorItem>,
    /// The raw response body.
    pub body: String,
    /// Response headers (lower-cased names, possibly multi-valued).
    pub headers: HashMap<String, Vec<String>>,
}

impl HttpResponseError {
    /// Builds the error from a status code, raw body, and headers.
    #[must_use]
    pub fn from_parts(code: u16, body: Vec<u8>, headers: HashMap<String, Vec<String>>) -> Self {
        let body = String::from_utf8_lossy(&body).into_owned();
        let (message, errors) = match serde_json::from_str::<ErrorEnvelope>(&body) {
            Ok(envelope) => (envelope.error.message, envelope.error.errors),
            Err(_) => (body.clone(), Vec::new()),
        };

        Self {
            code,
            message,
            errors,
            body,
            headers,
        }
    }
}

/// Error returned when a conditional fetch matched its `If-None-Match` token.
///
/// The response body is never read or decoded.
#[derive(Debug, Error)]
#[error("googleapi: got HTTP response code {code} with no body")]
pub struct NotModifiedError {
    /// The HTTP status code (always 304).
    pub code: u16,
    /// Response headers (lower-cased names, possibly multi-valued).
    pub headers: HashMap<String, Vec<String>>,
}

/// Error returned when an HTTP request fails validation.
///
/// # Example
///
/// ```rust
/// use analytics_api::clients::InvalidHttpRequestError;
///
/// let error = InvalidHttpRequestError::MissingBody {
///     method: "PATCH".to_string(),
/// };
///
/// assert_eq!(error.to_string(), "Cannot use PATCH without specifying data.");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A request body was provided without specifying the body type.
    #[error("Cannot set a body without also setting body_type.")]
    MissingBodyType,

    /// A PUT or PATCH request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// A resumable upload was started but the server returned no session URI.
    #[error("Resumable upload session was not started: missing Location header.")]
    MissingUploadLocation,

    /// A resumable upload `308` reply reported no progress past `offset`.
    #[error("Resumable upload stalled: no bytes persisted past offset {offset}.")]
    UploadStalled {
        /// The offset of the chunk that was not accepted.
        offset: u64,
    },

    /// A header name or value could not be sent.
    #[error("Invalid header '{name}'.")]
    InvalidHeader {
        /// The offending header name.
        name: String,
    },
}

/// Unified error type for all HTTP-related errors.
///
/// # Example
///
/// ```rust
/// use analytics_api::clients::{HttpError, NotModifiedError};
///
/// let error = HttpError::NotModified(NotModifiedError {
///     code: 304,
///     headers: Default::default(),
/// });
///
/// assert!(error.is_not_modified());
/// assert_eq!(error.status_code(), Some(304));
/// ```
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code other than 304).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// A conditional fetch returned `304 Not Modified`.
    #[error(transparent)]
    NotModified(#[from] NotModifiedError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The request body could not be encoded as JSON.
    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// The response body did not decode into the expected structure.
    #[error("Failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),

    /// The cancellation token fired before the call completed.
    #[error("Request was cancelled")]
    Cancelled,
}

impl HttpError {
    /// Returns the HTTP status code carried by the error, if any.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            Self::NotModified(e) => Some(e.code),
            Self::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Returns `true` if this error is a `304 Not Modified` short circuit.
    #[must_use]
    pub const fn is_not_modified(&self) -> bool {
        matches!(self, Self::NotModified(_))
    }
}
