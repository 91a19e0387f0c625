//! HTTP client types for Analytics API communication.
//!
//! This module provides the foundational HTTP layer that every endpoint
//! builder goes through. It handles URL resolution, header merging,
//! cancellation, and status mapping.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: The async HTTP client wrapping a caller-supplied transport
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A raw response from the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, PATCH, DELETE)
//! - [`DataType`]: Content types for request bodies
//! - [`HttpError`]: Unified error type for every failure of a call
//!
//! # Example
//!
//! ```rust,ignore
//! use analytics_api::AnalyticsConfig;
//! use analytics_api::clients::{HttpClient, HttpRequest, HttpMethod};
//!
//! let client = HttpClient::new(authorized_reqwest_client, &AnalyticsConfig::default());
//!
//! let request = HttpRequest::builder(HttpMethod::Get, "management/accounts")
//!     .query_param("alt", "json")
//!     .build()
//!     .unwrap();
//!
//! let response = client.request(request, None).await?;
//! ```
//!
//! # Status Mapping
//!
//! - **2xx**: returned as-is
//! - **304**: [`HttpError::NotModified`], the body is never read
//! - **Anything else**: [`HttpError::Response`] carrying status, message and headers
//!
//! No request is ever retried.

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{
    ErrorItem, HttpError, HttpResponseError, InvalidHttpRequestError, NotModifiedError,
};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{DataType, HttpMethod, HttpRequest, HttpRequestBuilder, RequestTarget};
pub use http_response::HttpResponse;
