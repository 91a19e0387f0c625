//! # Google Analytics v3 API Rust Client
//!
//! A Rust client for the Google Analytics v3 REST API: Core Reporting,
//! Multi-Channel Funnels, Real Time, Management, Metadata, Provisioning and
//! User Deletion.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`AnalyticsConfig`] and [`AnalyticsConfigBuilder`]
//! - A validated [`BaseUrl`] newtype for the API and upload endpoints
//! - The [`Analytics`] root service, grouping every resource
//! - One call builder per endpoint, configured with chained setters and
//!   executed once with `send()`
//! - Resource structures that mirror the wire JSON, with string-encoded
//!   64-bit counters and force-included zero values
//! - Simple (multipart) and resumable (chunked) media uploads
//! - Typed errors that keep `304 Not Modified` apart from other failures
//!
//! ## Quick Start
//!
//! ```rust
//! use analytics_api::{AnalyticsConfig, BaseUrl};
//!
//! let config = AnalyticsConfig::builder()
//!     .base_url(BaseUrl::new("https://www.googleapis.com/analytics/v3/").unwrap())
//!     .user_agent_prefix("my-dashboard/1.0")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url().as_ref(), "https://www.googleapis.com/analytics/v3/");
//! ```
//!
//! ## Making API Requests
//!
//! Authorization is the transport's concern: pass a `reqwest::Client` that
//! already attaches credentials (for example through default headers).
//!
//! ```rust,ignore
//! use analytics_api::{Analytics, AnalyticsConfig};
//! use analytics_api::rest::{ApiMethod, ConditionalFetch};
//! use analytics_api::rest::resources::v3::Paginated;
//!
//! let analytics = Analytics::new(authorized_client, &AnalyticsConfig::default());
//!
//! // Core Reporting
//! let report = analytics
//!     .data()
//!     .ga()
//!     .get("ga:12345", "30daysAgo", "yesterday", "ga:sessions")
//!     .dimensions("ga:date")
//!     .send()
//!     .await?;
//!
//! // Management, with a partial response and a conditional fetch
//! let properties = analytics
//!     .management()
//!     .webproperties()
//!     .list("~all")
//!     .fields("items(id,name)")
//!     .if_none_match("\"etag-from-earlier\"")
//!     .max_results(50)
//!     .send()
//!     .await;
//! ```
//!
//! ## Errors
//!
//! Every call returns [`HttpError`]; `304 Not Modified` is reported as
//! [`HttpError::NotModified`] so callers can reuse cached data, while other
//! non-2xx replies carry their exact status and the parsed error envelope.
//!
//! ## Logging
//!
//! Outbound requests and resumable upload chunks are logged with
//! [`tracing`] at debug level. No subscriber is installed by this crate.
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: Newtypes and the config builder validate on construction
//! - **Thread-safe**: All services are `Send + Sync` and cheap to clone
//! - **Async-first**: Designed for use with the Tokio async runtime
//! - **No hidden work**: No retries, caching, rate limiting or auto-pagination

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;
mod service;

// Re-export public types at crate root for convenience
pub use config::{AnalyticsConfig, AnalyticsConfigBuilder, BaseUrl};
pub use error::ConfigError;
pub use service::Analytics;

// Re-export HTTP client types
pub use clients::{
    DataType, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError, NotModifiedError,
};

// Re-export call machinery
pub use rest::{ApiMethod, ConditionalFetch, Int64, MediaUpload, ServerResponse};

// Cancellation handles accepted by every call builder
pub use tokio_util::sync::CancellationToken;
