//! Endpoint call infrastructure for the Analytics API.
//!
//! This module provides the machinery every endpoint builder is made of:
//!
//! - **[`Call`]**: the accumulated state of one remote operation and its
//!   single execution routine (URL assembly, body encoding, conditional
//!   fetch, cancellation, media upload, status mapping)
//! - **[`ApiMethod`] trait**: the shared setters (`fields`, `quota_user`,
//!   `user_ip`, `cancellation_token`, `param`) and `send()`
//! - **[`ConditionalFetch`] trait**: `if_none_match` for GET builders
//! - **[`ApiResponse`] / [`ApiResource`]**: decoding of successful replies,
//!   with [`ServerResponse`] metadata on every top-level structure
//! - **[`Int64`]**: the string-encoded 64-bit integer codec
//! - **[`MediaUpload`]**: simple and resumable media transfers
//! - **[`resources`]**: resource structures and endpoint builders
//!
//! # Example
//!
//! ```rust,ignore
//! use analytics_api::{Analytics, AnalyticsConfig};
//! use analytics_api::rest::ApiMethod;
//!
//! let analytics = Analytics::new(authorized_client, &AnalyticsConfig::default());
//!
//! let accounts = analytics.management().accounts().list().max_results(10).send().await?;
//! for account in &accounts.items {
//!     println!("{:?}: {:?}", account.id, account.name);
//! }
//!
//! // Pagination is manual: follow `next_link` / `start_index` yourself.
//! if accounts.next_link.is_some() {
//!     let start = accounts.start_index.unwrap_or(1) + accounts.items_per_page.unwrap_or(0);
//!     let next = analytics.management().accounts().list().start_index(start).send().await?;
//! }
//! ```

mod call;
mod int64;
mod media;
mod path;
mod response;

pub mod resources;

// Public exports
pub use call::{ApiMethod, Call, ConditionalFetch};
pub use int64::Int64;
pub use media::{MediaUpload, ProgressUpdater};
pub use path::build_path;
pub use response::{ApiResource, ApiResponse, ServerResponse};

pub(crate) use call::api_method;
pub(crate) use response::api_resource;
