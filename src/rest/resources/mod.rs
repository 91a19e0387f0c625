//! Version-specific REST resource implementations.
//!
//! Resources are organized by API version:
//!
//! ```text
//! resources/
//!   mod.rs     <- This file (re-exports the v3 resources)
//!   v3/
//!     mod.rs   <- Resource structures, services and call builders
//! ```
//!
//! ```rust,ignore
//! use analytics_api::rest::resources::Filter;      // re-exported
//! use analytics_api::rest::resources::v3::Filter;  // explicit version
//! ```

pub mod v3;

pub use v3::*;
