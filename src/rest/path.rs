//! Path template expansion for endpoint URLs.
//!
//! Endpoint paths are templates relative to the API base URL with `{name}`
//! placeholders, for example
//! `management/accounts/{accountId}/webproperties/{webPropertyId}`.
//! Placeholder values are percent-encoded so that identifiers containing
//! reserved characters (such as the `ga:` prefix of table ids) stay inside
//! one path segment.
//!
//! # Example
//!
//! ```rust
//! use analytics_api::rest::build_path;
//! use std::collections::HashMap;
//!
//! let mut params = HashMap::new();
//! params.insert("accountId", "123");
//! params.insert("webPropertyId", "UA-123-1");
//!
//! let path = build_path("management/accounts/{accountId}/webproperties/{webPropertyId}", &params);
//! assert_eq!(path, "management/accounts/123/webproperties/UA-123-1");
//! ```

use std::collections::HashMap;
use std::fmt::Display;

/// Builds a path from a template by substituting escaped parameter values.
///
/// Placeholders with no matching parameter are left untouched.
#[must_use]
#[allow(clippy::implicit_hasher)]
pub fn build_path<V: Display>(template: &str, params: &HashMap<&str, V>) -> String {
    let mut result = template.to_string();

    for (key, value) in params {
        let placeholder = format!("{{{key}}}");
        let escaped = urlencoding::encode(&value.to_string()).into_owned();
        result = result.replace(&placeholder, &escaped);
    }

    result
}
