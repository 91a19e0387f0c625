//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated API base URL.
///
/// Endpoint paths are resolved relative to this URL, so it is always
/// normalized to end with a `/`. Only `http` and `https` schemes are
/// accepted, and a host must be present.
///
/// # Example
///
/// ```rust
/// use analytics_api::BaseUrl;
///
/// let url = BaseUrl::new("http://localhost:8080/analytics/v3").unwrap();
/// assert_eq!(url.as_ref(), "http://localhost:8080/analytics/v3/");
/// assert_eq!(url.scheme(), "http");
/// assert_eq!(url.host_name(), "localhost");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl BaseUrl {
    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL has no `http`/`https`
    /// scheme, no host, or carries a query string or fragment.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let mut url = url.into().trim().to_string();
        let invalid = |url: &str| ConfigError::InvalidBaseUrl {
            url: url.to_string(),
        };

        let scheme_end = url.find("://").ok_or_else(|| invalid(&url))?;
        let scheme = &url[..scheme_end];
        if !scheme.eq_ignore_ascii_case("http") && !scheme.eq_ignore_ascii_case("https") {
            return Err(invalid(&url));
        }

        if url.contains(['?', '#']) {
            return Err(invalid(&url));
        }

        let host_start = scheme_end + 3;
        let remainder = &url[host_start..];
        // IPv6 literals keep their brackets: `[::1]`.
        let host_len = if remainder.starts_with('[') {
            let close = remainder.find(']').ok_or_else(|| invalid(&url))? + 1;
            if !matches!(remainder[close..].chars().next(), None | Some(':' | '/')) {
                return Err(invalid(&url));
            }
            close
        } else {
            remainder.find([':', '/']).unwrap_or(remainder.len())
        };
        let host_end = host_start + host_len;
        if host_len == 0 || &url[host_start..host_end] == "[]" {
            return Err(invalid(&url));
        }

        if !url.ends_with('/') {
            url.push('/');
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.host_start..self.host_end]
    }

    /// Resolves a relative endpoint path against this base URL.
    #[must_use]
    pub fn join(&self, path: &str) -> String {
        format!("{}{}", self.url, path.trim_start_matches('/'))
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

impl Serialize for BaseUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.url)
    }
}

impl<'de> Deserialize<'de> for BaseUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_appends_trailing_slash() {
        let url = BaseUrl::new("https://www.googleapis.com/analytics/v3").unwrap();
        assert_eq!(url.as_ref(), "https://www.googleapis.com/analytics/v3/");

        let url = BaseUrl::new("https://www.googleapis.com/analytics/v3/").unwrap();
        assert_eq!(url.as_ref(), "https://www.googleapis.com/analytics/v3/");
    }

    #[test]
    fn test_base_url_exposes_parts() {
        let url = BaseUrl::new("http://127.0.0.1:9000/analytics/v3/").unwrap();
        assert_eq!(url.scheme(), "http");
        assert_eq!(url.host_name(), "127.0.0.1");
    }

    #[test]
    fn test_base_url_ipv6_host_keeps_brackets() {
        let url = BaseUrl::new("http://[::1]:8080/analytics/v3").unwrap();
        assert_eq!(url.host_name(), "[::1]");
        assert_eq!(url.as_ref(), "http://[::1]:8080/analytics/v3/");

        let url = BaseUrl::new("https://[2001:db8::7]/").unwrap();
        assert_eq!(url.host_name(), "[2001:db8::7]");

        assert!(BaseUrl::new("http://[::1/analytics").is_err());
        assert!(BaseUrl::new("http://[::1]x/").is_err());
        assert!(BaseUrl::new("http://[]:80/").is_err());
    }

    #[test]
    fn test_base_url_rejects_invalid() {
        assert!(BaseUrl::new("www.googleapis.com/analytics/v3").is_err());
        assert!(BaseUrl::new("ftp://example.com/").is_err());
        assert!(BaseUrl::new("https://").is_err());
        assert!(BaseUrl::new("https:///analytics").is_err());
        assert!(BaseUrl::new("https://example.com/?alt=json").is_err());
    }

    #[test]
    fn test_base_url_join_strips_leading_slash() {
        let url = BaseUrl::new("https://example.com/analytics/v3/").unwrap();
        assert_eq!(
            url.join("/management/accounts"),
            "https://example.com/analytics/v3/management/accounts"
        );
        assert_eq!(
            url.join("management/accounts"),
            "https://example.com/analytics/v3/management/accounts"
        );
    }

    #[test]
    fn test_base_url_round_trip_serialization() {
        let original = BaseUrl::new("https://example.com/v3").unwrap();
        let json = serde_json::to_string(&original).unwrap();
        assert_eq!(json, r#""https://example.com/v3/""#);
        let restored: BaseUrl = serde_json::from_str(&json).unwrap();
        assert_eq!(original, restored);
    }

    #[test]
    fn test_base_url_deserialize_rejects_invalid() {
        let result: Result<BaseUrl, _> = serde_json::from_str(r#""nope""#);
        assert!(result.is_err());
    }
}
