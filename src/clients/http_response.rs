//! HTTP response types for the Analytics API client.
//!
//! This module provides the [`HttpResponse`] type for accessing the raw
//! status, headers, and body of an API reply.

use std::collections::HashMap;

/// An HTTP response from the Analytics API.
///
/// Header names are lower-cased; a header may carry several values. The body
/// is kept as raw bytes so that callers decide whether (and into what) it is
/// decoded.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body.
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: Vec<u8>) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns `true` if the response is a `304 Not Modified`.
    #[must_use]
    pub const fn is_not_modified(&self) -> bool {
        self.code == 304
    }

    /// Returns the first value of a header, looked up case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `ETag` header value, if present.
    #[must_use]
    pub fn etag(&self) -> Option<&str> {
        self.header("etag")
    }

    /// Returns the `Location` header value, if present.
    ///
    /// A resumable upload session URI is delivered here.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.header("location")
    }

    /// Returns the number of bytes the server has persisted, read from the
    /// `Range: bytes=0-N` header of a `308` resumable upload reply.
    ///
    /// Returns `None` when the header is absent, malformed, or out of range.
    #[must_use]
    pub fn persisted_bytes(&self) -> Option<u64> {
        let range = self.header("range")?;
        let (_, end) = range.trim().strip_prefix("bytes=")?.split_once('-')?;
        end.trim().parse::<u64>().ok()?.checked_add(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(pairs: &[(&str, &str)]) -> HashMap<String, Vec<String>> {
        let mut map: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in pairs {
            map.entry((*name).to_string())
                .or_default()
                .push((*value).to_string());
        }
        map
    }

    #[test]
    fn test_is_ok_returns_true_for_2xx() {
        for code in 200..=299 {
            let response = HttpResponse::new(code, HashMap::new(), Vec::new());
            assert!(
                response.is_ok(),
                "Expected is_ok() to be true for code {code}"
            );
        }
    }

    #[test]
    fn test_is_ok_returns_false_for_304_4xx_and_5xx() {
        for code in [304, 308, 400, 404, 429, 500] {
            let response = HttpResponse::new(code, HashMap::new(), Vec::new());
            assert!(!response.is_ok(), "Expected is_ok() to be false for {code}");
        }
        assert!(HttpResponse::new(304, HashMap::new(), Vec::new()).is_not_modified());
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let response = HttpResponse::new(
            200,
            headers(&[("etag", "\"abc\""), ("x-multi", "1"), ("x-multi", "2")]),
            Vec::new(),
        );

        assert_eq!(response.header("ETag"), Some("\"abc\""));
        assert_eq!(response.etag(), Some("\"abc\""));
        assert_eq!(response.header("X-Multi"), Some("1"));
        assert_eq!(response.headers["x-multi"].len(), 2);
        assert!(response.header("missing").is_none());
    }

    #[test]
    fn test_location_header() {
        let response = HttpResponse::new(
            200,
            headers(&[("location", "https://upload.example/session/1")]),
            Vec::new(),
        );
        assert_eq!(response.location(), Some("https://upload.example/session/1"));
    }

    #[test]
    fn test_persisted_bytes_parses_range() {
        let response = HttpResponse::new(308, headers(&[("range", "bytes=0-262143")]), Vec::new());
        assert_eq!(response.persisted_bytes(), Some(262_144));

        let response = HttpResponse::new(308, headers(&[("range", "garbage")]), Vec::new());
        assert_eq!(response.persisted_bytes(), None);

        let response = HttpResponse::new(308, HashMap::new(), Vec::new());
        assert_eq!(response.persisted_bytes(), None);

        let response = HttpResponse::new(
            308,
            headers(&[("range", "bytes=0-18446744073709551615")]),
            Vec::new(),
        );
        assert_eq!(response.persisted_bytes(), None);
    }
}
