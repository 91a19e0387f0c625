//! HTTP client for Analytics API communication.
//!
//! This module provides the [`HttpClient`] type, which resolves request paths
//! against the configured base URLs, merges default headers, and races every
//! exchange against an optional cancellation token.

use std::collections::HashMap;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use tokio_util::sync::CancellationToken;

use crate::clients::errors::{
    HttpError, HttpResponseError, InvalidHttpRequestError, NotModifiedError,
};
use crate::clients::http_request::{HttpRequest, RequestTarget};
use crate::clients::http_response::HttpResponse;
use crate::config::{AnalyticsConfig, BaseUrl};

/// Library version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the Analytics API.
///
/// The client handles:
/// - URL construction from the API or upload base URL
/// - Default headers including User-Agent and the configured header fragment
/// - Cancellation of in-flight exchanges
/// - Mapping of `304` and non-2xx replies to typed errors
///
/// Authentication is the caller's concern: the wrapped `reqwest::Client`
/// must already attach valid credentials (for example through its default
/// headers or a middleware layer).
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust
/// use analytics_api::AnalyticsConfig;
/// use analytics_api::clients::HttpClient;
///
/// let config = AnalyticsConfig::builder().build().unwrap();
/// let client = HttpClient::new(reqwest::Client::new(), &config);
///
/// assert_eq!(client.base_url().as_ref(), "https://www.googleapis.com/analytics/v3/");
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The caller-supplied reqwest HTTP client.
    client: reqwest::Client,
    /// Base URL for JSON endpoints.
    base_url: BaseUrl,
    /// Base URL for media upload endpoints.
    upload_base_url: BaseUrl,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
    /// Resumable upload chunk size in bytes.
    chunk_size: usize,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client wrapping the given transport.
    #[must_use]
    pub fn new(client: reqwest::Client, config: &AnalyticsConfig) -> Self {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}analytics-api-rust v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        for (name, value) in config.headers() {
            default_headers.retain(|n: &String, _| !n.eq_ignore_ascii_case(name));
            default_headers.insert(name.clone(), value.clone());
        }

        Self {
            client,
            base_url: config.base_url().clone(),
            upload_base_url: config.upload_base_url().clone(),
            default_headers,
            chunk_size: config.chunk_size(),
        }
    }

    /// Creates a new HTTP client with a default rustls transport.
    ///
    /// The resulting client sends no credentials; it is suited to stub
    /// servers and to endpoints fronted by an authenticating proxy.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the TLS backend cannot be initialized.
    pub fn from_config(config: &AnalyticsConfig) -> Result<Self, HttpError> {
        let client = reqwest::Client::builder().use_rustls_tls().build()?;
        Ok(Self::new(client, config))
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

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the resumable upload chunk size in bytes.
    #[must_use]
    pub const fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Renders the full URL a request will be sent to, query string included.
    #[must_use]
    pub fn url_for(&self, request: &HttpRequest) -> String {
        let mut url = match request.target {
            RequestTarget::Api => self.base_url.join(&request.path),
            RequestTarget::Upload => self.upload_base_url.join(&request.path),
            RequestTarget::Absolute => request.path.clone(),
        };

        if !request.query.is_empty() {
            let query = request
                .query
                .iter()
                .map(|(key, value)| {
                    format!(
                        "{}={}",
                        urlencoding::encode(key),
                        urlencoding::encode(value)
                    )
                })
                .collect::<Vec<_>>()
                .join("&");
            url.push(if url.contains('?') { '&' } else { '?' });
            url.push_str(&query);
        }

        url
    }

    /// Sends an HTTP request and returns the raw response for any status.
    ///
    /// If a cancellation token is supplied, the whole exchange (send and body
    /// read) races it. A `304` reply never has its body read.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - Network error occurs (`Network`)
    /// - The cancellation token fires first (`Cancelled`)
    pub async fn send(
        &self,
        request: HttpRequest,
        cancellation: Option<&CancellationToken>,
    ) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = self.url_for(&request);
        let headers = self.merge_headers(&request)?;

        tracing::debug!(method = %request.http_method, url = %url, "sending request");

        let mut req_builder = self
            .client
            .request(request.http_method.into(), &url)
            .headers(headers);
        if let Some(body) = request.body {
            req_builder = req_builder.body(body);
        }

        let exchange = async move {
            let res = req_builder.send().await?;
            let code = res.status().as_u16();
            let res_headers = Self::parse_response_headers(res.headers());
            let body = if code == 304 {
                Vec::new()
            } else {
                res.bytes().await?.to_vec()
            };
            Ok::<_, HttpError>(HttpResponse::new(code, res_headers, body))
        };

        match cancellation {
            Some(token) => tokio::select! {
                biased;
                () = token.cancelled() => Err(HttpError::Cancelled),
                result = exchange => result,
            },
            None => exchange.await,
        }
    }

    /// Sends an HTTP request and maps the status code.
    ///
    /// # Errors
    ///
    /// Returns everything [`send`](Self::send) returns, plus
    /// [`HttpError::NotModified`] for `304` and [`HttpError::Response`] for
    /// any other non-2xx status.
    pub async fn request(
        &self,
        request: HttpRequest,
        cancellation: Option<&CancellationToken>,
    ) -> Result<HttpResponse, HttpError> {
        let response = self.send(request, cancellation).await?;
        Self::check_response(response)
    }

    /// Maps a raw response to success or a typed status error.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::NotModified`] for `304` and
    /// [`HttpError::Response`] for any other non-2xx status.
    pub fn check_response(response: HttpResponse) -> Result<HttpResponse, HttpError> {
        if response.is_not_modified() {
            return Err(HttpError::NotModified(NotModifiedError {
                code: response.code,
                headers: response.headers,
            }));
        }

        if response.is_ok() {
            return Ok(response);
        }

        Err(HttpError::Response(HttpResponseError::from_parts(
            response.code,
            response.body,
            response.headers,
        )))
    }

    /// Builds the outbound header map: defaults, then content type, then extras.
    fn merge_headers(&self, request: &HttpRequest) -> Result<HeaderMap, InvalidHttpRequestError> {
        let mut headers = HeaderMap::new();

        let mut insert = |name: &str, value: &str| {
            let invalid = || InvalidHttpRequestError::InvalidHeader {
                name: name.to_string(),
            };
            let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|_| invalid())?;
            let header_value = HeaderValue::from_str(value).map_err(|_| invalid())?;
            headers.insert(header_name, header_value);
            Ok::<(), InvalidHttpRequestError>(())
        };

        for (name, value) in &self.default_headers {
            insert(name, value)?;
        }
        if let Some(body_type) = &request.body_type {
            insert(CONTENT_TYPE.as_str(), &body_type.as_content_type())?;
        }
        if let Some(extra) = &request.extra_headers {
            for (name, value) in extra {
                insert(name, value)?;
            }
        }

        Ok(headers)
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(headers: &HeaderMap) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::http_request::{DataType, HttpMethod};

    fn create_test_client(config: &AnalyticsConfig) -> HttpClient {
        HttpClient::new(reqwest::Client::new(), config)
    }

    #[test]
    fn test_client_construction_uses_config_urls() {
        let config = AnalyticsConfig::builder()
            .base_url(BaseUrl::new("http://localhost:9000/analytics/v3").unwrap())
            .upload_base_url(BaseUrl::new("http://localhost:9000/upload/analytics/v3").unwrap())
            .build()
            .unwrap();
        let client = create_test_client(&config);

        assert_eq!(
            client.base_url().as_ref(),
            "http://localhost:9000/analytics/v3/"
        );
        assert_eq!(
            client.upload_base_url().as_ref(),
            "http://localhost:9000/upload/analytics/v3/"
        );
        assert_eq!(client.chunk_size(), config.chunk_size());
    }

    #[test]
    fn test_user_agent_header_format() {
        let config = AnalyticsConfig::default();
        let client = create_test_client(&config);

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("analytics-api-rust v"));
        assert!(user_agent.contains("Rust"));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = AnalyticsConfig::builder()
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();
        let client = create_test_client(&config);

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("MyApp/1.0 | "));
        assert!(user_agent.contains("analytics-api-rust"));
    }

    #[test]
    fn test_accept_header_is_json() {
        let client = create_test_client(&AnalyticsConfig::default());
        assert_eq!(
            client.default_headers().get("Accept"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_header_fragment_overrides_defaults() {
        let config = AnalyticsConfig::builder()
            .header("accept", "application/json; charset=utf-8")
            .header("X-Goog-User-Project", "billing")
            .build()
            .unwrap();
        let client = create_test_client(&config);

        assert!(client.default_headers().get("Accept").is_none());
        assert_eq!(
            client.default_headers().get("accept"),
            Some(&"application/json; charset=utf-8".to_string())
        );
        assert_eq!(
            client.default_headers().get("X-Goog-User-Project"),
            Some(&"billing".to_string())
        );
    }

    #[test]
    fn test_url_for_resolves_each_target() {
        let client = create_test_client(&AnalyticsConfig::default());

        let api = HttpRequest::builder(HttpMethod::Get, "management/accounts")
            .query_param("alt", "json")
            .build()
            .unwrap();
        assert_eq!(
            client.url_for(&api),
            "https://www.googleapis.com/analytics/v3/management/accounts?alt=json"
        );

        let upload = HttpRequest::builder(HttpMethod::Post, "management/uploads")
            .target(RequestTarget::Upload)
            .build()
            .unwrap();
        assert_eq!(
            client.url_for(&upload),
            "https://www.googleapis.com/upload/analytics/v3/management/uploads"
        );

        let absolute = HttpRequest::builder(HttpMethod::Put, "https://upload.example/s?id=1")
            .target(RequestTarget::Absolute)
            .body(b"x".to_vec())
            .body_type(DataType::Media {
                mime_type: "text/csv".to_string(),
            })
            .query_param("alt", "json")
            .build()
            .unwrap();
        assert_eq!(
            client.url_for(&absolute),
            "https://upload.example/s?id=1&alt=json"
        );
    }

    #[test]
    fn test_url_for_encodes_query_values() {
        let client = create_test_client(&AnalyticsConfig::default());
        let request = HttpRequest::builder(HttpMethod::Get, "data/ga")
            .query_param("metrics", "ga:sessions,ga:users")
            .query_param("filters", "ga:country==United States")
            .build()
            .unwrap();

        let url = client.url_for(&request);
        assert!(url.contains("metrics=ga%3Asessions%2Cga%3Ausers"));
        assert!(url.contains("filters=ga%3Acountry%3D%3DUnited%20States"));
    }

    #[test]
    fn test_merge_headers_rejects_invalid_extra_header() {
        let client = create_test_client(&AnalyticsConfig::default());
        let request = HttpRequest::builder(HttpMethod::Get, "management/accounts")
            .header("If-None-Match", "bad\nvalue")
            .build()
            .unwrap();

        assert!(matches!(
            client.merge_headers(&request),
            Err(InvalidHttpRequestError::InvalidHeader { name }) if name == "If-None-Match"
        ));
    }

    #[test]
    fn test_check_response_maps_statuses() {
        let ok = HttpResponse::new(200, HashMap::new(), b"{}".to_vec());
        assert!(HttpClient::check_response(ok).is_ok());

        let not_modified = HttpResponse::new(304, HashMap::new(), Vec::new());
        assert!(matches!(
            HttpClient::check_response(not_modified),
            Err(HttpError::NotModified(NotModifiedError { code: 304, .. }))
        ));

        let not_found = HttpResponse::new(
            404,
            HashMap::new(),
            br#"{"error":{"code":404,"message":"Not Found"}}"#.to_vec(),
        );
        match HttpClient::check_response(not_found) {
            Err(HttpError::Response(e)) => {
                assert_eq!(e.code, 404);
                assert_eq!(e.message, "Not Found");
            }
            other => panic!("expected response error, got {other:?}"),
        }
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }
}
