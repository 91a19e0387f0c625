//! The generic call shared by every endpoint builder.
//!
//! A [`Call`] accumulates everything one remote operation needs (verb, path
//! template and parameters, query, JSON body, conditional-fetch token,
//! cancellation token, media) and executes it once. Endpoint builders wrap a
//! `Call` and expose typed setters on top of it; the shared setters and
//! `send()` come from the [`ApiMethod`] trait.
//!
//! # Example
//!
//! ```rust,ignore
//! use analytics_api::rest::{ApiMethod, ConditionalFetch};
//!
//! let segments = analytics
//!     .management()
//!     .segments()
//!     .list()
//!     .max_results(50)
//!     .fields("items(id,name),nextLink")
//!     .if_none_match("\"etag-from-last-time\"")
//!     .send()
//!     .await?;
//! ```

use std::collections::{BTreeMap, HashMap};
use std::fmt::Display;
use std::sync::Arc;

use serde::Serialize;
use tokio_util::sync::CancellationToken;

use crate::clients::{
    DataType, HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse, RequestTarget,
};
use crate::rest::media::{self, MediaUpload, ProgressUpdater, UploadTarget};
use crate::rest::{build_path, ApiResponse};

/// Accumulated state of one remote operation.
#[derive(Debug)]
pub struct Call {
    client: Arc<HttpClient>,
    method: HttpMethod,
    template: &'static str,
    path_params: HashMap<&'static str, String>,
    query: BTreeMap<String, String>,
    body: Option<Result<Vec<u8>, serde_json::Error>>,
    if_none_match: Option<String>,
    cancellation: Option<CancellationToken>,
    media: Option<MediaUpload>,
}

impl Call {
    /// Creates a call for the given verb and path template.
    #[must_use]
    pub fn new(client: &Arc<HttpClient>, method: HttpMethod, template: &'static str) -> Self {
        Self {
            client: Arc::clone(client),
            method,
            template,
            path_params: HashMap::new(),
            query: BTreeMap::new(),
            body: None,
            if_none_match: None,
            cancellation: None,
            media: None,
        }
    }

    /// Binds a path template placeholder.
    #[must_use]
    pub fn path_param(mut self, name: &'static str, value: impl Display) -> Self {
        self.path_params.insert(name, value.to_string());
        self
    }

    /// Binds a required query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.set_query(key, value);
        self
    }

    /// Serializes the request body now; a failure surfaces on execution.
    #[must_use]
    pub fn json_body<T: Serialize>(mut self, body: &T) -> Self {
        self.body = Some(serde_json::to_vec(body));
        self
    }

    /// Sets a query parameter. A repeated key keeps the last value.
    pub fn set_query(&mut self, key: impl Into<String>, value: impl ToString) {
        self.query.insert(key.into(), value.to_string());
    }

    /// Sets the `If-None-Match` token.
    pub fn set_if_none_match(&mut self, etag: impl Into<String>) {
        self.if_none_match = Some(etag.into());
    }

    /// Sets the cancellation token.
    pub fn set_cancellation(&mut self, token: CancellationToken) {
        self.cancellation = Some(token);
    }

    /// Selects a media upload strategy, replacing any earlier selection.
    pub fn set_media(&mut self, media: MediaUpload) {
        self.media = Some(media);
    }

    /// Attaches a progress callback to a resumable media upload.
    ///
    /// Has no effect unless a resumable upload is selected.
    pub fn set_progress(&mut self, updater: ProgressUpdater) {
        if let Some(MediaUpload::Resumable { progress, .. }) = &mut self.media {
            *progress = Some(updater);
        }
    }

    /// Returns the HTTP verb.
    #[must_use]
    pub const fn method(&self) -> HttpMethod {
        self.method
    }

    /// Returns the accumulated query parameters (without `alt=json`).
    #[must_use]
    pub const fn query(&self) -> &BTreeMap<String, String> {
        &self.query
    }

    /// Returns the `If-None-Match` token, if set.
    #[must_use]
    pub fn if_none_match(&self) -> Option<&str> {
        self.if_none_match.as_deref()
    }

    /// Returns the selected media upload, if any.
    #[must_use]
    pub const fn media(&self) -> Option<&MediaUpload> {
        self.media.as_ref()
    }

    /// Returns the path with all placeholders substituted.
    #[must_use]
    pub fn path(&self) -> String {
        build_path(self.template, &self.path_params)
    }

    /// Renders the URL a non-media execution would request.
    #[must_use]
    pub fn url(&self) -> String {
        let request = HttpRequest {
            http_method: self.method,
            path: self.path(),
            target: RequestTarget::Api,
            body: None,
            body_type: None,
            query: self.wire_query(),
            extra_headers: None,
        };
        self.client.url_for(&request)
    }

    fn wire_query(&self) -> BTreeMap<String, String> {
        let mut query = self.query.clone();
        query.insert("alt".to_string(), "json".to_string());
        query
    }

    /// Executes the call and returns the raw successful reply.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Encode`] if the body failed to serialize, and
    /// otherwise whatever the transport or status mapping reports.
    pub async fn execute(self) -> Result<HttpResponse, HttpError> {
        let body = self.body.transpose().map_err(HttpError::Encode)?;
        let path = build_path(self.template, &self.path_params);
        let query = {
            let mut query = self.query;
            query.insert("alt".to_string(), "json".to_string());
            query
        };
        let cancellation = self.cancellation.as_ref();

        if let Some(upload) = self.media {
            let target = UploadTarget {
                method: self.method,
                path,
                query,
                metadata: body,
            };
            return match upload {
                MediaUpload::Simple { data, content_type } => {
                    media::upload_simple(&self.client, target, &data, &content_type, cancellation)
                        .await
                }
                MediaUpload::Resumable {
                    data,
                    content_type,
                    progress,
                } => {
                    media::upload_resumable(
                        &self.client,
                        target,
                        &data,
                        &content_type,
                        progress.as_ref(),
                        cancellation,
                    )
                    .await
                }
            };
        }

        let mut request = HttpRequest::builder(self.method, path).query(query);
        if let Some(body) = body {
            request = request.body(body).body_type(DataType::Json);
        }
        if let Some(etag) = self.if_none_match {
            request = request.header("If-None-Match", etag);
        }

        self.client.request(request.build()?, cancellation).await
    }
}

/// Shared surface of every endpoint builder.
///
/// Implementors only expose their inner [`Call`]; the common optional
/// parameters and execution are provided.
#[allow(async_fn_in_trait)]
pub trait ApiMethod: Sized {
    /// The structure a successful reply decodes into.
    type Response: ApiResponse;

    /// Returns the inner call.
    fn call(&self) -> &Call;

    /// Returns the inner call for mutation.
    fn call_mut(&mut self) -> &mut Call;

    /// Consumes the builder, returning the inner call.
    fn into_call(self) -> Call;

    /// Sets an arbitrary query parameter. A repeated key keeps the last value.
    #[must_use]
    fn param(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.call_mut().set_query(key, value);
        self
    }

    /// Selects a subset of response fields (partial response).
    #[must_use]
    fn fields(self, fields: impl Into<String>) -> Self {
        self.param("fields", fields.into())
    }

    /// Attributes quota to an arbitrary user string (at most 40 characters).
    #[must_use]
    fn quota_user(self, quota_user: impl Into<String>) -> Self {
        self.param("quotaUser", quota_user.into())
    }

    /// Attributes quota to an end-user IP address.
    #[must_use]
    fn user_ip(self, user_ip: impl Into<String>) -> Self {
        self.param("userIp", user_ip.into())
    }

    /// Races the call against a cancellation token.
    #[must_use]
    fn cancellation_token(mut self, token: CancellationToken) -> Self {
        self.call_mut().set_cancellation(token);
        self
    }

    /// Renders the URL a non-media execution would request.
    fn url(&self) -> String {
        self.call().url()
    }

    /// Executes the call and decodes the reply.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for transport failures, `304 Not Modified`,
    /// non-2xx statuses, encode or decode failures, and cancellation.
    async fn send(self) -> Result<Self::Response, HttpError> {
        let response = self.into_call().execute().await?;
        <Self::Response as ApiResponse>::from_response(response)
    }
}

/// GET builders accept an entity tag for conditional fetches.
pub trait ConditionalFetch: ApiMethod {
    /// Sends `If-None-Match`; an unchanged resource yields
    /// [`HttpError::NotModified`].
    #[must_use]
    fn if_none_match(mut self, etag: impl Into<String>) -> Self {
        self.call_mut().set_if_none_match(etag);
        self
    }
}

/// Implements [`ApiMethod`] (and optionally [`ConditionalFetch`]) for a
/// builder struct holding a `call: Call` field.
macro_rules! api_method {
    ($builder:ident => $response:ty) => {
        impl $crate::rest::ApiMethod for $builder {
            type Response = $response;

            fn call(&self) -> &$crate::rest::Call {
                &self.call
            }

            fn call_mut(&mut self) -> &mut $crate::rest::Call {
                &mut self.call
            }

            fn into_call(self) -> $crate::rest::Call {
                self.call
            }
        }
    };
    ($builder:ident => $response:ty, conditional) => {
        $crate::rest::api_method!($builder => $response);

        impl $crate::rest::ConditionalFetch for $builder {}
    };
}

pub(crate) use api_method;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AnalyticsConfig, BaseUrl};

    fn client() -> Arc<HttpClient> {
        let config = AnalyticsConfig::builder()
            .base_url(BaseUrl::new("https://example.com/analytics/v3/").unwrap())
            .build()
            .unwrap();
        Arc::new(HttpClient::new(reqwest::Client::new(), &config))
    }

    #[derive(Debug)]
    struct Probe {
        call: Call,
    }

    api_method!(Probe => (), conditional);

    #[test]
    fn test_url_substitutes_path_params_and_adds_alt() {
        let call = Call::new(
            &client(),
            HttpMethod::Get,
            "management/accounts/{accountId}/filters/{filterId}",
        )
        .path_param("accountId", 123)
        .path_param("filterId", "456");

        assert_eq!(
            call.url(),
            "https://example.com/analytics/v3/management/accounts/123/filters/456?alt=json"
        );
        assert!(call.query().is_empty());
    }

    #[test]
    fn test_common_setters_last_write_wins() {
        let probe = Probe {
            call: Call::new(&client(), HttpMethod::Get, "management/segments"),
        }
        .fields("items")
        .fields("items(id)")
        .quota_user("user-1")
        .user_ip("10.0.0.1")
        .param("max-results", 10)
        .if_none_match("\"etag\"");

        let query = probe.call().query();
        assert_eq!(query.get("fields").map(String::as_str), Some("items(id)"));
        assert_eq!(query.get("quotaUser").map(String::as_str), Some("user-1"));
        assert_eq!(query.get("userIp").map(String::as_str), Some("10.0.0.1"));
        assert_eq!(query.get("max-results").map(String::as_str), Some("10"));
        assert_eq!(probe.call().if_none_match(), Some("\"etag\""));
    }

    #[test]
    fn test_media_selection_last_wins() {
        let mut call = Call::new(&client(), HttpMethod::Post, "management/uploads");
        call.set_media(MediaUpload::Simple {
            data: b"a".to_vec(),
            content_type: "text/csv".to_string(),
        });
        call.set_media(MediaUpload::Resumable {
            data: b"ab".to_vec(),
            content_type: "text/csv".to_string(),
            progress: None,
        });
        call.set_progress(Arc::new(|_, _| {}));

        assert!(matches!(
            call.media(),
            Some(MediaUpload::Resumable { progress: Some(_), .. })
        ));
    }

    #[test]
    fn test_progress_without_resumable_is_ignored() {
        let mut call = Call::new(&client(), HttpMethod::Post, "management/uploads");
        call.set_progress(Arc::new(|_, _| {}));
        assert!(call.media().is_none());
    }

    #[tokio::test]
    async fn test_encode_failure_surfaces_on_execute() {
        let mut bad = std::collections::HashMap::new();
        bad.insert(vec![1_u8], "non-string keys cannot be JSON object keys");

        let call = Call::new(&client(), HttpMethod::Post, "provisioning/createAccountTree")
            .json_body(&bad);

        assert!(matches!(call.execute().await, Err(HttpError::Encode(_))));
    }
}
