//! Response decoding for endpoint builders.
//!
//! Every top-level structure returned by an endpoint carries a
//! [`ServerResponse`] with the raw status code and headers of the reply that
//! produced it. The field is never serialized.
//!
//! # Example
//!
//! ```rust,ignore
//! let accounts = analytics.management().accounts().list().send().await?;
//!
//! println!("status: {}", accounts.server_response.http_status_code);
//! if let Some(etag) = accounts.server_response.header("etag") {
//!     println!("etag: {etag}");
//! }
//! ```

use std::collections::HashMap;

use serde::de::DeserializeOwned;

use crate::clients::{HttpError, HttpResponse};

/// Status code and headers of the reply a structure was decoded from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ServerResponse {
    /// The HTTP status code.
    pub http_status_code: u16,
    /// Response headers (lower-cased names, possibly multi-valued).
    pub header: HashMap<String, Vec<String>>,
}

impl ServerResponse {
    /// Returns the first value of a header, looked up case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.header
            .get(&name.to_ascii_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }
}

impl From<&HttpResponse> for ServerResponse {
    fn from(response: &HttpResponse) -> Self {
        Self {
            http_status_code: response.code,
            header: response.headers.clone(),
        }
    }
}

/// A structure returned directly by an endpoint.
pub trait ApiResource: DeserializeOwned + Send {
    /// Returns the reply metadata.
    fn server_response(&self) -> &ServerResponse;

    /// Returns the reply metadata for population after decoding.
    fn server_response_mut(&mut self) -> &mut ServerResponse;
}

/// Anything an endpoint can produce from a successful reply.
pub trait ApiResponse: Sized + Send {
    /// Decodes a successful (2xx) reply.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Decode`] if the body does not match the structure.
    fn from_response(response: HttpResponse) -> Result<Self, HttpError>;
}

impl<T: ApiResource> ApiResponse for T {
    fn from_response(response: HttpResponse) -> Result<Self, HttpError> {
        let mut value: Self = serde_json::from_slice(&response.body).map_err(HttpError::Decode)?;
        *value.server_response_mut() = ServerResponse {
            http_status_code: response.code,
            header: response.headers,
        };
        Ok(value)
    }
}

/// Deletions report success or failure only; the body is never decoded.
impl ApiResponse for () {
    fn from_response(_response: HttpResponse) -> Result<Self, HttpError> {
        Ok(())
    }
}

/// Implements [`ApiResource`] for structures with a `server_response` field.
macro_rules! api_resource {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::rest::ApiResource for $ty {
                fn server_response(&self) -> &$crate::rest::ServerResponse {
                    &self.server_response
                }

                fn server_response_mut(&mut self) -> &mut $crate::rest::ServerResponse {
                    &mut self.server_response
                }
            }
        )+
    };
}

pub(crate) use api_resource;
