//! Client ID hashing.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::clients::{HttpClient, HttpMethod};
use crate::rest::{api_method, api_resource, Call, ServerResponse};

/// Request body of `hashClientId`.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HashClientIdRequest {
    /// The client ID to hash.
    pub client_id: Option<String>,
    /// Always `analytics#hashClientIdRequest`.
    pub kind: Option<String>,
    /// Web property ID of the form `UA-XXXXX-YY`.
    pub web_property_id: Option<String>,
}

/// Reply of `hashClientId`.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HashClientIdResponse {
    /// The client ID that was hashed.
    pub client_id: Option<String>,
    /// The hashed client ID.
    pub hashed_client_id: Option<String>,
    /// Always `analytics#hashClientIdResponse`.
    pub kind: Option<String>,
    /// Web property ID of the form `UA-XXXXX-YY`.
    pub web_property_id: Option<String>,
    /// Reply metadata.
    #[serde(skip)]
    pub server_response: ServerResponse,
}

api_resource!(HashClientIdResponse);

/// Endpoints of `management.clientId`.
#[derive(Debug, Clone)]
pub struct ClientIdService {
    client: Arc<HttpClient>,
}

impl ClientIdService {
    pub(crate) const fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    /// Hashes a client ID the way it appears in exported data.
    pub fn hash_client_id(&self, request: &HashClientIdRequest) -> ClientIdHashClientIdCall {
        ClientIdHashClientIdCall {
            call: Call::new(
                &self.client,
                HttpMethod::Post,
                "management/clientId:hashClientId",
            )
            .json_body(request),
        }
    }
}

/// `POST management/clientId:hashClientId`.
#[derive(Debug)]
#[must_use = "call builders do nothing until `send` is awaited"]
pub struct ClientIdHashClientIdCall {
    call: Call,
}

api_method!(ClientIdHashClientIdCall => HashClientIdResponse);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_client_id_request_body() {
        let request = HashClientIdRequest {
            client_id: Some("123.456".to_string()),
            web_property_id: Some("UA-1-1".to_string()),
            ..Default::default()
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"clientId": "123.456", "webPropertyId": "UA-1-1"})
        );
    }
}
