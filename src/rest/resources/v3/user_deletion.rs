//! User deletion requests.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{HttpClient, HttpMethod};
use crate::rest::{api_method, api_resource, Call, ServerResponse};

/// The user a deletion request targets.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserDeletionRequestId {
    /// `CLIENT_ID`, `USER_ID` or `APP_INSTANCE_ID`.
    #[serde(rename = "type")]
    pub id_type: Option<String>,
    /// The user identifier.
    pub user_id: Option<String>,
}

/// A request to delete the data of one user.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserDeletionRequest {
    /// Time the request was received. Read-only.
    pub deletion_request_time: Option<DateTime<Utc>>,
    /// Firebase project ID.
    pub firebase_project_id: Option<String>,
    /// The user to delete.
    pub id: Option<UserDeletionRequestId>,
    /// Always `analytics#userDeletionRequest`.
    pub kind: Option<String>,
    /// Property ID.
    pub property_id: Option<String>,
    /// Web property ID of the form `UA-XXXXX-YY`.
    pub web_property_id: Option<String>,
    /// Reply metadata.
    #[serde(skip)]
    pub server_response: ServerResponse,
}

api_resource!(UserDeletionRequest);

/// Entry point of the `userDeletion.*` endpoints.
#[derive(Debug, Clone)]
pub struct UserDeletionService {
    client: Arc<HttpClient>,
}

impl UserDeletionService {
    pub(crate) const fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    /// Endpoints of `userDeletion.userDeletionRequest`.
    #[must_use]
    pub fn user_deletion_request(&self) -> UserDeletionRequestService {
        UserDeletionRequestService {
            client: Arc::clone(&self.client),
        }
    }
}

/// Endpoints of `userDeletion.userDeletionRequest`.
#[derive(Debug, Clone)]
pub struct UserDeletionRequestService {
    client: Arc<HttpClient>,
}

impl UserDeletionRequestService {
    /// Inserts or updates a user deletion request.
    pub fn upsert(&self, request: &UserDeletionRequest) -> UserDeletionRequestUpsertCall {
        UserDeletionRequestUpsertCall {
            call: Call::new(
                &self.client,
                HttpMethod::Post,
                "userDeletion/userDeletionRequests:upsert",
            )
            .json_body(request),
        }
    }
}

/// `POST userDeletion/userDeletionRequests:upsert`.
#[derive(Debug)]
#[must_use = "call builders do nothing until `send` is awaited"]
pub struct UserDeletionRequestUpsertCall {
    call: Call,
}

api_method!(UserDeletionRequestUpsertCall => UserDeletionRequest);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_deletion_request_serialization() {
        let request = UserDeletionRequest {
            web_property_id: Some("UA-1-1".to_string()),
            id: Some(UserDeletionRequestId {
                id_type: Some("CLIENT_ID".to_string()),
                user_id: Some("123.456".to_string()),
            }),
            ..Default::default()
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": {"type": "CLIENT_ID", "userId": "123.456"},
                "webPropertyId": "UA-1-1"
            })
        );
    }
}
