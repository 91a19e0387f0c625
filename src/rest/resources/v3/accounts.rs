//! Account resource and the `management.accounts` endpoints.
//!
//! # Example
//!
//! ```rust,ignore
//! use analytics_api::rest::ApiMethod;
//! use analytics_api::rest::resources::v3::Paginated;
//!
//! let accounts = analytics.management().accounts().list().max_results(20).send().await?;
//! for account in &accounts.items {
//!     println!("{:?} {:?}", account.id, account.name);
//! }
//! ```

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{HttpClient, HttpMethod};
use crate::rest::resources::v3::common::{ChildLink, Paginated, Permissions};
use crate::rest::{api_method, api_resource, Call, ServerResponse};

/// A Google Analytics account.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Link to the web properties of this account.
    pub child_link: Option<ChildLink>,
    /// Time the account was created.
    pub created: Option<DateTime<Utc>>,
    /// Account ID.
    pub id: Option<String>,
    /// Always `analytics#account`.
    pub kind: Option<String>,
    /// Account name.
    pub name: Option<String>,
    /// Permissions the user has for this account.
    pub permissions: Option<Permissions>,
    /// Link for this account.
    pub self_link: Option<String>,
    /// Whether the account is starred.
    pub starred: Option<bool>,
    /// Time the account was last modified.
    pub updated: Option<DateTime<Utc>>,
}

/// A collection of accounts.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Accounts {
    /// The accounts on this page.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<Account>,
    /// Maximum number of entries the response can contain.
    pub items_per_page: Option<i64>,
    /// Always `analytics#accounts`.
    pub kind: Option<String>,
    /// Link to the next page of accounts.
    pub next_link: Option<String>,
    /// Link to the previous page of accounts.
    pub previous_link: Option<String>,
    /// 1-based index of the first entry.
    pub start_index: Option<i64>,
    /// Total number of results across all pages.
    pub total_results: Option<i64>,
    /// Email ID of the authenticated user.
    pub username: Option<String>,
    /// Reply metadata.
    #[serde(skip)]
    pub server_response: ServerResponse,
}

api_resource!(Accounts);

/// Endpoints of `management.accounts`.
#[derive(Debug, Clone)]
pub struct AccountsService {
    client: Arc<HttpClient>,
}

impl AccountsService {
    pub(crate) const fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    /// Lists all accounts to which the user has access.
    pub fn list(&self) -> AccountsListCall {
        AccountsListCall {
            call: Call::new(&self.client, HttpMethod::Get, "management/accounts"),
        }
    }
}

/// `GET management/accounts`.
#[derive(Debug)]
#[must_use = "call builders do nothing until `send` is awaited"]
pub struct AccountsListCall {
    call: Call,
}

api_method!(AccountsListCall => Accounts, conditional);
impl Paginated for AccountsListCall {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accounts_deserialization() {
        let json = r#"{
            "kind": "analytics#accounts",
            "username": "me@example.com",
            "totalResults": 2,
            "startIndex": 1,
            "itemsPerPage": 1000,
            "nextLink": "https://www.googleapis.com/analytics/v3/management/accounts?start-index=2",
            "items": [
                {
                    "id": "1001",
                    "kind": "analytics#account",
                    "name": "Primary",
                    "starred": true,
                    "permissions": {"effective": ["COLLABORATE", "READ_AND_ANALYZE"]},
                    "created": "2014-01-02T03:04:05.000Z",
                    "childLink": {"href": "https://example/webproperties", "type": "analytics#webproperties"},
                    "unknownField": 7
                },
                {"id": "1002", "name": "Secondary"}
            ]
        }"#;

        let accounts: Accounts = serde_json::from_str(json).unwrap();

        assert_eq!(accounts.items.len(), 2);
        assert_eq!(accounts.total_results, Some(2));
        assert_eq!(accounts.username.as_deref(), Some("me@example.com"));
        assert_eq!(accounts.items[0].starred, Some(true));
        assert_eq!(
            accounts.items[0]
                .permissions
                .as_ref()
                .and_then(|p| p.effective.as_ref())
                .map(Vec::len),
            Some(2)
        );
        assert_eq!(
            accounts.items[0].created.unwrap().to_rfc3339(),
            "2014-01-02T03:04:05+00:00"
        );
        assert!(accounts.items[1].starred.is_none());
    }

    #[test]
    fn test_account_serialization_omits_unset_and_keeps_zero_values() {
        let account = Account {
            name: Some(String::new()),
            starred: Some(false),
            ..Default::default()
        };

        let json = serde_json::to_value(&account).unwrap();
        assert_eq!(json, serde_json::json!({"name": "", "starred": false}));
    }

    #[test]
    fn test_accounts_round_trip() {
        let accounts = Accounts {
            items: vec![Account {
                id: Some("1".to_string()),
                name: Some("Acme".to_string()),
                ..Default::default()
            }],
            total_results: Some(1),
            next_link: Some("next".to_string()),
            ..Default::default()
        };

        let json = serde_json::to_string(&accounts).unwrap();
        assert!(!json.contains("server_response"));
        let parsed: Accounts = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, accounts);
    }
}
