//! Account summaries: a condensed tree of accounts, web properties and views.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::clients::{HttpClient, HttpMethod};
use crate::rest::resources::v3::common::Paginated;
use crate::rest::{api_method, api_resource, Call, ServerResponse};

/// Summary of a view (profile).
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSummary {
    /// View ID.
    pub id: Option<String>,
    /// Always `analytics#profileSummary`.
    pub kind: Option<String>,
    /// View name.
    pub name: Option<String>,
    /// Whether the view is starred.
    pub starred: Option<bool>,
    /// View type: `WEB` or `APP`.
    #[serde(rename = "type")]
    pub profile_type: Option<String>,
}

/// Summary of a web property and its views.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WebPropertySummary {
    /// Web property ID of the form `UA-XXXXX-YY`.
    pub id: Option<String>,
    /// Internal ID for this web property.
    pub internal_web_property_id: Option<String>,
    /// Always `analytics#webPropertySummary`.
    pub kind: Option<String>,
    /// Level: `STANDARD` or `PREMIUM`.
    pub level: Option<String>,
    /// Web property name.
    pub name: Option<String>,
    /// Views under this web property.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub profiles: Vec<ProfileSummary>,
    /// Whether the web property is starred.
    pub starred: Option<bool>,
    /// Website URL for this web property.
    pub website_url: Option<String>,
}

/// Summary of an account and its web properties.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AccountSummary {
    /// Account ID.
    pub id: Option<String>,
    /// Always `analytics#accountSummary`.
    pub kind: Option<String>,
    /// Account name.
    pub name: Option<String>,
    /// Whether the account is starred.
    pub starred: Option<bool>,
    /// Web properties under this account.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub web_properties: Vec<WebPropertySummary>,
}

/// A collection of account summaries.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AccountSummaries {
    /// The account summaries on this page.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<AccountSummary>,
    /// Maximum number of entries the response can contain.
    pub items_per_page: Option<i64>,
    /// Always `analytics#accountSummaries`.
    pub kind: Option<String>,
    /// Link to the next page.
    pub next_link: Option<String>,
    /// Link to the previous page.
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

api_resource!(AccountSummaries);

/// Endpoints of `management.accountSummaries`.
#[derive(Debug, Clone)]
pub struct AccountSummariesService {
    client: Arc<HttpClient>,
}

impl AccountSummariesService {
    pub(crate) const fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    /// Lists account summaries (lightweight tree of accounts, properties and
    /// views) the user has access to.
    pub fn list(&self) -> AccountSummariesListCall {
        AccountSummariesListCall {
            call: Call::new(&self.client, HttpMethod::Get, "management/accountSummaries"),
        }
    }
}

/// `GET management/accountSummaries`.
#[derive(Debug)]
#[must_use = "call builders do nothing until `send` is awaited"]
pub struct AccountSummariesListCall {
    call: Call,
}

api_method!(AccountSummariesListCall => AccountSummaries, conditional);
impl Paginated for AccountSummariesListCall {}
