//! Custom data sources of a web property.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{HttpClient, HttpMethod};
use crate::rest::resources::v3::common::{ChildLink, Paginated, ParentLink};
use crate::rest::{api_method, api_resource, Call, ServerResponse};

/// A custom data source used for data import.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CustomDataSource {
    /// Account ID to which this data source belongs.
    pub account_id: Option<String>,
    /// Link to the uploads of this data source.
    pub child_link: Option<ChildLink>,
    /// Time this data source was created.
    pub created: Option<DateTime<Utc>>,
    /// Description of the data source.
    pub description: Option<String>,
    /// Custom data source ID.
    pub id: Option<String>,
    /// Import behavior: `SUMMARY` or `OVERWRITE`.
    pub import_behavior: Option<String>,
    /// Always `analytics#customDataSource`.
    pub kind: Option<String>,
    /// Name of this data source.
    pub name: Option<String>,
    /// Link to the parent web property.
    pub parent_link: Option<ParentLink>,
    /// IDs of views linked to this data source.
    pub profiles_linked: Option<Vec<String>>,
    /// Collection of schema headers of the data source.
    pub schema: Option<Vec<String>>,
    /// Link for this data source.
    pub self_link: Option<String>,
    /// Data source type.
    #[serde(rename = "type")]
    pub source_type: Option<String>,
    /// Time this data source was last modified.
    pub updated: Option<DateTime<Utc>>,
    /// Upload type of the data source.
    pub upload_type: Option<String>,
    /// Web property ID of the form `UA-XXXXX-YY`.
    pub web_property_id: Option<String>,
}

/// A collection of custom data sources.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CustomDataSources {
    /// The data sources on this page.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<CustomDataSource>,
    /// Maximum number of entries the response can contain.
    pub items_per_page: Option<i64>,
    /// Always `analytics#customDataSources`.
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

api_resource!(CustomDataSources);

/// Endpoints of `management.customDataSources`.
#[derive(Debug, Clone)]
pub struct CustomDataSourcesService {
    client: Arc<HttpClient>,
}

impl CustomDataSourcesService {
    pub(crate) const fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    /// Lists custom data sources of a web property.
    pub fn list(&self, account_id: &str, web_property_id: &str) -> CustomDataSourcesListCall {
        CustomDataSourcesListCall {
            call: Call::new(
                &self.client,
                HttpMethod::Get,
                "management/accounts/{accountId}/webproperties/{webPropertyId}/customDataSources",
            )
            .path_param("accountId", account_id)
            .path_param("webPropertyId", web_property_id),
        }
    }
}

/// `GET .../webproperties/{webPropertyId}/customDataSources`.
#[derive(Debug)]
#[must_use = "call builders do nothing until `send` is awaited"]
pub struct CustomDataSourcesListCall {
    call: Call,
}

api_method!(CustomDataSourcesListCall => CustomDataSources, conditional);
impl Paginated for CustomDataSourcesListCall {}
