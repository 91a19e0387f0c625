//! Custom dimensions of a web property.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{HttpClient, HttpMethod};
use crate::rest::resources::v3::common::{Paginated, ParentLink};
use crate::rest::{api_method, api_resource, Call, ServerResponse};

const COLLECTION: &str =
    "management/accounts/{accountId}/webproperties/{webPropertyId}/customDimensions";
const ITEM: &str = "management/accounts/{accountId}/webproperties/{webPropertyId}/customDimensions/{customDimensionId}";

/// A custom dimension.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CustomDimension {
    /// Account ID.
    pub account_id: Option<String>,
    /// Whether the dimension is active.
    pub active: Option<bool>,
    /// Time the dimension was created.
    pub created: Option<DateTime<Utc>>,
    /// Custom dimension ID, e.g. `ga:dimension1`.
    pub id: Option<String>,
    /// Index of the dimension.
    pub index: Option<i64>,
    /// Always `analytics#customDimension`.
    pub kind: Option<String>,
    /// Name of the dimension.
    pub name: Option<String>,
    /// Link to the parent web property.
    pub parent_link: Option<ParentLink>,
    /// Scope: `HIT`, `SESSION`, `USER` or `PRODUCT`.
    pub scope: Option<String>,
    /// Link for this dimension.
    pub self_link: Option<String>,
    /// Time the dimension was last modified.
    pub updated: Option<DateTime<Utc>>,
    /// Web property ID of the form `UA-XXXXX-YY`.
    pub web_property_id: Option<String>,
    /// Reply metadata.
    #[serde(skip)]
    pub server_response: ServerResponse,
}

/// A collection of custom dimensions.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CustomDimensions {
    /// The dimensions on this page.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<CustomDimension>,
    /// Maximum number of entries the response can contain.
    pub items_per_page: Option<i64>,
    /// Always `analytics#customDimensions`.
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

api_resource!(CustomDimension, CustomDimensions);

/// Endpoints of `management.customDimensions`.
#[derive(Debug, Clone)]
pub struct CustomDimensionsService {
    client: Arc<HttpClient>,
}

impl CustomDimensionsService {
    pub(crate) const fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    fn collection(&self, method: HttpMethod, account_id: &str, web_property_id: &str) -> Call {
        Call::new(&self.client, method, COLLECTION)
            .path_param("accountId", account_id)
            .path_param("webPropertyId", web_property_id)
    }

    fn item(
        &self,
        method: HttpMethod,
        account_id: &str,
        web_property_id: &str,
        custom_dimension_id: &str,
    ) -> Call {
        Call::new(&self.client, method, ITEM)
            .path_param("accountId", account_id)
            .path_param("webPropertyId", web_property_id)
            .path_param("customDimensionId", custom_dimension_id)
    }

    /// Gets a custom dimension.
    pub fn get(
        &self,
        account_id: &str,
        web_property_id: &str,
        custom_dimension_id: &str,
    ) -> CustomDimensionsGetCall {
        CustomDimensionsGetCall {
            call: self.item(
                HttpMethod::Get,
                account_id,
                web_property_id,
                custom_dimension_id,
            ),
        }
    }

    /// Creates a new custom dimension.
    pub fn insert(
        &self,
        account_id: &str,
        web_property_id: &str,
        dimension: &CustomDimension,
    ) -> CustomDimensionsInsertCall {
        CustomDimensionsInsertCall {
            call: self
                .collection(HttpMethod::Post, account_id, web_property_id)
                .json_body(dimension),
        }
    }

    /// Lists custom dimensions of a web property.
    pub fn list(&self, account_id: &str, web_property_id: &str) -> CustomDimensionsListCall {
        CustomDimensionsListCall {
            call: self.collection(HttpMethod::Get, account_id, web_property_id),
        }
    }

    /// Updates an existing custom dimension. Only set fields are sent.
    pub fn patch(
        &self,
        account_id: &str,
        web_property_id: &str,
        custom_dimension_id: &str,
        dimension: &CustomDimension,
    ) -> CustomDimensionsPatchCall {
        CustomDimensionsPatchCall {
            call: self
                .item(
                    HttpMethod::Patch,
                    account_id,
                    web_property_id,
                    custom_dimension_id,
                )
                .json_body(dimension),
        }
    }

    /// Replaces an existing custom dimension.
    pub fn update(
        &self,
        account_id: &str,
        web_property_id: &str,
        custom_dimension_id: &str,
        dimension: &CustomDimension,
    ) -> CustomDimensionsUpdateCall {
        CustomDimensionsUpdateCall {
            call: self
                .item(
                    HttpMethod::Put,
                    account_id,
                    web_property_id,
                    custom_dimension_id,
                )
                .json_body(dimension),
        }
    }
}

/// `GET .../customDimensions/{customDimensionId}`.
#[derive(Debug)]
#[must_use = "call builders do nothing until `send` is awaited"]
pub struct CustomDimensionsGetCall {
    call: Call,
}

/// `POST .../customDimensions`.
#[derive(Debug)]
#[must_use = "call builders do nothing until `send` is awaited"]
pub struct CustomDimensionsInsertCall {
    call: Call,
}

/// `GET .../customDimensions`.
#[derive(Debug)]
#[must_use = "call builders do nothing until `send` is awaited"]
pub struct CustomDimensionsListCall {
    call: Call,
}

/// `PATCH .../customDimensions/{customDimensionId}`.
#[derive(Debug)]
#[must_use = "call builders do nothing until `send` is awaited"]
pub struct CustomDimensionsPatchCall {
    call: Call,
}

impl CustomDimensionsPatchCall {
    /// Force the update and ignore warnings about linked custom data sources.
    pub fn ignore_custom_data_source_links(mut self, ignore: bool) -> Self {
        self.call.set_query("ignoreCustomDataSourceLinks", ignore);
        self
    }
}

/// `PUT .../customDimensions/{customDimensionId}`.
#[derive(Debug)]
#[must_use = "call builders do nothing until `send` is awaited"]
pub struct CustomDimensionsUpdateCall {
    call: Call,
}

impl CustomDimensionsUpdateCall {
    /// Force the update and ignore warnings about linked custom data sources.
    pub fn ignore_custom_data_source_links(mut self, ignore: bool) -> Self {
        self.call.set_query("ignoreCustomDataSourceLinks", ignore);
        self
    }
}

api_method!(CustomDimensionsGetCall => CustomDimension, conditional);
api_method!(CustomDimensionsInsertCall => CustomDimension);
api_method!(CustomDimensionsListCall => CustomDimensions, conditional);
api_method!(CustomDimensionsPatchCall => CustomDimension);
api_method!(CustomDimensionsUpdateCall => CustomDimension);
impl Paginated for CustomDimensionsListCall {}
