//! Filter resource and the `management.filters` endpoints.
//!
//! # Example
//!
//! ```rust,ignore
//! use analytics_api::rest::ApiMethod;
//! use analytics_api::rest::resources::v3::{Filter, FilterExpression};
//!
//! let filter = Filter {
//!     name: Some("Only EU traffic".to_string()),
//!     filter_type: Some("INCLUDE".to_string()),
//!     include_details: Some(FilterExpression {
//!         field: Some("GEO_REGION".to_string()),
//!         expression_value: Some("Europe".to_string()),
//!         ..Default::default()
//!     }),
//!     ..Default::default()
//! };
//!
//! let created = analytics.management().filters().insert("123", &filter).send().await?;
//! println!("created filter {:?}", created.id);
//! ```

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{HttpClient, HttpMethod};
use crate::rest::resources::v3::common::{Paginated, ParentLink};
use crate::rest::{api_method, api_resource, Call, ServerResponse};

const COLLECTION: &str = "management/accounts/{accountId}/filters";
const ITEM: &str = "management/accounts/{accountId}/filters/{filterId}";

/// Details of an `ADVANCED` filter.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AdvancedDetails {
    /// Whether matching is case sensitive.
    pub case_sensitive: Option<bool>,
    /// Expression to extract from field A.
    pub extract_a: Option<String>,
    /// Expression to extract from field B.
    pub extract_b: Option<String>,
    /// Field A.
    pub field_a: Option<String>,
    /// Custom dimension index of field A.
    pub field_a_index: Option<i64>,
    /// Whether field A is required to match.
    pub field_a_required: Option<bool>,
    /// Field B.
    pub field_b: Option<String>,
    /// Custom dimension index of field B.
    pub field_b_index: Option<i64>,
    /// Whether field B is required to match.
    pub field_b_required: Option<bool>,
    /// Constructor expression for the output field.
    pub output_constructor: Option<String>,
    /// Output field.
    pub output_to_field: Option<String>,
    /// Custom dimension index of the output field.
    pub output_to_field_index: Option<i64>,
    /// Whether the output field is overridden when already set.
    pub override_output_field: Option<bool>,
}

/// Details of a `LOWERCASE` or `UPPERCASE` filter.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CaseDetails {
    /// Field to change the case of.
    pub field: Option<String>,
    /// Custom dimension index of the field.
    pub field_index: Option<i64>,
}

/// Details of a `SEARCH_AND_REPLACE` filter.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SearchAndReplaceDetails {
    /// Whether matching is case sensitive.
    pub case_sensitive: Option<bool>,
    /// Field to search.
    pub field: Option<String>,
    /// Custom dimension index of the field.
    pub field_index: Option<i64>,
    /// Replacement string.
    pub replace_string: Option<String>,
    /// Search term.
    pub search_string: Option<String>,
}

/// An include or exclude filter expression.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FilterExpression {
    /// Whether matching is case sensitive.
    pub case_sensitive: Option<bool>,
    /// Filter expression value.
    pub expression_value: Option<String>,
    /// Field to filter on, e.g. `GEO_COUNTRY`.
    pub field: Option<String>,
    /// Custom dimension index of the field.
    pub field_index: Option<i64>,
    /// Always `analytics#filterExpression`.
    pub kind: Option<String>,
    /// `BEGINS_WITH`, `EQUAL`, `ENDS_WITH`, `CONTAINS` or `MATCHES`.
    pub match_type: Option<String>,
}

/// A lightweight reference to a filter.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FilterRef {
    /// Account ID to which this filter belongs.
    pub account_id: Option<String>,
    /// Link for this filter.
    pub href: Option<String>,
    /// Filter ID.
    pub id: Option<String>,
    /// Always `analytics#filterRef`.
    pub kind: Option<String>,
    /// Filter name.
    pub name: Option<String>,
}

/// An account-level view filter.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Filter {
    /// Account ID to which this filter belongs.
    pub account_id: Option<String>,
    /// Details of an `ADVANCED` filter.
    pub advanced_details: Option<AdvancedDetails>,
    /// Time this filter was created.
    pub created: Option<DateTime<Utc>>,
    /// Details of an `EXCLUDE` filter.
    pub exclude_details: Option<FilterExpression>,
    /// Filter ID.
    pub id: Option<String>,
    /// Details of an `INCLUDE` filter.
    pub include_details: Option<FilterExpression>,
    /// Always `analytics#filter`.
    pub kind: Option<String>,
    /// Details of a `LOWERCASE` filter.
    pub lowercase_details: Option<CaseDetails>,
    /// Filter name.
    pub name: Option<String>,
    /// Link to the parent account.
    pub parent_link: Option<ParentLink>,
    /// Details of a `SEARCH_AND_REPLACE` filter.
    pub search_and_replace_details: Option<SearchAndReplaceDetails>,
    /// Link for this filter.
    pub self_link: Option<String>,
    /// `INCLUDE`, `EXCLUDE`, `LOWERCASE`, `UPPERCASE`, `SEARCH_AND_REPLACE`
    /// or `ADVANCED`.
    #[serde(rename = "type")]
    pub filter_type: Option<String>,
    /// Time this filter was last modified.
    pub updated: Option<DateTime<Utc>>,
    /// Details of an `UPPERCASE` filter.
    pub uppercase_details: Option<CaseDetails>,
    /// Reply metadata.
    #[serde(skip)]
    pub server_response: ServerResponse,
}

/// A collection of filters.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Filters {
    /// The filters on this page.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<Filter>,
    /// Maximum number of entries the response can contain.
    pub items_per_page: Option<i64>,
    /// Always `analytics#filters`.
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

api_resource!(Filter, Filters);

/// Endpoints of `management.filters`.
#[derive(Debug, Clone)]
pub struct FiltersService {
    client: Arc<HttpClient>,
}

impl FiltersService {
    pub(crate) const fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    fn item(&self, method: HttpMethod, account_id: &str, filter_id: &str) -> Call {
        Call::new(&self.client, method, ITEM)
            .path_param("accountId", account_id)
            .path_param("filterId", filter_id)
    }

    /// Deletes a filter. The deleted filter is returned.
    pub fn delete(&self, account_id: &str, filter_id: &str) -> FiltersDeleteCall {
        FiltersDeleteCall {
            call: self.item(HttpMethod::Delete, account_id, filter_id),
        }
    }

    /// Gets a filter.
    pub fn get(&self, account_id: &str, filter_id: &str) -> FiltersGetCall {
        FiltersGetCall {
            call: self.item(HttpMethod::Get, account_id, filter_id),
        }
    }

    /// Creates a new filter.
    pub fn insert(&self, account_id: &str, filter: &Filter) -> FiltersInsertCall {
        FiltersInsertCall {
            call: Call::new(&self.client, HttpMethod::Post, COLLECTION)
                .path_param("accountId", account_id)
                .json_body(filter),
        }
    }

    /// Lists all filters of an account.
    pub fn list(&self, account_id: &str) -> FiltersListCall {
        FiltersListCall {
            call: Call::new(&self.client, HttpMethod::Get, COLLECTION)
                .path_param("accountId", account_id),
        }
    }

    /// Updates an existing filter. Only set fields are sent.
    pub fn patch(&self, account_id: &str, filter_id: &str, filter: &Filter) -> FiltersPatchCall {
        FiltersPatchCall {
            call: self
                .item(HttpMethod::Patch, account_id, filter_id)
                .json_body(filter),
        }
    }

    /// Replaces an existing filter.
    pub fn update(&self, account_id: &str, filter_id: &str, filter: &Filter) -> FiltersUpdateCall {
        FiltersUpdateCall {
            call: self
                .item(HttpMethod::Put, account_id, filter_id)
                .json_body(filter),
        }
    }
}

/// `DELETE management/accounts/{accountId}/filters/{filterId}`.
#[derive(Debug)]
#[must_use = "call builders do nothing until `send` is awaited"]
pub struct FiltersDeleteCall {
    call: Call,
}

/// `GET management/accounts/{accountId}/filters/{filterId}`.
#[derive(Debug)]
#[must_use = "call builders do nothing until `send` is awaited"]
pub struct FiltersGetCall {
    call: Call,
}

/// `POST management/accounts/{accountId}/filters`.
#[derive(Debug)]
#[must_use = "call builders do nothing until `send` is awaited"]
pub struct FiltersInsertCall {
    call: Call,
}

/// `GET management/accounts/{accountId}/filters`.
#[derive(Debug)]
#[must_use = "call builders do nothing until `send` is awaited"]
pub struct FiltersListCall {
    call: Call,
}

/// `PATCH management/accounts/{accountId}/filters/{filterId}`.
#[derive(Debug)]
#[must_use = "call builders do nothing until `send` is awaited"]
pub struct FiltersPatchCall {
    call: Call,
}

/// `PUT management/accounts/{accountId}/filters/{filterId}`.
#[derive(Debug)]
#[must_use = "call builders do nothing until `send` is awaited"]
pub struct FiltersUpdateCall {
    call: Call,
}

api_method!(FiltersDeleteCall => Filter);
api_method!(FiltersGetCall => Filter, conditional);
api_method!(FiltersInsertCall => Filter);
api_method!(FiltersListCall => Filters, conditional);
api_method!(FiltersPatchCall => Filter);
api_method!(FiltersUpdateCall => Filter);
impl Paginated for FiltersListCall {}
