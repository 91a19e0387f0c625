//! Custom metrics of a web property.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{HttpClient, HttpMethod};
use crate::rest::resources::v3::common::{Paginated, ParentLink};
use crate::rest::{api_method, api_resource, Call, ServerResponse};

const COLLECTION: &str =
    "management/accounts/{accountId}/webproperties/{webPropertyId}/customMetrics";
const ITEM: &str =
    "management/accounts/{accountId}/webproperties/{webPropertyId}/customMetrics/{customMetricId}";

/// A custom metric.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CustomMetric {
    /// Account ID.
    pub account_id: Option<String>,
    /// Whether the metric is active.
    pub active: Option<bool>,
    /// Time the metric was created.
    pub created: Option<DateTime<Utc>>,
    /// Custom metric ID, e.g. `ga:metric1`.
    pub id: Option<String>,
    /// Index of the metric.
    pub index: Option<i64>,
    /// Always `analytics#customMetric`.
    pub kind: Option<String>,
    /// Maximum value of the metric.
    #[serde(rename = "max_value")]
    pub max_value: Option<String>,
    /// Minimum value of the metric.
    #[serde(rename = "min_value")]
    pub min_value: Option<String>,
    /// Name of the metric.
    pub name: Option<String>,
    /// Link to the parent web property.
    pub parent_link: Option<ParentLink>,
    /// Scope: `HIT` or `PRODUCT`.
    pub scope: Option<String>,
    /// Link for this metric.
    pub self_link: Option<String>,
    /// Data type: `INTEGER`, `TIME` or `CURRENCY`.
    #[serde(rename = "type")]
    pub metric_type: Option<String>,
    /// Time the metric was last modified.
    pub updated: Option<DateTime<Utc>>,
    /// Web property ID of the form `UA-XXXXX-YY`.
    pub web_property_id: Option<String>,
    /// Reply metadata.
    #[serde(skip)]
    pub server_response: ServerResponse,
}

/// A collection of custom metrics.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CustomMetrics {
    /// The metrics on this page.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<CustomMetric>,
    /// Maximum number of entries the response can contain.
    pub items_per_page: Option<i64>,
    /// Always `analytics#customMetrics`.
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

api_resource!(CustomMetric, CustomMetrics);

/// Endpoints of `management.customMetrics`.
#[derive(Debug, Clone)]
pub struct CustomMetricsService {
    client: Arc<HttpClient>,
}

impl CustomMetricsService {
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
        custom_metric_id: &str,
    ) -> Call {
        Call::new(&self.client, method, ITEM)
            .path_param("accountId", account_id)
            .path_param("webPropertyId", web_property_id)
            .path_param("customMetricId", custom_metric_id)
    }

    /// Gets a custom metric.
    pub fn get(
        &self,
        account_id: &str,
        web_property_id: &str,
        custom_metric_id: &str,
    ) -> CustomMetricsGetCall {
        CustomMetricsGetCall {
            call: self.item(HttpMethod::Get, account_id, web_property_id, custom_metric_id),
        }
    }

    /// Creates a new custom metric.
    pub fn insert(
        &self,
        account_id: &str,
        web_property_id: &str,
        metric: &CustomMetric,
    ) -> CustomMetricsInsertCall {
        CustomMetricsInsertCall {
            call: self
                .collection(HttpMethod::Post, account_id, web_property_id)
                .json_body(metric),
        }
    }

    /// Lists custom metrics of a web property.
    pub fn list(&self, account_id: &str, web_property_id: &str) -> CustomMetricsListCall {
        CustomMetricsListCall {
            call: self.collection(HttpMethod::Get, account_id, web_property_id),
        }
    }

    /// Updates an existing custom metric. Only set fields are sent.
    pub fn patch(
        &self,
        account_id: &str,
        web_property_id: &str,
        custom_metric_id: &str,
        metric: &CustomMetric,
    ) -> CustomMetricsPatchCall {
        CustomMetricsPatchCall {
            call: self
                .item(HttpMethod::Patch, account_id, web_property_id, custom_metric_id)
                .json_body(metric),
        }
    }

    /// Replaces an existing custom metric.
    pub fn update(
        &self,
        account_id: &str,
        web_property_id: &str,
        custom_metric_id: &str,
        metric: &CustomMetric,
    ) -> CustomMetricsUpdateCall {
        CustomMetricsUpdateCall {
            call: self
                .item(HttpMethod::Put, account_id, web_property_id, custom_metric_id)
                .json_body(metric),
        }
    }
}

/// `GET .../customMetrics/{customMetricId}`.
#[derive(Debug)]
#[must_use = "call builders do nothing until `send` is awaited"]
pub struct CustomMetricsGetCall {
    call: Call,
}

/// `POST .../customMetrics`.
#[derive(Debug)]
#[must_use = "call builders do nothing until `send` is awaited"]
pub struct CustomMetricsInsertCall {
    call: Call,
}

/// `GET .../customMetrics`.
#[derive(Debug)]
#[must_use = "call builders do nothing until `send` is awaited"]
pub struct CustomMetricsListCall {
    call: Call,
}

/// `PATCH .../customMetrics/{customMetricId}`.
#[derive(Debug)]
#[must_use = "call builders do nothing until `send` is awaited"]
pub struct CustomMetricsPatchCall {
    call: Call,
}

impl CustomMetricsPatchCall {
    /// Force the update and ignore warnings about linked custom data sources.
    pub fn ignore_custom_data_source_links(mut self, ignore: bool) -> Self {
        self.call.set_query("ignoreCustomDataSourceLinks", ignore);
        self
    }
}

/// `PUT .../customMetrics/{customMetricId}`.
#[derive(Debug)]
#[must_use = "call builders do nothing until `send` is awaited"]
pub struct CustomMetricsUpdateCall {
    call: Call,
}

impl CustomMetricsUpdateCall {
    /// Force the update and ignore warnings about linked custom data sources.
    pub fn ignore_custom_data_source_links(mut self, ignore: bool) -> Self {
        self.call.set_query("ignoreCustomDataSourceLinks", ignore);
        self
    }
}

api_method!(CustomMetricsGetCall => CustomMetric, conditional);
api_method!(CustomMetricsInsertCall => CustomMetric);
api_method!(CustomMetricsListCall => CustomMetrics, conditional);
api_method!(CustomMetricsPatchCall => CustomMetric);
api_method!(CustomMetricsUpdateCall => CustomMetric);
impl Paginated for CustomMetricsListCall {}
