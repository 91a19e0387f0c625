//! Reporting queries: Core Reporting (`data.ga`), Multi-Channel Funnels
//! (`data.mcf`) and Real Time (`data.realtime`).
//!
//! # Example
//!
//! ```rust,ignore
//! use analytics_api::rest::ApiMethod;
//! use analytics_api::rest::resources::v3::Paginated;
//!
//! let report = analytics
//!     .data()
//!     .ga()
//!     .get("ga:12345", "7daysAgo", "today", "ga:sessions,ga:users")
//!     .dimensions("ga:country")
//!     .sort("-ga:sessions")
//!     .max_results(10)
//!     .send()
//!     .await?;
//!
//! for row in &report.rows {
//!     println!("{}", row.join("\t"));
//! }
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::clients::{HttpClient, HttpMethod};
use crate::rest::resources::v3::common::Paginated;
use crate::rest::{api_method, api_resource, Call, Int64, ServerResponse};

/// Describes one column of a report.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ColumnHeader {
    /// `DIMENSION` or `METRIC`.
    pub column_type: Option<String>,
    /// Data type, e.g. `STRING`, `INTEGER`, `CURRENCY`.
    pub data_type: Option<String>,
    /// Column name, e.g. `ga:sessions`.
    pub name: Option<String>,
}

/// The view a report was computed for.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DataProfileInfo {
    /// Account ID.
    pub account_id: Option<String>,
    /// Internal ID for the web property.
    pub internal_web_property_id: Option<String>,
    /// View ID.
    pub profile_id: Option<String>,
    /// View name.
    pub profile_name: Option<String>,
    /// Table ID, e.g. `ga:12345`.
    pub table_id: Option<String>,
    /// Web property ID of the form `UA-XXXXX-YY`.
    pub web_property_id: Option<String>,
}

/// The query parameters echoed back with a `ga` or `mcf` report.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DataQuery {
    /// Dimensions of the query.
    pub dimensions: Option<String>,
    /// Last day of the query.
    #[serde(rename = "end-date")]
    pub end_date: Option<String>,
    /// Filters of the query.
    pub filters: Option<String>,
    /// Table ID of the query.
    pub ids: Option<String>,
    /// Maximum results per page.
    #[serde(rename = "max-results")]
    pub max_results: Option<i64>,
    /// Metrics of the query.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub metrics: Vec<String>,
    /// Requested sampling level.
    #[serde(rename = "samplingLevel")]
    pub sampling_level: Option<String>,
    /// Segment of the query.
    pub segment: Option<String>,
    /// Sort order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sort: Vec<String>,
    /// First day of the query.
    #[serde(rename = "start-date")]
    pub start_date: Option<String>,
    /// 1-based index of the first row.
    #[serde(rename = "start-index")]
    pub start_index: Option<i64>,
}

/// A column of a `dataTable` report.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DataTableColumn {
    /// Column name.
    pub id: Option<String>,
    /// Column label.
    pub label: Option<String>,
    /// Column type, e.g. `string` or `number`.
    #[serde(rename = "type")]
    pub column_type: Option<String>,
}

/// A cell of a `dataTable` row.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DataTableCell {
    /// Cell value.
    pub v: Option<String>,
}

/// A row of a `dataTable` report.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DataTableRow {
    /// Cells of the row.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub c: Vec<DataTableCell>,
}

/// Report rows in the `dataTable` output format.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DataTable {
    /// Columns of the table.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cols: Vec<DataTableColumn>,
    /// Rows of the table.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rows: Vec<DataTableRow>,
}

/// A Core Reporting report.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GaData {
    /// Column headers, dimensions first.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub column_headers: Vec<ColumnHeader>,
    /// Whether the report is based on sampled data.
    pub contains_sampled_data: Option<bool>,
    /// Last refresh time of the data, in seconds since the epoch.
    #[serde_as(as = "Option<Int64>")]
    pub data_last_refreshed: Option<i64>,
    /// Rows in the `dataTable` output format.
    pub data_table: Option<DataTable>,
    /// Unique ID of this report.
    pub id: Option<String>,
    /// Maximum number of rows the response can contain.
    pub items_per_page: Option<i64>,
    /// Always `analytics#gaData`.
    pub kind: Option<String>,
    /// Link to the next page.
    pub next_link: Option<String>,
    /// Link to the previous page.
    pub previous_link: Option<String>,
    /// The view the report was computed for.
    pub profile_info: Option<DataProfileInfo>,
    /// The query that produced the report.
    pub query: Option<DataQuery>,
    /// Rows in the `json` output format, one string per column.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rows: Vec<Vec<String>>,
    /// Number of samples used.
    #[serde_as(as = "Option<Int64>")]
    pub sample_size: Option<i64>,
    /// Total size of the sample space.
    #[serde_as(as = "Option<Int64>")]
    pub sample_space: Option<i64>,
    /// Link for this report.
    pub self_link: Option<String>,
    /// Total number of rows across all pages.
    pub total_results: Option<i64>,
    /// Metric totals across all rows, keyed by metric name.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub totals_for_all_results: HashMap<String, String>,
    /// Reply metadata.
    #[serde(skip)]
    pub server_response: ServerResponse,
}

/// One step of a conversion path.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ConversionPathStep {
    /// Interaction type, e.g. `CLICK` or `IMPRESSION`.
    pub interaction_type: Option<String>,
    /// Node value of the step.
    pub node_value: Option<String>,
}

/// A cell of a Multi-Channel Funnels report. Exactly one value is set.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct McfDataCell {
    /// Set for `MCF_SEQUENCE` columns.
    pub conversion_path_value: Option<Vec<ConversionPathStep>>,
    /// Set for every other column.
    pub primitive_value: Option<String>,
}

/// A Multi-Channel Funnels report.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct McfData {
    /// Column headers, dimensions first.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub column_headers: Vec<ColumnHeader>,
    /// Whether the report is based on sampled data.
    pub contains_sampled_data: Option<bool>,
    /// Unique ID of this report.
    pub id: Option<String>,
    /// Maximum number of rows the response can contain.
    pub items_per_page: Option<i64>,
    /// Always `analytics#mcfData`.
    pub kind: Option<String>,
    /// Link to the next page.
    pub next_link: Option<String>,
    /// Link to the previous page.
    pub previous_link: Option<String>,
    /// The view the report was computed for.
    pub profile_info: Option<DataProfileInfo>,
    /// The query that produced the report.
    pub query: Option<DataQuery>,
    /// Report rows.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rows: Vec<Vec<McfDataCell>>,
    /// Number of samples used.
    #[serde_as(as = "Option<Int64>")]
    pub sample_size: Option<i64>,
    /// Total size of the sample space.
    #[serde_as(as = "Option<Int64>")]
    pub sample_space: Option<i64>,
    /// Link for this report.
    pub self_link: Option<String>,
    /// Total number of rows across all pages.
    pub total_results: Option<i64>,
    /// Metric totals across all rows, keyed by metric name.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub totals_for_all_results: HashMap<String, String>,
    /// Reply metadata.
    #[serde(skip)]
    pub server_response: ServerResponse,
}

/// The query parameters echoed back with a real time report.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct RealtimeDataQuery {
    /// Dimensions of the query.
    pub dimensions: Option<String>,
    /// Filters of the query.
    pub filters: Option<String>,
    /// Table ID of the query.
    pub ids: Option<String>,
    /// Maximum results per page.
    #[serde(rename = "max-results")]
    pub max_results: Option<i64>,
    /// Metrics of the query.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub metrics: Vec<String>,
    /// Sort order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sort: Vec<String>,
}

/// A Real Time report.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RealtimeData {
    /// Column headers, dimensions first.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub column_headers: Vec<ColumnHeader>,
    /// Unique ID of this report.
    pub id: Option<String>,
    /// Always `analytics#realtimeData`.
    pub kind: Option<String>,
    /// The view the report was computed for.
    pub profile_info: Option<DataProfileInfo>,
    /// The query that produced the report.
    pub query: Option<RealtimeDataQuery>,
    /// Report rows, one string per column.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rows: Vec<Vec<String>>,
    /// Link for this report.
    pub self_link: Option<String>,
    /// Total number of rows.
    pub total_results: Option<i64>,
    /// Metric totals across all rows, keyed by metric name.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub totals_for_all_results: HashMap<String, String>,
    /// Reply metadata.
    #[serde(skip)]
    pub server_response: ServerResponse,
}

api_resource!(GaData, McfData, RealtimeData);

/// Entry point of the `data.*` endpoints.
#[derive(Debug, Clone)]
pub struct DataService {
    client: Arc<HttpClient>,
}

impl DataService {
    pub(crate) const fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    /// Core Reporting queries.
    #[must_use]
    pub fn ga(&self) -> DataGaService {
        DataGaService {
            client: Arc::clone(&self.client),
        }
    }

    /// Multi-Channel Funnels queries.
    #[must_use]
    pub fn mcf(&self) -> DataMcfService {
        DataMcfService {
            client: Arc::clone(&self.client),
        }
    }

    /// Real Time queries.
    #[must_use]
    pub fn realtime(&self) -> DataRealtimeService {
        DataRealtimeService {
            client: Arc::clone(&self.client),
        }
    }
}

/// Endpoints of `data.ga`.
#[derive(Debug, Clone)]
pub struct DataGaService {
    client: Arc<HttpClient>,
}

impl DataGaService {
    /// Queries Core Reporting data.
    ///
    /// `ids` is the table ID (`ga:` + view ID); dates are `YYYY-MM-DD` or
    /// relative (`today`, `7daysAgo`); `metrics` is a comma separated list.
    pub fn get(
        &self,
        ids: &str,
        start_date: &str,
        end_date: &str,
        metrics: &str,
    ) -> DataGaGetCall {
        DataGaGetCall {
            call: Call::new(&self.client, HttpMethod::Get, "data/ga")
                .query_param("ids", ids)
                .query_param("start-date", start_date)
                .query_param("end-date", end_date)
                .query_param("metrics", metrics),
        }
    }
}

/// `GET data/ga`.
#[derive(Debug)]
#[must_use = "call builders do nothing until `send` is awaited"]
pub struct DataGaGetCall {
    call: Call,
}

impl DataGaGetCall {
    /// Comma separated dimensions, e.g. `ga:browser,ga:city`.
    pub fn dimensions(mut self, dimensions: impl Into<String>) -> Self {
        self.call.set_query("dimensions", dimensions.into());
        self
    }

    /// Dimension or metric filters, e.g. `ga:browser==Firefox`.
    pub fn filters(mut self, filters: impl Into<String>) -> Self {
        self.call.set_query("filters", filters.into());
        self
    }

    /// Whether rows whose metrics are all zero are returned.
    pub fn include_empty_rows(mut self, include: bool) -> Self {
        self.call.set_query("include-empty-rows", include);
        self
    }

    /// Output format: `json` or `dataTable`.
    pub fn output(mut self, output: impl Into<String>) -> Self {
        self.call.set_query("output", output.into());
        self
    }

    /// `DEFAULT`, `FASTER` or `HIGHER_PRECISION`.
    pub fn sampling_level(mut self, level: impl Into<String>) -> Self {
        self.call.set_query("samplingLevel", level.into());
        self
    }

    /// Segment to apply, e.g. `gaid::-3`.
    pub fn segment(mut self, segment: impl Into<String>) -> Self {
        self.call.set_query("segment", segment.into());
        self
    }

    /// Comma separated sort order; prefix a column with `-` for descending.
    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        self.call.set_query("sort", sort.into());
        self
    }
}

/// Endpoints of `data.mcf`.
#[derive(Debug, Clone)]
pub struct DataMcfService {
    client: Arc<HttpClient>,
}

impl DataMcfService {
    /// Queries Multi-Channel Funnels data. `metrics` uses the `mcf:` prefix.
    pub fn get(
        &self,
        ids: &str,
        start_date: &str,
        end_date: &str,
        metrics: &str,
    ) -> DataMcfGetCall {
        DataMcfGetCall {
            call: Call::new(&self.client, HttpMethod::Get, "data/mcf")
                .query_param("ids", ids)
                .query_param("start-date", start_date)
                .query_param("end-date", end_date)
                .query_param("metrics", metrics),
        }
    }
}

/// `GET data/mcf`.
#[derive(Debug)]
#[must_use = "call builders do nothing until `send` is awaited"]
pub struct DataMcfGetCall {
    call: Call,
}

impl DataMcfGetCall {
    /// Comma separated dimensions, e.g. `mcf:source,mcf:medium`.
    pub fn dimensions(mut self, dimensions: impl Into<String>) -> Self {
        self.call.set_query("dimensions", dimensions.into());
        self
    }

    /// Dimension or metric filters.
    pub fn filters(mut self, filters: impl Into<String>) -> Self {
        self.call.set_query("filters", filters.into());
        self
    }

    /// `DEFAULT`, `FASTER` or `HIGHER_PRECISION`.
    pub fn sampling_level(mut self, level: impl Into<String>) -> Self {
        self.call.set_query("samplingLevel", level.into());
        self
    }

    /// Comma separated sort order.
    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        self.call.set_query("sort", sort.into());
        self
    }
}

/// Endpoints of `data.realtime`.
#[derive(Debug, Clone)]
pub struct DataRealtimeService {
    client: Arc<HttpClient>,
}

impl DataRealtimeService {
    /// Queries Real Time data. `metrics` uses the `rt:` prefix.
    pub fn get(&self, ids: &str, metrics: &str) -> DataRealtimeGetCall {
        DataRealtimeGetCall {
            call: Call::new(&self.client, HttpMethod::Get, "data/realtime")
                .query_param("ids", ids)
                .query_param("metrics", metrics),
        }
    }
}

/// `GET data/realtime`.
#[derive(Debug)]
#[must_use = "call builders do nothing until `send` is awaited"]
pub struct DataRealtimeGetCall {
    call: Call,
}

impl DataRealtimeGetCall {
    /// Comma separated dimensions, e.g. `rt:medium`.
    pub fn dimensions(mut self, dimensions: impl Into<String>) -> Self {
        self.call.set_query("dimensions", dimensions.into());
        self
    }

    /// Dimension or metric filters.
    pub fn filters(mut self, filters: impl Into<String>) -> Self {
        self.call.set_query("filters", filters.into());
        self
    }

    /// Maximum number of rows in the response.
    pub fn max_results(mut self, max_results: i64) -> Self {
        self.call.set_query("max-results", max_results);
        self
    }

    /// Comma separated sort order.
    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        self.call.set_query("sort", sort.into());
        self
    }
}

api_method!(DataGaGetCall => GaData, conditional);
api_method!(DataMcfGetCall => McfData, conditional);
api_method!(DataRealtimeGetCall => RealtimeData, conditional);
impl Paginated for DataGaGetCall {}
impl Paginated for DataMcfGetCall {}
