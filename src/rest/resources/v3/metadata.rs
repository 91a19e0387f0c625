//! Dimension and metric metadata.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::clients::{HttpClient, HttpMethod};
use crate::rest::{api_method, api_resource, Call, ServerResponse};

/// A dimension or metric.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Column {
    /// Attributes such as `type`, `dataType`, `group`, `status`, `uiName`.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub attributes: HashMap<String, String>,
    /// Column ID, e.g. `ga:sessions`.
    pub id: Option<String>,
    /// Always `analytics#column`.
    pub kind: Option<String>,
}

/// All columns of a report type.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Columns {
    /// Names of the attributes present on the columns.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attribute_names: Vec<String>,
    /// Version tag of the metadata.
    pub etag: Option<String>,
    /// The columns.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<Column>,
    /// Always `analytics#columns`.
    pub kind: Option<String>,
    /// Number of columns.
    pub total_results: Option<i64>,
    /// Reply metadata.
    #[serde(skip)]
    pub server_response: ServerResponse,
}

api_resource!(Columns);

/// Entry point of the `metadata.*` endpoints.
#[derive(Debug, Clone)]
pub struct MetadataService {
    client: Arc<HttpClient>,
}

impl MetadataService {
    pub(crate) const fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    /// Endpoints of `metadata.columns`.
    #[must_use]
    pub fn columns(&self) -> MetadataColumnsService {
        MetadataColumnsService {
            client: Arc::clone(&self.client),
        }
    }
}

/// Endpoints of `metadata.columns`.
#[derive(Debug, Clone)]
pub struct MetadataColumnsService {
    client: Arc<HttpClient>,
}

impl MetadataColumnsService {
    /// Lists the columns of a report type. The only report type is `ga`.
    pub fn list(&self, report_type: &str) -> MetadataColumnsListCall {
        MetadataColumnsListCall {
            call: Call::new(&self.client, HttpMethod::Get, "metadata/{reportType}/columns")
                .path_param("reportType", report_type),
        }
    }
}

/// `GET metadata/{reportType}/columns`.
#[derive(Debug)]
#[must_use = "call builders do nothing until `send` is awaited"]
pub struct MetadataColumnsListCall {
    call: Call,
}

api_method!(MetadataColumnsListCall => Columns, conditional);
