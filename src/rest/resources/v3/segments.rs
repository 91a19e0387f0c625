//! Segments available to the user.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{HttpClient, HttpMethod};
use crate::rest::resources::v3::common::Paginated;
use crate::rest::{api_method, api_resource, Call, ServerResponse};

/// An advanced segment.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    /// Time the segment was created.
    pub created: Option<DateTime<Utc>>,
    /// Segment definition, e.g. `users::condition::ga:browser==Chrome`.
    pub definition: Option<String>,
    /// Segment ID.
    pub id: Option<String>,
    /// Always `analytics#segment`.
    pub kind: Option<String>,
    /// Segment name.
    pub name: Option<String>,
    /// Segment ID usable in the `segment` parameter of data queries.
    pub segment_id: Option<String>,
    /// Link for this segment.
    pub self_link: Option<String>,
    /// `BUILT_IN` or `CUSTOM`.
    #[serde(rename = "type")]
    pub segment_type: Option<String>,
    /// Time the segment was last modified.
    pub updated: Option<DateTime<Utc>>,
}

/// A collection of segments.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Segments {
    /// The segments on this page.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<Segment>,
    /// Maximum number of entries the response can contain.
    pub items_per_page: Option<i64>,
    /// Always `analytics#segments`.
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

api_resource!(Segments);

/// Endpoints of `management.segments`.
#[derive(Debug, Clone)]
pub struct SegmentsService {
    client: Arc<HttpClient>,
}

impl SegmentsService {
    pub(crate) const fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    /// Lists segments the user has access to.
    pub fn list(&self) -> SegmentsListCall {
        SegmentsListCall {
            call: Call::new(&self.client, HttpMethod::Get, "management/segments"),
        }
    }
}

/// `GET management/segments`.
#[derive(Debug)]
#[must_use = "call builders do nothing until `send` is awaited"]
pub struct SegmentsListCall {
    call: Call,
}

api_method!(SegmentsListCall => Segments, conditional);
impl Paginated for SegmentsListCall {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_type_wire_name() {
        let json = r#"{"id":"-1","segmentId":"gaid::-1","type":"BUILT_IN","name":"All Users"}"#;
        let segment: Segment = serde_json::from_str(json).unwrap();

        assert_eq!(segment.segment_type.as_deref(), Some("BUILT_IN"));
        assert_eq!(segment.segment_id.as_deref(), Some("gaid::-1"));
        assert!(segment.definition.is_none());
    }
}
