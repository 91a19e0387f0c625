//! Unsampled reports of a view.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{HttpClient, HttpMethod};
use crate::rest::resources::v3::common::Paginated;
use crate::rest::{api_method, api_resource, Call, ServerResponse};

const COLLECTION: &str = "management/accounts/{accountId}/webproperties/{webPropertyId}/profiles/{profileId}/unsampledReports";
const ITEM: &str = "management/accounts/{accountId}/webproperties/{webPropertyId}/profiles/{profileId}/unsampledReports/{unsampledReportId}";

/// Where a report stored in Google Cloud Storage can be downloaded.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CloudStorageDownloadDetails {
    /// Bucket holding the report.
    pub bucket_id: Option<String>,
    /// Object holding the report.
    pub object_id: Option<String>,
}

/// Where a report stored in Google Drive can be downloaded.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DriveDownloadDetails {
    /// Drive document holding the report.
    pub document_id: Option<String>,
}

/// An unsampled report.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UnsampledReport {
    /// Account ID.
    pub account_id: Option<String>,
    /// Download details for `GOOGLE_CLOUD_STORAGE` reports.
    pub cloud_storage_download_details: Option<CloudStorageDownloadDetails>,
    /// Time the report was created.
    pub created: Option<DateTime<Utc>>,
    /// Dimensions of the report.
    pub dimensions: Option<String>,
    /// `GOOGLE_CLOUD_STORAGE` or `GOOGLE_DRIVE`.
    pub download_type: Option<String>,
    /// Download details for `GOOGLE_DRIVE` reports.
    pub drive_download_details: Option<DriveDownloadDetails>,
    /// Last day of the report, `YYYY-MM-DD`.
    #[serde(rename = "end-date")]
    pub end_date: Option<String>,
    /// Filters of the report.
    pub filters: Option<String>,
    /// Report ID.
    pub id: Option<String>,
    /// Always `analytics#unsampledReport`.
    pub kind: Option<String>,
    /// Metrics of the report.
    pub metrics: Option<String>,
    /// View ID.
    pub profile_id: Option<String>,
    /// Segment of the report.
    pub segment: Option<String>,
    /// Link for this report.
    pub self_link: Option<String>,
    /// First day of the report, `YYYY-MM-DD`.
    #[serde(rename = "start-date")]
    pub start_date: Option<String>,
    /// `PENDING`, `COMPLETED` or `FAILED`.
    pub status: Option<String>,
    /// Title of the report.
    pub title: Option<String>,
    /// Time the report was last modified.
    pub updated: Option<DateTime<Utc>>,
    /// Web property ID of the form `UA-XXXXX-YY`.
    pub web_property_id: Option<String>,
    /// Reply metadata.
    #[serde(skip)]
    pub server_response: ServerResponse,
}

/// A collection of unsampled reports.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UnsampledReports {
    /// The reports on this page.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<UnsampledReport>,
    /// Maximum number of entries the response can contain.
    pub items_per_page: Option<i64>,
    /// Always `analytics#unsampledReports`.
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

api_resource!(UnsampledReport, UnsampledReports);

/// Endpoints of `management.unsampledReports`.
#[derive(Debug, Clone)]
pub struct UnsampledReportsService {
    client: Arc<HttpClient>,
}

impl UnsampledReportsService {
    pub(crate) const fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    fn collection(
        &self,
        method: HttpMethod,
        account_id: &str,
        web_property_id: &str,
        profile_id: &str,
    ) -> Call {
        Call::new(&self.client, method, COLLECTION)
            .path_param("accountId", account_id)
            .path_param("webPropertyId", web_property_id)
            .path_param("profileId", profile_id)
    }

    fn item(
        &self,
        method: HttpMethod,
        account_id: &str,
        web_property_id: &str,
        profile_id: &str,
        unsampled_report_id: &str,
    ) -> Call {
        Call::new(&self.client, method, ITEM)
            .path_param("accountId", account_id)
            .path_param("webPropertyId", web_property_id)
            .path_param("profileId", profile_id)
            .path_param("unsampledReportId", unsampled_report_id)
    }

    /// Deletes an unsampled report.
    pub fn delete(
        &self,
        account_id: &str,
        web_property_id: &str,
        profile_id: &str,
        unsampled_report_id: &str,
    ) -> UnsampledReportsDeleteCall {
        UnsampledReportsDeleteCall {
            call: self.item(
                HttpMethod::Delete,
                account_id,
                web_property_id,
                profile_id,
                unsampled_report_id,
            ),
        }
    }

    /// Gets an unsampled report.
    pub fn get(
        &self,
        account_id: &str,
        web_property_id: &str,
        profile_id: &str,
        unsampled_report_id: &str,
    ) -> UnsampledReportsGetCall {
        UnsampledReportsGetCall {
            call: self.item(
                HttpMethod::Get,
                account_id,
                web_property_id,
                profile_id,
                unsampled_report_id,
            ),
        }
    }

    /// Requests a new unsampled report.
    pub fn insert(
        &self,
        account_id: &str,
        web_property_id: &str,
        profile_id: &str,
        report: &UnsampledReport,
    ) -> UnsampledReportsInsertCall {
        UnsampledReportsInsertCall {
            call: self
                .collection(HttpMethod::Post, account_id, web_property_id, profile_id)
                .json_body(report),
        }
    }

    /// Lists unsampled reports of a view.
    pub fn list(
        &self,
        account_id: &str,
        web_property_id: &str,
        profile_id: &str,
    ) -> UnsampledReportsListCall {
        UnsampledReportsListCall {
            call: self.collection(HttpMethod::Get, account_id, web_property_id, profile_id),
        }
    }
}

/// `DELETE .../unsampledReports/{unsampledReportId}`.
#[derive(Debug)]
#[must_use = "call builders do nothing until `send` is awaited"]
pub struct UnsampledReportsDeleteCall {
    call: Call,
}

/// `GET .../unsampledReports/{unsampledReportId}`.
#[derive(Debug)]
#[must_use = "call builders do nothing until `send` is awaited"]
pub struct UnsampledReportsGetCall {
    call: Call,
}

/// `POST .../unsampledReports`.
#[derive(Debug)]
#[must_use = "call builders do nothing until `send` is awaited"]
pub struct UnsampledReportsInsertCall {
    call: Call,
}

/// `GET .../unsampledReports`.
#[derive(Debug)]
#[must_use = "call builders do nothing until `send` is awaited"]
pub struct UnsampledReportsListCall {
    call: Call,
}

api_method!(UnsampledReportsDeleteCall => ());
api_method!(UnsampledReportsGetCall => UnsampledReport, conditional);
api_method!(UnsampledReportsInsertCall => UnsampledReport);
api_method!(UnsampledReportsListCall => UnsampledReports, conditional);
impl Paginated for UnsampledReportsListCall {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_dates_use_hyphenated_wire_names() {
        let report = UnsampledReport {
            title: Some("Q1".to_string()),
            start_date: Some("2024-01-01".to_string()),
            end_date: Some("2024-03-31".to_string()),
            metrics: Some("ga:sessions".to_string()),
            ..Default::default()
        };

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "end-date": "2024-03-31",
                "metrics": "ga:sessions",
                "start-date": "2024-01-01",
                "title": "Q1"
            })
        );
    }

    #[test]
    fn test_drive_download_details() {
        let json = r#"{
            "id": "r1",
            "status": "COMPLETED",
            "downloadType": "GOOGLE_DRIVE",
            "driveDownloadDetails": {"documentId": "doc-9"}
        }"#;

        let report: UnsampledReport = serde_json::from_str(json).unwrap();
        assert_eq!(
            report
                .drive_download_details
                .and_then(|d| d.document_id)
                .as_deref(),
            Some("doc-9")
        );
        assert!(report.cloud_storage_download_details.is_none());
    }
}
