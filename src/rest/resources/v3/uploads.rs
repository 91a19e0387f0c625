//! Data import uploads of a custom data source.
//!
//! # Example
//!
//! ```rust,ignore
//! use analytics_api::rest::ApiMethod;
//!
//! let csv = std::fs::read("refunds.csv")?;
//! let upload = analytics
//!     .management()
//!     .uploads()
//!     .upload_data("123", "UA-123-1", "ds-1")
//!     .resumable_media(csv, "application/octet-stream")
//!     .progress_updater(|sent, total| println!("{sent}/{total}"))
//!     .send()
//!     .await?;
//! println!("upload {:?} is {:?}", upload.id, upload.status);
//! ```

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::clients::{HttpClient, HttpMethod};
use crate::rest::resources::v3::common::Paginated;
use crate::rest::{api_method, api_resource, Call, MediaUpload, ServerResponse};

const UPLOADS: &str = "management/accounts/{accountId}/webproperties/{webPropertyId}/customDataSources/{customDataSourceId}/uploads";
const UPLOAD: &str = "management/accounts/{accountId}/webproperties/{webPropertyId}/customDataSources/{customDataSourceId}/uploads/{uploadId}";
const DELETE_UPLOAD_DATA: &str = "management/accounts/{accountId}/webproperties/{webPropertyId}/customDataSources/{customDataSourceId}/deleteUploadData";

/// Request body of `deleteUploadData`.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsDataimportDeleteUploadDataRequest {
    /// IDs of the uploads to delete.
    pub custom_data_import_uids: Option<Vec<String>>,
}

/// Metadata of an uploaded file.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Upload {
    /// Account ID to which this upload belongs.
    pub account_id: Option<String>,
    /// Custom data source ID to which this upload belongs.
    pub custom_data_source_id: Option<String>,
    /// Data import errors.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
    /// Upload ID.
    pub id: Option<String>,
    /// Always `analytics#upload`.
    pub kind: Option<String>,
    /// `PENDING`, `COMPLETED`, `FAILED`, `DELETING` or `DELETED`.
    pub status: Option<String>,
    /// Time the file was uploaded.
    pub upload_time: Option<String>,
    /// Reply metadata.
    #[serde(skip)]
    pub server_response: ServerResponse,
}

/// A collection of uploads.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Uploads {
    /// The uploads on this page.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<Upload>,
    /// Maximum number of entries the response can contain.
    pub items_per_page: Option<i64>,
    /// Always `analytics#uploads`.
    pub kind: Option<String>,
    /// Link to the next page.
    pub next_link: Option<String>,
    /// Link to the previous page.
    pub previous_link: Option<String>,
    /// 1-based index of the first entry.
    pub start_index: Option<i64>,
    /// Total number of results across all pages.
    pub total_results: Option<i64>,
    /// Reply metadata.
    #[serde(skip)]
    pub server_response: ServerResponse,
}

api_resource!(Upload, Uploads);

/// Endpoints of `management.uploads`.
#[derive(Debug, Clone)]
pub struct UploadsService {
    client: Arc<HttpClient>,
}

impl UploadsService {
    pub(crate) const fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    fn source_call(
        &self,
        method: HttpMethod,
        template: &'static str,
        account_id: &str,
        web_property_id: &str,
        custom_data_source_id: &str,
    ) -> Call {
        Call::new(&self.client, method, template)
            .path_param("accountId", account_id)
            .path_param("webPropertyId", web_property_id)
            .path_param("customDataSourceId", custom_data_source_id)
    }

    /// Deletes data uploaded to a custom data source.
    pub fn delete_upload_data(
        &self,
        account_id: &str,
        web_property_id: &str,
        custom_data_source_id: &str,
        request: &AnalyticsDataimportDeleteUploadDataRequest,
    ) -> UploadsDeleteUploadDataCall {
        UploadsDeleteUploadDataCall {
            call: self
                .source_call(
                    HttpMethod::Post,
                    DELETE_UPLOAD_DATA,
                    account_id,
                    web_property_id,
                    custom_data_source_id,
                )
                .json_body(request),
        }
    }

    /// Gets the metadata of an upload.
    pub fn get(
        &self,
        account_id: &str,
        web_property_id: &str,
        custom_data_source_id: &str,
        upload_id: &str,
    ) -> UploadsGetCall {
        UploadsGetCall {
            call: self
                .source_call(
                    HttpMethod::Get,
                    UPLOAD,
                    account_id,
                    web_property_id,
                    custom_data_source_id,
                )
                .path_param("uploadId", upload_id),
        }
    }

    /// Lists the uploads of a custom data source.
    pub fn list(
        &self,
        account_id: &str,
        web_property_id: &str,
        custom_data_source_id: &str,
    ) -> UploadsListCall {
        UploadsListCall {
            call: self.source_call(
                HttpMethod::Get,
                UPLOADS,
                account_id,
                web_property_id,
                custom_data_source_id,
            ),
        }
    }

    /// Uploads data for a custom data source. Attach the payload with
    /// [`UploadsUploadDataCall::media`] or
    /// [`UploadsUploadDataCall::resumable_media`].
    pub fn upload_data(
        &self,
        account_id: &str,
        web_property_id: &str,
        custom_data_source_id: &str,
    ) -> UploadsUploadDataCall {
        UploadsUploadDataCall {
            call: self.source_call(
                HttpMethod::Post,
                UPLOADS,
                account_id,
                web_property_id,
                custom_data_source_id,
            ),
        }
    }
}

/// `POST .../customDataSources/{customDataSourceId}/deleteUploadData`.
#[derive(Debug)]
#[must_use = "call builders do nothing until `send` is awaited"]
pub struct UploadsDeleteUploadDataCall {
    call: Call,
}

/// `GET .../customDataSources/{customDataSourceId}/uploads/{uploadId}`.
#[derive(Debug)]
#[must_use = "call builders do nothing until `send` is awaited"]
pub struct UploadsGetCall {
    call: Call,
}

/// `GET .../customDataSources/{customDataSourceId}/uploads`.
#[derive(Debug)]
#[must_use = "call builders do nothing until `send` is awaited"]
pub struct UploadsListCall {
    call: Call,
}

/// `POST .../customDataSources/{customDataSourceId}/uploads` on the upload
/// endpoint.
#[derive(Debug)]
#[must_use = "call builders do nothing until `send` is awaited"]
pub struct UploadsUploadDataCall {
    call: Call,
}

impl UploadsUploadDataCall {
    /// Sends `data` in a single `multipart/related` request.
    ///
    /// Replaces any earlier [`resumable_media`](Self::resumable_media).
    pub fn media(mut self, data: impl Into<Vec<u8>>, content_type: impl Into<String>) -> Self {
        self.call.set_media(MediaUpload::Simple {
            data: data.into(),
            content_type: content_type.into(),
        });
        self
    }

    /// Sends `data` in chunks over a resumable session.
    ///
    /// Replaces any earlier [`media`](Self::media).
    pub fn resumable_media(
        mut self,
        data: impl Into<Vec<u8>>,
        content_type: impl Into<String>,
    ) -> Self {
        self.call.set_media(MediaUpload::Resumable {
            data: data.into(),
            content_type: content_type.into(),
            progress: None,
        });
        self
    }

    /// Called with `(sent, total)` after every chunk of a resumable upload.
    ///
    /// Must follow [`resumable_media`](Self::resumable_media).
    pub fn progress_updater(mut self, updater: impl Fn(u64, u64) + Send + Sync + 'static) -> Self {
        self.call.set_progress(Arc::new(updater));
        self
    }
}

api_method!(UploadsDeleteUploadDataCall => ());
api_method!(UploadsGetCall => Upload, conditional);
api_method!(UploadsListCall => Uploads, conditional);
api_method!(UploadsUploadDataCall => Upload);
impl Paginated for UploadsListCall {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AnalyticsConfig;
    use crate::rest::ApiMethod;

    fn service() -> UploadsService {
        let client = HttpClient::from_config(&AnalyticsConfig::default()).unwrap();
        UploadsService::new(Arc::new(client))
    }

    #[test]
    fn test_media_selection_last_call_wins() {
        let call = service()
            .upload_data("1", "UA-1-1", "ds")
            .resumable_media(vec![1, 2, 3], "text/csv")
            .media(vec![4, 5], "application/octet-stream");

        match call.call().media() {
            Some(MediaUpload::Simple { data, content_type }) => {
                assert_eq!(data, &vec![4, 5]);
                assert_eq!(content_type, "application/octet-stream");
            }
            other => panic!("expected simple upload, got {other:?}"),
        }
    }

    #[test]
    fn test_progress_updater_attaches_to_resumable_upload() {
        let call = service()
            .upload_data("1", "UA-1-1", "ds")
            .resumable_media(b"a,b\n".to_vec(), "text/csv")
            .progress_updater(|_, _| {});

        assert!(matches!(
            call.call().media(),
            Some(MediaUpload::Resumable {
                progress: Some(_),
                ..
            })
        ));
    }

    #[test]
    fn test_delete_upload_data_body() {
        let request = AnalyticsDataimportDeleteUploadDataRequest {
            custom_data_import_uids: Some(vec!["u1".to_string(), "u2".to_string()]),
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json, serde_json::json!({"customDataImportUids": ["u1", "u2"]}));

        let call = service().delete_upload_data("1", "UA-1-1", "ds", &request);
        assert_eq!(call.call().method(), HttpMethod::Post);
        assert!(call.call().path().ends_with("/customDataSources/ds/deleteUploadData"));
    }
}
