//! Media upload strategies.
//!
//! The bulk data upload endpoint accepts its payload in one of two ways:
//!
//! - [`MediaUpload::Simple`]: a single `multipart/related` request carrying
//!   the JSON metadata part and the media part
//! - [`MediaUpload::Resumable`]: a session is opened with one POST, then the
//!   payload is sent in chunks with `Content-Range` headers until the server
//!   answers with a 2xx
//!
//! A `308 Resume Incomplete` reply carries a `Range: bytes=0-N` header naming
//! how much the server has persisted; the next chunk starts right after it.
//! A `308` that reports no progress past the chunk just sent ends the upload
//! with [`InvalidHttpRequestError::UploadStalled`]. Nothing is retried.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use rand::distributions::Alphanumeric;
use rand::Rng;
use tokio_util::sync::CancellationToken;

use crate::clients::{
    DataType, HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse,
    InvalidHttpRequestError, RequestTarget,
};

/// Callback invoked after every resumable chunk with `(sent, total)` bytes.
///
/// `sent` only grows; the last call reports `(total, total)`.
pub type ProgressUpdater = Arc<dyn Fn(u64, u64) + Send + Sync>;

/// The payload of a media upload and the strategy used to send it.
#[derive(Clone)]
pub enum MediaUpload {
    /// One `multipart/related` request.
    Simple {
        /// The media bytes.
        data: Vec<u8>,
        /// The media MIME type.
        content_type: String,
    },
    /// A chunked, resumable transfer.
    Resumable {
        /// The media bytes.
        data: Vec<u8>,
        /// The media MIME type.
        content_type: String,
        /// Optional progress callback.
        progress: Option<ProgressUpdater>,
    },
}

impl MediaUpload {
    /// Returns the media MIME type.
    #[must_use]
    pub fn content_type(&self) -> &str {
        match self {
            Self::Simple { content_type, .. } | Self::Resumable { content_type, .. } => {
                content_type
            }
        }
    }

    /// Returns the media size in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Simple { data, .. } | Self::Resumable { data, .. } => data.len(),
        }
    }

    /// Returns `true` if the payload is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for MediaUpload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Simple { data, content_type } => f
                .debug_struct("Simple")
                .field("len", &data.len())
                .field("content_type", content_type)
                .finish(),
            Self::Resumable {
                data,
                content_type,
                progress,
            } => f
                .debug_struct("Resumable")
                .field("len", &data.len())
                .field("content_type", content_type)
                .field("progress", &progress.is_some())
                .finish(),
        }
    }
}

/// The parts of a call a media upload is built from.
#[derive(Debug)]
pub(crate) struct UploadTarget {
    pub method: HttpMethod,
    pub path: String,
    pub query: BTreeMap<String, String>,
    pub metadata: Option<Vec<u8>>,
}

/// Generates a random `multipart/related` boundary.
fn random_boundary() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(32)
        .map(char::from)
        .collect()
}

/// Builds a `multipart/related` body: the JSON metadata part, then the media.
pub(crate) fn multipart_related(
    boundary: &str,
    metadata: &[u8],
    content_type: &str,
    data: &[u8],
) -> Vec<u8> {
    let mut body = Vec::with_capacity(metadata.len() + data.len() + 256);
    body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
    body.extend_from_slice(b"Content-Type: application/json\r\n\r\n");
    body.extend_from_slice(metadata);
    body.extend_from_slice(format!("\r\n--{boundary}\r\n").as_bytes());
    body.extend_from_slice(format!("Content-Type: {content_type}\r\n\r\n").as_bytes());
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());
    body
}

/// Sends the payload in one `uploadType=multipart` request.
pub(crate) async fn upload_simple(
    client: &HttpClient,
    target: UploadTarget,
    data: &[u8],
    content_type: &str,
    cancellation: Option<&CancellationToken>,
) -> Result<HttpResponse, HttpError> {
    let boundary = random_boundary();
    let body = multipart_related(
        &boundary,
        target.metadata.as_deref().unwrap_or_default(),
        content_type,
        data,
    );

    let request = HttpRequest::builder(target.method, target.path)
        .target(RequestTarget::Upload)
        .query(target.query)
        .query_param("uploadType", "multipart")
        .body(body)
        .body_type(DataType::MultipartRelated { boundary })
        .build()?;

    client.request(request, cancellation).await
}

/// Opens a resumable session, then sends the payload chunk by chunk.
pub(crate) async fn upload_resumable(
    client: &HttpClient,
    target: UploadTarget,
    data: &[u8],
    content_type: &str,
    progress: Option<&ProgressUpdater>,
    cancellation: Option<&CancellationToken>,
) -> Result<HttpResponse, HttpError> {
    let total = data.len() as u64;

    let mut start = HttpRequest::builder(target.method, target.path)
        .target(RequestTarget::Upload)
        .query(target.query)
        .query_param("uploadType", "resumable")
        .header("X-Upload-Content-Type", content_type)
        .header("X-Upload-Content-Length", total.to_string());
    if let Some(metadata) = target.metadata {
        start = start.body(metadata).body_type(DataType::Json);
    }

    let session = client.request(start.build()?, cancellation).await?;
    let location = session
        .location()
        .ok_or(InvalidHttpRequestError::MissingUploadLocation)?
        .to_string();

    let chunk_size = client.chunk_size() as u64;
    let mut offset: u64 = 0;
    let mut reported_total = false;
    loop {
        let end = total.min(offset + chunk_size);
        // Once every byte is persisted only the final status is queried.
        let content_range = if offset >= total {
            format!("bytes */{total}")
        } else {
            format!("bytes {offset}-{}/{total}", end - 1)
        };

        tracing::debug!(
            session = %location,
            range = %content_range,
            "uploading resumable chunk"
        );

        #[allow(clippy::cast_possible_truncation)]
        let chunk = data[offset as usize..end as usize].to_vec();
        let request = HttpRequest::builder(HttpMethod::Put, location.as_str())
            .target(RequestTarget::Absolute)
            .body(chunk)
            .body_type(DataType::Media {
                mime_type: content_type.to_string(),
            })
            .header("Content-Range", content_range)
            .build()?;

        let response = client.send(request, cancellation).await?;

        if response.code == 308 {
            let persisted = response.persisted_bytes().unwrap_or(0).min(total);
            if persisted <= offset {
                return Err(InvalidHttpRequestError::UploadStalled { offset }.into());
            }
            offset = persisted;
            reported_total = offset == total;
            if let Some(progress) = progress {
                progress(offset, total);
            }
            continue;
        }

        let response = HttpClient::check_response(response)?;
        if let (Some(progress), false) = (progress, reported_total) {
            progress(total, total);
        }
        return Ok(response);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_boundary_is_alphanumeric() {
        let a = random_boundary();
        let b = random_boundary();

        assert_eq!(a.len(), 32);
        assert!(a.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_ne!(a, b);
    }

    #[test]
    fn test_multipart_related_layout() {
        let body = multipart_related("XyZ", b"{}", "text/csv", b"ga:date,ga:sessions\n");
        let text = String::from_utf8(body).unwrap();

        assert_eq!(
            text,
            "--XyZ\r\nContent-Type: application/json\r\n\r\n{}\r\n\
             --XyZ\r\nContent-Type: text/csv\r\n\r\nga:date,ga:sessions\n\r\n--XyZ--\r\n"
        );
    }

    #[test]
    fn test_media_upload_accessors() {
        let simple = MediaUpload::Simple {
            data: b"abc".to_vec(),
            content_type: "text/csv".to_string(),
        };
        assert_eq!(simple.len(), 3);
        assert_eq!(simple.content_type(), "text/csv");
        assert!(!simple.is_empty());

        let resumable = MediaUpload::Resumable {
            data: Vec::new(),
            content_type: "application/octet-stream".to_string(),
            progress: None,
        };
        assert!(resumable.is_empty());
    }

    #[test]
    fn test_media_upload_debug_hides_payload() {
        let upload = MediaUpload::Resumable {
            data: vec![0; 1024],
            content_type: "text/csv".to_string(),
            progress: Some(Arc::new(|_, _| {})),
        };
        let debug = format!("{upload:?}");

        assert!(debug.contains("Resumable"));
        assert!(debug.contains("1024"));
        assert!(debug.contains("progress: true"));
    }
}
