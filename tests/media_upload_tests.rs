//! Integration tests for simple and resumable media uploads.

use std::sync::{Arc, Mutex};

use analytics_api::rest::ApiMethod;
use analytics_api::{Analytics, AnalyticsConfig, BaseUrl, HttpError, InvalidHttpRequestError};
use serde_json::json;
use tokio_test::{assert_err, assert_ok};
use wiremock::matchers::{body_bytes, header, header_regex, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const UPLOADS_PATH: &str =
    "/upload/analytics/v3/management/accounts/1/webproperties/UA-1-1/customDataSources/src-9/uploads";

/// Creates a service against the stub server using the smallest chunk size.
fn analytics_for(server: &MockServer) -> Analytics {
    let config = AnalyticsConfig::builder()
        .base_url(BaseUrl::new(format!("{}/analytics/v3/", server.uri())).unwrap())
        .upload_base_url(BaseUrl::new(format!("{}/upload/analytics/v3/", server.uri())).unwrap())
        .chunk_size(256 * 1024)
        .build()
        .unwrap();
    Analytics::from_config(&config).unwrap()
}

fn upload_json() -> serde_json::Value {
    json!({
        "kind": "analytics#upload",
        "id": "upload-1",
        "accountId": "1",
        "customDataSourceId": "src-9",
        "status": "PENDING"
    })
}

#[tokio::test]
async fn test_simple_upload_sends_multipart_related() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(UPLOADS_PATH))
        .and(query_param("uploadType", "multipart"))
        .and(query_param("alt", "json"))
        .and(header_regex("content-type", "^multipart/related; boundary=[A-Za-z0-9]{32}$"))
        .respond_with(ResponseTemplate::new(200).set_body_json(upload_json()))
        .expect(1)
        .mount(&server)
        .await;

    let analytics = analytics_for(&server);
    let upload = assert_ok!(
        analytics
            .management()
            .uploads()
            .upload_data("1", "UA-1-1", "src-9")
            .media(b"ga:date,ga:sessions\n20240101,7\n".to_vec(), "application/octet-stream")
            .send()
            .await
    );

    assert_eq!(upload.id.as_deref(), Some("upload-1"));
    assert_eq!(upload.status.as_deref(), Some("PENDING"));

    let requests = server.received_requests().await.unwrap();
    let body = String::from_utf8_lossy(&requests[0].body);
    assert!(body.contains("Content-Type: application/octet-stream\r\n\r\nga:date,ga:sessions"));
}

#[tokio::test]
async fn test_resumable_upload_resumes_from_persisted_range() {
    let server = MockServer::start().await;
    let session_url = format!("{}/upload/session/1", server.uri());
    let total: usize = 300 * 1024;
    let data: Vec<u8> = (0..total).map(|i| (i % 251) as u8).collect();

    Mock::given(method("POST"))
        .and(path(UPLOADS_PATH))
        .and(query_param("uploadType", "resumable"))
        .and(header("X-Upload-Content-Type", "text/csv"))
        .and(header("X-Upload-Content-Length", "307200"))
        .respond_with(ResponseTemplate::new(200).insert_header("Location", session_url.as_str()))
        .expect(1)
        .mount(&server)
        .await;

    // First chunk: the server persisted all of it.
    Mock::given(method("PUT"))
        .and(path("/upload/session/1"))
        .and(header("Content-Range", "bytes 0-262143/307200"))
        .and(body_bytes(data[..262_144].to_vec()))
        .respond_with(ResponseTemplate::new(308).insert_header("Range", "bytes=0-262143"))
        .expect(1)
        .mount(&server)
        .await;

    // Final chunk completes the upload.
    Mock::given(method("PUT"))
        .and(path("/upload/session/1"))
        .and(header("Content-Range", "bytes 262144-307199/307200"))
        .and(header("Content-Type", "text/csv"))
        .respond_with(ResponseTemplate::new(200).set_body_json(upload_json()))
        .expect(1)
        .mount(&server)
        .await;

    let seen = Arc::new(Mutex::new(Vec::new()));
    let recorder = Arc::clone(&seen);

    let analytics = analytics_for(&server);
    let upload = assert_ok!(
        analytics
            .management()
            .uploads()
            .upload_data("1", "UA-1-1", "src-9")
            .resumable_media(data, "text/csv")
            .progress_updater(move |sent, total| recorder.lock().unwrap().push((sent, total)))
            .send()
            .await
    );

    assert_eq!(upload.id.as_deref(), Some("upload-1"));
    assert_eq!(upload.server_response.http_status_code, 200);
    assert_eq!(
        *seen.lock().unwrap(),
        vec![(262_144, 307_200), (307_200, 307_200)]
    );
}

#[tokio::test]
async fn test_resumable_upload_stops_when_server_persists_nothing() {
    let server = MockServer::start().await;
    let session_url = format!("{}/upload/session/2", server.uri());

    Mock::given(method("POST"))
        .and(path(UPLOADS_PATH))
        .respond_with(ResponseTemplate::new(200).insert_header("Location", session_url.as_str()))
        .mount(&server)
        .await;

    // Every chunk is answered with a bare 308.
    Mock::given(method("PUT"))
        .and(path("/upload/session/2"))
        .respond_with(ResponseTemplate::new(308))
        .expect(1)
        .mount(&server)
        .await;

    let progress_calls = Arc::new(Mutex::new(0_u32));
    let counter = Arc::clone(&progress_calls);

    let analytics = analytics_for(&server);
    let error = assert_err!(
        analytics
            .management()
            .uploads()
            .upload_data("1", "UA-1-1", "src-9")
            .resumable_media(b"0123456789".to_vec(), "text/csv")
            .progress_updater(move |_, _| *counter.lock().unwrap() += 1)
            .send()
            .await
    );

    assert!(matches!(
        error,
        HttpError::InvalidRequest(InvalidHttpRequestError::UploadStalled { offset: 0 })
    ));
    assert_eq!(*progress_calls.lock().unwrap(), 0);
}

#[tokio::test]
async fn test_resumable_upload_stops_when_persisted_range_goes_backwards() {
    let server = MockServer::start().await;
    let session_url = format!("{}/upload/session/4", server.uri());
    let data = vec![7_u8; 300 * 1024];

    Mock::given(method("POST"))
        .and(path(UPLOADS_PATH))
        .respond_with(ResponseTemplate::new(200).insert_header("Location", session_url.as_str()))
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/upload/session/4"))
        .and(header("Content-Range", "bytes 0-262143/307200"))
        .respond_with(ResponseTemplate::new(308).insert_header("Range", "bytes=0-262143"))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/upload/session/4"))
        .and(header("Content-Range", "bytes 262144-307199/307200"))
        .respond_with(ResponseTemplate::new(308).insert_header("Range", "bytes=0-99"))
        .expect(1)
        .mount(&server)
        .await;

    let seen = Arc::new(Mutex::new(Vec::new()));
    let recorder = Arc::clone(&seen);

    let analytics = analytics_for(&server);
    let error = assert_err!(
        analytics
            .management()
            .uploads()
            .upload_data("1", "UA-1-1", "src-9")
            .resumable_media(data, "text/csv")
            .progress_updater(move |sent, total| recorder.lock().unwrap().push((sent, total)))
            .send()
            .await
    );

    assert!(matches!(
        error,
        HttpError::InvalidRequest(InvalidHttpRequestError::UploadStalled { offset: 262_144 })
    ));
    assert_eq!(*seen.lock().unwrap(), vec![(262_144, 307_200)]);
}

#[tokio::test]
async fn test_resumable_upload_queries_status_once_fully_persisted() {
    let server = MockServer::start().await;
    let session_url = format!("{}/upload/session/5", server.uri());

    Mock::given(method("POST"))
        .and(path(UPLOADS_PATH))
        .respond_with(ResponseTemplate::new(200).insert_header("Location", session_url.as_str()))
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/upload/session/5"))
        .and(header("Content-Range", "bytes 0-9/10"))
        .respond_with(ResponseTemplate::new(308).insert_header("Range", "bytes=0-9"))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/upload/session/5"))
        .and(header("Content-Range", "bytes */10"))
        .and(body_bytes(Vec::new()))
        .respond_with(ResponseTemplate::new(201).set_body_json(upload_json()))
        .expect(1)
        .mount(&server)
        .await;

    let seen = Arc::new(Mutex::new(Vec::new()));
    let recorder = Arc::clone(&seen);

    let analytics = analytics_for(&server);
    let upload = assert_ok!(
        analytics
            .management()
            .uploads()
            .upload_data("1", "UA-1-1", "src-9")
            .resumable_media(b"0123456789".to_vec(), "text/csv")
            .progress_updater(move |sent, total| recorder.lock().unwrap().push((sent, total)))
            .send()
            .await
    );

    assert_eq!(upload.server_response.http_status_code, 201);
    assert_eq!(*seen.lock().unwrap(), vec![(10, 10)]);
}

#[tokio::test]
async fn test_resumable_upload_without_session_location_fails() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(UPLOADS_PATH))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let analytics = analytics_for(&server);
    let error = assert_err!(
        analytics
            .management()
            .uploads()
            .upload_data("1", "UA-1-1", "src-9")
            .resumable_media(b"abc".to_vec(), "text/csv")
            .send()
            .await
    );

    assert!(matches!(
        error,
        HttpError::InvalidRequest(InvalidHttpRequestError::MissingUploadLocation)
    ));
}

#[tokio::test]
async fn test_resumable_chunk_failure_is_reported() {
    let server = MockServer::start().await;
    let session_url = format!("{}/upload/session/3", server.uri());

    Mock::given(method("POST"))
        .and(path(UPLOADS_PATH))
        .respond_with(ResponseTemplate::new(200).insert_header("Location", session_url.as_str()))
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/upload/session/3"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": {"code": 400, "message": "Invalid upload"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let progress_calls = Arc::new(Mutex::new(0_u32));
    let counter = Arc::clone(&progress_calls);

    let analytics = analytics_for(&server);
    let error = assert_err!(
        analytics
            .management()
            .uploads()
            .upload_data("1", "UA-1-1", "src-9")
            .resumable_media(b"abc".to_vec(), "text/csv")
            .progress_updater(move |_, _| *counter.lock().unwrap() += 1)
            .send()
            .await
    );

    assert_eq!(error.status_code(), Some(400));
    assert_eq!(*progress_calls.lock().unwrap(), 0);
}
