//! Integration tests for the management endpoints.
//!
//! These tests run call builders against a wiremock stub server and verify
//! URL assembly, request bodies, reply decoding and status mapping.

use analytics_api::rest::resources::v3::{
    CustomDimension, Filter, FilterExpression, Paginated, Webproperty,
};
use analytics_api::rest::{ApiMethod, ConditionalFetch};
use analytics_api::{Analytics, AnalyticsConfig, BaseUrl, HttpError};
use serde_json::json;
use tokio_test::{assert_err, assert_ok};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

/// Creates a service whose API and upload bases point at the stub server.
fn analytics_for(server: &MockServer) -> Analytics {
    let config = AnalyticsConfig::builder()
        .base_url(BaseUrl::new(format!("{}/analytics/v3/", server.uri())).unwrap())
        .upload_base_url(BaseUrl::new(format!("{}/upload/analytics/v3/", server.uri())).unwrap())
        .build()
        .unwrap();
    Analytics::from_config(&config).unwrap()
}

/// Replies with the request body plus an `id` field.
struct EchoWithId(&'static str);

impl Respond for EchoWithId {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let mut body: serde_json::Value = serde_json::from_slice(&request.body).unwrap();
        body["id"] = json!(self.0);
        ResponseTemplate::new(200).set_body_json(body)
    }
}

// ============================================================================
// Listing
// ============================================================================

#[tokio::test]
async fn test_list_accounts_decodes_items_and_pagination_link() {
    let server = MockServer::start().await;
    let next_link =
        "https://www.googleapis.com/analytics/v3/management/accounts?start-index=3&max-results=2";

    Mock::given(method("GET"))
        .and(path("/analytics/v3/management/accounts"))
        .and(query_param("alt", "json"))
        .and(query_param("max-results", "2"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("ETag", "\"accounts-v1\"")
                .set_body_json(json!({
                    "kind": "analytics#accounts",
                    "username": "someone@example.com",
                    "itemsPerPage": 2,
                    "startIndex": 1,
                    "totalResults": 5,
                    "nextLink": next_link,
                    "items": [
                        {"id": "1", "kind": "analytics#account", "name": "Acme"},
                        {"id": "2", "kind": "analytics#account", "name": "Globex", "starred": true}
                    ]
                })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let analytics = analytics_for(&server);
    let accounts = assert_ok!(
        analytics
            .management()
            .accounts()
            .list()
            .max_results(2)
            .send()
            .await
    );

    assert_eq!(accounts.items.len(), 2);
    assert_eq!(accounts.items[0].name.as_deref(), Some("Acme"));
    assert_eq!(accounts.items[1].starred, Some(true));
    assert_eq!(accounts.next_link.as_deref(), Some(next_link));
    assert_eq!(accounts.total_results, Some(5));
    assert_eq!(accounts.server_response.http_status_code, 200);
    assert_eq!(
        accounts.server_response.header("etag"),
        Some("\"accounts-v1\"")
    );
}

#[tokio::test]
async fn test_common_setters_emit_query_parameters() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/analytics/v3/management/accounts/1/webproperties"))
        .and(query_param("alt", "json"))
        .and(query_param("fields", "items(id,name)"))
        .and(query_param("quotaUser", "dashboard-7"))
        .and(query_param("userIp", "203.0.113.9"))
        .and(query_param("start-index", "11"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
        .expect(1)
        .mount(&server)
        .await;

    let analytics = analytics_for(&server);
    let properties = assert_ok!(
        analytics
            .management()
            .webproperties()
            .list("1")
            .fields("items(id,name)")
            .quota_user("dashboard-7")
            .user_ip("203.0.113.9")
            .start_index(11)
            .send()
            .await
    );

    assert!(properties.items.is_empty());
}

#[tokio::test]
async fn test_url_with_required_parameters_only() {
    let server = MockServer::start().await;
    let analytics = analytics_for(&server);

    let url = analytics.management().profiles().get("1", "UA-1-1", "10").url();

    assert_eq!(
        url,
        format!(
            "{}/analytics/v3/management/accounts/1/webproperties/UA-1-1/profiles/10?alt=json",
            server.uri()
        )
    );
}

// ============================================================================
// Conditional fetch
// ============================================================================

#[tokio::test]
async fn test_if_none_match_header_is_sent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/analytics/v3/management/accounts/1/webproperties/UA-1-1"))
        .and(header("If-None-Match", "\"v7\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "UA-1-1"})))
        .expect(1)
        .mount(&server)
        .await;

    let analytics = analytics_for(&server);
    let property = assert_ok!(
        analytics
            .management()
            .webproperties()
            .get("1", "UA-1-1")
            .if_none_match("\"v7\"")
            .send()
            .await
    );

    assert_eq!(property.id.as_deref(), Some("UA-1-1"));
}

#[tokio::test]
async fn test_not_modified_is_a_distinct_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/analytics/v3/management/segments"))
        .respond_with(ResponseTemplate::new(304).insert_header("ETag", "\"v7\""))
        .mount(&server)
        .await;

    let analytics = analytics_for(&server);
    let error = assert_err!(
        analytics
            .management()
            .segments()
            .list()
            .if_none_match("\"v7\"")
            .send()
            .await
    );

    assert!(error.is_not_modified());
    assert_eq!(error.status_code(), Some(304));
    match error {
        HttpError::NotModified(not_modified) => {
            assert_eq!(not_modified.code, 304);
            assert_eq!(
                not_modified.headers.get("etag").map(Vec::as_slice),
                Some(&["\"v7\"".to_string()][..])
            );
        }
        other => panic!("expected NotModified, got {other:?}"),
    }
}

// ============================================================================
// Error statuses
// ============================================================================

#[tokio::test]
async fn test_non_success_status_carries_exact_code_and_envelope() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/analytics/v3/management/accounts/9/filters"))
        .respond_with(
            ResponseTemplate::new(403)
                .insert_header("X-Request-Id", "req-1")
                .set_body_json(json!({
                    "error": {
                        "code": 403,
                        "message": "User does not have sufficient permissions for this account.",
                        "errors": [{
                            "domain": "global",
                            "reason": "insufficientPermissions",
                            "message": "User does not have sufficient permissions for this account."
                        }]
                    }
                })),
        )
        .mount(&server)
        .await;

    let analytics = analytics_for(&server);
    let error = assert_err!(analytics.management().filters().list("9").send().await);

    assert!(!error.is_not_modified());
    match error {
        HttpError::Response(response) => {
            assert_eq!(response.code, 403);
            assert_eq!(
                response.message,
                "User does not have sufficient permissions for this account."
            );
            assert_eq!(response.errors.len(), 1);
            assert_eq!(response.errors[0].reason, "insufficientPermissions");
            assert!(response.headers.contains_key("x-request-id"));
        }
        other => panic!("expected Response, got {other:?}"),
    }
}

#[tokio::test]
async fn test_non_json_error_body_becomes_message() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path(
            "/analytics/v3/management/accounts/1/webproperties/UA-1-1/profiles/10",
        ))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let analytics = analytics_for(&server);
    let error = assert_err!(
        analytics
            .management()
            .profiles()
            .delete("1", "UA-1-1", "10")
            .send()
            .await
    );

    assert_eq!(error.status_code(), Some(502));
    assert_eq!(error.to_string(), "googleapi: Error 502: Bad Gateway");
}

#[tokio::test]
async fn test_malformed_success_body_is_a_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/analytics/v3/management/accountSummaries"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not json"))
        .mount(&server)
        .await;

    let analytics = analytics_for(&server);
    let error = assert_err!(analytics.management().account_summaries().list().send().await);

    assert!(matches!(error, HttpError::Decode(_)));
}

// ============================================================================
// Writes
// ============================================================================

#[tokio::test]
async fn test_insert_filter_returns_server_echo() {
    let server = MockServer::start().await;

    let filter = Filter {
        name: Some("Exclude office traffic".to_string()),
        filter_type: Some("EXCLUDE".to_string()),
        exclude_details: Some(FilterExpression {
            field: Some("GEO_IP_ADDRESS".to_string()),
            match_type: Some("EQUAL".to_string()),
            expression_value: Some("198.51.100.7".to_string()),
            case_sensitive: Some(false),
            ..Default::default()
        }),
        ..Default::default()
    };

    Mock::given(method("POST"))
        .and(path("/analytics/v3/management/accounts/123/filters"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({
            "name": "Exclude office traffic",
            "type": "EXCLUDE",
            "excludeDetails": {
                "field": "GEO_IP_ADDRESS",
                "matchType": "EQUAL",
                "expressionValue": "198.51.100.7",
                "caseSensitive": false
            }
        })))
        .respond_with(EchoWithId("filter-42"))
        .expect(1)
        .mount(&server)
        .await;

    let analytics = analytics_for(&server);
    let created = assert_ok!(
        analytics
            .management()
            .filters()
            .insert("123", &filter)
            .send()
            .await
    );

    assert_eq!(created.id.as_deref(), Some("filter-42"));
    assert_eq!(created.name, filter.name);
    assert_eq!(created.exclude_details, filter.exclude_details);
    assert_eq!(created.server_response.http_status_code, 200);
}

#[tokio::test]
async fn test_delete_filter_returns_deleted_filter() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/analytics/v3/management/accounts/123/filters/77"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": "77", "name": "Old filter"})),
        )
        .mount(&server)
        .await;

    let analytics = analytics_for(&server);
    let deleted = assert_ok!(
        analytics
            .management()
            .filters()
            .delete("123", "77")
            .send()
            .await
    );

    assert_eq!(deleted.name.as_deref(), Some("Old filter"));
}

#[tokio::test]
async fn test_delete_returns_unit_and_ignores_body() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/analytics/v3/management/accounts/1/entityUserLinks/1%3Aabc"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let analytics = analytics_for(&server);
    assert_ok!(
        analytics
            .management()
            .account_user_links()
            .delete("1", "1:abc")
            .send()
            .await
    );
}

#[tokio::test]
async fn test_patch_force_includes_zero_values() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/analytics/v3/management/accounts/1/webproperties/UA-1-1"))
        .and(body_json(json!({"starred": false, "profileCount": 0, "name": ""})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "UA-1-1",
            "starred": false,
            "profileCount": 0,
            "name": ""
        })))
        .expect(1)
        .mount(&server)
        .await;

    let patch = Webproperty {
        starred: Some(false),
        profile_count: Some(0),
        name: Some(String::new()),
        ..Default::default()
    };

    let analytics = analytics_for(&server);
    let updated = assert_ok!(
        analytics
            .management()
            .webproperties()
            .patch("1", "UA-1-1", &patch)
            .send()
            .await
    );

    assert_eq!(updated.starred, Some(false));
    assert_eq!(updated.profile_count, Some(0));
}

#[tokio::test]
async fn test_int64_fields_round_trip_as_strings() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/analytics/v3/management/accounts/1/webproperties/UA-1-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "UA-1-1",
            "defaultProfileId": "9007199254740993"
        })))
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/analytics/v3/management/accounts/1/webproperties/UA-1-1"))
        .and(body_json(json!({
            "id": "UA-1-1",
            "defaultProfileId": "9007199254740993"
        })))
        .respond_with(EchoWithId("UA-1-1"))
        .expect(1)
        .mount(&server)
        .await;

    let analytics = analytics_for(&server);
    let properties = analytics.management().webproperties();

    let fetched = assert_ok!(properties.get("1", "UA-1-1").send().await);
    assert_eq!(fetched.default_profile_id, Some(9_007_199_254_740_993));

    let updated = assert_ok!(properties.update("1", "UA-1-1", &fetched).send().await);
    assert_eq!(updated.default_profile_id, Some(9_007_199_254_740_993));
}

#[tokio::test]
async fn test_custom_dimension_update_flag() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path(
            "/analytics/v3/management/accounts/1/webproperties/UA-1-1/customDimensions/ga%3Adimension2",
        ))
        .and(query_param("ignoreCustomDataSourceLinks", "true"))
        .respond_with(EchoWithId("ga:dimension2"))
        .expect(1)
        .mount(&server)
        .await;

    let dimension = CustomDimension {
        name: Some("Plan".to_string()),
        scope: Some("USER".to_string()),
        active: Some(true),
        ..Default::default()
    };

    let analytics = analytics_for(&server);
    let updated = assert_ok!(
        analytics
            .management()
            .custom_dimensions()
            .update("1", "UA-1-1", "ga:dimension2", &dimension)
            .ignore_custom_data_source_links(true)
            .send()
            .await
    );

    assert_eq!(updated.scope.as_deref(), Some("USER"));
}
