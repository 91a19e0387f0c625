//! Web property resource and the `management.webproperties` endpoints.
//!
//! # Example
//!
//! ```rust,ignore
//! use analytics_api::rest::ApiMethod;
//! use analytics_api::rest::resources::v3::Webproperty;
//!
//! // Partial update: only the fields that are `Some` are sent.
//! let patch = Webproperty {
//!     starred: Some(false),
//!     ..Default::default()
//! };
//! let updated = analytics
//!     .management()
//!     .webproperties()
//!     .patch("123", "UA-123-1", &patch)
//!     .send()
//!     .await?;
//! ```

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{HttpClient, HttpMethod};
use crate::rest::resources::v3::common::{ChildLink, Paginated, ParentLink, Permissions};
use crate::rest::{api_method, api_resource, Call, Int64, ServerResponse};

const COLLECTION: &str = "management/accounts/{accountId}/webproperties";
const ITEM: &str = "management/accounts/{accountId}/webproperties/{webPropertyId}";

/// A web property.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Webproperty {
    /// Account ID to which this web property belongs.
    pub account_id: Option<String>,
    /// Link to the views of this web property.
    pub child_link: Option<ChildLink>,
    /// Time this web property was created.
    pub created: Option<DateTime<Utc>>,
    /// Whether user-level data retention resets on new activity.
    pub data_retention_reset_on_new_activity: Option<bool>,
    /// Data retention period, e.g. `MONTHS_26`, `INDEFINITE`.
    pub data_retention_ttl: Option<String>,
    /// Default view ID.
    #[serde_as(as = "Option<Int64>")]
    pub default_profile_id: Option<i64>,
    /// Web property ID of the form `UA-XXXXX-YY`.
    pub id: Option<String>,
    /// Industry vertical (category).
    pub industry_vertical: Option<String>,
    /// Internal ID for this web property.
    pub internal_web_property_id: Option<String>,
    /// Always `analytics#webproperty`.
    pub kind: Option<String>,
    /// Level: `STANDARD` or `PREMIUM`.
    pub level: Option<String>,
    /// Name of this web property.
    pub name: Option<String>,
    /// Link to the parent account.
    pub parent_link: Option<ParentLink>,
    /// Permissions the user has for this web property.
    pub permissions: Option<Permissions>,
    /// Number of views under this web property.
    pub profile_count: Option<i64>,
    /// Link for this web property.
    pub self_link: Option<String>,
    /// Whether the web property is starred.
    pub starred: Option<bool>,
    /// Time this web property was last modified.
    pub updated: Option<DateTime<Utc>>,
    /// Website URL for this web property.
    pub website_url: Option<String>,
    /// Reply metadata.
    #[serde(skip)]
    pub server_response: ServerResponse,
}

/// A collection of web properties.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Webproperties {
    /// The web properties on this page.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<Webproperty>,
    /// Maximum number of entries the response can contain.
    pub items_per_page: Option<i64>,
    /// Always `analytics#webproperties`.
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

api_resource!(Webproperty, Webproperties);

/// Endpoints of `management.webproperties`.
#[derive(Debug, Clone)]
pub struct WebpropertiesService {
    client: Arc<HttpClient>,
}

impl WebpropertiesService {
    pub(crate) const fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    /// Gets a web property.
    pub fn get(&self, account_id: &str, web_property_id: &str) -> WebpropertiesGetCall {
        WebpropertiesGetCall {
            call: Call::new(&self.client, HttpMethod::Get, ITEM)
                .path_param("accountId", account_id)
                .path_param("webPropertyId", web_property_id),
        }
    }

    /// Creates a new property if the account has fewer than 20 properties.
    pub fn insert(&self, account_id: &str, webproperty: &Webproperty) -> WebpropertiesInsertCall {
        WebpropertiesInsertCall {
            call: Call::new(&self.client, HttpMethod::Post, COLLECTION)
                .path_param("accountId", account_id)
                .json_body(webproperty),
        }
    }

    /// Lists web properties. `account_id` may be `~all`.
    pub fn list(&self, account_id: &str) -> WebpropertiesListCall {
        WebpropertiesListCall {
            call: Call::new(&self.client, HttpMethod::Get, COLLECTION)
                .path_param("accountId", account_id),
        }
    }

    /// Updates an existing web property. Only set fields are sent.
    pub fn patch(
        &self,
        account_id: &str,
        web_property_id: &str,
        webproperty: &Webproperty,
    ) -> WebpropertiesPatchCall {
        WebpropertiesPatchCall {
            call: Call::new(&self.client, HttpMethod::Patch, ITEM)
                .path_param("accountId", account_id)
                .path_param("webPropertyId", web_property_id)
                .json_body(webproperty),
        }
    }

    /// Replaces an existing web property.
    pub fn update(
        &self,
        account_id: &str,
        web_property_id: &str,
        webproperty: &Webproperty,
    ) -> WebpropertiesUpdateCall {
        WebpropertiesUpdateCall {
            call: Call::new(&self.client, HttpMethod::Put, ITEM)
                .path_param("accountId", account_id)
                .path_param("webPropertyId", web_property_id)
                .json_body(webproperty),
        }
    }
}

/// `GET management/accounts/{accountId}/webproperties/{webPropertyId}`.
#[derive(Debug)]
#[must_use = "call builders do nothing until `send` is awaited"]
pub struct WebpropertiesGetCall {
    call: Call,
}

/// `POST management/accounts/{accountId}/webproperties`.
#[derive(Debug)]
#[must_use = "call builders do nothing until `send` is awaited"]
pub struct WebpropertiesInsertCall {
    call: Call,
}

/// `GET management/accounts/{accountId}/webproperties`.
#[derive(Debug)]
#[must_use = "call builders do nothing until `send` is awaited"]
pub struct WebpropertiesListCall {
    call: Call,
}

/// `PATCH management/accounts/{accountId}/webproperties/{webPropertyId}`.
#[derive(Debug)]
#[must_use = "call builders do nothing until `send` is awaited"]
pub struct WebpropertiesPatchCall {
    call: Call,
}

/// `PUT management/accounts/{accountId}/webproperties/{webPropertyId}`.
#[derive(Debug)]
#[must_use = "call builders do nothing until `send` is awaited"]
pub struct WebpropertiesUpdateCall {
    call: Call,
}

api_method!(WebpropertiesGetCall => Webproperty, conditional);
api_method!(WebpropertiesInsertCall => Webproperty);
api_method!(WebpropertiesListCall => Webproperties, conditional);
api_method!(WebpropertiesPatchCall => Webproperty);
api_method!(WebpropertiesUpdateCall => Webproperty);
impl Paginated for WebpropertiesListCall {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile_id_is_string_encoded() {
        let property = Webproperty {
            id: Some("UA-1-1".to_string()),
            default_profile_id: Some(9_007_199_254_740_993),
            ..Default::default()
        };

        let json = serde_json::to_value(&property).unwrap();
        assert_eq!(json["defaultProfileId"], "9007199254740993");

        let parsed: Webproperty = serde_json::from_value(json).unwrap();
        assert_eq!(parsed.default_profile_id, Some(9_007_199_254_740_993));
    }

    #[test]
    fn test_default_profile_id_accepts_number() {
        let parsed: Webproperty =
            serde_json::from_str(r#"{"id":"UA-1-1","defaultProfileId":12345}"#).unwrap();
        assert_eq!(parsed.default_profile_id, Some(12_345));
    }

    #[test]
    fn test_patch_body_carries_only_set_fields() {
        let patch = Webproperty {
            starred: Some(false),
            profile_count: Some(0),
            ..Default::default()
        };

        let json = serde_json::to_value(&patch).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"profileCount": 0, "starred": false})
        );
    }
}
