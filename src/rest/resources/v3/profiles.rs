//! View (profile) resource and the `management.profiles` endpoints.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{HttpClient, HttpMethod};
use crate::rest::resources::v3::common::{ChildLink, Paginated, ParentLink, Permissions};
use crate::rest::{api_method, api_resource, Call, ServerResponse};

const COLLECTION: &str = "management/accounts/{accountId}/webproperties/{webPropertyId}/profiles";
const ITEM: &str =
    "management/accounts/{accountId}/webproperties/{webPropertyId}/profiles/{profileId}";

/// A view (profile).
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Account ID to which this view belongs.
    pub account_id: Option<String>,
    /// Whether bot filtering is enabled.
    pub bot_filtering_enabled: Option<bool>,
    /// Link to the goals of this view.
    pub child_link: Option<ChildLink>,
    /// Time this view was created.
    pub created: Option<DateTime<Utc>>,
    /// Currency type, e.g. `USD`.
    pub currency: Option<String>,
    /// Default page for this view.
    pub default_page: Option<String>,
    /// Whether e-commerce tracking is enabled.
    pub e_commerce_tracking: Option<bool>,
    /// Whether enhanced e-commerce tracking is enabled.
    pub enhanced_e_commerce_tracking: Option<bool>,
    /// Query parameters excluded from this view.
    pub exclude_query_parameters: Option<String>,
    /// View ID.
    pub id: Option<String>,
    /// Internal ID for the web property to which this view belongs.
    pub internal_web_property_id: Option<String>,
    /// Always `analytics#profile`.
    pub kind: Option<String>,
    /// Name of this view.
    pub name: Option<String>,
    /// Link to the parent web property.
    pub parent_link: Option<ParentLink>,
    /// Permissions the user has for this view.
    pub permissions: Option<Permissions>,
    /// Link for this view.
    pub self_link: Option<String>,
    /// Site search category parameters.
    pub site_search_category_parameters: Option<String>,
    /// Site search query parameters.
    pub site_search_query_parameters: Option<String>,
    /// Whether the view is starred.
    pub starred: Option<bool>,
    /// Whether to strip site search category parameters from URLs.
    pub strip_site_search_category_parameters: Option<bool>,
    /// Whether to strip site search query parameters from URLs.
    pub strip_site_search_query_parameters: Option<bool>,
    /// Time zone, e.g. `America/Los_Angeles`.
    pub timezone: Option<String>,
    /// View type: `WEB` or `APP`.
    #[serde(rename = "type")]
    pub profile_type: Option<String>,
    /// Time this view was last modified.
    pub updated: Option<DateTime<Utc>>,
    /// Web property ID of the form `UA-XXXXX-YY`.
    pub web_property_id: Option<String>,
    /// Website URL for this view.
    pub website_url: Option<String>,
    /// Reply metadata.
    #[serde(skip)]
    pub server_response: ServerResponse,
}

/// A collection of views.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Profiles {
    /// The views on this page.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<Profile>,
    /// Maximum number of entries the response can contain.
    pub items_per_page: Option<i64>,
    /// Always `analytics#profiles`.
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

api_resource!(Profile, Profiles);

/// Endpoints of `management.profiles`.
#[derive(Debug, Clone)]
pub struct ProfilesService {
    client: Arc<HttpClient>,
}

impl ProfilesService {
    pub(crate) const fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    fn item(
        &self,
        method: HttpMethod,
        account_id: &str,
        web_property_id: &str,
        profile_id: &str,
    ) -> Call {
        Call::new(&self.client, method, ITEM)
            .path_param("accountId", account_id)
            .path_param("webPropertyId", web_property_id)
            .path_param("profileId", profile_id)
    }

    fn collection(&self, method: HttpMethod, account_id: &str, web_property_id: &str) -> Call {
        Call::new(&self.client, method, COLLECTION)
            .path_param("accountId", account_id)
            .path_param("webPropertyId", web_property_id)
    }

    /// Deletes a view.
    pub fn delete(
        &self,
        account_id: &str,
        web_property_id: &str,
        profile_id: &str,
    ) -> ProfilesDeleteCall {
        ProfilesDeleteCall {
            call: self.item(HttpMethod::Delete, account_id, web_property_id, profile_id),
        }
    }

    /// Gets a view.
    pub fn get(&self, account_id: &str, web_property_id: &str, profile_id: &str) -> ProfilesGetCall {
        ProfilesGetCall {
            call: self.item(HttpMethod::Get, account_id, web_property_id, profile_id),
        }
    }

    /// Creates a new view.
    pub fn insert(
        &self,
        account_id: &str,
        web_property_id: &str,
        profile: &Profile,
    ) -> ProfilesInsertCall {
        ProfilesInsertCall {
            call: self
                .collection(HttpMethod::Post, account_id, web_property_id)
                .json_body(profile),
        }
    }

    /// Lists views. Either id may be `~all`.
    pub fn list(&self, account_id: &str, web_property_id: &str) -> ProfilesListCall {
        ProfilesListCall {
            call: self.collection(HttpMethod::Get, account_id, web_property_id),
        }
    }

    /// Updates an existing view. Only set fields are sent.
    pub fn patch(
        &self,
        account_id: &str,
        web_property_id: &str,
        profile_id: &str,
        profile: &Profile,
    ) -> ProfilesPatchCall {
        ProfilesPatchCall {
            call: self
                .item(HttpMethod::Patch, account_id, web_property_id, profile_id)
                .json_body(profile),
        }
    }

    /// Replaces an existing view.
    pub fn update(
        &self,
        account_id: &str,
        web_property_id: &str,
        profile_id: &str,
        profile: &Profile,
    ) -> ProfilesUpdateCall {
        ProfilesUpdateCall {
            call: self
                .item(HttpMethod::Put, account_id, web_property_id, profile_id)
                .json_body(profile),
        }
    }
}

/// `DELETE .../profiles/{profileId}`.
#[derive(Debug)]
#[must_use = "call builders do nothing until `send` is awaited"]
pub struct ProfilesDeleteCall {
    call: Call,
}

/// `GET .../profiles/{profileId}`.
#[derive(Debug)]
#[must_use = "call builders do nothing until `send` is awaited"]
pub struct ProfilesGetCall {
    call: Call,
}

/// `POST .../profiles`.
#[derive(Debug)]
#[must_use = "call builders do nothing until `send` is awaited"]
pub struct ProfilesInsertCall {
    call: Call,
}

/// `GET .../profiles`.
#[derive(Debug)]
#[must_use = "call builders do nothing until `send` is awaited"]
pub struct ProfilesListCall {
    call: Call,
}

/// `PATCH .../profiles/{profileId}`.
#[derive(Debug)]
#[must_use = "call builders do nothing until `send` is awaited"]
pub struct ProfilesPatchCall {
    call: Call,
}

/// `PUT .../profiles/{profileId}`.
#[derive(Debug)]
#[must_use = "call builders do nothing until `send` is awaited"]
pub struct ProfilesUpdateCall {
    call: Call,
}

api_method!(ProfilesDeleteCall => ());
api_method!(ProfilesGetCall => Profile, conditional);
api_method!(ProfilesInsertCall => Profile);
api_method!(ProfilesListCall => Profiles, conditional);
api_method!(ProfilesPatchCall => Profile);
api_method!(ProfilesUpdateCall => Profile);
impl Paginated for ProfilesListCall {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_wire_names() {
        let profile = Profile {
            e_commerce_tracking: Some(true),
            enhanced_e_commerce_tracking: Some(false),
            profile_type: Some("WEB".to_string()),
            strip_site_search_query_parameters: Some(true),
            ..Default::default()
        };

        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "eCommerceTracking": true,
                "enhancedECommerceTracking": false,
                "stripSiteSearchQueryParameters": true,
                "type": "WEB"
            })
        );
    }

    #[test]
    fn test_profile_deserialization_ignores_unknown_fields() {
        let json = r#"{
            "id": "456",
            "kind": "analytics#profile",
            "webPropertyId": "UA-1-1",
            "timezone": "Europe/London",
            "botFilteringEnabled": true,
            "somethingNew": {"nested": 1}
        }"#;

        let profile: Profile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.id.as_deref(), Some("456"));
        assert_eq!(profile.timezone.as_deref(), Some("Europe/London"));
        assert_eq!(profile.bot_filtering_enabled, Some(true));
    }
}
