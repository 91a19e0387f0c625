//! Remarketing audiences of a web property.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{HttpClient, HttpMethod};
use crate::rest::resources::v3::common::Paginated;
use crate::rest::{api_method, api_resource, Call, ServerResponse};

const COLLECTION: &str =
    "management/accounts/{accountId}/webproperties/{webPropertyId}/remarketingAudiences";
const ITEM: &str = "management/accounts/{accountId}/webproperties/{webPropertyId}/remarketingAudiences/{remarketingAudienceId}";

/// Conditions users must meet to join an audience.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IncludeConditions {
    /// Look-back window in days, 1 to 90.
    pub days_to_look_back: Option<i64>,
    /// Whether this is a smart list.
    pub is_smart_list: Option<bool>,
    /// Always `analytics#includeConditions`.
    pub kind: Option<String>,
    /// How long a user stays in the audience, 1 to 540 days.
    pub membership_duration_days: Option<i64>,
    /// Segment condition, e.g. `users::condition::ga:browser==Chrome`.
    pub segment: Option<String>,
}

/// Conditions that remove users from a state based audience.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExcludeConditions {
    /// `TEMPORARY` or `PERMANENT`.
    pub exclusion_duration: Option<String>,
    /// Segment condition.
    pub segment: Option<String>,
}

/// Definition of a simple audience.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AudienceDefinition {
    /// Inclusion conditions.
    pub include_conditions: Option<IncludeConditions>,
}

/// Definition of a state based audience.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StateBasedAudienceDefinition {
    /// Exclusion conditions.
    pub exclude_conditions: Option<ExcludeConditions>,
    /// Inclusion conditions.
    pub include_conditions: Option<IncludeConditions>,
}

/// An advertising account linked to an audience.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LinkedForeignAccount {
    /// Account ID.
    pub account_id: Option<String>,
    /// Whether the audience is eligible for search.
    pub eligible_for_search: Option<bool>,
    /// Entity ID.
    pub id: Option<String>,
    /// Internal ID for the web property.
    pub internal_web_property_id: Option<String>,
    /// Always `analytics#linkedForeignAccount`.
    pub kind: Option<String>,
    /// ID of the linked advertising account.
    pub linked_account_id: Option<String>,
    /// Audience ID to which this account is linked.
    pub remarketing_audience_id: Option<String>,
    /// Status of the link.
    pub status: Option<String>,
    /// Type of the linked account, e.g. `ADWORDS_LINKS`.
    #[serde(rename = "type")]
    pub account_type: Option<String>,
    /// Web property ID of the form `UA-XXXXX-YY`.
    pub web_property_id: Option<String>,
}

/// A remarketing audience.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RemarketingAudience {
    /// Account ID.
    pub account_id: Option<String>,
    /// Definition of a `SIMPLE` audience.
    pub audience_definition: Option<AudienceDefinition>,
    /// `SIMPLE` or `STATE_BASED`.
    pub audience_type: Option<String>,
    /// Time the audience was created.
    pub created: Option<DateTime<Utc>>,
    /// Description of the audience.
    pub description: Option<String>,
    /// Audience ID.
    pub id: Option<String>,
    /// Internal ID for the web property.
    pub internal_web_property_id: Option<String>,
    /// Always `analytics#remarketingAudience`.
    pub kind: Option<String>,
    /// Advertising accounts the audience is shared with.
    pub linked_ad_accounts: Option<Vec<LinkedForeignAccount>>,
    /// View IDs the audience is linked to.
    pub linked_views: Option<Vec<String>>,
    /// Name of the audience.
    pub name: Option<String>,
    /// Definition of a `STATE_BASED` audience.
    pub state_based_audience_definition: Option<StateBasedAudienceDefinition>,
    /// Time the audience was last modified.
    pub updated: Option<DateTime<Utc>>,
    /// Web property ID of the form `UA-XXXXX-YY`.
    pub web_property_id: Option<String>,
    /// Reply metadata.
    #[serde(skip)]
    pub server_response: ServerResponse,
}

/// A collection of remarketing audiences.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RemarketingAudiences {
    /// The audiences on this page.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<RemarketingAudience>,
    /// Maximum number of entries the response can contain.
    pub items_per_page: Option<i64>,
    /// Always `analytics#remarketingAudiences`.
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

api_resource!(RemarketingAudience, RemarketingAudiences);

/// Endpoints of `management.remarketingAudience`.
#[derive(Debug, Clone)]
pub struct RemarketingAudienceService {
    client: Arc<HttpClient>,
}

impl RemarketingAudienceService {
    pub(crate) const fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    fn collection(&self, method: HttpMethod, account_id: &str, web_property_id: &str) -> Call {
        Call::new(&self.client, method, COLLECTION)
            .path_param("accountId", account_id)
            .path_param("webPropertyId", web_property_id)
    }

    fn item(
        &self,
        method: HttpMethod,
        account_id: &str,
        web_property_id: &str,
        remarketing_audience_id: &str,
    ) -> Call {
        Call::new(&self.client, method, ITEM)
            .path_param("accountId", account_id)
            .path_param("webPropertyId", web_property_id)
            .path_param("remarketingAudienceId", remarketing_audience_id)
    }

    /// Deletes a remarketing audience.
    pub fn delete(
        &self,
        account_id: &str,
        web_property_id: &str,
        remarketing_audience_id: &str,
    ) -> RemarketingAudienceDeleteCall {
        RemarketingAudienceDeleteCall {
            call: self.item(
                HttpMethod::Delete,
                account_id,
                web_property_id,
                remarketing_audience_id,
            ),
        }
    }

    /// Gets a remarketing audience.
    pub fn get(
        &self,
        account_id: &str,
        web_property_id: &str,
        remarketing_audience_id: &str,
    ) -> RemarketingAudienceGetCall {
        RemarketingAudienceGetCall {
            call: self.item(
                HttpMethod::Get,
                account_id,
                web_property_id,
                remarketing_audience_id,
            ),
        }
    }

    /// Creates a new remarketing audience.
    pub fn insert(
        &self,
        account_id: &str,
        web_property_id: &str,
        audience: &RemarketingAudience,
    ) -> RemarketingAudienceInsertCall {
        RemarketingAudienceInsertCall {
            call: self
                .collection(HttpMethod::Post, account_id, web_property_id)
                .json_body(audience),
        }
    }

    /// Lists remarketing audiences of a web property.
    pub fn list(&self, account_id: &str, web_property_id: &str) -> RemarketingAudienceListCall {
        RemarketingAudienceListCall {
            call: self.collection(HttpMethod::Get, account_id, web_property_id),
        }
    }

    /// Updates an existing remarketing audience. Only set fields are sent.
    pub fn patch(
        &self,
        account_id: &str,
        web_property_id: &str,
        remarketing_audience_id: &str,
        audience: &RemarketingAudience,
    ) -> RemarketingAudiencePatchCall {
        RemarketingAudiencePatchCall {
            call: self
                .item(
                    HttpMethod::Patch,
                    account_id,
                    web_property_id,
                    remarketing_audience_id,
                )
                .json_body(audience),
        }
    }

    /// Replaces an existing remarketing audience.
    pub fn update(
        &self,
        account_id: &str,
        web_property_id: &str,
        remarketing_audience_id: &str,
        audience: &RemarketingAudience,
    ) -> RemarketingAudienceUpdateCall {
        RemarketingAudienceUpdateCall {
            call: self
                .item(
                    HttpMethod::Put,
                    account_id,
                    web_property_id,
                    remarketing_audience_id,
                )
                .json_body(audience),
        }
    }
}

/// `DELETE .../remarketingAudiences/{remarketingAudienceId}`.
#[derive(Debug)]
#[must_use = "call builders do nothing until `send` is awaited"]
pub struct RemarketingAudienceDeleteCall {
    call: Call,
}

/// `GET .../remarketingAudiences/{remarketingAudienceId}`.
#[derive(Debug)]
#[must_use = "call builders do nothing until `send` is awaited"]
pub struct RemarketingAudienceGetCall {
    call: Call,
}

/// `POST .../remarketingAudiences`.
#[derive(Debug)]
#[must_use = "call builders do nothing until `send` is awaited"]
pub struct RemarketingAudienceInsertCall {
    call: Call,
}

/// `GET .../remarketingAudiences`.
#[derive(Debug)]
#[must_use = "call builders do nothing until `send` is awaited"]
pub struct RemarketingAudienceListCall {
    call: Call,
}

impl RemarketingAudienceListCall {
    /// Restricts the list to one audience type, or `all`.
    pub fn audience_type(mut self, audience_type: impl Into<String>) -> Self {
        self.call.set_query("type", audience_type.into());
        self
    }
}

/// `PATCH .../remarketingAudiences/{remarketingAudienceId}`.
#[derive(Debug)]
#[must_use = "call builders do nothing until `send` is awaited"]
pub struct RemarketingAudiencePatchCall {
    call: Call,
}

/// `PUT .../remarketingAudiences/{remarketingAudienceId}`.
#[derive(Debug)]
#[must_use = "call builders do nothing until `send` is awaited"]
pub struct RemarketingAudienceUpdateCall {
    call: Call,
}

api_method!(RemarketingAudienceDeleteCall => ());
api_method!(RemarketingAudienceGetCall => RemarketingAudience, conditional);
api_method!(RemarketingAudienceInsertCall => RemarketingAudience);
api_method!(RemarketingAudienceListCall => RemarketingAudiences, conditional);
api_method!(RemarketingAudiencePatchCall => RemarketingAudience);
api_method!(RemarketingAudienceUpdateCall => RemarketingAudience);
impl Paginated for RemarketingAudienceListCall {}
