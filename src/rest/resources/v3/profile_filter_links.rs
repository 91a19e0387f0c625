//! Links between views and account filters.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::clients::{HttpClient, HttpMethod};
use crate::rest::resources::v3::common::{Paginated, ProfileRef};
use crate::rest::resources::v3::filters::FilterRef;
use crate::rest::{api_method, api_resource, Call, ServerResponse};

const COLLECTION: &str =
    "management/accounts/{accountId}/webproperties/{webPropertyId}/profiles/{profileId}/profileFilterLinks";
const ITEM: &str =
    "management/accounts/{accountId}/webproperties/{webPropertyId}/profiles/{profileId}/profileFilterLinks/{linkId}";

/// A view-filter link. `rank` decides the order filters are applied in.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProfileFilterLink {
    /// The linked filter.
    pub filter_ref: Option<FilterRef>,
    /// Link ID.
    pub id: Option<String>,
    /// Always `analytics#profileFilterLink`.
    pub kind: Option<String>,
    /// The linked view.
    pub profile_ref: Option<ProfileRef>,
    /// 1-based position of the filter in the view's filter chain.
    pub rank: Option<i64>,
    /// Link for this view-filter link.
    pub self_link: Option<String>,
    /// Reply metadata.
    #[serde(skip)]
    pub server_response: ServerResponse,
}

/// A collection of view-filter links.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProfileFilterLinks {
    /// The links on this page.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<ProfileFilterLink>,
    /// Maximum number of entries the response can contain.
    pub items_per_page: Option<i64>,
    /// Always `analytics#profileFilterLinks`.
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

api_resource!(ProfileFilterLink, ProfileFilterLinks);

/// Endpoints of `management.profileFilterLinks`.
#[derive(Debug, Clone)]
pub struct ProfileFilterLinksService {
    client: Arc<HttpClient>,
}

impl ProfileFilterLinksService {
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
        link_id: &str,
    ) -> Call {
        Call::new(&self.client, method, ITEM)
            .path_param("accountId", account_id)
            .path_param("webPropertyId", web_property_id)
            .path_param("profileId", profile_id)
            .path_param("linkId", link_id)
    }

    /// Deletes a view-filter link.
    pub fn delete(
        &self,
        account_id: &str,
        web_property_id: &str,
        profile_id: &str,
        link_id: &str,
    ) -> ProfileFilterLinksDeleteCall {
        ProfileFilterLinksDeleteCall {
            call: self.item(
                HttpMethod::Delete,
                account_id,
                web_property_id,
                profile_id,
                link_id,
            ),
        }
    }

    /// Gets a view-filter link.
    pub fn get(
        &self,
        account_id: &str,
        web_property_id: &str,
        profile_id: &str,
        link_id: &str,
    ) -> ProfileFilterLinksGetCall {
        ProfileFilterLinksGetCall {
            call: self.item(
                HttpMethod::Get,
                account_id,
                web_property_id,
                profile_id,
                link_id,
            ),
        }
    }

    /// Links a filter to a view.
    pub fn insert(
        &self,
        account_id: &str,
        web_property_id: &str,
        profile_id: &str,
        link: &ProfileFilterLink,
    ) -> ProfileFilterLinksInsertCall {
        ProfileFilterLinksInsertCall {
            call: self
                .collection(HttpMethod::Post, account_id, web_property_id, profile_id)
                .json_body(link),
        }
    }

    /// Lists the filters linked to a view.
    pub fn list(
        &self,
        account_id: &str,
        web_property_id: &str,
        profile_id: &str,
    ) -> ProfileFilterLinksListCall {
        ProfileFilterLinksListCall {
            call: self.collection(HttpMethod::Get, account_id, web_property_id, profile_id),
        }
    }

    /// Updates an existing link. Only set fields are sent.
    pub fn patch(
        &self,
        account_id: &str,
        web_property_id: &str,
        profile_id: &str,
        link_id: &str,
        link: &ProfileFilterLink,
    ) -> ProfileFilterLinksPatchCall {
        ProfileFilterLinksPatchCall {
            call: self
                .item(
                    HttpMethod::Patch,
                    account_id,
                    web_property_id,
                    profile_id,
                    link_id,
                )
                .json_body(link),
        }
    }

    /// Replaces an existing link.
    pub fn update(
        &self,
        account_id: &str,
        web_property_id: &str,
        profile_id: &str,
        link_id: &str,
        link: &ProfileFilterLink,
    ) -> ProfileFilterLinksUpdateCall {
        ProfileFilterLinksUpdateCall {
            call: self
                .item(
                    HttpMethod::Put,
                    account_id,
                    web_property_id,
                    profile_id,
                    link_id,
                )
                .json_body(link),
        }
    }
}

/// `DELETE .../profileFilterLinks/{linkId}`.
#[derive(Debug)]
#[must_use = "call builders do nothing until `send` is awaited"]
pub struct ProfileFilterLinksDeleteCall {
    call: Call,
}

/// `GET .../profileFilterLinks/{linkId}`.
#[derive(Debug)]
#[must_use = "call builders do nothing until `send` is awaited"]
pub struct ProfileFilterLinksGetCall {
    call: Call,
}

/// `POST .../profileFilterLinks`.
#[derive(Debug)]
#[must_use = "call builders do nothing until `send` is awaited"]
pub struct ProfileFilterLinksInsertCall {
    call: Call,
}

/// `GET .../profileFilterLinks`.
#[derive(Debug)]
#[must_use = "call builders do nothing until `send` is awaited"]
pub struct ProfileFilterLinksListCall {
    call: Call,
}

/// `PATCH .../profileFilterLinks/{linkId}`.
#[derive(Debug)]
#[must_use = "call builders do nothing until `send` is awaited"]
pub struct ProfileFilterLinksPatchCall {
    call: Call,
}

/// `PUT .../profileFilterLinks/{linkId}`.
#[derive(Debug)]
#[must_use = "call builders do nothing until `send` is awaited"]
pub struct ProfileFilterLinksUpdateCall {
    call: Call,
}

api_method!(ProfileFilterLinksDeleteCall => ());
api_method!(ProfileFilterLinksGetCall => ProfileFilterLink, conditional);
api_method!(ProfileFilterLinksInsertCall => ProfileFilterLink);
api_method!(ProfileFilterLinksListCall => ProfileFilterLinks, conditional);
api_method!(ProfileFilterLinksPatchCall => ProfileFilterLink);
api_method!(ProfileFilterLinksUpdateCall => ProfileFilterLink);
impl Paginated for ProfileFilterLinksListCall {}
