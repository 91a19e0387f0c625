//! Links between web properties and Google Ads accounts.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::clients::{HttpClient, HttpMethod};
use crate::rest::resources::v3::common::{Paginated, WebPropertyRef};
use crate::rest::{api_method, api_resource, Call, ServerResponse};

const COLLECTION: &str =
    "management/accounts/{accountId}/webproperties/{webPropertyId}/entityAdWordsLinks";
const ITEM: &str = "management/accounts/{accountId}/webproperties/{webPropertyId}/entityAdWordsLinks/{webPropertyAdWordsLinkId}";

/// A Google Ads account taking part in a link.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AdWordsAccount {
    /// Whether auto-tagging is enabled on the Ads account.
    pub auto_tagging_enabled: Option<bool>,
    /// Customer ID, e.g. `123-456-7890`.
    pub customer_id: Option<String>,
    /// Always `analytics#adWordsAccount`.
    pub kind: Option<String>,
}

/// The web property side of an Ads link.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AdWordsLinkedEntity {
    /// The linked web property.
    pub web_property_ref: Option<WebPropertyRef>,
}

/// A web property to Google Ads link.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EntityAdWordsLink {
    /// Ads accounts in the link.
    pub ad_words_accounts: Option<Vec<AdWordsAccount>>,
    /// The linked web property.
    pub entity: Option<AdWordsLinkedEntity>,
    /// Link ID.
    pub id: Option<String>,
    /// Always `analytics#entityAdWordsLink`.
    pub kind: Option<String>,
    /// Name of the link.
    pub name: Option<String>,
    /// IDs of views linked to the Ads accounts.
    pub profile_ids: Option<Vec<String>>,
    /// Link for this Ads link.
    pub self_link: Option<String>,
    /// Reply metadata.
    #[serde(skip)]
    pub server_response: ServerResponse,
}

/// A collection of Ads links.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EntityAdWordsLinks {
    /// The links on this page.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<EntityAdWordsLink>,
    /// Maximum number of entries the response can contain.
    pub items_per_page: Option<i64>,
    /// Always `analytics#entityAdWordsLinks`.
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

api_resource!(EntityAdWordsLink, EntityAdWordsLinks);

/// Endpoints of `management.webPropertyAdWordsLinks`.
#[derive(Debug, Clone)]
pub struct WebPropertyAdWordsLinksService {
    client: Arc<HttpClient>,
}

impl WebPropertyAdWordsLinksService {
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
        link_id: &str,
    ) -> Call {
        Call::new(&self.client, method, ITEM)
            .path_param("accountId", account_id)
            .path_param("webPropertyId", web_property_id)
            .path_param("webPropertyAdWordsLinkId", link_id)
    }

    /// Deletes an Ads link.
    pub fn delete(
        &self,
        account_id: &str,
        web_property_id: &str,
        link_id: &str,
    ) -> WebPropertyAdWordsLinksDeleteCall {
        WebPropertyAdWordsLinksDeleteCall {
            call: self.item(HttpMethod::Delete, account_id, web_property_id, link_id),
        }
    }

    /// Gets an Ads link.
    pub fn get(
        &self,
        account_id: &str,
        web_property_id: &str,
        link_id: &str,
    ) -> WebPropertyAdWordsLinksGetCall {
        WebPropertyAdWordsLinksGetCall {
            call: self.item(HttpMethod::Get, account_id, web_property_id, link_id),
        }
    }

    /// Creates an Ads link.
    pub fn insert(
        &self,
        account_id: &str,
        web_property_id: &str,
        link: &EntityAdWordsLink,
    ) -> WebPropertyAdWordsLinksInsertCall {
        WebPropertyAdWordsLinksInsertCall {
            call: self
                .collection(HttpMethod::Post, account_id, web_property_id)
                .json_body(link),
        }
    }

    /// Lists the Ads links of a web property.
    pub fn list(&self, account_id: &str, web_property_id: &str) -> WebPropertyAdWordsLinksListCall {
        WebPropertyAdWordsLinksListCall {
            call: self.collection(HttpMethod::Get, account_id, web_property_id),
        }
    }

    /// Updates an existing Ads link. Only set fields are sent.
    pub fn patch(
        &self,
        account_id: &str,
        web_property_id: &str,
        link_id: &str,
        link: &EntityAdWordsLink,
    ) -> WebPropertyAdWordsLinksPatchCall {
        WebPropertyAdWordsLinksPatchCall {
            call: self
                .item(HttpMethod::Patch, account_id, web_property_id, link_id)
                .json_body(link),
        }
    }

    /// Replaces an existing Ads link.
    pub fn update(
        &self,
        account_id: &str,
        web_property_id: &str,
        link_id: &str,
        link: &EntityAdWordsLink,
    ) -> WebPropertyAdWordsLinksUpdateCall {
        WebPropertyAdWordsLinksUpdateCall {
            call: self
                .item(HttpMethod::Put, account_id, web_property_id, link_id)
                .json_body(link),
        }
    }
}

/// `DELETE .../entityAdWordsLinks/{webPropertyAdWordsLinkId}`.
#[derive(Debug)]
#[must_use = "call builders do nothing until `send` is awaited"]
pub struct WebPropertyAdWordsLinksDeleteCall {
    call: Call,
}

/// `GET .../entityAdWordsLinks/{webPropertyAdWordsLinkId}`.
#[derive(Debug)]
#[must_use = "call builders do nothing until `send` is awaited"]
pub struct WebPropertyAdWordsLinksGetCall {
    call: Call,
}

/// `POST .../entityAdWordsLinks`.
#[derive(Debug)]
#[must_use = "call builders do nothing until `send` is awaited"]
pub struct WebPropertyAdWordsLinksInsertCall {
    call: Call,
}

/// `GET .../entityAdWordsLinks`.
#[derive(Debug)]
#[must_use = "call builders do nothing until `send` is awaited"]
pub struct WebPropertyAdWordsLinksListCall {
    call: Call,
}

/// `PATCH .../entityAdWordsLinks/{webPropertyAdWordsLinkId}`.
#[derive(Debug)]
#[must_use = "call builders do nothing until `send` is awaited"]
pub struct WebPropertyAdWordsLinksPatchCall {
    call: Call,
}

/// `PUT .../entityAdWordsLinks/{webPropertyAdWordsLinkId}`.
#[derive(Debug)]
#[must_use = "call builders do nothing until `send` is awaited"]
pub struct WebPropertyAdWordsLinksUpdateCall {
    call: Call,
}

api_method!(WebPropertyAdWordsLinksDeleteCall => ());
api_method!(WebPropertyAdWordsLinksGetCall => EntityAdWordsLink, conditional);
api_method!(WebPropertyAdWordsLinksInsertCall => EntityAdWordsLink);
api_method!(WebPropertyAdWordsLinksListCall => EntityAdWordsLinks, conditional);
api_method!(WebPropertyAdWordsLinksPatchCall => EntityAdWordsLink);
api_method!(WebPropertyAdWordsLinksUpdateCall => EntityAdWordsLink);
impl Paginated for WebPropertyAdWordsLinksListCall {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ad_words_link_wire_names() {
        let link = EntityAdWordsLink {
            name: Some("Main Ads".to_string()),
            ad_words_accounts: Some(vec![AdWordsAccount {
                customer_id: Some("123-456-7890".to_string()),
                auto_tagging_enabled: Some(true),
                ..Default::default()
            }]),
            profile_ids: Some(vec![]),
            ..Default::default()
        };

        let json = serde_json::to_value(&link).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "adWordsAccounts": [{"autoTaggingEnabled": true, "customerId": "123-456-7890"}],
                "name": "Main Ads",
                "profileIds": []
            })
        );
    }
}
