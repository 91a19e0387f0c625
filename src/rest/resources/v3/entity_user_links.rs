//! User permissions on accounts, web properties and views.
//!
//! The three services share the [`EntityUserLink`] resource and differ only
//! in the entity the `entityUserLinks` collection hangs off.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::clients::{HttpClient, HttpMethod};
use crate::rest::resources::v3::common::{
    AccountRef, Paginated, Permissions, ProfileRef, UserRef, WebPropertyRef,
};
use crate::rest::{api_method, api_resource, Call, ServerResponse};

const ACCOUNT_LINKS: &str = "management/accounts/{accountId}/entityUserLinks";
const ACCOUNT_LINK: &str = "management/accounts/{accountId}/entityUserLinks/{linkId}";
const WEBPROPERTY_LINKS: &str =
    "management/accounts/{accountId}/webproperties/{webPropertyId}/entityUserLinks";
const WEBPROPERTY_LINK: &str =
    "management/accounts/{accountId}/webproperties/{webPropertyId}/entityUserLinks/{linkId}";
const PROFILE_LINKS: &str = "management/accounts/{accountId}/webproperties/{webPropertyId}/profiles/{profileId}/entityUserLinks";
const PROFILE_LINK: &str = "management/accounts/{accountId}/webproperties/{webPropertyId}/profiles/{profileId}/entityUserLinks/{linkId}";

/// The entity a user link grants access to. Exactly one reference is set.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LinkedEntity {
    /// Set for account links.
    pub account_ref: Option<AccountRef>,
    /// Set for view links.
    pub profile_ref: Option<ProfileRef>,
    /// Set for web property links.
    pub web_property_ref: Option<WebPropertyRef>,
}

/// A link between a user and an account, web property or view.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EntityUserLink {
    /// The linked entity.
    pub entity: Option<LinkedEntity>,
    /// Link ID.
    pub id: Option<String>,
    /// Always `analytics#entityUserLink`.
    pub kind: Option<String>,
    /// Permissions the user has on the entity.
    pub permissions: Option<Permissions>,
    /// Link for this user link.
    pub self_link: Option<String>,
    /// The linked user.
    pub user_ref: Option<UserRef>,
    /// Reply metadata.
    #[serde(skip)]
    pub server_response: ServerResponse,
}

/// A collection of user links.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EntityUserLinks {
    /// The links on this page.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<EntityUserLink>,
    /// Maximum number of entries the response can contain.
    pub items_per_page: Option<i64>,
    /// Always `analytics#entityUserLinks`.
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

api_resource!(EntityUserLink, EntityUserLinks);

/// Endpoints of `management.accountUserLinks`.
#[derive(Debug, Clone)]
pub struct AccountUserLinksService {
    client: Arc<HttpClient>,
}

impl AccountUserLinksService {
    pub(crate) const fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    fn item(&self, method: HttpMethod, account_id: &str, link_id: &str) -> Call {
        Call::new(&self.client, method, ACCOUNT_LINK)
            .path_param("accountId", account_id)
            .path_param("linkId", link_id)
    }

    /// Removes a user from an account.
    pub fn delete(&self, account_id: &str, link_id: &str) -> AccountUserLinksDeleteCall {
        AccountUserLinksDeleteCall {
            call: self.item(HttpMethod::Delete, account_id, link_id),
        }
    }

    /// Adds a user to an account.
    pub fn insert(&self, account_id: &str, link: &EntityUserLink) -> AccountUserLinksInsertCall {
        AccountUserLinksInsertCall {
            call: Call::new(&self.client, HttpMethod::Post, ACCOUNT_LINKS)
                .path_param("accountId", account_id)
                .json_body(link),
        }
    }

    /// Lists the users of an account.
    pub fn list(&self, account_id: &str) -> AccountUserLinksListCall {
        AccountUserLinksListCall {
            call: Call::new(&self.client, HttpMethod::Get, ACCOUNT_LINKS)
                .path_param("accountId", account_id),
        }
    }

    /// Updates the permissions of a user on an account.
    pub fn update(
        &self,
        account_id: &str,
        link_id: &str,
        link: &EntityUserLink,
    ) -> AccountUserLinksUpdateCall {
        AccountUserLinksUpdateCall {
            call: self
                .item(HttpMethod::Put, account_id, link_id)
                .json_body(link),
        }
    }
}

/// `DELETE management/accounts/{accountId}/entityUserLinks/{linkId}`.
#[derive(Debug)]
#[must_use = "call builders do nothing until `send` is awaited"]
pub struct AccountUserLinksDeleteCall {
    call: Call,
}

/// `POST management/accounts/{accountId}/entityUserLinks`.
#[derive(Debug)]
#[must_use = "call builders do nothing until `send` is awaited"]
pub struct AccountUserLinksInsertCall {
    call: Call,
}

/// `GET management/accounts/{accountId}/entityUserLinks`.
#[derive(Debug)]
#[must_use = "call builders do nothing until `send` is awaited"]
pub struct AccountUserLinksListCall {
    call: Call,
}

/// `PUT management/accounts/{accountId}/entityUserLinks/{linkId}`.
#[derive(Debug)]
#[must_use = "call builders do nothing until `send` is awaited"]
pub struct AccountUserLinksUpdateCall {
    call: Call,
}

api_method!(AccountUserLinksDeleteCall => ());
api_method!(AccountUserLinksInsertCall => EntityUserLink);
api_method!(AccountUserLinksListCall => EntityUserLinks, conditional);
api_method!(AccountUserLinksUpdateCall => EntityUserLink);
impl Paginated for AccountUserLinksListCall {}

/// Endpoints of `management.webpropertyUserLinks`.
#[derive(Debug, Clone)]
pub struct WebpropertyUserLinksService {
    client: Arc<HttpClient>,
}

impl WebpropertyUserLinksService {
    pub(crate) const fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    fn collection(&self, method: HttpMethod, account_id: &str, web_property_id: &str) -> Call {
        Call::new(&self.client, method, WEBPROPERTY_LINKS)
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
        Call::new(&self.client, method, WEBPROPERTY_LINK)
            .path_param("accountId", account_id)
            .path_param("webPropertyId", web_property_id)
            .path_param("linkId", link_id)
    }

    /// Removes a user from a web property.
    pub fn delete(
        &self,
        account_id: &str,
        web_property_id: &str,
        link_id: &str,
    ) -> WebpropertyUserLinksDeleteCall {
        WebpropertyUserLinksDeleteCall {
            call: self.item(HttpMethod::Delete, account_id, web_property_id, link_id),
        }
    }

    /// Adds a user to a web property.
    pub fn insert(
        &self,
        account_id: &str,
        web_property_id: &str,
        link: &EntityUserLink,
    ) -> WebpropertyUserLinksInsertCall {
        WebpropertyUserLinksInsertCall {
            call: self
                .collection(HttpMethod::Post, account_id, web_property_id)
                .json_body(link),
        }
    }

    /// Lists the users of a web property.
    pub fn list(&self, account_id: &str, web_property_id: &str) -> WebpropertyUserLinksListCall {
        WebpropertyUserLinksListCall {
            call: self.collection(HttpMethod::Get, account_id, web_property_id),
        }
    }

    /// Updates the permissions of a user on a web property.
    pub fn update(
        &self,
        account_id: &str,
        web_property_id: &str,
        link_id: &str,
        link: &EntityUserLink,
    ) -> WebpropertyUserLinksUpdateCall {
        WebpropertyUserLinksUpdateCall {
            call: self
                .item(HttpMethod::Put, account_id, web_property_id, link_id)
                .json_body(link),
        }
    }
}

/// `DELETE .../webproperties/{webPropertyId}/entityUserLinks/{linkId}`.
#[derive(Debug)]
#[must_use = "call builders do nothing until `send` is awaited"]
pub struct WebpropertyUserLinksDeleteCall {
    call: Call,
}

/// `POST .../webproperties/{webPropertyId}/entityUserLinks`.
#[derive(Debug)]
#[must_use = "call builders do nothing until `send` is awaited"]
pub struct WebpropertyUserLinksInsertCall {
    call: Call,
}

/// `GET .../webproperties/{webPropertyId}/entityUserLinks`.
#[derive(Debug)]
#[must_use = "call builders do nothing until `send` is awaited"]
pub struct WebpropertyUserLinksListCall {
    call: Call,
}

/// `PUT .../webproperties/{webPropertyId}/entityUserLinks/{linkId}`.
#[derive(Debug)]
#[must_use = "call builders do nothing until `send` is awaited"]
pub struct WebpropertyUserLinksUpdateCall {
    call: Call,
}

api_method!(WebpropertyUserLinksDeleteCall => ());
api_method!(WebpropertyUserLinksInsertCall => EntityUserLink);
api_method!(WebpropertyUserLinksListCall => EntityUserLinks, conditional);
api_method!(WebpropertyUserLinksUpdateCall => EntityUserLink);
impl Paginated for WebpropertyUserLinksListCall {}

/// Endpoints of `management.profileUserLinks`.
#[derive(Debug, Clone)]
pub struct ProfileUserLinksService {
    client: Arc<HttpClient>,
}

impl ProfileUserLinksService {
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
        Call::new(&self.client, method, PROFILE_LINKS)
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
        Call::new(&self.client, method, PROFILE_LINK)
            .path_param("accountId", account_id)
            .path_param("webPropertyId", web_property_id)
            .path_param("profileId", profile_id)
            .path_param("linkId", link_id)
    }

    /// Removes a user from a view.
    pub fn delete(
        &self,
        account_id: &str,
        web_property_id: &str,
        profile_id: &str,
        link_id: &str,
    ) -> ProfileUserLinksDeleteCall {
        ProfileUserLinksDeleteCall {
            call: self.item(
                HttpMethod::Delete,
                account_id,
                web_property_id,
                profile_id,
                link_id,
            ),
        }
    }

    /// Adds a user to a view.
    pub fn insert(
        &self,
        account_id: &str,
        web_property_id: &str,
        profile_id: &str,
        link: &EntityUserLink,
    ) -> ProfileUserLinksInsertCall {
        ProfileUserLinksInsertCall {
            call: self
                .collection(HttpMethod::Post, account_id, web_property_id, profile_id)
                .json_body(link),
        }
    }

    /// Lists the users of a view.
    pub fn list(
        &self,
        account_id: &str,
        web_property_id: &str,
        profile_id: &str,
    ) -> ProfileUserLinksListCall {
        ProfileUserLinksListCall {
            call: self.collection(HttpMethod::Get, account_id, web_property_id, profile_id),
        }
    }

    /// Updates the permissions of a user on a view.
    pub fn update(
        &self,
        account_id: &str,
        web_property_id: &str,
        profile_id: &str,
        link_id: &str,
        link: &EntityUserLink,
    ) -> ProfileUserLinksUpdateCall {
        ProfileUserLinksUpdateCall {
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

/// `DELETE .../profiles/{profileId}/entityUserLinks/{linkId}`.
#[derive(Debug)]
#[must_use = "call builders do nothing until `send` is awaited"]
pub struct ProfileUserLinksDeleteCall {
    call: Call,
}

/// `POST .../profiles/{profileId}/entityUserLinks`.
#[derive(Debug)]
#[must_use = "call builders do nothing until `send` is awaited"]
pub struct ProfileUserLinksInsertCall {
    call: Call,
}

/// `GET .../profiles/{profileId}/entityUserLinks`.
#[derive(Debug)]
#[must_use = "call builders do nothing until `send` is awaited"]
pub struct ProfileUserLinksListCall {
    call: Call,
}

/// `PUT .../profiles/{profileId}/entityUserLinks/{linkId}`.
#[derive(Debug)]
#[must_use = "call builders do nothing until `send` is awaited"]
pub struct ProfileUserLinksUpdateCall {
    call: Call,
}

api_method!(ProfileUserLinksDeleteCall => ());
api_method!(ProfileUserLinksInsertCall => EntityUserLink);
api_method!(ProfileUserLinksListCall => EntityUserLinks, conditional);
api_method!(ProfileUserLinksUpdateCall => EntityUserLink);
impl Paginated for ProfileUserLinksListCall {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AnalyticsConfig;
    use crate::rest::ApiMethod;

    fn client() -> Arc<HttpClient> {
        Arc::new(HttpClient::from_config(&AnalyticsConfig::default()).unwrap())
    }

    #[test]
    fn test_insert_body_for_account_link() {
        let link = EntityUserLink {
            permissions: Some(Permissions {
                local: Some(vec!["EDIT".to_string(), "MANAGE_USERS".to_string()]),
                ..Default::default()
            }),
            user_ref: Some(UserRef {
                email: Some("someone@example.com".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };

        let json = serde_json::to_value(&link).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "permissions": {"local": ["EDIT", "MANAGE_USERS"]},
                "userRef": {"email": "someone@example.com"}
            })
        );
    }

    #[test]
    fn test_entity_reference_deserialization() {
        let json = r#"{
            "id": "10:abc",
            "entity": {"webPropertyRef": {"id": "UA-1-1", "accountId": "1"}},
            "permissions": {"effective": ["READ_AND_ANALYZE"], "local": []}
        }"#;

        let link: EntityUserLink = serde_json::from_str(json).unwrap();
        let entity = link.entity.unwrap();
        assert!(entity.account_ref.is_none());
        assert_eq!(
            entity.web_property_ref.and_then(|r| r.id).as_deref(),
            Some("UA-1-1")
        );
        assert_eq!(link.permissions.and_then(|p| p.local), Some(vec![]));
    }

    #[test]
    fn test_paths_per_entity_level() {
        let client = client();

        let account = AccountUserLinksService::new(Arc::clone(&client)).delete("1", "1:abc");
        assert_eq!(
            account.call().path(),
            "management/accounts/1/entityUserLinks/1%3Aabc"
        );

        let property = WebpropertyUserLinksService::new(Arc::clone(&client)).list("1", "UA-1-1");
        assert_eq!(
            property.call().path(),
            "management/accounts/1/webproperties/UA-1-1/entityUserLinks"
        );

        let view = ProfileUserLinksService::new(client).list("1", "UA-1-1", "10");
        assert_eq!(
            view.call().path(),
            "management/accounts/1/webproperties/UA-1-1/profiles/10/entityUserLinks"
        );
    }
}
