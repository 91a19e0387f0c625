//! Types shared by several management resources.
//!
//! This module provides the link and reference structures embedded inside
//! resources, plus the [`Paginated`] trait implemented by list builders.

use serde::{Deserialize, Serialize};

use crate::rest::ApiMethod;

/// Link to a child collection of a resource.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ChildLink {
    /// Link to the list of child resources.
    pub href: Option<String>,
    /// Resource type of the child collection (e.g., `analytics#webproperties`).
    #[serde(rename = "type")]
    pub link_type: Option<String>,
}

/// Link to the parent of a resource.
pub type ParentLink = ChildLink;

/// Permissions the authenticated user (or a linked user) has on an entity.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Permissions {
    /// All permissions, including those inherited from parent entities.
    /// Read-only.
    pub effective: Option<Vec<String>>,
    /// Permissions granted directly on this entity.
    pub local: Option<Vec<String>>,
}

/// A lightweight reference to an account.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AccountRef {
    /// Link for this account.
    pub href: Option<String>,
    /// Account ID.
    pub id: Option<String>,
    /// Always `analytics#accountRef`.
    pub kind: Option<String>,
    /// Account name.
    pub name: Option<String>,
}

/// A lightweight reference to a web property.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WebPropertyRef {
    /// Account ID to which this web property belongs.
    pub account_id: Option<String>,
    /// Link for this web property.
    pub href: Option<String>,
    /// Web property ID of the form `UA-XXXXX-YY`.
    pub id: Option<String>,
    /// Internal ID for this web property.
    pub internal_web_property_id: Option<String>,
    /// Always `analytics#webPropertyRef`.
    pub kind: Option<String>,
    /// Name of this web property.
    pub name: Option<String>,
}

/// A lightweight reference to a view (profile).
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRef {
    /// Account ID to which this view belongs.
    pub account_id: Option<String>,
    /// Link for this view.
    pub href: Option<String>,
    /// View ID.
    pub id: Option<String>,
    /// Internal ID for the web property to which this view belongs.
    pub internal_web_property_id: Option<String>,
    /// Always `analytics#profileRef`.
    pub kind: Option<String>,
    /// Name of this view.
    pub name: Option<String>,
    /// Web property ID of the form `UA-XXXXX-YY`.
    pub web_property_id: Option<String>,
}

/// A reference to a user.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct UserRef {
    /// Email address of the user.
    pub email: Option<String>,
    /// User ID.
    pub id: Option<String>,
    /// Always `analytics#userRef`.
    pub kind: Option<String>,
}

/// List builders that accept `max-results` and `start-index`.
///
/// Pagination is never followed automatically; callers pass the next
/// `start_index` themselves.
pub trait Paginated: ApiMethod {
    /// Maximum number of entries to include in this response.
    #[must_use]
    fn max_results(self, max_results: i64) -> Self {
        self.param("max-results", max_results)
    }

    /// 1-based index of the first entity to retrieve.
    #[must_use]
    fn start_index(self, start_index: i64) -> Self {
        self.param("start-index", start_index)
    }
}
