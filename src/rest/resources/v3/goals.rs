//! Goal resource and the `management.goals` endpoints.
//!
//! A goal has exactly one kind of details, selected by `goal_type`:
//! `URL_DESTINATION`, `VISIT_TIME_ON_SITE`, `VISIT_NUM_PAGES` or `EVENT`.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{HttpClient, HttpMethod};
use crate::rest::resources::v3::common::{Paginated, ParentLink};
use crate::rest::{api_method, api_resource, Call, Int64, ServerResponse};

const COLLECTION: &str =
    "management/accounts/{accountId}/webproperties/{webPropertyId}/profiles/{profileId}/goals";
const ITEM: &str =
    "management/accounts/{accountId}/webproperties/{webPropertyId}/profiles/{profileId}/goals/{goalId}";

/// One condition of an event goal.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EventCondition {
    /// For `VALUE` conditions: `LESS_THAN`, `GREATER_THAN` or `EQUAL`.
    pub comparison_type: Option<String>,
    /// For `VALUE` conditions: the value compared against.
    #[serde_as(as = "Option<Int64>")]
    pub comparison_value: Option<i64>,
    /// Expression used for `CATEGORY`, `ACTION` or `LABEL` conditions.
    pub expression: Option<String>,
    /// `BEGINS_WITH`, `EXACT` or `REGEXP`.
    pub match_type: Option<String>,
    /// `CATEGORY`, `ACTION`, `LABEL` or `VALUE`.
    #[serde(rename = "type")]
    pub condition_type: Option<String>,
}

/// Details of an event goal.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EventDetails {
    /// Conditions that must all match.
    pub event_conditions: Option<Vec<EventCondition>>,
    /// Whether the event value is used as the goal value.
    pub use_event_value: Option<bool>,
}

/// One step of a destination funnel.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct UrlDestinationStep {
    /// Step name.
    pub name: Option<String>,
    /// 1-based step number.
    pub number: Option<i64>,
    /// URL for this step.
    pub url: Option<String>,
}

/// Details of a URL destination goal.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UrlDestinationDetails {
    /// Whether URL matching is case sensitive.
    pub case_sensitive: Option<bool>,
    /// Whether the first funnel step is required.
    pub first_step_required: Option<bool>,
    /// `HEAD`, `EXACT` or `REGEX`.
    pub match_type: Option<String>,
    /// Funnel steps.
    pub steps: Option<Vec<UrlDestinationStep>>,
    /// Destination URL.
    pub url: Option<String>,
}

/// Details of a pages-per-session or time-on-site goal.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonDetails {
    /// `LESS_THAN`, `GREATER_THAN` or `EQUAL`.
    pub comparison_type: Option<String>,
    /// Pages, or seconds on site, compared against.
    #[serde_as(as = "Option<Int64>")]
    pub comparison_value: Option<i64>,
}

/// A goal.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    /// Account ID to which this goal belongs.
    pub account_id: Option<String>,
    /// Whether the goal is active.
    pub active: Option<bool>,
    /// Time this goal was created.
    pub created: Option<DateTime<Utc>>,
    /// Details of an `EVENT` goal.
    pub event_details: Option<EventDetails>,
    /// Goal ID.
    pub id: Option<String>,
    /// Internal ID for the web property to which this goal belongs.
    pub internal_web_property_id: Option<String>,
    /// Always `analytics#goal`.
    pub kind: Option<String>,
    /// Goal name.
    pub name: Option<String>,
    /// Link to the parent view.
    pub parent_link: Option<ParentLink>,
    /// View ID to which this goal belongs.
    pub profile_id: Option<String>,
    /// Link for this goal.
    pub self_link: Option<String>,
    /// Goal type.
    #[serde(rename = "type")]
    pub goal_type: Option<String>,
    /// Time this goal was last modified.
    pub updated: Option<DateTime<Utc>>,
    /// Details of a `URL_DESTINATION` goal.
    pub url_destination_details: Option<UrlDestinationDetails>,
    /// Goal value.
    pub value: Option<f64>,
    /// Details of a `VISIT_NUM_PAGES` goal.
    pub visit_num_pages_details: Option<ComparisonDetails>,
    /// Details of a `VISIT_TIME_ON_SITE` goal.
    pub visit_time_on_site_details: Option<ComparisonDetails>,
    /// Web property ID of the form `UA-XXXXX-YY`.
    pub web_property_id: Option<String>,
    /// Reply metadata.
    #[serde(skip)]
    pub server_response: ServerResponse,
}

/// A collection of goals.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Goals {
    /// The goals on this page.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<Goal>,
    /// Maximum number of entries the response can contain.
    pub items_per_page: Option<i64>,
    /// Always `analytics#goals`.
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

api_resource!(Goal, Goals);

/// Endpoints of `management.goals`.
#[derive(Debug, Clone)]
pub struct GoalsService {
    client: Arc<HttpClient>,
}

impl GoalsService {
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
        goal_id: &str,
    ) -> Call {
        Call::new(&self.client, method, ITEM)
            .path_param("accountId", account_id)
            .path_param("webPropertyId", web_property_id)
            .path_param("profileId", profile_id)
            .path_param("goalId", goal_id)
    }

    /// Gets a goal.
    pub fn get(
        &self,
        account_id: &str,
        web_property_id: &str,
        profile_id: &str,
        goal_id: &str,
    ) -> GoalsGetCall {
        GoalsGetCall {
            call: self.item(HttpMethod::Get, account_id, web_property_id, profile_id, goal_id),
        }
    }

    /// Creates a new goal.
    pub fn insert(
        &self,
        account_id: &str,
        web_property_id: &str,
        profile_id: &str,
        goal: &Goal,
    ) -> GoalsInsertCall {
        GoalsInsertCall {
            call: self
                .collection(HttpMethod::Post, account_id, web_property_id, profile_id)
                .json_body(goal),
        }
    }

    /// Lists goals. Any id may be `~all`.
    pub fn list(&self, account_id: &str, web_property_id: &str, profile_id: &str) -> GoalsListCall {
        GoalsListCall {
            call: self.collection(HttpMethod::Get, account_id, web_property_id, profile_id),
        }
    }

    /// Updates an existing goal. Only set fields are sent.
    pub fn patch(
        &self,
        account_id: &str,
        web_property_id: &str,
        profile_id: &str,
        goal_id: &str,
        goal: &Goal,
    ) -> GoalsPatchCall {
        GoalsPatchCall {
            call: self
                .item(HttpMethod::Patch, account_id, web_property_id, profile_id, goal_id)
                .json_body(goal),
        }
    }

    /// Replaces an existing goal.
    pub fn update(
        &self,
        account_id: &str,
        web_property_id: &str,
        profile_id: &str,
        goal_id: &str,
        goal: &Goal,
    ) -> GoalsUpdateCall {
        GoalsUpdateCall {
            call: self
                .item(HttpMethod::Put, account_id, web_property_id, profile_id, goal_id)
                .json_body(goal),
        }
    }
}

/// `GET .../goals/{goalId}`.
#[derive(Debug)]
#[must_use = "call builders do nothing until `send` is awaited"]
pub struct GoalsGetCall {
    call: Call,
}

/// `POST .../goals`.
#[derive(Debug)]
#[must_use = "call builders do nothing until `send` is awaited"]
pub struct GoalsInsertCall {
    call: Call,
}

/// `GET .../goals`.
#[derive(Debug)]
#[must_use = "call builders do nothing until `send` is awaited"]
pub struct GoalsListCall {
    call: Call,
}

/// `PATCH .../goals/{goalId}`.
#[derive(Debug)]
#[must_use = "call builders do nothing until `send` is awaited"]
pub struct GoalsPatchCall {
    call: Call,
}

/// `PUT .../goals/{goalId}`.
#[derive(Debug)]
#[must_use = "call builders do nothing until `send` is awaited"]
pub struct GoalsUpdateCall {
    call: Call,
}

api_method!(GoalsGetCall => Goal, conditional);
api_method!(GoalsInsertCall => Goal);
api_method!(GoalsListCall => Goals, conditional);
api_method!(GoalsPatchCall => Goal);
api_method!(GoalsUpdateCall => Goal);
impl Paginated for GoalsListCall {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_goal_serialization() {
        let goal = Goal {
            name: Some("Video played".to_string()),
            goal_type: Some("EVENT".to_string()),
            active: Some(true),
            value: Some(0.0),
            event_details: Some(EventDetails {
                use_event_value: Some(false),
                event_conditions: Some(vec![
                    EventCondition {
                        condition_type: Some("CATEGORY".to_string()),
                        match_type: Some("EXACT".to_string()),
                        expression: Some("video".to_string()),
                        ..Default::default()
                    },
                    EventCondition {
                        condition_type: Some("VALUE".to_string()),
                        comparison_type: Some("GREATER_THAN".to_string()),
                        comparison_value: Some(0),
                        ..Default::default()
                    },
                ]),
            }),
            ..Default::default()
        };

        let json = serde_json::to_value(&goal).unwrap();
        assert_eq!(json["type"], "EVENT");
        assert_eq!(json["value"], 0.0);
        assert_eq!(json["eventDetails"]["useEventValue"], false);
        assert_eq!(
            json["eventDetails"]["eventConditions"][1]["comparisonValue"],
            "0"
        );
        assert!(json["eventDetails"]["eventConditions"][0]
            .get("comparisonValue")
            .is_none());
    }

    #[test]
    fn test_destination_goal_deserialization() {
        let json = r#"{
            "id": "1",
            "type": "URL_DESTINATION",
            "value": 12.5,
            "urlDestinationDetails": {
                "url": "/thanks",
                "matchType": "HEAD",
                "firstStepRequired": true,
                "steps": [{"number": 1, "name": "Cart", "url": "/cart"}]
            },
            "visitTimeOnSiteDetails": {"comparisonType": "GREATER_THAN", "comparisonValue": "300"}
        }"#;

        let goal: Goal = serde_json::from_str(json).unwrap();
        let details = goal.url_destination_details.unwrap();

        assert_eq!(goal.value, Some(12.5));
        assert_eq!(details.first_step_required, Some(true));
        assert_eq!(details.steps.unwrap()[0].number, Some(1));
        assert_eq!(
            goal.visit_time_on_site_details.unwrap().comparison_value,
            Some(300)
        );
    }
}
