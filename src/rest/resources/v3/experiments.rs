//! Content experiments of a view.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{HttpClient, HttpMethod};
use crate::rest::resources::v3::common::{Paginated, ParentLink};
use crate::rest::{api_method, api_resource, Call, ServerResponse};

const COLLECTION: &str = "management/accounts/{accountId}/webproperties/{webPropertyId}/profiles/{profileId}/experiments";
const ITEM: &str = "management/accounts/{accountId}/webproperties/{webPropertyId}/profiles/{profileId}/experiments/{experimentId}";

/// One variation of an experiment.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExperimentVariation {
    /// Name of the variation.
    pub name: Option<String>,
    /// `ACTIVE` or `INACTIVE`.
    pub status: Option<String>,
    /// URL of the variation.
    pub url: Option<String>,
    /// Share of traffic sent to this variation, between 0 and 1.
    pub weight: Option<f64>,
    /// Whether the variation won the experiment.
    pub won: Option<bool>,
}

/// A content experiment.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Experiment {
    /// Account ID.
    pub account_id: Option<String>,
    /// Time the experiment was created.
    pub created: Option<DateTime<Utc>>,
    /// Notes about the experiment.
    pub description: Option<String>,
    /// Whether the experiment can be edited in the web interface.
    pub editable_in_ga_ui: Option<bool>,
    /// End time of the experiment.
    pub end_time: Option<DateTime<Utc>>,
    /// Whether traffic is split evenly across variations.
    pub equal_weighting: Option<bool>,
    /// Experiment ID.
    pub id: Option<String>,
    /// Internal ID for the web property.
    pub internal_web_property_id: Option<String>,
    /// Always `analytics#experiment`.
    pub kind: Option<String>,
    /// Minimum length of the experiment, 3 to 90 days.
    pub minimum_experiment_length_in_days: Option<i64>,
    /// Experiment name.
    pub name: Option<String>,
    /// Metric the experiment optimizes, e.g. `ga:goal1Completions`.
    pub objective_metric: Option<String>,
    /// `MAXIMUM`, `MINIMUM` or `MATCH`.
    pub optimization_type: Option<String>,
    /// Link to the parent view.
    pub parent_link: Option<ParentLink>,
    /// View ID.
    pub profile_id: Option<String>,
    /// Why the experiment ended.
    pub reason_experiment_ended: Option<String>,
    /// Whether variation URLs are rewritten to the original URL.
    pub rewrite_variation_urls_as_original: Option<bool>,
    /// Link for this experiment.
    pub self_link: Option<String>,
    /// `REDIRECT`, `API` or `EXTERNAL`.
    pub serving_framework: Option<String>,
    /// Snippet of code to include on the control page.
    pub snippet: Option<String>,
    /// Start time of the experiment.
    pub start_time: Option<DateTime<Utc>>,
    /// `DRAFT`, `READY_TO_RUN`, `RUNNING` or `ENDED`.
    pub status: Option<String>,
    /// Share of traffic participating in the experiment, between 0 and 1.
    pub traffic_coverage: Option<f64>,
    /// Time the experiment was last modified.
    pub updated: Option<DateTime<Utc>>,
    /// Variations of the experiment. The first is the original.
    pub variations: Option<Vec<ExperimentVariation>>,
    /// Web property ID of the form `UA-XXXXX-YY`.
    pub web_property_id: Option<String>,
    /// Confidence level required to declare a winner, between 0 and 1.
    pub winner_confidence_level: Option<f64>,
    /// Whether a winner has been found.
    pub winner_found: Option<bool>,
    /// Reply metadata.
    #[serde(skip)]
    pub server_response: ServerResponse,
}

/// A collection of experiments.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Experiments {
    /// The experiments on this page.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<Experiment>,
    /// Maximum number of entries the response can contain.
    pub items_per_page: Option<i64>,
    /// Always `analytics#experiments`.
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

api_resource!(Experiment, Experiments);

/// Endpoints of `management.experiments`.
#[derive(Debug, Clone)]
pub struct ExperimentsService {
    client: Arc<HttpClient>,
}

impl ExperimentsService {
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
        experiment_id: &str,
    ) -> Call {
        Call::new(&self.client, method, ITEM)
            .path_param("accountId", account_id)
            .path_param("webPropertyId", web_property_id)
            .path_param("profileId", profile_id)
            .path_param("experimentId", experiment_id)
    }

    /// Deletes an experiment.
    pub fn delete(
        &self,
        account_id: &str,
        web_property_id: &str,
        profile_id: &str,
        experiment_id: &str,
    ) -> ExperimentsDeleteCall {
        ExperimentsDeleteCall {
            call: self.item(
                HttpMethod::Delete,
                account_id,
                web_property_id,
                profile_id,
                experiment_id,
            ),
        }
    }

    /// Gets an experiment.
    pub fn get(
        &self,
        account_id: &str,
        web_property_id: &str,
        profile_id: &str,
        experiment_id: &str,
    ) -> ExperimentsGetCall {
        ExperimentsGetCall {
            call: self.item(
                HttpMethod::Get,
                account_id,
                web_property_id,
                profile_id,
                experiment_id,
            ),
        }
    }

    /// Creates a new experiment.
    pub fn insert(
        &self,
        account_id: &str,
        web_property_id: &str,
        profile_id: &str,
        experiment: &Experiment,
    ) -> ExperimentsInsertCall {
        ExperimentsInsertCall {
            call: self
                .collection(HttpMethod::Post, account_id, web_property_id, profile_id)
                .json_body(experiment),
        }
    }

    /// Lists experiments of a view.
    pub fn list(
        &self,
        account_id: &str,
        web_property_id: &str,
        profile_id: &str,
    ) -> ExperimentsListCall {
        ExperimentsListCall {
            call: self.collection(HttpMethod::Get, account_id, web_property_id, profile_id),
        }
    }

    /// Updates an existing experiment. Only set fields are sent.
    pub fn patch(
        &self,
        account_id: &str,
        web_property_id: &str,
        profile_id: &str,
        experiment_id: &str,
        experiment: &Experiment,
    ) -> ExperimentsPatchCall {
        ExperimentsPatchCall {
            call: self
                .item(
                    HttpMethod::Patch,
                    account_id,
                    web_property_id,
                    profile_id,
                    experiment_id,
                )
                .json_body(experiment),
        }
    }

    /// Replaces an existing experiment.
    pub fn update(
        &self,
        account_id: &str,
        web_property_id: &str,
        profile_id: &str,
        experiment_id: &str,
        experiment: &Experiment,
    ) -> ExperimentsUpdateCall {
        ExperimentsUpdateCall {
            call: self
                .item(
                    HttpMethod::Put,
                    account_id,
                    web_property_id,
                    profile_id,
                    experiment_id,
                )
                .json_body(experiment),
        }
    }
}

/// `DELETE .../experiments/{experimentId}`.
#[derive(Debug)]
#[must_use = "call builders do nothing until `send` is awaited"]
pub struct ExperimentsDeleteCall {
    call: Call,
}

/// `GET .../experiments/{experimentId}`.
#[derive(Debug)]
#[must_use = "call builders do nothing until `send` is awaited"]
pub struct ExperimentsGetCall {
    call: Call,
}

/// `POST .../experiments`.
#[derive(Debug)]
#[must_use = "call builders do nothing until `send` is awaited"]
pub struct ExperimentsInsertCall {
    call: Call,
}

/// `GET .../experiments`.
#[derive(Debug)]
#[must_use = "call builders do nothing until `send` is awaited"]
pub struct ExperimentsListCall {
    call: Call,
}

/// `PATCH .../experiments/{experimentId}`.
#[derive(Debug)]
#[must_use = "call builders do nothing until `send` is awaited"]
pub struct ExperimentsPatchCall {
    call: Call,
}

/// `PUT .../experiments/{experimentId}`.
#[derive(Debug)]
#[must_use = "call builders do nothing until `send` is awaited"]
pub struct ExperimentsUpdateCall {
    call: Call,
}

api_method!(ExperimentsDeleteCall => ());
api_method!(ExperimentsGetCall => Experiment, conditional);
api_method!(ExperimentsInsertCall => Experiment);
api_method!(ExperimentsListCall => Experiments, conditional);
api_method!(ExperimentsPatchCall => Experiment);
api_method!(ExperimentsUpdateCall => Experiment);
impl Paginated for ExperimentsListCall {}
