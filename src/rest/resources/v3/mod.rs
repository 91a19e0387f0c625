//! Resources and endpoints of the Analytics v3 API.
//!
//! Each submodule holds the resource structures of one API resource, the
//! service that creates its call builders, and the builders themselves.
//!
//! # Available Resources
//!
//! ## Reporting
//!
//! - [`GaData`], [`McfData`], [`RealtimeData`] via [`DataService`]
//! - [`Columns`] via [`MetadataService`]
//!
//! ## Management
//!
//! All reached through [`ManagementService`]:
//!
//! - [`Account`], [`AccountSummary`], [`Webproperty`], [`Profile`]
//! - [`Goal`], [`Filter`], [`ProfileFilterLink`], [`Segment`]
//! - [`CustomDataSource`], [`Upload`], [`CustomDimension`], [`CustomMetric`]
//! - [`Experiment`], [`UnsampledReport`], [`RemarketingAudience`]
//! - [`EntityUserLink`] for account, web property and view permissions
//! - [`EntityAdWordsLink`] for Google Ads links
//! - [`HashClientIdResponse`] via `clientId.hashClientId`
//!
//! ## Provisioning and user deletion
//!
//! - [`AccountTicket`], [`AccountTreeResponse`] via [`ProvisioningService`]
//! - [`UserDeletionRequest`] via [`UserDeletionService`]
//!
//! Optional fields are `Option`s: `None` is left out of request bodies while
//! `Some` is always sent, even when it holds `false`, `0` or an empty string.

pub mod common;

mod account_summaries;
mod accounts;
mod client_id;
mod custom_data_sources;
mod custom_dimensions;
mod custom_metrics;
mod data;
mod entity_adwords_links;
mod entity_user_links;
mod experiments;
mod filters;
mod goals;
mod management;
mod metadata;
mod profile_filter_links;
mod profiles;
mod provisioning;
mod remarketing_audiences;
mod segments;
mod unsampled_reports;
mod uploads;
mod user_deletion;
mod webproperties;

pub use common::{
    AccountRef, ChildLink, Paginated, ParentLink, Permissions, ProfileRef, UserRef,
    WebPropertyRef,
};

pub use account_summaries::{
    AccountSummaries, AccountSummariesListCall, AccountSummariesService, AccountSummary,
    ProfileSummary, WebPropertySummary,
};
pub use accounts::{Account, Accounts, AccountsListCall, AccountsService};
pub use client_id::{
    ClientIdHashClientIdCall, ClientIdService, HashClientIdRequest, HashClientIdResponse,
};
pub use custom_data_sources::{
    CustomDataSource, CustomDataSources, CustomDataSourcesListCall, CustomDataSourcesService,
};
pub use custom_dimensions::{
    CustomDimension, CustomDimensions, CustomDimensionsGetCall, CustomDimensionsInsertCall,
    CustomDimensionsListCall, CustomDimensionsPatchCall, CustomDimensionsService,
    CustomDimensionsUpdateCall,
};
pub use custom_metrics::{
    CustomMetric, CustomMetrics, CustomMetricsGetCall, CustomMetricsInsertCall,
    CustomMetricsListCall, CustomMetricsPatchCall, CustomMetricsService, CustomMetricsUpdateCall,
};
pub use data::{
    ColumnHeader, ConversionPathStep, DataGaGetCall, DataGaService, DataMcfGetCall,
    DataMcfService, DataProfileInfo, DataQuery, DataRealtimeGetCall, DataRealtimeService,
    DataService, DataTable, DataTableCell, DataTableColumn, DataTableRow, GaData, McfData,
    McfDataCell, RealtimeData, RealtimeDataQuery,
};
pub use entity_adwords_links::{
    AdWordsAccount, AdWordsLinkedEntity, EntityAdWordsLink, EntityAdWordsLinks,
    WebPropertyAdWordsLinksDeleteCall, WebPropertyAdWordsLinksGetCall,
    WebPropertyAdWordsLinksInsertCall, WebPropertyAdWordsLinksListCall,
    WebPropertyAdWordsLinksPatchCall, WebPropertyAdWordsLinksService,
    WebPropertyAdWordsLinksUpdateCall,
};
pub use entity_user_links::{
    AccountUserLinksDeleteCall, AccountUserLinksInsertCall, AccountUserLinksListCall,
    AccountUserLinksService, AccountUserLinksUpdateCall, EntityUserLink, EntityUserLinks,
    LinkedEntity, ProfileUserLinksDeleteCall, ProfileUserLinksInsertCall,
    ProfileUserLinksListCall, ProfileUserLinksService, ProfileUserLinksUpdateCall,
    WebpropertyUserLinksDeleteCall, WebpropertyUserLinksInsertCall, WebpropertyUserLinksListCall,
    WebpropertyUserLinksService, WebpropertyUserLinksUpdateCall,
};
pub use experiments::{
    Experiment, ExperimentVariation, Experiments, ExperimentsDeleteCall, ExperimentsGetCall,
    ExperimentsInsertCall, ExperimentsListCall, ExperimentsPatchCall, ExperimentsService,
    ExperimentsUpdateCall,
};
pub use filters::{
    AdvancedDetails, CaseDetails, Filter, FilterExpression, FilterRef, Filters,
    FiltersDeleteCall, FiltersGetCall, FiltersInsertCall, FiltersListCall, FiltersPatchCall,
    FiltersService, FiltersUpdateCall, SearchAndReplaceDetails,
};
pub use goals::{
    ComparisonDetails, EventCondition, EventDetails, Goal, Goals, GoalsGetCall, GoalsInsertCall,
    GoalsListCall, GoalsPatchCall, GoalsService, GoalsUpdateCall, UrlDestinationDetails,
    UrlDestinationStep,
};
pub use management::ManagementService;
pub use metadata::{
    Column, Columns, MetadataColumnsListCall, MetadataColumnsService, MetadataService,
};
pub use profile_filter_links::{
    ProfileFilterLink, ProfileFilterLinks, ProfileFilterLinksDeleteCall,
    ProfileFilterLinksGetCall, ProfileFilterLinksInsertCall, ProfileFilterLinksListCall,
    ProfileFilterLinksPatchCall, ProfileFilterLinksService, ProfileFilterLinksUpdateCall,
};
pub use profiles::{
    Profile, Profiles, ProfilesDeleteCall, ProfilesGetCall, ProfilesInsertCall, ProfilesListCall,
    ProfilesPatchCall, ProfilesService, ProfilesUpdateCall,
};
pub use provisioning::{
    AccountTicket, AccountTreeRequest, AccountTreeResponse, ProvisioningCreateAccountTicketCall,
    ProvisioningCreateAccountTreeCall, ProvisioningService,
};
pub use remarketing_audiences::{
    AudienceDefinition, ExcludeConditions, IncludeConditions, LinkedForeignAccount,
    RemarketingAudience, RemarketingAudienceDeleteCall, RemarketingAudienceGetCall,
    RemarketingAudienceInsertCall, RemarketingAudienceListCall, RemarketingAudiencePatchCall,
    RemarketingAudienceService, RemarketingAudienceUpdateCall, RemarketingAudiences,
    StateBasedAudienceDefinition,
};
pub use segments::{Segment, Segments, SegmentsListCall, SegmentsService};
pub use unsampled_reports::{
    CloudStorageDownloadDetails, DriveDownloadDetails, UnsampledReport, UnsampledReports,
    UnsampledReportsDeleteCall, UnsampledReportsGetCall, UnsampledReportsInsertCall,
    UnsampledReportsListCall, UnsampledReportsService,
};
pub use uploads::{
    AnalyticsDataimportDeleteUploadDataRequest, Upload, Uploads, UploadsDeleteUploadDataCall,
    UploadsGetCall, UploadsListCall, UploadsService, UploadsUploadDataCall,
};
pub use user_deletion::{
    UserDeletionRequest, UserDeletionRequestId, UserDeletionRequestService,
    UserDeletionRequestUpsertCall, UserDeletionService,
};
pub use webproperties::{
    Webproperties, Webproperty, WebpropertiesGetCall, WebpropertiesInsertCall,
    WebpropertiesListCall, WebpropertiesPatchCall, WebpropertiesService, WebpropertiesUpdateCall,
};
