//! Entry point of the `management.*` endpoints.

use std::sync::Arc;

use crate::clients::HttpClient;
use crate::rest::resources::v3::{
    AccountSummariesService, AccountUserLinksService, AccountsService, ClientIdService,
    CustomDataSourcesService, CustomDimensionsService, CustomMetricsService, ExperimentsService,
    FiltersService, GoalsService, ProfileFilterLinksService, ProfileUserLinksService,
    ProfilesService, RemarketingAudienceService, SegmentsService, UnsampledReportsService,
    UploadsService, WebPropertyAdWordsLinksService, WebpropertiesService,
    WebpropertyUserLinksService,
};

/// Groups the management resources. Every accessor is cheap and shares the
/// underlying client.
#[derive(Debug, Clone)]
pub struct ManagementService {
    client: Arc<HttpClient>,
}

impl ManagementService {
    pub(crate) const fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    fn client(&self) -> Arc<HttpClient> {
        Arc::clone(&self.client)
    }

    #[must_use]
    pub fn account_summaries(&self) -> AccountSummariesService {
        AccountSummariesService::new(self.client())
    }

    #[must_use]
    pub fn account_user_links(&self) -> AccountUserLinksService {
        AccountUserLinksService::new(self.client())
    }

    #[must_use]
    pub fn accounts(&self) -> AccountsService {
        AccountsService::new(self.client())
    }

    #[must_use]
    pub fn client_id(&self) -> ClientIdService {
        ClientIdService::new(self.client())
    }

    #[must_use]
    pub fn custom_data_sources(&self) -> CustomDataSourcesService {
        CustomDataSourcesService::new(self.client())
    }

    #[must_use]
    pub fn custom_dimensions(&self) -> CustomDimensionsService {
        CustomDimensionsService::new(self.client())
    }

    #[must_use]
    pub fn custom_metrics(&self) -> CustomMetricsService {
        CustomMetricsService::new(self.client())
    }

    #[must_use]
    pub fn experiments(&self) -> ExperimentsService {
        ExperimentsService::new(self.client())
    }

    #[must_use]
    pub fn filters(&self) -> FiltersService {
        FiltersService::new(self.client())
    }

    #[must_use]
    pub fn goals(&self) -> GoalsService {
        GoalsService::new(self.client())
    }

    #[must_use]
    pub fn profile_filter_links(&self) -> ProfileFilterLinksService {
        ProfileFilterLinksService::new(self.client())
    }

    #[must_use]
    pub fn profile_user_links(&self) -> ProfileUserLinksService {
        ProfileUserLinksService::new(self.client())
    }

    #[must_use]
    pub fn profiles(&self) -> ProfilesService {
        ProfilesService::new(self.client())
    }

    #[must_use]
    pub fn remarketing_audience(&self) -> RemarketingAudienceService {
        RemarketingAudienceService::new(self.client())
    }

    #[must_use]
    pub fn segments(&self) -> SegmentsService {
        SegmentsService::new(self.client())
    }

    #[must_use]
    pub fn unsampled_reports(&self) -> UnsampledReportsService {
        UnsampledReportsService::new(self.client())
    }

    #[must_use]
    pub fn uploads(&self) -> UploadsService {
        UploadsService::new(self.client())
    }

    #[must_use]
    pub fn web_property_ad_words_links(&self) -> WebPropertyAdWordsLinksService {
        WebPropertyAdWordsLinksService::new(self.client())
    }

    #[must_use]
    pub fn webproperties(&self) -> WebpropertiesService {
        WebpropertiesService::new(self.client())
    }

    #[must_use]
    pub fn webproperty_user_links(&self) -> WebpropertyUserLinksService {
        WebpropertyUserLinksService::new(self.client())
    }
}
