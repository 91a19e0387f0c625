//! The root service of the crate.

use std::sync::Arc;

use crate::clients::{HttpClient, HttpError};
use crate::config::AnalyticsConfig;
use crate::rest::resources::v3::{
    DataService, ManagementService, MetadataService, ProvisioningService, UserDeletionService,
};

/// Entry point to every resource group of the Analytics v3 API.
///
/// The service holds a shared [`HttpClient`]; cloning it, or any of the
/// group services it hands out, is cheap.
///
/// # Example
///
/// ```rust,ignore
/// use analytics_api::{Analytics, AnalyticsConfig};
/// use analytics_api::rest::ApiMethod;
///
/// // `authorized` is a reqwest::Client whose default headers carry an
/// // OAuth bearer token.
/// let analytics = Analytics::new(authorized, &AnalyticsConfig::default());
/// let summaries = analytics.management().account_summaries().list().send().await?;
/// ```
#[derive(Debug, Clone)]
pub struct Analytics {
    client: Arc<HttpClient>,
}

// Verify Analytics is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Analytics>();
};

impl Analytics {
    /// Creates the service over a caller-supplied transport.
    ///
    /// Authorization is the transport's concern; this crate never adds
    /// credentials of its own.
    #[must_use]
    pub fn new(client: reqwest::Client, config: &AnalyticsConfig) -> Self {
        Self::with_http_client(HttpClient::new(client, config))
    }

    /// Creates the service with a default transport.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the transport cannot be built.
    pub fn from_config(config: &AnalyticsConfig) -> Result<Self, HttpError> {
        Ok(Self::with_http_client(HttpClient::from_config(config)?))
    }

    /// Creates the service over an existing [`HttpClient`].
    #[must_use]
    pub fn with_http_client(client: HttpClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub fn http_client(&self) -> &HttpClient {
        &self.client
    }

    /// Reporting queries (`data.ga`, `data.mcf`, `data.realtime`).
    #[must_use]
    pub fn data(&self) -> DataService {
        DataService::new(Arc::clone(&self.client))
    }

    /// Account, property, view and configuration management.
    #[must_use]
    pub fn management(&self) -> ManagementService {
        ManagementService::new(Arc::clone(&self.client))
    }

    /// Dimension and metric metadata.
    #[must_use]
    pub fn metadata(&self) -> MetadataService {
        MetadataService::new(Arc::clone(&self.client))
    }

    /// Account provisioning.
    #[must_use]
    pub fn provisioning(&self) -> ProvisioningService {
        ProvisioningService::new(Arc::clone(&self.client))
    }

    /// User deletion requests.
    #[must_use]
    pub fn user_deletion(&self) -> UserDeletionService {
        UserDeletionService::new(Arc::clone(&self.client))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BaseUrl;
    use crate::rest::ApiMethod;

    #[test]
    fn test_groups_share_the_configured_base_url() {
        let config = AnalyticsConfig::builder()
            .base_url(BaseUrl::new("http://127.0.0.1:9000/analytics/v3").unwrap())
            .build()
            .unwrap();
        let analytics = Analytics::from_config(&config).unwrap();

        let url = analytics.metadata().columns().list("ga").url();
        assert_eq!(
            url,
            "http://127.0.0.1:9000/analytics/v3/metadata/ga/columns?alt=json"
        );

        let url = analytics
            .management()
            .goals()
            .list("1", "UA-1-1", "~all")
            .url();
        assert_eq!(
            url,
            "http://127.0.0.1:9000/analytics/v3/management/accounts/1/webproperties/UA-1-1/profiles/~all/goals?alt=json"
        );
    }

    #[test]
    fn test_user_agent_prefix_reaches_http_client() {
        let config = AnalyticsConfig::builder()
            .user_agent_prefix("reporter/2.0")
            .build()
            .unwrap();
        let analytics = Analytics::from_config(&config).unwrap();

        let user_agent = &analytics.http_client().default_headers()["User-Agent"];
        assert!(user_agent.starts_with("reporter/2.0 | analytics-api-rust v"));
    }
}
