//! Account provisioning.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::clients::{HttpClient, HttpMethod};
use crate::rest::resources::v3::accounts::Account;
use crate::rest::resources::v3::profiles::Profile;
use crate::rest::resources::v3::webproperties::Webproperty;
use crate::rest::{api_method, api_resource, Call, ServerResponse};

/// A ticket used to create an account through the sign-up flow.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AccountTicket {
    /// Account to create.
    pub account: Option<Account>,
    /// Ticket ID.
    pub id: Option<String>,
    /// Always `analytics#accountTicket`.
    pub kind: Option<String>,
    /// View to create.
    pub profile: Option<Profile>,
    /// URI the user is sent to after accepting the terms of service.
    pub redirect_uri: Option<String>,
    /// Web property to create.
    pub webproperty: Option<Webproperty>,
    /// Reply metadata.
    #[serde(skip)]
    pub server_response: ServerResponse,
}

/// Request body of `createAccountTree`.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AccountTreeRequest {
    /// Name of the account to create.
    pub account_name: Option<String>,
    /// Always `analytics#accountTreeRequest`.
    pub kind: Option<String>,
    /// Name of the view to create.
    pub profile_name: Option<String>,
    /// Time zone of the view.
    pub timezone: Option<String>,
    /// Name of the web property to create.
    pub webproperty_name: Option<String>,
    /// Website URL of the web property.
    pub website_url: Option<String>,
}

/// Reply of `createAccountTree`.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AccountTreeResponse {
    /// The created account.
    pub account: Option<Account>,
    /// Always `analytics#accountTreeResponse`.
    pub kind: Option<String>,
    /// The created view.
    pub profile: Option<Profile>,
    /// The created web property.
    pub webproperty: Option<Webproperty>,
    /// Reply metadata.
    #[serde(skip)]
    pub server_response: ServerResponse,
}

api_resource!(AccountTicket, AccountTreeResponse);

/// Endpoints of `provisioning`.
#[derive(Debug, Clone)]
pub struct ProvisioningService {
    client: Arc<HttpClient>,
}

impl ProvisioningService {
    pub(crate) const fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    /// Creates an account ticket.
    pub fn create_account_ticket(
        &self,
        ticket: &AccountTicket,
    ) -> ProvisioningCreateAccountTicketCall {
        ProvisioningCreateAccountTicketCall {
            call: Call::new(
                &self.client,
                HttpMethod::Post,
                "provisioning/createAccountTicket",
            )
            .json_body(ticket),
        }
    }

    /// Provisions an account, web property and view in one request.
    pub fn create_account_tree(
        &self,
        request: &AccountTreeRequest,
    ) -> ProvisioningCreateAccountTreeCall {
        ProvisioningCreateAccountTreeCall {
            call: Call::new(
                &self.client,
                HttpMethod::Post,
                "provisioning/createAccountTree",
            )
            .json_body(request),
        }
    }
}

/// `POST provisioning/createAccountTicket`.
#[derive(Debug)]
#[must_use = "call builders do nothing until `send` is awaited"]
pub struct ProvisioningCreateAccountTicketCall {
    call: Call,
}

/// `POST provisioning/createAccountTree`.
#[derive(Debug)]
#[must_use = "call builders do nothing until `send` is awaited"]
pub struct ProvisioningCreateAccountTreeCall {
    call: Call,
}

api_method!(ProvisioningCreateAccountTicketCall => AccountTicket);
api_method!(ProvisioningCreateAccountTreeCall => AccountTreeResponse);
