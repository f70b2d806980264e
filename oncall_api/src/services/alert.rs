use crate::query::{ListAlertGroupOptions, ListAlertOptions, ListResolutionNoteOptions};
use crate::types::{Alert, AlertGroup, PaginatedResponse, ResolutionNote};
use crate::{Client, Result};

use super::collection_path;

const ALERTS: &str = "alerts";
const ALERT_GROUPS: &str = "alert_groups";
const RESOLUTION_NOTES: &str = "resolution_notes";

pub struct AlertService<'a> {
    client: &'a Client,
}

impl<'a> AlertService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn list(&self, options: &ListAlertOptions) -> Result<PaginatedResponse<Alert>> {
        self.client.get(&collection_path(ALERTS), options).await
    }
}

pub struct AlertGroupService<'a> {
    client: &'a Client,
}

impl<'a> AlertGroupService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Lists alert groups. The `started_at` range is validated first; an
    /// invalid range fails without sending a request.
    pub async fn list(
        &self,
        options: &ListAlertGroupOptions,
    ) -> Result<PaginatedResponse<AlertGroup>> {
        options.validate()?;
        self.client.get(&collection_path(ALERT_GROUPS), options).await
    }
}

pub struct ResolutionNoteService<'a> {
    client: &'a Client,
}

impl<'a> ResolutionNoteService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn list(
        &self,
        options: &ListResolutionNoteOptions,
    ) -> Result<PaginatedResponse<ResolutionNote>> {
        self.client
            .get(&collection_path(RESOLUTION_NOTES), options)
            .await
    }
}
