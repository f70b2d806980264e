use crate::query::{ListCustomActionOptions, ListWebhookOptions};
use crate::types::{
    CreateCustomActionOptions, CreateWebhookOptions, CustomAction, PaginatedResponse,
    UpdateCustomActionOptions, UpdateWebhookOptions, Webhook,
};
use crate::{Client, Result};

use super::{collection_path, member_path};

const WEBHOOKS: &str = "webhooks";
const ACTIONS: &str = "actions";

pub struct WebhookService<'a> {
    client: &'a Client,
}

impl<'a> WebhookService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn list(&self, options: &ListWebhookOptions) -> Result<PaginatedResponse<Webhook>> {
        self.client.get(&collection_path(WEBHOOKS), options).await
    }

    pub async fn get(&self, id: &str) -> Result<Webhook> {
        self.client.get_one(&member_path(WEBHOOKS, id)).await
    }

    pub async fn create(&self, options: &CreateWebhookOptions) -> Result<Webhook> {
        self.client.post(&collection_path(WEBHOOKS), options).await
    }

    pub async fn update(&self, id: &str, options: &UpdateWebhookOptions) -> Result<Webhook> {
        self.client.put(&member_path(WEBHOOKS, id), options).await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.client.delete(&member_path(WEBHOOKS, id)).await
    }
}

/// Custom actions, served under `actions`.
pub struct CustomActionService<'a> {
    client: &'a Client,
}

impl<'a> CustomActionService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn list(
        &self,
        options: &ListCustomActionOptions,
    ) -> Result<PaginatedResponse<CustomAction>> {
        self.client.get(&collection_path(ACTIONS), options).await
    }

    pub async fn get(&self, id: &str) -> Result<CustomAction> {
        self.client.get_one(&member_path(ACTIONS, id)).await
    }

    pub async fn create(&self, options: &CreateCustomActionOptions) -> Result<CustomAction> {
        self.client.post(&collection_path(ACTIONS), options).await
    }

    pub async fn update(
        &self,
        id: &str,
        options: &UpdateCustomActionOptions,
    ) -> Result<CustomAction> {
        self.client.put(&member_path(ACTIONS, id), options).await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.client.delete(&member_path(ACTIONS, id)).await
    }
}
