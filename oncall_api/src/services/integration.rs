use crate::query::{ListIntegrationOptions, ListRouteOptions};
use crate::types::{
    CreateIntegrationOptions, CreateRouteOptions, Integration, PaginatedResponse, Route,
    UpdateIntegrationOptions, UpdateRouteOptions,
};
use crate::{Client, Result};

use super::{collection_path, member_path};

const INTEGRATIONS: &str = "integrations";
const ROUTES: &str = "routes";

pub struct IntegrationService<'a> {
    client: &'a Client,
}

impl<'a> IntegrationService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn list(
        &self,
        options: &ListIntegrationOptions,
    ) -> Result<PaginatedResponse<Integration>> {
        self.client.get(&collection_path(INTEGRATIONS), options).await
    }

    pub async fn get(&self, id: &str) -> Result<Integration> {
        self.client.get_one(&member_path(INTEGRATIONS, id)).await
    }

    pub async fn create(&self, options: &CreateIntegrationOptions) -> Result<Integration> {
        self.client.post(&collection_path(INTEGRATIONS), options).await
    }

    pub async fn update(
        &self,
        id: &str,
        options: &UpdateIntegrationOptions,
    ) -> Result<Integration> {
        self.client.put(&member_path(INTEGRATIONS, id), options).await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.client.delete(&member_path(INTEGRATIONS, id)).await
    }
}

pub struct RouteService<'a> {
    client: &'a Client,
}

impl<'a> RouteService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn list(&self, options: &ListRouteOptions) -> Result<PaginatedResponse<Route>> {
        self.client.get(&collection_path(ROUTES), options).await
    }

    pub async fn get(&self, id: &str) -> Result<Route> {
        self.client.get_one(&member_path(ROUTES, id)).await
    }

    pub async fn create(&self, options: &CreateRouteOptions) -> Result<Route> {
        let route = self.client.post(&collection_path(ROUTES), options).await?;
        tracing::debug!(integration_id = %options.integration_id, "route created");
        Ok(route)
    }

    pub async fn update(&self, id: &str, options: &UpdateRouteOptions) -> Result<Route> {
        self.client.put(&member_path(ROUTES, id), options).await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.client.delete(&member_path(ROUTES, id)).await
    }
}
