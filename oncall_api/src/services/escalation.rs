use crate::query::{ListEscalationChainOptions, ListEscalationOptions};
use crate::types::{
    CreateEscalationChainOptions, CreateEscalationOptions, Escalation, EscalationChain,
    PaginatedResponse, UpdateEscalationChainOptions, UpdateEscalationOptions,
};
use crate::{Client, Result};

use super::{collection_path, member_path};

const ESCALATION_CHAINS: &str = "escalation_chains";
const ESCALATION_POLICIES: &str = "escalation_policies";

pub struct EscalationChainService<'a> {
    client: &'a Client,
}

impl<'a> EscalationChainService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn list(
        &self,
        options: &ListEscalationChainOptions,
    ) -> Result<PaginatedResponse<EscalationChain>> {
        self.client
            .get(&collection_path(ESCALATION_CHAINS), options)
            .await
    }

    pub async fn get(&self, id: &str) -> Result<EscalationChain> {
        self.client
            .get_one(&member_path(ESCALATION_CHAINS, id))
            .await
    }

    pub async fn create(&self, options: &CreateEscalationChainOptions) -> Result<EscalationChain> {
        self.client
            .post(&collection_path(ESCALATION_CHAINS), options)
            .await
    }

    pub async fn update(
        &self,
        id: &str,
        options: &UpdateEscalationChainOptions,
    ) -> Result<EscalationChain> {
        self.client
            .put(&member_path(ESCALATION_CHAINS, id), options)
            .await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.client
            .delete(&member_path(ESCALATION_CHAINS, id))
            .await
    }
}

/// Escalation policies, served under `escalation_policies`.
pub struct EscalationService<'a> {
    client: &'a Client,
}

impl<'a> EscalationService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn list(
        &self,
        options: &ListEscalationOptions,
    ) -> Result<PaginatedResponse<Escalation>> {
        self.client
            .get(&collection_path(ESCALATION_POLICIES), options)
            .await
    }

    pub async fn get(&self, id: &str) -> Result<Escalation> {
        self.client
            .get_one(&member_path(ESCALATION_POLICIES, id))
            .await
    }

    pub async fn create(&self, options: &CreateEscalationOptions) -> Result<Escalation> {
        self.client
            .post(&collection_path(ESCALATION_POLICIES), options)
            .await
    }

    pub async fn update(&self, id: &str, options: &UpdateEscalationOptions) -> Result<Escalation> {
        self.client
            .put(&member_path(ESCALATION_POLICIES, id), options)
            .await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.client
            .delete(&member_path(ESCALATION_POLICIES, id))
            .await
    }
}
