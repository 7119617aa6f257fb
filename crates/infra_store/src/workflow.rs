//! In-memory dispute store and fulfillment status providers

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use core_kernel::{DisputeId, DocumentRef, DomainPort, DpoId, PortError};
use domain_workflow::{Dispute, DisputeStore, StatusProvider};

/// In-memory implementation of [`DisputeStore`]
#[derive(Debug, Default)]
pub struct InMemoryDisputeStore {
    disputes: Arc<RwLock<HashMap<DisputeId, Dispute>>>,
}

impl InMemoryDisputeStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DomainPort for InMemoryDisputeStore {}

#[async_trait]
impl DisputeStore for InMemoryDisputeStore {
    async fn get(&self, id: DisputeId) -> Result<Dispute, PortError> {
        self.disputes
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| PortError::not_found("Dispute", id))
    }

    async fn insert(&self, dispute: Dispute) -> Result<(), PortError> {
        let mut disputes = self.disputes.write().await;
        if disputes.contains_key(&dispute.id) {
            return Err(PortError::conflict(format!(
                "dispute {} already exists",
                dispute.id
            )));
        }
        if disputes
            .values()
            .any(|existing| existing.is_open() && existing.document == dispute.document)
        {
            return Err(PortError::conflict(format!(
                "document {} already has an open dispute",
                dispute.document
            )));
        }
        disputes.insert(dispute.id, dispute);
        Ok(())
    }

    async fn update(
        &self,
        expected_version: u32,
        mut dispute: Dispute,
    ) -> Result<Dispute, PortError> {
        let mut disputes = self.disputes.write().await;
        let current = disputes
            .get(&dispute.id)
            .ok_or_else(|| PortError::not_found("Dispute", dispute.id))?;
        if current.version != expected_version {
            return Err(PortError::conflict(format!(
                "version mismatch on dispute {}: expected {}, found {}",
                dispute.id, expected_version, current.version
            )));
        }
        dispute.version = expected_version + 1;
        disputes.insert(dispute.id, dispute.clone());
        Ok(dispute)
    }

    async fn find_open_by_document(
        &self,
        document: DocumentRef,
    ) -> Result<Option<Dispute>, PortError> {
        Ok(self
            .disputes
            .read()
            .await
            .values()
            .find(|dispute| dispute.is_open() && dispute.document == document)
            .cloned())
    }

    async fn list_open(&self) -> Result<Vec<Dispute>, PortError> {
        Ok(self
            .disputes
            .read()
            .await
            .values()
            .filter(|dispute| dispute.is_open())
            .cloned()
            .collect())
    }
}

/// Status provider fed from memory. Stands in for a collaborator system
/// that reports per-order stage statuses.
#[derive(Debug)]
pub struct InMemoryStatusFeed {
    stage: &'static str,
    statuses: Arc<RwLock<HashMap<DpoId, String>>>,
}

impl InMemoryStatusFeed {
    pub fn new(stage: &'static str) -> Self {
        Self {
            stage,
            statuses: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Records the status this collaborator reports for an order
    pub async fn set_status(&self, order_id: DpoId, status: impl Into<String>) {
        self.statuses.write().await.insert(order_id, status.into());
    }
}

impl DomainPort for InMemoryStatusFeed {}

#[async_trait]
impl StatusProvider for InMemoryStatusFeed {
    fn stage(&self) -> &'static str {
        self.stage
    }

    async fn status_for(&self, order_id: DpoId) -> Result<String, PortError> {
        Ok(self
            .statuses
            .read()
            .await
            .get(&order_id)
            .cloned()
            .unwrap_or_else(|| "not_started".to_string()))
    }
}

/// Status provider whose backing system is down. Every poll fails, which
/// the tracker degrades to an unknown stage status.
#[derive(Debug, Clone, Copy)]
pub struct UnreachableProvider {
    stage: &'static str,
}

impl UnreachableProvider {
    pub fn new(stage: &'static str) -> Self {
        Self { stage }
    }
}

impl DomainPort for UnreachableProvider {}

#[async_trait]
impl StatusProvider for UnreachableProvider {
    fn stage(&self) -> &'static str {
        self.stage
    }

    async fn status_for(&self, _order_id: DpoId) -> Result<String, PortError> {
        Err(PortError::unavailable(self.stage))
    }
}
