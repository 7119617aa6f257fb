//! In-memory RFQ store

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use core_kernel::{DomainPort, PartyId, PortError, RfqId};
use domain_rfq::{Rfq, RfqStatus, RfqStore};

/// In-memory implementation of [`RfqStore`]
#[derive(Debug, Default)]
pub struct InMemoryRfqStore {
    rfqs: Arc<RwLock<HashMap<RfqId, Rfq>>>,
}

impl InMemoryRfqStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DomainPort for InMemoryRfqStore {}

#[async_trait]
impl RfqStore for InMemoryRfqStore {
    async fn get(&self, id: RfqId) -> Result<Rfq, PortError> {
        self.rfqs
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| PortError::not_found("Rfq", id))
    }

    async fn insert(&self, rfq: Rfq) -> Result<(), PortError> {
        let mut rfqs = self.rfqs.write().await;
        if rfqs.contains_key(&rfq.id) {
            return Err(PortError::conflict(format!("RFQ {} already exists", rfq.id)));
        }
        rfqs.insert(rfq.id, rfq);
        Ok(())
    }

    async fn update(&self, expected_version: u32, mut rfq: Rfq) -> Result<Rfq, PortError> {
        let mut rfqs = self.rfqs.write().await;
        let current = rfqs
            .get(&rfq.id)
            .ok_or_else(|| PortError::not_found("Rfq", rfq.id))?;
        if current.version != expected_version {
            return Err(PortError::conflict(format!(
                "version mismatch on RFQ {}: expected {}, found {}",
                rfq.id, expected_version, current.version
            )));
        }
        rfq.version = expected_version + 1;
        rfqs.insert(rfq.id, rfq.clone());
        Ok(rfq)
    }

    async fn list_by_status(&self, status: RfqStatus) -> Result<Vec<Rfq>, PortError> {
        Ok(self
            .rfqs
            .read()
            .await
            .values()
            .filter(|rfq| rfq.status == status)
            .cloned()
            .collect())
    }

    async fn list_by_buyer(&self, buyer_id: PartyId) -> Result<Vec<Rfq>, PortError> {
        Ok(self
            .rfqs
            .read()
            .await
            .values()
            .filter(|rfq| rfq.buyer_id == buyer_id)
            .cloned()
            .collect())
    }
}
