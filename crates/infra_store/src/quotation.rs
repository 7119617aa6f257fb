//! In-memory quotation store

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use core_kernel::{DomainPort, DpqId, PartyId, PortError, RfqId};
use domain_quotation::{DpqStatus, Quotation, QuotationStore};

/// In-memory implementation of [`QuotationStore`]
#[derive(Debug, Default)]
pub struct InMemoryQuotationStore {
    quotations: Arc<RwLock<HashMap<DpqId, Quotation>>>,
}

impl InMemoryQuotationStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DomainPort for InMemoryQuotationStore {}

#[async_trait]
impl QuotationStore for InMemoryQuotationStore {
    async fn get(&self, id: DpqId) -> Result<Quotation, PortError> {
        self.quotations
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| PortError::not_found("Quotation", id))
    }

    async fn insert(&self, quotation: Quotation) -> Result<(), PortError> {
        let mut quotations = self.quotations.write().await;
        if quotations.contains_key(&quotation.id) {
            return Err(PortError::conflict(format!(
                "quotation {} already exists",
                quotation.id
            )));
        }
        quotations.insert(quotation.id, quotation);
        Ok(())
    }

    async fn update(
        &self,
        expected_version: u32,
        mut quotation: Quotation,
    ) -> Result<Quotation, PortError> {
        let mut quotations = self.quotations.write().await;
        let current = quotations
            .get(&quotation.id)
            .ok_or_else(|| PortError::not_found("Quotation", quotation.id))?;
        if current.version != expected_version {
            return Err(PortError::conflict(format!(
                "version mismatch on quotation {}: expected {}, found {}",
                quotation.id, expected_version, current.version
            )));
        }
        quotation.version = expected_version + 1;
        quotations.insert(quotation.id, quotation.clone());
        Ok(quotation)
    }

    async fn find_by_rfq(&self, rfq_id: RfqId) -> Result<Option<Quotation>, PortError> {
        Ok(self
            .quotations
            .read()
            .await
            .values()
            .find(|quotation| quotation.rfq_id == rfq_id)
            .cloned())
    }

    async fn list_by_status(&self, status: DpqStatus) -> Result<Vec<Quotation>, PortError> {
        Ok(self
            .quotations
            .read()
            .await
            .values()
            .filter(|quotation| quotation.status == status)
            .cloned()
            .collect())
    }

    async fn list_by_buyer(&self, buyer_id: PartyId) -> Result<Vec<Quotation>, PortError> {
        Ok(self
            .quotations
            .read()
            .await
            .values()
            .filter(|quotation| quotation.buyer_id == buyer_id)
            .cloned()
            .collect())
    }
}
