//! Workflow tracker snapshots

use std::sync::Arc;

use core_kernel::{DpoId, TradeError};
use domain_order::{Order, OrderStore};
use domain_quotation::{DpqStatus, QuotationStore};
use domain_rfq::{RfqStatus, RfqStore};
use domain_workflow::{StatusProvider, WorkflowTracker, STATUS_UNKNOWN};
use infra_store::{
    InMemoryOrderStore, InMemoryQuotationStore, InMemoryRfqStore, InMemoryStatusFeed,
    UnreachableProvider,
};
use test_utils::{QuotationBuilder, RfqBuilder};

struct Fixture {
    rfqs: Arc<InMemoryRfqStore>,
    quotations: Arc<InMemoryQuotationStore>,
    orders: Arc<InMemoryOrderStore>,
}

impl Fixture {
    fn new() -> Self {
        Self {
            rfqs: Arc::new(InMemoryRfqStore::new()),
            quotations: Arc::new(InMemoryQuotationStore::new()),
            orders: Arc::new(InMemoryOrderStore::new()),
        }
    }

    /// Seeds a linked RFQ, quotation, and order, returning the order
    async fn seed_chain(&self) -> Order {
        let rfq = RfqBuilder::new().with_status(RfqStatus::Accepted).build();
        self.rfqs.insert(rfq.clone()).await.unwrap();

        let dpq = QuotationBuilder::new()
            .for_rfq(&rfq)
            .with_status(DpqStatus::Converted)
            .build();
        self.quotations.insert(dpq.clone()).await.unwrap();

        let order = Order::from_quotation(&dpq);
        self.orders.insert(order.clone()).await.unwrap();
        order
    }

    fn tracker(&self, providers: Vec<Arc<dyn StatusProvider>>) -> WorkflowTracker {
        WorkflowTracker::new(
            self.orders.clone(),
            self.quotations.clone(),
            self.rfqs.clone(),
            providers,
        )
    }
}

#[tokio::test]
async fn snapshot_walks_the_document_chain() {
    let fixture = Fixture::new();
    let order = fixture.seed_chain().await;

    let survey = Arc::new(InMemoryStatusFeed::new("survey"));
    survey.set_status(order.id, "passed").await;
    let payment = Arc::new(InMemoryStatusFeed::new("payment"));
    payment.set_status(order.id, "advance_received").await;

    let tracker = fixture.tracker(vec![survey, payment]);
    let snapshot = tracker.snapshot(order.id).await.unwrap();

    assert_eq!(snapshot.order_id, order.id);
    assert_eq!(snapshot.order_status, "pending");
    assert_eq!(snapshot.order_confirmation, "pending");
    assert_eq!(snapshot.dpq_id, order.dpq_id);
    assert_eq!(snapshot.quotation_status, "converted");
    assert_eq!(snapshot.rfq_id, order.rfq_id);
    assert_eq!(snapshot.rfq_status, "accepted");
    assert_eq!(snapshot.total_value, order.total_value);

    assert_eq!(snapshot.stages.len(), 2);
    assert_eq!(snapshot.stages[0].stage, "survey");
    assert_eq!(snapshot.stages[0].status, "passed");
    assert_eq!(snapshot.stages[1].stage, "payment");
    assert_eq!(snapshot.stages[1].status, "advance_received");
}

#[tokio::test]
async fn snapshot_reports_every_fulfillment_stage_and_the_confirmation() {
    let fixture = Fixture::new();
    let mut order = fixture.seed_chain().await;
    order.confirm().unwrap();
    fixture.orders.update(1, order.clone()).await.unwrap();

    let providers: Vec<Arc<dyn StatusProvider>> = ["survey", "transport", "logistics", "payment"]
        .iter()
        .map(|&stage| Arc::new(InMemoryStatusFeed::new(stage)) as Arc<dyn StatusProvider>)
        .collect();
    let tracker = fixture.tracker(providers);
    let snapshot = tracker.snapshot(order.id).await.unwrap();

    let stages: Vec<&str> = snapshot.stages.iter().map(|s| s.stage.as_str()).collect();
    assert_eq!(stages, vec!["survey", "transport", "logistics", "payment"]);
    assert_eq!(snapshot.order_confirmation, "confirmed");
}

#[tokio::test]
async fn unreachable_collaborators_degrade_to_unknown() {
    let fixture = Fixture::new();
    let order = fixture.seed_chain().await;

    let survey = Arc::new(InMemoryStatusFeed::new("survey"));
    survey.set_status(order.id, "passed").await;
    let logistics = Arc::new(UnreachableProvider::new("logistics"));

    let tracker = fixture.tracker(vec![survey, logistics]);
    let snapshot = tracker.snapshot(order.id).await.unwrap();

    assert_eq!(snapshot.stages[0].status, "passed");
    assert_eq!(snapshot.stages[1].stage, "logistics");
    assert_eq!(snapshot.stages[1].status, STATUS_UNKNOWN);
}

#[tokio::test]
async fn unpolled_stage_reads_as_not_started() {
    let fixture = Fixture::new();
    let order = fixture.seed_chain().await;

    let tracker = fixture.tracker(vec![Arc::new(InMemoryStatusFeed::new("transport"))]);
    let snapshot = tracker.snapshot(order.id).await.unwrap();

    assert_eq!(snapshot.stages[0].status, "not_started");
}

#[tokio::test]
async fn missing_order_is_not_found() {
    let fixture = Fixture::new();
    let tracker = fixture.tracker(Vec::new());

    let err = tracker.snapshot(DpoId::new_v7()).await.unwrap_err();
    assert!(matches!(err, TradeError::NotFound { .. }));
}

#[tokio::test]
async fn missing_parent_documents_degrade_to_unknown() {
    let fixture = Fixture::new();
    // order whose quotation and RFQ were never stored
    let dpq = QuotationBuilder::new()
        .with_status(DpqStatus::Converted)
        .build();
    let order = Order::from_quotation(&dpq);
    fixture.orders.insert(order.clone()).await.unwrap();

    let tracker = fixture.tracker(Vec::new());
    let snapshot = tracker.snapshot(order.id).await.unwrap();

    assert_eq!(snapshot.quotation_status, STATUS_UNKNOWN);
    assert_eq!(snapshot.rfq_status, STATUS_UNKNOWN);
}
