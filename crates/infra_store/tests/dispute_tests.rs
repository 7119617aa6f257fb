//! Dispute lifecycle and document freezing

use std::sync::Arc;

use core_kernel::{DocumentRef, FreezeGuard, PartyId};
use domain_catalog::ProductStore;
use domain_order::{Order, OrderService, OrderStore};
use domain_quotation::DpqStatus;
use domain_rfq::RfqStore;
use domain_workflow::{DisputeFreezeGuard, DisputeService};
use infra_store::{
    InMemoryDisputeStore, InMemoryOrderStore, InMemoryProductStore, InMemoryQuotationStore,
    InMemoryRfqStore,
};
use test_utils::{
    assert_conflict, assert_forbidden, assert_invalid_state, assert_validation, ActorFixtures,
    ProductBuilder, QuotationBuilder, RfqBuilder,
};

struct Fixture {
    disputes: Arc<InMemoryDisputeStore>,
    rfqs: Arc<InMemoryRfqStore>,
    orders: Arc<InMemoryOrderStore>,
    products: Arc<InMemoryProductStore>,
    service: DisputeService,
}

impl Fixture {
    fn new() -> Self {
        let disputes = Arc::new(InMemoryDisputeStore::new());
        let rfqs = Arc::new(InMemoryRfqStore::new());
        let quotations = Arc::new(InMemoryQuotationStore::new());
        let orders = Arc::new(InMemoryOrderStore::new());
        let products = Arc::new(InMemoryProductStore::new());
        let service = DisputeService::new(
            disputes.clone(),
            rfqs.clone(),
            quotations.clone(),
            orders.clone(),
            products.clone(),
        );
        Self {
            disputes,
            rfqs,
            orders,
            products,
            service,
        }
    }

    /// Seeds an order owned by the given buyer, built over the given
    /// seller's product
    async fn seed_order(&self, buyer_id: PartyId, seller_id: PartyId) -> Order {
        let product = ProductBuilder::new().with_seller(seller_id).build();
        self.products.insert(product.clone()).await.unwrap();

        let dpq = QuotationBuilder::new()
            .with_buyer(buyer_id)
            .with_status(DpqStatus::Converted)
            .build();
        let mut order = Order::from_quotation(&dpq);
        order.product_id = product.id;
        self.orders.insert(order.clone()).await.unwrap();
        order
    }
}

#[tokio::test]
async fn a_document_carries_at_most_one_open_dispute() {
    let fixture = Fixture::new();
    let buyer_id = PartyId::new_v7();
    let seller_id = PartyId::new_v7();
    let order = fixture.seed_order(buyer_id, seller_id).await;
    let doc = DocumentRef::Order(order.id);

    fixture
        .service
        .open_dispute(
            ActorFixtures::buyer_with_id(buyer_id),
            doc,
            "cargo arrived damaged".into(),
        )
        .await
        .unwrap();
    assert_conflict(
        fixture
            .service
            .open_dispute(
                ActorFixtures::seller_with_id(seller_id),
                doc,
                "payment withheld".into(),
            )
            .await,
    );
}

#[tokio::test]
async fn only_parties_to_the_trade_may_open_a_dispute() {
    let fixture = Fixture::new();
    let buyer_id = PartyId::new_v7();
    let seller_id = PartyId::new_v7();
    let order = fixture.seed_order(buyer_id, seller_id).await;
    let doc = DocumentRef::Order(order.id);

    // a buyer from an unrelated trade cannot freeze this one
    assert_forbidden(
        fixture
            .service
            .open_dispute(ActorFixtures::buyer(), doc, "looks suspicious".into())
            .await,
    );
    assert_forbidden(
        fixture
            .service
            .open_dispute(ActorFixtures::seller(), doc, "looks suspicious".into())
            .await,
    );

    // the product's seller is a party even though no document names them
    fixture
        .service
        .open_dispute(
            ActorFixtures::seller_with_id(seller_id),
            doc,
            "payment overdue".into(),
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn ownership_is_checked_on_the_rfq_itself() {
    let fixture = Fixture::new();
    let buyer_id = PartyId::new_v7();
    let rfq = RfqBuilder::new().with_buyer(buyer_id).build();
    fixture.rfqs.insert(rfq.clone()).await.unwrap();
    let doc = DocumentRef::Rfq(rfq.id);

    assert_forbidden(
        fixture
            .service
            .open_dispute(ActorFixtures::buyer(), doc, "terms misrepresented".into())
            .await,
    );
    fixture
        .service
        .open_dispute(
            ActorFixtures::buyer_with_id(buyer_id),
            doc,
            "terms misrepresented".into(),
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn resolution_is_arbitrator_only_and_terminal() {
    let fixture = Fixture::new();
    let buyer_id = PartyId::new_v7();
    let order = fixture.seed_order(buyer_id, PartyId::new_v7()).await;

    let dispute = fixture
        .service
        .open_dispute(
            ActorFixtures::buyer_with_id(buyer_id),
            DocumentRef::Order(order.id),
            "cargo arrived damaged".into(),
        )
        .await
        .unwrap();

    assert_forbidden(
        fixture
            .service
            .resolve(ActorFixtures::captain(), dispute.id, "settled".into())
            .await,
    );

    let arbitrator = ActorFixtures::arbitrator();
    let resolved = fixture
        .service
        .resolve(arbitrator, dispute.id, "insurer covers the loss".into())
        .await
        .unwrap();
    assert!(!resolved.is_open());

    assert_invalid_state(
        fixture
            .service
            .resolve(arbitrator, dispute.id, "settled again".into())
            .await,
        "resolved",
    );
}

#[tokio::test]
async fn a_dispute_needs_a_reason() {
    let fixture = Fixture::new();
    assert_validation(
        fixture
            .service
            .open_dispute(
                ActorFixtures::buyer(),
                DocumentRef::Order(core_kernel::DpoId::new_v7()),
                "   ".into(),
            )
            .await,
    );
}

#[tokio::test]
async fn frozen_order_blocks_fulfillment_steps() {
    let fixture = Fixture::new();
    let buyer_id = PartyId::new_v7();
    let order = fixture.seed_order(buyer_id, PartyId::new_v7()).await;

    let quotations = Arc::new(InMemoryQuotationStore::new());
    let freeze: Arc<dyn FreezeGuard> = Arc::new(DisputeFreezeGuard::new(fixture.disputes.clone()));
    let order_service = OrderService::new(quotations, fixture.orders.clone(), freeze);

    let captain = ActorFixtures::captain();
    let dispute = fixture
        .service
        .open_dispute(
            ActorFixtures::buyer_with_id(buyer_id),
            DocumentRef::Order(order.id),
            "inspection report missing".into(),
        )
        .await
        .unwrap();

    assert_conflict(order_service.confirm(captain, order.id).await);

    fixture
        .service
        .resolve(
            ActorFixtures::arbitrator(),
            dispute.id,
            "report supplied".into(),
        )
        .await
        .unwrap();
    let order = order_service.confirm(captain, order.id).await.unwrap();
    assert_eq!(order.status, domain_order::OrderStatus::Confirmed);
}
