//! HTTP API layer
//!
//! REST API for the trade marketplace using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: request handlers for each domain surface
//! - **Middleware**: authentication, audit logging, tracing
//! - **DTOs**: request/response data transfer objects
//! - **Error handling**: consistent error responses mapped from the
//!   domain error taxonomy
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, AppState, config::ApiConfig};
//!
//! let app = create_router(AppState::in_memory(ApiConfig::default()));
//! axum::serve(listener, app).await?;
//! ```

pub mod auth;
pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;

use std::sync::Arc;

use axum::{
    middleware as axum_middleware,
    routing::{delete, get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use core_kernel::FreezeGuard;
use domain_access::RoleService;
use domain_catalog::CatalogService;
use domain_order::OrderService;
use domain_quotation::QuotationService;
use domain_rfq::RfqService;
use domain_workflow::{DisputeFreezeGuard, DisputeService, StatusProvider, WorkflowTracker};
use infra_store::{
    InMemoryDisputeStore, InMemoryOrderStore, InMemoryProductStore, InMemoryQuotationStore,
    InMemoryRfqStore, InMemoryRoleStore, InMemoryStatusFeed,
};

use crate::config::ApiConfig;
use crate::handlers::{catalog, health, order, quotation, rfq, roles, workflow};
use crate::middleware::{audit_middleware, auth_middleware};

/// Fulfillment stages the tracker polls, in report order
pub const FULFILLMENT_STAGES: [&str; 4] = ["survey", "transport", "logistics", "payment"];

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogService>,
    pub rfqs: Arc<RfqService>,
    pub quotations: Arc<QuotationService>,
    pub orders: Arc<OrderService>,
    pub disputes: Arc<DisputeService>,
    pub roles: Arc<RoleService>,
    pub tracker: Arc<WorkflowTracker>,
    pub config: ApiConfig,
}

impl AppState {
    /// Wires every service over in-memory stores
    pub fn in_memory(config: ApiConfig) -> Self {
        let products = Arc::new(InMemoryProductStore::new());
        let rfq_store = Arc::new(InMemoryRfqStore::new());
        let quotation_store = Arc::new(InMemoryQuotationStore::new());
        let order_store = Arc::new(InMemoryOrderStore::new());
        let dispute_store = Arc::new(InMemoryDisputeStore::new());
        let role_store = Arc::new(InMemoryRoleStore::new());
        let freeze: Arc<dyn FreezeGuard> = Arc::new(DisputeFreezeGuard::new(dispute_store.clone()));

        let providers: Vec<Arc<dyn StatusProvider>> = FULFILLMENT_STAGES
            .iter()
            .map(|&stage| Arc::new(InMemoryStatusFeed::new(stage)) as Arc<dyn StatusProvider>)
            .collect();

        Self {
            catalog: Arc::new(CatalogService::new(products.clone())),
            rfqs: Arc::new(RfqService::new(
                rfq_store.clone(),
                products.clone(),
                freeze.clone(),
            )),
            quotations: Arc::new(QuotationService::new(
                rfq_store.clone(),
                quotation_store.clone(),
                freeze.clone(),
            )),
            orders: Arc::new(OrderService::new(
                quotation_store.clone(),
                order_store.clone(),
                freeze,
            )),
            disputes: Arc::new(DisputeService::new(
                dispute_store,
                rfq_store.clone(),
                quotation_store.clone(),
                order_store.clone(),
                products,
            )),
            roles: Arc::new(RoleService::new(role_store)),
            tracker: Arc::new(WorkflowTracker::new(
                order_store,
                quotation_store,
                rfq_store,
                providers,
            )),
            config,
        }
    }
}

/// Creates the main API router
pub fn create_router(state: AppState) -> Router {
    // Public routes (no auth required)
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    // Product routes
    let product_routes = Router::new()
        .route("/", post(catalog::submit_product))
        .route("/", get(catalog::list_products))
        .route("/:id", get(catalog::get_product))
        .route("/:id/approve", post(catalog::approve_product))
        .route("/:id/reject", post(catalog::reject_product));

    // RFQ routes
    let rfq_routes = Router::new()
        .route("/", post(rfq::create_rfq))
        .route("/", get(rfq::list_rfqs))
        .route("/:id", get(rfq::get_rfq))
        .route("/:id/respond", post(rfq::respond_to_rfq))
        .route("/:id/accept", post(rfq::accept_rfq));

    // Quotation routes
    let quotation_routes = Router::new()
        .route("/", get(quotation::list_quotations))
        .route("/:id", get(quotation::get_quotation))
        .route("/:id", put(quotation::revise_quotation))
        .route("/:id/negotiate", post(quotation::negotiate_quotation))
        .route("/:id/accept", post(quotation::accept_quotation))
        .route("/:id/reject", post(quotation::reject_quotation))
        .route("/:id/convert", post(quotation::convert_quotation));

    // Order routes
    let order_routes = Router::new()
        .route("/", get(order::list_orders))
        .route("/:id", get(order::get_order))
        .route("/:id/confirm", post(order::confirm_order))
        .route("/:id/process", post(order::process_order))
        .route("/:id/complete", post(order::complete_order))
        .route("/:id/workflow", get(workflow::get_workflow));

    // Dispute routes
    let dispute_routes = Router::new()
        .route("/", post(workflow::open_dispute))
        .route("/", get(workflow::list_open_disputes))
        .route("/:id/resolve", post(workflow::resolve_dispute));

    // Role administration routes
    let role_routes = Router::new()
        .route("/", get(roles::list_roles))
        .route("/:id", put(roles::update_role))
        .route("/:id", delete(roles::delete_role))
        .route("/assignments", post(roles::assign_role))
        .route("/assignments/:user_id/demote", post(roles::demote_user));

    // Protected API routes
    let api_routes = Router::new()
        .nest("/products", product_routes)
        .nest("/rfqs", rfq_routes)
        .nest("/quotations", quotation_routes)
        .nest("/orders", order_routes)
        .nest("/disputes", dispute_routes)
        .nest("/roles", role_routes)
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            audit_middleware,
        ))
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    // Combine all routes
    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
