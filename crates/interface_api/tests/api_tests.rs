//! HTTP surface tests over the in-memory wiring

use axum_test::TestServer;
use serde_json::{json, Value};

use core_kernel::PartyId;
use domain_access::RoleCode;
use interface_api::auth::create_token;
use interface_api::{config::ApiConfig, create_router, AppState};

struct TestApi {
    server: TestServer,
    config: ApiConfig,
}

struct Actor {
    id: PartyId,
    token: String,
}

impl TestApi {
    fn new() -> Self {
        let config = ApiConfig::default();
        let server = TestServer::new(create_router(AppState::in_memory(config.clone())))
            .expect("router should start");
        Self { server, config }
    }

    fn actor(&self, role: RoleCode) -> Actor {
        let id = PartyId::new_v7();
        let token = create_token(id, role, &self.config.jwt_secret, 3600)
            .expect("token creation should succeed");
        Actor { id, token }
    }
}

fn product_body() -> Value {
    json!({
        "name": "Robusta coffee beans",
        "category": "agri",
        "unit_price": { "amount": "4.20", "currency": "USD" },
        "min_order_quantity": 50,
        "available_quantity": 2000,
        "incoterm": "free_on_board",
        "offer_valid_until": "2027-01-01T00:00:00Z"
    })
}

#[tokio::test]
async fn health_endpoints_are_public() {
    let api = TestApi::new();

    let response = api.server.get("/health").await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["status"], "healthy");

    let response = api.server.get("/health/ready").await;
    response.assert_status_ok();
}

#[tokio::test]
async fn api_routes_require_a_token() {
    let api = TestApi::new();
    let response = api.server.get("/api/v1/products").await;
    assert_eq!(response.status_code(), 401);
}

#[tokio::test]
async fn full_trade_over_http() {
    let api = TestApi::new();
    let seller = api.actor(RoleCode::Seller);
    let captain = api.actor(RoleCode::Captain);
    let buyer = api.actor(RoleCode::Buyer);

    // seller submits, captain approves
    let response = api
        .server
        .post("/api/v1/products")
        .authorization_bearer(&seller.token)
        .json(&product_body())
        .await;
    response.assert_status_ok();
    let product = response.json::<Value>();
    let product_id = product["id"].as_str().unwrap().to_string();
    assert_eq!(product["status"], "submitted");
    assert_eq!(product["seller_id"].as_str().unwrap(), seller.id.as_uuid().to_string());

    let response = api
        .server
        .post(&format!("/api/v1/products/{product_id}/approve"))
        .authorization_bearer(&captain.token)
        .await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["status"], "approved");

    // buyer opens an RFQ
    let response = api
        .server
        .post("/api/v1/rfqs")
        .authorization_bearer(&buyer.token)
        .json(&json!({ "product_id": product_id, "quantity": 100 }))
        .await;
    response.assert_status_ok();
    let rfq = response.json::<Value>();
    let rfq_id = rfq["id"].as_str().unwrap().to_string();
    assert_eq!(rfq["status"], "open");

    // captain accepts the RFQ, issuing the quotation
    let response = api
        .server
        .post(&format!("/api/v1/rfqs/{rfq_id}/accept"))
        .authorization_bearer(&captain.token)
        .json(&json!({
            "final_price": { "amount": "4.05", "currency": "USD" },
            "specifications": "screen 18, sun dried",
            "payment_terms": "LC at sight",
            "message": "volume discount applied"
        }))
        .await;
    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["rfq"]["status"], "accepted");
    let dpq_id = body["quotation"]["id"].as_str().unwrap().to_string();
    assert_eq!(body["quotation"]["status"], "draft");
    assert_eq!(
        body["quotation"]["buyer_id"].as_str().unwrap(),
        buyer.id.as_uuid().to_string()
    );

    // buyer accepts, captain converts
    let response = api
        .server
        .post(&format!("/api/v1/quotations/{dpq_id}/accept"))
        .authorization_bearer(&buyer.token)
        .await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["status"], "accepted");

    let response = api
        .server
        .post(&format!("/api/v1/quotations/{dpq_id}/convert"))
        .authorization_bearer(&captain.token)
        .await;
    response.assert_status_ok();
    let order = response.json::<Value>();
    let order_id = order["id"].as_str().unwrap().to_string();
    assert_eq!(order["status"], "pending");
    assert_eq!(order["dpq_id"].as_str().unwrap(), dpq_id);

    // fulfillment progression
    for (step, expected) in [
        ("confirm", "confirmed"),
        ("process", "processing"),
        ("complete", "completed"),
    ] {
        let response = api
            .server
            .post(&format!("/api/v1/orders/{order_id}/{step}"))
            .authorization_bearer(&captain.token)
            .await;
        response.assert_status_ok();
        assert_eq!(response.json::<Value>()["status"], expected);
    }

    // consolidated workflow view
    let response = api
        .server
        .get(&format!("/api/v1/orders/{order_id}/workflow"))
        .authorization_bearer(&buyer.token)
        .await;
    response.assert_status_ok();
    let snapshot = response.json::<Value>();
    assert_eq!(snapshot["order_status"], "completed");
    assert_eq!(snapshot["order_confirmation"], "confirmed");
    assert_eq!(snapshot["quotation_status"], "converted");
    assert_eq!(snapshot["rfq_status"], "accepted");
    let stages: Vec<&str> = snapshot["stages"]
        .as_array()
        .unwrap()
        .iter()
        .map(|stage| stage["stage"].as_str().unwrap())
        .collect();
    assert_eq!(stages, vec!["survey", "transport", "logistics", "payment"]);
}

#[tokio::test]
async fn error_taxonomy_maps_to_status_codes() {
    let api = TestApi::new();
    let seller = api.actor(RoleCode::Seller);
    let captain = api.actor(RoleCode::Captain);
    let buyer = api.actor(RoleCode::Buyer);

    // forbidden: a buyer cannot submit products
    let response = api
        .server
        .post("/api/v1/products")
        .authorization_bearer(&buyer.token)
        .json(&product_body())
        .await;
    assert_eq!(response.status_code(), 403);
    assert_eq!(response.json::<Value>()["error"], "forbidden");

    // not found
    let response = api
        .server
        .get(&format!("/api/v1/products/{}", uuid::Uuid::now_v7()))
        .authorization_bearer(&buyer.token)
        .await;
    assert_eq!(response.status_code(), 404);

    // validation: RFQ against a missing product
    let response = api
        .server
        .post("/api/v1/rfqs")
        .authorization_bearer(&buyer.token)
        .json(&json!({ "product_id": uuid::Uuid::now_v7(), "quantity": 10 }))
        .await;
    assert_eq!(response.status_code(), 422);
    assert_eq!(response.json::<Value>()["error"], "validation_error");

    // invalid state: approving an already approved product, with the
    // current status reported
    let response = api
        .server
        .post("/api/v1/products")
        .authorization_bearer(&seller.token)
        .json(&product_body())
        .await;
    let product_id = response.json::<Value>()["id"].as_str().unwrap().to_string();
    api.server
        .post(&format!("/api/v1/products/{product_id}/approve"))
        .authorization_bearer(&captain.token)
        .await
        .assert_status_ok();

    let response = api
        .server
        .post(&format!("/api/v1/products/{product_id}/approve"))
        .authorization_bearer(&captain.token)
        .await;
    assert_eq!(response.status_code(), 409);
    let body = response.json::<Value>();
    assert_eq!(body["error"], "invalid_state");
    assert_eq!(body["current_status"], "approved");
}

#[tokio::test]
async fn documents_are_invisible_to_strangers() {
    let api = TestApi::new();
    let seller = api.actor(RoleCode::Seller);
    let captain = api.actor(RoleCode::Captain);
    let buyer = api.actor(RoleCode::Buyer);
    let other_buyer = api.actor(RoleCode::Buyer);

    let response = api
        .server
        .post("/api/v1/products")
        .authorization_bearer(&seller.token)
        .json(&product_body())
        .await;
    let product_id = response.json::<Value>()["id"].as_str().unwrap().to_string();
    api.server
        .post(&format!("/api/v1/products/{product_id}/approve"))
        .authorization_bearer(&captain.token)
        .await
        .assert_status_ok();

    let response = api
        .server
        .post("/api/v1/rfqs")
        .authorization_bearer(&buyer.token)
        .json(&json!({ "product_id": product_id, "quantity": 60 }))
        .await;
    let rfq_id = response.json::<Value>()["id"].as_str().unwrap().to_string();

    // the owner and the gatekeeper see it, another buyer does not
    api.server
        .get(&format!("/api/v1/rfqs/{rfq_id}"))
        .authorization_bearer(&buyer.token)
        .await
        .assert_status_ok();
    api.server
        .get(&format!("/api/v1/rfqs/{rfq_id}"))
        .authorization_bearer(&captain.token)
        .await
        .assert_status_ok();
    let response = api
        .server
        .get(&format!("/api/v1/rfqs/{rfq_id}"))
        .authorization_bearer(&other_buyer.token)
        .await;
    assert_eq!(response.status_code(), 403);
}

#[tokio::test]
async fn responding_with_accept_issues_the_quotation_in_the_same_call() {
    let api = TestApi::new();
    let seller = api.actor(RoleCode::Seller);
    let captain = api.actor(RoleCode::Captain);
    let buyer = api.actor(RoleCode::Buyer);

    let response = api
        .server
        .post("/api/v1/products")
        .authorization_bearer(&seller.token)
        .json(&product_body())
        .await;
    let product_id = response.json::<Value>()["id"].as_str().unwrap().to_string();
    api.server
        .post(&format!("/api/v1/products/{product_id}/approve"))
        .authorization_bearer(&captain.token)
        .await
        .assert_status_ok();

    let response = api
        .server
        .post("/api/v1/rfqs")
        .authorization_bearer(&buyer.token)
        .json(&json!({ "product_id": product_id, "quantity": 80 }))
        .await;
    let rfq_id = response.json::<Value>()["id"].as_str().unwrap().to_string();

    // accepting without the pricing fields is rejected up front
    let response = api
        .server
        .post(&format!("/api/v1/rfqs/{rfq_id}/respond"))
        .authorization_bearer(&captain.token)
        .json(&json!({ "action": "accept", "message": "deal" }))
        .await;
    assert_eq!(response.status_code(), 422);
    assert_eq!(response.json::<Value>()["error"], "validation_error");

    // with them, the response carries the freshly issued quotation
    let response = api
        .server
        .post(&format!("/api/v1/rfqs/{rfq_id}/respond"))
        .authorization_bearer(&captain.token)
        .json(&json!({
            "action": "accept",
            "message": "deal",
            "final_price": { "amount": "4.10", "currency": "USD" },
            "specifications": "screen 18, sun dried",
            "payment_terms": "LC at sight"
        }))
        .await;
    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["rfq"]["status"], "accepted");
    assert_eq!(body["quotation"]["status"], "draft");

    // a plain negotiation response carries no quotation
    let response = api
        .server
        .post("/api/v1/rfqs")
        .authorization_bearer(&buyer.token)
        .json(&json!({ "product_id": product_id, "quantity": 40 }))
        .await;
    let rfq_id = response.json::<Value>()["id"].as_str().unwrap().to_string();
    let response = api
        .server
        .post(&format!("/api/v1/rfqs/{rfq_id}/respond"))
        .authorization_bearer(&captain.token)
        .json(&json!({ "action": "negotiate", "message": "can you take 60?" }))
        .await;
    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["rfq"]["status"], "negotiation_requested");
    assert!(body.get("quotation").is_none());
}
