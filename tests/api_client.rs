mod common;

use bullion_admin::api::{ApiClient, ApiError, SignInError, REQUEST_ID_HEADER};
use bullion_admin::models::{
    FulfillmentStatus, MetalType, PageParams, PriceUpdate, RefundRequest, SchemeDraft,
};
use common::mock_backend::{MockBackend, MockResponse};
use common::{api_config, signed_in_client};
use serde_json::json;

#[tokio::test]
async fn test_requests_carry_bearer_token_and_request_id() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::envelope(json!({ "users": [], "total": 0 })))
        .await;

    let api = signed_in_client(&backend.base_url());
    api.users().list(PageParams::new(0, 100)).await.unwrap();

    let requests = backend.requests_to("GET", "/api/admin/users/").await;
    assert_eq!(requests.len(), 1);
    let req = &requests[0];
    assert_eq!(req.header("authorization"), Some("Bearer test-token"));
    assert!(req.header(REQUEST_ID_HEADER).is_some_and(|id| !id.is_empty()));
    assert_eq!(req.query_value("skip").as_deref(), Some("0"));
    assert_eq!(req.query_value("limit").as_deref(), Some("100"));
}

#[tokio::test]
async fn test_envelope_data_is_unwrapped() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::envelope(json!({
            "users": [
                { "id": 7, "email": "a@x.com", "first_name": "Asha", "kyc_status": "verified" },
                { "id": "8", "email": "b@x.com", "phoneNumber": 9876543210u64 }
            ],
            "total": 2
        })))
        .await;

    let api = signed_in_client(&backend.base_url());
    let list = api.users().list(PageParams::new(0, 10)).await.unwrap();
    assert_eq!(list.total, 2);
    assert_eq!(list.users[0].id, "7");
    assert_eq!(list.users[0].display_name(), "Asha");
    assert_eq!(list.users[1].phone_number.as_deref(), Some("9876543210"));
}

#[tokio::test]
async fn test_unauthorized_maps_to_dedicated_error() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::error(401, "Not authenticated"))
        .await;

    let api = signed_in_client(&backend.base_url());
    let err = api.schemes().get("s1").await.unwrap_err();
    assert!(err.is_unauthorized());
    assert_eq!(err.status_code(), Some(401));
}

#[tokio::test]
async fn test_error_detail_becomes_user_message() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::error(400, "Refund amount exceeds order total"))
        .await;

    let api = signed_in_client(&backend.base_url());
    let request = RefundRequest {
        amount: 99999.0,
        reason: "damaged".to_string(),
    };
    let err = api
        .payments()
        .initiate_refund("ORD1", &request)
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), Some(400));
    assert_eq!(err.user_message(), "Refund amount exceeds order total");
}

#[tokio::test]
async fn test_failed_envelope_on_success_status_is_rejected() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::json(
            r#"{"status":"error","message":"Scheme name already exists","data":null}"#,
        ))
        .await;

    let api = signed_in_client(&backend.base_url());
    let err = api
        .schemes()
        .create(&SchemeDraft {
            name: "Gold Saver".to_string(),
            ..SchemeDraft::default()
        })
        .await
        .unwrap_err();
    match err {
        ApiError::Rejected { message } => assert_eq!(message, "Scheme name already exists"),
        other => panic!("Expected Rejected, got {other:?}"),
    }
}

#[tokio::test]
async fn test_refund_posts_amount_and_reason() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::envelope(json!({
            "order_id": "ORD123", "status": "initiated", "amount": "500"
        })))
        .await;

    let api = signed_in_client(&backend.base_url());
    let status = api
        .payments()
        .initiate_refund(
            "ORD123",
            &RefundRequest {
                amount: 500.0,
                reason: "damaged".to_string(),
            },
        )
        .await
        .unwrap();
    assert_eq!(status.order_id, "ORD123");
    assert_eq!(status.amount, Some(500.0));

    let requests = backend
        .requests_to("POST", "/api/admin/payments/refund/ORD123")
        .await;
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0].json(),
        json!({ "amount": 500.0, "reason": "damaged" })
    );
}

#[tokio::test]
async fn test_price_update_sends_query_without_body() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::envelope(json!({
            "metal_type": "silver", "price_per_gram": 95.5
        })))
        .await;

    let api = signed_in_client(&backend.base_url());
    let price = api
        .prices()
        .update(&PriceUpdate {
            metal_type: MetalType::Silver,
            buy_price: 98.0,
            sell_price: 95.5,
        })
        .await
        .unwrap();
    assert_eq!(price.metal_type, Some(MetalType::Silver));
    assert_eq!(price.headline(), Some(95.5));

    let requests = backend.requests_to("POST", "/api/admin/prices/").await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].query_value("metal_type").as_deref(), Some("silver"));
    assert_eq!(
        requests[0].query_value("price_per_gram").as_deref(),
        Some("95.5")
    );
    assert!(requests[0].body.is_empty());
}

#[tokio::test]
async fn test_latest_all_fetches_both_metals() {
    let backend = MockBackend::start().await;
    for _ in 0..2 {
        backend
            .enqueue_response(MockResponse::envelope(json!({ "price_per_gram": 1.0 })))
            .await;
    }

    let api = signed_in_client(&backend.base_url());
    api.prices().latest_all().await.unwrap();

    let mut metals: Vec<String> = backend
        .requests_to("GET", "/api/admin/prices/latest")
        .await
        .iter()
        .filter_map(|req| req.query_value("metal_type"))
        .collect();
    metals.sort();
    assert_eq!(metals, vec!["gold", "silver"]);
}

#[tokio::test]
async fn test_fulfillment_update_uses_patch() {
    let backend = MockBackend::start().await;
    let api = signed_in_client(&backend.base_url());
    api.orders()
        .update_fulfillment("ORN-9", &FulfillmentStatus::ReadyForPickup)
        .await
        .unwrap();

    let requests = backend
        .requests_to(
            "PATCH",
            "/api/admin/payments/orders/ORN-9/fulfillment-status",
        )
        .await;
    assert_eq!(requests.len(), 1);
    let body = requests[0].json();
    assert!(body
        .as_object()
        .unwrap()
        .values()
        .all(|value| value == "ready_for_pickup"));
}

#[tokio::test]
async fn test_sign_in_reads_token_header() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(
            MockResponse::json(r#"{"status":"OK","user":{"id":"u1"}}"#)
                .with_header("st-access-token", "fresh-token"),
        )
        .await;

    let api = ApiClient::new(&api_config(&backend.base_url()), None).unwrap();
    assert!(!api.auth().session_exists());
    let session = api
        .auth()
        .sign_in("admin@example.com", "secret")
        .await
        .unwrap();
    assert_eq!(session.email, "admin@example.com");
    assert_eq!(session.access_token.expose(), "fresh-token");

    let requests = backend.requests_to("POST", "/auth/signin").await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].header("authorization"), None);
    assert_eq!(
        requests[0].json()["formFields"][0],
        json!({ "id": "email", "value": "admin@example.com" })
    );
}

#[tokio::test]
async fn test_sign_in_wrong_credentials() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::json(r#"{"status":"WRONG_CREDENTIALS_ERROR"}"#))
        .await;

    let api = ApiClient::new(&api_config(&backend.base_url()), None).unwrap();
    let err = api.auth().sign_in("a@x.com", "bad").await.unwrap_err();
    assert!(matches!(err, SignInError::WrongCredentials));
    assert_eq!(err.to_string(), "Invalid email or password");
}

#[tokio::test]
async fn test_unreachable_server_is_connection_error() {
    let api = signed_in_client("http://127.0.0.1:9");
    let err = api.users().get("1").await.unwrap_err();
    assert_eq!(err.user_message(), "Cannot reach the API server");
    assert_eq!(err.status_code(), None);
}
