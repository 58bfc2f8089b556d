//! Tests for [`RfqClient`] against a local relay.
use alloy::{
    primitives::Address,
    signers::{k256::ecdsa::SigningKey, local::PrivateKeySigner},
};
use axum::{
    extract::Query,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use rfq_mint_client::{RfqClient, RfqError};
use rfq_mint_constants::{test_utils::TEST_COLLATERAL, Deployment};
use rfq_mint_types::{Amount, QuoteRequest, Side, SignedOrder, UnsignedOrder};
use serde_json::{json, Value};
use std::{collections::HashMap, time::Duration};

async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });
    format!("http://{addr}/")
}

async fn signed_order(order_id: &str) -> SignedOrder {
    let signer = PrivateKeySigner::from(SigningKey::from_slice(&[1u8; 32]).unwrap());
    let order = UnsignedOrder {
        order_id: order_id.to_owned(),
        order_type: Side::Mint,
        expiry: 1_700_000_060,
        nonce: 1_700_000_060,
        benefactor: signer.address(),
        beneficiary: signer.address(),
        collateral_asset: TEST_COLLATERAL,
        collateral_amount: Amount::parse("30000000").unwrap(),
        minted_amount: Amount::parse("30000000").unwrap(),
    };
    order.sign(&Deployment::test(), &signer).await.unwrap()
}

#[tokio::test]
async fn quote_sends_query_and_parses_body() {
    let app = Router::new().route(
        "/rfq",
        get(|Query(params): Query<HashMap<String, String>>| async move {
            assert_eq!(params["pair"], "USDC/USDtb");
            assert_eq!(params["type_"], "ALGO");
            assert_eq!(params["side"], "MINT");
            assert_eq!(params["size"], "30");
            assert!(params.contains_key("benefactor"));
            Json(json!({
                "rfq_id": "q1",
                "collateral_amount": "30000000",
                "usdtb_amount": "30000000",
            }))
        }),
    );
    let client = RfqClient::new_from_string(&serve(app).await).unwrap();

    let request = QuoteRequest::new("USDC/USDtb", Side::Mint, "30")
        .unwrap()
        .with_benefactor(Address::repeat_byte(0x44));
    let quote = client.get_quote(&request).await.unwrap();
    assert_eq!(quote.quote_id, "q1");
    assert_eq!(quote.minted_amount.as_str(), "30000000");
}

#[tokio::test]
async fn quote_errors() {
    let app = Router::new()
        .route("/rfq", get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "maintenance") }));
    let client = RfqClient::new_from_string(&serve(app).await).unwrap();
    let request = QuoteRequest::new("USDC/USDtb", Side::Mint, "30").unwrap();
    let err = client.get_quote(&request).await.unwrap_err();
    assert!(matches!(err, RfqError::Status { ref body, .. } if body == "maintenance"));
    assert_eq!(err.status().map(|s| s.as_u16()), Some(503));

    let app = Router::new().route("/rfq", get(|| async { Json(json!({ "rfq_id": "q1" })) }));
    let client = RfqClient::new_from_string(&serve(app).await).unwrap();
    assert!(matches!(client.get_quote(&request).await, Err(RfqError::Decode(_))));
}

#[tokio::test]
async fn quote_times_out() {
    let app = Router::new().route(
        "/rfq",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Json(json!({}))
        }),
    );
    let client = RfqClient::new_from_string(&serve(app).await)
        .unwrap()
        .with_timeout(Duration::from_millis(100));
    let request = QuoteRequest::new("USDC/USDtb", Side::Mint, "30").unwrap();
    let err = client.get_quote(&request).await.unwrap_err();
    assert!(err.is_timeout());
}

#[tokio::test]
async fn submit_returns_tx() {
    let order = signed_order("q1").await;
    let expected_sig = order.signature().to_hex();

    let app = Router::new().route(
        "/order",
        post(move |Query(params): Query<HashMap<String, String>>, Json(body): Json<Value>| {
            let expected_sig = expected_sig.clone();
            async move {
                assert_eq!(params["signature"], expected_sig);
                assert_eq!(body["order_id"], "q1");
                assert_eq!(body["order_type"], "MINT");
                assert_eq!(body["expiry"], 1_700_000_060u64);
                assert_eq!(body["usdtb_amount"], "30000000");
                Json(json!({ "tx": "0xabc" }))
            }
        }),
    );
    let client = RfqClient::new_from_string(&serve(app).await).unwrap();
    assert_eq!(client.submit_order(&order).await.unwrap(), "0xabc");
}

#[tokio::test]
async fn submit_surfaces_relay_error() {
    let app = Router::new().route(
        "/order",
        post(|| async { (StatusCode::BAD_REQUEST, Json(json!({ "error": "Quote expired" }))) }),
    );
    let client = RfqClient::new_from_string(&serve(app).await).unwrap();
    let err = client.submit_order(&signed_order("q1").await).await.unwrap_err();
    match err {
        RfqError::Relay { status, message } => {
            assert_eq!(status.as_u16(), 400);
            assert_eq!(message, "Quote expired");
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[tokio::test]
async fn submit_rejects_invalid_order_before_sending() {
    let client = RfqClient::new_from_string("http://127.0.0.1:9/").unwrap();
    let signer = PrivateKeySigner::from(SigningKey::from_slice(&[2u8; 32]).unwrap());
    let mut order = signed_order("q1").await.into_parts().0;
    // whitespace ids still sign, but are refused before submission
    order.order_id = " ".to_owned();
    let signed = order.sign(&Deployment::test(), &signer).await.unwrap();

    let err = client.submit_order(&signed).await.unwrap_err();
    assert!(matches!(err, RfqError::Validation(_)));
}
