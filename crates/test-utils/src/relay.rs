//! A local RFQ relay for HTTP tests.
use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use rfq_mint_client::RfqClient;
use serde_json::{json, Value};
pub use axum::http::StatusCode;
use std::{
    collections::{HashMap, VecDeque},
    net::SocketAddr,
    sync::{Arc, Mutex},
};

/// An order the relay received.
#[derive(Debug, Clone, PartialEq)]
pub struct ReceivedOrder {
    /// The `signature` query parameter.
    pub signature: Option<String>,
    /// The JSON body.
    pub body: Value,
}

#[derive(Debug, Default)]
struct RelayState {
    quotes: VecDeque<(StatusCode, Value)>,
    order_responses: VecDeque<(StatusCode, Value)>,
    quote_queries: Vec<HashMap<String, String>>,
    orders: Vec<ReceivedOrder>,
}

type Shared = Arc<Mutex<RelayState>>;

/// A relay bound to `127.0.0.1` on an ephemeral port.
///
/// Responses are queued per endpoint and popped per request. An empty queue
/// answers `500` with an `error` body.
#[derive(Debug, Clone)]
pub struct TestRelay {
    addr: SocketAddr,
    state: Shared,
}

impl TestRelay {
    /// Bind and serve in the background.
    pub async fn spawn() -> Self {
        let state = Shared::default();
        let app = Router::new()
            .route("/rfq", get(quote))
            .route("/order", post(order))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });
        Self { addr, state }
    }

    /// Base URL of the relay, with a trailing `/`.
    pub fn url(&self) -> String {
        format!("http://{}/", self.addr)
    }

    /// A client pointed at this relay.
    pub fn client(&self) -> RfqClient {
        RfqClient::new_from_string(&self.url()).unwrap()
    }

    /// Queue a quote response.
    pub fn push_quote(&self, status: StatusCode, body: Value) {
        self.state.lock().unwrap().quotes.push_back((status, body));
    }

    /// Queue a `200` quote in relay form.
    pub fn push_rfq(&self, rfq_id: &str, collateral_amount: &str, minted_amount: &str) {
        self.push_quote(
            StatusCode::OK,
            json!({
                "rfq_id": rfq_id,
                "collateral_amount": collateral_amount,
                "usdtb_amount": minted_amount,
            }),
        );
    }

    /// Queue an order response.
    pub fn push_order_response(&self, status: StatusCode, body: Value) {
        self.state.lock().unwrap().order_responses.push_back((status, body));
    }

    /// Queue a successful order response.
    pub fn push_tx(&self, tx: &str) {
        self.push_order_response(StatusCode::OK, json!({ "tx": tx }));
    }

    /// Queue a relay error.
    pub fn push_order_error(&self, status: StatusCode, message: &str) {
        self.push_order_response(status, json!({ "error": message }));
    }

    /// Query strings of received quote requests.
    pub fn quote_queries(&self) -> Vec<HashMap<String, String>> {
        self.state.lock().unwrap().quote_queries.clone()
    }

    /// Received orders.
    pub fn orders(&self) -> Vec<ReceivedOrder> {
        self.state.lock().unwrap().orders.clone()
    }
}

fn empty_queue() -> (StatusCode, Value) {
    (StatusCode::INTERNAL_SERVER_ERROR, json!({ "error": "no response queued" }))
}

async fn quote(
    State(state): State<Shared>,
    Query(params): Query<HashMap<String, String>>,
) -> (StatusCode, Json<Value>) {
    let mut state = state.lock().unwrap();
    state.quote_queries.push(params);
    let (status, body) = state.quotes.pop_front().unwrap_or_else(empty_queue);
    (status, Json(body))
}

async fn order(
    State(state): State<Shared>,
    Query(params): Query<HashMap<String, String>>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let mut state = state.lock().unwrap();
    state.orders.push(ReceivedOrder { signature: params.get("signature").cloned(), body });
    let (status, body) = state.order_responses.pop_front().unwrap_or_else(empty_queue);
    (status, Json(body))
}
