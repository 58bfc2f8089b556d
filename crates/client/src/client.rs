use crate::{types::RelayResponse, Result, RfqError};
use reqwest::{StatusCode, Url};
use rfq_mint_constants::{Deployment, OrderSchema};
use rfq_mint_types::{Quote, QuoteRequest, SignedOrder, DEFAULT_RFQ_TIMEOUT};
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// The endpoints of the relay.
const RFQ: &str = "rfq";
const ORDER: &str = "order";

/// RFQ relay client.
///
/// Sends quote requests and signed orders to the relay of one deployment.
/// Every request carries a timeout. Nothing is retried.
#[derive(Debug, Clone)]
pub struct RfqClient {
    /// Base URL of the relay. Ends with `/`.
    url: Url,
    /// The reqwest client used to send requests.
    client: reqwest::Client,
    /// Per-request timeout.
    timeout: Duration,
    /// Field layout of submitted orders.
    schema: OrderSchema,
}

impl RfqClient {
    /// Create a new client with the given URL and reqwest client.
    pub const fn new_with_client(url: Url, client: reqwest::Client) -> Self {
        Self { url, client, timeout: DEFAULT_RFQ_TIMEOUT, schema: OrderSchema::Usdtb }
    }

    /// Create a new client with the given URL and a new reqwest client.
    pub fn new(url: Url) -> Self {
        Self::new_with_client(url, reqwest::Client::new())
    }

    /// Create a new client given a string URL.
    pub fn new_from_string(url: &str) -> Result<Self> {
        let url = Url::parse(url)?;
        Ok(Self::new(url))
    }

    /// Create a client for the relay of a deployment.
    pub fn for_deployment(deployment: &Deployment) -> Result<Self> {
        Ok(Self::new(deployment.rfq_url()?).with_schema(deployment.schema()))
    }

    /// Set the per-request timeout.
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the order schema used to serialize submitted orders.
    pub const fn with_schema(mut self, schema: OrderSchema) -> Self {
        self.schema = schema;
        self
    }

    /// Get the base URL.
    pub const fn url(&self) -> &Url {
        &self.url
    }

    /// Get the client used to send requests
    pub const fn client(&self) -> &reqwest::Client {
        &self.client
    }

    /// Get the per-request timeout.
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Get the order schema.
    pub const fn schema(&self) -> OrderSchema {
        self.schema
    }

    fn endpoint(&self, join: &'static str) -> Result<Url> {
        self.url
            .join(join)
            .inspect_err(|e| warn!(%e, "Failed to join RFQ URL"))
            .map_err(Into::into)
    }

    /// Request a quote.
    #[instrument(skip_all, fields(pair = %request.pair, side = %request.side, size = %request.size))]
    pub async fn get_quote(&self, request: &QuoteRequest) -> Result<Quote> {
        let url = self.endpoint(RFQ)?;

        let response = self
            .client
            .get(url)
            .query(&request.query_pairs())
            .timeout(self.timeout)
            .send()
            .await
            .inspect_err(|e| warn!(%e, "Failed to fetch quote"))?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            warn!(%status, %body, "Quote request failed");
            return Err(RfqError::Status { status, body });
        }

        let quote: Quote = serde_json::from_str(&body).map_err(|e| {
            warn!(%e, "Failed to parse quote");
            RfqError::Decode(e.to_string())
        })?;
        debug!(quote_id = %quote.quote_id, "Received quote");
        Ok(quote)
    }

    /// Submit a signed order and return the relay's transaction identifier.
    #[instrument(skip_all, fields(order_id = %order.order().order_id))]
    pub async fn submit_order(&self, order: &SignedOrder) -> Result<String> {
        order.order().validate()?;
        let url = self.endpoint(ORDER)?;

        let response = self
            .client
            .post(url)
            .query(&[("signature", order.signature().to_hex())])
            .json(&order.order().to_payload(self.schema))
            .timeout(self.timeout)
            .send()
            .await
            .inspect_err(|e| warn!(%e, "Failed to submit order"))?;

        let status = response.status();
        let body = response.text().await?;
        interpret_relay_response(status, body)
    }
}

/// Map a relay response onto a transaction id or an error.
///
/// An `error` field wins over the status code, so the relay's own message is
/// what the caller sees.
fn interpret_relay_response(status: StatusCode, body: String) -> Result<String> {
    let parsed = serde_json::from_str::<RelayResponse>(&body);

    if let Some(message) = parsed.as_ref().ok().and_then(RelayResponse::error_message) {
        warn!(%status, %message, "Relay rejected order");
        return Err(RfqError::Relay { status, message });
    }

    if !status.is_success() {
        warn!(%status, %body, "Order submission failed");
        return Err(RfqError::Status { status, body });
    }

    match parsed {
        Ok(RelayResponse { tx: Some(tx), .. }) => {
            debug!(%tx, "Order accepted");
            Ok(tx)
        }
        Ok(_) => Err(RfqError::Decode("relay response has neither tx nor error".to_owned())),
        Err(e) => Err(RfqError::Decode(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relay_error_wins_over_status() {
        let err = interpret_relay_response(
            StatusCode::BAD_REQUEST,
            r#"{"error":"Insufficient balance"}"#.to_owned(),
        )
        .unwrap_err();
        assert!(
            matches!(err, RfqError::Relay { status, ref message } if status == StatusCode::BAD_REQUEST && message == "Insufficient balance")
        );

        let err =
            interpret_relay_response(StatusCode::OK, r#"{"error":"Quote expired"}"#.to_owned())
                .unwrap_err();
        assert!(matches!(err, RfqError::Relay { .. }));
    }

    #[test]
    fn tx_on_success() {
        let tx = interpret_relay_response(StatusCode::OK, r#"{"tx":"0xabc"}"#.to_owned()).unwrap();
        assert_eq!(tx, "0xabc");
    }

    #[test]
    fn non_json_and_empty_bodies() {
        let err = interpret_relay_response(StatusCode::BAD_GATEWAY, "upstream down".to_owned())
            .unwrap_err();
        assert!(matches!(err, RfqError::Status { status, .. } if status == StatusCode::BAD_GATEWAY));

        let err = interpret_relay_response(StatusCode::OK, "{}".to_owned()).unwrap_err();
        assert!(matches!(err, RfqError::Decode(_)));

        let err = interpret_relay_response(StatusCode::OK, "not json".to_owned()).unwrap_err();
        assert!(matches!(err, RfqError::Decode(_)));
    }

    #[test]
    fn deployment_client() {
        let client = RfqClient::for_deployment(&rfq_mint_constants::usdtb::STAGING).unwrap();
        assert_eq!(client.url().as_str(), "https://public.api.staging.usdtb.money/");
        assert_eq!(client.endpoint(RFQ).unwrap().as_str(), "https://public.api.staging.usdtb.money/rfq");
        assert_eq!(client.timeout(), DEFAULT_RFQ_TIMEOUT);
    }
}
