use crate::{OrderSubmitter, QuoteSource};
use rfq_mint_client::{RfqClient, RfqError};
use rfq_mint_types::{Quote, QuoteRequest, SignedOrder};

impl QuoteSource for RfqClient {
    type Error = RfqError;

    async fn get_quote(&self, request: &QuoteRequest) -> Result<Quote, Self::Error> {
        RfqClient::get_quote(self, request).await
    }
}

impl OrderSubmitter for RfqClient {
    type Error = RfqError;

    async fn submit_order(&self, order: &SignedOrder) -> Result<String, Self::Error> {
        RfqClient::submit_order(self, order).await
    }
}
