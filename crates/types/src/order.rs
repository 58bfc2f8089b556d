use crate::{
    parse_address, signing::SigningOrder, AddressError, Amount, AmountError, MintingOrder,
    OrderSignature, Side, SignedOrder, SigningDomain, SigningError,
};
use alloy::{
    primitives::{Address, B256},
    signers::Signer,
};
use rfq_mint_constants::{Deployment, OrderSchema};
use serde::{ser::SerializeMap, Deserialize, Serialize, Serializer};

/// Errors returned when validating order input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OrderError {
    /// An address field is malformed.
    #[error("invalid {field}: {source}")]
    Address {
        /// Name of the order field.
        field: &'static str,
        /// Underlying error.
        #[source]
        source: AddressError,
    },
    /// An amount field is malformed.
    #[error("invalid {field}: {source}")]
    Amount {
        /// Name of the order field.
        field: &'static str,
        /// Underlying error.
        #[source]
        source: AmountError,
    },
    /// The order id is empty.
    #[error("order id is empty")]
    EmptyOrderId,
}

impl OrderError {
    /// Parse an address field, naming the field on failure.
    pub fn address(field: &'static str, value: &str) -> Result<Address, Self> {
        parse_address(value).map_err(|source| Self::Address { field, source })
    }

    /// Parse an amount field, naming the field on failure.
    pub fn amount(field: &'static str, value: &str) -> Result<Amount, Self> {
        Amount::parse(value).map_err(|source| Self::Amount { field, source })
    }
}

/// An order before it is signed.
///
/// Amounts keep the decimal strings the quote carried. The relay receives
/// these strings verbatim, while signing uses their exact integer values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnsignedOrder {
    /// Order id, equal to the quote id.
    pub order_id: String,
    /// Mint or redeem.
    pub order_type: Side,
    /// Expiry, unix seconds.
    pub expiry: u64,
    /// Replay-protection nonce.
    pub nonce: u64,
    /// Address providing the input token.
    pub benefactor: Address,
    /// Address receiving the output token.
    pub beneficiary: Address,
    /// Collateral token.
    pub collateral_asset: Address,
    /// Collateral amount in smallest units.
    pub collateral_amount: Amount,
    /// Minted token amount in smallest units.
    pub minted_amount: Amount,
}

impl UnsignedOrder {
    /// Check the order before any network call.
    pub fn validate(&self) -> Result<(), OrderError> {
        if self.order_id.trim().is_empty() {
            return Err(OrderError::EmptyOrderId);
        }
        Ok(())
    }

    /// Normalize to the widths of the on-chain struct.
    pub fn to_signing_order(&self) -> Result<SigningOrder, SigningError> {
        SigningOrder::try_from(self)
    }

    /// Shape as the contract struct of `schema`.
    pub fn to_minting_order(&self, schema: OrderSchema) -> Result<MintingOrder, SigningError> {
        Ok(self.to_signing_order()?.for_schema(schema))
    }

    /// Compute the EIP-712 digest under the deployment's domain.
    pub fn signing_hash(&self, deployment: &Deployment) -> Result<B256, SigningError> {
        let domain = SigningDomain::from(deployment).to_eip712_domain();
        Ok(self.to_minting_order(deployment.schema())?.eip712_signing_hash(&domain))
    }

    /// Sign the order for the given deployment.
    pub async fn sign<S: Signer>(
        &self,
        deployment: &Deployment,
        signer: &S,
    ) -> Result<SignedOrder, SigningError> {
        let signing_hash = self.signing_hash(deployment)?;
        let signature = signer.sign_hash(&signing_hash).await?;

        Ok(SignedOrder::new(
            self.clone(),
            SigningDomain::from(deployment),
            OrderSignature::eip712(&signature),
            signing_hash,
            signer.address(),
        ))
    }

    /// The JSON body the relay accepts for this order.
    pub const fn to_payload(&self, schema: OrderSchema) -> OrderPayload<'_> {
        OrderPayload { order: self, schema }
    }
}

/// Relay JSON view of an [`UnsignedOrder`].
///
/// The minted amount is written under the deployment's field name and the
/// order type as `"MINT"` or `"REDEEM"`.
#[derive(Debug, Clone, Copy)]
pub struct OrderPayload<'a> {
    order: &'a UnsignedOrder,
    schema: OrderSchema,
}

impl Serialize for OrderPayload<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let order = self.order;
        let mut map = serializer.serialize_map(Some(9))?;
        map.serialize_entry("order_id", &order.order_id)?;
        map.serialize_entry("order_type", &order.order_type)?;
        map.serialize_entry("expiry", &order.expiry)?;
        map.serialize_entry("nonce", &order.nonce)?;
        map.serialize_entry("benefactor", &order.benefactor)?;
        map.serialize_entry("beneficiary", &order.beneficiary)?;
        map.serialize_entry("collateral_asset", &order.collateral_asset)?;
        map.serialize_entry("collateral_amount", &order.collateral_amount)?;
        map.serialize_entry(self.schema.minted_amount_field(), &order.minted_amount)?;
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::{
        primitives::{address, U256},
        signers::{k256::ecdsa::SigningKey, local::PrivateKeySigner},
    };
    use rfq_mint_constants::usdtb;

    const BENEFACTOR: Address = address!("0x1111111111111111111111111111111111111111");
    const USDC: Address = address!("0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48");

    fn order() -> UnsignedOrder {
        UnsignedOrder {
            order_id: "q1".to_owned(),
            order_type: Side::Mint,
            expiry: 1_700_000_060,
            nonce: 1_700_000_060,
            benefactor: BENEFACTOR,
            beneficiary: BENEFACTOR,
            collateral_asset: USDC,
            collateral_amount: Amount::parse("30000000").unwrap(),
            minted_amount: Amount::parse("3e7").unwrap(),
        }
    }

    #[test]
    fn payload_uses_deployment_field() {
        let order = order();
        let json = serde_json::to_value(order.to_payload(OrderSchema::Usdtb)).unwrap();
        assert_eq!(json["order_type"], "MINT");
        assert_eq!(json["expiry"], 1_700_000_060u64);
        assert_eq!(json["collateral_amount"], "30000000");
        assert_eq!(json["usdtb_amount"], "3e7");
        assert!(json.get("minted_amount").is_none());

        let json = serde_json::to_value(order.to_payload(OrderSchema::Ustb)).unwrap();
        assert_eq!(json["ustb_amount"], "3e7");
        assert!(json.get("usdtb_amount").is_none());
    }

    #[test]
    fn signing_hash_is_deterministic() {
        let deployment = usdtb::PRODUCTION;
        let a = order().signing_hash(&deployment).unwrap();
        let b = order().signing_hash(&deployment).unwrap();
        assert_eq!(a, b);

        // equal integer values hash equally regardless of decimal form
        let mut plain = order();
        plain.minted_amount = Amount::from(U256::from(30_000_000u64));
        assert_eq!(plain.signing_hash(&deployment).unwrap(), a);

        let mut other = order();
        other.nonce += 1;
        assert_ne!(other.signing_hash(&deployment).unwrap(), a);

        let staging = usdtb::STAGING;
        assert_ne!(order().signing_hash(&staging).unwrap(), a);
    }

    #[test]
    fn oversized_amount_fails_signing() {
        let mut order = order();
        order.collateral_amount = Amount::from(U256::from(u128::MAX) + U256::from(1));
        assert!(matches!(
            order.signing_hash(&usdtb::PRODUCTION),
            Err(SigningError::AmountOutOfRange { field: "collateral_amount", .. })
        ));
    }

    #[tokio::test]
    async fn sign_recovers_signer() {
        let signer = PrivateKeySigner::from(SigningKey::from_slice(&[7u8; 32]).unwrap());
        let deployment = usdtb::PRODUCTION;
        let signed = order().sign(&deployment, &signer).await.unwrap();

        assert_eq!(signed.signer(), signer.address());
        assert_eq!(signed.signature().signature_bytes.len(), 65);

        let sig = alloy::primitives::Signature::from_raw(&signed.signature().signature_bytes)
            .unwrap();
        let recovered = sig.recover_address_from_prehash(&signed.signing_hash()).unwrap();
        assert_eq!(recovered, signer.address());
    }

    #[test]
    fn field_errors_name_the_field() {
        let err = OrderError::address("benefactor", "0x12").unwrap_err();
        assert!(err.to_string().starts_with("invalid benefactor"));
        let err = OrderError::amount("collateral_amount", "1.5").unwrap_err();
        assert!(matches!(err, OrderError::Amount { field: "collateral_amount", .. }));
    }
}
