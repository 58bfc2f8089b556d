use crate::{OrderSignature, SigningDomain, SigningError, UnsignedOrder};
use alloy::{
    primitives::{aliases::U120, Address, B256},
    sol_types::{Eip712Domain, SolStruct},
};
use rfq_mint_bindings::{UsdtbMinting, UstbMinting};
use rfq_mint_constants::OrderSchema;

/// An order normalized to the integer widths of the on-chain struct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SigningOrder {
    /// Order id.
    pub order_id: String,
    /// `0` for mint, `1` for redeem.
    pub order_type: u8,
    /// Expiry, unix seconds.
    pub expiry: U120,
    /// Nonce.
    pub nonce: u128,
    /// Collateral provider.
    pub benefactor: Address,
    /// Minted token recipient.
    pub beneficiary: Address,
    /// Collateral token.
    pub collateral_asset: Address,
    /// Collateral amount in smallest units.
    pub collateral_amount: u128,
    /// Minted amount in smallest units.
    pub minted_amount: u128,
}

impl TryFrom<&UnsignedOrder> for SigningOrder {
    type Error = SigningError;

    fn try_from(order: &UnsignedOrder) -> Result<Self, Self::Error> {
        if order.order_id.is_empty() {
            return Err(SigningError::EmptyOrderId);
        }
        let collateral_amount = order
            .collateral_amount
            .to_u128()
            .map_err(|source| SigningError::AmountOutOfRange { field: "collateral_amount", source })?;
        let minted_amount = order
            .minted_amount
            .to_u128()
            .map_err(|source| SigningError::AmountOutOfRange { field: "minted_amount", source })?;

        Ok(Self {
            order_id: order.order_id.clone(),
            order_type: order.order_type.as_u8(),
            expiry: U120::from(order.expiry),
            nonce: order.nonce as u128,
            benefactor: order.benefactor,
            beneficiary: order.beneficiary,
            collateral_asset: order.collateral_asset,
            collateral_amount,
            minted_amount,
        })
    }
}

impl SigningOrder {
    /// Shape the order as the deployment's contract struct.
    pub fn for_schema(self, schema: OrderSchema) -> MintingOrder {
        match schema {
            OrderSchema::Usdtb => MintingOrder::Usdtb(UsdtbMinting::Order {
                order_id: self.order_id,
                order_type: self.order_type,
                expiry: self.expiry,
                nonce: self.nonce,
                benefactor: self.benefactor,
                beneficiary: self.beneficiary,
                collateral_asset: self.collateral_asset,
                collateral_amount: self.collateral_amount,
                usdtb_amount: self.minted_amount,
            }),
            OrderSchema::Ustb => MintingOrder::Ustb(UstbMinting::Order {
                order_id: self.order_id,
                order_type: self.order_type,
                expiry: self.expiry,
                nonce: self.nonce,
                benefactor: self.benefactor,
                beneficiary: self.beneficiary,
                collateral_asset: self.collateral_asset,
                collateral_amount: self.collateral_amount,
                ustb_amount: self.minted_amount,
            }),
        }
    }
}

/// The contract `Order` struct of a specific deployment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MintingOrder {
    /// `Order` with a `usdtb_amount` field.
    Usdtb(UsdtbMinting::Order),
    /// `Order` with a `ustb_amount` field.
    Ustb(UstbMinting::Order),
}

impl MintingOrder {
    /// The EIP-712 digest of this order under `domain`.
    pub fn eip712_signing_hash(&self, domain: &Eip712Domain) -> B256 {
        match self {
            Self::Usdtb(order) => order.eip712_signing_hash(domain),
            Self::Ustb(order) => order.eip712_signing_hash(domain),
        }
    }
}

/// An order together with its signature.
///
/// Produced by [`UnsignedOrder::sign`]. Carries the digest that was signed
/// and the address that signed it, so that on-chain verification can compare
/// against both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedOrder {
    order: UnsignedOrder,
    domain: SigningDomain,
    signature: OrderSignature,
    signing_hash: B256,
    signer: Address,
}

impl SignedOrder {
    /// Assemble a signed order.
    pub const fn new(
        order: UnsignedOrder,
        domain: SigningDomain,
        signature: OrderSignature,
        signing_hash: B256,
        signer: Address,
    ) -> Self {
        Self { order, domain, signature, signing_hash, signer }
    }

    /// Get the order.
    pub const fn order(&self) -> &UnsignedOrder {
        &self.order
    }

    /// Get the domain the order was signed under.
    pub const fn domain(&self) -> &SigningDomain {
        &self.domain
    }

    /// Get the signature.
    pub const fn signature(&self) -> &OrderSignature {
        &self.signature
    }

    /// Get the EIP-712 digest that was signed.
    pub const fn signing_hash(&self) -> B256 {
        self.signing_hash
    }

    /// Get the signer address.
    pub const fn signer(&self) -> Address {
        self.signer
    }

    /// Decompose into the order and signature.
    pub fn into_parts(self) -> (UnsignedOrder, OrderSignature) {
        (self.order, self.signature)
    }
}
