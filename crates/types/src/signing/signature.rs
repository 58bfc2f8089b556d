use alloy::primitives::{Bytes, Signature};
use rfq_mint_bindings::{SIGNATURE_TYPE_EIP1271, SIGNATURE_TYPE_EIP712};
use serde::{Deserialize, Serialize};

/// How the minting contract should check a signature.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum SignatureType {
    /// ECDSA over the EIP-712 digest.
    #[default]
    Eip712,
    /// Contract signature checked with `isValidSignature`.
    Eip1271,
}

impl SignatureType {
    /// The `signature_type` value on chain.
    pub const fn as_u8(&self) -> u8 {
        match self {
            Self::Eip712 => SIGNATURE_TYPE_EIP712,
            Self::Eip1271 => SIGNATURE_TYPE_EIP1271,
        }
    }
}

impl From<SignatureType> for u8 {
    fn from(ty: SignatureType) -> Self {
        ty.as_u8()
    }
}

impl TryFrom<u8> for SignatureType {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            SIGNATURE_TYPE_EIP712 => Ok(Self::Eip712),
            SIGNATURE_TYPE_EIP1271 => Ok(Self::Eip1271),
            other => Err(format!("unknown signature type {other}")),
        }
    }
}

/// A signature over an order, as the minting contract expects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSignature {
    /// Signature scheme.
    pub signature_type: SignatureType,
    /// Raw signature bytes. 65 bytes `r‖s‖v` for EIP-712.
    pub signature_bytes: Bytes,
}

impl OrderSignature {
    /// Wrap an ECDSA signature produced over the EIP-712 digest.
    pub fn eip712(signature: &Signature) -> Self {
        Self {
            signature_type: SignatureType::Eip712,
            signature_bytes: Bytes::copy_from_slice(&signature.as_bytes()),
        }
    }

    /// `0x`-prefixed hex of the signature bytes, as sent in the query string.
    pub fn to_hex(&self) -> String {
        self.signature_bytes.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::{B256, U256};

    #[test]
    fn eip712_bytes_are_rsv() {
        let sig = Signature::new(U256::from(1), U256::from(2), true);
        let order_sig = OrderSignature::eip712(&sig);
        assert_eq!(order_sig.signature_bytes.len(), 65);
        assert_eq!(&order_sig.signature_bytes[..32], B256::from(U256::from(1)).as_slice());
        assert_eq!(&order_sig.signature_bytes[32..64], B256::from(U256::from(2)).as_slice());
        assert_eq!(order_sig.signature_bytes[64], 28);
        assert!(order_sig.to_hex().starts_with("0x"));
        assert_eq!(order_sig.to_hex().len(), 2 + 130);
    }

    #[test]
    fn signature_type_serde() {
        assert_eq!(serde_json::to_string(&SignatureType::Eip1271).unwrap(), "1");
        assert_eq!(serde_json::from_str::<SignatureType>("0").unwrap(), SignatureType::Eip712);
        assert!(serde_json::from_str::<SignatureType>("7").is_err());
    }
}
