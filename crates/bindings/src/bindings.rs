#![allow(missing_docs)]
#![allow(non_snake_case)]

mod erc20 {
    alloy::sol!(
        #[derive(Debug, PartialEq, Eq)]
        #[sol(rpc)]
        interface IERC20 {
            function allowance(address owner, address spender) external view returns (uint256);
            function approve(address spender, uint256 amount) external returns (bool);
            function balanceOf(address account) external view returns (uint256);
            function decimals() external view returns (uint8);
        }
    );
}
pub use erc20::IERC20;

mod usdtb {
    alloy::sol!(
        #[derive(Debug, PartialEq, Eq)]
        #[sol(rpc)]
        contract UsdtbMinting {
            struct Order {
                string order_id;
                uint8 order_type;
                uint120 expiry;
                uint128 nonce;
                address benefactor;
                address beneficiary;
                address collateral_asset;
                uint128 collateral_amount;
                uint128 usdtb_amount;
            }

            struct Signature {
                uint8 signature_type;
                bytes signature_bytes;
            }

            error InvalidSignature();
            error SignatureExpired();
            error InvalidNonce();

            function hashOrder(Order calldata order) public view returns (bytes32);
            function verifyOrder(Order calldata order, Signature calldata signature)
                public view returns (bytes32 taker_order_hash);
            function isWhitelistedBenefactor(address benefactor) external view returns (bool);
        }
    );
}
pub use usdtb::UsdtbMinting;

mod ustb {
    alloy::sol!(
        #[derive(Debug, PartialEq, Eq)]
        #[sol(rpc)]
        contract UstbMinting {
            struct Order {
                string order_id;
                uint8 order_type;
                uint120 expiry;
                uint128 nonce;
                address benefactor;
                address beneficiary;
                address collateral_asset;
                uint128 collateral_amount;
                uint128 ustb_amount;
            }

            struct Signature {
                uint8 signature_type;
                bytes signature_bytes;
            }

            error InvalidSignature();
            error SignatureExpired();
            error InvalidNonce();

            function hashOrder(Order calldata order) public view returns (bytes32);
            function verifyOrder(Order calldata order, Signature calldata signature)
                public view returns (bytes32 taker_order_hash);
            function isWhitelistedBenefactor(address benefactor) external view returns (bool);
        }
    );
}
pub use ustb::UstbMinting;

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::sol_types::SolStruct;

    #[test]
    fn order_type_strings() {
        assert_eq!(
            UsdtbMinting::Order::eip712_encode_type(),
            "Order(string order_id,uint8 order_type,uint120 expiry,uint128 nonce,address benefactor,address beneficiary,address collateral_asset,uint128 collateral_amount,uint128 usdtb_amount)"
        );
        assert_eq!(
            UstbMinting::Order::eip712_encode_type(),
            "Order(string order_id,uint8 order_type,uint120 expiry,uint128 nonce,address benefactor,address beneficiary,address collateral_asset,uint128 collateral_amount,uint128 ustb_amount)"
        );
    }
}
