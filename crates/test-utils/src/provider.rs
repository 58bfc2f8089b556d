//! Mocked alloy providers.
use alloy::{
    primitives::Bytes,
    providers::{ProviderBuilder, RootProvider},
    sol_types::SolValue,
    transports::mock::Asserter,
};

/// A provider answering from an [`Asserter`] queue, with no fillers.
///
/// Every RPC call pops the next pushed response, so tests push one response
/// per expected call, in order.
pub fn mock_provider() -> (RootProvider, Asserter) {
    let asserter = Asserter::new();
    let provider: RootProvider =
        ProviderBuilder::default().connect_mocked_client(asserter.clone());
    (provider, asserter)
}

/// Queue the return data of an `eth_call`.
pub fn push_call_result<T: SolValue>(asserter: &Asserter, value: T) {
    asserter.push_success(&Bytes::from(value.abi_encode()));
}
