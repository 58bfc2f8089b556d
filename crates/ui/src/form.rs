use crate::Notification;
use alloy::{
    primitives::{Address, TxHash, U256},
    signers::Signer,
};
use rfq_mint_constants::{tokens::PAIR_TOKENS, TokenRecord};
use rfq_mint_orders::{
    Erc20Approvals, MintFlow, MintReceipt, MintRequest, OrderSubmitter, OrderVerifier,
    QuoteSource,
};
use rfq_mint_types::{Amount, AmountError, ApprovalPolicy};
use tracing::{debug, warn};

/// What the form is waiting on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    /// Nothing in flight.
    #[default]
    Idle,
    /// Reading the allowance.
    CheckingAllowance,
    /// An approval transaction is in flight.
    Approving,
    /// A mint is in flight.
    Minting,
}

/// What pressing the button does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    /// Approve the minting contract.
    Approve,
    /// Place the mint order.
    Mint,
}

/// Render state of the form's button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Button {
    /// Text on the button.
    pub label: &'static str,
    /// The button cannot be pressed.
    pub disabled: bool,
    /// Show a loading indicator.
    pub loading: bool,
    /// What a press does.
    pub action: ButtonAction,
}

impl Button {
    /// Button state for a phase, whether the allowance covers the amount, and
    /// whether an amount is entered.
    pub const fn for_state(phase: Phase, allowed: bool, has_amount: bool) -> Self {
        let label = match phase {
            Phase::CheckingAllowance => "Checking allowance...",
            Phase::Approving => "Approving...",
            Phase::Minting => "Minting...",
            Phase::Idle if allowed => "Mint",
            Phase::Idle => "Approve",
        };
        let loading = !matches!(phase, Phase::Idle);
        Self {
            label,
            disabled: loading || !has_amount,
            loading,
            action: if allowed { ButtonAction::Mint } else { ButtonAction::Approve },
        }
    }
}

/// The mint form: amount input, collateral selector, and the Approve/Mint
/// button.
///
/// Editing is refused while anything is in flight. Any edit clears the known
/// allowance, so the host re-reads it with [`MintForm::check_allowance`].
#[derive(Debug, Clone)]
pub struct MintForm {
    tokens: Vec<TokenRecord>,
    selected: usize,
    input: String,
    amount: Option<Result<Amount, AmountError>>,
    allowance: Option<U256>,
    phase: Phase,
    notifications: Vec<Notification>,
}

impl Default for MintForm {
    fn default() -> Self {
        Self::new(PAIR_TOKENS.iter().cloned())
    }
}

impl MintForm {
    /// Create a form offering `tokens`. The first token is selected.
    pub fn new(tokens: impl IntoIterator<Item = TokenRecord>) -> Self {
        Self {
            tokens: tokens.into_iter().collect(),
            selected: 0,
            input: String::new(),
            amount: None,
            allowance: None,
            phase: Phase::Idle,
            notifications: Vec::new(),
        }
    }

    /// Tokens offered by the selector.
    pub fn tokens(&self) -> &[TokenRecord] {
        &self.tokens
    }

    /// The selected token, if any are offered.
    pub fn selected_token(&self) -> Option<&TokenRecord> {
        self.tokens.get(self.selected)
    }

    /// The cleaned input text.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// The current phase.
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// True while a read or transaction is in flight.
    pub const fn is_busy(&self) -> bool {
        !matches!(self.phase, Phase::Idle)
    }

    /// The last allowance read, if still current.
    pub const fn allowance(&self) -> Option<U256> {
        self.allowance
    }

    /// The entered amount in smallest units. `None` when empty, invalid, or
    /// zero.
    pub fn amount(&self) -> Option<U256> {
        match &self.amount {
            Some(Ok(amount)) if !amount.value().is_zero() => Some(amount.value()),
            _ => None,
        }
    }

    /// Why the input does not parse, if it does not.
    pub fn input_error(&self) -> Option<&AmountError> {
        self.amount.as_ref().and_then(|amount| amount.as_ref().err())
    }

    /// True when the known allowance covers the entered amount.
    pub fn is_allowed(&self) -> bool {
        matches!((self.allowance, self.amount()), (Some(allowance), Some(amount)) if allowance >= amount)
    }

    /// Current button state.
    pub fn button(&self) -> Button {
        Button::for_state(self.phase, self.is_allowed(), self.amount().is_some())
    }

    /// Notifications not yet taken.
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// Take all pending notifications.
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        core::mem::take(&mut self.notifications)
    }

    /// Replace the input text. Returns `false` if the form is busy.
    pub fn set_input(&mut self, raw: &str) -> bool {
        if self.is_busy() {
            return false;
        }
        self.input = crate::clean_input(raw);
        self.reparse();
        true
    }

    /// Select the token at `address`. Returns `false` if the form is busy or
    /// the token is not offered.
    pub fn select_token(&mut self, address: Address) -> bool {
        if self.is_busy() {
            return false;
        }
        let Some(index) = self.tokens.iter().position(|token| token.address() == address) else {
            return false;
        };
        self.selected = index;
        self.reparse();
        true
    }

    fn reparse(&mut self) {
        self.allowance = None;
        self.amount = match (self.input.is_empty(), self.selected_token()) {
            (false, Some(token)) => Some(Amount::from_units(&self.input, token.decimals())),
            _ => None,
        };
    }

    /// Read the allowance `owner` has granted on the selected token.
    pub async fn check_allowance<A>(&mut self, approvals: &A, owner: Address) -> Option<U256>
    where
        A: Erc20Approvals,
        A::Error: core::fmt::Display,
    {
        let token = self.selected_token()?.address();
        self.phase = Phase::CheckingAllowance;
        let result = approvals.allowance(token, owner).await;
        self.phase = Phase::Idle;

        match result {
            Ok(allowance) => {
                debug!(%token, %allowance, "Allowance read");
                self.allowance = Some(allowance);
                Some(allowance)
            }
            Err(error) => {
                warn!(%error, %token, "Failed to read allowance");
                self.notifications.push(Notification::allowance_failed());
                None
            }
        }
    }

    /// Approve the entered amount, or more per `policy`, on the selected
    /// token.
    pub async fn approve<A>(&mut self, approvals: &A, policy: ApprovalPolicy) -> Option<TxHash>
    where
        A: Erc20Approvals,
        A::Error: core::fmt::Display,
    {
        let token = self.selected_token()?.address();
        let amount = policy.approval_amount(self.amount()?);
        self.phase = Phase::Approving;
        let result = approvals.approve(token, amount, policy.confirmations).await;
        self.phase = Phase::Idle;

        match result {
            Ok(tx_hash) => {
                self.allowance = Some(amount);
                self.notifications.push(Notification::approved(tx_hash));
                Some(tx_hash)
            }
            Err(error) => {
                warn!(%error, %token, "Approval failed");
                self.notifications.push(Notification::approve_failed());
                None
            }
        }
    }

    /// Mint the entered amount of the selected token through `flow`.
    pub async fn mint<Sign, Quotes, Approvals, Submit, Verify>(
        &mut self,
        flow: &MintFlow<Sign, Quotes, Approvals, Submit, Verify>,
    ) -> Option<MintReceipt>
    where
        Sign: Signer + Send + Sync,
        Quotes: QuoteSource + Send + Sync,
        Quotes::Error: core::error::Error + Send + Sync + 'static,
        Approvals: Erc20Approvals + Send + Sync,
        Approvals::Error: core::error::Error + Send + Sync + 'static,
        Submit: OrderSubmitter + Send + Sync,
        Submit::Error: core::error::Error + Send + Sync + 'static,
        Verify: OrderVerifier + Send + Sync,
        Verify::Error: core::error::Error + Send + Sync + 'static,
    {
        self.amount()?;
        let request = MintRequest::mint(self.selected_token()?.clone(), self.input.clone());
        self.phase = Phase::Minting;
        let result = flow.run(request).await;
        self.phase = Phase::Idle;
        // the relay pulls the collateral, so the last read is stale
        self.allowance = None;

        match result {
            Ok(receipt) => {
                self.notifications.push(Notification::minted(&receipt.tx));
                Some(receipt)
            }
            Err(error) => {
                warn!(%error, "Mint failed");
                self.notifications.push(Notification::mint_failed(&error));
                None
            }
        }
    }
}
