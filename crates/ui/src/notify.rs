use core::fmt;

/// Whether a notification reports success or failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// The action went through.
    Success,
    /// The action failed.
    Error,
}

/// A transient message for the user, keyed to the transaction it reports
/// on when there is one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Success or failure.
    pub kind: NotificationKind,
    /// Text shown to the user.
    pub message: String,
    /// The approval transaction hash or relay transaction id.
    pub tx: Option<String>,
}

impl Notification {
    /// An approval was confirmed.
    pub fn approved(tx: impl fmt::Display) -> Self {
        let tx = tx.to_string();
        Self { kind: NotificationKind::Success, message: format!("Approved: {tx}"), tx: Some(tx) }
    }

    /// An approval failed.
    pub fn approve_failed() -> Self {
        Self { kind: NotificationKind::Error, message: "Error approving".to_owned(), tx: None }
    }

    /// The relay accepted an order.
    pub fn minted(tx: &str) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: format!("Minted: {tx}"),
            tx: Some(tx.to_owned()),
        }
    }

    /// A mint failed.
    pub fn mint_failed(error: impl fmt::Display) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: format!("Error minting: {error}"),
            tx: None,
        }
    }

    /// The allowance could not be read.
    pub fn allowance_failed() -> Self {
        Self {
            kind: NotificationKind::Error,
            message: "Error checking allowance".to_owned(),
            tx: None,
        }
    }

    /// True for failures.
    pub const fn is_error(&self) -> bool {
        matches!(self.kind, NotificationKind::Error)
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
