use alloy::primitives::Address;

/// Which screen the app shows.
///
/// Screens follow a fixed order: nothing until mounted, then a connect
/// prompt, then a whitelist check, then either the form or a
/// not-whitelisted notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    /// Not yet mounted. Nothing is rendered.
    Unmounted {
        /// A wallet that connected before mount. Checked once mounted.
        pending: Option<Address>,
    },
    /// Mounted with no wallet connected.
    Disconnected,
    /// Waiting on the whitelist answer for `address`.
    CheckingWhitelist {
        /// The connected wallet.
        address: Address,
    },
    /// `address` may not mint.
    NotWhitelisted {
        /// The connected wallet.
        address: Address,
    },
    /// `address` may mint. The form is shown.
    Ready {
        /// The connected wallet.
        address: Address,
    },
}

/// Inputs that move the [`Gate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateEvent {
    /// The app finished mounting.
    Mounted,
    /// A wallet connected, or switched account.
    Connected(Address),
    /// The wallet disconnected.
    Disconnected,
    /// The whitelist check for the current address finished.
    WhitelistResolved(bool),
}

impl Default for Gate {
    fn default() -> Self {
        Self::Unmounted { pending: None }
    }
}

impl Gate {
    /// Apply an event. Events that make no sense in the current state leave
    /// it unchanged.
    pub const fn on(self, event: GateEvent) -> Self {
        match (self, event) {
            (Self::Unmounted { pending: Some(address) }, GateEvent::Mounted) => {
                Self::CheckingWhitelist { address }
            }
            (Self::Unmounted { pending: None }, GateEvent::Mounted) => Self::Disconnected,
            (Self::Unmounted { .. }, GateEvent::Connected(address)) => {
                Self::Unmounted { pending: Some(address) }
            }
            (Self::Unmounted { .. }, GateEvent::Disconnected) => Self::Unmounted { pending: None },
            (Self::Unmounted { .. }, GateEvent::WhitelistResolved(_)) => self,
            (_, GateEvent::Connected(address)) => Self::CheckingWhitelist { address },
            (_, GateEvent::Disconnected) => Self::Disconnected,
            (Self::CheckingWhitelist { address }, GateEvent::WhitelistResolved(true)) => {
                Self::Ready { address }
            }
            (Self::CheckingWhitelist { address }, GateEvent::WhitelistResolved(false)) => {
                Self::NotWhitelisted { address }
            }
            _ => self,
        }
    }

    /// The connected wallet, if any.
    pub const fn address(&self) -> Option<Address> {
        match self {
            Self::CheckingWhitelist { address }
            | Self::NotWhitelisted { address }
            | Self::Ready { address } => Some(*address),
            Self::Unmounted { .. } | Self::Disconnected => None,
        }
    }

    /// True when the wallet is whitelisted and the form should be shown.
    pub const fn is_ready(&self) -> bool {
        matches!(self, Self::Ready { .. })
    }

    /// True while a whitelist check is pending.
    pub const fn is_checking(&self) -> bool {
        matches!(self, Self::CheckingWhitelist { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const USER: Address = Address::repeat_byte(0xaa);
    const OTHER: Address = Address::repeat_byte(0xbb);

    #[test]
    fn linear_path_to_ready() {
        let gate = Gate::default();
        assert_eq!(gate, Gate::Unmounted { pending: None });

        let gate = gate.on(GateEvent::Mounted);
        assert_eq!(gate, Gate::Disconnected);
        assert_eq!(gate.address(), None);

        let gate = gate.on(GateEvent::Connected(USER));
        assert!(gate.is_checking());
        assert_eq!(gate.address(), Some(USER));

        let gate = gate.on(GateEvent::WhitelistResolved(true));
        assert_eq!(gate, Gate::Ready { address: USER });
        assert!(gate.is_ready());
    }

    #[test]
    fn not_whitelisted() {
        let gate = Gate::Disconnected
            .on(GateEvent::Connected(USER))
            .on(GateEvent::WhitelistResolved(false));
        assert_eq!(gate, Gate::NotWhitelisted { address: USER });
        assert!(!gate.is_ready());
    }

    #[test]
    fn connection_before_mount_is_kept() {
        let gate = Gate::default().on(GateEvent::Connected(USER));
        assert_eq!(gate, Gate::Unmounted { pending: Some(USER) });
        assert_eq!(gate.address(), None);

        // nothing resolves before mount
        let gate = gate.on(GateEvent::WhitelistResolved(true));
        assert_eq!(gate, Gate::Unmounted { pending: Some(USER) });

        let gate = gate.on(GateEvent::Mounted);
        assert_eq!(gate, Gate::CheckingWhitelist { address: USER });
        assert_eq!(gate.on(GateEvent::WhitelistResolved(true)), Gate::Ready { address: USER });
    }

    #[test]
    fn latest_connection_before_mount_wins() {
        let gate = Gate::default()
            .on(GateEvent::Connected(USER))
            .on(GateEvent::Connected(OTHER))
            .on(GateEvent::Mounted);
        assert_eq!(gate, Gate::CheckingWhitelist { address: OTHER });

        let gate = Gate::default()
            .on(GateEvent::Connected(USER))
            .on(GateEvent::Disconnected)
            .on(GateEvent::Mounted);
        assert_eq!(gate, Gate::Disconnected);
    }

    #[test]
    fn account_switch_rechecks() {
        let gate = Gate::Ready { address: USER }.on(GateEvent::Connected(OTHER));
        assert_eq!(gate, Gate::CheckingWhitelist { address: OTHER });
    }

    #[test]
    fn disconnect_resets() {
        let gate = Gate::Ready { address: USER }.on(GateEvent::Disconnected);
        assert_eq!(gate, Gate::Disconnected);
    }

    #[test]
    fn stray_resolution_ignored() {
        assert_eq!(Gate::Disconnected.on(GateEvent::WhitelistResolved(true)), Gate::Disconnected);
        let ready = Gate::Ready { address: USER };
        assert_eq!(ready.on(GateEvent::WhitelistResolved(false)), ready);
        assert_eq!(ready.on(GateEvent::Mounted), ready);
    }
}
