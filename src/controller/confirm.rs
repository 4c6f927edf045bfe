/// Two-state guard for destructive actions. `Closed` holds nothing; `Open`
/// holds exactly one pending target id. Only `request` opens it, and only an
/// explicit cancel or confirm closes it; a second `request` while open
/// replaces the pending target (last call wins, no queuing).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfirmGate {
    #[default]
    Closed,
    Open {
        pending: String,
    },
}

impl ConfirmGate {
    pub fn new() -> Self {
        ConfirmGate::Closed
    }

    pub fn request(&mut self, id: impl Into<String>) {
        *self = ConfirmGate::Open { pending: id.into() };
    }

    /// Discard the pending target without acting on it.
    pub fn cancel(&mut self) {
        *self = ConfirmGate::Closed;
    }

    /// Close the gate and hand back the pending target, if any. The caller
    /// performs the deletion; the gate itself never issues side effects.
    pub fn take_pending(&mut self) -> Option<String> {
        match std::mem::take(self) {
            ConfirmGate::Open { pending } => Some(pending),
            ConfirmGate::Closed => None,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, ConfirmGate::Open { .. })
    }

    pub fn pending(&self) -> Option<&str> {
        match self {
            ConfirmGate::Open { pending } => Some(pending),
            ConfirmGate::Closed => None,
        }
    }
}
