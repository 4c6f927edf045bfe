use crate::error::{TicketError, TicketResult};

/// Authentication context for the current process. Replaces what the remote
/// service's web front end keeps as a page-level logged-in flag: an explicit
/// object with init (anonymous) and teardown (logout) transitions, passed to
/// the views that need gating. Never persisted; lost when the process exits.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Session {
    #[default]
    Anonymous,
    Authenticated {
        username: String,
    },
}

impl Session {
    pub fn new() -> Self {
        Session::Anonymous
    }

    pub fn login(&mut self, username: impl Into<String>) {
        *self = Session::Authenticated {
            username: username.into(),
        };
    }

    pub fn logout(&mut self) {
        *self = Session::Anonymous;
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated { .. })
    }

    pub fn username(&self) -> Option<&str> {
        match self {
            Session::Authenticated { username } => Some(username),
            Session::Anonymous => None,
        }
    }

    /// Gate for protected views: `Err` redirects the caller to the login
    /// entry point.
    pub fn guard(&self) -> TicketResult<()> {
        if self.is_authenticated() {
            Ok(())
        } else {
            Err(TicketError::NotAuthenticated)
        }
    }
}
