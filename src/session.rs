use dioxus::prelude::*;

/// Read-only view of the visitor's session. Provided once at the app shell and
/// consumed by the navbar; nothing below the shell mutates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    pub authenticated: bool,
}

impl Session {
    /// Stand-in for a real login flow: always signed in.
    pub fn simulated() -> Self {
        Self {
            authenticated: true,
        }
    }

    pub fn anonymous() -> Self {
        Self {
            authenticated: false,
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::simulated()
    }
}

/// The session from context, or the simulated one when no shell provided it.
pub fn use_session() -> Session {
    try_use_context::<Session>().unwrap_or_default()
}
