//! Single-shot recovery protocol for rejected credentials.
//!
//! Each original request owns one [`UnauthorizedRecovery`] guard, so a
//! request is refreshed-and-resubmitted at most once. Concurrent requests
//! each carry their own guard and refresh independently; the server is the
//! arbiter of duplicate refresh calls.

/// What the gateway should do after observing a 401.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecoveryAction {
    /// Exchange the refresh token for a new access token, then resubmit
    /// the original request exactly once.
    Refresh(String),
    /// The request was already retried; surface the failure as-is.
    Surface,
    /// No refresh token is stored; drop the session and send the client
    /// to the login entry point.
    ClearSession,
}

#[derive(Debug, Default)]
pub struct UnauthorizedRecovery {
    retried: bool,
}

impl UnauthorizedRecovery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_unauthorized(&mut self, refresh_token: Option<String>) -> RecoveryAction {
        if self.retried {
            return RecoveryAction::Surface;
        }
        self.retried = true;
        match refresh_token {
            Some(token) => RecoveryAction::Refresh(token),
            None => RecoveryAction::ClearSession,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_rejection_with_refresh_token_attempts_refresh() {
        let mut recovery = UnauthorizedRecovery::new();
        assert_eq!(
            recovery.on_unauthorized(Some("refresh-1".into())),
            RecoveryAction::Refresh("refresh-1".into())
        );
    }

    #[test]
    fn second_rejection_is_surfaced_never_refreshed_again() {
        let mut recovery = UnauthorizedRecovery::new();
        let _ = recovery.on_unauthorized(Some("refresh-1".into()));
        assert_eq!(
            recovery.on_unauthorized(Some("refresh-2".into())),
            RecoveryAction::Surface
        );
        // and it stays that way no matter how often the server rejects
        assert_eq!(recovery.on_unauthorized(None), RecoveryAction::Surface);
    }

    #[test]
    fn missing_refresh_token_clears_the_session() {
        let mut recovery = UnauthorizedRecovery::new();
        assert_eq!(recovery.on_unauthorized(None), RecoveryAction::ClearSession);
    }
}
