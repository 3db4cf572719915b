//! Session state machine. Pure transitions live here; the async glue is
//! in [`context`](super::context).

use contracts::domain::user::User;

use crate::system::http::error::ApiError;

/// Process-wide authentication state. Exactly one instance exists, owned
/// by the session context; views read it and never mutate it directly.
#[derive(Debug, Clone, Default)]
pub enum SessionState {
    /// Startup state: a stored token (if any) has not been resolved yet.
    /// Views render a loading shell while here.
    #[default]
    Unknown,
    Authenticated(User),
    Anonymous,
}

impl SessionState {
    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.user().is_some_and(User::is_admin)
    }
}

/// Startup transition: with no stored token the session resolves to
/// `Anonymous` immediately, with no network call. Returns `None` when a
/// profile fetch is required to resolve the state.
pub fn startup_state(has_stored_token: bool) -> Option<SessionState> {
    (!has_stored_token).then_some(SessionState::Anonymous)
}

/// Transition applied once the profile fetch settles. Any failure
/// resolves to `Anonymous`; stored tokens are left in place so the
/// gateway can attempt recovery on the next authenticated call.
pub fn after_profile_fetch(result: Result<User, ApiError>) -> SessionState {
    match result {
        Ok(user) => SessionState::Authenticated(user),
        Err(_) => SessionState::Anonymous,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::user::UserRole;

    fn reader() -> User {
        User {
            id: 3,
            username: "reader".into(),
            email: "reader@example.com".into(),
            first_name: "Jo".into(),
            last_name: "March".into(),
            phone_number: None,
            address: None,
            role: UserRole::User,
            date_joined: chrono::DateTime::from_timestamp(1_714_550_000, 0).unwrap(),
        }
    }

    #[test]
    fn startup_without_token_is_anonymous_with_no_network_call() {
        assert!(matches!(
            startup_state(false),
            Some(SessionState::Anonymous)
        ));
    }

    #[test]
    fn startup_with_token_requires_a_profile_fetch() {
        assert!(startup_state(true).is_none());
    }

    #[test]
    fn successful_profile_fetch_authenticates() {
        let state = after_profile_fetch(Ok(reader()));
        assert!(state.is_authenticated());
        assert_eq!(state.user().map(|u| u.id), Some(3));
    }

    #[test]
    fn any_profile_fetch_failure_resolves_to_anonymous() {
        for error in [
            ApiError::Unauthorized,
            ApiError::Forbidden,
            ApiError::Network("connection refused".into()),
            ApiError::Http(500),
        ] {
            let state = after_profile_fetch(Err(error));
            assert!(!state.is_authenticated());
            assert!(!state.is_unknown());
        }
    }

    #[test]
    fn authenticated_iff_user_present() {
        for state in [
            SessionState::Unknown,
            SessionState::Anonymous,
            SessionState::Authenticated(reader()),
        ] {
            assert_eq!(state.is_authenticated(), state.user().is_some());
        }
    }
}
