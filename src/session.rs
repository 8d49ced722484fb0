//! Session Holder
//!
//! Explicitly constructed auth state: a bearer credential plus the user
//! identity, restored from localStorage at startup and provided via
//! context. Nothing else reads storage directly.

use leptos::prelude::*;

use crate::api::{self, ApiError};
use crate::models::{AuthResponse, User};

const TOKEN_KEY: &str = "token";
const USER_KEY: &str = "user";

/// Signal-backed session state
#[derive(Clone, Copy)]
pub struct Session {
    token: RwSignal<Option<String>>,
    user: RwSignal<Option<User>>,
}

impl Session {
    /// Restore a previously saved session, or start logged out.
    /// Corrupted stored state counts as absent.
    pub fn restore() -> Self {
        let (token, user) = read_storage();
        Self {
            token: RwSignal::new(token),
            user: RwSignal::new(user),
        }
    }

    /// Whether a credential is currently held (reactive)
    pub fn is_authenticated(&self) -> bool {
        self.token.get().is_some()
    }

    /// Read the credential without registering a reactive dependency;
    /// the API layer calls this from async tasks
    pub fn token_untracked(&self) -> Option<String> {
        self.token.get_untracked()
    }

    /// Current user identity (reactive)
    pub fn user(&self) -> Option<User> {
        self.user.get()
    }

    /// Authenticate against the store. Existing session state is only
    /// mutated on success.
    pub async fn login(&self, email: &str, password: &str) -> Result<(), ApiError> {
        let resp = api::login(email, password).await?;
        self.establish(resp);
        Ok(())
    }

    /// Create an account, then hold its session. Same contract as `login`.
    pub async fn register(&self, name: &str, email: &str, password: &str) -> Result<(), ApiError> {
        let resp = api::register(name, email, password).await?;
        self.establish(resp);
        Ok(())
    }

    /// Drop credential and identity unconditionally
    pub fn logout(&self) {
        clear_storage();
        self.token.set(None);
        self.user.set(None);
    }

    fn establish(&self, resp: AuthResponse) {
        write_storage(&resp.token, &resp.data.user);
        self.token.set(Some(resp.token));
        self.user.set(Some(resp.data.user));
    }
}

/// Get the session from context
pub fn use_session() -> Session {
    expect_context::<Session>()
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

fn read_storage() -> (Option<String>, Option<User>) {
    let Some(storage) = local_storage() else {
        return (None, None);
    };
    let token = storage.get_item(TOKEN_KEY).ok().flatten();
    let user = storage
        .get_item(USER_KEY)
        .ok()
        .flatten()
        .and_then(|raw| parse_stored_user(&raw));
    // A credential without an identity (or the reverse) is half a session;
    // treat it as logged out.
    match (token, user) {
        (Some(token), Some(user)) => (Some(token), Some(user)),
        _ => (None, None),
    }
}

fn write_storage(token: &str, user: &User) {
    let Some(storage) = local_storage() else { return };
    let _ = storage.set_item(TOKEN_KEY, token);
    if let Ok(raw) = serde_json::to_string(user) {
        let _ = storage.set_item(USER_KEY, &raw);
    }
}

fn clear_storage() {
    let Some(storage) = local_storage() else { return };
    let _ = storage.remove_item(TOKEN_KEY);
    let _ = storage.remove_item(USER_KEY);
}

/// Unparseable stored identity means no stored session
fn parse_stored_user(raw: &str) -> Option<User> {
    serde_json::from_str(raw).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_stored_user() {
        let user = parse_stored_user(r#"{"_id":"u1","name":"Ada","email":"a@b.c"}"#).unwrap();
        assert_eq!(user.id, "u1");
        assert_eq!(user.name, "Ada");
    }

    #[test]
    fn test_parse_corrupt_user_is_absent() {
        assert!(parse_stored_user("not json").is_none());
        assert!(parse_stored_user("").is_none());
        assert!(parse_stored_user(r#"{"name":42}"#).is_none());
    }
}
