use ieam_core::forms::{LoginForm, SignUpForm};
use ieam_core::{Document, Member};
use tokio::sync::watch;
use tracing::{info, warn};

use super::profile::resolve_member;
use super::{AuthError, AuthProvider, AuthUser};
use crate::store::DocumentStore;

/// A signed-in account together with its member record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionUser {
    pub user: AuthUser,
    pub member: Document<Member>,
    pub is_admin: bool,
}

impl SessionUser {
    pub fn welcome(&self) -> String {
        if self.is_admin {
            "Bem-vindo, Administrador!".to_string()
        } else {
            format!("Bem-vindo, {}!", self.user.email)
        }
    }
}

/// The current authenticated user. Created once at startup and handed to
/// whoever needs it; observers hold a [`watch::Receiver`].
#[derive(Debug)]
pub struct Session {
    state: watch::Sender<Option<SessionUser>>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        let (state, _) = watch::channel(None);
        Self { state }
    }

    /// The receiver reports the current value on its first `changed()` and
    /// every change after that. Dropping it unsubscribes.
    pub fn subscribe(&self) -> watch::Receiver<Option<SessionUser>> {
        let mut receiver = self.state.subscribe();
        receiver.mark_changed();
        receiver
    }

    pub fn current(&self) -> Option<SessionUser> {
        self.state.borrow().clone()
    }

    pub fn is_admin(&self) -> bool {
        self.state.borrow().as_ref().is_some_and(|user| user.is_admin)
    }

    pub async fn sign_in(
        &self,
        auth: &dyn AuthProvider,
        store: &dyn DocumentStore,
        form: &LoginForm,
        admin_email: &str,
    ) -> Result<SessionUser, AuthError> {
        form.validate()?;
        let user = auth.sign_in(form.email.trim(), &form.password).await?;
        let (member, is_admin) = resolve_member(store, &user, admin_email).await?;

        let signed_in = SessionUser {
            user,
            member,
            is_admin,
        };
        info!(uid = %signed_in.user.uid, is_admin, "Session started");
        self.state.send_replace(Some(signed_in.clone()));
        Ok(signed_in)
    }

    /// Creates the account. The session stays signed out; the user logs in next.
    pub async fn sign_up(
        &self,
        auth: &dyn AuthProvider,
        form: &SignUpForm,
    ) -> Result<AuthUser, AuthError> {
        form.validate()?;
        auth.sign_up(form.name.trim(), form.email.trim(), &form.password)
            .await
    }

    /// Replaces the member record after a profile edit.
    pub fn update_member(&self, member: Document<Member>) {
        self.state.send_modify(|state| {
            if let Some(user) = state {
                user.member = member;
            }
        });
    }

    pub async fn shutdown(&self, auth: &dyn AuthProvider) -> Result<(), AuthError> {
        let result = auth.sign_out().await;
        if let Err(e) = &result {
            warn!("Sign-out failed: {e}");
        }
        self.state.send_replace(None);
        info!("Session cleared");
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::to_fields;
    use crate::testing::{call_log, calls, FakeAuth, MemoryStore};
    use ieam_core::FormError;

    fn login(email: &str, password: &str) -> LoginForm {
        LoginForm {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn subscribers_see_current_value_then_changes() -> Result<(), Box<dyn std::error::Error>> {
        let log = call_log();
        let auth = FakeAuth::new("u1", log.clone());
        let store = MemoryStore::default();
        let session = Session::new();

        let mut receiver = session.subscribe();
        receiver.changed().await?;
        assert!(receiver.borrow_and_update().is_none());

        session
            .sign_in(&auth, &store, &login("ana@x.com", "secret"), "")
            .await?;
        receiver.changed().await?;
        assert_eq!(
            receiver.borrow_and_update().as_ref().map(|u| u.user.uid.clone()),
            Some("u1".to_string())
        );

        session.shutdown(&auth).await?;
        receiver.changed().await?;
        assert!(receiver.borrow().is_none());
        assert_eq!(calls(&log), vec!["sign_in ana@x.com", "sign_out"]);
        Ok(())
    }

    #[tokio::test]
    async fn admin_member_makes_admin_session() -> Result<(), Box<dyn std::error::Error>> {
        let auth = FakeAuth::new("u1", call_log());
        let store = MemoryStore::default();
        let admin = Member {
            uid: Some("u1".to_string()),
            is_admin: true,
            ..Member::default()
        };
        store.seed("members", "m1", to_fields(&admin)?);
        let session = Session::new();

        let user = session
            .sign_in(&auth, &store, &login("pastor@x.com", "secret"), "")
            .await?;
        assert!(session.is_admin());
        assert_eq!(user.welcome(), "Bem-vindo, Administrador!");
        Ok(())
    }

    #[tokio::test]
    async fn invalid_forms_never_reach_the_provider() -> Result<(), Box<dyn std::error::Error>> {
        let log = call_log();
        let auth = FakeAuth::new("u1", log.clone());
        let store = MemoryStore::default();
        let session = Session::new();

        let result = session.sign_in(&auth, &store, &login("", ""), "").await;
        assert!(matches!(
            result,
            Err(AuthError::Validation(FormError::MissingCredentials))
        ));

        let mismatch = SignUpForm {
            name: "Ana".to_string(),
            email: "ana@x.com".to_string(),
            password: "abc123".to_string(),
            confirm_password: "abc124".to_string(),
        };
        let result = session.sign_up(&auth, &mismatch).await;
        assert!(matches!(
            result,
            Err(AuthError::Validation(FormError::PasswordMismatch))
        ));
        assert!(calls(&log).is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn provider_rejection_leaves_session_signed_out() -> Result<(), Box<dyn std::error::Error>> {
        let auth = FakeAuth::new("u1", call_log());
        let store = MemoryStore::default();
        let session = Session::new();

        let err = session
            .sign_in(&auth, &store, &login("ana@x.com", "wrong"), "")
            .await
            .err()
            .ok_or("expected an error")?;
        assert_eq!(err.to_string(), "Senha incorreta.");
        assert!(session.current().is_none());
        Ok(())
    }

    #[tokio::test]
    async fn sign_up_does_not_sign_in() -> Result<(), Box<dyn std::error::Error>> {
        let auth = FakeAuth::new("u2", call_log());
        let session = Session::new();
        let form = SignUpForm {
            name: "Ana".to_string(),
            email: "ana@x.com".to_string(),
            password: "abc123".to_string(),
            confirm_password: "abc123".to_string(),
        };

        let user = session.sign_up(&auth, &form).await?;
        assert_eq!(user.display_name.as_deref(), Some("Ana"));
        assert!(session.current().is_none());
        Ok(())
    }
}
