//! Auth service - session state machine and view controller
//!
//! Drives the only stateful control flow in the app: which view is
//! shown while signed out, and the signed-in session that owns the
//! task store. The task store lives inside the signed-in state so
//! logout structurally discards it.

use log::info;

use crate::domain::result::{Error, Result};
use crate::domain::{Account, AuthView};
use crate::services::directory::DirectoryService;
use crate::services::password;
use crate::services::tasks::TaskStore;

/// Session state: signed out showing one of the auth views, or signed
/// in with an account and its in-memory task store.
#[derive(Debug)]
pub enum SessionState {
    SignedOut { view: AuthView },
    SignedIn { account: Account, tasks: TaskStore },
}

/// Session / view controller.
///
/// Starts signed out on the login view and never terminates; every
/// transition either succeeds or leaves the state unchanged with an
/// error describing the user-visible notice.
#[derive(Debug)]
pub struct AuthService {
    state: SessionState,
}

impl Default for AuthService {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthService {
    pub fn new() -> Self {
        Self {
            state: SessionState::SignedOut {
                view: AuthView::Login,
            },
        }
    }

    /// Attempt a login from the login view.
    ///
    /// A credential match signs in with a fresh, empty task store. No
    /// match is `Error::InvalidCredentials` and the state is unchanged.
    pub fn submit_credentials(
        &mut self,
        directory: &DirectoryService,
        username: &str,
        password: &str,
    ) -> Result<Account> {
        self.require_view(AuthView::Login)?;

        let account = directory
            .find_by_credentials(username, password)
            .cloned()
            .ok_or(Error::InvalidCredentials)?;

        info!("event=login_ok username={}", account.username);
        self.state = SessionState::SignedIn {
            account: account.clone(),
            tasks: TaskStore::new(),
        };
        Ok(account)
    }

    /// Attempt a registration from the register view.
    ///
    /// A policy violation blocks the whole registration and leaves both
    /// the state and the directory untouched. Success registers the
    /// account and redirects to the login view without authenticating.
    pub fn submit_registration(
        &mut self,
        directory: &mut DirectoryService,
        username: &str,
        password: &str,
    ) -> Result<Account> {
        self.require_view(AuthView::Register)?;

        password::validate(password)?;
        let account = directory.register(username, password)?;

        self.state = SessionState::SignedOut {
            view: AuthView::Login,
        };
        Ok(account)
    }

    /// Switch to the register view. No-op unless signed out.
    pub fn switch_to_register(&mut self) {
        if let SessionState::SignedOut { view } = &mut self.state {
            *view = AuthView::Register;
        }
    }

    /// Switch to the login view. No-op unless signed out.
    pub fn switch_to_login(&mut self) {
        if let SessionState::SignedOut { view } = &mut self.state {
            *view = AuthView::Login;
        }
    }

    /// Sign out, discarding the task store. Always lands on the login
    /// view; a no-op when already signed out.
    pub fn logout(&mut self) {
        if let SessionState::SignedIn { account, .. } = &self.state {
            info!("event=logout username={}", account.username);
        }
        self.state = SessionState::SignedOut {
            view: AuthView::Login,
        };
    }

    /// The signed-in account, if any.
    pub fn current_account(&self) -> Option<&Account> {
        match &self.state {
            SessionState::SignedIn { account, .. } => Some(account),
            SessionState::SignedOut { .. } => None,
        }
    }

    /// The auth view shown while signed out, if signed out.
    pub fn view(&self) -> Option<AuthView> {
        match &self.state {
            SessionState::SignedOut { view } => Some(*view),
            SessionState::SignedIn { .. } => None,
        }
    }

    pub fn is_signed_in(&self) -> bool {
        matches!(self.state, SessionState::SignedIn { .. })
    }

    /// The session's task store, readable while signed in.
    pub fn tasks(&self) -> Option<&TaskStore> {
        match &self.state {
            SessionState::SignedIn { tasks, .. } => Some(tasks),
            SessionState::SignedOut { .. } => None,
        }
    }

    /// The session's task store, mutable while signed in.
    pub fn tasks_mut(&mut self) -> Option<&mut TaskStore> {
        match &mut self.state {
            SessionState::SignedIn { tasks, .. } => Some(tasks),
            SessionState::SignedOut { .. } => None,
        }
    }

    fn require_view(&self, expected: AuthView) -> Result<()> {
        match &self.state {
            SessionState::SignedOut { view } if *view == expected => Ok(()),
            _ => Err(Error::Other(format!(
                "operation requires the {expected:?} view"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemoryStore;
    use std::sync::Arc;

    fn empty_directory() -> DirectoryService {
        let mut dir = DirectoryService::new(Arc::new(MemoryStore::new()));
        dir.load();
        dir
    }

    fn registered_directory() -> DirectoryService {
        let mut dir = empty_directory();
        dir.register("alice", "Passw0rd!").unwrap();
        dir
    }

    #[test]
    fn test_starts_signed_out_on_login_view() {
        let auth = AuthService::new();
        assert_eq!(auth.view(), Some(AuthView::Login));
        assert!(!auth.is_signed_in());
        assert!(auth.tasks().is_none());
    }

    #[test]
    fn test_login_success_creates_empty_task_store() {
        let dir = registered_directory();
        let mut auth = AuthService::new();

        let account = auth.submit_credentials(&dir, "alice", "Passw0rd!").unwrap();
        assert_eq!(account.username, "alice");
        assert!(auth.is_signed_in());
        assert!(auth.tasks().unwrap().is_empty());
        assert!(auth.view().is_none());
    }

    #[test]
    fn test_login_failure_stays_on_login_view() {
        let dir = registered_directory();
        let mut auth = AuthService::new();

        let err = auth
            .submit_credentials(&dir, "alice", "wrong")
            .unwrap_err();
        assert!(matches!(err, Error::InvalidCredentials));
        assert_eq!(auth.view(), Some(AuthView::Login));
        assert!(!auth.is_signed_in());
    }

    #[test]
    fn test_registration_redirects_to_login_without_authenticating() {
        let mut dir = empty_directory();
        let mut auth = AuthService::new();
        auth.switch_to_register();
        assert_eq!(auth.view(), Some(AuthView::Register));

        auth.submit_registration(&mut dir, "alice", "Passw0rd!")
            .unwrap();
        assert_eq!(auth.view(), Some(AuthView::Login));
        assert!(!auth.is_signed_in());
        assert_eq!(dir.len(), 1);
    }

    #[test]
    fn test_weak_password_blocks_registration_and_stays() {
        let mut dir = empty_directory();
        let mut auth = AuthService::new();
        auth.switch_to_register();

        let err = auth
            .submit_registration(&mut dir, "bob", "weak")
            .unwrap_err();
        assert!(matches!(err, Error::PasswordPolicy(_)));
        assert_eq!(auth.view(), Some(AuthView::Register));
        assert!(dir.is_empty());
    }

    #[test]
    fn test_registration_requires_register_view() {
        let mut dir = empty_directory();
        let mut auth = AuthService::new();

        // Still on the login view.
        assert!(auth
            .submit_registration(&mut dir, "alice", "Passw0rd!")
            .is_err());
        assert!(dir.is_empty());
    }

    #[test]
    fn test_logout_discards_task_store() {
        let dir = registered_directory();
        let mut auth = AuthService::new();
        auth.submit_credentials(&dir, "alice", "Passw0rd!").unwrap();
        auth.tasks_mut().unwrap().add_task("Buy milk");
        assert_eq!(auth.tasks().unwrap().len(), 1);

        auth.logout();
        assert_eq!(auth.view(), Some(AuthView::Login));

        // Re-login starts with a fresh store.
        auth.submit_credentials(&dir, "alice", "Passw0rd!").unwrap();
        assert!(auth.tasks().unwrap().is_empty());
    }

    #[test]
    fn test_view_switches_are_noops_while_signed_in() {
        let dir = registered_directory();
        let mut auth = AuthService::new();
        auth.submit_credentials(&dir, "alice", "Passw0rd!").unwrap();

        auth.switch_to_register();
        auth.switch_to_login();
        assert!(auth.is_signed_in());
    }
}
