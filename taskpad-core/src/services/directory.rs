//! Directory service - the persisted registry of accounts

use std::sync::Arc;

use log::{info, warn};

use crate::domain::result::Result;
use crate::domain::Account;
use crate::ports::{StorageService, USERS_KEY};

/// The user directory: every registered account, insertion-order
/// preserved, persisted under the `"users"` key.
///
/// The in-memory sequence and the persisted snapshot are kept in sync at
/// every registration; registration is the only mutator.
pub struct DirectoryService {
    storage: Arc<dyn StorageService>,
    accounts: Vec<Account>,
}

impl DirectoryService {
    /// Create an empty directory bound to a storage service. Call
    /// [`load`](Self::load) before use to pick up persisted accounts.
    pub fn new(storage: Arc<dyn StorageService>) -> Self {
        Self {
            storage,
            accounts: Vec::new(),
        }
    }

    /// Load the persisted directory.
    ///
    /// Fails soft: an absent key, a storage read failure, or a payload
    /// that does not parse as an account list all leave the directory
    /// empty. Nothing propagates to the caller.
    pub fn load(&mut self) {
        let raw = match self.storage.get(USERS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                self.accounts = Vec::new();
                return;
            }
            Err(e) => {
                warn!("event=directory_load_failed reason=storage detail={e}");
                self.accounts = Vec::new();
                return;
            }
        };

        match serde_json::from_str::<Vec<Account>>(&raw) {
            Ok(accounts) => {
                info!("event=directory_loaded accounts={}", accounts.len());
                self.accounts = accounts;
            }
            Err(e) => {
                warn!("event=directory_load_failed reason=malformed detail={e}");
                self.accounts = Vec::new();
            }
        }
    }

    /// Register a new account.
    ///
    /// Appends to the in-memory sequence and synchronously rewrites the
    /// full persisted snapshot. No duplicate-username check is performed:
    /// repeats are accepted and login resolves to the first match in
    /// insertion order.
    pub fn register(
        &mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Account> {
        let account = Account::new(username, password);
        self.accounts.push(account.clone());

        // Keep memory and disk in sync: a failed persist undoes the append.
        let persisted = serde_json::to_string(&self.accounts)
            .map_err(Into::into)
            .and_then(|snapshot| self.storage.set(USERS_KEY, &snapshot));
        if let Err(e) = persisted {
            self.accounts.pop();
            return Err(e);
        }

        info!(
            "event=account_registered username={} accounts={}",
            account.username,
            self.accounts.len()
        );
        Ok(account)
    }

    /// Find the first account matching both username and password
    /// exactly (case-sensitive, no normalization).
    pub fn find_by_credentials(&self, username: &str, password: &str) -> Option<&Account> {
        self.accounts
            .iter()
            .find(|a| a.username == username && a.password == password)
    }

    /// All registered accounts in insertion order.
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemoryStore;

    fn directory_with(store: MemoryStore) -> DirectoryService {
        let mut dir = DirectoryService::new(Arc::new(store));
        dir.load();
        dir
    }

    #[test]
    fn test_load_absent_key_is_empty() {
        let dir = directory_with(MemoryStore::new());
        assert!(dir.is_empty());
    }

    #[test]
    fn test_load_malformed_json_is_empty() {
        let dir = directory_with(MemoryStore::with_value(USERS_KEY, "{{not json"));
        assert!(dir.is_empty());
    }

    #[test]
    fn test_load_wrong_shape_is_empty() {
        let dir = directory_with(MemoryStore::with_value(USERS_KEY, r#"{"username":"a"}"#));
        assert!(dir.is_empty());
    }

    #[test]
    fn test_register_appends_and_persists() {
        let store = Arc::new(MemoryStore::new());
        let mut dir = DirectoryService::new(Arc::clone(&store) as Arc<dyn StorageService>);
        dir.load();

        let account = dir.register("alice", "Passw0rd!").unwrap();
        assert_eq!(account.username, "alice");
        assert_eq!(dir.len(), 1);

        // The persisted snapshot round-trips to the in-memory sequence.
        let raw = store.get(USERS_KEY).unwrap().unwrap();
        let persisted: Vec<Account> = serde_json::from_str(&raw).unwrap();
        assert_eq!(persisted, dir.accounts());
    }

    #[test]
    fn test_register_allows_duplicate_usernames() {
        let mut dir = directory_with(MemoryStore::new());
        dir.register("alice", "Passw0rd!").unwrap();
        dir.register("alice", "Other0ne!").unwrap();
        assert_eq!(dir.len(), 2);

        // Login resolves to the first insertion-order match.
        let found = dir.find_by_credentials("alice", "Passw0rd!").unwrap();
        assert_eq!(found.password, "Passw0rd!");
    }

    #[test]
    fn test_find_is_exact_and_case_sensitive() {
        let mut dir = directory_with(MemoryStore::new());
        dir.register("alice", "Passw0rd!").unwrap();

        assert!(dir.find_by_credentials("alice", "Passw0rd!").is_some());
        assert!(dir.find_by_credentials("Alice", "Passw0rd!").is_none());
        assert!(dir.find_by_credentials("alice", "passw0rd!").is_none());
        assert!(dir.find_by_credentials("alice", "Passw0rd! ").is_none());
        assert!(dir.find_by_credentials("bob", "Passw0rd!").is_none());
    }

    #[test]
    fn test_reload_survives_new_directory_instance() {
        let store = Arc::new(MemoryStore::new());
        {
            let mut dir = DirectoryService::new(Arc::clone(&store) as Arc<dyn StorageService>);
            dir.load();
            dir.register("alice", "Passw0rd!").unwrap();
        }

        let mut reloaded = DirectoryService::new(store);
        reloaded.load();
        assert_eq!(reloaded.len(), 1);
        assert!(reloaded.find_by_credentials("alice", "Passw0rd!").is_some());
    }
}
