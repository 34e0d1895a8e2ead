//! Account domain model

use serde::{Deserialize, Serialize};

/// A registered username/password pair in the user directory.
///
/// Passwords are stored in plaintext: this is a mock authentication
/// layer, not a real one, and must never hold real credentials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub username: String,
    pub password: String,
}

impl Account {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_creation() {
        let account = Account::new("alice", "Passw0rd!");
        assert_eq!(account.username, "alice");
        assert_eq!(account.password, "Passw0rd!");
    }

    #[test]
    fn test_persisted_shape() {
        // Persisted form must stay compatible with the "users" blob:
        // an array of {"username": ..., "password": ...} objects.
        let json = serde_json::to_string(&Account::new("bob", "Hunter2!a")).unwrap();
        assert_eq!(json, r#"{"username":"bob","password":"Hunter2!a"}"#);

        let back: Account = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Account::new("bob", "Hunter2!a"));
    }
}
