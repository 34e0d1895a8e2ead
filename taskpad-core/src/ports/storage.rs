//! Storage port - key-value persistence abstraction

use crate::domain::result::Result;

/// Key under which the serialized user directory lives.
pub const USERS_KEY: &str = "users";

/// Key-value storage abstraction
///
/// This trait defines the only external collaborator of the core: an
/// opaque string-keyed blob store. Implementations (adapters) provide
/// the actual persistence. All access is synchronous; the application
/// is single-threaded and event-driven, so no suspension is needed.
pub trait StorageService: Send + Sync {
    /// Read the value stored under `key`, or `None` if absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, fully overwriting any prior value.
    fn set(&self, key: &str, value: &str) -> Result<()>;
}
